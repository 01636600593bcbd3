// Copyright (c) 2025 Billkeep Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{crate_version, value_parser, Arg, ArgAction, Command};

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print as pretty JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print as JSON lines"),
    )
}

fn id_arg() -> Arg {
    Arg::new("id")
        .required(true)
        .value_parser(value_parser!(i64))
        .help("Entity id")
}

pub fn build_cli() -> Command {
    Command::new("billkeep")
        .about("Household bill tracking, category budgets, and due-date reminders")
        .version(crate_version!())
        .subcommand(
            Command::new("bill")
                .about("Manage bills")
                .subcommand(
                    Command::new("add")
                        .about("Add a bill")
                        .arg(Arg::new("name").long("name").required(true))
                        .arg(Arg::new("amount").long("amount").required(true))
                        .arg(
                            Arg::new("due")
                                .long("due")
                                .required(true)
                                .help("Due date (YYYY-MM-DD)"),
                        )
                        .arg(Arg::new("category").long("category").required(true))
                        .arg(
                            Arg::new("repeat")
                                .long("repeat")
                                .help("weekly|monthly|quarterly|yearly"),
                        )
                        .arg(
                            Arg::new("repeat-day")
                                .long("repeat-day")
                                .value_parser(value_parser!(u32)),
                        )
                        .arg(Arg::new("notes").long("notes")),
                )
                .subcommand(json_flags(
                    Command::new("list")
                        .about("List bills with due status")
                        .arg(
                            Arg::new("upcoming")
                                .long("upcoming")
                                .action(ArgAction::SetTrue)
                                .help("Only unpaid bills due in the next 30 days"),
                        )
                        .arg(Arg::new("category").long("category")),
                ))
                .subcommand(Command::new("pay").about("Mark a bill paid").arg(id_arg()))
                .subcommand(
                    Command::new("unpay")
                        .about("Mark a bill unpaid")
                        .arg(id_arg()),
                )
                .subcommand(Command::new("rm").about("Delete a bill").arg(id_arg())),
        )
        .subcommand(
            Command::new("category")
                .about("Manage categories")
                .subcommand(
                    Command::new("add")
                        .about("Add a category")
                        .arg(Arg::new("name").long("name").required(true))
                        .arg(
                            Arg::new("color")
                                .long("color")
                                .default_value("#8884d8")
                                .help("Hex color for charts"),
                        )
                        .arg(
                            Arg::new("budget")
                                .long("budget")
                                .help("Optional monthly budget cap"),
                        ),
                )
                .subcommand(json_flags(Command::new("list").about("List categories"))),
        )
        .subcommand(
            Command::new("reminder")
                .about("Manage reminders")
                .subcommand(
                    Command::new("add")
                        .about("Add a reminder")
                        .arg(Arg::new("title").long("title").required(true))
                        .arg(
                            Arg::new("date")
                                .long("date")
                                .required(true)
                                .help("Reminder date (YYYY-MM-DD)"),
                        )
                        .arg(Arg::new("description").long("description"))
                        .arg(
                            Arg::new("bill")
                                .long("bill")
                                .value_parser(value_parser!(i64))
                                .help("Related bill id"),
                        ),
                )
                .subcommand(json_flags(
                    Command::new("list").about("List upcoming reminders"),
                ))
                .subcommand(
                    Command::new("done")
                        .about("Mark a reminder completed")
                        .arg(id_arg()),
                ),
        )
        .subcommand(json_flags(
            Command::new("dashboard").about("Monthly totals, due-soon alerts and upcoming bills"),
        ))
        .subcommand(
            Command::new("budget").about("Budget analysis").subcommand(
                json_flags(
                    Command::new("report")
                        .about("Budget vs. actual per category")
                        .arg(
                            Arg::new("ranked")
                                .long("ranked")
                                .action(ArgAction::SetTrue)
                                .help("Rank by budget utilization, excluding unbudgeted rows"),
                        ),
                ),
            ),
        )
        .subcommand(
            Command::new("history")
                .about("Payment history")
                .subcommand(json_flags(
                    Command::new("list").about("Recent payments, newest first"),
                ))
                .subcommand(json_flags(
                    Command::new("trends")
                        .about("Rolling monthly payment totals")
                        .arg(
                            Arg::new("months")
                                .long("months")
                                .value_parser(value_parser!(usize))
                                .default_value("6"),
                        )
                        .arg(
                            Arg::new("by-category")
                                .long("by-category")
                                .action(ArgAction::SetTrue)
                                .help("Split each month per category"),
                        ),
                )),
        )
        .subcommand(
            Command::new("docs")
                .about("Bill documents")
                .subcommand(
                    Command::new("attach")
                        .about("Attach document metadata to a bill")
                        .arg(
                            Arg::new("bill")
                                .long("bill")
                                .required(true)
                                .value_parser(value_parser!(i64)),
                        )
                        .arg(Arg::new("name").long("name").required(true))
                        .arg(
                            Arg::new("size")
                                .long("size")
                                .required(true)
                                .value_parser(value_parser!(u64))
                                .help("Size in bytes"),
                        ),
                )
                .subcommand(json_flags(
                    Command::new("list").about("List documents across bills"),
                )),
        )
        .subcommand(
            Command::new("export")
                .about("Export data to a file")
                .subcommand(export_args(Command::new("bills").about("Export bills")))
                .subcommand(export_args(
                    Command::new("history").about("Export payment history"),
                )),
        )
}

fn export_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("format")
            .long("format")
            .required(true)
            .help("csv|json"),
    )
    .arg(Arg::new("out").long("out").required(true))
}
