// Copyright (c) 2025 Billkeep Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::reports;
use crate::store::Store;
use crate::utils::{fmt_money, maybe_print_json, pretty_table};

pub fn handle(store: &Store, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("report", sub)) => report(store, sub)?,
        _ => {}
    }
    Ok(())
}

fn report(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let summaries = if sub.get_flag("ranked") {
        reports::ranked_budget_summaries(&store.bills, &store.categories)
    } else {
        reports::budget_summaries(&store.bills, &store.categories)
    };
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &summaries)? {
        let rows: Vec<Vec<String>> = summaries
            .iter()
            .map(|s| {
                vec![
                    s.category.clone(),
                    fmt_money(&s.budgeted),
                    fmt_money(&s.actual),
                    fmt_money(&s.remaining),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Category", "Budgeted", "Actual", "Remaining"], rows)
        );
    }
    Ok(())
}
