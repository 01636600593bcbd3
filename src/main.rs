// Copyright (c) 2025 Billkeep Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use chrono::Utc;

use billkeep::{cli, commands, store::Store};

fn main() -> Result<()> {
    let cli = cli::build_cli();
    let matches = cli.get_matches();

    // State lives for this invocation only: seeded from fixtures, dropped on
    // exit. There is no persistence layer.
    let today = Utc::now().date_naive();
    let mut store = Store::seeded(today);

    match matches.subcommand() {
        Some(("bill", sub)) => commands::bills::handle(&mut store, sub)?,
        Some(("category", sub)) => commands::categories::handle(&mut store, sub)?,
        Some(("reminder", sub)) => commands::reminders::handle(&mut store, sub)?,
        Some(("dashboard", sub)) => commands::dashboard::handle(&store, sub)?,
        Some(("budget", sub)) => commands::budgets::handle(&store, sub)?,
        Some(("history", sub)) => commands::history::handle(&store, sub)?,
        Some(("docs", sub)) => commands::documents::handle(&mut store, sub)?,
        Some(("export", sub)) => commands::exporter::handle(&store, sub)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
