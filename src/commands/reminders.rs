// Copyright (c) 2025 Billkeep Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use chrono::Utc;
use serde::Serialize;

use crate::models::NewReminder;
use crate::reports;
use crate::store::Store;
use crate::utils::{maybe_print_json, parse_date, pretty_table};

pub fn handle(store: &mut Store, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => {
            let title = sub.get_one::<String>("title").unwrap();
            let date = parse_date(sub.get_one::<String>("date").unwrap())?;
            let description = sub.get_one::<String>("description").map(|s| s.to_string());
            let bill_id = sub.get_one::<i64>("bill").copied();
            store.add_reminder(NewReminder {
                title: title.to_string(),
                description,
                date,
                bill_id,
            })?;
            println!("Reminder set for '{}' on {}", title, date);
        }
        Some(("list", sub)) => list(store, sub)?,
        Some(("done", sub)) => {
            let id = *sub.get_one::<i64>("id").unwrap();
            store.complete_reminder(id)?;
            println!("Completed reminder {}", id);
        }
        _ => {}
    }
    Ok(())
}

#[derive(Serialize)]
struct ReminderRow {
    id: i64,
    title: String,
    date: String,
    description: String,
    bill: String,
}

fn list(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let today = Utc::now().date_naive();
    let data: Vec<ReminderRow> = reports::upcoming_reminders(&store.reminders, today)
        .into_iter()
        .map(|r| ReminderRow {
            id: r.id,
            title: r.title.clone(),
            date: r.date.to_string(),
            description: r.description.clone().unwrap_or_default(),
            bill: r
                .bill_id
                .and_then(|id| store.bill(id))
                .map(|b| b.name.clone())
                .unwrap_or_default(),
        })
        .collect();
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|r| {
                vec![
                    r.id.to_string(),
                    r.title.clone(),
                    r.date.clone(),
                    r.description.clone(),
                    r.bill.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Id", "Title", "Date", "Description", "Bill"], rows)
        );
    }
    Ok(())
}
