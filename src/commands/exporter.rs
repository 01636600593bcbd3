// Copyright (c) 2025 Billkeep Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{bail, Result};
use serde_json::json;

use crate::store::Store;

pub fn handle(store: &Store, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("bills", sub)) => export_bills(store, sub),
        Some(("history", sub)) => export_history(store, sub),
        _ => Ok(()),
    }
}

fn export_bills(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let fmt = sub.get_one::<String>("format").unwrap().to_lowercase();
    let out = sub.get_one::<String>("out").unwrap();

    match fmt.as_str() {
        "csv" => {
            let mut wtr = csv::Writer::from_path(out)?;
            wtr.write_record([
                "id", "name", "amount", "due_date", "category", "paid", "recurring", "notes",
            ])?;
            for b in &store.bills {
                wtr.write_record([
                    b.id.to_string(),
                    b.name.clone(),
                    b.amount.to_string(),
                    b.due_date.to_string(),
                    b.category.clone(),
                    b.is_paid.to_string(),
                    b.recurring_frequency
                        .map(|f| f.to_string())
                        .unwrap_or_default(),
                    b.notes.clone().unwrap_or_default(),
                ])?;
            }
            wtr.flush()?;
        }
        "json" => {
            std::fs::write(out, serde_json::to_string_pretty(&store.bills)?)?;
        }
        _ => bail!("Unknown format: {} (use csv|json)", fmt),
    }
    println!("Exported bills to {}", out);
    Ok(())
}

fn export_history(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let fmt = sub.get_one::<String>("format").unwrap().to_lowercase();
    let out = sub.get_one::<String>("out").unwrap();

    match fmt.as_str() {
        "csv" => {
            let mut wtr = csv::Writer::from_path(out)?;
            wtr.write_record(["date", "bill", "amount", "category"])?;
            for p in &store.payment_history {
                wtr.write_record([
                    p.date.to_rfc3339(),
                    p.bill_name.clone(),
                    p.amount.to_string(),
                    p.category.clone(),
                ])?;
            }
            wtr.flush()?;
        }
        "json" => {
            let items: Vec<serde_json::Value> = store
                .payment_history
                .iter()
                .map(|p| {
                    json!({
                        "date": p.date.to_rfc3339(),
                        "bill": p.bill_name,
                        "amount": p.amount.to_string(),
                        "category": p.category,
                    })
                })
                .collect();
            std::fs::write(out, serde_json::to_string_pretty(&items)?)?;
        }
        _ => bail!("Unknown format: {} (use csv|json)", fmt),
    }
    println!("Exported payment history to {}", out);
    Ok(())
}
