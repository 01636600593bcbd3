// Copyright (c) 2025 Billkeep Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use chrono::Utc;
use serde::Serialize;

use crate::reports;
use crate::store::Store;
use crate::utils::{fmt_money, maybe_print_json, pretty_table};

pub fn handle(store: &Store, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("list", sub)) => list(store, sub)?,
        Some(("trends", sub)) => trends(store, sub)?,
        _ => {}
    }
    Ok(())
}

#[derive(Serialize)]
struct PaymentRow {
    date: String,
    bill: String,
    category: String,
    amount: String,
}

fn list(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let data: Vec<PaymentRow> = reports::recent_payments(&store.payment_history)
        .into_iter()
        .map(|p| PaymentRow {
            date: p.date.format("%Y-%m-%d %H:%M").to_string(),
            bill: p.bill_name.clone(),
            category: p.category.clone(),
            amount: fmt_money(&p.amount),
        })
        .collect();
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|p| {
                vec![
                    p.date.clone(),
                    p.bill.clone(),
                    p.category.clone(),
                    p.amount.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Date", "Bill", "Category", "Amount"], rows)
        );
    }
    Ok(())
}

fn trends(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let today = Utc::now().date_naive();
    let months = *sub.get_one::<usize>("months").unwrap();
    if sub.get_flag("by-category") {
        let series =
            reports::category_trend(&store.payment_history, &store.categories, months, today);
        if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &series)? {
            let mut rows = Vec::new();
            for point in &series {
                if point.totals.is_empty() {
                    rows.push(vec![point.label.clone(), String::new(), String::new()]);
                }
                for (category, total) in &point.totals {
                    rows.push(vec![
                        point.label.clone(),
                        category.clone(),
                        fmt_money(total),
                    ]);
                }
            }
            println!("{}", pretty_table(&["Month", "Category", "Paid"], rows));
        }
    } else {
        let series = reports::monthly_totals(&store.payment_history, months, today);
        if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &series)? {
            let rows: Vec<Vec<String>> = series
                .iter()
                .map(|p| vec![p.label.clone(), fmt_money(&p.total)])
                .collect();
            println!("{}", pretty_table(&["Month", "Paid"], rows));
        }
    }
    Ok(())
}
