// Copyright (c) 2025 Billkeep Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use chrono::Utc;
use rust_decimal::Decimal;
use serde_json::json;

use crate::reports;
use crate::store::Store;
use crate::utils::{days_until_due, fmt_money, maybe_print_json, pretty_table};

pub fn handle(store: &Store, m: &clap::ArgMatches) -> Result<()> {
    let today = Utc::now().date_naive();

    let due_this_month = reports::bills_due_in_month(&store.bills, today);
    let total_due = reports::total_due_this_month(&store.bills, today);
    let paid_this_month = reports::payments_in_month(&store.payment_history, today);
    let total_paid = reports::total_paid_this_month(&store.payment_history, today);
    let due_soon = reports::bills_due_within(&store.bills, today, 7);
    let due_soon_total: Decimal = due_soon.iter().map(|b| b.amount).sum();
    let due_urgent = reports::bills_due_within(&store.bills, today, 3);
    let largest = reports::largest_category(&store.bills, &store.categories);
    let upcoming = reports::upcoming_bills(&store.bills, today);
    let reminders = reports::upcoming_reminders(&store.reminders, today);

    if m.get_flag("json") || m.get_flag("jsonl") {
        let value = json!({
            "total_due_this_month": total_due,
            "bills_remaining": due_this_month.len(),
            "total_paid_this_month": total_paid,
            "payments_made": paid_this_month.len(),
            "largest_category": largest.as_ref().map(|c| c.name.clone()),
            "largest_category_share": largest.as_ref().map(|c| {
                reports::category_share(&store.bills, today, &c.name).round_dp(0)
            }),
            "due_next_7_days": due_soon.len(),
            "due_next_7_days_total": due_soon_total,
            "due_next_3_days": due_urgent.len(),
        });
        maybe_print_json(m.get_flag("json"), m.get_flag("jsonl"), &value)?;
        return Ok(());
    }

    let mut cards = vec![
        vec![
            "Total due this month".to_string(),
            fmt_money(&total_due),
            format!("{} bills remaining", due_this_month.len()),
        ],
        vec![
            "Paid this month".to_string(),
            fmt_money(&total_paid),
            format!("{} payments made", paid_this_month.len()),
        ],
        vec![
            "Upcoming bills".to_string(),
            due_soon.len().to_string(),
            "Due in the next 7 days".to_string(),
        ],
    ];
    if let Some(c) = &largest {
        let share = reports::category_share(&store.bills, today, &c.name).round_dp(0);
        cards.insert(
            2,
            vec![
                "Largest category".to_string(),
                c.name.clone(),
                format!("{}% of monthly expenses", share),
            ],
        );
    }
    println!("{}", pretty_table(&["Metric", "Value", "Detail"], cards));

    if !due_urgent.is_empty() {
        println!(
            "Bills due soon: {} bill{} due in the next 3 days.",
            due_urgent.len(),
            if due_urgent.len() > 1 { "s" } else { "" }
        );
    }
    if !due_soon.is_empty() {
        println!(
            "Attention required: {} bill{} due in the next 7 days totaling {}.",
            due_soon.len(),
            if due_soon.len() > 1 { "s" } else { "" },
            fmt_money(&due_soon_total)
        );
    }

    if !upcoming.is_empty() {
        let rows: Vec<Vec<String>> = upcoming
            .iter()
            .map(|b| {
                vec![
                    b.name.clone(),
                    b.category.clone(),
                    b.due_date.to_string(),
                    format!("{} days", days_until_due(b.due_date, today)),
                    fmt_money(&b.amount),
                ]
            })
            .collect();
        println!("\nUpcoming bills (next 30 days)");
        println!(
            "{}",
            pretty_table(&["Name", "Category", "Due", "In", "Amount"], rows)
        );
    } else {
        println!("\nNo upcoming bills for the next 30 days");
    }

    if !reminders.is_empty() {
        let rows: Vec<Vec<String>> = reminders
            .iter()
            .map(|r| {
                vec![
                    r.title.clone(),
                    r.date.to_string(),
                    r.description.clone().unwrap_or_default(),
                ]
            })
            .collect();
        println!("\nReminders");
        println!("{}", pretty_table(&["Title", "Date", "Description"], rows));
    }

    Ok(())
}
