// Copyright (c) 2025 Billkeep Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use chrono::{NaiveDate, Utc};
use serde::Serialize;

use crate::models::NewBill;
use crate::reports::{self, DueStatus};
use crate::store::Store;
use crate::utils::{
    days_until_due, fmt_money, maybe_print_json, parse_date, parse_decimal, parse_frequency,
    pretty_table,
};

pub fn handle(store: &mut Store, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(store, sub)?,
        Some(("list", sub)) => list(store, sub)?,
        Some(("pay", sub)) => set_paid(store, sub, true)?,
        Some(("unpay", sub)) => set_paid(store, sub, false)?,
        Some(("rm", sub)) => rm(store, sub)?,
        _ => {}
    }
    Ok(())
}

fn add(store: &mut Store, sub: &clap::ArgMatches) -> Result<()> {
    let name = sub.get_one::<String>("name").unwrap();
    let amount = parse_decimal(sub.get_one::<String>("amount").unwrap())?;
    let due_date = parse_date(sub.get_one::<String>("due").unwrap())?;
    let category = sub.get_one::<String>("category").unwrap();
    let recurring_frequency = sub
        .get_one::<String>("repeat")
        .map(|s| parse_frequency(s))
        .transpose()?;
    let recurring_day = sub.get_one::<u32>("repeat-day").copied();
    let notes = sub.get_one::<String>("notes").map(|s| s.to_string());

    let id = store.add_bill(NewBill {
        name: name.to_string(),
        amount,
        due_date,
        category: category.to_string(),
        is_recurring: recurring_frequency.is_some(),
        recurring_frequency,
        recurring_day,
        notes,
    })?;
    println!(
        "Added bill '{}' ({}) due {} [id {}]",
        name,
        fmt_money(&amount),
        due_date,
        id
    );
    Ok(())
}

#[derive(Serialize)]
pub struct BillRow {
    pub id: i64,
    pub name: String,
    pub amount: String,
    pub due: String,
    pub days: i64,
    pub category: String,
    pub status: String,
    pub recurring: String,
}

pub fn query_rows(store: &Store, sub: &clap::ArgMatches, today: NaiveDate) -> Vec<BillRow> {
    let bills: Vec<&crate::models::Bill> = if sub.get_flag("upcoming") {
        reports::upcoming_bills(&store.bills, today)
    } else {
        let mut all: Vec<&crate::models::Bill> = store.bills.iter().collect();
        all.sort_by_key(|b| b.due_date);
        all
    };
    bills
        .into_iter()
        .filter(|b| {
            sub.get_one::<String>("category")
                .map(|c| &b.category == c)
                .unwrap_or(true)
        })
        .map(|b| BillRow {
            id: b.id,
            name: b.name.clone(),
            amount: fmt_money(&b.amount),
            due: b.due_date.to_string(),
            days: days_until_due(b.due_date, today),
            category: b.category.clone(),
            status: if b.is_paid {
                "paid".to_string()
            } else {
                DueStatus::classify(b.due_date, today).as_str().to_string()
            },
            recurring: b
                .recurring_frequency
                .map(|f| f.to_string())
                .unwrap_or_default(),
        })
        .collect()
}

fn list(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let today = Utc::now().date_naive();
    let data = query_rows(store, sub, today);
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|r| {
                vec![
                    r.id.to_string(),
                    r.name.clone(),
                    r.amount.clone(),
                    r.due.clone(),
                    r.days.to_string(),
                    r.category.clone(),
                    r.status.clone(),
                    r.recurring.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["Id", "Name", "Amount", "Due", "In (days)", "Category", "Status", "Repeats"],
                rows,
            )
        );
    }
    Ok(())
}

fn set_paid(store: &mut Store, sub: &clap::ArgMatches, is_paid: bool) -> Result<()> {
    let id = *sub.get_one::<i64>("id").unwrap();
    store.update_bill_status(id, is_paid, Utc::now())?;
    let name = store.bill(id).map(|b| b.name.clone()).unwrap_or_default();
    if is_paid {
        println!("Marked '{}' paid and recorded the payment", name);
    } else {
        println!("Marked '{}' unpaid (payment history kept)", name);
    }
    Ok(())
}

fn rm(store: &mut Store, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").unwrap();
    store.delete_bill(id);
    println!("Deleted bill {}", id);
    Ok(())
}
