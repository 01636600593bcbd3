// Copyright (c) 2025 Billkeep Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use chrono::{Datelike, Days, Months, NaiveDate};
use comfy_table::{presets::UTF8_FULL, Cell, Table};
use rust_decimal::Decimal;

use crate::models::RecurringFrequency;

pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .with_context(|| format!("Invalid date '{}', expected YYYY-MM-DD", s))
}

pub fn parse_decimal(s: &str) -> Result<Decimal> {
    s.parse::<Decimal>()
        .with_context(|| format!("Invalid decimal '{}'", s))
}

pub fn parse_frequency(s: &str) -> Result<RecurringFrequency> {
    match s.to_lowercase().as_str() {
        "weekly" => Ok(RecurringFrequency::Weekly),
        "monthly" => Ok(RecurringFrequency::Monthly),
        "quarterly" => Ok(RecurringFrequency::Quarterly),
        "yearly" => Ok(RecurringFrequency::Yearly),
        _ => Err(anyhow::anyhow!(
            "Invalid frequency '{}', expected weekly|monthly|quarterly|yearly",
            s
        )),
    }
}

pub fn fmt_money(d: &Decimal) -> String {
    format!("${:.2}", d.round_dp(2))
}

/// Calendar-day difference between a due date and today. Dates are already
/// day-granular, so a bill due today yields 0 regardless of time of day.
pub fn days_until_due(due: NaiveDate, today: NaiveDate) -> i64 {
    (due - today).num_days()
}

/// First and last day of the calendar month containing `date`, inclusive.
pub fn month_bounds(date: NaiveDate) -> (NaiveDate, NaiveDate) {
    // with_day(1) cannot fail for an existing date
    let first = date.with_day(1).unwrap_or(date);
    let last = first + Months::new(1) - Days::new(1);
    (first, last)
}

/// Abbreviated month name used to label trend buckets.
pub fn month_label(date: NaiveDate) -> String {
    date.format("%b").to_string()
}

pub fn pretty_table(headers: &[&str], rows: Vec<Vec<String>>) -> Table {
    let mut t = Table::new();
    t.load_preset(UTF8_FULL);
    t.set_header(headers.iter().map(|h| Cell::new(*h)));
    for r in rows {
        t.add_row(r.into_iter().map(Cell::new));
    }
    t
}

pub fn maybe_print_json<T: serde::Serialize>(
    json_flag: bool,
    jsonl_flag: bool,
    v: &T,
) -> Result<bool> {
    if json_flag {
        println!("{}", serde_json::to_string_pretty(v)?);
        return Ok(true);
    }
    if jsonl_flag {
        // If v is an array, stream each element; else stream single line
        let val = serde_json::to_value(v)?;
        if let Some(arr) = val.as_array() {
            for item in arr {
                println!("{}", serde_json::to_string(item)?);
            }
        } else {
            println!("{}", serde_json::to_string(&val)?);
        }
        return Ok(true);
    }
    Ok(false)
}

pub fn fmt_size(bytes: u64) -> String {
    if bytes >= 1_048_576 {
        format!("{:.1} MB", bytes as f64 / 1_048_576.0)
    } else if bytes >= 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{} B", bytes)
    }
}
