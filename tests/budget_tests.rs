// Copyright (c) 2025 Billkeep Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use billkeep::models::{Bill, Category};
use billkeep::reports;
use chrono::{Days, NaiveDate};
use rust_decimal::Decimal;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 8, 15).unwrap()
}

fn bill(id: i64, cents: i64, due: NaiveDate, category: &str, paid: bool) -> Bill {
    Bill {
        id,
        name: format!("bill-{}", id),
        amount: Decimal::new(cents, 2),
        due_date: due,
        category: category.into(),
        is_paid: paid,
        is_recurring: false,
        recurring_frequency: None,
        recurring_day: None,
        notes: None,
        documents: Vec::new(),
    }
}

fn category(id: i64, name: &str, budget: Option<i64>) -> Category {
    Category {
        id,
        name: name.into(),
        color: "#82ca9d".into(),
        budget: budget.map(Decimal::from),
    }
}

#[test]
fn remaining_is_budget_minus_all_time_actual() {
    // Utilities budgeted 100 with bills of 60 and 50: actual 110,
    // remaining -10, regardless of due date or paid status.
    let categories = vec![category(1, "Utilities", Some(100))];
    let bills = vec![
        bill(1, 6000, today() + Days::new(2), "Utilities", false),
        bill(2, 5000, today() - Days::new(90), "Utilities", true),
    ];

    let summaries = reports::budget_summaries(&bills, &categories);
    assert_eq!(summaries.len(), 1);
    assert_eq!(summaries[0].budgeted, Decimal::from(100));
    assert_eq!(summaries[0].actual, Decimal::new(11000, 2));
    assert_eq!(summaries[0].remaining, Decimal::new(-1000, 2));
}

#[test]
fn actual_matches_category_names_case_sensitively() {
    let categories = vec![category(1, "Utilities", Some(100))];
    let bills = vec![
        bill(1, 6000, today(), "Utilities", false),
        bill(2, 5000, today(), "utilities", false),
    ];
    let summaries = reports::budget_summaries(&bills, &categories);
    assert_eq!(summaries[0].actual, Decimal::new(6000, 2));
}

#[test]
fn unbudgeted_categories_stay_in_raw_summaries() {
    let categories = vec![
        category(1, "Utilities", Some(100)),
        category(2, "Transportation", None),
    ];
    let bills = vec![bill(1, 9000, today(), "Transportation", false)];

    let summaries = reports::budget_summaries(&bills, &categories);
    assert_eq!(summaries.len(), 2);
    assert_eq!(summaries[1].budgeted, Decimal::ZERO);
    assert_eq!(summaries[1].remaining, Decimal::new(-9000, 2));
}

#[test]
fn ranking_drops_unbudgeted_rows_and_sorts_by_utilization() {
    let categories = vec![
        category(1, "Housing", Some(1000)),
        category(2, "Utilities", Some(100)),
        category(3, "Transportation", None),
    ];
    let bills = vec![
        // Housing at 50% of budget, Utilities at 110%.
        bill(1, 50000, today(), "Housing", false),
        bill(2, 11000, today(), "Utilities", false),
        bill(3, 9000, today(), "Transportation", false),
    ];

    let ranked = reports::ranked_budget_summaries(&bills, &categories);
    let names: Vec<&str> = ranked.iter().map(|s| s.category.as_str()).collect();
    assert_eq!(names, vec!["Utilities", "Housing"]);
}

#[test]
fn summaries_follow_category_order() {
    let categories = vec![
        category(1, "B", Some(10)),
        category(2, "A", Some(10)),
    ];
    let summaries = reports::budget_summaries(&[], &categories);
    let names: Vec<&str> = summaries.iter().map(|s| s.category.as_str()).collect();
    assert_eq!(names, vec!["B", "A"]);
}
