// Copyright (c) 2025 Billkeep Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use billkeep::models::{Category, PaymentHistory};
use billkeep::reports;
use chrono::NaiveDate;
use rust_decimal::Decimal;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 8, 15).unwrap()
}

fn payment(id: i64, cents: i64, y: i32, m: u32, d: u32, category: &str) -> PaymentHistory {
    PaymentHistory {
        id,
        bill_id: id,
        bill_name: format!("bill-{}", id),
        amount: Decimal::new(cents, 2),
        date: NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap()
            .and_utc(),
        category: category.into(),
    }
}

fn category(id: i64, name: &str) -> Category {
    Category {
        id,
        name: name.into(),
        color: "#ff8042".into(),
        budget: None,
    }
}

#[test]
fn series_always_has_n_buckets_oldest_first() {
    let series = reports::monthly_totals(&[], 6, today());
    assert_eq!(series.len(), 6);
    let labels: Vec<&str> = series.iter().map(|p| p.label.as_str()).collect();
    assert_eq!(labels, vec!["Mar", "Apr", "May", "Jun", "Jul", "Aug"]);
    assert!(series.iter().all(|p| p.total == Decimal::ZERO));
}

#[test]
fn twelve_month_series_spans_the_year_boundary() {
    let series = reports::monthly_totals(&[], 12, today());
    assert_eq!(series.len(), 12);
    assert_eq!(series[0].label, "Sep");
    assert_eq!(series[11].label, "Aug");
}

#[test]
fn totals_bucket_by_calendar_month_and_year() {
    let history = vec![
        payment(1, 5999, 2025, 8, 1, "Utilities"),
        payment(2, 5999, 2025, 8, 30, "Utilities"),
        payment(3, 145000, 2025, 6, 1, "Housing"),
        // Same month number, different year: outside the window.
        payment(4, 99900, 2024, 8, 1, "Housing"),
    ];
    let series = reports::monthly_totals(&history, 6, today());
    assert_eq!(series[5].label, "Aug");
    assert_eq!(series[5].total, Decimal::new(11998, 2));
    assert_eq!(series[3].label, "Jun");
    assert_eq!(series[3].total, Decimal::new(145000, 2));
    assert_eq!(series[4].total, Decimal::ZERO);
}

#[test]
fn category_trend_is_sparse() {
    let categories = vec![category(1, "Housing"), category(2, "Utilities")];
    let history = vec![
        payment(1, 145000, 2025, 8, 1, "Housing"),
        payment(2, 5999, 2025, 7, 1, "Utilities"),
    ];
    let series = reports::category_trend(&history, &categories, 6, today());
    assert_eq!(series.len(), 6);

    let august = &series[5];
    assert_eq!(august.label, "Aug");
    assert_eq!(august.totals.len(), 1);
    assert_eq!(august.totals["Housing"], Decimal::new(145000, 2));
    assert!(!august.totals.contains_key("Utilities"));

    let july = &series[4];
    assert_eq!(july.totals.len(), 1);
    assert_eq!(july.totals["Utilities"], Decimal::new(5999, 2));

    // An empty month keeps its bucket with no categories at all.
    assert!(series[0].totals.is_empty());
}

#[test]
fn category_trend_ignores_unlisted_categories() {
    let categories = vec![category(1, "Housing")];
    let history = vec![payment(1, 5999, 2025, 8, 1, "SomethingElse")];
    let series = reports::category_trend(&history, &categories, 6, today());
    assert!(series[5].totals.is_empty());
}
