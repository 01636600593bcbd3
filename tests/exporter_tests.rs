// Copyright (c) 2025 Billkeep Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use billkeep::models::NewBill;
use billkeep::store::Store;
use billkeep::{cli, commands::exporter};
use chrono::{NaiveDate, TimeZone, Utc};
use rust_decimal::Decimal;
use serde_json::json;
use tempfile::tempdir;

fn base_store() -> Store {
    let mut store = Store::new();
    let id = store
        .add_bill(NewBill {
            name: "Internet".into(),
            amount: Decimal::new(5999, 2),
            due_date: NaiveDate::from_ymd_opt(2025, 8, 7).unwrap(),
            category: "Utilities".into(),
            is_recurring: false,
            recurring_frequency: None,
            recurring_day: None,
            notes: None,
        })
        .unwrap();
    store
        .update_bill_status(id, true, Utc.with_ymd_and_hms(2025, 8, 7, 9, 0, 0).unwrap())
        .unwrap();
    store
}

fn run_export(store: &Store, args: &[&str]) -> anyhow::Result<()> {
    let cli = cli::build_cli();
    let matches = cli.get_matches_from(args.iter().copied());
    if let Some(("export", export_m)) = matches.subcommand() {
        exporter::handle(store, export_m)
    } else {
        panic!("no export subcommand");
    }
}

#[test]
fn export_history_writes_pretty_json() {
    let store = base_store();
    let dir = tempdir().unwrap();
    let out_path = dir.path().join("history.json");
    let out_str = out_path.to_string_lossy().to_string();

    run_export(
        &store,
        &[
            "billkeep", "export", "history", "--format", "json", "--out", &out_str,
        ],
    )
    .unwrap();

    let contents = std::fs::read_to_string(&out_path).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&contents).unwrap();
    assert_eq!(
        parsed,
        json!([
            {
                "date": "2025-08-07T09:00:00+00:00",
                "bill": "Internet",
                "amount": "59.99",
                "category": "Utilities"
            }
        ])
    );
}

#[test]
fn export_bills_writes_csv_with_header() {
    let store = base_store();
    let dir = tempdir().unwrap();
    let out_path = dir.path().join("bills.csv");
    let out_str = out_path.to_string_lossy().to_string();

    run_export(
        &store,
        &[
            "billkeep", "export", "bills", "--format", "csv", "--out", &out_str,
        ],
    )
    .unwrap();

    let contents = std::fs::read_to_string(&out_path).unwrap();
    let mut lines = contents.lines();
    assert_eq!(
        lines.next().unwrap(),
        "id,name,amount,due_date,category,paid,recurring,notes"
    );
    let row = lines.next().unwrap();
    assert!(row.contains("Internet"));
    assert!(row.contains("59.99"));
    assert!(row.contains("true"));
}

#[test]
fn export_rejects_unknown_format() {
    let store = base_store();
    let dir = tempdir().unwrap();
    let out_path = dir.path().join("bills.xml");
    let out_str = out_path.to_string_lossy().to_string();

    let res = run_export(
        &store,
        &[
            "billkeep", "export", "bills", "--format", "xml", "--out", &out_str,
        ],
    );
    assert!(res.is_err());
    assert!(!out_path.exists());
}
