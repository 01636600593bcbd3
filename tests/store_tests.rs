// Copyright (c) 2025 Billkeep Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use billkeep::models::{NewBill, NewCategory, NewReminder};
use billkeep::store::{Store, StoreError};
use chrono::{DateTime, Days, NaiveDate, TimeZone, Utc};
use rust_decimal::Decimal;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 8, 15).unwrap()
}

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 8, 15, 12, 0, 0).unwrap()
}

fn electricity(amount_cents: i64) -> NewBill {
    NewBill {
        name: "Electricity".into(),
        amount: Decimal::new(amount_cents, 2),
        due_date: today() + Days::new(2),
        category: "Utilities".into(),
        is_recurring: false,
        recurring_frequency: None,
        recurring_day: None,
        notes: None,
    }
}

#[test]
fn paying_appends_exactly_one_snapshot_row() {
    let mut store = Store::new();
    let id = store.add_bill(electricity(12000)).unwrap();

    store.update_bill_status(id, true, now()).unwrap();

    assert!(store.bill(id).unwrap().is_paid);
    assert_eq!(store.payment_history.len(), 1);
    let payment = &store.payment_history[0];
    assert_eq!(payment.bill_id, id);
    assert_eq!(payment.bill_name, "Electricity");
    assert_eq!(payment.amount, Decimal::new(12000, 2));
    assert_eq!(payment.category, "Utilities");
    assert_eq!(payment.date, now());

    // Setting the current state again is a no-op, not a second payment.
    store.update_bill_status(id, true, now()).unwrap();
    assert_eq!(store.payment_history.len(), 1);
}

#[test]
fn unpaying_keeps_history_and_repaying_records_again() {
    let mut store = Store::new();
    let id = store.add_bill(electricity(12000)).unwrap();

    store.update_bill_status(id, true, now()).unwrap();
    store.update_bill_status(id, false, now()).unwrap();

    assert!(!store.bill(id).unwrap().is_paid);
    assert_eq!(store.payment_history.len(), 1);

    store.update_bill_status(id, true, now()).unwrap();
    assert_eq!(store.payment_history.len(), 2);
}

#[test]
fn deleting_a_bill_orphans_its_history() {
    let mut store = Store::new();
    let id = store.add_bill(electricity(12000)).unwrap();
    store.update_bill_status(id, true, now()).unwrap();

    store.delete_bill(id);

    assert!(store.bill(id).is_none());
    assert_eq!(store.payment_history.len(), 1);
    assert_eq!(store.payment_history[0].bill_id, id);
    // Deleting an unknown id is silently ignored.
    store.delete_bill(9999);
}

#[test]
fn updating_unknown_bill_fails() {
    let mut store = Store::new();
    let err = store.update_bill_status(42, true, now()).unwrap_err();
    assert!(matches!(err, StoreError::BillNotFound(42)));
}

#[test]
fn required_fields_are_validated() {
    let mut store = Store::new();
    let mut blank = electricity(1000);
    blank.name = "  ".into();
    assert!(store.add_bill(blank).is_err());
    assert!(store
        .add_category(NewCategory {
            name: String::new(),
            color: "#8884d8".into(),
            budget: None,
        })
        .is_err());
    assert!(store
        .add_reminder(NewReminder {
            title: String::new(),
            description: None,
            date: today(),
            bill_id: None,
        })
        .is_err());
}

#[test]
fn bills_may_reference_unknown_categories() {
    let mut store = Store::new();
    let mut orphan = electricity(1000);
    orphan.category = "NoSuchCategory".into();
    // No cross-entity validation: the add succeeds.
    assert!(store.add_bill(orphan).is_ok());
}

#[test]
fn attach_document_stores_metadata_only() {
    let mut store = Store::new();
    let id = store.add_bill(electricity(12000)).unwrap();

    let doc_id = store
        .attach_document(id, "statement.pdf".into(), 182_400, now())
        .unwrap();

    let bill = store.bill(id).unwrap();
    assert_eq!(bill.documents.len(), 1);
    let doc = &bill.documents[0];
    assert_eq!(doc.id, doc_id);
    assert_eq!(doc.bill_id, id);
    assert_eq!(doc.name, "statement.pdf");
    assert_eq!(doc.size, 182_400);

    let err = store
        .attach_document(9999, "x.pdf".into(), 1, now())
        .unwrap_err();
    assert!(matches!(err, StoreError::BillNotFound(9999)));
}

#[test]
fn complete_reminder_flips_the_flag() {
    let mut store = Store::new();
    let id = store
        .add_reminder(NewReminder {
            title: "Renew insurance".into(),
            description: None,
            date: today() + Days::new(14),
            bill_id: None,
        })
        .unwrap();

    store.complete_reminder(id).unwrap();
    assert!(store.reminders[0].is_completed);

    let err = store.complete_reminder(9999).unwrap_err();
    assert!(matches!(err, StoreError::ReminderNotFound(9999)));
}

#[test]
fn ids_are_unique_across_entities() {
    let mut store = Store::new();
    let b = store.add_bill(electricity(1000)).unwrap();
    let c = store
        .add_category(NewCategory {
            name: "Utilities".into(),
            color: "#82ca9d".into(),
            budget: None,
        })
        .unwrap();
    let r = store
        .add_reminder(NewReminder {
            title: "Pay it".into(),
            description: None,
            date: today(),
            bill_id: Some(b),
        })
        .unwrap();
    assert!(b != c && c != r && b != r);
}

#[test]
fn seeded_store_covers_every_view() {
    let store = Store::seeded(today());
    assert!(!store.bills.is_empty());
    assert!(!store.categories.is_empty());
    assert!(!store.payment_history.is_empty());
    assert!(!store.reminders.is_empty());
    assert!(!store.users.is_empty());
    // At least one paid bill with an attached document and a payment this
    // session, so history/document views have content.
    assert!(store.bills.iter().any(|b| b.is_paid));
    assert!(store.bills.iter().any(|b| !b.documents.is_empty()));
}
