// Copyright (c) 2025 Billkeep Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Static seed data for a session. Dates are placed relative to `today` so
//! the dashboard always has overdue, due-soon and paid bills to show.

use chrono::{DateTime, Datelike, Days, Months, NaiveDate, NaiveTime, Utc};
use once_cell::sync::Lazy;
use rust_decimal::Decimal;

use crate::models::{Bill, Category, Document, PaymentHistory, Reminder, User};
use crate::store::Store;

static DEFAULT_CATEGORIES: Lazy<Vec<(&'static str, &'static str, Option<Decimal>)>> =
    Lazy::new(|| {
        vec![
            ("Housing", "#8884d8", Some(Decimal::new(1800, 0))),
            ("Utilities", "#82ca9d", Some(Decimal::new(300, 0))),
            ("Insurance", "#ffc658", Some(Decimal::new(250, 0))),
            ("Subscriptions", "#ff8042", Some(Decimal::new(60, 0))),
            ("Transportation", "#0088fe", None),
        ]
    });

fn at(date: NaiveDate, hour: i64) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc() + chrono::Duration::hours(hour)
}

fn bill(
    id: i64,
    name: &str,
    amount: Decimal,
    due_date: NaiveDate,
    category: &str,
    recurring: Option<crate::models::RecurringFrequency>,
) -> Bill {
    Bill {
        id,
        name: name.to_string(),
        amount,
        due_date,
        category: category.to_string(),
        is_paid: false,
        is_recurring: recurring.is_some(),
        recurring_frequency: recurring,
        recurring_day: recurring.map(|_| due_date.day()),
        notes: None,
        documents: Vec::new(),
    }
}

pub fn seed(today: NaiveDate) -> Store {
    use crate::models::RecurringFrequency::{Monthly, Quarterly};

    let mut store = Store::new();

    for (name, color, budget) in DEFAULT_CATEGORIES.iter() {
        let id = store.alloc_id();
        store.categories.push(Category {
            id,
            name: name.to_string(),
            color: color.to_string(),
            budget: *budget,
        });
    }

    let mortgage = store.alloc_id();
    store.bills.push(bill(
        mortgage,
        "Mortgage",
        Decimal::new(145000, 2),
        today + Days::new(12),
        "Housing",
        Some(Monthly),
    ));

    let electricity = store.alloc_id();
    store.bills.push(bill(
        electricity,
        "Electricity",
        Decimal::new(9450, 2),
        today + Days::new(2),
        "Utilities",
        Some(Monthly),
    ));

    let water = store.alloc_id();
    store.bills.push(bill(
        water,
        "Water & Sewer",
        Decimal::new(3825, 2),
        today + Days::new(5),
        "Utilities",
        Some(Quarterly),
    ));

    let insurance = store.alloc_id();
    let mut insurance_bill = bill(
        insurance,
        "Car Insurance",
        Decimal::new(11200, 2),
        today + Days::new(20),
        "Insurance",
        Some(Quarterly),
    );
    insurance_bill.notes = Some("Policy #A-4417".to_string());
    store.bills.push(insurance_bill);

    let streaming = store.alloc_id();
    store.bills.push(bill(
        streaming,
        "Streaming Bundle",
        Decimal::new(1599, 2),
        today - Days::new(3),
        "Subscriptions",
        Some(Monthly),
    ));

    let transit = store.alloc_id();
    store.bills.push(bill(
        transit,
        "Transit Pass",
        Decimal::new(9000, 2),
        today + Days::new(28),
        "Transportation",
        Some(Monthly),
    ));

    // Internet arrived already paid this session, with its statement attached
    // and the matching payment recorded earlier today.
    let internet = store.alloc_id();
    let mut internet_bill = bill(
        internet,
        "Internet",
        Decimal::new(5999, 2),
        today - Days::new(8),
        "Utilities",
        Some(Monthly),
    );
    internet_bill.is_paid = true;
    let doc_id = store.alloc_id();
    internet_bill.documents.push(Document {
        id: doc_id,
        bill_id: internet,
        name: "internet-statement.pdf".to_string(),
        size: 182_400,
        upload_date: at(today, 9),
    });
    store.bills.push(internet_bill);

    let paid_id = store.alloc_id();
    store.payment_history.push(PaymentHistory {
        id: paid_id,
        bill_id: internet,
        bill_name: "Internet".to_string(),
        amount: Decimal::new(5999, 2),
        date: at(today, 9),
        category: "Utilities".to_string(),
    });

    // Six months of settled payments behind the recurring bills.
    for back in 1..=6u32 {
        if let Some(month) = today.checked_sub_months(Months::new(back)) {
            for (bill_id, name, amount, category) in [
                (mortgage, "Mortgage", Decimal::new(145000, 2), "Housing"),
                (electricity, "Electricity", Decimal::new(8910, 2), "Utilities"),
                (internet, "Internet", Decimal::new(5999, 2), "Utilities"),
            ] {
                let id = store.alloc_id();
                store.payment_history.push(PaymentHistory {
                    id,
                    bill_id,
                    bill_name: name.to_string(),
                    amount,
                    date: at(month, 10),
                    category: category.to_string(),
                });
            }
        }
    }

    let r1 = store.alloc_id();
    store.reminders.push(Reminder {
        id: r1,
        title: "Renew car insurance".to_string(),
        description: Some("Compare quotes before the policy rolls over".to_string()),
        date: today + Days::new(14),
        bill_id: Some(insurance),
        is_completed: false,
    });
    let r2 = store.alloc_id();
    store.reminders.push(Reminder {
        id: r2,
        title: "Review streaming plan".to_string(),
        description: None,
        date: today + Days::new(3),
        bill_id: Some(streaming),
        is_completed: false,
    });
    let r3 = store.alloc_id();
    store.reminders.push(Reminder {
        id: r3,
        title: "Set up water autopay".to_string(),
        description: None,
        date: today - Days::new(10),
        bill_id: Some(water),
        is_completed: true,
    });

    let user_id = store.alloc_id();
    store.users.push(User {
        id: user_id,
        name: "Alex Morgan".to_string(),
        email: "alex@example.com".to_string(),
    });

    store
}
