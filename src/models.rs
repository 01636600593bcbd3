// Copyright (c) 2025 Billkeep Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecurringFrequency {
    Weekly,
    Monthly,
    Quarterly,
    Yearly,
}

impl std::fmt::Display for RecurringFrequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            RecurringFrequency::Weekly => "weekly",
            RecurringFrequency::Monthly => "monthly",
            RecurringFrequency::Quarterly => "quarterly",
            RecurringFrequency::Yearly => "yearly",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bill {
    pub id: i64,
    pub name: String,
    pub amount: Decimal,
    /// For recurring bills this is only the next occurrence; past and future
    /// occurrences are never materialized.
    pub due_date: NaiveDate,
    /// References a Category by name, not id. Integrity is by convention
    /// only; a bill may name a category that does not exist.
    pub category: String,
    pub is_paid: bool,
    pub is_recurring: bool,
    pub recurring_frequency: Option<RecurringFrequency>,
    pub recurring_day: Option<u32>,
    pub notes: Option<String>,
    pub documents: Vec<Document>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewBill {
    pub name: String,
    pub amount: Decimal,
    pub due_date: NaiveDate,
    pub category: String,
    pub is_recurring: bool,
    pub recurring_frequency: Option<RecurringFrequency>,
    pub recurring_day: Option<u32>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub color: String,
    /// Optional monthly cap in the session currency.
    pub budget: Option<Decimal>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewCategory {
    pub name: String,
    pub color: String,
    pub budget: Option<Decimal>,
}

/// Immutable record of a completed payment. `bill_name`, `amount` and
/// `category` are copied from the bill at the moment it is marked paid and
/// deliberately do not track later edits or deletion of the bill.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentHistory {
    pub id: i64,
    pub bill_id: i64,
    pub bill_name: String,
    pub amount: Decimal,
    pub date: DateTime<Utc>,
    pub category: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reminder {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub date: NaiveDate,
    pub bill_id: Option<i64>,
    pub is_completed: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewReminder {
    pub title: String,
    pub description: Option<String>,
    pub date: NaiveDate,
    pub bill_id: Option<i64>,
}

/// Metadata for a document attached to a bill. No content is stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub id: i64,
    pub bill_id: i64,
    pub name: String,
    pub size: u64,
    pub upload_date: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
}

/// Derived budget-vs-actual comparison for one category. Never stored;
/// recomputed from the live collections on every render.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetSummary {
    pub category: String,
    pub budgeted: Decimal,
    pub actual: Decimal,
    pub remaining: Decimal,
}
