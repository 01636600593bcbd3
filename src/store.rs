// Copyright (c) 2025 Billkeep Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{DateTime, NaiveDate, Utc};
use thiserror::Error;

use crate::models::{
    Bill, Category, Document, NewBill, NewCategory, NewReminder, PaymentHistory, Reminder, User,
};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("bill {0} not found")]
    BillNotFound(i64),
    #[error("reminder {0} not found")]
    ReminderNotFound(i64),
    #[error("{0} is required")]
    EmptyField(&'static str),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// In-memory session state. Initialized from fixture data, dropped with the
/// session; there is no persistence layer. Edits and deletes rebuild the
/// affected collection wholesale, so readers within the same turn never
/// observe a half-applied mutation.
#[derive(Debug, Clone, Default)]
pub struct Store {
    pub bills: Vec<Bill>,
    pub categories: Vec<Category>,
    pub payment_history: Vec<PaymentHistory>,
    pub reminders: Vec<Reminder>,
    pub users: Vec<User>,
    next_id: i64,
}

impl Store {
    pub fn new() -> Self {
        Store {
            next_id: 1,
            ..Default::default()
        }
    }

    /// A session store pre-populated with the fixture data set.
    pub fn seeded(today: NaiveDate) -> Self {
        crate::fixtures::seed(today)
    }

    /// Ids are unique across all entity kinds within a session.
    pub(crate) fn alloc_id(&mut self) -> i64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn add_bill(&mut self, new: NewBill) -> StoreResult<i64> {
        if new.name.trim().is_empty() {
            return Err(StoreError::EmptyField("bill name"));
        }
        let id = self.alloc_id();
        self.bills.push(Bill {
            id,
            name: new.name,
            amount: new.amount,
            due_date: new.due_date,
            category: new.category,
            is_paid: false,
            is_recurring: new.is_recurring,
            recurring_frequency: new.recurring_frequency,
            recurring_day: new.recurring_day,
            notes: new.notes,
            documents: Vec::new(),
        });
        Ok(id)
    }

    /// Flip a bill's paid flag. An unpaid -> paid transition records exactly
    /// one payment with the bill's name/amount/category snapshotted at `now`.
    /// Paid -> unpaid only clears the flag: the payment row stays, and a
    /// later re-pay records a fresh one. Setting the current state again is
    /// a no-op.
    pub fn update_bill_status(
        &mut self,
        id: i64,
        is_paid: bool,
        now: DateTime<Utc>,
    ) -> StoreResult<()> {
        let bill = self
            .bills
            .iter()
            .find(|b| b.id == id)
            .ok_or(StoreError::BillNotFound(id))?;
        let transition_to_paid = is_paid && !bill.is_paid;
        let snapshot = (bill.name.clone(), bill.amount, bill.category.clone());

        self.bills = self
            .bills
            .iter()
            .cloned()
            .map(|mut b| {
                if b.id == id {
                    b.is_paid = is_paid;
                }
                b
            })
            .collect();

        if transition_to_paid {
            let payment_id = self.alloc_id();
            self.payment_history.push(PaymentHistory {
                id: payment_id,
                bill_id: id,
                bill_name: snapshot.0,
                amount: snapshot.1,
                date: now,
                category: snapshot.2,
            });
        }
        Ok(())
    }

    /// Remove a bill. Payment history is untouched; rows for the removed
    /// bill keep their now-dangling `bill_id`. Unknown ids are ignored.
    pub fn delete_bill(&mut self, id: i64) {
        self.bills = self
            .bills
            .iter()
            .filter(|b| b.id != id)
            .cloned()
            .collect();
    }

    pub fn add_category(&mut self, new: NewCategory) -> StoreResult<i64> {
        if new.name.trim().is_empty() {
            return Err(StoreError::EmptyField("category name"));
        }
        let id = self.alloc_id();
        self.categories.push(Category {
            id,
            name: new.name,
            color: new.color,
            budget: new.budget,
        });
        Ok(id)
    }

    pub fn add_reminder(&mut self, new: NewReminder) -> StoreResult<i64> {
        if new.title.trim().is_empty() {
            return Err(StoreError::EmptyField("reminder title"));
        }
        let id = self.alloc_id();
        self.reminders.push(Reminder {
            id,
            title: new.title,
            description: new.description,
            date: new.date,
            bill_id: new.bill_id,
            is_completed: false,
        });
        Ok(id)
    }

    pub fn complete_reminder(&mut self, id: i64) -> StoreResult<()> {
        if !self.reminders.iter().any(|r| r.id == id) {
            return Err(StoreError::ReminderNotFound(id));
        }
        self.reminders = self
            .reminders
            .iter()
            .cloned()
            .map(|mut r| {
                if r.id == id {
                    r.is_completed = true;
                }
                r
            })
            .collect();
        Ok(())
    }

    /// Attach document metadata to a bill. Only name/size/timestamp are kept;
    /// there is no content storage.
    pub fn attach_document(
        &mut self,
        bill_id: i64,
        name: String,
        size: u64,
        now: DateTime<Utc>,
    ) -> StoreResult<i64> {
        if name.trim().is_empty() {
            return Err(StoreError::EmptyField("document name"));
        }
        if !self.bills.iter().any(|b| b.id == bill_id) {
            return Err(StoreError::BillNotFound(bill_id));
        }
        let id = self.alloc_id();
        let doc = Document {
            id,
            bill_id,
            name,
            size,
            upload_date: now,
        };
        self.bills = self
            .bills
            .iter()
            .cloned()
            .map(|mut b| {
                if b.id == bill_id {
                    b.documents.push(doc.clone());
                }
                b
            })
            .collect();
        Ok(id)
    }

    pub fn bill(&self, id: i64) -> Option<&Bill> {
        self.bills.iter().find(|b| b.id == id)
    }
}
