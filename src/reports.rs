// Copyright (c) 2025 Billkeep Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Derived views over the session collections.
//!
//! Everything here is a pure function of the collections and an explicit
//! `today`; nothing is cached, so callers may recompute on every render.

use std::collections::BTreeMap;

use chrono::{Datelike, Days, Months, NaiveDate};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::{Bill, BudgetSummary, Category, PaymentHistory, Reminder};
use crate::utils::{days_until_due, month_bounds, month_label};

/// Urgency bucket for an unpaid bill's due date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DueStatus {
    Overdue,
    DueUrgent,
    DueSoon,
    DueLater,
}

impl DueStatus {
    pub fn classify(due: NaiveDate, today: NaiveDate) -> DueStatus {
        match days_until_due(due, today) {
            d if d < 0 => DueStatus::Overdue,
            0..=3 => DueStatus::DueUrgent,
            4..=7 => DueStatus::DueSoon,
            _ => DueStatus::DueLater,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DueStatus::Overdue => "overdue",
            DueStatus::DueUrgent => "due-urgent",
            DueStatus::DueSoon => "due-soon",
            DueStatus::DueLater => "due-later",
        }
    }
}

/// Unpaid bills due within the next `days` days, today inclusive. Overdue
/// bills are not part of the forward-looking windows.
pub fn bills_due_within<'a>(bills: &'a [Bill], today: NaiveDate, days: u64) -> Vec<&'a Bill> {
    let horizon = today + Days::new(days);
    let mut due: Vec<&Bill> = bills
        .iter()
        .filter(|b| !b.is_paid && b.due_date >= today && b.due_date <= horizon)
        .collect();
    due.sort_by_key(|b| b.due_date);
    due
}

/// The dashboard's 30-day upcoming list.
pub fn upcoming_bills<'a>(bills: &'a [Bill], today: NaiveDate) -> Vec<&'a Bill> {
    bills_due_within(bills, today, 30)
}

/// Unpaid bills whose due date falls inside the calendar month of `today`.
pub fn bills_due_in_month<'a>(bills: &'a [Bill], today: NaiveDate) -> Vec<&'a Bill> {
    let (first, last) = month_bounds(today);
    bills
        .iter()
        .filter(|b| !b.is_paid && b.due_date >= first && b.due_date <= last)
        .collect()
}

pub fn total_due_this_month(bills: &[Bill], today: NaiveDate) -> Decimal {
    bills_due_in_month(bills, today)
        .iter()
        .map(|b| b.amount)
        .sum()
}

/// Payments recorded within the calendar month of `today`.
pub fn payments_in_month<'a>(
    history: &'a [PaymentHistory],
    today: NaiveDate,
) -> Vec<&'a PaymentHistory> {
    let (first, last) = month_bounds(today);
    history
        .iter()
        .filter(|p| {
            let d = p.date.date_naive();
            d >= first && d <= last
        })
        .collect()
}

pub fn total_paid_this_month(history: &[PaymentHistory], today: NaiveDate) -> Decimal {
    payments_in_month(history, today)
        .iter()
        .map(|p| p.amount)
        .sum()
}

#[derive(Debug, Clone, Serialize)]
pub struct CategorySlice {
    pub name: String,
    pub total: Decimal,
    pub color: String,
}

/// Current-month expense pie: bills falling due this month (paid or not),
/// grouped per category. Categories with a zero total are omitted.
pub fn category_breakdown(
    bills: &[Bill],
    categories: &[Category],
    today: NaiveDate,
) -> Vec<CategorySlice> {
    let (first, last) = month_bounds(today);
    let month_bills: Vec<&Bill> = bills
        .iter()
        .filter(|b| b.due_date >= first && b.due_date <= last)
        .collect();
    categories
        .iter()
        .filter_map(|c| {
            let total: Decimal = month_bills
                .iter()
                .filter(|b| b.category == c.name)
                .map(|b| b.amount)
                .sum();
            if total > Decimal::ZERO {
                Some(CategorySlice {
                    name: c.name.clone(),
                    total,
                    color: c.color.clone(),
                })
            } else {
                None
            }
        })
        .collect()
}

/// All-time bill total for one category, regardless of paid status.
pub fn category_total(bills: &[Bill], name: &str) -> Decimal {
    bills
        .iter()
        .filter(|b| b.category == name)
        .map(|b| b.amount)
        .sum()
}

/// The category with the largest all-time bill total.
pub fn largest_category<'a>(bills: &'a [Bill], categories: &[Category]) -> Option<CategorySlice> {
    categories
        .iter()
        .map(|c| CategorySlice {
            name: c.name.clone(),
            total: category_total(bills, &c.name),
            color: c.color.clone(),
        })
        .max_by(|a, b| a.total.cmp(&b.total))
}

/// A category's all-time total as a percentage of this month's outstanding
/// due amount. Zero when nothing is due.
pub fn category_share(bills: &[Bill], today: NaiveDate, name: &str) -> Decimal {
    let total_due = total_due_this_month(bills, today);
    if total_due.is_zero() {
        return Decimal::ZERO;
    }
    category_total(bills, name) * Decimal::ONE_HUNDRED / total_due
}

/// Budget vs. actual per category, in category order. `actual` sums every
/// bill carried under the category name (case-sensitive), with no date or
/// paid-status filter: the budget view compares against all recorded spend,
/// not just the current month's.
pub fn budget_summaries(bills: &[Bill], categories: &[Category]) -> Vec<BudgetSummary> {
    categories
        .iter()
        .map(|c| {
            let budgeted = c.budget.unwrap_or(Decimal::ZERO);
            let actual = category_total(bills, &c.name);
            BudgetSummary {
                category: c.name.clone(),
                budgeted,
                actual,
                remaining: budgeted - actual,
            }
        })
        .collect()
}

/// Summaries ranked by budget utilization, most stretched first. Rows with
/// no budget are dropped before the ratio is taken.
pub fn ranked_budget_summaries(bills: &[Bill], categories: &[Category]) -> Vec<BudgetSummary> {
    let mut ranked: Vec<BudgetSummary> = budget_summaries(bills, categories)
        .into_iter()
        .filter(|s| s.budgeted > Decimal::ZERO)
        .collect();
    ranked.sort_by(|a, b| {
        let ra = a.actual / a.budgeted;
        let rb = b.actual / b.budgeted;
        rb.cmp(&ra)
    });
    ranked
}

#[derive(Debug, Clone, Serialize)]
pub struct TrendPoint {
    pub label: String,
    pub total: Decimal,
}

fn trend_months(months: usize, today: NaiveDate) -> Vec<NaiveDate> {
    (0..months)
        .rev()
        .filter_map(|i| today.checked_sub_months(Months::new(i as u32)))
        .collect()
}

/// Rolling per-month payment totals: exactly `months` buckets, oldest first,
/// matched by calendar month and year. Empty months stay in the series with
/// a zero total.
pub fn monthly_totals(
    history: &[PaymentHistory],
    months: usize,
    today: NaiveDate,
) -> Vec<TrendPoint> {
    trend_months(months, today)
        .into_iter()
        .map(|m| {
            let total = history
                .iter()
                .filter(|p| {
                    let d = p.date.date_naive();
                    d.month() == m.month() && d.year() == m.year()
                })
                .map(|p| p.amount)
                .sum();
            TrendPoint {
                label: month_label(m),
                total,
            }
        })
        .collect()
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryTrendPoint {
    pub label: String,
    /// Sparse: categories with no payments that month are absent.
    pub totals: BTreeMap<String, Decimal>,
}

/// Stacked variant of [`monthly_totals`], split per category.
pub fn category_trend(
    history: &[PaymentHistory],
    categories: &[Category],
    months: usize,
    today: NaiveDate,
) -> Vec<CategoryTrendPoint> {
    trend_months(months, today)
        .into_iter()
        .map(|m| {
            let month_payments: Vec<&PaymentHistory> = history
                .iter()
                .filter(|p| {
                    let d = p.date.date_naive();
                    d.month() == m.month() && d.year() == m.year()
                })
                .collect();
            let mut totals = BTreeMap::new();
            for c in categories {
                let total: Decimal = month_payments
                    .iter()
                    .filter(|p| p.category == c.name)
                    .map(|p| p.amount)
                    .sum();
                if total > Decimal::ZERO {
                    totals.insert(c.name.clone(), total);
                }
            }
            CategoryTrendPoint {
                label: month_label(m),
                totals,
            }
        })
        .collect()
}

/// Open reminders from today onward, soonest first.
pub fn upcoming_reminders<'a>(reminders: &'a [Reminder], today: NaiveDate) -> Vec<&'a Reminder> {
    let mut upcoming: Vec<&Reminder> = reminders
        .iter()
        .filter(|r| !r.is_completed && r.date >= today)
        .collect();
    upcoming.sort_by_key(|r| r.date);
    upcoming
}

/// Payment history, newest first.
pub fn recent_payments<'a>(history: &'a [PaymentHistory]) -> Vec<&'a PaymentHistory> {
    let mut sorted: Vec<&PaymentHistory> = history.iter().collect();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));
    sorted
}

pub fn bills_with_documents<'a>(bills: &'a [Bill]) -> Vec<&'a Bill> {
    bills.iter().filter(|b| !b.documents.is_empty()).collect()
}
