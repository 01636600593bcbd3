// Copyright (c) 2025 Billkeep Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod bills;
pub mod budgets;
pub mod categories;
pub mod dashboard;
pub mod documents;
pub mod exporter;
pub mod history;
pub mod reminders;
