// Copyright (c) 2025 Billkeep Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use serde::Serialize;

use crate::models::NewCategory;
use crate::store::Store;
use crate::utils::{fmt_money, maybe_print_json, parse_decimal, pretty_table};

pub fn handle(store: &mut Store, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => {
            let name = sub.get_one::<String>("name").unwrap();
            let color = sub.get_one::<String>("color").unwrap();
            let budget = sub
                .get_one::<String>("budget")
                .map(|s| parse_decimal(s))
                .transpose()?;
            store.add_category(NewCategory {
                name: name.to_string(),
                color: color.to_string(),
                budget,
            })?;
            println!("Added category '{}'", name);
        }
        Some(("list", sub)) => list(store, sub)?,
        _ => {}
    }
    Ok(())
}

#[derive(Serialize)]
struct CategoryRow {
    id: i64,
    name: String,
    color: String,
    budget: Option<String>,
}

fn list(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let data: Vec<CategoryRow> = store
        .categories
        .iter()
        .map(|c| CategoryRow {
            id: c.id,
            name: c.name.clone(),
            color: c.color.clone(),
            budget: c.budget.map(|b| fmt_money(&b)),
        })
        .collect();
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|c| {
                vec![
                    c.id.to_string(),
                    c.name.clone(),
                    c.color.clone(),
                    c.budget.clone().unwrap_or_default(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Id", "Name", "Color", "Monthly budget"], rows)
        );
    }
    Ok(())
}
