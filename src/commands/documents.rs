// Copyright (c) 2025 Billkeep Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::time::Duration;

use anyhow::Result;
use chrono::Utc;
use serde::Serialize;

use crate::reports;
use crate::store::Store;
use crate::utils::{fmt_size, maybe_print_json, pretty_table};

/// The upload is simulated: a single fixed delay, then only the metadata is
/// kept. It cannot fail and is not cancellable.
const UPLOAD_DELAY: Duration = Duration::from_millis(1500);

pub fn handle(store: &mut Store, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("attach", sub)) => attach(store, sub)?,
        Some(("list", sub)) => list(store, sub)?,
        _ => {}
    }
    Ok(())
}

fn attach(store: &mut Store, sub: &clap::ArgMatches) -> Result<()> {
    let bill_id = *sub.get_one::<i64>("bill").unwrap();
    let name = sub.get_one::<String>("name").unwrap();
    let size = *sub.get_one::<u64>("size").unwrap();

    println!("Uploading '{}'...", name);
    std::thread::sleep(UPLOAD_DELAY);
    store.attach_document(bill_id, name.to_string(), size, Utc::now())?;
    let bill = store.bill(bill_id).map(|b| b.name.clone()).unwrap_or_default();
    println!("'{}' has been uploaded and attached to '{}'", name, bill);
    Ok(())
}

#[derive(Serialize)]
struct DocumentRow {
    bill: String,
    name: String,
    size: String,
    uploaded: String,
}

fn list(store: &Store, sub: &clap::ArgMatches) -> Result<()> {
    let mut data = Vec::new();
    for bill in reports::bills_with_documents(&store.bills) {
        for doc in &bill.documents {
            data.push(DocumentRow {
                bill: bill.name.clone(),
                name: doc.name.clone(),
                size: fmt_size(doc.size),
                uploaded: doc.upload_date.format("%Y-%m-%d").to_string(),
            });
        }
    }
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|d| {
                vec![
                    d.bill.clone(),
                    d.name.clone(),
                    d.size.clone(),
                    d.uploaded.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Bill", "Document", "Size", "Uploaded"], rows)
        );
    }
    Ok(())
}
