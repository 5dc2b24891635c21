// Copyright (c) 2025 FxCost Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::catalog;
use crate::utils::{maybe_print_json, pretty_table};
use anyhow::Result;

pub fn handle(m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("list", sub)) => list(sub)?,
        _ => {}
    }
    Ok(())
}

fn list(sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let brokers = catalog::demo_brokers();

    if maybe_print_json(json_flag, jsonl_flag, &brokers)? {
        return Ok(());
    }
    let rows = brokers
        .iter()
        .map(|b| {
            vec![
                b.name.clone(),
                format!("{}", b.spreads.eurusd),
                format!("{}", b.spreads.gbpusd),
                format!("{}", b.spreads.usdjpy),
                b.commission.clone(),
                b.swap_category.to_string(),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(
            &["Broker", "EUR/USD", "GBP/USD", "USD/JPY", "Commission", "Swap"],
            rows
        )
    );
    Ok(())
}
