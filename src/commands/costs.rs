// Copyright (c) 2025 FxCost Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::catalog;
use crate::cost;
use crate::models::{CostProjection, TradingProfile};
use crate::pairs::{split_pair, PipValueTable};
use crate::utils::{maybe_print_json, parse_decimal, pretty_table};
use anyhow::{Context, Result};
use std::path::Path;

pub fn handle(sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let pair = sub.get_one::<String>("pair").unwrap().to_uppercase();
    let trades: u32 = *sub.get_one::<u32>("trades").unwrap();
    let lots = parse_decimal(sub.get_one::<String>("lots").unwrap())?;
    let nights: u32 = *sub.get_one::<u32>("nights").unwrap();
    split_pair(&pair)?;

    let brokers = match sub.get_one::<String>("brokers") {
        Some(path) => catalog::load(Path::new(path))
            .with_context(|| format!("Loading broker catalog '{}'", path))?,
        None => catalog::demo_brokers().to_vec(),
    };
    if brokers.len() < 2 {
        println!("Add at least two brokers to the comparison to project costs.");
        return Ok(());
    }

    let profile = TradingProfile {
        pair,
        trades_per_month: trades,
        avg_lot_size: lots,
        avg_holding_nights: nights,
    };
    if !profile.is_valid() {
        println!("No result: trades per month and average lot size must be positive.");
        return Ok(());
    }

    let results = cost::project(&profile, &brokers, &PipValueTable::default());

    if let Some(path) = sub.get_one::<String>("csv") {
        write_csv(Path::new(path), &results)?;
        println!(
            "Wrote {} rows to {} ({})",
            results.len(),
            path,
            chrono::Utc::now().date_naive()
        );
    }

    if !maybe_print_json(json_flag, jsonl_flag, &results)? {
        let rows = results
            .iter()
            .map(|r| {
                vec![
                    if r.cheapest {
                        format!("{} (cheapest)", r.broker)
                    } else {
                        r.broker.clone()
                    },
                    format!("${:.2}", r.spread_cost),
                    format!("${:.2}", r.commission_cost),
                    format!("${:.2}", r.swap_cost),
                    format!("${:.2}", r.total_cost),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["Broker", "Spread", "Commission", "Swap", "Total / Year"],
                rows
            )
        );
        println!("All figures are annualized estimates for comparison purposes only.");
    }
    Ok(())
}

pub fn write_csv(path: &Path, rows: &[CostProjection]) -> Result<()> {
    let mut w = csv::Writer::from_path(path)
        .with_context(|| format!("Creating CSV file {}", path.display()))?;
    w.write_record([
        "broker",
        "spread_cost",
        "commission_cost",
        "swap_cost",
        "total_cost",
        "cheapest",
    ])?;
    for r in rows {
        w.write_record([
            r.broker.as_str(),
            &format!("{:.2}", r.spread_cost),
            &format!("{:.2}", r.commission_cost),
            &format!("{:.2}", r.swap_cost),
            &format!("{:.2}", r.total_cost),
            if r.cheapest { "yes" } else { "no" },
        ])?;
    }
    w.flush()?;
    Ok(())
}
