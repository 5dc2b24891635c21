// Copyright (c) 2025 FxCost Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::rates::{demo_table, SNAPSHOT_AS_OF};
use crate::utils::{parse_decimal, pretty_table};
use anyhow::Result;

pub fn handle(m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("list", _)) => list()?,
        Some(("convert", sub)) => convert(sub)?,
        _ => {}
    }
    Ok(())
}

fn list() -> Result<()> {
    let mut data: Vec<Vec<String>> = demo_table()
        .iter()
        .map(|(pair, rate)| vec![pair.to_string(), rate.to_string()])
        .collect();
    data.sort();
    println!("{}", pretty_table(&["Pair", "Rate"], data));
    println!(
        "Illustrative snapshot as of {}; unlisted pairs triangulate through USD.",
        SNAPSHOT_AS_OF
    );
    Ok(())
}

fn convert(sub: &clap::ArgMatches) -> Result<()> {
    let amount = parse_decimal(sub.get_one::<String>("amount").unwrap())?;
    let from = sub.get_one::<String>("from").unwrap().to_uppercase();
    let to = sub.get_one::<String>("to").unwrap().to_uppercase();
    let res = amount * demo_table().resolve(&from, &to);
    println!("{} {} -> {:.4} {}", amount, from, res, to);
    Ok(())
}
