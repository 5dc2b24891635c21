// Copyright (c) 2025 FxCost Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::calculators;
use crate::pairs::split_pair;
use crate::rates::demo_table;
use crate::utils::parse_decimal;
use anyhow::Result;

pub fn handle(sub: &clap::ArgMatches) -> Result<()> {
    let balance = parse_decimal(sub.get_one::<String>("balance").unwrap())?;
    let risk = parse_decimal(sub.get_one::<String>("risk").unwrap())?;
    let stop = parse_decimal(sub.get_one::<String>("stop-loss").unwrap())?;
    let pair = sub.get_one::<String>("pair").unwrap().to_uppercase();
    split_pair(&pair)?;

    match calculators::position_size(balance, risk, stop, &pair, demo_table()) {
        Some(size) => {
            println!(
                "Risking {}% with a {} pip stop on {}: {} lot(s) ({} units)",
                risk, stop, pair, size.lots, size.units
            );
        }
        None => println!(
            "No result: balance must be non-negative, risk within (0, 100] and stop-loss positive."
        ),
    }
    Ok(())
}
