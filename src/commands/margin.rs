// Copyright (c) 2025 FxCost Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::calculators;
use crate::pairs::split_pair;
use crate::rates::demo_table;
use crate::utils::{fmt_money, parse_decimal, parse_leverage};
use anyhow::Result;

pub fn handle(sub: &clap::ArgMatches) -> Result<()> {
    let account = sub.get_one::<String>("account").unwrap().to_uppercase();
    let pair = sub.get_one::<String>("pair").unwrap().to_uppercase();
    let leverage = parse_leverage(sub.get_one::<String>("leverage").unwrap())?;
    let lots = parse_decimal(sub.get_one::<String>("lots").unwrap())?;
    split_pair(&pair)?;

    match calculators::margin(&account, &pair, leverage, lots, demo_table()) {
        Some(value) => {
            println!(
                "Margin for {} lot(s) of {} at 1:{} = {}",
                lots,
                pair,
                leverage,
                fmt_money(&value, &account)
            );
        }
        None => println!("No result: lot size must be a positive number."),
    }
    Ok(())
}
