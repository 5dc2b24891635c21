// Copyright (c) 2025 FxCost Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::calculators;
use crate::pairs::{split_pair, PipValueTable};
use crate::rates::demo_table;
use crate::utils::{fmt_money, parse_decimal};
use anyhow::Result;

pub fn handle(sub: &clap::ArgMatches) -> Result<()> {
    let account = sub.get_one::<String>("account").unwrap().to_uppercase();
    let pair = sub.get_one::<String>("pair").unwrap().to_uppercase();
    let lots = parse_decimal(sub.get_one::<String>("lots").unwrap())?;
    split_pair(&pair)?;

    match calculators::pip_value(&account, &pair, lots, demo_table(), &PipValueTable::default()) {
        Some(value) => {
            println!(
                "1 pip on {} with {} lot(s) = {}",
                pair,
                lots,
                fmt_money(&value, &account)
            );
        }
        None => println!("No result: lot size must be a positive number."),
    }
    Ok(())
}
