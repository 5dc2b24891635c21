// Copyright (c) 2025 FxCost Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use fxcost::{cli, commands};

fn main() -> Result<()> {
    let cli = cli::build_cli();
    let matches = cli.get_matches();

    match matches.subcommand() {
        Some(("pip", sub)) => commands::pip::handle(sub)?,
        Some(("margin", sub)) => commands::margin::handle(sub)?,
        Some(("position", sub)) => commands::position::handle(sub)?,
        Some(("costs", sub)) => commands::costs::handle(sub)?,
        Some(("brokers", sub)) => commands::brokers::handle(sub)?,
        Some(("rates", sub)) => commands::rates::handle(sub)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
