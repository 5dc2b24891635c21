// Copyright (c) 2025 FxCost Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{crate_version, value_parser, Arg, ArgAction, Command};

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print results as pretty JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print results as JSON lines"),
    )
}

pub fn build_cli() -> Command {
    Command::new("fxcost")
        .version(crate_version!())
        .about("Forex trading cost calculators and broker fee comparison (estimates only)")
        .subcommand(
            Command::new("pip")
                .about("Pip value for a position, in your account currency")
                .arg(
                    Arg::new("account")
                        .long("account")
                        .default_value("USD")
                        .help("Account currency code"),
                )
                .arg(
                    Arg::new("pair")
                        .long("pair")
                        .default_value("EUR/USD")
                        .help("Currency pair, BASE/QUOTE"),
                )
                .arg(
                    Arg::new("lots")
                        .long("lots")
                        .default_value("1")
                        .help("Position size in standard lots"),
                ),
        )
        .subcommand(
            Command::new("margin")
                .about("Required margin for a position at a given leverage")
                .arg(
                    Arg::new("account")
                        .long("account")
                        .default_value("USD")
                        .help("Account currency code"),
                )
                .arg(
                    Arg::new("pair")
                        .long("pair")
                        .default_value("EUR/USD")
                        .help("Currency pair, BASE/QUOTE"),
                )
                .arg(
                    Arg::new("leverage")
                        .long("leverage")
                        .default_value("1:100")
                        .help("Leverage ratio, 1:N"),
                )
                .arg(
                    Arg::new("lots")
                        .long("lots")
                        .default_value("1")
                        .help("Trade size in standard lots"),
                ),
        )
        .subcommand(
            Command::new("position")
                .about("Position size from risk budget and stop-loss distance")
                .arg(
                    Arg::new("balance")
                        .long("balance")
                        .default_value("10000")
                        .help("Account balance"),
                )
                .arg(
                    Arg::new("risk")
                        .long("risk")
                        .default_value("1")
                        .help("Risk per trade, percent of balance"),
                )
                .arg(
                    Arg::new("stop-loss")
                        .long("stop-loss")
                        .default_value("20")
                        .help("Stop-loss distance in pips"),
                )
                .arg(
                    Arg::new("pair")
                        .long("pair")
                        .default_value("EUR/USD")
                        .help("Currency pair, BASE/QUOTE"),
                ),
        )
        .subcommand(json_flags(
            Command::new("costs")
                .about("Annualized cost of trading per broker, ranked cheapest first")
                .arg(
                    Arg::new("pair")
                        .long("pair")
                        .default_value("EUR/USD")
                        .help("Instrument to compare on"),
                )
                .arg(
                    Arg::new("trades")
                        .long("trades")
                        .default_value("50")
                        .value_parser(value_parser!(u32))
                        .help("Trades per month"),
                )
                .arg(
                    Arg::new("lots")
                        .long("lots")
                        .default_value("0.5")
                        .help("Average trade size in lots"),
                )
                .arg(
                    Arg::new("nights")
                        .long("nights")
                        .default_value("1")
                        .value_parser(value_parser!(u32))
                        .help("Average holding period in nights"),
                )
                .arg(
                    Arg::new("brokers")
                        .long("brokers")
                        .help("JSON file of broker fee records (defaults to the built-in catalog)"),
                )
                .arg(
                    Arg::new("csv")
                        .long("csv")
                        .help("Also write the ranked projection to a CSV file"),
                ),
        ))
        .subcommand(
            Command::new("brokers").about("Broker catalog").subcommand(json_flags(
                Command::new("list").about("List the built-in broker fee records"),
            )),
        )
        .subcommand(
            Command::new("rates")
                .about("Demo conversion-rate table")
                .subcommand(Command::new("list").about("List the rate snapshot"))
                .subcommand(
                    Command::new("convert")
                        .about("Convert an amount between currencies")
                        .arg(Arg::new("amount").long("amount").default_value("1"))
                        .arg(Arg::new("from").long("from").required(true))
                        .arg(Arg::new("to").long("to").required(true)),
                ),
        )
}
