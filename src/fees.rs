// Copyright (c) 2025 FxCost Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::BrokerFeeRecord;
use crate::pairs::{classify, PairClass};
use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::Decimal;

static LEADING_NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+\.?\d*)").expect("static regex"));

fn first_number(text: &str) -> Option<Decimal> {
    let m = LEADING_NUMBER.find(text)?;
    m.as_str().parse::<Decimal>().ok()
}

/// Commission text parsed against a small explicit grammar. `Unparseable`
/// stays distinguishable from a genuine zero so callers can decide how to
/// degrade.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commission {
    /// "zero" / "included" wording: no separate commission is charged.
    Included,
    /// Round-turn cost in the quoted currency unit per standard lot.
    RoundTurn(Decimal),
    /// No number found in the text.
    Unparseable,
}

/// Grammar, checked in order:
///   "zero" / "included"            -> Included
///   "X per lot" (no "round turn")  -> RoundTurn(2X), per-lot quotes are
///                                     assumed per side
///   "X per side"                   -> RoundTurn(2X)
///   "X ..."                        -> RoundTurn(X)
///   anything without a number      -> Unparseable
pub fn parse_commission(text: &str) -> Commission {
    let lower = text.to_lowercase();
    if lower.contains("zero") || lower.contains("included") {
        return Commission::Included;
    }
    let Some(value) = first_number(text) else {
        return Commission::Unparseable;
    };
    if lower.contains("per lot") && !lower.contains("round turn") {
        return Commission::RoundTurn(value * Decimal::from(2));
    }
    if lower.contains("per side") {
        return Commission::RoundTurn(value * Decimal::from(2));
    }
    Commission::RoundTurn(value)
}

/// Convenience form used by the projector: maps both `Included` and
/// `Unparseable` to zero.
pub fn commission_per_round_turn(text: &str) -> Decimal {
    match parse_commission(text) {
        Commission::RoundTurn(v) => v,
        Commission::Included | Commission::Unparseable => Decimal::ZERO,
    }
}

/// Best-effort effective spread in pips for one broker and pair.
///
/// Preference order: the broker's detailed per-pair list, then the legacy
/// major-pair shortcut fields, then an estimate keyed off the broker's
/// EUR/USD baseline. Treat the result as an approximation, never as
/// authoritative market data.
pub fn spread_in_pips(broker: &BrokerFeeRecord, pair: &str) -> Decimal {
    if let Some(entry) = broker.average_spreads.iter().find(|e| e.pair == pair) {
        if let Some(v) = first_number(&entry.spread) {
            return v;
        }
    }

    match pair {
        "EUR/USD" => return broker.spreads.eurusd,
        "GBP/USD" => return broker.spreads.gbpusd,
        "USD/JPY" => return broker.spreads.usdjpy,
        _ => {}
    }

    let baseline = broker.spreads.eurusd;
    match classify(pair) {
        PairClass::Major => baseline,
        PairClass::Minor => baseline * Decimal::new(15, 1),
        PairClass::Exotic => baseline * Decimal::from(5),
        // Fixed constants in each instrument's own pip-equivalent unit.
        PairClass::Gold => Decimal::from(20),
        PairClass::Silver => Decimal::from(30),
        PairClass::Crypto => Decimal::from(30),
    }
}
