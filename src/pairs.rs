// Copyright (c) 2025 FxCost Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use thiserror::Error;

/// One standard lot = 100,000 units of base currency.
pub fn contract_size() -> Decimal {
    Decimal::from(100_000)
}

pub const MAJORS: [&str; 7] = [
    "EUR/USD", "GBP/USD", "USD/JPY", "USD/CHF", "USD/CAD", "AUD/USD", "NZD/USD",
];

const EXOTIC_CURRENCIES: [&str; 5] = ["TRY", "MXN", "ZAR", "SGD", "HKD"];

#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid currency pair '{0}', expected BASE/QUOTE")]
pub struct PairError(pub String);

/// Split "EUR/USD" into ("EUR", "USD").
pub fn split_pair(pair: &str) -> Result<(&str, &str), PairError> {
    match pair.split_once('/') {
        Some((base, quote)) if !base.is_empty() && !quote.is_empty() => Ok((base, quote)),
        _ => Err(PairError(pair.to_string())),
    }
}

/// Instrument class. Drives pip sizing, the fallback spread estimate, and
/// the per-lot pip value constant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PairClass {
    Major,
    Minor,
    Exotic,
    Gold,
    Silver,
    Crypto,
}

pub fn classify(pair: &str) -> PairClass {
    if MAJORS.contains(&pair) {
        return PairClass::Major;
    }
    let (base, quote) = match split_pair(pair) {
        Ok(legs) => legs,
        Err(_) => return PairClass::Minor,
    };
    match base {
        "XAU" => return PairClass::Gold,
        "XAG" => return PairClass::Silver,
        "BTC" | "ETH" => return PairClass::Crypto,
        _ => {}
    }
    if EXOTIC_CURRENCIES.contains(&base) || EXOTIC_CURRENCIES.contains(&quote) {
        PairClass::Exotic
    } else {
        PairClass::Minor
    }
}

/// Pip size for forex pairs: 0.01 when either leg is JPY, else 0.0001.
/// Metals and crypto are priced per-lot via `PipValueTable` instead.
pub fn pip_size(pair: &str) -> Decimal {
    if pair.contains("JPY") {
        Decimal::new(1, 2)
    } else {
        Decimal::new(1, 4)
    }
}

/// USD pip value per standard lot, by instrument class. These are
/// simplified universal constants, not tied to real contract sizes; kept
/// in one overridable table so a correction never touches call sites.
#[derive(Debug, Clone)]
pub struct PipValueTable {
    pub forex: Decimal,
    pub gold: Decimal,
    pub silver: Decimal,
    pub crypto: Decimal,
}

impl Default for PipValueTable {
    fn default() -> Self {
        PipValueTable {
            forex: Decimal::from(10),
            gold: Decimal::ONE,
            silver: Decimal::from(5),
            crypto: Decimal::ONE,
        }
    }
}

impl PipValueTable {
    pub fn for_class(&self, class: PairClass) -> Decimal {
        match class {
            PairClass::Major | PairClass::Minor | PairClass::Exotic => self.forex,
            PairClass::Gold => self.gold,
            PairClass::Silver => self.silver,
            PairClass::Crypto => self.crypto,
        }
    }
}
