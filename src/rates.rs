// Copyright (c) 2025 FxCost Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use std::collections::HashMap;

/// Date stamp of the built-in demo snapshot, shown wherever the table is
/// rendered so nobody mistakes it for a live feed.
pub const SNAPSHOT_AS_OF: &str = "2024-06-03";

/// Sparse "{FROM}/{TO}" -> multiplier map (1 unit of FROM in TO).
/// Immutable after construction; missing pairs resolve through the USD
/// pivot or fall back to a flat 1.
#[derive(Debug, Clone, Default)]
pub struct ConversionRateTable {
    rates: HashMap<String, Decimal>,
}

impl ConversionRateTable {
    pub fn from_pairs(pairs: &[(&str, Decimal)]) -> Self {
        let rates = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), *v))
            .collect::<HashMap<_, _>>();
        ConversionRateTable { rates }
    }

    pub fn get(&self, key: &str) -> Option<Decimal> {
        self.rates.get(key).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Decimal)> {
        self.rates.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Direct or inverse lookup only. No triangulation, no default: `None`
    /// means the table simply has no data for this pair.
    pub fn resolve_direct(&self, from: &str, to: &str) -> Option<Decimal> {
        if from == to {
            return Some(Decimal::ONE);
        }
        if let Some(r) = self.get(&format!("{}/{}", from, to)) {
            return Some(r);
        }
        match self.get(&format!("{}/{}", to, from)) {
            Some(r) if !r.is_zero() => Some(Decimal::ONE / r),
            _ => None,
        }
    }

    /// Full resolution: direct, inverse, then USD-pivot triangulation with
    /// each leg defaulting to 1 when absent. Never fails; a flat 1 is the
    /// documented worst-case approximation, not a real FX rate.
    pub fn resolve(&self, from: &str, to: &str) -> Decimal {
        if from == to {
            return Decimal::ONE;
        }
        if let Some(r) = self.resolve_direct(from, to) {
            return r;
        }
        let to_usd = self.resolve_direct(from, "USD").unwrap_or(Decimal::ONE);
        let usd_to = self.resolve_direct("USD", to).unwrap_or(Decimal::ONE);
        to_usd * usd_to
    }
}

// Hand-maintained illustrative snapshot. Crosses like EUR/GBP are left out
// on purpose and resolve through the USD pivot.
static DEMO_RATES: Lazy<ConversionRateTable> = Lazy::new(|| {
    ConversionRateTable::from_pairs(&[
        ("EUR/USD", Decimal::new(108, 2)),
        ("GBP/USD", Decimal::new(125, 2)),
        ("AUD/USD", Decimal::new(66, 2)),
        ("NZD/USD", Decimal::new(61, 2)),
        ("USD/CAD", Decimal::new(137, 2)),
        ("USD/CHF", Decimal::new(90, 2)),
        ("USD/JPY", Decimal::from(157)),
        ("USD/TRY", Decimal::from(32)),
        ("USD/MXN", Decimal::from(18)),
        ("USD/ZAR", Decimal::new(185, 1)),
        ("USD/SGD", Decimal::new(135, 2)),
        ("USD/HKD", Decimal::new(78, 1)),
        ("XAU/USD", Decimal::from(2400)),
        ("XAG/USD", Decimal::from(28)),
        ("BTC/USD", Decimal::from(65_000)),
    ])
});

pub fn demo_table() -> &'static ConversionRateTable {
    &DEMO_RATES
}
