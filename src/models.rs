// Copyright (c) 2025 FxCost Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One entry in a broker's detailed per-pair spread list. The spread is
/// free text as published by the broker ("0.1 pips + commission").
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpreadEntry {
    pub pair: String,
    pub spread: String,
}

/// Legacy numeric spread shortcut covering the three majors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LegacySpreads {
    pub eurusd: Decimal,
    pub gbpusd: Decimal,
    pub usdjpy: Decimal,
}

/// Coarse overnight-financing bucket a broker falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SwapCategory {
    Low,
    Standard,
    High,
}

impl SwapCategory {
    /// Estimated nightly swap debit in USD per standard lot. A fixed
    /// heuristic, not broker-published data.
    pub fn nightly_usd_per_lot(&self) -> Decimal {
        match self {
            SwapCategory::Low => Decimal::from(-2),
            SwapCategory::Standard => Decimal::from(-5),
            SwapCategory::High => Decimal::from(-8),
        }
    }
}

impl std::fmt::Display for SwapCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            SwapCategory::Low => "Low",
            SwapCategory::Standard => "Standard",
            SwapCategory::High => "High",
        };
        f.write_str(s)
    }
}

/// Read-only fee metadata for one broker, owned by the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrokerFeeRecord {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub average_spreads: Vec<SpreadEntry>,
    pub spreads: LegacySpreads,
    pub commission: String,
    pub swap_category: SwapCategory,
}

/// A user's trading volume profile, input to the cost projector.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TradingProfile {
    pub pair: String,
    pub trades_per_month: u32,
    pub avg_lot_size: Decimal,
    pub avg_holding_nights: u32,
}

impl TradingProfile {
    /// A profile must describe some actual trading before projection makes
    /// sense. Zero holding nights is fine (intraday only).
    pub fn is_valid(&self) -> bool {
        self.trades_per_month > 0
            && self.avg_lot_size > Decimal::ZERO
            && crate::pairs::split_pair(&self.pair).is_ok()
    }
}

/// Annualized cost estimate for one broker, USD-denominated. Swap cost is
/// reported as an absolute debit magnitude.
#[derive(Debug, Clone, Serialize)]
pub struct CostProjection {
    pub broker: String,
    pub spread_cost: Decimal,
    pub commission_cost: Decimal,
    pub swap_cost: Decimal,
    pub total_cost: Decimal,
    pub cheapest: bool,
}
