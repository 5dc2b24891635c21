// Copyright (c) 2025 FxCost Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{BrokerFeeRecord, LegacySpreads, SpreadEntry, SwapCategory};
use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read broker catalog at {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid broker catalog JSON")]
    Parse(#[from] serde_json::Error),
}

/// Load broker fee records from a JSON file (an array of records in the
/// same shape the embedded catalog serializes to).
pub fn load(path: &Path) -> Result<Vec<BrokerFeeRecord>, CatalogError> {
    let text = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.display().to_string(),
        source,
    })?;
    Ok(serde_json::from_str(&text)?)
}

fn entry(pair: &str, spread: &str) -> SpreadEntry {
    SpreadEntry {
        pair: pair.to_string(),
        spread: spread.to_string(),
    }
}

// Built-in demo catalog. Figures are illustrative marketing-page numbers,
// kept only so the tool works out of the box without a catalog file.
static DEMO_BROKERS: Lazy<Vec<BrokerFeeRecord>> = Lazy::new(|| {
    vec![
        BrokerFeeRecord {
            id: "pepperstone".to_string(),
            name: "Pepperstone".to_string(),
            average_spreads: vec![
                entry("EUR/USD", "0.1 pips + commission"),
                entry("XAU/USD", "15 cents"),
            ],
            spreads: LegacySpreads {
                eurusd: Decimal::new(1, 1),
                gbpusd: Decimal::new(4, 1),
                usdjpy: Decimal::new(2, 1),
            },
            commission: "$3.50 per lot".to_string(),
            swap_category: SwapCategory::Standard,
        },
        BrokerFeeRecord {
            id: "ic-markets".to_string(),
            name: "IC Markets".to_string(),
            average_spreads: vec![entry("EUR/USD", "0.0-0.2 pips + commission")],
            spreads: LegacySpreads {
                eurusd: Decimal::ZERO,
                gbpusd: Decimal::new(2, 1),
                usdjpy: Decimal::new(1, 1),
            },
            commission: "$3.50 per side".to_string(),
            swap_category: SwapCategory::Low,
        },
        BrokerFeeRecord {
            id: "xtb".to_string(),
            name: "XTB".to_string(),
            average_spreads: Vec::new(),
            spreads: LegacySpreads {
                eurusd: Decimal::new(5, 1),
                gbpusd: Decimal::new(8, 1),
                usdjpy: Decimal::new(6, 1),
            },
            commission: "Zero on Standard accounts".to_string(),
            swap_category: SwapCategory::Standard,
        },
        BrokerFeeRecord {
            id: "forex-com".to_string(),
            name: "Forex.com".to_string(),
            average_spreads: Vec::new(),
            spreads: LegacySpreads {
                eurusd: Decimal::ONE,
                gbpusd: Decimal::new(15, 1),
                usdjpy: Decimal::new(12, 1),
            },
            commission: "Included in spread".to_string(),
            swap_category: SwapCategory::High,
        },
    ]
});

pub fn demo_brokers() -> &'static [BrokerFeeRecord] {
    &DEMO_BROKERS
}
