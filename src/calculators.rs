// Copyright (c) 2025 FxCost Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::pairs::{classify, contract_size, pip_size, split_pair, PairClass, PipValueTable};
use crate::rates::ConversionRateTable;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::Serialize;

// Every calculator returns None for invalid input instead of a partial or
// NaN-ish result. Full precision is kept internally; rounding is for
// display only.

/// Value of a one-pip move, in the account currency.
///
/// Forex: pip size x lots x contract size, in the quote currency, then
/// quote -> account via the triangulated resolver. Metals/crypto use their
/// fixed USD per-lot pip equivalents.
pub fn pip_value(
    account: &str,
    pair: &str,
    lots: Decimal,
    table: &ConversionRateTable,
    pip_values: &PipValueTable,
) -> Option<Decimal> {
    if lots <= Decimal::ZERO {
        return None;
    }
    let (_, quote) = split_pair(pair).ok()?;

    let class = classify(pair);
    let value_in_quote = match class {
        PairClass::Gold | PairClass::Silver | PairClass::Crypto => {
            pip_values.for_class(class) * lots
        }
        _ => pip_size(pair) * lots * contract_size(),
    };

    if quote == account {
        Some(value_in_quote)
    } else {
        Some(value_in_quote * table.resolve(quote, account))
    }
}

/// Required margin in the account currency for `lots` at 1:N leverage.
///
/// Notional is denominated in the base currency, so the conversion runs
/// base -> account. That direction intentionally differs from the pip
/// value calculator's quote -> account.
pub fn margin(
    account: &str,
    pair: &str,
    leverage: u32,
    lots: Decimal,
    table: &ConversionRateTable,
) -> Option<Decimal> {
    if lots <= Decimal::ZERO || leverage == 0 {
        return None;
    }
    let (base, _) = split_pair(pair).ok()?;
    let margin_in_base = lots * contract_size() / Decimal::from(leverage);
    if base == account {
        Some(margin_in_base)
    } else {
        Some(margin_in_base * table.resolve(base, account))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PositionSize {
    /// Rounded to two decimals.
    pub lots: Decimal,
    /// Base-currency units, rounded to the nearest whole unit.
    pub units: i64,
}

/// Position size from risk budget and stop distance.
///
/// Pip value per lot is taken in USD terms, converted quote -> USD by
/// direct/inverse lookup only (no triangulation in this path; missing data
/// leaves the quote-currency value unconverted).
pub fn position_size(
    balance: Decimal,
    risk_pct: Decimal,
    stop_loss_pips: Decimal,
    pair: &str,
    table: &ConversionRateTable,
) -> Option<PositionSize> {
    if balance < Decimal::ZERO
        || risk_pct <= Decimal::ZERO
        || risk_pct > Decimal::from(100)
        || stop_loss_pips <= Decimal::ZERO
    {
        return None;
    }
    let (_, quote) = split_pair(pair).ok()?;

    let per_lot_in_quote = pip_size(pair) * contract_size();
    let per_lot_usd = match table.resolve_direct(quote, "USD") {
        Some(r) => per_lot_in_quote * r,
        None => per_lot_in_quote,
    };

    let loss_per_lot = stop_loss_pips * per_lot_usd;
    if loss_per_lot.is_zero() {
        return None;
    }

    let risk_amount = balance * risk_pct / Decimal::from(100);
    let lots = risk_amount / loss_per_lot;
    let units = (lots * contract_size()).round().to_i64()?;
    Some(PositionSize {
        lots: lots.round_dp(2),
        units,
    })
}
