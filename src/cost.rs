// Copyright (c) 2025 FxCost Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::fees::{commission_per_round_turn, spread_in_pips};
use crate::models::{BrokerFeeRecord, CostProjection, TradingProfile};
use crate::pairs::{classify, PipValueTable};
use rust_decimal::Decimal;

/// Annualized cost projection per broker, sorted ascending by total cost.
/// The first entry carries the cheapest flag; ties keep input order.
///
/// Costs are USD-denominated estimates built on the pip-value constants in
/// `PipValueTable` and the heuristic swap table; they are comparison aids,
/// not quotes. An invalid profile projects to nothing.
pub fn project(
    profile: &TradingProfile,
    brokers: &[BrokerFeeRecord],
    pip_values: &PipValueTable,
) -> Vec<CostProjection> {
    if !profile.is_valid() {
        return Vec::new();
    }

    let twelve = Decimal::from(12);
    let trades = Decimal::from(profile.trades_per_month);
    let nights = Decimal::from(profile.avg_holding_nights);
    let monthly_volume = trades * profile.avg_lot_size;
    let pip_value = pip_values.for_class(classify(&profile.pair));

    let mut out: Vec<CostProjection> = brokers
        .iter()
        .map(|broker| {
            let spread = spread_in_pips(broker, &profile.pair);
            let spread_cost = monthly_volume * spread * pip_value * twelve;

            let commission = commission_per_round_turn(&broker.commission);
            let commission_cost = monthly_volume * commission * twelve;

            let nightly = broker.swap_category.nightly_usd_per_lot();
            let swap_cost = (trades * profile.avg_lot_size * nights * nightly * twelve).abs();

            CostProjection {
                broker: broker.name.clone(),
                spread_cost,
                commission_cost,
                swap_cost,
                total_cost: spread_cost + commission_cost + swap_cost,
                cheapest: false,
            }
        })
        .collect();

    out.sort_by(|a, b| a.total_cost.cmp(&b.total_cost));
    if let Some(first) = out.first_mut() {
        first.cheapest = true;
    }
    out
}
