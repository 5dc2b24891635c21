// Copyright (c) 2025 FxCost Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use fxcost::cost::project;
use fxcost::models::{BrokerFeeRecord, LegacySpreads, SpreadEntry, SwapCategory};
use fxcost::pairs::PipValueTable;
use rust_decimal::Decimal;

fn broker(name: &str, eurusd: Decimal, commission: &str, swap: SwapCategory) -> BrokerFeeRecord {
    BrokerFeeRecord {
        id: name.to_lowercase(),
        name: name.to_string(),
        average_spreads: Vec::new(),
        spreads: LegacySpreads {
            eurusd,
            gbpusd: eurusd,
            usdjpy: eurusd,
        },
        commission: commission.to_string(),
        swap_category: swap,
    }
}

fn profile(pair: &str, trades: u32, lots: Decimal, nights: u32) -> fxcost::models::TradingProfile {
    fxcost::models::TradingProfile {
        pair: pair.to_string(),
        trades_per_month: trades,
        avg_lot_size: lots,
        avg_holding_nights: nights,
    }
}

#[test]
fn end_to_end_annual_costs() {
    // 50 trades x 0.5 lots = 25 lots/month. Spread 0.1 pips at $10/pip:
    // 25 x 0.1 x 10 x 12 = 300. Commission $3.50/lot doubled: 25 x 7 x 12 =
    // 2100. Swap Low, 1 night: |50 x 0.5 x 1 x -2 x 12| = 600. Total 3000.
    let mut b = broker("Alpha", Decimal::new(9, 1), "$3.50 per lot", SwapCategory::Low);
    b.average_spreads = vec![SpreadEntry {
        pair: "EUR/USD".to_string(),
        spread: "0.1 pips + commission".to_string(),
    }];

    let results = project(
        &profile("EUR/USD", 50, Decimal::new(5, 1), 1),
        &[b],
        &PipValueTable::default(),
    );
    assert_eq!(results.len(), 1);
    let r = &results[0];
    assert_eq!(r.spread_cost, Decimal::from(300));
    assert_eq!(r.commission_cost, Decimal::from(2100));
    assert_eq!(r.swap_cost, Decimal::from(600));
    assert_eq!(r.total_cost, Decimal::from(3000));
    assert!(r.cheapest);
}

#[test]
fn results_rank_ascending_with_cheapest_first() {
    // Nights 0 and zero commission isolate the spread term:
    // annual total = 1 x spread x 10 x 12.
    let brokers = vec![
        broker("Mid", Decimal::ONE, "Zero commission", SwapCategory::Low),
        broker("Cheap", Decimal::new(5, 1), "Zero commission", SwapCategory::Low),
        broker("Pricey", Decimal::from(2), "Zero commission", SwapCategory::Low),
    ];
    let results = project(
        &profile("EUR/USD", 1, Decimal::ONE, 0),
        &brokers,
        &PipValueTable::default(),
    );
    let names: Vec<&str> = results.iter().map(|r| r.broker.as_str()).collect();
    assert_eq!(names, ["Cheap", "Mid", "Pricey"]);
    assert_eq!(
        results.iter().map(|r| r.total_cost).collect::<Vec<_>>(),
        [Decimal::from(60), Decimal::from(120), Decimal::from(240)]
    );
    assert!(results[0].cheapest);
    assert!(!results[1].cheapest);
    assert!(!results[2].cheapest);
}

#[test]
fn ties_keep_input_order() {
    let brokers = vec![
        broker("First", Decimal::ONE, "Zero commission", SwapCategory::Low),
        broker("Second", Decimal::ONE, "Zero commission", SwapCategory::Low),
    ];
    let results = project(
        &profile("EUR/USD", 1, Decimal::ONE, 0),
        &brokers,
        &PipValueTable::default(),
    );
    assert_eq!(results[0].broker, "First");
    assert_eq!(results[1].broker, "Second");
    assert!(results[0].cheapest);
}

#[test]
fn swap_cost_is_reported_as_absolute_debit() {
    let brokers = vec![
        broker("A", Decimal::ZERO, "Zero commission", SwapCategory::High),
        broker("B", Decimal::ZERO, "Zero commission", SwapCategory::Low),
    ];
    let results = project(
        &profile("EUR/USD", 10, Decimal::ONE, 2),
        &brokers,
        &PipValueTable::default(),
    );
    // High: |10 x 1 x 2 x -8 x 12| = 1920, Low: |... x -2 ...| = 480.
    assert_eq!(results[0].broker, "B");
    assert_eq!(results[0].swap_cost, Decimal::from(480));
    assert_eq!(results[1].swap_cost, Decimal::from(1920));
    assert!(results.iter().all(|r| r.swap_cost > Decimal::ZERO));
}

#[test]
fn gold_uses_its_own_pip_unit() {
    // Gold fallback spread is 20 in cents-per-oz terms with a $1 pip value:
    // 1 lot x 20 x 1 x 12 = 240 annually.
    let brokers = vec![
        broker("A", Decimal::ONE, "Zero commission", SwapCategory::Low),
        broker("B", Decimal::from(2), "Zero commission", SwapCategory::Low),
    ];
    let results = project(
        &profile("XAU/USD", 1, Decimal::ONE, 0),
        &brokers,
        &PipValueTable::default(),
    );
    assert!(results.iter().all(|r| r.total_cost == Decimal::from(240)));
}

#[test]
fn invalid_profile_projects_nothing() {
    let brokers = vec![
        broker("A", Decimal::ONE, "Zero commission", SwapCategory::Low),
        broker("B", Decimal::ONE, "Zero commission", SwapCategory::Low),
    ];
    let results = project(
        &profile("EUR/USD", 0, Decimal::ONE, 0),
        &brokers,
        &PipValueTable::default(),
    );
    assert!(results.is_empty());

    let results = project(
        &profile("EURUSD", 10, Decimal::ONE, 0),
        &brokers,
        &PipValueTable::default(),
    );
    assert!(results.is_empty());
}
