use std::collections::HashMap;

use futures::executor::block_on;
use ticker_dashboard_wasm::application::{DashboardController, DashboardInput, RunOutcome};
use ticker_dashboard_wasm::domain::errors::FetchResult;
use ticker_dashboard_wasm::domain::market_data::{
    Candle, DateRange, Indicator, OHLC, Price, PriceHistoryProvider, Symbol, TimeSeries, Timestamp,
};

struct CannedProvider {
    responses: HashMap<String, TimeSeries>,
}

impl CannedProvider {
    fn new(entries: &[(&str, TimeSeries)]) -> Self {
        let responses =
            entries.iter().map(|(symbol, series)| (symbol.to_string(), series.clone())).collect();
        Self { responses }
    }
}

impl PriceHistoryProvider for CannedProvider {
    async fn fetch_history(&self, symbol: &Symbol, _range: &DateRange) -> FetchResult<TimeSeries> {
        Ok(self.responses.get(symbol.value()).cloned().unwrap_or_else(TimeSeries::empty))
    }
}

fn daily_series(days: usize, base: f64) -> TimeSeries {
    let candles = (0..days)
        .map(|i| {
            let open = base + (i % 5) as f64;
            let close = open + if i % 2 == 0 { 1.0 } else { -1.0 };
            Candle::new(
                Timestamp::from_millis(1_577_836_800_000 + i as u64 * 86_400_000),
                OHLC::new(
                    Price::from(open),
                    Price::from(open.max(close) + 0.5),
                    Price::from(open.min(close) - 0.5),
                    Price::from(close),
                    None,
                ),
            )
        })
        .collect();
    TimeSeries::from_candles(candles)
}

fn load_input(symbol1: &str, symbol2: &str, indicators: Vec<Indicator>) -> DashboardInput {
    DashboardInput {
        symbol1: symbol1.to_string(),
        symbol2: symbol2.to_string(),
        start: "2020-01-01".to_string(),
        end: "2020-02-01".to_string(),
        indicators,
    }
}

#[test]
fn successful_run_publishes_two_axis_linked_charts() {
    let provider = CannedProvider::new(&[
        ("AAPL", daily_series(40, 300.0)),
        ("MSFT", daily_series(40, 150.0)),
    ]);
    let mut controller = DashboardController::new(provider);

    let outcome =
        block_on(controller.handle_load(&load_input("AAPL", "MSFT", vec![Indicator::Sma30])));

    assert_eq!(outcome, RunOutcome::Published);

    let display = controller.display();
    assert_eq!(display.generation(), 1);
    let pair = display.charts().expect("charts published");

    assert_eq!(pair.left.symbol.value(), "AAPL");
    assert_eq!(pair.right.symbol.value(), "MSFT");
    assert!(pair.left.owns_axis);
    assert!(!pair.right.owns_axis);
    assert!(pair.left.x_axis.shares_range_with(&pair.right.x_axis));

    // one orange overlay per chart for the 30-day selection
    for chart in [&pair.left, &pair.right] {
        assert_eq!(chart.overlays.len(), 1);
        assert_eq!(chart.overlays[0].label(), "30 Day SMA");
        assert_eq!(chart.overlays[0].color(), "orange");
    }
}

#[test]
fn each_successful_run_replaces_the_display_wholesale() {
    let provider = CannedProvider::new(&[
        ("AAPL", daily_series(40, 300.0)),
        ("MSFT", daily_series(40, 150.0)),
        ("IBM", daily_series(25, 120.0)),
    ]);
    let mut controller = DashboardController::new(provider);

    block_on(controller.handle_load(&load_input("AAPL", "MSFT", vec![Indicator::Sma30])));
    let outcome = block_on(controller.handle_load(&load_input("IBM", "AAPL", Vec::new())));

    assert_eq!(outcome, RunOutcome::Published);
    let display = controller.display();
    assert_eq!(display.generation(), 2);

    let pair = display.charts().expect("charts published");
    assert_eq!(pair.left.symbol.value(), "IBM");
    assert_eq!(pair.right.symbol.value(), "AAPL");
    // the replacement pair shares a fresh axis of its own
    assert!(pair.left.x_axis.shares_range_with(&pair.right.x_axis));
    assert!(pair.left.overlays.is_empty());
}
