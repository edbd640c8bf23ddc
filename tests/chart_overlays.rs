use ticker_dashboard_wasm::domain::chart::ChartBuilder;
use ticker_dashboard_wasm::domain::market_data::{
    Candle, Indicator, IndicatorEngine, OHLC, Price, Symbol, TimeSeries, Timestamp,
};

fn candle(day: u64, open: f64, close: f64) -> Candle {
    Candle::new(
        Timestamp::from_millis(day * 86_400_000),
        OHLC::new(
            Price::from(open),
            Price::from(open.max(close) + 1.0),
            Price::from(open.min(close) - 1.0),
            Price::from(close),
            None,
        ),
    )
}

#[test]
fn overlays_skip_empty_cells_and_keep_catalog_colors() {
    let series = TimeSeries::from_candles((0..40).map(|i| candle(i, 100.0, 101.0)).collect());
    let annotated = IndicatorEngine::new().annotate(&series, &[Indicator::Sma30]);

    let builder = ChartBuilder::new();
    let chart = builder.build(&Symbol::from("AAPL"), &annotated.series, None, &annotated.columns);

    assert_eq!(chart.overlays.len(), 1);
    let overlay = &chart.overlays[0];
    assert_eq!(overlay.label(), "30 Day SMA");
    assert_eq!(overlay.color(), "orange");
    // 40 rows minus 29 warm-up cells
    assert_eq!(overlay.points.len(), 11);
    assert_eq!(overlay.points[0].0, 29.0 * 86_400_000.0);

    // same indicator, same color on a rebuild
    let again = builder.build(&Symbol::from("MSFT"), &annotated.series, None, &annotated.columns);
    assert_eq!(again.overlays[0].color(), overlay.color());
}
