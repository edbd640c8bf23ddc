use ticker_dashboard_wasm::domain::market_data::{
    Candle, Indicator, IndicatorEngine, OHLC, Price, TimeSeries, Timestamp,
};

fn flat_series(len: usize) -> TimeSeries {
    let candles = (0..len)
        .map(|i| {
            Candle::new(
                Timestamp::from_millis(i as u64 * 86_400_000),
                OHLC::new(
                    Price::from(i as f64),
                    Price::from(i as f64),
                    Price::from(i as f64),
                    Price::from(i as f64),
                    None,
                ),
            )
        })
        .collect();
    TimeSeries::from_candles(candles)
}

#[test]
fn unimplemented_indicator_yields_no_column() {
    let series = flat_series(40);
    let engine = IndicatorEngine::new();

    let mixed = engine.annotate(&series, &[Indicator::Sma30, Indicator::LinearRegression]);
    assert_eq!(mixed.columns.len(), 1);
    assert_eq!(mixed.columns[0].indicator, Indicator::Sma30);

    let alone = engine.annotate(&series, &[Indicator::LinearRegression]);
    assert!(alone.columns.is_empty());
}

#[test]
fn columns_follow_catalog_order() {
    let series = flat_series(120);
    let annotated =
        IndicatorEngine::new().annotate(&series, &[Indicator::Sma30, Indicator::Sma100]);

    let order: Vec<Indicator> = annotated.columns.iter().map(|c| c.indicator).collect();
    assert_eq!(order, vec![Indicator::Sma100, Indicator::Sma30]);
}
