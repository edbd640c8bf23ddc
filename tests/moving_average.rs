use ticker_dashboard_wasm::domain::market_data::{
    Candle, Indicator, IndicatorEngine, OHLC, Price, TimeSeries, Timestamp,
};

fn series_of_closes(closes: &[f64]) -> TimeSeries {
    let candles = closes
        .iter()
        .enumerate()
        .map(|(i, &close)| {
            Candle::new(
                Timestamp::from_millis(i as u64 * 86_400_000),
                OHLC::new(
                    Price::from(close),
                    Price::from(close),
                    Price::from(close),
                    Price::from(close),
                    None,
                ),
            )
        })
        .collect();
    TimeSeries::from_candles(candles)
}

#[test]
fn sma_column_starts_after_one_full_window() {
    let closes: Vec<f64> = (0..40).map(|i| 100.0 + i as f64).collect();
    let series = series_of_closes(&closes);

    let annotated = IndicatorEngine::new().annotate(&series, &[Indicator::Sma30]);
    assert_eq!(annotated.columns.len(), 1);

    let column = &annotated.columns[0];
    assert_eq!(column.indicator, Indicator::Sma30);
    assert_eq!(column.values.len(), 40);
    assert!(column.values[..29].iter().all(Option::is_none));
    assert!(column.values[29..].iter().all(Option::is_some));

    // mean of 100..=129 is 114.5
    assert_eq!(column.values[29], Some(114.5));
}

#[test]
fn sma_on_a_short_series_has_no_values_at_all() {
    let series = series_of_closes(&[10.0, 11.0, 12.0]);

    let annotated = IndicatorEngine::new().annotate(&series, &[Indicator::Sma30]);

    let column = &annotated.columns[0];
    assert_eq!(column.values.len(), 3);
    assert!(column.values.iter().all(Option::is_none));
}
