use ticker_dashboard_wasm::domain::chart::ChartBuilder;
use ticker_dashboard_wasm::domain::market_data::{
    Candle, OHLC, Price, Symbol, TimeSeries, Timestamp,
};

fn daily_candles(days: u64) -> TimeSeries {
    let candles = (0..days)
        .map(|i| {
            Candle::new(
                Timestamp::from_millis(i * 86_400_000),
                OHLC::new(
                    Price::from(10.0),
                    Price::from(12.0),
                    Price::from(9.0),
                    Price::from(11.0),
                    None,
                ),
            )
        })
        .collect();
    TimeSeries::from_candles(candles)
}

#[test]
fn second_chart_links_the_first_charts_axis() {
    let series = daily_candles(5);
    let builder = ChartBuilder::new();

    let first = builder.build(&Symbol::from("AAPL"), &series, None, &[]);
    let second = builder.build(&Symbol::from("MSFT"), &series, Some(&first.x_axis), &[]);

    assert!(first.owns_axis);
    assert!(!second.owns_axis);
    assert!(first.x_axis.shares_range_with(&second.x_axis));

    // panning through either handle moves both charts' window
    second.x_axis.pan_by(86_400_000.0);
    assert_eq!(first.x_axis.range(), second.x_axis.range());
}

#[test]
fn unlinked_charts_get_independent_axes() {
    let series = daily_candles(5);
    let builder = ChartBuilder::new();

    let first = builder.build(&Symbol::from("AAPL"), &series, None, &[]);
    let second = builder.build(&Symbol::from("MSFT"), &series, None, &[]);

    assert!(!first.x_axis.shares_range_with(&second.x_axis));
}

#[test]
fn fresh_axis_spans_the_series_with_one_body_of_slack() {
    let series = daily_candles(3);
    let chart = ChartBuilder::new().build(&Symbol::from("AAPL"), &series, None, &[]);

    let range = chart.x_axis.range();
    let half_day = chart.style.body_width_ms;
    assert_eq!(range.start, 0.0 - half_day);
    assert_eq!(range.end, 2.0 * 86_400_000.0 + half_day);
}
