use ticker_dashboard_wasm::domain::chart::ChartBuilder;
use ticker_dashboard_wasm::domain::market_data::{
    Candle, OHLC, Price, Symbol, TimeSeries, Timestamp,
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
fn candles_partition_into_wick_gain_and_loss_layers() {
    let series = TimeSeries::from_candles(vec![
        candle(0, 10.0, 12.0), // gain
        candle(1, 12.0, 11.0), // loss
        candle(2, 11.0, 11.0), // close == open: wick only
        candle(3, 11.0, 14.0), // gain
    ]);

    let chart = ChartBuilder::new().build(&Symbol::from("AAPL"), &series, None, &[]);

    assert_eq!(chart.wicks.len(), 4);
    assert_eq!(chart.gain_bodies.len(), 2);
    assert_eq!(chart.loss_bodies.len(), 1);
}

#[test]
fn body_width_is_half_a_day_of_axis_units() {
    let series = TimeSeries::from_candles(vec![candle(0, 1.0, 2.0)]);
    let chart = ChartBuilder::new().build(&Symbol::from("AAPL"), &series, None, &[]);

    assert_eq!(chart.style.body_width_ms, 12.0 * 60.0 * 60.0 * 1000.0);
    assert_eq!(chart.style.grid_line_alpha, 0.25);
    assert_eq!(chart.style.tick_label_rotation, std::f64::consts::FRAC_PI_4);
}

#[test]
fn vertical_extent_covers_wicks_with_padding() {
    let series = TimeSeries::from_candles(vec![candle(0, 10.0, 20.0)]);
    let chart = ChartBuilder::new().build(&Symbol::from("AAPL"), &series, None, &[]);

    // candle spans 9..21 after the wick offsets in the fixture
    assert!(chart.price_floor < 9.0);
    assert!(chart.price_ceil > 21.0);
}
