use super::entities::{BodyBar, ChartModel, OverlayLine, WickSegment};
use super::value_objects::{AxisHandle, AxisRange, ChartStyle};
use crate::domain::market_data::{IndicatorColumn, Symbol, TimeSeries};

/// Domain service assembling a renderable chart from a series and its
/// indicator columns.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChartBuilder;

impl ChartBuilder {
    pub fn new() -> Self {
        Self
    }

    /// Partition the candles into glyph layers, attach the overlays, and
    /// create or link the horizontal axis.
    ///
    /// With `shared_axis` the produced chart references the given range
    /// object instead of deriving its own, which is what keeps two charts
    /// in pan/zoom lockstep.
    pub fn build(
        &self,
        symbol: &Symbol,
        series: &TimeSeries,
        shared_axis: Option<&AxisHandle>,
        columns: &[IndicatorColumn],
    ) -> ChartModel {
        let style = ChartStyle::default();

        let mut wicks = Vec::with_capacity(series.len());
        let mut gain_bodies = Vec::new();
        let mut loss_bodies = Vec::new();

        for candle in series.candles() {
            let timestamp_ms = candle.timestamp.as_f64();
            wicks.push(WickSegment {
                timestamp_ms,
                high: candle.ohlc.high.value(),
                low: candle.ohlc.low.value(),
            });

            let body = BodyBar {
                timestamp_ms,
                open: candle.ohlc.open.value(),
                close: candle.ohlc.close.value(),
            };
            if candle.is_gain() {
                gain_bodies.push(body);
            } else if candle.is_loss() {
                loss_bodies.push(body);
            }
            // close == open: wick only
        }

        let overlays: Vec<OverlayLine> = columns
            .iter()
            .map(|column| OverlayLine {
                indicator: column.indicator,
                points: series
                    .candles()
                    .iter()
                    .zip(column.values.iter().copied())
                    .filter_map(|(candle, value)| {
                        value.map(|v| (candle.timestamp.as_f64(), v))
                    })
                    .collect(),
            })
            .collect();

        let (price_floor, price_ceil) = Self::vertical_extent(series, &overlays);

        let (x_axis, owns_axis) = match shared_axis {
            Some(handle) => (handle.clone(), false),
            None => (AxisHandle::new(Self::fresh_range(series, &style)), true),
        };

        ChartModel {
            symbol: symbol.clone(),
            wicks,
            gain_bodies,
            loss_bodies,
            overlays,
            x_axis,
            owns_axis,
            price_floor,
            price_ceil,
            style,
        }
    }

    /// Fresh axis spanning the series, widened by one body so the first
    /// and last candles are not clipped.
    fn fresh_range(series: &TimeSeries, style: &ChartStyle) -> AxisRange {
        match series.time_range() {
            Some((first, last)) => AxisRange::new(
                first as f64 - style.body_width_ms,
                last as f64 + style.body_width_ms,
            ),
            None => AxisRange::new(0.0, 1.0),
        }
    }

    /// Price extent over candles and overlay values, padded 5% top and
    /// bottom.
    fn vertical_extent(series: &TimeSeries, overlays: &[OverlayLine]) -> (f64, f64) {
        let Some((mut lo, mut hi)) = series.price_range() else {
            return (0.0, 1.0);
        };

        for overlay in overlays {
            for &(_, value) in &overlay.points {
                lo = lo.min(value);
                hi = hi.max(value);
            }
        }

        let padding = (hi - lo) * 0.05;
        (lo - padding, hi + padding)
    }
}
