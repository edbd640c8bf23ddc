use super::value_objects::{AxisHandle, ChartStyle};
use crate::domain::market_data::{Indicator, Symbol};

/// One high-low range line per time step.
#[derive(Debug, Clone, PartialEq)]
pub struct WickSegment {
    pub timestamp_ms: f64,
    pub high: f64,
    pub low: f64,
}

/// A filled open-close body. Which layer it lives on (gain or loss)
/// decides its color.
#[derive(Debug, Clone, PartialEq)]
pub struct BodyBar {
    pub timestamp_ms: f64,
    pub open: f64,
    pub close: f64,
}

/// Continuous indicator line keyed to the series timestamps. Label and
/// color come from the indicator catalog, so the same indicator renders
/// the same on every chart.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayLine {
    pub indicator: Indicator,
    pub points: Vec<(f64, f64)>,
}

impl OverlayLine {
    pub fn label(&self) -> &'static str {
        self.indicator.label()
    }

    pub fn color(&self) -> &'static str {
        self.indicator.color()
    }
}

/// Domain entity - a fully prepared, renderable chart.
///
/// Glyph layers are drawn in field order: wicks underneath, then gain
/// bodies, then loss bodies, then overlays. A candle with close == open
/// appears in neither body layer and renders as a plain wick.
#[derive(Debug, Clone)]
pub struct ChartModel {
    pub symbol: Symbol,
    pub wicks: Vec<WickSegment>,
    pub gain_bodies: Vec<BodyBar>,
    pub loss_bodies: Vec<BodyBar>,
    pub overlays: Vec<OverlayLine>,
    pub x_axis: AxisHandle,
    /// False when the axis was received from another chart as a linking
    /// reference; a linked chart never replaces the range object.
    pub owns_axis: bool,
    pub price_floor: f64,
    pub price_ceil: f64,
    pub style: ChartStyle,
}

impl ChartModel {
    pub fn candle_count(&self) -> usize {
        self.wicks.len()
    }
}

/// The published pair: two side-by-side charts with linked time axes.
#[derive(Debug, Clone)]
pub struct ChartPair {
    pub left: ChartModel,
    pub right: ChartModel,
}
