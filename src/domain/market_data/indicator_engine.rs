use strum::{AsRefStr, Display, EnumIter, EnumString};

use super::TimeSeries;

/// Closed catalog of chart overlays selectable from the input surface.
///
/// The widget labels round-trip through strum, so the multi-select list
/// and the parser stay in sync with this enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString, AsRefStr)]
pub enum Indicator {
    #[strum(serialize = "100 Day SMA")]
    Sma100,

    #[strum(serialize = "30 Day SMA")]
    Sma30,

    #[strum(serialize = "Linear Regression Line")]
    LinearRegression,
}

/// Catalog row: everything the pipeline needs to know about one indicator.
/// An entry without a compute fn is declared but not implemented; selecting
/// it yields no column.
pub struct IndicatorSpec {
    pub indicator: Indicator,
    pub window: usize,
    pub label: &'static str,
    pub color: &'static str,
    pub compute: Option<fn(&TimeSeries, usize) -> Vec<Option<f64>>>,
}

pub static CATALOG: [IndicatorSpec; 3] = [
    IndicatorSpec {
        indicator: Indicator::Sma100,
        window: 100,
        label: "100 Day SMA",
        color: "blue",
        compute: Some(rolling_mean),
    },
    IndicatorSpec {
        indicator: Indicator::Sma30,
        window: 30,
        label: "30 Day SMA",
        color: "orange",
        compute: Some(rolling_mean),
    },
    IndicatorSpec {
        indicator: Indicator::LinearRegression,
        window: 2,
        label: "Linear Regression Line",
        color: "green",
        compute: None,
    },
];

impl Indicator {
    pub fn spec(&self) -> &'static IndicatorSpec {
        CATALOG
            .iter()
            .find(|spec| spec.indicator == *self)
            .expect("every Indicator variant has a catalog row")
    }

    pub fn label(&self) -> &'static str {
        self.spec().label
    }

    pub fn color(&self) -> &'static str {
        self.spec().color
    }

    pub fn window(&self) -> usize {
        self.spec().window
    }
}

/// Rolling mean of the close price, aligned to the series index.
/// The first `window - 1` cells carry no value - there is no full window
/// behind them yet.
fn rolling_mean(series: &TimeSeries, window: usize) -> Vec<Option<f64>> {
    let len = series.len();
    if window == 0 {
        return vec![None; len];
    }

    let mut out = Vec::with_capacity(len);
    let mut sum = 0.0;
    let closes: Vec<f64> = series.closes().collect();

    for (i, close) in closes.iter().enumerate() {
        sum += close;
        if i >= window {
            sum -= closes[i - window];
        }
        if i + 1 >= window {
            out.push(Some(sum / window as f64));
        } else {
            out.push(None);
        }
    }

    out
}

/// One derived column, index-aligned with the series it was computed from.
#[derive(Debug, Clone, PartialEq)]
pub struct IndicatorColumn {
    pub indicator: Indicator,
    pub values: Vec<Option<f64>>,
}

/// A series plus the columns derived from it. The input series is copied,
/// never written back through.
#[derive(Debug, Clone, PartialEq)]
pub struct AnnotatedSeries {
    pub series: TimeSeries,
    pub columns: Vec<IndicatorColumn>,
}

/// Domain service turning a series and a selection into derived columns.
#[derive(Debug, Clone, Copy, Default)]
pub struct IndicatorEngine;

impl IndicatorEngine {
    pub fn new() -> Self {
        Self
    }

    /// Walks the catalog in order, so column order (and with it overlay
    /// stacking) does not depend on the order boxes were ticked.
    pub fn annotate(&self, series: &TimeSeries, selection: &[Indicator]) -> AnnotatedSeries {
        let mut columns = Vec::new();

        for spec in CATALOG.iter() {
            if !selection.contains(&spec.indicator) {
                continue;
            }
            let Some(compute) = spec.compute else {
                continue;
            };
            columns.push(IndicatorColumn {
                indicator: spec.indicator,
                values: compute(series, spec.window),
            });
        }

        AnnotatedSeries { series: series.clone(), columns }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::market_data::{Candle, OHLC, Price, Timestamp};

    fn series_of_closes(closes: &[f64]) -> TimeSeries {
        let candles = closes
            .iter()
            .enumerate()
            .map(|(i, &close)| {
                Candle::new(
                    Timestamp::from_millis(i as u64 * 86_400_000),
                    OHLC::new(Price::from(close), Price::from(close), Price::from(close), Price::from(close), None),
                )
            })
            .collect();
        TimeSeries::from_candles(candles)
    }

    #[test]
    fn rolling_mean_aligns_to_input_index() {
        let series = series_of_closes(&[1.0, 2.0, 3.0, 4.0]);
        let values = rolling_mean(&series, 3);
        assert_eq!(values, vec![None, None, Some(2.0), Some(3.0)]);
    }

    #[test]
    fn rolling_mean_short_input_is_all_empty() {
        let series = series_of_closes(&[1.0, 2.0]);
        assert_eq!(rolling_mean(&series, 5), vec![None, None]);
    }

    #[test]
    fn widget_labels_round_trip() {
        assert_eq!("30 Day SMA".parse::<Indicator>().unwrap(), Indicator::Sma30);
        assert_eq!(Indicator::Sma100.to_string(), "100 Day SMA");
        assert_eq!(Indicator::LinearRegression.label(), "Linear Regression Line");
    }
}
