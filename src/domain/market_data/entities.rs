pub use super::value_objects::{OHLC, Price, Timestamp, Volume};
use serde::{Deserialize, Serialize};

/// Domain entity - Candle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    pub timestamp: Timestamp,
    pub ohlc: OHLC,
}

impl Candle {
    pub fn new(timestamp: Timestamp, ohlc: OHLC) -> Self {
        Self { timestamp, ohlc }
    }

    /// Strict gain: close above open.
    pub fn is_gain(&self) -> bool {
        self.ohlc.close > self.ohlc.open
    }

    /// Strict loss: open above close. A candle with close == open is
    /// neither a gain nor a loss.
    pub fn is_loss(&self) -> bool {
        self.ohlc.open > self.ohlc.close
    }
}

/// Domain entity - an ordered run of candles for one symbol.
///
/// Timestamps are strictly increasing; construction sorts the input and
/// collapses duplicate timestamps (last row wins). The series is immutable
/// once built - consumers that derive data from it return new values
/// instead of writing back.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TimeSeries {
    candles: Vec<Candle>,
}

impl TimeSeries {
    pub fn empty() -> Self {
        Self { candles: Vec::new() }
    }

    pub fn from_candles(mut candles: Vec<Candle>) -> Self {
        candles.sort_by_key(|c| c.timestamp);
        candles.dedup_by(|next, prev| {
            if next.timestamp == prev.timestamp {
                *prev = next.clone();
                true
            } else {
                false
            }
        });
        Self { candles }
    }

    pub fn candles(&self) -> &[Candle] {
        &self.candles
    }

    pub fn len(&self) -> usize {
        self.candles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candles.is_empty()
    }

    pub fn closes(&self) -> impl Iterator<Item = f64> + '_ {
        self.candles.iter().map(|c| c.ohlc.close.value())
    }

    /// Low/high price extent over the whole series.
    pub fn price_range(&self) -> Option<(f64, f64)> {
        if self.candles.is_empty() {
            return None;
        }

        let mut min_price = self.candles[0].ohlc.low.value();
        let mut max_price = self.candles[0].ohlc.high.value();

        for candle in &self.candles {
            min_price = min_price.min(candle.ohlc.low.value());
            max_price = max_price.max(candle.ohlc.high.value());
        }

        Some((min_price, max_price))
    }

    /// First/last timestamp in epoch milliseconds.
    pub fn time_range(&self) -> Option<(u64, u64)> {
        match (self.candles.first(), self.candles.last()) {
            (Some(first), Some(last)) => Some((first.timestamp.value(), last.timestamp.value())),
            _ => None,
        }
    }
}
