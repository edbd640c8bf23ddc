use gloo_net::http::Request;
use serde::Deserialize;

use crate::domain::errors::{DashboardError, FetchResult};
use crate::domain::logging::LogComponent;
use crate::domain::market_data::{
    Candle, DateRange, PriceHistoryProvider, Symbol, TimeSeries,
    value_objects::{OHLC, Price, Timestamp, Volume},
};
use crate::{log_error, log_info};

#[derive(Debug, Deserialize)]
struct ChartEnvelope {
    chart: ChartPayload,
}

#[derive(Debug, Deserialize)]
struct ChartPayload {
    result: Option<Vec<ChartResult>>,
    error: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct ChartResult {
    timestamp: Option<Vec<i64>>,
    indicators: ChartIndicators,
}

#[derive(Debug, Deserialize)]
struct ChartIndicators {
    quote: Vec<QuoteBlock>,
}

/// Column-oriented quote arrays; the provider emits `null` cells for
/// halted or missing days.
#[derive(Debug, Deserialize)]
struct QuoteBlock {
    open: Vec<Option<f64>>,
    high: Vec<Option<f64>>,
    low: Vec<Option<f64>>,
    close: Vec<Option<f64>>,
    #[serde(default)]
    volume: Vec<Option<f64>>,
}

/// Daily-bar client for the Yahoo Finance chart API.
pub struct YahooChartClient;

impl YahooChartClient {
    pub fn new() -> Self {
        Self
    }

    fn base_url(&self) -> String {
        "https://query1.finance.yahoo.com/v8/finance/chart".to_string()
    }

    pub fn chart_url(&self, symbol: &Symbol, range: &DateRange) -> String {
        format!(
            "{}/{}?interval=1d&period1={}&period2={}",
            self.base_url(),
            symbol.value(),
            range.start_secs(),
            range.end_secs()
        )
    }

    fn candles_from_result(result: ChartResult) -> Vec<Candle> {
        let timestamps = result.timestamp.unwrap_or_default();
        let Some(quote) = result.indicators.quote.into_iter().next() else {
            return Vec::new();
        };

        let mut candles = Vec::with_capacity(timestamps.len());
        for (i, seconds) in timestamps.iter().enumerate() {
            let row = (
                quote.open.get(i).copied().flatten(),
                quote.high.get(i).copied().flatten(),
                quote.low.get(i).copied().flatten(),
                quote.close.get(i).copied().flatten(),
            );
            // a null in any price column drops the whole row
            let (Some(open), Some(high), Some(low), Some(close)) = row else {
                continue;
            };

            let volume = quote.volume.get(i).copied().flatten().map(Volume::from);
            let ohlc = OHLC::new(
                Price::from(open),
                Price::from(high),
                Price::from(low),
                Price::from(close),
                volume,
            );
            // rows with an inconsistent high/low envelope are dropped too
            if !ohlc.is_valid() {
                continue;
            }
            candles.push(Candle::new(Timestamp::from_millis(*seconds as u64 * 1000), ohlc));
        }
        candles
    }
}

impl PriceHistoryProvider for YahooChartClient {
    async fn fetch_history(&self, symbol: &Symbol, range: &DateRange) -> FetchResult<TimeSeries> {
        let url = self.chart_url(symbol, range);
        log_info!(LogComponent::Provider, "📈 Fetching daily bars: {url}");

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| DashboardError::Network(format!("request failed: {e:?}")))?;

        if !response.ok() {
            return Err(DashboardError::Network(format!("HTTP {}", response.status())));
        }

        let envelope: ChartEnvelope = response
            .json()
            .await
            .map_err(|e| DashboardError::Network(format!("unreadable chart payload: {e:?}")))?;

        if let Some(error) = envelope.chart.error {
            log_error!(
                LogComponent::Provider,
                "Provider error for {}: {}",
                symbol.value(),
                error
            );
            return Err(DashboardError::DataUnavailable(error.to_string()));
        }

        let candles = envelope
            .chart
            .result
            .unwrap_or_default()
            .into_iter()
            .next()
            .map(Self::candles_from_result)
            .unwrap_or_default();

        log_info!(
            LogComponent::Provider,
            "✅ Loaded {} daily bars for {}",
            candles.len(),
            symbol.value()
        );

        Ok(TimeSeries::from_candles(candles))
    }
}
