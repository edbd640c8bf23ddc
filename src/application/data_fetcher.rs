use crate::domain::errors::DashboardError;
use crate::domain::logging::LogComponent;
use crate::domain::market_data::{DateRange, PriceHistoryProvider, Symbol, TimeSeries};
use crate::log_error;

/// Application service fetching both symbols' history in one shot.
///
/// The two retrievals are independent, so they are issued together and
/// joined. Any provider failure is absorbed into an empty series for that
/// symbol - this layer never raises; the caller decides what an empty
/// series means.
pub struct DataFetcher<P> {
    provider: P,
}

impl<P: PriceHistoryProvider> DataFetcher<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    pub async fn fetch_pair(
        &self,
        symbol1: &Symbol,
        symbol2: &Symbol,
        range: &DateRange,
    ) -> (TimeSeries, TimeSeries) {
        let (first, second) = futures::join!(
            self.provider.fetch_history(symbol1, range),
            self.provider.fetch_history(symbol2, range),
        );

        (Self::absorb(symbol1, first), Self::absorb(symbol2, second))
    }

    fn absorb(symbol: &Symbol, result: Result<TimeSeries, DashboardError>) -> TimeSeries {
        match result {
            Ok(series) => series,
            Err(error) => {
                log_error!(
                    LogComponent::Fetcher,
                    "Failed to load {}: {}",
                    symbol.value(),
                    error
                );
                TimeSeries::empty()
            }
        }
    }
}
