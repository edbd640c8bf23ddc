use crate::domain::errors::FetchResult;
use crate::domain::market_data::{DateRange, Symbol, TimeSeries};

/// Port for the external price-history provider.
///
/// One call per symbol; the range is pre-validated by the caller. Errors
/// here are transport or provider failures - the application layer decides
/// how to absorb them.
pub trait PriceHistoryProvider {
    async fn fetch_history(&self, symbol: &Symbol, range: &DateRange) -> FetchResult<TimeSeries>;
}
