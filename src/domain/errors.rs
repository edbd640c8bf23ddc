/// Error taxonomy for the dashboard pipeline. Every variant is recovered
/// locally - a failed run logs, leaves the display as it was, and the
/// controller is ready for the next trigger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DashboardError {
    /// Empty symbol or a non-chronological date range; nothing was fetched.
    InputRejected(String),
    /// The provider answered but had no usable rows for a symbol.
    DataUnavailable(String),
    /// Transport-level failure talking to the provider.
    Network(String),
}

impl std::fmt::Display for DashboardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DashboardError::InputRejected(msg) => write!(f, "Input rejected: {}", msg),
            DashboardError::DataUnavailable(msg) => write!(f, "Data unavailable: {}", msg),
            DashboardError::Network(msg) => write!(f, "Network error: {}", msg),
        }
    }
}

impl std::error::Error for DashboardError {}

pub type FetchResult<T> = Result<T, DashboardError>;
