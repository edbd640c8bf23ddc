use crate::application::data_fetcher::DataFetcher;
use crate::domain::chart::{ChartBuilder, ChartPair};
use crate::domain::errors::DashboardError;
use crate::domain::logging::LogComponent;
use crate::domain::market_data::{
    DateRange, Indicator, IndicatorEngine, PriceHistoryProvider, Symbol,
};
use crate::time_utils;
use crate::{log_error, log_info, log_warn};

/// Snapshot of the input surface at the moment the load button fired.
/// Symbols and dates arrive as raw widget strings; validation turns them
/// into domain values or rejects the run.
#[derive(Debug, Clone, Default)]
pub struct DashboardInput {
    pub symbol1: String,
    pub symbol2: String,
    pub start: String,
    pub end: String,
    pub indicators: Vec<Indicator>,
}

/// Terminal state of one load run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// Two axis-linked charts replaced the display.
    Published,
    /// Validation failed; nothing was fetched, display untouched.
    RejectedInput,
    /// A symbol came back empty; display untouched.
    FetchFailed,
    /// A run was already in flight; the trigger was dropped.
    Busy,
}

/// The published chart pair. Owned by the controller and replaced
/// wholesale on every successful run, so observers see either the old
/// display or the new one, never a half-built mix.
#[derive(Debug, Default)]
pub struct DisplayRoot {
    charts: Option<ChartPair>,
    generation: u64,
}

impl DisplayRoot {
    pub fn charts(&self) -> Option<&ChartPair> {
        self.charts.as_ref()
    }

    /// Bumped on every publish; cheap change detection for the
    /// presentation layer.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    fn publish(&mut self, pair: ChartPair) {
        self.charts = Some(pair);
        self.generation += 1;
    }
}

/// Orchestrates one load cycle: validate -> fetch -> annotate -> build ->
/// publish. Every failure path logs, leaves the display as it was, and
/// returns the controller to idle.
pub struct DashboardController<P> {
    fetcher: DataFetcher<P>,
    engine: IndicatorEngine,
    builder: ChartBuilder,
    display: DisplayRoot,
    in_flight: bool,
}

impl<P: PriceHistoryProvider> DashboardController<P> {
    pub fn new(provider: P) -> Self {
        Self {
            fetcher: DataFetcher::new(provider),
            engine: IndicatorEngine::new(),
            builder: ChartBuilder::new(),
            display: DisplayRoot::default(),
            in_flight: false,
        }
    }

    pub fn display(&self) -> &DisplayRoot {
        &self.display
    }

    /// Single-shot entry point for the load trigger. Overlapping triggers
    /// are refused so two runs can never interleave chart construction;
    /// the input surface additionally disables the button while a run is
    /// in flight.
    pub async fn handle_load(&mut self, input: &DashboardInput) -> RunOutcome {
        if self.in_flight {
            log_warn!(
                LogComponent::Controller,
                "Load trigger ignored: a run is already in flight"
            );
            return RunOutcome::Busy;
        }

        self.in_flight = true;
        let outcome = self.run(input).await;
        self.in_flight = false;
        outcome
    }

    async fn run(&mut self, input: &DashboardInput) -> RunOutcome {
        let (symbol1, symbol2, range) = match Self::validate(input) {
            Ok(validated) => validated,
            Err(error) => {
                log_warn!(LogComponent::Controller, "{}", error);
                return RunOutcome::RejectedInput;
            }
        };

        let (series1, series2) = self.fetcher.fetch_pair(&symbol1, &symbol2, &range).await;

        if series1.is_empty() || series2.is_empty() {
            log_error!(
                LogComponent::Controller,
                "Data could not be loaded. Check ticker symbols and date range."
            );
            return RunOutcome::FetchFailed;
        }

        let annotated1 = self.engine.annotate(&series1, &input.indicators);
        let annotated2 = self.engine.annotate(&series2, &input.indicators);

        // chart1 owns the axis; chart2 links to it and must be built second
        let left = self.builder.build(&symbol1, &annotated1.series, None, &annotated1.columns);
        let right =
            self.builder.build(&symbol2, &annotated2.series, Some(&left.x_axis), &annotated2.columns);

        log_info!(
            LogComponent::Controller,
            "Published {} ({} candles) and {} ({} candles) with linked time axes",
            symbol1.value(),
            left.candle_count(),
            symbol2.value(),
            right.candle_count()
        );

        self.display.publish(ChartPair { left, right });
        RunOutcome::Published
    }

    fn validate(input: &DashboardInput) -> Result<(Symbol, Symbol, DateRange), DashboardError> {
        let empty = input.symbol1.trim().is_empty() || input.symbol2.trim().is_empty();
        if empty {
            return Err(DashboardError::InputRejected(
                "Please enter both stock tickers".to_string(),
            ));
        }

        let symbol1 = Symbol::new(&input.symbol1).map_err(DashboardError::InputRejected)?;
        let symbol2 = Symbol::new(&input.symbol2).map_err(DashboardError::InputRejected)?;

        let start = time_utils::parse_date(&input.start).ok_or_else(|| {
            DashboardError::InputRejected(format!("Unreadable start date '{}'", input.start))
        })?;
        let end = time_utils::parse_date(&input.end).ok_or_else(|| {
            DashboardError::InputRejected(format!("Unreadable end date '{}'", input.end))
        })?;

        let range = DateRange::new(start, end).map_err(|_| {
            DashboardError::InputRejected("Start date must be before end date".to_string())
        })?;

        Ok((symbol1, symbol2, range))
    }
}
