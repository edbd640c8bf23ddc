pub mod yahoo_chart_client;

pub use yahoo_chart_client::YahooChartClient;
