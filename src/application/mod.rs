pub mod dashboard_controller;
pub mod data_fetcher;

pub use dashboard_controller::*;
pub use data_fetcher::*;
