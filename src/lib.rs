pub mod apis;
pub mod arguments;
pub mod config;
pub mod constants;
pub mod errors; // Upstream and service error types
pub mod logger;
pub mod staking; // Synthetic history, fetchers and predictor
pub mod webserver;
