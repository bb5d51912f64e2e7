/// Upstream API clients
pub mod client;
pub mod navi;

pub use navi::NaviClient;
