mod server;

pub mod routes;
pub mod state;
pub mod utils;

// Public API for starting/stopping the webserver
pub use server::{build_app, shutdown, start_server};
pub use state::AppState;
