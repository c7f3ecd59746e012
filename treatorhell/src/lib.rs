pub mod config;
pub mod logging;
pub mod web;

pub use config::Config;
pub use logging::init_logging;
pub use web::{AppState, ChatReply, ChatRequest, app};
