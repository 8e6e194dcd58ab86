//! Startup: configuration and logging.
//!
//! - [`config`] - `StartupConfig` from environment and command line
//! - [`logging`] - tracing subscriber setup

pub mod config;
pub mod logging;

pub use config::StartupConfig;
pub use logging::{init_logging, LogTarget};
