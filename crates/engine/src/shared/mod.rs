pub mod config;
pub mod error;
pub mod format;
pub mod rows;
pub mod run_log;
pub mod tracing_setup;
pub mod varieties;
