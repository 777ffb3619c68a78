pub mod config;
mod runner;
mod types;

pub use runner::{run_script, run_script_reported};
pub use types::ProgressReporter;
