//! Presentation layer for timed-quiz
//!
//! This crate contains the CLI definition, duration parsing, the console
//! session reporter, and the final score formatter.

pub mod cli;
pub mod config;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use cli::commands::{Cli, OutputFormat};
pub use cli::duration::{DurationError, format_duration, parse_duration};
pub use config::OutputConfig;
pub use output::console::ConsoleFormatter;
pub use progress::reporter::ConsoleReporter;
