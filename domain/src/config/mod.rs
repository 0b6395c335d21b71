//! Configuration value objects for the domain layer
//!
//! Shared by the config loader, the CLI and the result formatter.

mod output_format;

pub use output_format::OutputFormat;
