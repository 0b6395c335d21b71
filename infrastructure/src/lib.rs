//! Infrastructure layer for timed-quiz
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod input;
pub mod questions;

// Re-export commonly used types
pub use config::{ConfigLoader, FileConfig, FileOutputConfig, FileQuizConfig};
pub use input::LineAnswerSource;
pub use questions::CsvQuestionSource;
