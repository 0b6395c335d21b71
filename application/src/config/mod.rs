//! Application-level configuration.
//!
//! [`QuizConfig`] is the validated configuration the use cases consume.
//! Flag parsing and config files live in outer layers and produce it.

mod quiz_config;

pub use quiz_config::{DEFAULT_SOURCE_PATH, DEFAULT_TIME_LIMIT, QuizConfig};
