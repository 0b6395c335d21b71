//! Configuration file loading for timed-quiz
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `--config <path>` specified file
//! 2. Environment: `TIMED_QUIZ_QUIZ__SHUFFLE=true`, `TIMED_QUIZ_OUTPUT__COLOR=false`, ...
//! 3. Project root: `./quiz.toml` or `./.quiz.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/timed-quiz/config.toml`
//! 5. Default values
//!
//! Command-line flags are applied on top of the result by the binary.

mod file_config;
mod loader;

pub use file_config::{FileConfig, FileOutputConfig, FileQuizConfig};
pub use loader::ConfigLoader;
