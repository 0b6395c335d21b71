//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod output;
mod quiz;

pub use output::FileOutputConfig;
pub use quiz::FileQuizConfig;

use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Quiz run settings
    pub quiz: FileQuizConfig,
    /// Output settings
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the configuration, returning a message for each issue found.
    ///
    /// Issues are warnings: the values still load.
    pub fn validate(&self) -> Vec<String> {
        let mut issues = Vec::new();

        if self.quiz.seed.is_some() && !self.quiz.shuffle {
            issues.push("quiz.seed has no effect unless quiz.shuffle is enabled".to_string());
        }

        if self.quiz.limit_secs == Some(0) {
            issues.push(
                "quiz.limit_secs is 0: the quiz will end before the first answer".to_string(),
            );
        }

        issues
    }
}
