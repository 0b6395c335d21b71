//! Quiz configuration from TOML (`[quiz]` section)

use quiz_application::QuizConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Raw quiz configuration from TOML
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileQuizConfig {
    /// Question file path
    pub csv: Option<PathBuf>,
    /// Shuffle questions before the run
    pub shuffle: bool,
    /// Session time limit in seconds
    pub limit_secs: Option<u64>,
    /// Seed for reproducible shuffles
    pub seed: Option<u64>,
}

impl FileQuizConfig {
    /// Convert to the application config, filling gaps with defaults
    pub fn to_quiz_config(&self) -> QuizConfig {
        let mut config = QuizConfig::default()
            .with_shuffle(self.shuffle)
            .with_seed(self.seed);
        if let Some(csv) = &self.csv {
            config = config.with_source_path(csv.clone());
        }
        if let Some(secs) = self.limit_secs {
            config = config.with_time_limit(Duration::from_secs(secs));
        }
        config
    }
}
