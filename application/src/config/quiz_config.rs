//! Quiz run parameters.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Question file used when none is given
pub const DEFAULT_SOURCE_PATH: &str = "./questions.csv";

/// Session time budget used when none is given
pub const DEFAULT_TIME_LIMIT: Duration = Duration::from_secs(30);

/// Validated configuration for one quiz run.
///
/// | Field | Default |
/// |-------|---------|
/// | `source_path` | `./questions.csv` |
/// | `shuffle` | `false` |
/// | `time_limit` | 30 seconds |
/// | `seed` | none (random order on every shuffle) |
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizConfig {
    /// Path of the delimited question file.
    pub source_path: PathBuf,
    /// Randomize question order before the session starts.
    pub shuffle: bool,
    /// Single deadline shared by every question.
    pub time_limit: Duration,
    /// Seed for a reproducible shuffle. Ignored unless `shuffle` is set.
    pub seed: Option<u64>,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            source_path: PathBuf::from(DEFAULT_SOURCE_PATH),
            shuffle: false,
            time_limit: DEFAULT_TIME_LIMIT,
            seed: None,
        }
    }
}

impl QuizConfig {
    // ==================== Builder Methods ====================

    pub fn with_source_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.source_path = path.into();
        self
    }

    pub fn with_shuffle(mut self, shuffle: bool) -> Self {
        self.shuffle = shuffle;
        self
    }

    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.time_limit = limit;
        self
    }

    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }
}
