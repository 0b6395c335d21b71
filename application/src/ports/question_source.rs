//! Question source port
//!
//! Defines how the application obtains a [`QuestionSet`]. The CSV adapter
//! lives in the infrastructure layer.

use quiz_domain::QuestionSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while loading questions.
///
/// Each variant is fatal: no quiz session starts and no partial set is
/// returned.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to read question file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed question file {}: {reason}", .path.display())]
    Format {
        path: PathBuf,
        /// 1-based line of the offending record, when known
        line: Option<u64>,
        reason: String,
    },

    #[error("Question file {} contains no questions", .path.display())]
    Empty { path: PathBuf },
}

impl LoadError {
    /// Path of the source that failed to load
    pub fn path(&self) -> &Path {
        match self {
            LoadError::Io { path, .. }
            | LoadError::Format { path, .. }
            | LoadError::Empty { path } => path,
        }
    }
}

/// Source of quiz questions
///
/// Implementations must normalize answers (via [`quiz_domain::Question::new`]),
/// reject any record that is not exactly `prompt, answer`, and report an
/// empty source as [`LoadError::Empty`].
pub trait QuestionSource: Send + Sync {
    fn load(&self, path: &Path) -> Result<QuestionSet, LoadError>;
}
