//! Final score of a quiz run.

use super::session::Outcome;
use serde::{Deserialize, Serialize};

/// Result of a finished quiz session (Value Object)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizResult {
    /// Answers that matched the stored answer
    pub correct: usize,
    /// Questions answered before the session ended
    pub asked: usize,
    /// Size of the question set, reported as the denominator
    pub total: usize,
    /// How the session ended
    pub outcome: Outcome,
    /// Wall-clock time from session start to finish, in milliseconds
    pub elapsed_ms: u64,
}
