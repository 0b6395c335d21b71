//! Quiz observer port
//!
//! Defines the interface for displaying session progress.

use quiz_domain::{Question, QuizResult};
use std::time::Duration;

/// Callback for session events
///
/// Implementations live in the presentation layer and decide how prompts
/// and the time's-up notice are shown. The runner never writes to the
/// terminal itself.
pub trait QuizObserver: Send + Sync {
    /// Called once when the deadline is armed
    fn on_session_start(&self, _total: usize, _time_limit: Duration) {}

    /// Called when question `index` (0-based) is posed
    fn on_question(&self, index: usize, total: usize, question: &Question, remaining: Duration);

    /// Called after an answer has been scored
    fn on_answer(&self, _index: usize, _correct: bool) {}

    /// Called when the deadline ends the session
    fn on_time_up(&self);

    /// Called when the session is cancelled by the user
    fn on_interrupted(&self) {}

    /// Called with the final score
    fn on_session_end(&self, _result: &QuizResult) {}
}

/// No-op observer for when nothing should be displayed
pub struct NoObserver;

impl QuizObserver for NoObserver {
    fn on_question(
        &self,
        _index: usize,
        _total: usize,
        _question: &Question,
        _remaining: Duration,
    ) {
    }
    fn on_time_up(&self) {}
}
