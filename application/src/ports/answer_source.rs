//! Answer source port
//!
//! One call collects one line of user input. The session runner races each
//! call against the session deadline and simply drops the future of the
//! losing read.

use async_trait::async_trait;

/// Source of user answers
///
/// # Contract
///
/// - `read_answer` produces at most one line per call.
/// - Dropping the returned future abandons the read. A result that arrives
///   later must go nowhere, and an abandoned read must never keep the
///   process alive.
/// - `None` means input is closed (end of file or a read failure).
#[async_trait]
pub trait AnswerSource: Send + Sync {
    async fn read_answer(&self) -> Option<String>;
}
