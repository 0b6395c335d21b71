//! Domain error types

use thiserror::Error;

/// Domain-level errors
///
/// Raised when a [`QuizSession`](crate::QuizSession) is driven through a
/// transition its current state does not allow.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Quiz session has already started")]
    SessionAlreadyStarted,

    #[error("Quiz session has not started")]
    SessionNotStarted,

    #[error("Quiz session is already finished")]
    SessionFinished,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finished_error_display() {
        let error = DomainError::SessionFinished;
        assert_eq!(error.to_string(), "Quiz session is already finished");
    }
}
