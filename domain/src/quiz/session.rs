//! Quiz session state machine.
//!
//! ```text
//! Idle ──start──▶ AwaitingAnswer(0) ──answer──▶ AwaitingAnswer(i+1) ── … ──▶ Finished(Completed)
//!                        │
//!                        └──deadline / interrupt──▶ Finished(TimedOut | Interrupted)
//! ```
//!
//! `correct <= asked <= total` holds after every transition. An answer that
//! was being collected when the deadline fired is never recorded.

use super::result::QuizResult;
use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// How a session reached [`SessionState::Finished`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// Every question was answered
    Completed,
    /// The session deadline elapsed first
    TimedOut,
    /// The user interrupted the run (Ctrl-C)
    Interrupted,
}

impl Outcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Completed => "completed",
            Outcome::TimedOut => "timed_out",
            Outcome::Interrupted => "interrupted",
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Current position of a session in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    AwaitingAnswer { index: usize },
    Finished(Outcome),
}

/// Per-run session state (Entity)
///
/// Mutated only by the session runner. Once finished, every further
/// transition is rejected and the counters are frozen.
#[derive(Debug, Clone)]
pub struct QuizSession {
    total: usize,
    asked: usize,
    correct: usize,
    state: SessionState,
}

impl QuizSession {
    pub fn new(total: usize) -> Self {
        Self {
            total,
            asked: 0,
            correct: 0,
            state: SessionState::Idle,
        }
    }

    /// Arm the session. An empty set finishes immediately as `Completed`.
    pub fn start(&mut self) -> Result<SessionState, DomainError> {
        match self.state {
            SessionState::Idle => {
                self.state = if self.total == 0 {
                    SessionState::Finished(Outcome::Completed)
                } else {
                    SessionState::AwaitingAnswer { index: 0 }
                };
                Ok(self.state)
            }
            SessionState::AwaitingAnswer { .. } => Err(DomainError::SessionAlreadyStarted),
            SessionState::Finished(_) => Err(DomainError::SessionFinished),
        }
    }

    /// Score the answer to the current question and advance.
    pub fn record_answer(&mut self, correct: bool) -> Result<SessionState, DomainError> {
        match self.state {
            SessionState::AwaitingAnswer { index } => {
                self.asked += 1;
                if correct {
                    self.correct += 1;
                }
                let next = index + 1;
                self.state = if next < self.total {
                    SessionState::AwaitingAnswer { index: next }
                } else {
                    SessionState::Finished(Outcome::Completed)
                };
                Ok(self.state)
            }
            SessionState::Idle => Err(DomainError::SessionNotStarted),
            SessionState::Finished(_) => Err(DomainError::SessionFinished),
        }
    }

    /// End the session early. The in-flight question is not counted.
    pub fn finish(&mut self, outcome: Outcome) -> Result<SessionState, DomainError> {
        match self.state {
            SessionState::AwaitingAnswer { .. } => {
                self.state = SessionState::Finished(outcome);
                Ok(self.state)
            }
            SessionState::Idle => Err(DomainError::SessionNotStarted),
            SessionState::Finished(_) => Err(DomainError::SessionFinished),
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Index of the question awaiting an answer, if any
    pub fn current_index(&self) -> Option<usize> {
        match self.state {
            SessionState::AwaitingAnswer { index } => Some(index),
            _ => None,
        }
    }

    pub fn outcome(&self) -> Option<Outcome> {
        match self.state {
            SessionState::Finished(outcome) => Some(outcome),
            _ => None,
        }
    }

    pub fn asked(&self) -> usize {
        self.asked
    }

    pub fn correct(&self) -> usize {
        self.correct
    }

    pub fn total(&self) -> usize {
        self.total
    }

    /// Snapshot the final score. `None` until the session is finished.
    pub fn result(&self, elapsed: Duration) -> Option<QuizResult> {
        self.outcome().map(|outcome| QuizResult {
            correct: self.correct,
            asked: self.asked,
            total: self.total,
            outcome,
            elapsed_ms: u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_invariant(session: &QuizSession) {
        assert!(session.correct() <= session.asked());
        assert!(session.asked() <= session.total());
    }

    #[test]
    fn test_new_session_is_idle() {
        let session = QuizSession::new(3);
        assert_eq!(session.state(), SessionState::Idle);
        assert_eq!(session.current_index(), None);
        assert!(session.result(Duration::ZERO).is_none());
    }

    #[test]
    fn test_full_run_completes() {
        let mut session = QuizSession::new(2);
        assert_eq!(session.start(), Ok(SessionState::AwaitingAnswer { index: 0 }));
        assert_eq!(
            session.record_answer(true),
            Ok(SessionState::AwaitingAnswer { index: 1 })
        );
        assert_invariant(&session);
        assert_eq!(
            session.record_answer(false),
            Ok(SessionState::Finished(Outcome::Completed))
        );
        assert_invariant(&session);

        let result = session.result(Duration::from_millis(1500)).unwrap();
        assert_eq!(result.correct, 1);
        assert_eq!(result.asked, 2);
        assert_eq!(result.total, 2);
        assert_eq!(result.outcome, Outcome::Completed);
        assert_eq!(result.elapsed_ms, 1500);
    }

    #[test]
    fn test_empty_session_finishes_on_start() {
        let mut session = QuizSession::new(0);
        assert_eq!(
            session.start(),
            Ok(SessionState::Finished(Outcome::Completed))
        );
        let result = session.result(Duration::ZERO).unwrap();
        assert_eq!((result.correct, result.asked, result.total), (0, 0, 0));
    }

    #[test]
    fn test_timeout_does_not_count_in_flight_question() {
        let mut session = QuizSession::new(3);
        session.start().unwrap();
        session.record_answer(true).unwrap();
        assert_eq!(
            session.finish(Outcome::TimedOut),
            Ok(SessionState::Finished(Outcome::TimedOut))
        );

        let result = session.result(Duration::from_secs(5)).unwrap();
        assert_eq!(result.asked, 1);
        assert_eq!(result.correct, 1);
        assert_eq!(result.total, 3);
        assert_eq!(result.outcome, Outcome::TimedOut);
    }

    #[test]
    fn test_no_writes_after_finished() {
        let mut session = QuizSession::new(2);
        session.start().unwrap();
        session.finish(Outcome::TimedOut).unwrap();

        assert_eq!(session.record_answer(true), Err(DomainError::SessionFinished));
        assert_eq!(
            session.finish(Outcome::Interrupted),
            Err(DomainError::SessionFinished)
        );
        assert_eq!(session.start(), Err(DomainError::SessionFinished));
        assert_eq!(session.asked(), 0);
        assert_eq!(session.correct(), 0);
        assert_eq!(session.outcome(), Some(Outcome::TimedOut));
    }

    #[test]
    fn test_transitions_require_start() {
        let mut session = QuizSession::new(1);
        assert_eq!(session.record_answer(true), Err(DomainError::SessionNotStarted));
        assert_eq!(
            session.finish(Outcome::TimedOut),
            Err(DomainError::SessionNotStarted)
        );
        session.start().unwrap();
        assert_eq!(session.start(), Err(DomainError::SessionAlreadyStarted));
    }

    #[test]
    fn test_outcome_display() {
        assert_eq!(Outcome::TimedOut.to_string(), "timed_out");
        assert_eq!(Outcome::Completed.as_str(), "completed");
    }
}
