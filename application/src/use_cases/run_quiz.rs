//! Run Quiz use case
//!
//! Drives a [`QuizSession`] under one wall-clock deadline shared by every
//! question. For each question exactly one answer read and the deadline
//! timer are raced; whichever resolves first wins and the other is dropped.
//!
//! ```text
//! arm deadline ─▶ pose question i ─▶ select! ─┬─ deadline  ──▶ Finished(TimedOut)
//!                        ▲                    ├─ cancelled ──▶ Finished(Interrupted)
//!                        │                    └─ answer    ──▶ score, i += 1
//!                        └────────────────────────────────────────┘
//! ```
//!
//! Ties go to the timer: the race is biased toward the deadline, and an
//! answer delivered at or after the deadline instant is discarded.

use crate::ports::answer_source::AnswerSource;
use crate::ports::quiz_observer::{NoObserver, QuizObserver};
use quiz_domain::{DomainError, Outcome, QuestionSet, QuizResult, QuizSession};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::time::{Instant, sleep_until};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

/// Stand-in deadline for limits too large to add to `Instant::now()`
const FAR_FUTURE: Duration = Duration::from_secs(60 * 60 * 24 * 365 * 30);

/// Errors that can occur while running a session.
///
/// Timeouts and interruptions are normal outcomes, not errors. These
/// variants only surface a broken session invariant.
#[derive(Error, Debug)]
pub enum RunQuizError {
    #[error("Session state error: {0}")]
    Session(#[from] DomainError),

    #[error("Question {0} is missing from the set")]
    MissingQuestion(usize),

    #[error("Session ended without a result")]
    Unfinished,
}

/// Input for the RunQuiz use case
#[derive(Debug, Clone)]
pub struct RunQuizInput {
    pub questions: QuestionSet,
    pub time_limit: Duration,
}

impl RunQuizInput {
    pub fn new(questions: QuestionSet, time_limit: Duration) -> Self {
        Self {
            questions,
            time_limit,
        }
    }
}

/// First event of a question's race
enum Race {
    Answer(Option<String>),
    Deadline,
    Cancelled,
}

/// Use case for running a timed quiz session
pub struct RunQuizUseCase<A: AnswerSource + 'static> {
    answers: Arc<A>,
    cancellation: Option<CancellationToken>,
}

impl<A: AnswerSource + 'static> RunQuizUseCase<A> {
    pub fn new(answers: Arc<A>) -> Self {
        Self {
            answers,
            cancellation: None,
        }
    }

    /// End the session as [`Outcome::Interrupted`] when `token` is cancelled.
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = Some(token);
        self
    }

    /// Execute the use case without display callbacks
    pub async fn execute(&self, input: RunQuizInput) -> Result<QuizResult, RunQuizError> {
        self.execute_with_observer(input, &NoObserver).await
    }

    /// Execute the use case, reporting session events to `observer`
    pub async fn execute_with_observer(
        &self,
        input: RunQuizInput,
        observer: &dyn QuizObserver,
    ) -> Result<QuizResult, RunQuizError> {
        let RunQuizInput {
            questions,
            time_limit,
        } = input;
        let total = questions.len();
        let mut session = QuizSession::new(total);

        let started = Instant::now();
        let deadline = started
            .checked_add(time_limit)
            .unwrap_or_else(|| started + FAR_FUTURE);
        let timer = sleep_until(deadline);
        tokio::pin!(timer);

        info!("Starting quiz: {} questions, {:?} limit", total, time_limit);
        observer.on_session_start(total, time_limit);
        session.start()?;

        while let Some(index) = session.current_index() {
            let question = questions
                .get(index)
                .ok_or(RunQuizError::MissingQuestion(index))?;
            let remaining = deadline.saturating_duration_since(Instant::now());
            observer.on_question(index, total, question, remaining);

            // Dropping the losing branch abandons its read.
            let race = tokio::select! {
                biased;
                _ = &mut timer => Race::Deadline,
                _ = wait_cancelled(self.cancellation.as_ref()) => Race::Cancelled,
                answer = self.answers.read_answer() => {
                    if Instant::now() >= deadline {
                        Race::Deadline
                    } else {
                        Race::Answer(answer)
                    }
                }
            };

            match race {
                Race::Answer(answer) => {
                    let response = answer.unwrap_or_else(|| {
                        debug!("Input closed, scoring question {} as empty", index + 1);
                        String::new()
                    });
                    let correct = question.is_correct(&response);
                    debug!(
                        "Question {} answered {}",
                        index + 1,
                        if correct { "correctly" } else { "incorrectly" }
                    );
                    session.record_answer(correct)?;
                    observer.on_answer(index, correct);
                }
                Race::Deadline => {
                    info!(
                        "Time limit reached after {} of {} questions",
                        session.asked(),
                        total
                    );
                    session.finish(Outcome::TimedOut)?;
                    observer.on_time_up();
                }
                Race::Cancelled => {
                    info!("Quiz interrupted after {} questions", session.asked());
                    session.finish(Outcome::Interrupted)?;
                    observer.on_interrupted();
                }
            }
        }

        let result = session
            .result(started.elapsed())
            .ok_or(RunQuizError::Unfinished)?;
        info!(
            "Quiz finished ({}): {}/{} correct, {} asked",
            result.outcome, result.correct, result.total, result.asked
        );
        observer.on_session_end(&result);
        Ok(result)
    }
}

async fn wait_cancelled(token: Option<&CancellationToken>) {
    match token {
        Some(token) => token.cancelled().await,
        None => std::future::pending().await,
    }
}
