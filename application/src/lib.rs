//! Application layer for timed-quiz
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::QuizConfig;
pub use ports::{
    answer_source::AnswerSource,
    question_source::{LoadError, QuestionSource},
    quiz_observer::{NoObserver, QuizObserver},
};
pub use use_cases::load_questions::{LoadQuestionsInput, LoadQuestionsUseCase};
pub use use_cases::run_quiz::{RunQuizError, RunQuizInput, RunQuizUseCase};
