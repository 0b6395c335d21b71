//! Domain layer for timed-quiz
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Question Set
//!
//! An ordered sequence of [`Question`]s. Each answer is normalized once at
//! construction so scoring is a plain equality check.
//!
//! ## Quiz Session
//!
//! [`QuizSession`] is the per-run state machine:
//!
//! - **Idle**: created, deadline not yet armed
//! - **AwaitingAnswer**: question *i* is displayed
//! - **Finished**: terminal, carries the [`Outcome`]

pub mod config;
pub mod core;
pub mod quiz;

// Re-export commonly used types
pub use config::OutputFormat;
pub use core::{error::DomainError, question::Question, string::clean_input};
pub use quiz::{
    question_set::QuestionSet,
    result::QuizResult,
    session::{Outcome, QuizSession, SessionState},
};
