//! Use cases
//!
//! - [`load_questions`]: load a question set and optionally shuffle it
//! - [`run_quiz`]: run a timed session over a question set

pub mod load_questions;
pub mod run_quiz;
