//! Quiz subdomain: the question set, its shuffler, and the session state
//! machine that scores a run.

pub mod question_set;
pub mod result;
pub mod session;
