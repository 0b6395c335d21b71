//! Core domain concepts shared across all subdomains.
//!
//! - [`question::Question`]: a prompt paired with its normalized answer
//! - [`string::clean_input`]: the normalization rule used for every comparison
//! - [`error::DomainError`]: domain-level errors

pub mod error;
pub mod question;
pub mod string;
