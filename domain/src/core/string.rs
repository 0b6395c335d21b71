//! String utilities for the domain layer.

/// Normalize an answer for comparison: trim surrounding whitespace and
/// lowercase.
///
/// Applied to stored answers at load time and to user input at answer time,
/// so both sides of the comparison follow the same rule.
pub fn clean_input(s: &str) -> String {
    s.trim().to_lowercase()
}
