//! Question value object

use super::string::clean_input;
use serde::Serialize;

/// A single quiz question (Value Object)
///
/// The prompt is kept verbatim for display. The answer is normalized with
/// [`clean_input`] on construction and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Question {
    prompt: String,
    answer: String,
}

impl Question {
    /// Create a new question, normalizing the raw answer
    pub fn new(prompt: impl Into<String>, raw_answer: &str) -> Self {
        Self {
            prompt: prompt.into(),
            answer: clean_input(raw_answer),
        }
    }

    /// Get the prompt shown to the user
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Get the normalized answer
    pub fn answer(&self) -> &str {
        &self.answer
    }

    /// Check a raw user response against the stored answer
    pub fn is_correct(&self, response: &str) -> bool {
        clean_input(response) == self.answer
    }
}

impl std::fmt::Display for Question {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.prompt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_creation() {
        let q = Question::new("What is 2 + 2?", "4");
        assert_eq!(q.prompt(), "What is 2 + 2?");
        assert_eq!(q.answer(), "4");
    }

    #[test]
    fn test_answer_normalized_prompt_verbatim() {
        let q = Question::new("  Capital of FRANCE? ", "  Paris ");
        assert_eq!(q.prompt(), "  Capital of FRANCE? ");
        assert_eq!(q.answer(), "paris");
    }

    #[test]
    fn test_is_correct_ignores_case_and_whitespace() {
        let q = Question::new("capital of France?", "paris");
        assert!(q.is_correct("paris"));
        assert!(q.is_correct("PARIS\n"));
        assert!(q.is_correct("  Paris  "));
    }

    #[test]
    fn test_is_correct_rejects_partial_and_wrong() {
        let q = Question::new("capital of France?", "paris");
        assert!(!q.is_correct("par"));
        assert!(!q.is_correct("paris, france"));
        assert!(!q.is_correct("london"));
    }

    #[test]
    fn test_empty_input_only_matches_empty_answer() {
        let q = Question::new("2+2?", "4");
        assert!(!q.is_correct(""));
        assert!(!q.is_correct("   \n"));

        let blank = Question::new("say nothing", "  ");
        assert!(blank.is_correct(""));
        assert!(blank.is_correct(" \n"));
    }
}
