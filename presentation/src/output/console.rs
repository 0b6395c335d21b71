//! Console output formatter for quiz text

use crate::cli::duration::format_duration;
use colored::Colorize;
use quiz_domain::{Outcome, OutputFormat, QuizResult};
use std::time::Duration;

/// Formats the welcome screen and final score for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Welcome text shown before the session starts
    pub fn welcome(total: usize, time_limit: Duration) -> String {
        format!(
            "{}\nYou have {} to answer as many of the {} questions as you can. Good luck!\n",
            "Welcome to the Quiz Game!".cyan().bold(),
            format_duration(time_limit).yellow().bold(),
            total
        )
    }

    /// Prompt shown while waiting for the user to start
    pub fn press_enter() -> String {
        format!("{}", "Press Enter to start the quiz...".dimmed())
    }

    /// Format the result in the requested format
    pub fn format(result: &QuizResult, format: OutputFormat) -> String {
        match format {
            OutputFormat::Text => Self::format_text(result),
            OutputFormat::Json => Self::format_json(result),
        }
    }

    /// Format the score line
    pub fn format_text(result: &QuizResult) -> String {
        let score = format!("{} out of {}", result.correct, result.total);
        let score = if result.total > 0 && result.correct == result.total {
            score.green().bold()
        } else {
            score.bold()
        };

        let mut output = format!("You got {} questions correct!", score);
        if result.outcome == Outcome::Interrupted {
            output.push_str(&format!(
                "\n{}",
                format!("(stopped after {} questions)", result.asked).dimmed()
            ));
        }
        output
    }

    /// Format as JSON
    pub fn format_json(result: &QuizResult) -> String {
        serde_json::to_string_pretty(result).unwrap_or_else(|_| "{}".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(correct: usize, asked: usize, total: usize, outcome: Outcome) -> QuizResult {
        QuizResult {
            correct,
            asked,
            total,
            outcome,
            elapsed_ms: 1234,
        }
    }

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn test_format_text_reports_total_as_denominator() {
        plain();
        let text = ConsoleFormatter::format_text(&result(1, 1, 3, Outcome::TimedOut));
        assert_eq!(text, "You got 1 out of 3 questions correct!");
    }

    #[test]
    fn test_format_text_interrupted_notes_asked() {
        plain();
        let text = ConsoleFormatter::format_text(&result(2, 2, 5, Outcome::Interrupted));
        assert!(text.starts_with("You got 2 out of 5 questions correct!"));
        assert!(text.contains("stopped after 2 questions"));
    }

    #[test]
    fn test_format_json() {
        let json =
            ConsoleFormatter::format(&result(2, 2, 2, Outcome::Completed), OutputFormat::Json);
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["correct"], 2);
        assert_eq!(value["total"], 2);
        assert_eq!(value["outcome"], "completed");
        assert_eq!(value["elapsed_ms"], 1234);
    }

    #[test]
    fn test_welcome_mentions_limit() {
        plain();
        let text = ConsoleFormatter::welcome(12, Duration::from_secs(90));
        assert!(text.contains("You have 1m 30s"));
        assert!(text.contains("12 questions"));
    }
}
