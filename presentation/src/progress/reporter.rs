//! Console reporting for a running quiz session

use crate::cli::duration::format_duration;
use colored::Colorize;
use quiz_application::QuizObserver;
use quiz_domain::Question;
use std::io::{self, Write};
use std::time::Duration;

/// Prints each prompt and the time's-up notice to stdout
#[derive(Debug, Default)]
pub struct ConsoleReporter;

impl ConsoleReporter {
    pub fn new() -> Self {
        Self
    }

    /// Prompt line for question `index` (0-based), without trailing newline
    pub fn prompt_line(&self, index: usize, question: &Question, remaining: Duration) -> String {
        let label = format!("Question {}:", index + 1).cyan().bold();
        let timer = format!("[{}]", format_duration(round_up_to_second(remaining)));
        let timer = if remaining < Duration::from_secs(10) {
            timer.red()
        } else {
            timer.dimmed()
        };
        format!("{} {} {} = ", timer, label, question.prompt())
    }
}

fn round_up_to_second(d: Duration) -> Duration {
    if d.subsec_nanos() > 0 {
        Duration::from_secs(d.as_secs() + 1)
    } else {
        d
    }
}

impl QuizObserver for ConsoleReporter {
    fn on_question(&self, index: usize, _total: usize, question: &Question, remaining: Duration) {
        print!("{}", self.prompt_line(index, question, remaining));
        let _ = io::stdout().flush();
    }

    fn on_time_up(&self) {
        println!("\n{}", "Time's up!".red().bold());
    }

    fn on_interrupted(&self) {
        println!("\n{}", "Quiz interrupted.".yellow());
    }
}
