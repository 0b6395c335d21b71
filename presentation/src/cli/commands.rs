//! CLI command definitions

use super::duration::parse_duration;
use crate::config::OutputConfig;
use clap::{Parser, ValueEnum};
use quiz_application::QuizConfig;
use std::path::PathBuf;
use std::time::Duration;

/// Output format for the final score
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// "You got X out of Y questions correct!"
    Text,
    /// JSON object with counts, outcome and elapsed time
    Json,
}

impl From<OutputFormat> for quiz_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => quiz_domain::OutputFormat::Text,
            OutputFormat::Json => quiz_domain::OutputFormat::Json,
        }
    }
}

/// CLI arguments for timed-quiz
#[derive(Parser, Debug)]
#[command(name = "timed-quiz")]
#[command(author, version, about = "Timed quiz over a CSV file of question,answer pairs")]
#[command(long_about = r#"
Timed quiz over a CSV file of question,answer pairs.

Questions are asked one at a time. A single time limit covers the whole
quiz; when it runs out the current question is abandoned and the score is
reported. Answers are compared ignoring case and surrounding whitespace.

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. TIMED_QUIZ_*        Environment variables
3. ./quiz.toml         Project-level config
4. ~/.config/timed-quiz/config.toml   Global config

Example:
  timed-quiz
  timed-quiz --csv problems.csv --limit 1m30s --shuffle
  timed-quiz --shuffle --seed 42 --output json
"#)]
pub struct Cli {
    /// A CSV file in the format of 'question,answer' [default: ./questions.csv]
    #[arg(long, value_name = "PATH")]
    pub csv: Option<PathBuf>,

    /// Shuffle the quiz questions
    #[arg(short, long)]
    pub shuffle: bool,

    /// Time limit for the whole quiz, e.g. 30, 45s, 1m30s, 500ms [default: 30s]
    #[arg(short, long, value_name = "DURATION", value_parser = parse_duration)]
    pub limit: Option<Duration>,

    /// Seed for a reproducible shuffle (implies --shuffle)
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Output format for the final score
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Start immediately instead of waiting for Enter
    #[arg(short = 'y', long)]
    pub no_wait: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

impl Cli {
    /// Apply explicitly given flags on top of file-based settings
    pub fn apply_to(&self, mut config: QuizConfig) -> QuizConfig {
        if let Some(csv) = &self.csv {
            config.source_path = csv.clone();
        }
        if let Some(limit) = self.limit {
            config.time_limit = limit;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
            config.shuffle = true;
        }
        if self.shuffle {
            config.shuffle = true;
        }
        config
    }

    /// Apply output flags on top of file-based output settings
    pub fn apply_output(&self, mut output: OutputConfig) -> OutputConfig {
        if let Some(format) = self.output {
            output.format = format.into();
        }
        if self.no_color {
            output.color = false;
        }
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("timed-quiz").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_defaults_leave_config_untouched() {
        let cli = parse(&[]);
        assert_eq!(cli.apply_to(QuizConfig::default()), QuizConfig::default());
        assert_eq!(cli.verbose, 0);
        assert!(!cli.no_wait);
    }

    #[test]
    fn test_flags_override_config() {
        let cli = parse(&["--csv", "problems.csv", "--shuffle", "--limit", "1m30s"]);
        let config = cli.apply_to(QuizConfig::default().with_time_limit(Duration::from_secs(5)));

        assert_eq!(config.source_path, PathBuf::from("problems.csv"));
        assert!(config.shuffle);
        assert_eq!(config.time_limit, Duration::from_secs(90));
    }

    #[test]
    fn test_seed_implies_shuffle() {
        let cli = parse(&["--seed", "42"]);
        let config = cli.apply_to(QuizConfig::default());
        assert!(config.shuffle);
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn test_file_shuffle_survives_absent_flag() {
        let cli = parse(&[]);
        let config = cli.apply_to(QuizConfig::default().with_shuffle(true));
        assert!(config.shuffle);
    }

    #[test]
    fn test_limit_accepts_bare_seconds() {
        let cli = parse(&["--limit", "45"]);
        assert_eq!(cli.limit, Some(Duration::from_secs(45)));

        let cli = parse(&["-l", "500ms"]);
        assert_eq!(cli.limit, Some(Duration::from_millis(500)));
    }

    #[test]
    fn test_invalid_limit_is_rejected() {
        let result = Cli::try_parse_from(["timed-quiz", "--limit", "soon"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_output_flags() {
        let cli = parse(&["--output", "json", "--no-color", "-vv"]);
        let output = cli.apply_output(OutputConfig::default());
        assert_eq!(output.format, quiz_domain::OutputFormat::Json);
        assert!(!output.color);
        assert_eq!(cli.verbose, 2);
    }
}
