//! CLI entrypoint for timed-quiz
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use quiz_application::{
    AnswerSource, LoadQuestionsInput, LoadQuestionsUseCase, RunQuizInput, RunQuizUseCase,
};
use quiz_infrastructure::{ConfigLoader, CsvQuestionSource, LineAnswerSource};
use quiz_presentation::{Cli, ConsoleFormatter, ConsoleReporter, OutputConfig};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    // Logs go to stderr so they never interleave with prompts on stdout.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.show_config {
        print!("{}", ConfigLoader::describe_sources());
        return Ok(());
    }

    // === Configuration ===
    let file_config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };
    for issue in file_config.validate() {
        warn!("{}", issue);
    }

    let quiz_config = cli.apply_to(file_config.quiz.to_quiz_config());
    let output = cli.apply_output(OutputConfig::new(
        file_config.output.format,
        file_config.output.color,
    ));
    output.apply_color();

    info!(
        "Starting timed-quiz with {} (shuffle: {}, limit: {:?})",
        quiz_config.source_path.display(),
        quiz_config.shuffle,
        quiz_config.time_limit
    );

    // === Dependency Injection ===
    let loader = LoadQuestionsUseCase::new(Arc::new(CsvQuestionSource::new()));
    let questions = loader
        .execute(LoadQuestionsInput::from(&quiz_config))
        .context("Failed to load questions")?;

    let answers = Arc::new(LineAnswerSource::stdin());

    println!(
        "{}",
        ConsoleFormatter::welcome(questions.len(), quiz_config.time_limit)
    );
    if !cli.no_wait {
        println!("{}", ConsoleFormatter::press_enter());
        answers.read_answer().await;
    }

    // Ctrl-C ends the session early with a score instead of killing the process.
    let cancellation = CancellationToken::new();
    {
        let cancellation = cancellation.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                cancellation.cancel();
            }
        });
    }

    let use_case = RunQuizUseCase::new(answers).with_cancellation(cancellation);
    let reporter = ConsoleReporter::new();
    let result = use_case
        .execute_with_observer(
            RunQuizInput::new(questions, quiz_config.time_limit),
            &reporter,
        )
        .await?;

    println!("{}", ConsoleFormatter::format(&result, output.format));

    Ok(())
}
