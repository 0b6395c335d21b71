//! Load Questions use case
//!
//! Loads a question set through a [`QuestionSource`] and applies the
//! optional shuffle before any session consumes it.

use crate::config::QuizConfig;
use crate::ports::question_source::{LoadError, QuestionSource};
use quiz_domain::QuestionSet;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, info};

/// Input for the LoadQuestions use case
#[derive(Debug, Clone)]
pub struct LoadQuestionsInput {
    pub path: PathBuf,
    pub shuffle: bool,
    pub seed: Option<u64>,
}

impl LoadQuestionsInput {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            shuffle: false,
            seed: None,
        }
    }

    pub fn shuffled(mut self, seed: Option<u64>) -> Self {
        self.shuffle = true;
        self.seed = seed;
        self
    }
}

impl From<&QuizConfig> for LoadQuestionsInput {
    fn from(config: &QuizConfig) -> Self {
        Self {
            path: config.source_path.clone(),
            shuffle: config.shuffle,
            seed: config.seed,
        }
    }
}

/// Use case for loading (and optionally shuffling) the question set
pub struct LoadQuestionsUseCase<S: QuestionSource> {
    source: Arc<S>,
}

impl<S: QuestionSource> LoadQuestionsUseCase<S> {
    pub fn new(source: Arc<S>) -> Self {
        Self { source }
    }

    /// Load the set. Load errors propagate unchanged.
    pub fn execute(&self, input: LoadQuestionsInput) -> Result<QuestionSet, LoadError> {
        let mut questions = self.source.load(&input.path)?;
        info!(
            "Loaded {} questions from {}",
            questions.len(),
            input.path.display()
        );

        if input.shuffle {
            match input.seed {
                Some(seed) => {
                    debug!("Shuffling with seed {}", seed);
                    questions.shuffle_seeded(seed);
                }
                None => {
                    debug!("Shuffling with thread RNG");
                    questions.shuffle();
                }
            }
        }

        Ok(questions)
    }
}
