//! CSV question source
//!
//! Reads `prompt,answer` records with no header row. Every record must
//! have exactly two fields; the first bad record fails the whole load.

use csv::{ErrorKind, ReaderBuilder, StringRecord};
use quiz_application::{LoadError, QuestionSource};
use quiz_domain::{Question, QuestionSet};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Question source backed by a comma-separated file.
#[derive(Debug, Clone, Default)]
pub struct CsvQuestionSource;

impl CsvQuestionSource {
    pub fn new() -> Self {
        Self
    }

    /// Parse records from any reader. `path` is only used in errors.
    pub fn parse<R: Read>(reader: R, path: &Path) -> Result<QuestionSet, LoadError> {
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);

        let mut questions = Vec::new();
        for (i, record) in reader.records().enumerate() {
            let record = record.map_err(|e| Self::map_csv_error(path, e))?;
            questions.push(Self::to_question(path, i + 1, &record)?);
        }

        if questions.is_empty() {
            return Err(LoadError::Empty {
                path: path.to_path_buf(),
            });
        }

        debug!("Parsed {} records from {}", questions.len(), path.display());
        Ok(QuestionSet::new(questions))
    }

    fn to_question(
        path: &Path,
        number: usize,
        record: &StringRecord,
    ) -> Result<Question, LoadError> {
        if record.len() != 2 {
            let line = record.position().map(|p| p.line());
            return Err(LoadError::Format {
                path: path.to_path_buf(),
                line,
                reason: format!(
                    "record {}{} has {} field{}, expected 2",
                    number,
                    line.map(|l| format!(" (line {})", l)).unwrap_or_default(),
                    record.len(),
                    if record.len() == 1 { "" } else { "s" }
                ),
            });
        }
        Ok(Question::new(&record[0], &record[1]))
    }

    fn map_csv_error(path: &Path, error: csv::Error) -> LoadError {
        let line = error.position().map(|p| p.line());
        let reason = error.to_string();
        match error.into_kind() {
            ErrorKind::Io(source) => LoadError::Io {
                path: path.to_path_buf(),
                source,
            },
            _ => LoadError::Format {
                path: path.to_path_buf(),
                line,
                reason,
            },
        }
    }
}

impl QuestionSource for CsvQuestionSource {
    fn load(&self, path: &Path) -> Result<QuestionSet, LoadError> {
        // Tolerate stray whitespace around a path typed on the command line.
        let path = path
            .to_str()
            .map(|s| PathBuf::from(s.trim()))
            .unwrap_or_else(|| path.to_path_buf());

        let file = File::open(&path).map_err(|source| LoadError::Io {
            path: path.clone(),
            source,
        })?;
        Self::parse(file, &path)
    }
}
