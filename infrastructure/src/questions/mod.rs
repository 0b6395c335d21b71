//! Question file adapters

mod csv_source;

pub use csv_source::CsvQuestionSource;
