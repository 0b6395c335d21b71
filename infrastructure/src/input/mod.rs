//! User input adapters

mod line_source;

pub use line_source::LineAnswerSource;
