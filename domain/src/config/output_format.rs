//! Output format value object

use serde::{Deserialize, Serialize};

/// Output format for the final quiz summary
///
/// This is a domain concept representing how the result should be reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable score line (default)
    #[default]
    Text,
    /// JSON object for scripting
    Json,
}
