//! Output format value object

use serde::{Deserialize, Serialize};

/// How a rendered answer is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Headline and info text (default)
    #[default]
    Text,
    /// `{"answer": ..., "info": ...}`
    Json,
}
