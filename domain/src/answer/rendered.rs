//! Display form of an answer

use super::result::AnswerResult;
use crate::core::error::QueryError;
use crate::core::labels::{ERROR_HEADLINE, NO_ANSWER_PLACEHOLDER};
use serde::{Deserialize, Serialize};

/// Text for the two regions of the result panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedAnswer {
    /// Text for the answer region
    pub answer: String,
    /// Text for the secondary (info) region
    pub info: String,
}

impl RenderedAnswer {
    /// Map a service result to display text.
    ///
    /// An absent or empty answer becomes [`NO_ANSWER_PLACEHOLDER`]; an absent
    /// info becomes the empty string.
    pub fn from_result(result: AnswerResult) -> Self {
        let answer = result
            .answer
            .filter(|a| !a.is_empty())
            .unwrap_or_else(|| NO_ANSWER_PLACEHOLDER.to_string());
        let info = result.info.unwrap_or_default();
        Self { answer, info }
    }

    /// Map a failed request to display text: fixed headline, error as detail.
    pub fn from_error(error: &QueryError) -> Self {
        Self {
            answer: ERROR_HEADLINE.to_string(),
            info: error.to_string(),
        }
    }

    /// Whether this is the rendering of a failure.
    pub fn is_error(&self) -> bool {
        self.answer == ERROR_HEADLINE
    }
}
