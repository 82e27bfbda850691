//! Domain layer for ragask
//!
//! This crate contains the value objects exchanged with the answer service
//! and the error taxonomy of a query. It has no dependencies on
//! infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! - **Question**: trimmed, non-empty user input, the only thing ever sent
//! - **AnswerResult**: the loosely typed body returned by the service
//! - **RenderedAnswer**: what the result panel displays, after defaulting

pub mod answer;
pub mod config;
pub mod core;

// Re-export commonly used types
pub use answer::{AnswerResult, RenderedAnswer};
pub use config::OutputFormat;
pub use core::{
    error::QueryError,
    labels::{
        ASK_LABEL, EMPTY_QUESTION_NOTICE, ERROR_HEADLINE, NO_ANSWER_PLACEHOLDER, THINKING_LABEL,
    },
    question::Question,
};
