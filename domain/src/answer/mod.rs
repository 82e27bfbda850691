//! Answer value objects
//!
//! [`AnswerResult`] mirrors the service's response body, with every field
//! optional. [`RenderedAnswer`] is what ends up on screen; the mapping
//! between the two is the only place display defaults are applied.

mod rendered;
mod result;

pub use rendered::RenderedAnswer;
pub use result::AnswerResult;
