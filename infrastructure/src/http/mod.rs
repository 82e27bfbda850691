//! HTTP adapter for the answer service.
//!
//! [`HttpAnswerService`] implements the
//! [`AnswerService`](ragask_application::AnswerService) port with `reqwest`.

mod answer_client;
mod error;

pub use answer_client::HttpAnswerService;
pub use error::HttpSetupError;
