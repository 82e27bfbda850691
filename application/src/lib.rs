//! Application layer for ragask
//!
//! This crate contains the query use case, port definitions, and
//! application configuration. It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::QueryParams;
pub use ports::{
    answer_service::{AnswerService, ServiceHealth},
    query_view::QueryView,
};
pub use use_cases::query_controller::{QueryController, SubmitOutcome};
pub use use_cases::trigger_guard::TriggerGuard;
