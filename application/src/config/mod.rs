//! Application-level configuration.
//!
//! - [`QueryParams`] — per-request limits applied by the query use case

pub mod query_params;

pub use query_params::QueryParams;
