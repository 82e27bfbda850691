//! Core domain concepts shared across all subdomains.
//!
//! - [`question::Question`] — a validated question to send to the answer service
//! - [`error::QueryError`] — everything that can go wrong in one query cycle
//! - [`labels`] — the fixed strings shown on the trigger control and result panel

pub mod error;
pub mod labels;
pub mod question;
