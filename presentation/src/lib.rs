//! Presentation layer for ragask
//!
//! This crate contains the CLI definition, the console implementation of
//! the query view, output formatters, the progress spinner and the
//! interactive prompt.

pub mod chat;
pub mod cli;
pub mod interrupt;
pub mod output;
pub mod progress;
pub mod view;

// Re-export commonly used types
pub use chat::AskRepl;
pub use cli::commands::Cli;
pub use interrupt::{health_interruptible, submit_interruptible};
pub use output::console::ConsoleFormatter;
pub use progress::indicator::ThinkingIndicator;
pub use view::console_view::ConsoleView;
