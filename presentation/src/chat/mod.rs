//! Interactive prompt module
//!
//! Provides a line-editor based prompt that submits each line as a question.

mod repl;

pub use repl::AskRepl;
