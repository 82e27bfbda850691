//! Output formatting for rendered answers

pub mod console;
