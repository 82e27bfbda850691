//! Terminal implementations of the query view

pub mod console_view;
