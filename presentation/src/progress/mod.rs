//! Progress display while a request is in flight

pub mod indicator;
