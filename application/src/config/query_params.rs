//! Query parameters — request limits for the query use case.
//!
//! [`QueryParams`] groups the static parameters that bound a single
//! submit cycle in [`QueryController`](crate::use_cases::query_controller::QueryController).

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Request limits for one submit cycle.
///
/// With the default (`timeout: None`) a hung request keeps the trigger
/// control disabled until the transport itself gives up.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryParams {
    /// Upper bound on the wait for the answer service.
    pub timeout: Option<Duration>,
}

impl QueryParams {
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build from a seconds value where `0` means "no timeout".
    pub fn from_timeout_secs(secs: u64) -> Self {
        let timeout = (secs > 0).then(|| Duration::from_secs(secs));
        Self { timeout }
    }
}
