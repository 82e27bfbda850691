//! Scoped ownership of the trigger control.
//!
//! A [`TriggerGuard`] marks a controller as busy for as long as it lives.
//! Once [`engage`](TriggerGuard::engage)d it also disables the trigger
//! control and shows the in-progress label; dropping it restores both, on
//! every exit path (early return, error, panic, or a dropped future).

use crate::ports::query_view::QueryView;
use ragask_domain::{ASK_LABEL, THINKING_LABEL};
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::trace;

/// Busy marker for one in-flight submission.
pub struct TriggerGuard<'a> {
    view: &'a dyn QueryView,
    in_flight: &'a AtomicBool,
    engaged: bool,
}

impl<'a> TriggerGuard<'a> {
    /// Claim the in-flight slot. Returns `None` if a submission already holds it.
    ///
    /// The view is not touched until [`engage`](Self::engage) is called.
    pub fn try_acquire(view: &'a dyn QueryView, in_flight: &'a AtomicBool) -> Option<Self> {
        in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()?;
        Some(Self {
            view,
            in_flight,
            engaged: false,
        })
    }

    /// Disable the trigger control and show the in-progress label.
    pub fn engage(&mut self) {
        if self.engaged {
            return;
        }
        self.view.set_trigger_enabled(false);
        self.view.set_trigger_label(THINKING_LABEL);
        self.engaged = true;
        trace!("Trigger control disabled");
    }

    pub fn is_engaged(&self) -> bool {
        self.engaged
    }
}

impl Drop for TriggerGuard<'_> {
    fn drop(&mut self) {
        if self.engaged {
            self.view.set_trigger_enabled(true);
            self.view.set_trigger_label(ASK_LABEL);
            trace!("Trigger control restored");
        }
        self.in_flight.store(false, Ordering::Release);
    }
}
