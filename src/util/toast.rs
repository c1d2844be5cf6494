//! Showing toasts and arming their auto-dismiss timers.
//!
//! Timers go through [`ToastTimer`], provided via context. The app root
//! provides the browser timer; tests provide one they can fire by hand.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use std::sync::Arc;
use std::time::Duration;

use leptos::prelude::*;

use crate::state::toast::{Toast, ToastHandle, ToastState};

/// Callback run when a toast's duration has elapsed.
pub type ExpiryCallback = Box<dyn FnOnce() + Send>;

type ScheduleFn = dyn Fn(Duration, ExpiryCallback) + Send + Sync;

/// Schedules a callback after a delay.
#[derive(Clone)]
pub struct ToastTimer(Arc<ScheduleFn>);

impl ToastTimer {
    pub fn new(schedule: impl Fn(Duration, ExpiryCallback) + Send + Sync + 'static) -> Self {
        Self(Arc::new(schedule))
    }

    /// `setTimeout` in the browser; outside it, expiry callbacks are dropped.
    pub fn browser() -> Self {
        Self::new(browser_schedule)
    }

    pub fn schedule(&self, after: Duration, callback: ExpiryCallback) {
        (self.0)(after, callback);
    }
}

impl Default for ToastTimer {
    fn default() -> Self {
        Self::browser()
    }
}

/// Show `toast` and schedule its expiry on `timer` when it has a duration.
///
/// Returns `None` if the toast signal has already been disposed.
pub fn push_toast(toasts: RwSignal<ToastState>, timer: &ToastTimer, toast: Toast) -> Option<ToastHandle> {
    let duration = toast.duration;
    let handle = toasts.try_update(|s| s.show(toast))?;
    if let Some(duration) = duration {
        let expiring = handle.clone();
        timer.schedule(
            duration,
            Box::new(move || {
                toasts.try_update(|s| s.expire(&expiring));
            }),
        );
    }
    Some(handle)
}

/// Toast stack provided by the app root.
pub fn use_toasts() -> RwSignal<ToastState> {
    expect_context::<RwSignal<ToastState>>()
}

#[cfg(feature = "hydrate")]
fn browser_schedule(after: Duration, callback: ExpiryCallback) {
    let millis = u32::try_from(after.as_millis()).unwrap_or(u32::MAX);
    gloo_timers::callback::Timeout::new(millis, callback).forget();
}

#[cfg(not(feature = "hydrate"))]
fn browser_schedule(after: Duration, callback: ExpiryCallback) {
    let _ = (after, callback);
}
