//! Service-worker update prompts.
//!
//! Each watcher signal goes through its own [`RisingEdge`]: a toast is
//! produced on a false -> true transition only, never while the signal stays
//! true. Dropping back to false re-arms the detector.

#[cfg(test)]
#[path = "update_test.rs"]
mod update_test;

use std::time::Duration;

use super::toast::{Toast, ToastAction};

pub const OFFLINE_READY_DURATION: Duration = Duration::from_secs(4);

/// Stable id of the update prompt, so a repeat replaces the one on screen.
pub const UPDATE_TOAST_ID: &str = "sw-update";

/// Fires once per false -> true transition of a boolean signal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RisingEdge {
    previous: bool,
}

impl RisingEdge {
    /// Record `value`; `true` if it is a rising edge.
    pub fn observe(&mut self, value: bool) -> bool {
        let fired = value && !self.previous;
        self.previous = value;
        fired
    }
}

/// Edge detectors for the two update-watcher signals.
#[derive(Clone, Copy, Debug, Default)]
pub struct UpdatePrompts {
    offline_ready: RisingEdge,
    update_available: RisingEdge,
}

impl UpdatePrompts {
    /// Transient success toast on each rising edge of `offline_ready`.
    pub fn offline_ready(&mut self, value: bool) -> Option<Toast> {
        self.offline_ready.observe(value).then(offline_ready_toast)
    }

    /// Persistent toast with an apply action on each rising edge of
    /// `update_available`.
    pub fn update_available<F>(&mut self, value: bool, apply: F) -> Option<Toast>
    where
        F: Fn() + Send + Sync + 'static,
    {
        if self.update_available.observe(value) {
            Some(update_available_toast(apply))
        } else {
            None
        }
    }
}

pub fn offline_ready_toast() -> Toast {
    Toast::success("App pronto para uso offline").with_duration(OFFLINE_READY_DURATION)
}

pub fn update_available_toast<F>(apply: F) -> Toast
where
    F: Fn() + Send + Sync + 'static,
{
    Toast::info("Nova versão disponível")
        .with_id(UPDATE_TOAST_ID)
        .with_description("Atualize para carregar a versão mais recente.")
        .persistent()
        .with_action(ToastAction::new("Atualizar", apply))
}
