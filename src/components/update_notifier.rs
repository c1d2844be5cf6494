//! Service-worker update notifier.
//!
//! Mounted once at the app root. Renders nothing itself; it watches the
//! update-watcher signals and pushes a toast on each rising edge.

#[cfg(all(test, feature = "hydrate"))]
#[path = "update_notifier_test.rs"]
mod update_notifier_test;

use leptos::prelude::*;

use crate::state::toast::ToastState;
use crate::state::update::UpdatePrompts;
use crate::util::service_worker::{UpdateSignals, apply_update};
use crate::util::toast::{ToastTimer, push_toast};

#[component]
pub fn UpdateNotifier() -> impl IntoView {
    let signals = expect_context::<UpdateSignals>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let timer = expect_context::<ToastTimer>();
    let prompts = StoredValue::new(UpdatePrompts::default());

    let offline_timer = timer.clone();
    Effect::new(move || {
        let ready = signals.offline_ready.get();
        if let Some(toast) = prompts.try_update_value(|p| p.offline_ready(ready)).flatten() {
            push_toast(toasts, &offline_timer, toast);
        }
    });

    Effect::new(move || {
        let available = signals.update_available.get();
        if let Some(toast) = prompts
            .try_update_value(|p| p.update_available(available, apply_update))
            .flatten()
        {
            push_toast(toasts, &timer, toast);
        }
    });
}
