//! Update-watcher collaborator backed by the browser service worker.
//!
//! Registers the worker script and turns its lifecycle into two boolean
//! signals:
//! - `offline_ready`: the first worker finished installing (no controller
//!   yet), so the app shell is cached for offline use.
//! - `update_available`: a new worker is installed and waiting behind the
//!   one currently controlling the page.
//!
//! `apply_update` asks the waiting worker to skip waiting and reloads the
//! page once it takes control. Outside the browser every call is a no-op.
//! Registration failures are logged and leave both signals false.

#[cfg(test)]
#[path = "service_worker_test.rs"]
mod service_worker_test;

use leptos::prelude::*;

/// Message the generated worker listens for to activate immediately.
pub const SKIP_WAITING_MESSAGE: &str = "SKIP_WAITING";

/// Signals published by the update watcher.
#[derive(Clone, Copy, Debug)]
pub struct UpdateSignals {
    pub offline_ready: RwSignal<bool>,
    pub update_available: RwSignal<bool>,
}

impl UpdateSignals {
    pub fn new() -> Self {
        Self { offline_ready: RwSignal::new(false), update_available: RwSignal::new(false) }
    }

    pub fn record(self, outcome: InstallOutcome) {
        match outcome {
            InstallOutcome::OfflineReady => self.offline_ready.set(true),
            InstallOutcome::UpdateAvailable => self.update_available.set(true),
        }
    }
}

impl Default for UpdateSignals {
    fn default() -> Self {
        Self::new()
    }
}

/// What a worker reaching the `installed` state means for the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InstallOutcome {
    OfflineReady,
    UpdateAvailable,
}

/// An installed worker is an update only if another worker already controls the page.
pub fn classify_installed(has_controller: bool) -> InstallOutcome {
    if has_controller { InstallOutcome::UpdateAvailable } else { InstallOutcome::OfflineReady }
}

/// Register `sw_url` and start publishing lifecycle changes into `signals`.
pub fn register(signals: UpdateSignals, sw_url: String) {
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            if let Err(e) = browser::register(signals, &sw_url).await {
                log::warn!("service worker registration failed: {}", browser::describe(&e));
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (signals, sw_url);
    }
}

/// Activate the waiting worker and reload once it controls the page.
pub fn apply_update() {
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async {
            if let Err(e) = browser::apply_update().await {
                log::warn!("service worker update failed: {}", browser::describe(&e));
            }
        });
    }
}

#[cfg(feature = "hydrate")]
mod browser {
    use leptos::prelude::*;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::JsValue;
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{ServiceWorker, ServiceWorkerContainer, ServiceWorkerRegistration, ServiceWorkerState};

    use super::{SKIP_WAITING_MESSAGE, UpdateSignals, classify_installed};

    pub fn describe(err: &JsValue) -> String {
        err.as_string().unwrap_or_else(|| format!("{err:?}"))
    }

    fn container() -> Result<ServiceWorkerContainer, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let navigator = window.navigator();
        if !js_sys::Reflect::has(&navigator, &JsValue::from_str("serviceWorker"))? {
            return Err(JsValue::from_str("service workers not supported"));
        }
        Ok(navigator.service_worker())
    }

    pub async fn register(signals: UpdateSignals, sw_url: &str) -> Result<(), JsValue> {
        let container = container()?;
        let registration: ServiceWorkerRegistration = JsFuture::from(container.register(sw_url)).await?.dyn_into()?;

        // A worker left waiting by a previous visit.
        if registration.waiting().is_some() && container.controller().is_some() {
            signals.update_available.set(true);
        }

        let watched = registration.clone();
        let on_update_found = Closure::<dyn FnMut()>::new(move || {
            if let Some(worker) = watched.installing() {
                watch_installing(signals, container.clone(), worker);
            }
        });
        registration.set_onupdatefound(Some(on_update_found.as_ref().unchecked_ref()));
        on_update_found.forget();
        Ok(())
    }

    fn watch_installing(signals: UpdateSignals, container: ServiceWorkerContainer, worker: ServiceWorker) {
        let tracked = worker.clone();
        let on_state_change = Closure::<dyn FnMut()>::new(move || {
            if tracked.state() == ServiceWorkerState::Installed {
                signals.record(classify_installed(container.controller().is_some()));
            }
        });
        worker.set_onstatechange(Some(on_state_change.as_ref().unchecked_ref()));
        on_state_change.forget();
    }

    pub async fn apply_update() -> Result<(), JsValue> {
        let container = container()?;
        let registration = JsFuture::from(container.get_registration()).await?;
        if registration.is_undefined() {
            return Ok(());
        }
        let registration: ServiceWorkerRegistration = registration.dyn_into()?;
        let Some(waiting) = registration.waiting() else {
            return Ok(());
        };

        let on_controller_change = Closure::<dyn FnMut()>::new(move || {
            if let Some(window) = web_sys::window() {
                if let Err(e) = window.location().reload() {
                    log::warn!("reload after update failed: {}", describe(&e));
                }
            }
        });
        container.set_oncontrollerchange(Some(on_controller_change.as_ref().unchecked_ref()));
        on_controller_change.forget();

        let message = js_sys::Object::new();
        js_sys::Reflect::set(&message, &JsValue::from_str("type"), &JsValue::from_str(SKIP_WAITING_MESSAGE))?;
        waiting.post_message(&message)?;
        Ok(())
    }
}
