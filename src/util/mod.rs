//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules wire plain state models to signals and isolate browser
//! concerns (timers, service worker, HTTP) from page and component logic.

pub mod auth;
pub mod role;
pub mod service_worker;
pub mod toast;
