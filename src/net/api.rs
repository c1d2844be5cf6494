//! REST helpers for the session (auth) endpoint.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None` since the session cookie is
//! only read in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option` outputs instead of panics so a failed session fetch
//! reads as "signed out" without crashing hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::User;
use crate::config::ClientConfig;

#[cfg(any(test, feature = "hydrate"))]
fn session_failed_message(status: u16) -> String {
    format!("session request failed: {status}")
}

/// Fetch the currently authenticated user from the configured session URL.
/// Returns `None` if not authenticated or on the server.
pub async fn fetch_current_user(config: &ClientConfig) -> Option<User> {
    #[cfg(feature = "hydrate")]
    {
        let resp = match gloo_net::http::Request::get(&config.session_url).send().await {
            Ok(resp) => resp,
            Err(e) => {
                log::warn!("session request error: {e}");
                return None;
            }
        };
        if !resp.ok() {
            if resp.status() != 401 {
                log::warn!("{}", session_failed_message(resp.status()));
            }
            return None;
        }
        match resp.json::<User>().await {
            Ok(user) => Some(user),
            Err(e) => {
                log::warn!("session response malformed: {e}");
                None
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = config;
        None
    }
}

/// Sign the current user out with a `POST` to the configured logout URL.
pub async fn logout(config: &ClientConfig) {
    #[cfg(feature = "hydrate")]
    {
        if let Err(e) = gloo_net::http::Request::post(&config.logout_url).send().await {
            log::warn!("logout request error: {e}");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = config;
    }
}
