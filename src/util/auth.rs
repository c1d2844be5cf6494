//! Session loading and sign-out.
//!
//! SYSTEM CONTEXT
//! ==============
//! The auth collaborator is the session endpoint. These helpers are the only
//! writers of `AuthState`; everything else subscribes.

use leptos::prelude::*;

use crate::config::ClientConfig;
use crate::state::auth::AuthState;

/// Load the current session once on mount.
///
/// Always finishes with `loading = false`, signed in or not.
pub fn install_auth_session(auth: RwSignal<AuthState>, config: ClientConfig) {
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            let user = crate::net::api::fetch_current_user(&config).await;
            auth.set(AuthState { user, loading: false });
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (auth, config);
    }
}

/// End the session and clear the local identity.
pub fn sign_out(auth: RwSignal<AuthState>, config: ClientConfig) {
    leptos::task::spawn_local(async move {
        crate::net::api::logout(&config).await;
        auth.set(AuthState::default());
    });
}
