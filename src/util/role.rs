//! Role resolver hook.
//!
//! SYSTEM CONTEXT
//! ==============
//! Follows the signed-in identity and keeps `RoleState` in step with it.
//! Route guards only read the resulting [`RoleView`]; they never issue
//! lookups themselves.
//!
//! ERROR HANDLING
//! ==============
//! A failed lookup is logged and resolves to `Viewer`. It is never surfaced
//! to the UI, so a lookup failure looks exactly like a viewer account.

#[cfg(test)]
#[path = "role_test.rs"]
mod role_test;

use leptos::prelude::*;

use crate::net::role_store::RoleStore;
use crate::state::auth::AuthState;
use crate::state::role::{Role, RoleState, RoleView};

/// Resolve the role for `user_id` with exactly one store lookup.
pub async fn lookup_role<S: RoleStore>(store: &S, user_id: &str) -> Role {
    match store.fetch_role(user_id).await {
        Ok(value) => Role::from_lookup(value.as_deref()),
        Err(e) => {
            log::warn!("role lookup for user {user_id} failed, falling back to viewer: {e}");
            Role::Viewer
        }
    }
}

/// Re-resolve the role whenever the signed-in identity changes.
///
/// Keyed on a memo of the user id, so auth updates that keep the same
/// identity do not trigger a new lookup.
pub fn install_role_resolver<S>(auth: RwSignal<AuthState>, roles: RwSignal<RoleState>, store: S)
where
    S: RoleStore + Clone + 'static,
{
    let identity = Memo::new(move |_| auth.with(|a| a.user_id().map(str::to_owned)));

    Effect::new(move || {
        let current = identity.get();
        let Some(request) = roles.try_update(|s| s.begin(current.as_deref())).flatten() else {
            return;
        };
        let store = store.clone();
        leptos::task::spawn_local(async move {
            let role = lookup_role(&store, &request.user_id).await;
            let applied = roles.try_update(|s| s.apply(request.generation, role)).unwrap_or(false);
            if !applied {
                log::debug!("discarded stale role response for user {}", request.user_id);
            }
        });
    });
}

/// Role of the current identity, as provided by the app root.
pub fn use_role() -> Signal<RoleView> {
    let auth = expect_context::<RwSignal<AuthState>>();
    let roles = expect_context::<RwSignal<RoleState>>();
    Signal::derive(move || auth.with(|a| roles.with(|r| r.view_for(a.user_id()))))
}
