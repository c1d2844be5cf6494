//! Route guard gating a page on session and role.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wraps a protected subtree. The decision is a pure function of four
//! inputs, evaluated in order:
//! 1. auth still loading, or admin required and role still loading -> spinner
//! 2. no identity -> redirect to `redirect_to`
//! 3. admin required and not admin -> redirect to [`UNAUTHORIZED_PATH`]
//! 4. otherwise -> render children
//!
//! Role loading only blocks admin routes, so ordinary signed-in pages never
//! wait on the role lookup. Redirects replace the history entry so the back
//! button cannot return to a page the user cannot open.

#[cfg(test)]
#[path = "route_guard_test.rs"]
mod route_guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::Redirect;

use crate::components::spinner::LoadingSpinner;
use crate::state::auth::AuthState;
use crate::state::role::RoleView;
use crate::util::role::use_role;

/// Default destination for signed-out visitors.
pub const DEFAULT_REDIRECT: &str = "/";

/// Destination for signed-in users lacking admin access.
pub const UNAUTHORIZED_PATH: &str = "/selecionar";

#[allow(clippy::struct_excessive_bools)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GuardInput {
    pub auth_loading: bool,
    pub role_loading: bool,
    pub authenticated: bool,
    pub is_admin: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    Loading,
    RedirectUnauthenticated,
    RedirectUnauthorized,
    Render,
}

impl GuardOutcome {
    /// Path to navigate to, for redirect outcomes.
    pub fn redirect_target(self, redirect_to: &str) -> Option<&str> {
        match self {
            Self::RedirectUnauthenticated => Some(redirect_to),
            Self::RedirectUnauthorized => Some(UNAUTHORIZED_PATH),
            Self::Loading | Self::Render => None,
        }
    }
}

pub fn decide(input: GuardInput, require_admin: bool) -> GuardOutcome {
    if input.auth_loading || (require_admin && input.role_loading) {
        GuardOutcome::Loading
    } else if !input.authenticated {
        GuardOutcome::RedirectUnauthenticated
    } else if require_admin && !input.is_admin {
        GuardOutcome::RedirectUnauthorized
    } else {
        GuardOutcome::Render
    }
}

/// Reactive guard decision over the current session and role.
pub fn guard_outcome(auth: RwSignal<AuthState>, role: Signal<RoleView>, require_admin: bool) -> Memo<GuardOutcome> {
    Memo::new(move |_| {
        let view = role.get();
        auth.with(|a| {
            decide(
                GuardInput {
                    auth_loading: a.loading,
                    role_loading: view.loading,
                    authenticated: a.user.is_some(),
                    is_admin: view.is_admin(),
                },
                require_admin,
            )
        })
    })
}

fn replace_history() -> NavigateOptions {
    NavigateOptions { replace: true, ..NavigateOptions::default() }
}

/// Render `children` only when the session (and, for admin routes, the
/// role) allows it.
#[component]
pub fn RouteGuard(
    #[prop(optional)] require_admin: bool,
    #[prop(into, default = DEFAULT_REDIRECT.to_owned())] redirect_to: String,
    children: ChildrenFn,
) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let outcome = guard_outcome(auth, use_role(), require_admin);

    move || match outcome.get() {
        GuardOutcome::Loading => view! { <LoadingSpinner/> }.into_any(),
        GuardOutcome::Render => children().into_any(),
        redirect => {
            let target = redirect.redirect_target(&redirect_to).unwrap_or(DEFAULT_REDIRECT).to_owned();
            view! { <Redirect path=target options=replace_history()/> }.into_any()
        }
    }
}
