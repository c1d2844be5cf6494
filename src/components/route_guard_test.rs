use super::*;

fn input(auth_loading: bool, role_loading: bool, authenticated: bool, is_admin: bool) -> GuardInput {
    GuardInput { auth_loading, role_loading, authenticated, is_admin }
}

/// Reference table in precedence order, for comparison with `decide`.
fn expected(i: GuardInput, require_admin: bool) -> GuardOutcome {
    if i.auth_loading {
        return GuardOutcome::Loading;
    }
    if require_admin && i.role_loading {
        return GuardOutcome::Loading;
    }
    if !i.authenticated {
        return GuardOutcome::RedirectUnauthenticated;
    }
    if require_admin && !i.is_admin {
        return GuardOutcome::RedirectUnauthorized;
    }
    GuardOutcome::Render
}

#[test]
fn decision_table_matches_precedence_for_all_inputs() {
    for bits in 0u8..32 {
        let i = input(bits & 1 != 0, bits & 2 != 0, bits & 4 != 0, bits & 8 != 0);
        let require_admin = bits & 16 != 0;
        assert_eq!(decide(i, require_admin), expected(i, require_admin), "input {i:?} admin={require_admin}");
    }
}

#[test]
fn auth_loading_always_shows_spinner() {
    for require_admin in [false, true] {
        assert_eq!(decide(input(true, false, true, true), require_admin), GuardOutcome::Loading);
        assert_eq!(decide(input(true, false, false, false), require_admin), GuardOutcome::Loading);
    }
}

#[test]
fn non_admin_route_ignores_role_loading() {
    for is_admin in [false, true] {
        assert_eq!(decide(input(false, true, true, is_admin), false), GuardOutcome::Render);
    }
}

#[test]
fn admin_route_waits_for_role() {
    assert_eq!(decide(input(false, true, true, false), true), GuardOutcome::Loading);
}

#[test]
fn signed_out_redirects_to_default() {
    let outcome = decide(input(false, false, false, false), false);
    assert_eq!(outcome, GuardOutcome::RedirectUnauthenticated);
    assert_eq!(outcome.redirect_target(DEFAULT_REDIRECT), Some("/"));
}

#[test]
fn signed_out_uses_configured_redirect() {
    let outcome = decide(input(false, false, false, false), true);
    assert_eq!(outcome.redirect_target("/entrar"), Some("/entrar"));
}

#[test]
fn viewer_on_admin_route_goes_to_select_page() {
    let view = crate::state::role::RoleView { role: crate::state::role::Role::Viewer, loading: false };
    let outcome = decide(input(false, view.loading, true, view.is_admin()), true);
    assert_eq!(outcome, GuardOutcome::RedirectUnauthorized);
    assert_eq!(outcome.redirect_target("/"), Some("/selecionar"));
}

#[test]
fn master_on_admin_route_renders() {
    let view = crate::state::role::RoleView { role: crate::state::role::Role::Master, loading: false };
    assert_eq!(decide(input(false, view.loading, true, view.is_admin()), true), GuardOutcome::Render);
}

#[test]
fn render_and_loading_have_no_redirect_target() {
    assert_eq!(GuardOutcome::Render.redirect_target("/"), None);
    assert_eq!(GuardOutcome::Loading.redirect_target("/"), None);
}

// =============================================================
// Reactive guard over the live resolver (hydrate builds only)
// =============================================================

#[cfg(feature = "hydrate")]
mod reactive {
    use super::*;
    use crate::net::role_store::{RoleLookupError, RoleStore};
    use crate::net::types::User;
    use crate::state::role::RoleState;
    use crate::test_support::{run_local, settle};
    use crate::util::role::install_role_resolver;
    use futures::channel::oneshot;
    use leptos::prelude::*;
    use std::future::Future;
    use std::sync::{Arc, Mutex};

    /// Answers with `role` once the test opens the gate.
    #[derive(Clone)]
    struct GatedStore {
        role: &'static str,
        gate: Arc<Mutex<Option<oneshot::Receiver<()>>>>,
    }

    impl RoleStore for GatedStore {
        fn fetch_role(&self, _user_id: &str) -> impl Future<Output = Result<Option<String>, RoleLookupError>> {
            let gate = self.gate.lock().unwrap().take();
            let role = self.role.to_owned();
            async move {
                if let Some(gate) = gate {
                    gate.await.unwrap();
                }
                Ok(Some(role))
            }
        }
    }

    struct Harness {
        auth: RwSignal<AuthState>,
        admin: Memo<GuardOutcome>,
        member: Memo<GuardOutcome>,
        open: oneshot::Sender<()>,
    }

    fn mount(role: &'static str) -> Harness {
        let (open, gate) = oneshot::channel();
        let auth = RwSignal::new(AuthState::pending());
        let roles = RwSignal::new(RoleState::default());
        install_role_resolver(auth, roles, GatedStore { role, gate: Arc::new(Mutex::new(Some(gate))) });
        let view = Signal::derive(move || auth.with(|a| roles.with(|r| r.view_for(a.user_id()))));
        Harness {
            auth,
            admin: guard_outcome(auth, view, true),
            member: guard_outcome(auth, view, false),
            open,
        }
    }

    fn sign_in(auth: RwSignal<AuthState>) {
        auth.set(AuthState {
            user: Some(User { id: "u-1".to_owned(), email: None, name: None }),
            loading: false,
        });
    }

    #[tokio::test]
    async fn admin_route_waits_then_redirects_viewer() {
        run_local(|| async {
            let h = mount("viewer");
            assert_eq!(h.admin.get_untracked(), GuardOutcome::Loading);

            sign_in(h.auth);
            settle().await;
            assert_eq!(h.admin.get_untracked(), GuardOutcome::Loading);
            assert_eq!(h.member.get_untracked(), GuardOutcome::Render);

            h.open.send(()).unwrap();
            settle().await;
            assert_eq!(h.admin.get_untracked(), GuardOutcome::RedirectUnauthorized);
            assert_eq!(h.member.get_untracked(), GuardOutcome::Render);
        })
        .await;
    }

    #[tokio::test]
    async fn admin_route_renders_for_master() {
        run_local(|| async {
            let h = mount("master");
            sign_in(h.auth);
            h.open.send(()).unwrap();
            settle().await;
            assert_eq!(h.admin.get_untracked(), GuardOutcome::Render);
        })
        .await;
    }

    #[tokio::test]
    async fn sign_out_redirects_to_default() {
        run_local(|| async {
            let h = mount("admin");
            sign_in(h.auth);
            h.open.send(()).unwrap();
            settle().await;
            assert_eq!(h.admin.get_untracked(), GuardOutcome::Render);

            h.auth.set(AuthState::default());
            assert_eq!(h.admin.get_untracked(), GuardOutcome::RedirectUnauthenticated);
            assert_eq!(h.member.get_untracked(), GuardOutcome::RedirectUnauthenticated);
        })
        .await;
    }
}
