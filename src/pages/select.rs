//! Area selection page.
//!
//! Signed-in landing route and the destination for users who tried to open
//! an admin page without admin access.

use leptos::prelude::*;

use crate::components::route_guard::RouteGuard;
use crate::config::ClientConfig;
use crate::state::auth::AuthState;
use crate::util::auth::sign_out;
use crate::util::role::use_role;

#[component]
pub fn SelectPage() -> impl IntoView {
    view! {
        <RouteGuard>
            <SelectContent/>
        </RouteGuard>
    }
}

#[component]
fn SelectContent() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let config = expect_context::<ClientConfig>();
    let role = use_role();

    let user_name = move || {
        auth.with(|a| {
            a.user
                .as_ref()
                .map_or_else(|| "—".to_owned(), |u| u.display_name().to_owned())
        })
    };
    let role_label = move || {
        let view = role.get();
        if view.loading { "…" } else { view.role.as_str() }
    };
    let can_admin = move || role.get().is_admin();

    let on_sign_out = move |_| sign_out(auth, config.clone());

    view! {
        <div class="select-page">
            <header class="select-page__header">
                <span class="select-page__user">{user_name}</span>
                <span class="select-page__role">{role_label}</span>
                <button class="button" on:click=on_sign_out>"Sair"</button>
            </header>
            <h2>"Selecione uma área"</h2>
            <nav class="select-page__areas">
                <a href="/painel" class="area-card">"Painel"</a>
                <Show
                    when=can_admin
                    fallback=|| view! {
                        <p class="area-card area-card--locked">"Administração requer perfil de administrador."</p>
                    }
                >
                    <a href="/admin" class="area-card">"Administração"</a>
                </Show>
            </nav>
        </div>
    }
}
