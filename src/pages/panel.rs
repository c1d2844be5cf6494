//! Panel page, open to any signed-in user.

use leptos::prelude::*;

use crate::components::route_guard::RouteGuard;
use crate::state::auth::AuthState;

#[component]
pub fn PanelPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let greeting = move || {
        auth.with(|a| {
            a.user
                .as_ref()
                .map(|u| format!("Olá, {}", u.display_name()))
                .unwrap_or_default()
        })
    };

    view! {
        <RouteGuard>
            <div class="panel-page">
                <h1>"Painel"</h1>
                <p>{greeting}</p>
                <a href="/selecionar">"Voltar"</a>
            </div>
        </RouteGuard>
    }
}
