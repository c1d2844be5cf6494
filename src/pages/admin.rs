//! Administration page, open to admin and master roles.

use leptos::prelude::*;

use crate::components::route_guard::RouteGuard;
use crate::util::role::use_role;

#[component]
pub fn AdminPage() -> impl IntoView {
    view! {
        <RouteGuard require_admin=true>
            <AdminContent/>
        </RouteGuard>
    }
}

#[component]
fn AdminContent() -> impl IntoView {
    let role = use_role();
    let scope = move || {
        if role.get().is_master() {
            "Acesso total (master)."
        } else {
            "Acesso de administrador."
        }
    };

    view! {
        <div class="admin-page">
            <h1>"Administração"</h1>
            <p class="admin-page__scope">{scope}</p>
            <a href="/selecionar">"Voltar"</a>
        </div>
    }
}
