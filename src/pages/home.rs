//! Public landing page and default destination for signed-out visitors.

use leptos::prelude::*;

use crate::config::ClientConfig;
use crate::state::auth::AuthState;

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let config = expect_context::<ClientConfig>();
    let sign_in_url = config.sign_in_url;

    let signed_in = move || auth.with(|a| a.user.is_some());

    view! {
        <div class="home-page">
            <h1>"Portal"</h1>
            <Show
                when=signed_in
                fallback=move || view! {
                    <a href=sign_in_url.clone() class="button button--primary">"Entrar"</a>
                }
            >
                <a href="/selecionar" class="button button--primary">"Continuar"</a>
            </Show>
        </div>
    }
}
