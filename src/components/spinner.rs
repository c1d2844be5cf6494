//! Loading placeholder.

use leptos::prelude::*;

#[component]
pub fn LoadingSpinner(#[prop(optional, into)] label: Option<String>) -> impl IntoView {
    let label = label.unwrap_or_else(|| "Carregando...".to_owned());
    view! {
        <div class="spinner" role="status" aria-busy="true">
            <div class="spinner__ring"></div>
            <p class="spinner__label">{label}</p>
        </div>
    }
}
