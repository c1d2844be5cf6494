//! Toast stack rendered over every page.

use leptos::prelude::*;

use crate::state::toast::{ShownToast, ToastState};
use crate::util::toast::use_toasts;

#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = use_toasts();

    view! {
        <div class="toaster" aria-live="polite">
            <For
                each=move || toasts.with(|s| s.items().to_vec())
                key=|t| (t.id.clone(), t.seq)
                children=move |shown: ShownToast| view! { <ToastCard shown=shown toasts=toasts/> }
            />
        </div>
    }
}

#[component]
fn ToastCard(shown: ShownToast, toasts: RwSignal<ToastState>) -> impl IntoView {
    let ShownToast { id, toast, .. } = shown;
    let class = format!("toast {}", toast.kind.css_modifier());

    let action = toast.action.map(|action| {
        let id = id.clone();
        let label = action.label.clone();
        let on_click = move |_| {
            action.run();
            toasts.update(|s| {
                s.dismiss(&id);
            });
        };
        view! { <button class="toast__action" on:click=on_click>{label}</button> }
    });

    let on_close = move |_| {
        toasts.update(|s| {
            s.dismiss(&id);
        });
    };

    view! {
        <div class=class role="status">
            <div class="toast__body">
                <p class="toast__title">{toast.title}</p>
                {toast.description.map(|d| view! { <p class="toast__description">{d}</p> })}
            </div>
            {action}
            <button class="toast__close" aria-label="Fechar" on:click=on_close>"×"</button>
        </div>
    }
}
