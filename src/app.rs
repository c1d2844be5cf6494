//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::toaster::Toaster;
use crate::components::update_notifier::UpdateNotifier;
use crate::config::ClientConfig;
use crate::net::role_store::RestRoleStore;
use crate::pages::{admin::AdminPage, home::HomePage, panel::PanelPage, select::SelectPage};
use crate::state::{auth::AuthState, role::RoleState, toast::ToastState};
use crate::util::auth::install_auth_session;
use crate::util::role::install_role_resolver;
use crate::util::service_worker::{self, UpdateSignals};
use crate::util::toast::ToastTimer;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="pt-BR">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides shared state contexts, starts the session, role and service
/// worker watchers, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ClientConfig::from_build_env();
    let auth = RwSignal::new(AuthState::pending());
    let roles = RwSignal::new(RoleState::default());
    let toasts = RwSignal::new(ToastState::default());
    let updates = UpdateSignals::new();

    provide_context(config.clone());
    provide_context(auth);
    provide_context(roles);
    provide_context(toasts);
    provide_context(ToastTimer::browser());
    provide_context(updates);

    install_auth_session(auth, config.clone());
    install_role_resolver(auth, roles, RestRoleStore::new(&config));
    service_worker::register(updates, config.sw_url.clone());

    view! {
        <Stylesheet id="leptos" href="/pkg/portal.css"/>
        <Title text="Portal"/>

        <UpdateNotifier/>
        <Toaster/>

        <Router>
            <Routes fallback=|| "Página não encontrada.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("selecionar") view=SelectPage/>
                <Route path=StaticSegment("painel") view=PanelPage/>
                <Route path=StaticSegment("admin") view=AdminPage/>
            </Routes>
        </Router>
    }
}
