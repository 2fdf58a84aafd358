//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::components::access_guard::AccessGuard;
use crate::config::ClientConfig;
use crate::net::api::ApiClient;
use crate::net::http::BrowserTransport;
use crate::net::identity::FirebaseIdentity;
use crate::pages::{admin::AdminPage, home::HomePage, login::LoginPage, register::RegisterPage};
use crate::state::auth::AuthState;
use crate::state::session::Session;
use crate::util::auth::LOGIN_PATH;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
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
/// Provides the backend client, the identity provider and the auth signal,
/// all sharing one browser-backed `Session`.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ClientConfig::from_build_env();
    let session = Session::browser();
    provide_context(ApiClient::new(config.api_base_url, session, BrowserTransport));
    provide_context(FirebaseIdentity::new(config.identity_base_url, config.identity_api_key, BrowserTransport));
    provide_context(RwSignal::new(AuthState::default()));

    view! {
        <Stylesheet id="leptos" href="/pkg/social-admin.css"/>
        <Title text="Social Admin"/>

        <Router>
            <Routes fallback=|| view! { <Redirect path=LOGIN_PATH/> }>
                <Route path=StaticSegment("") view=LoginPage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route path=StaticSegment("home") view=GuardedHome/>
                <Route path=StaticSegment("admin") view=GuardedAdmin/>
            </Routes>
        </Router>
    }
}

#[component]
fn GuardedHome() -> impl IntoView {
    view! {
        <AccessGuard>
            <HomePage/>
        </AccessGuard>
    }
}

#[component]
fn GuardedAdmin() -> impl IntoView {
    view! {
        <AccessGuard require_admin=true>
            <AdminPage/>
        </AccessGuard>
    }
}
