//! Login page: email + password sign-in through the identity provider.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

use crate::util::auth::REGISTER_PATH;

const MISSING_CREDENTIALS: &str = "Enter both email and password.";

/// Trim the email and require both fields. The password is kept verbatim.
pub(crate) fn validate_login_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err(MISSING_CREDENTIALS);
    }
    Ok((email.to_owned(), password.to_owned()))
}

pub(crate) fn login_failed_message(reason: &str) -> String {
    format!("Login failed: {reason}")
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    let (api, identity, navigate) = (
        expect_context::<crate::net::api::BrowserApi>(),
        expect_context::<crate::net::identity::BrowserIdentity>(),
        leptos_router::hooks::use_navigate(),
    );

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (email_value, password_value) = match validate_login_input(&email.get(), &password.get()) {
            Ok(values) => values,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Signing in...".to_owned());

        #[cfg(feature = "hydrate")]
        {
            let session = api.session().clone();
            let identity = identity.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::util::auth::sign_in(&identity, &session, &email_value, &password_value).await {
                    Ok(_) => navigate(crate::util::auth::HOME_PATH, leptos_router::NavigateOptions::default()),
                    Err(e) => {
                        let _ = info.try_set(login_failed_message(&e.to_string()));
                        let _ = busy.try_set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email_value, password_value);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Login"</h1>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="Email"
                        autocomplete="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        autocomplete="current-password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Sign In"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <div class="login-divider"></div>
                <p class="login-card__subtitle">
                    "No account? "
                    <a href=REGISTER_PATH>"Create one"</a>
                </p>
            </div>
        </div>
    }
}
