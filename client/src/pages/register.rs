//! Registration page: create the provider account, then the backend profile.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;

use crate::components::spinner::Spinner;
use crate::util::auth::{LOGIN_PATH, Registration};
use crate::util::form::{optional_field, required_field};

const MISSING_FIELDS: &str = "Enter a display name, email and password.";

/// Normalize form input into a `Registration`.
pub(crate) fn validate_registration_input(
    display_name: &str,
    email: &str,
    password: &str,
    bio: &str,
    avatar_url: &str,
) -> Result<Registration, &'static str> {
    let display_name = required_field(display_name, MISSING_FIELDS)?;
    let email = required_field(email, MISSING_FIELDS)?;
    if password.is_empty() {
        return Err(MISSING_FIELDS);
    }
    Ok(Registration {
        email,
        password: password.to_owned(),
        display_name,
        bio: optional_field(bio),
        avatar_url: optional_field(avatar_url),
    })
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let display_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let bio = RwSignal::new(String::new());
    let avatar_url = RwSignal::new(String::new());
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
        let form = match validate_registration_input(
            &display_name.get(),
            &email.get(),
            &password.get(),
            &bio.get(),
            &avatar_url.get(),
        ) {
            Ok(form) => form,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            let api = api.clone();
            let identity = identity.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::util::auth::register(&identity, &api, &form).await {
                    Ok(_) => navigate(crate::util::auth::HOME_PATH, leptos_router::NavigateOptions::default()),
                    Err(e) => {
                        log::warn!("registration failed: {e}");
                        let _ = info.try_set(e.to_string());
                        let _ = busy.try_set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = form;
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Create an Account"</h1>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        placeholder="Display Name"
                        prop:value=move || display_name.get()
                        on:input=move |ev| display_name.set(event_target_value(&ev))
                    />
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
                        autocomplete="new-password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <textarea
                        class="login-input"
                        placeholder="Bio (optional)"
                        prop:value=move || bio.get()
                        on:input=move |ev| bio.set(event_target_value(&ev))
                    ></textarea>
                    <input
                        class="login-input"
                        type="url"
                        placeholder="Avatar URL (optional)"
                        prop:value=move || avatar_url.get()
                        on:input=move |ev| avatar_url.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Sign Up"
                    </button>
                </form>
                <Show when=move || busy.get()>
                    <Spinner label="Creating account..."/>
                </Show>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <div class="login-divider"></div>
                <p class="login-card__subtitle">
                    "Already registered? "
                    <a href=LOGIN_PATH>"Sign in"</a>
                </p>
            </div>
        </div>
    }
}
