//! Home page for any signed-in user: greeting, profile edit, and logout.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered inside `AccessGuard`, so `AuthState.user` is populated by the time
//! this component runs.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;

use crate::net::types::ProfileUpdate;
use crate::state::auth::AuthState;
use crate::util::auth::ADMIN_PATH;
use crate::util::form::{optional_field, required_field};

pub(crate) fn validate_profile_input(display_name: &str, bio: &str, avatar_url: &str) -> Result<ProfileUpdate, &'static str> {
    Ok(ProfileUpdate {
        display_name: required_field(display_name, "Display name cannot be empty.")?,
        bio: optional_field(bio),
        avatar_url: optional_field(avatar_url),
    })
}

pub(crate) fn greeting(auth: &AuthState) -> String {
    match &auth.user {
        Some(user) => format!("Welcome home, {}!", user.label()),
        None => "Welcome Home!".to_owned(),
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let initial = auth.get_untracked().user;
    let display_name = RwSignal::new(initial.as_ref().and_then(|u| u.display_name.clone()).unwrap_or_default());
    let bio = RwSignal::new(initial.as_ref().and_then(|u| u.bio.clone()).unwrap_or_default());
    let avatar_url = RwSignal::new(initial.as_ref().and_then(|u| u.avatar_url.clone()).unwrap_or_default());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    let (api, identity, navigate) = (
        expect_context::<crate::net::api::BrowserApi>(),
        expect_context::<crate::net::identity::BrowserIdentity>(),
        leptos_router::hooks::use_navigate(),
    );

    #[cfg(feature = "hydrate")]
    let api_for_save = api.clone();
    let on_save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let Some(key) = auth.get_untracked().user.map(|u| u.remote_key().to_owned()) else {
            return;
        };
        let update = match validate_profile_input(&display_name.get(), &bio.get(), &avatar_url.get()) {
            Ok(update) => update,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Saving...".to_owned());

        #[cfg(feature = "hydrate")]
        {
            let api = api_for_save.clone();
            leptos::task::spawn_local(async move {
                match api.update_profile(&key, &update).await {
                    Ok(user) => {
                        let _ = auth.try_update(|a| a.user = Some(user));
                        let _ = info.try_set("Profile saved.".to_owned());
                    }
                    Err(e) => {
                        let _ = info.try_set(format!("Save failed: {e}"));
                    }
                }
                let _ = busy.try_set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, update);
        }
    };

    let on_logout = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let session = api.session().clone();
            let identity = identity.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                crate::util::auth::sign_out(&identity, &session).await;
                let _ = auth.try_update(AuthState::reset);
                navigate(crate::util::auth::LOGIN_PATH, leptos_router::NavigateOptions::default());
            });
        }
    };

    view! {
        <div class="home-page">
            <header class="home-page__header toolbar">
                <h1 class="toolbar__title">{move || greeting(&auth.get())}</h1>
                <span class="toolbar__spacer"></span>
                <Show when=move || auth.get().is_admin()>
                    <a class="btn toolbar__admin" href=ADMIN_PATH>"Admin Dashboard"</a>
                </Show>
                <button class="btn btn--danger toolbar__logout" on:click=on_logout title="Log out">
                    "Log out"
                </button>
            </header>

            <section class="home-page__profile">
                <h2>"Your Profile"</h2>
                <p class="home-page__email">{move || auth.get().user.map(|u| u.email).unwrap_or_default()}</p>
                <form class="login-form" on:submit=on_save>
                    <input
                        class="login-input"
                        type="text"
                        placeholder="Display Name"
                        prop:value=move || display_name.get()
                        on:input=move |ev| display_name.set(event_target_value(&ev))
                    />
                    <textarea
                        class="login-input"
                        placeholder="Bio"
                        prop:value=move || bio.get()
                        on:input=move |ev| bio.set(event_target_value(&ev))
                    ></textarea>
                    <input
                        class="login-input"
                        type="url"
                        placeholder="Avatar URL"
                        prop:value=move || avatar_url.get()
                        on:input=move |ev| avatar_url.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Save Profile"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
            </section>
        </div>
    }
}
