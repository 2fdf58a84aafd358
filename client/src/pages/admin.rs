//! Admin dashboard: user management and post moderation.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered inside `AccessGuard require_admin=true`. All three lists load once
//! on mount; every action goes through `state::admin` and only mirrors a
//! change the backend confirmed.

use leptos::prelude::*;

use crate::components::post_row::PostRow;
use crate::components::spinner::Spinner;
use crate::components::user_row::UserRow;
use crate::net::types::{Post, UserProfile};
use crate::state::admin::{AdminState, AdminTab};
use crate::util::auth::HOME_PATH;

#[component]
pub fn AdminPage() -> impl IntoView {
    let state = RwSignal::new(AdminState { loading: true, ..AdminState::default() });
    let tab = RwSignal::new(AdminTab::default());
    let busy = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    let api = expect_context::<crate::net::api::BrowserApi>();

    #[cfg(feature = "hydrate")]
    {
        let api = api.clone();
        leptos::task::spawn_local(async move {
            let change = crate::state::admin::load_dashboard(&api).await;
            let _ = state.try_update(|s| s.apply(change));
        });
    }

    let on_delete_user = Callback::new({
        #[cfg(feature = "hydrate")]
        let api = api.clone();
        move |user: UserProfile| {
            if busy.get_untracked() {
                return;
            }
            #[cfg(feature = "hydrate")]
            {
                busy.set(true);
                let api = api.clone();
                leptos::task::spawn_local(async move {
                    match crate::state::admin::delete_user(&api, &user).await {
                        Ok(change) => {
                            let _ = state.try_update(|s| s.apply(change));
                        }
                        Err(e) => {
                            let _ = state.try_update(|s| s.fail("Delete user", &e));
                        }
                    }
                    let _ = busy.try_set(false);
                });
            }
            #[cfg(not(feature = "hydrate"))]
            let _ = user;
        }
    });

    let on_toggle_admin = Callback::new({
        #[cfg(feature = "hydrate")]
        let api = api.clone();
        move |(user, make_admin): (UserProfile, bool)| {
            if busy.get_untracked() {
                return;
            }
            #[cfg(feature = "hydrate")]
            {
                busy.set(true);
                let api = api.clone();
                leptos::task::spawn_local(async move {
                    match crate::state::admin::set_admin(&api, &user, make_admin).await {
                        Ok(change) => {
                            let _ = state.try_update(|s| s.apply(change));
                        }
                        Err(e) => {
                            let action = if make_admin { "Promote" } else { "Demote" };
                            let _ = state.try_update(|s| s.fail(action, &e));
                        }
                    }
                    let _ = busy.try_set(false);
                });
            }
            #[cfg(not(feature = "hydrate"))]
            let _ = (user, make_admin);
        }
    });

    let on_delete_post = Callback::new({
        #[cfg(feature = "hydrate")]
        let api = api.clone();
        move |post_id: String| {
            if busy.get_untracked() {
                return;
            }
            #[cfg(feature = "hydrate")]
            {
                busy.set(true);
                let api = api.clone();
                leptos::task::spawn_local(async move {
                    match crate::state::admin::delete_post(&api, &post_id).await {
                        Ok(change) => {
                            let _ = state.try_update(|s| s.apply(change));
                        }
                        Err(e) => {
                            let _ = state.try_update(|s| s.fail("Delete post", &e));
                        }
                    }
                    let _ = busy.try_set(false);
                });
            }
            #[cfg(not(feature = "hydrate"))]
            let _ = post_id;
        }
    });

    let render_posts = move |posts: Vec<Post>, flagged: bool| {
        if posts.is_empty() {
            return view! { <p class="admin-page__empty">"No posts found."</p> }.into_any();
        }
        posts
            .into_iter()
            .map(|post| view! { <PostRow post=post flagged=flagged busy=busy on_delete=on_delete_post/> })
            .collect_view()
            .into_any()
    };

    view! {
        <div class="admin-page">
            <header class="admin-page__header toolbar">
                <h1 class="toolbar__title">"Admin Dashboard"</h1>
                <span class="toolbar__spacer"></span>
                <a class="btn" href=HOME_PATH>"Back to Home"</a>
            </header>

            <nav class="admin-page__tabs">
                {AdminTab::ALL
                    .into_iter()
                    .map(|t| {
                        view! {
                            <button
                                class="admin-page__tab"
                                class:admin-page__tab--active=move || tab.get() == t
                                on:click=move |_| tab.set(t)
                            >
                                {t.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </nav>

            <Show when=move || state.with(|s| s.error.is_some())>
                <div class="admin-page__error">
                    <span>{move || state.with(|s| s.error.clone().unwrap_or_default())}</span>
                    <button class="btn" on:click=move |_| state.update(|s| s.error = None)>"Dismiss"</button>
                </div>
            </Show>

            <section class="admin-page__content">
                {move || {
                    if state.with(|s| s.loading) {
                        return view! { <Spinner label="Loading admin data..."/> }.into_any();
                    }
                    match tab.get() {
                        AdminTab::Users => {
                            let users = state.with(|s| s.users.clone());
                            if users.is_empty() {
                                return view! { <p class="admin-page__empty">"No users found."</p> }.into_any();
                            }
                            users
                                .into_iter()
                                .map(|user| {
                                    view! {
                                        <UserRow
                                            user=user
                                            busy=busy
                                            on_toggle_admin=on_toggle_admin
                                            on_delete=on_delete_user
                                        />
                                    }
                                })
                                .collect_view()
                                .into_any()
                        }
                        AdminTab::Posts => render_posts(state.with(|s| s.posts.clone()), false),
                        AdminTab::Flagged => render_posts(state.with(|s| s.flagged.clone()), true),
                    }
                }}
            </section>
        </div>
    }
}
