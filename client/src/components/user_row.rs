//! One user card in the admin dashboard's user list.

use leptos::prelude::*;

use crate::net::types::UserProfile;

/// User summary with promote/demote and delete actions.
#[component]
pub fn UserRow(
    user: UserProfile,
    #[prop(into)] busy: Signal<bool>,
    on_toggle_admin: Callback<(UserProfile, bool)>,
    on_delete: Callback<UserProfile>,
) -> impl IntoView {
    let name = user.display_name.clone().filter(|n| !n.trim().is_empty()).unwrap_or_else(|| "Unnamed".to_owned());
    let badge = if user.is_admin { "Admin" } else { "User" };
    let toggle_label = if user.is_admin { "Demote" } else { "Promote" };
    let role = user.role.clone();
    let status = user.status.clone();
    let toggle_user = user.clone();
    let delete_user = user.clone();

    view! {
        <div class="admin-card" class:admin-card--admin=user.is_admin>
            <div class="admin-card__body">
                <p class="admin-card__title">{user.email.clone()}</p>
                <p class="admin-card__subtitle">{name}</p>
                <p class="admin-card__meta">
                    <span class="admin-card__badge">{badge}</span>
                    {role.map(|r| view! { <span class="admin-card__role">{r}</span> })}
                    {status.map(|s| view! { <span class="admin-card__status">{s}</span> })}
                </p>
            </div>
            <div class="admin-card__actions">
                <button
                    class="btn"
                    disabled=move || busy.get()
                    on:click=move |_| on_toggle_admin.run((toggle_user.clone(), !toggle_user.is_admin))
                >
                    {toggle_label}
                </button>
                <button
                    class="btn btn--danger"
                    disabled=move || busy.get()
                    on:click=move |_| on_delete.run(delete_user.clone())
                >
                    "Delete"
                </button>
            </div>
        </div>
    }
}
