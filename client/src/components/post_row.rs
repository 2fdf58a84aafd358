//! One post card in the admin dashboard's post lists.

use leptos::prelude::*;

use crate::net::types::Post;

/// Post summary with a delete action. `flagged` switches to the moderation style.
#[component]
pub fn PostRow(
    post: Post,
    #[prop(optional)] flagged: bool,
    #[prop(into)] busy: Signal<bool>,
    on_delete: Callback<String>,
) -> impl IntoView {
    let heading = if flagged { format!("Flagged Post ID: {}", post.id) } else { format!("Post ID: {}", post.id) };
    let author = post.user_id.clone().map(|uid| format!("by user {uid}"));
    let caption = post.caption_text().to_owned();
    let marked = post.is_flagged();
    let id = post.id.clone();

    view! {
        <div class="admin-card" class:admin-card--flagged=flagged>
            <div class="admin-card__body">
                <p class="admin-card__title">{heading}</p>
                <p class="admin-card__subtitle">{caption}</p>
                <p class="admin-card__meta">
                    {marked.then(|| view! { <span class="admin-card__badge admin-card__badge--flagged">"Flagged"</span> })}
                    {author.map(|a| view! { <span>{a}</span> })}
                </p>
            </div>
            <div class="admin-card__actions">
                <button
                    class="btn btn--danger"
                    disabled=move || busy.get()
                    on:click=move |_| on_delete.run(id.clone())
                >
                    "Delete"
                </button>
            </div>
        </div>
    }
}
