//! Loading indicator.

use leptos::prelude::*;

/// Centered spinner with a status line.
#[component]
pub fn Spinner(#[prop(optional, into)] label: Option<String>) -> impl IntoView {
    let label = label.unwrap_or_else(|| "Loading...".to_owned());
    view! {
        <div class="spinner-wrap" role="status" aria-live="polite">
            <div class="spinner"></div>
            <p class="spinner-wrap__label">{label}</p>
        </div>
    }
}
