//! Route guard for views that need a signed-in (and optionally admin) user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wraps a protected page. The check runs once when the guard mounts: it is
//! not repeated on token expiry or when `require_admin` changes afterwards.
//! Children are never built before the check resolves, and the server render
//! always shows the loading state.

#[cfg(test)]
#[path = "access_guard_test.rs"]
mod access_guard_test;

use leptos::prelude::*;

use crate::components::spinner::Spinner;
use crate::net::types::UserProfile;
use crate::state::auth::AuthState;
use crate::util::auth::AccessOutcome;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum GuardStatus {
    #[default]
    Checking,
    Allowed,
    Denied,
}

/// What the guard does once the access check resolves.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
struct GuardVerdict {
    status: GuardStatus,
    user: Option<UserProfile>,
    redirect: Option<&'static str>,
}

#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
impl GuardVerdict {
    fn from_outcome(outcome: AccessOutcome) -> Self {
        let redirect = outcome.redirect_target();
        match outcome {
            AccessOutcome::Granted(user) => Self { status: GuardStatus::Allowed, user: Some(user), redirect },
            AccessOutcome::Unauthenticated | AccessOutcome::Forbidden => {
                Self { status: GuardStatus::Denied, user: None, redirect }
            }
        }
    }

    /// Clear the loading flag and publish a granted profile. Denials keep
    /// whatever profile was cached before.
    fn publish(&self, auth: &mut AuthState) {
        auth.loading = false;
        if let Some(user) = &self.user {
            auth.user = Some(user.clone());
        }
    }
}

/// Render `children` only when the current session passes the access check.
///
/// Redirects to `/login` when unauthenticated and to `/home` when
/// `require_admin` is set but the user is not an admin.
#[component]
pub fn AccessGuard(#[prop(optional)] require_admin: bool, children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let status = RwSignal::new(GuardStatus::default());

    #[cfg(feature = "hydrate")]
    {
        use leptos_router::NavigateOptions;
        use leptos_router::hooks::use_navigate;

        use crate::net::api::BrowserApi;
        use crate::util::auth::check_access;

        let api = expect_context::<BrowserApi>();
        let navigate = use_navigate();
        auth.update(|a| a.loading = true);
        leptos::task::spawn_local(async move {
            let verdict = GuardVerdict::from_outcome(check_access(&api, require_admin).await);
            let _ = auth.try_update(|a| verdict.publish(a));
            let _ = status.try_set(verdict.status);
            if let Some(target) = verdict.redirect {
                navigate(target, NavigateOptions { replace: true, ..NavigateOptions::default() });
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (auth, require_admin);
    }

    view! {
        {move || match status.get() {
            GuardStatus::Checking => view! { <Spinner label="Checking access..."/> }.into_any(),
            GuardStatus::Allowed => children().into_any(),
            GuardStatus::Denied => ().into_any(),
        }}
    }
}
