use super::*;

fn profile(is_admin: bool) -> UserProfile {
    UserProfile {
        id: "7".to_owned(),
        email: "guard@example.com".to_owned(),
        display_name: Some("Guard".to_owned()),
        is_admin,
        firebase_uid: None,
        bio: None,
        avatar_url: None,
        role: None,
        status: None,
    }
}

#[test]
fn guard_starts_in_checking_state() {
    assert_eq!(GuardStatus::default(), GuardStatus::Checking);
}

#[test]
fn granted_outcome_renders_children_without_redirect() {
    let verdict = GuardVerdict::from_outcome(AccessOutcome::Granted(profile(true)));
    assert_eq!(verdict.status, GuardStatus::Allowed);
    assert_eq!(verdict.user, Some(profile(true)));
    assert_eq!(verdict.redirect, None);
}

#[test]
fn unauthenticated_outcome_hides_children_and_goes_to_login() {
    let verdict = GuardVerdict::from_outcome(AccessOutcome::Unauthenticated);
    assert_eq!(verdict.status, GuardStatus::Denied);
    assert_eq!(verdict.user, None);
    assert_eq!(verdict.redirect, Some("/login"));
}

#[test]
fn forbidden_outcome_hides_children_and_goes_home() {
    let verdict = GuardVerdict::from_outcome(AccessOutcome::Forbidden);
    assert_eq!(verdict.status, GuardStatus::Denied);
    assert_eq!(verdict.user, None);
    assert_eq!(verdict.redirect, Some("/home"));
}

#[test]
fn granted_verdict_publishes_profile_and_clears_loading() {
    let mut auth = AuthState { user: None, loading: true };
    GuardVerdict::from_outcome(AccessOutcome::Granted(profile(false))).publish(&mut auth);
    assert!(!auth.loading);
    assert_eq!(auth.user, Some(profile(false)));
}

#[test]
fn denied_verdict_clears_loading_and_keeps_cached_profile() {
    let mut auth = AuthState { user: Some(profile(false)), loading: true };
    GuardVerdict::from_outcome(AccessOutcome::Forbidden).publish(&mut auth);
    assert!(!auth.loading);
    assert_eq!(auth.user, Some(profile(false)));

    let mut empty = AuthState { user: None, loading: true };
    GuardVerdict::from_outcome(AccessOutcome::Unauthenticated).publish(&mut empty);
    assert!(!empty.loading);
    assert_eq!(empty.user, None);
}
