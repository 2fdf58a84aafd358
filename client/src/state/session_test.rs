use super::*;

#[test]
fn in_memory_session_starts_unauthenticated() {
    let session = Session::in_memory();
    assert_eq!(session.token(), None);
    assert!(!session.is_authenticated());
}

#[test]
fn begin_and_end_round_trip_through_store() {
    let session = Session::in_memory();
    session.begin("tok-a");
    assert_eq!(session.token().as_deref(), Some("tok-a"));
    session.end();
    assert_eq!(session.token(), None);
}

#[test]
fn later_sign_in_overwrites_token() {
    let session = Session::in_memory();
    session.begin("first");
    session.begin("second");
    assert_eq!(session.token().as_deref(), Some("second"));
}

#[test]
fn blank_stored_token_counts_as_absent() {
    let session = Session::new(MemoryTokenStore::with_token("   "));
    assert_eq!(session.token(), None);
}

#[test]
fn clones_share_the_same_store() {
    let session = Session::in_memory();
    let other = session.clone();
    session.begin("shared");
    assert_eq!(other.token().as_deref(), Some("shared"));
}

#[test]
fn debug_output_hides_token() {
    let session = Session::new(MemoryTokenStore::with_token("secret-token"));
    let rendered = format!("{session:?}");
    assert!(!rendered.contains("secret-token"));
    assert!(rendered.contains("authenticated: true"));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_store_is_noop_outside_browser() {
    let session = Session::browser();
    session.begin("ignored");
    assert_eq!(session.token(), None);
}

#[test]
fn storage_write_failures_are_reported() {
    assert!(storage_write_ok::<&str>("remove", Ok(())));
    assert!(!storage_write_ok("remove", Err("SecurityError: storage disabled")));
    assert!(!storage_write_ok("persist", Err("QuotaExceededError")));
}
