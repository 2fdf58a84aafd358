use super::*;
use serde_json::json;

// =============================================================
// UserProfile
// =============================================================

#[test]
fn user_profile_accepts_numeric_id_and_missing_admin_flag() {
    let user: UserProfile = serde_json::from_value(json!({
        "id": 42,
        "email": "a@example.com",
        "display_name": "Ann"
    }))
    .expect("profile should parse");
    assert_eq!(user.id, "42");
    assert!(!user.is_admin);
    assert_eq!(user.firebase_uid, None);
}

#[test]
fn user_profile_reads_admin_flag_and_extras() {
    let user: UserProfile = serde_json::from_value(json!({
        "id": "u1",
        "email": "root@example.com",
        "display_name": null,
        "is_admin": true,
        "firebase_uid": "fb-1",
        "role": "creator",
        "status": "active"
    }))
    .expect("profile should parse");
    assert!(user.is_admin);
    assert_eq!(user.role.as_deref(), Some("creator"));
    assert_eq!(user.remote_key(), "fb-1");
}

#[test]
fn user_profile_rejects_boolean_id() {
    let parsed = serde_json::from_value::<UserProfile>(json!({ "id": true, "email": "x@y.z" }));
    assert!(parsed.is_err());
}

#[test]
fn remote_key_falls_back_to_id() {
    let mut user: UserProfile =
        serde_json::from_value(json!({ "id": 7, "email": "x@y.z" })).expect("profile should parse");
    assert_eq!(user.remote_key(), "7");
    user.firebase_uid = Some(String::new());
    assert_eq!(user.remote_key(), "7");
}

#[test]
fn label_prefers_display_name_over_email() {
    let mut user: UserProfile = serde_json::from_value(json!({
        "id": 1, "email": "x@y.z", "display_name": "  Xavier "
    }))
    .expect("profile should parse");
    assert_eq!(user.label(), "Xavier");
    user.display_name = Some("   ".to_owned());
    assert_eq!(user.label(), "x@y.z");
}

// =============================================================
// Post
// =============================================================

#[test]
fn post_accepts_content_alias_and_numeric_owner() {
    let post: Post = serde_json::from_value(json!({
        "id": 9,
        "content": "hello",
        "user_id": 3
    }))
    .expect("post should parse");
    assert_eq!(post.id, "9");
    assert_eq!(post.caption.as_deref(), Some("hello"));
    assert_eq!(post.user_id.as_deref(), Some("3"));
    assert_eq!(post.flagged, None);
}

#[test]
fn post_with_null_owner_and_empty_caption() {
    let post: Post = serde_json::from_value(json!({
        "id": "p1",
        "caption": "  ",
        "user_id": null,
        "flagged": true
    }))
    .expect("post should parse");
    assert_eq!(post.user_id, None);
    assert_eq!(post.caption_text(), "(no caption)");
    assert_eq!(post.flagged, Some(true));
}

#[test]
fn is_flagged_requires_explicit_true() {
    let mut post: Post = serde_json::from_value(json!({ "id": 4, "caption": "hi" })).expect("post should parse");
    assert!(!post.is_flagged());
    post.flagged = Some(false);
    assert!(!post.is_flagged());
    post.flagged = Some(true);
    assert!(post.is_flagged());
}

// =============================================================
// Request payloads
// =============================================================

#[test]
fn new_user_omits_absent_optional_fields() {
    let body = serde_json::to_value(NewUser {
        email: "a@b.c".to_owned(),
        display_name: "A".to_owned(),
        bio: None,
        avatar_url: Some("http://img/a.png".to_owned()),
    })
    .expect("serialize");
    assert_eq!(body, json!({ "email": "a@b.c", "display_name": "A", "avatar_url": "http://img/a.png" }));
}

#[test]
fn promote_request_serializes_admin_flag() {
    let body = serde_json::to_value(PromoteRequest { admin: false }).expect("serialize");
    assert_eq!(body, json!({ "admin": false }));
}
