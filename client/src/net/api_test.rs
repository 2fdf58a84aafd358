use super::*;
use crate::net::mock::MockTransport;
use crate::state::session::MemoryTokenStore;
use futures::executor::block_on;
use serde_json::json;

fn client_with(token: Option<&str>, transport: MockTransport) -> ApiClient<MockTransport> {
    let session = match token {
        Some(t) => Session::new(MemoryTokenStore::with_token(t)),
        None => Session::in_memory(),
    };
    ApiClient::new("http://api.test", session, transport)
}

// =============================================================
// Paths
// =============================================================

#[test]
fn path_helpers_percent_encode_keys() {
    assert_eq!(user_path("abc"), "/users/abc");
    assert_eq!(admin_user_path("a/b c"), "/admin/users/a%2Fb%20c");
    assert_eq!(promote_user_path("fb-1"), "/admin/promote-user/fb-1");
    assert_eq!(admin_post_path("12"), "/admin/posts/12");
}

// =============================================================
// Request construction
// =============================================================

#[test]
fn authorized_attaches_bearer_from_session() {
    let api = client_with(Some("tok-1"), MockTransport::new());
    let req = api.authorized(Method::Get, "/users/me").expect("token present");
    assert_eq!(req.url, "http://api.test/users/me");
    assert_eq!(req.bearer.as_deref(), Some("tok-1"));
}

#[test]
fn authorized_reads_token_at_call_time() {
    let api = client_with(None, MockTransport::new());
    assert_eq!(api.authorized(Method::Get, "/users/me"), Err(ApiError::Unauthenticated));
    api.session().begin("fresh");
    let req = api.authorized(Method::Get, "/users/me").expect("token present");
    assert_eq!(req.bearer.as_deref(), Some("fresh"));
}

#[test]
fn current_user_without_token_sends_nothing() {
    let api = client_with(None, MockTransport::new());
    let result = block_on(api.current_user());
    assert_eq!(result, Err(ApiError::Unauthenticated));
    assert!(api.transport().requests().is_empty());
}

// =============================================================
// Responses
// =============================================================

#[test]
fn current_user_parses_profile() {
    let transport = MockTransport::new().respond(
        200,
        json!({ "id": 1, "email": "a@b.c", "display_name": "A", "is_admin": true }),
    );
    let api = client_with(Some("tok"), transport);
    let user = block_on(api.current_user()).expect("profile");
    assert!(user.is_admin);
    let requests = api.transport().requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, Method::Get);
    assert_eq!(requests[0].url, "http://api.test/users/me");
}

#[test]
fn non_success_status_maps_to_status_error() {
    let transport = MockTransport::new().respond(401, json!({ "detail": "Invalid token" }));
    let api = client_with(Some("tok"), transport);
    let err = block_on(api.current_user()).expect_err("should fail");
    assert_eq!(err, ApiError::Status { status: 401, message: Some("Invalid token".to_owned()) });
}

#[test]
fn malformed_body_maps_to_decode_error() {
    let transport = MockTransport::new().respond_raw(200, "<html>oops</html>");
    let api = client_with(Some("tok"), transport);
    let err = block_on(api.current_user()).expect_err("should fail");
    assert!(matches!(err, ApiError::Decode(_)));
}

#[test]
fn network_failure_propagates() {
    let transport = MockTransport::new().fail(ApiError::Network("offline".to_owned()));
    let api = client_with(Some("tok"), transport);
    let err = block_on(api.list_users()).expect_err("should fail");
    assert_eq!(err, ApiError::Network("offline".to_owned()));
}

// =============================================================
// Mutations
// =============================================================

#[test]
fn set_admin_posts_flag_body() {
    let transport = MockTransport::new().respond(200, json!({ "detail": "ok" }));
    let api = client_with(Some("tok"), transport);
    block_on(api.set_admin("fb-9", true)).expect("promote");
    let req = &api.transport().requests()[0];
    assert_eq!(req.method, Method::Post);
    assert_eq!(req.url, "http://api.test/admin/promote-user/fb-9");
    assert_eq!(req.body.as_deref(), Some(r#"{"admin":true}"#));
    assert_eq!(req.bearer.as_deref(), Some("tok"));
}

#[test]
fn delete_post_ignores_response_body() {
    let transport = MockTransport::new().respond_raw(204, "");
    let api = client_with(Some("tok"), transport);
    block_on(api.delete_post("5")).expect("delete");
    let req = &api.transport().requests()[0];
    assert_eq!(req.method, Method::Delete);
    assert_eq!(req.url, "http://api.test/admin/posts/5");
    assert_eq!(req.body, None);
}

#[test]
fn create_user_sends_profile_payload() {
    let transport = MockTransport::new().respond(
        200,
        json!({ "id": 3, "email": "n@e.w", "display_name": "New" }),
    );
    let api = client_with(Some("tok"), transport);
    let payload = NewUser {
        email: "n@e.w".to_owned(),
        display_name: "New".to_owned(),
        bio: Some("hi".to_owned()),
        avatar_url: None,
    };
    let created = block_on(api.create_user(&payload)).expect("create");
    assert_eq!(created.id, "3");
    let req = &api.transport().requests()[0];
    assert_eq!(req.url, "http://api.test/users/");
    let sent: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap_or_default()).expect("json body");
    assert_eq!(sent, json!({ "email": "n@e.w", "display_name": "New", "bio": "hi" }));
}

#[test]
fn update_profile_puts_to_user_key() {
    let transport = MockTransport::new().respond(
        200,
        json!({ "id": 3, "email": "n@e.w", "display_name": "Renamed" }),
    );
    let api = client_with(Some("tok"), transport);
    let update = ProfileUpdate { display_name: "Renamed".to_owned(), bio: None, avatar_url: None };
    let user = block_on(api.update_profile("fb-3", &update)).expect("update");
    assert_eq!(user.display_name.as_deref(), Some("Renamed"));
    let req = &api.transport().requests()[0];
    assert_eq!(req.method, Method::Put);
    assert_eq!(req.url, "http://api.test/users/fb-3");
}
