use super::*;

#[test]
fn validate_login_input_trims_email() {
    assert_eq!(
        validate_login_input("  user@example.com  ", "secret"),
        Ok(("user@example.com".to_owned(), "secret".to_owned()))
    );
}

#[test]
fn validate_login_input_keeps_password_whitespace() {
    assert_eq!(
        validate_login_input("a@b.c", " pass word "),
        Ok(("a@b.c".to_owned(), " pass word ".to_owned()))
    );
}

#[test]
fn validate_login_input_requires_both_fields() {
    assert_eq!(validate_login_input("   ", "pw"), Err("Enter both email and password."));
    assert_eq!(validate_login_input("a@b.c", ""), Err("Enter both email and password."));
}

#[test]
fn login_failed_message_prefixes_reason() {
    assert_eq!(login_failed_message("INVALID_PASSWORD"), "Login failed: INVALID_PASSWORD");
}
