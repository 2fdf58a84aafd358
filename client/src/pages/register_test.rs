use super::*;

#[test]
fn validate_registration_input_trims_and_drops_blank_optionals() {
    let form = validate_registration_input(" Ann ", " ann@example.com ", "pw", "   ", "")
        .expect("valid form");
    assert_eq!(
        form,
        Registration {
            email: "ann@example.com".to_owned(),
            password: "pw".to_owned(),
            display_name: "Ann".to_owned(),
            bio: None,
            avatar_url: None,
        }
    );
}

#[test]
fn validate_registration_input_keeps_optionals() {
    let form = validate_registration_input("Ann", "ann@example.com", "pw", " hello ", "http://img/a.png")
        .expect("valid form");
    assert_eq!(form.bio.as_deref(), Some("hello"));
    assert_eq!(form.avatar_url.as_deref(), Some("http://img/a.png"));
}

#[test]
fn validate_registration_input_requires_core_fields() {
    let expected = Err("Enter a display name, email and password.");
    assert_eq!(validate_registration_input("", "a@b.c", "pw", "", ""), expected);
    assert_eq!(validate_registration_input("Ann", "  ", "pw", "", ""), expected);
    assert_eq!(validate_registration_input("Ann", "a@b.c", "", "", ""), expected);
}
