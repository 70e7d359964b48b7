use super::*;

#[test]
fn validate_credentials_trims_both_fields() {
    assert_eq!(
        validate_credentials("  admin  ", " admin123 "),
        Ok(("admin".to_owned(), "admin123".to_owned()))
    );
}

#[test]
fn validate_credentials_requires_username() {
    assert_eq!(
        validate_credentials("   ", "secret"),
        Err("Enter both username and password.")
    );
}

#[test]
fn validate_credentials_requires_password() {
    assert_eq!(
        validate_credentials("admin", ""),
        Err("Enter both username and password.")
    );
}
