use crate::{ErrorKind, LoginCredentials, RegisterData};

fn valid() -> RegisterData {
    RegisterData::new("Ann", "ann@example.com", "password1", "password1")
}

#[test]
fn test_register_data_valid() {
    assert!(valid().validate().is_ok());
}

#[test]
fn test_register_data_rejects_each_rule() {
    let cases = [
        (RegisterData { name: String::new(), ..valid() }, "Name is required"),
        (
            RegisterData { email: "ann.example.com".into(), ..valid() },
            "Please enter a valid email address",
        ),
        (
            RegisterData { password: "short".into(), password_confirmation: "short".into(), ..valid() },
            "Password must be at least 8 characters",
        ),
        (
            RegisterData { password_confirmation: "password2".into(), ..valid() },
            "Passwords do not match",
        ),
    ];

    for (data, expected) in cases {
        let err = data.validate().unwrap_err();
        assert_eq!(err.display_message(), expected);
        assert_eq!(err.kind(), ErrorKind::ValidationFailure);
    }
}

#[test]
fn test_register_data_does_not_serialize_confirmation() {
    let value = serde_json::to_value(valid()).unwrap();
    assert!(value.get("password_confirmation").is_none());
    assert_eq!(value["name"], serde_json::json!("Ann"));
}

#[test]
fn test_secrets_are_redacted_in_debug() {
    let credentials = LoginCredentials::new("a@b.com", "hunter22");
    assert!(!format!("{credentials:?}").contains("hunter22"));
    assert!(!format!("{:?}", valid()).contains("password1"));
}
