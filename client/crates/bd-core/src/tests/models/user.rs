use crate::{AuthResponse, BalanceInfo, ProfileUpdate, Session, User, UserData};

fn ann() -> User {
    User {
        avatar: Some("ann.png".to_string()),
        role: Some("member".to_string()),
        ..User::new("1", "ann@example.com", "Ann")
    }
}

#[test]
fn test_user_merged_replaces_only_given_fields() {
    let user = ann();
    let merged = user.merged(&ProfileUpdate::name("X"));

    assert_eq!(merged, User { name: "X".to_string(), ..user });
}

#[test]
fn test_user_merged_ignores_password() {
    let user = ann();
    let update = ProfileUpdate {
        password: Some("new-password".to_string()),
        ..Default::default()
    };

    assert_eq!(user.merged(&update), user);
    assert!(!format!("{update:?}").contains("new-password"));
}

#[test]
fn test_auth_response_accepts_both_refresh_token_spellings() {
    let camel: AuthResponse = serde_json::from_str(
        r#"{"user":{"id":"1","email":"a@b.com","name":"A"},"token":"t1","refreshToken":"r1"}"#,
    )
    .unwrap();
    let snake: AuthResponse = serde_json::from_str(
        r#"{"user":{"id":"1","email":"a@b.com","name":"A"},"token":"t1","refresh_token":"r1"}"#,
    )
    .unwrap();

    assert_eq!(camel, snake);

    let session = Session::from(camel);
    assert_eq!(session.access_token, "t1");
    assert_eq!(session.refresh_token.as_deref(), Some("r1"));
    assert_eq!(session.user_id(), Some("1"));
    assert_eq!(session.display_name(), Some("A"));
    assert!(!format!("{session:?}").contains("t1"));
}

#[test]
fn test_balance_info_defaults_without_user_data() {
    let balance = BalanceInfo::from_user_data(None);
    assert_eq!(balance.currency_type, "S$");
    assert_eq!(balance.amount, 0.0);

    let data = UserData {
        id: "1".into(),
        name: "Ann".into(),
        email: "ann@example.com".into(),
        currency_type: "USD".into(),
        balance_amount: 3000.0,
    };
    let balance = BalanceInfo::from_user_data(Some(&data));
    assert_eq!(balance.currency_type, "USD");
    assert_eq!(balance.amount, 3000.0);
}

#[test]
fn test_user_accepts_date_only_created_at() {
    let user: User = serde_json::from_str(
        r#"{"id":"1","email":"a@b.com","name":"A","createdAt":"2024-05-20","updatedAt":"2024-05-21 08:30:00"}"#,
    )
    .unwrap();

    assert_eq!(
        user.created_at.map(|t| t.to_rfc3339()).as_deref(),
        Some("2024-05-20T00:00:00+00:00")
    );
    assert_eq!(
        user.updated_at.map(|t| t.to_rfc3339()).as_deref(),
        Some("2024-05-21T08:30:00+00:00")
    );
}

#[test]
fn test_auth_response_survives_unparseable_timestamps() {
    let response: AuthResponse = serde_json::from_str(
        r#"{"user":{"id":"1","email":"a@b.com","name":"A","createdAt":"last tuesday","updatedAt":1716163200},"token":"t1","refreshToken":"r1"}"#,
    )
    .unwrap();

    assert!(response.user.created_at.is_none());
    assert!(response.user.updated_at.is_none());
    assert_eq!(response.user.name, "A");
}

#[test]
fn test_user_keeps_rfc3339_timestamps() {
    let user: User = serde_json::from_str(
        r#"{"id":"1","email":"a@b.com","name":"A","createdAt":"2024-05-20T10:00:00+02:00"}"#,
    )
    .unwrap();

    assert_eq!(
        user.created_at.map(|t| t.to_rfc3339()).as_deref(),
        Some("2024-05-20T08:00:00+00:00")
    );
    assert!(user.updated_at.is_none());
}

#[test]
fn test_balance_info_blank_currency_uses_default() {
    let data = UserData {
        id: "1".into(),
        name: "Ann".into(),
        email: "ann@example.com".into(),
        currency_type: String::new(),
        balance_amount: 12.0,
    };

    let balance = BalanceInfo::from(&data);
    assert_eq!(balance.currency_type, "S$");
    assert_eq!(balance.amount, 12.0);
}
