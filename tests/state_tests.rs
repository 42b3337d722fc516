mod common;

use chrono::Duration;
use serde_json::json;

use common::*;
use drtv_source::{DrtvError, SessionState, Token, TokenType};

#[test]
fn test_state_round_trip() {
    let state = session_with(
        token_expiring_at("2024-06-02T10:30:00Z".parse().unwrap(), "abc"),
        Some("user-1"),
    );

    let saved = state.to_json().unwrap();
    let restored = SessionState::restore(&saved).unwrap();

    assert_eq!(restored, state);
}

#[test]
fn test_empty_state_serializes_to_empty_object() {
    let saved = SessionState::new().to_json().unwrap();
    assert_eq!(saved, "{}");
    assert_eq!(SessionState::restore(&saved).unwrap(), SessionState::new());
}

#[test]
fn test_state_uses_camel_case_keys() {
    let state = session_with(
        token_expiring_at("2024-06-02T10:30:00Z".parse().unwrap(), "abc"),
        Some("user-1"),
    );

    let value: serde_json::Value = serde_json::from_str(&state.to_json().unwrap()).unwrap();

    assert_eq!(value["userId"], json!("user-1"));
    assert_eq!(value["token"]["value"], json!("abc"));
    assert_eq!(value["token"]["type"], json!("UserAccount"));
    assert_eq!(value["token"]["refreshable"], json!(true));
    assert!(value["token"]["expirationDate"].is_string());
}

#[test]
fn test_restore_catalog_token_format() {
    let saved = r#"{
        "token": {
            "value": "eyJ0eXAi",
            "expirationDate": "2024-06-02T10:30:00.123+02:00",
            "refreshable": true,
            "type": "UserAccount"
        },
        "userId": "f7c3"
    }"#;

    let state = SessionState::restore(saved).unwrap();
    let token = state.token.unwrap();

    assert_eq!(token.value, "eyJ0eXAi");
    assert_eq!(token.token_type, TokenType::UserAccount);
    assert_eq!(
        token.expiration_date,
        "2024-06-02T08:30:00.123Z".parse::<chrono::DateTime<chrono::Utc>>().unwrap()
    );
    assert_eq!(state.user_id.as_deref(), Some("f7c3"));
}

#[test]
fn test_restore_garbage_is_parse_error() {
    let err = SessionState::restore("not json").unwrap_err();
    match err {
        DrtvError::ParseError { context, payload, .. } => {
            assert_eq!(context, "saved state");
            assert_eq!(payload, "not json");
        }
        other => panic!("Expected ParseError, got {:?}", other),
    }
}

#[test]
fn test_unknown_token_type_deserializes() {
    let token: Token = serde_json::from_value(json!({
        "value": "x",
        "expirationDate": "2030-01-01T00:00:00Z",
        "refreshable": false,
        "type": "SomethingNew"
    }))
    .unwrap();

    assert_eq!(token.token_type, TokenType::Unknown);
}

#[test]
fn test_replace_token_clears_user_id() {
    let now = fixed_now();
    let mut state = session_with(token_expiring_at(now, "old"), Some("user-1"));

    state.replace_token(token_expiring_at(now + Duration::days(1), "new"));

    assert_eq!(state.token.unwrap().value, "new");
    assert!(state.user_id.is_none());
}

#[test]
fn test_needs_refresh_margin() {
    let now = fixed_now();

    assert!(!token_expiring_at(now + Duration::hours(4), "t").needs_refresh(now));
    assert!(token_expiring_at(now + Duration::hours(3), "t").needs_refresh(now));
    assert!(token_expiring_at(now + Duration::minutes(90), "t").needs_refresh(now));
    assert!(token_expiring_at(now - Duration::hours(5), "t").needs_refresh(now));
}
