use crate::{Role, UserIdentity};

#[test]
fn given_identity_when_serialized_then_camel_case_record_layout() {
    let identity = UserIdentity::demo_login("demo", Role::User);
    let json = serde_json::to_string(&identity).unwrap();

    assert!(json.contains("\"joinDate\""));
    assert!(json.contains("\"username\":\"demo\""));
    assert!(json.contains("\"role\":\"user\""));
    assert!(!json.contains("join_date"), "snake_case must not leak into the record");
}

#[test]
fn given_record_without_role_when_deserialized_then_defaults_to_user() {
    let json = r#"{"id":1,"username":"demo","email":"demo@example.com","level":7,"xp":2850,"tournaments":12,"wins":8,"joinDate":"2023-01-15"}"#;
    let identity: UserIdentity = serde_json::from_str(json).unwrap();

    assert_eq!(identity.role, Role::User);
}

#[test]
fn given_valid_record_when_roundtripped_then_preserves_all_fields() {
    let original = UserIdentity::demo_login("moderator", Role::Moderator);

    let json = serde_json::to_string(&original).unwrap();
    let restored: UserIdentity = serde_json::from_str(&json).unwrap();

    assert_eq!(original, restored);
}

#[test]
fn given_demo_login_when_constructed_then_fixed_display_stats() {
    let identity = UserIdentity::demo_login("admin", Role::Admin);

    assert_eq!(identity.id, 1);
    assert_eq!(identity.email, "admin@example.com");
    assert_eq!(identity.level, 7);
    assert_eq!(identity.xp, 2850);
    assert_eq!(identity.tournaments, 12);
    assert_eq!(identity.wins, 8);
    assert_eq!(identity.role, Role::Admin);
}

#[test]
fn given_registration_when_constructed_then_fresh_user_with_zeroed_counters() {
    let identity = UserIdentity::register("newbie", "newbie@example.com");

    assert!(identity.id > 0, "id should come from the current epoch millis");
    assert_eq!(identity.level, 1);
    assert_eq!(identity.xp, 0);
    assert_eq!(identity.tournaments, 0);
    assert_eq!(identity.wins, 0);
    assert_eq!(identity.role, Role::User);
    assert!(identity.join_date.starts_with("20"), "join date should be a current timestamp");
}
