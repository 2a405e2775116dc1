use crate::Role;

use std::str::FromStr;

use proptest::prelude::*;
use proptest::sample::select;

const ALL_ROLES: [Role; 3] = [Role::User, Role::Moderator, Role::Admin];

// =============================================================================
// Capability order
// =============================================================================

#[test]
fn given_admin_when_satisfies_any_role_then_true() {
    for required in ALL_ROLES {
        assert!(Role::Admin.satisfies(required), "admin should satisfy {required}");
    }
}

#[test]
fn given_moderator_when_satisfies_then_everything_but_admin() {
    assert!(Role::Moderator.satisfies(Role::User));
    assert!(Role::Moderator.satisfies(Role::Moderator));
    assert!(!Role::Moderator.satisfies(Role::Admin));
}

#[test]
fn given_user_when_satisfies_then_only_user() {
    assert!(Role::User.satisfies(Role::User));
    assert!(!Role::User.satisfies(Role::Moderator));
    assert!(!Role::User.satisfies(Role::Admin));
}

#[test]
fn given_variant_order_when_compared_then_matches_hierarchy() {
    assert!(Role::User < Role::Moderator);
    assert!(Role::Moderator < Role::Admin);
}

// =============================================================================
// String and serde representations
// =============================================================================

#[test]
fn given_known_strings_when_from_str_then_parses() {
    assert_eq!(Role::from_str("user").unwrap(), Role::User);
    assert_eq!(Role::from_str("moderator").unwrap(), Role::Moderator);
    assert_eq!(Role::from_str("admin").unwrap(), Role::Admin);
}

#[test]
fn given_unknown_string_when_from_str_then_invalid_role_error() {
    let err = Role::from_str("superuser").unwrap_err();
    assert!(err.to_string().contains("superuser"));
}

#[test]
fn given_role_when_serialized_then_lowercase_string() {
    assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"admin\"");
    assert_eq!(serde_json::to_string(&Role::Moderator).unwrap(), "\"moderator\"");
    assert_eq!(serde_json::to_string(&Role::User).unwrap(), "\"user\"");
}

#[test]
fn given_no_role_when_defaulted_then_user() {
    assert_eq!(Role::default(), Role::User);
}

// =============================================================================
// Properties over the closed set
// =============================================================================

proptest! {
    #[test]
    fn satisfies_is_reflexive(role in select(ALL_ROLES.to_vec())) {
        prop_assert!(role.satisfies(role));
    }

    #[test]
    fn satisfies_is_monotone_in_holder(
        lower in select(ALL_ROLES.to_vec()),
        higher in select(ALL_ROLES.to_vec()),
        required in select(ALL_ROLES.to_vec()),
    ) {
        // A higher role never loses a capability a lower role has
        prop_assume!(lower <= higher);
        if lower.satisfies(required) {
            prop_assert!(higher.satisfies(required));
        }
    }

    #[test]
    fn as_str_round_trips(role in select(ALL_ROLES.to_vec())) {
        prop_assert_eq!(Role::from_str(role.as_str()).unwrap(), role);
    }
}
