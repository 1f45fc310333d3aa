//! Well-known profile role names.
//!
//! These must match the CHECK constraint on `profiles.role` in
//! `20260101000002_create_users_and_profiles.sql`.

use crate::error::CoreError;

pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_STAFF: &str = "staff";
pub const ROLE_USER: &str = "user";

/// Role given to every freshly created profile.
pub const DEFAULT_ROLE: &str = ROLE_USER;

/// All valid role names.
pub const VALID_ROLES: &[&str] = &[ROLE_ADMIN, ROLE_STAFF, ROLE_USER];

/// Validate that a role string is one of [`VALID_ROLES`].
pub fn validate_role(role: &str) -> Result<(), CoreError> {
    if VALID_ROLES.contains(&role) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid role '{role}'. Must be one of: {}",
            VALID_ROLES.join(", ")
        )))
    }
}

/// The role tag that matches a pair of capability flags.
///
/// Used when an account is created and whenever an admin moves it to a
/// different capability level, so the tag never contradicts the flags.
pub fn role_for_capabilities(is_staff: bool, is_superuser: bool) -> &'static str {
    if is_superuser {
        ROLE_ADMIN
    } else if is_staff {
        ROLE_STAFF
    } else {
        ROLE_USER
    }
}

/// Where a freshly logged-in identity should land, mirroring the capability
/// flags rather than the role tag.
pub fn dashboard_path(is_staff: bool, is_superuser: bool) -> &'static str {
    if is_superuser {
        "/admin/"
    } else if is_staff {
        "/staff-dashboard/"
    } else {
        "/user-dashboard/"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_roles_are_valid() {
        for role in VALID_ROLES {
            assert!(validate_role(role).is_ok());
        }
    }

    #[test]
    fn unknown_role_rejected() {
        let err = validate_role("superhero").unwrap_err();
        assert!(err.to_string().contains("Invalid role"));
    }

    #[test]
    fn default_role_is_user() {
        assert_eq!(DEFAULT_ROLE, "user");
    }

    #[test]
    fn superuser_wins_over_staff_for_dashboard() {
        assert_eq!(dashboard_path(true, true), "/admin/");
        assert_eq!(dashboard_path(true, false), "/staff-dashboard/");
        assert_eq!(dashboard_path(false, false), "/user-dashboard/");
    }

    #[test]
    fn capability_flags_map_to_role_tags() {
        assert_eq!(role_for_capabilities(false, false), ROLE_USER);
        assert_eq!(role_for_capabilities(true, false), ROLE_STAFF);
        assert_eq!(role_for_capabilities(true, true), ROLE_ADMIN);
        assert_eq!(role_for_capabilities(false, true), ROLE_ADMIN);
    }
}
