//! Well-known role name constants.
//!
//! Every catalog page outside the login flow requires one of these.

pub const ROLE_ADMIN: &str = "ADMIN";
pub const ROLE_USER: &str = "USER";

/// Roles allowed to browse and edit the catalog.
pub const CATALOG_ROLES: &[&str] = &[ROLE_ADMIN, ROLE_USER];

/// Whether any of the given roles grants access to the catalog.
pub fn has_catalog_role<S: AsRef<str>>(roles: &[S]) -> bool {
    roles
        .iter()
        .any(|role| CATALOG_ROLES.contains(&role.as_ref()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_and_user_grant_access() {
        assert!(has_catalog_role(&["ADMIN"]));
        assert!(has_catalog_role(&["GUEST", "USER"]));
    }

    #[test]
    fn other_roles_do_not_grant_access() {
        assert!(!has_catalog_role(&["GUEST"]));
        assert!(!has_catalog_role::<&str>(&[]));
        assert!(!has_catalog_role(&["admin"]));
    }
}
