use serde::{Deserialize, Serialize};

/// Registry role granted to a console user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    #[default]
    Viewer,
    Developer,
    Admin,
}

impl UserRole {
    /// Returns true if this role satisfies the `required` role.
    /// Admin satisfies all roles, Developer satisfies itself and Viewer.
    pub fn satisfies(&self, required: &UserRole) -> bool {
        match self {
            UserRole::Admin => true,
            UserRole::Developer => matches!(required, UserRole::Developer | UserRole::Viewer),
            UserRole::Viewer => matches!(required, UserRole::Viewer),
        }
    }
}

/// Authenticated user info as seen by the console.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthUser {
    pub username: String,
    pub display_name: String,
    #[serde(default)]
    pub role: UserRole,
}

impl AuthUser {
    pub fn is_developer(&self) -> bool {
        self.role.satisfies(&UserRole::Developer)
    }

    pub fn is_admin(&self) -> bool {
        self.role.satisfies(&UserRole::Admin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(role: UserRole) -> AuthUser {
        AuthUser {
            username: "jdoe".into(),
            display_name: "Jane Doe".into(),
            role,
        }
    }

    #[test]
    fn roles_deserialize_from_lowercase_names() {
        let role: UserRole = serde_json::from_str(r#""admin""#).unwrap();
        assert_eq!(role, UserRole::Admin);
        assert!(serde_json::from_str::<UserRole>(r#""owner""#).is_err());
    }

    #[test]
    fn developer_access_follows_role_hierarchy() {
        assert!(!user(UserRole::Viewer).is_developer());
        assert!(user(UserRole::Developer).is_developer());
        assert!(user(UserRole::Admin).is_developer());
        assert!(!user(UserRole::Developer).is_admin());
    }

    #[test]
    fn missing_role_deserializes_as_viewer() {
        let u: AuthUser =
            serde_json::from_str(r#"{"username":"a","display_name":"A"}"#).unwrap();
        assert_eq!(u.role, UserRole::Viewer);
    }
}
