use dioxus::prelude::*;
use shared_types::{AuthUser, Feature, FeatureFlags};

use crate::auth::use_current_user;

/// Whether `user` meets the requested authorization level.
///
/// With neither level requested any signed-in user passes; a signed-out user
/// never does.
pub fn auth_allows(user: Option<&AuthUser>, is_developer: bool, is_admin: bool) -> bool {
    match user {
        Some(user) => (!is_developer || user.is_developer()) && (!is_admin || user.is_admin()),
        None => false,
    }
}

/// Whether a feature gate passes: the flag is on, or off when `is_not` is set.
pub fn feature_allows(flags: &FeatureFlags, feature: Feature, is_not: bool) -> bool {
    flags.is_enabled(feature) != is_not
}

/// Render children only for users with the requested authorization level.
#[component]
pub fn IfAuth(
    #[props(default = false)] is_developer: bool,
    #[props(default = false)] is_admin: bool,
    children: Element,
) -> Element {
    let user = use_current_user();

    if auth_allows(user.as_ref(), is_developer, is_admin) {
        rsx! { {children} }
    } else {
        rsx! {}
    }
}

/// Render children only when `feature` is enabled, or disabled if `is_not`.
///
/// Without flags in context every flag reads as off.
#[component]
pub fn IfFeature(
    feature: Feature,
    #[props(default = false)] is_not: bool,
    children: Element,
) -> Element {
    let flags = try_use_context::<FeatureFlags>().unwrap_or_default();

    if feature_allows(&flags, feature, is_not) {
        rsx! { {children} }
    } else {
        rsx! {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::UserRole;

    fn user(role: UserRole) -> AuthUser {
        AuthUser {
            username: "testuser".into(),
            display_name: "Test User".into(),
            role,
        }
    }

    #[test]
    fn signed_out_user_never_passes() {
        assert!(!auth_allows(None, false, false));
        assert!(!auth_allows(None, true, false));
    }

    #[test]
    fn developer_gate_follows_role() {
        assert!(!auth_allows(Some(&user(UserRole::Viewer)), true, false));
        assert!(auth_allows(Some(&user(UserRole::Viewer)), false, false));
        assert!(auth_allows(Some(&user(UserRole::Developer)), true, false));
        assert!(auth_allows(Some(&user(UserRole::Admin)), true, false));
    }

    #[test]
    fn admin_gate_rejects_developers() {
        assert!(!auth_allows(Some(&user(UserRole::Developer)), true, true));
        assert!(auth_allows(Some(&user(UserRole::Admin)), true, true));
    }

    #[test]
    fn feature_gate_inverts_with_is_not() {
        let read_only = FeatureFlags {
            read_only: true,
            ..FeatureFlags::default()
        };
        assert!(feature_allows(&read_only, Feature::ReadOnly, false));
        assert!(!feature_allows(&read_only, Feature::ReadOnly, true));
        assert!(feature_allows(&FeatureFlags::default(), Feature::ReadOnly, true));
        assert!(!feature_allows(&FeatureFlags::default(), Feature::Breadcrumbs, false));
    }
}
