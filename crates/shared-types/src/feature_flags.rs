use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::models::AuthUser;

/// Feature flags controlling which optional console behaviors are active.
///
/// Loaded from `config.toml` and exposed to components via context. Every
/// field defaults to `false` so that a missing or incomplete config file
/// leaves the console fully writable.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct FeatureFlags {
    /// Hide every mutating action (uploads, edits, deletes).
    #[serde(default)]
    pub read_only: bool,
    /// Show the breadcrumb bar above list pages.
    #[serde(default)]
    pub breadcrumbs: bool,
}

/// Names a single feature flag, so gates can be declared in markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feature {
    ReadOnly,
    Breadcrumbs,
}

impl FeatureFlags {
    /// Whether the named flag is enabled.
    pub fn is_enabled(&self, feature: Feature) -> bool {
        match feature {
            Feature::ReadOnly => self.read_only,
            Feature::Breadcrumbs => self.breadcrumbs,
        }
    }
}

/// Top-level config file structure matching `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub features: FeatureFlags,
    /// User the console acts as when no identity provider is configured.
    #[serde(default)]
    pub user: Option<AuthUser>,
}

impl AppConfig {
    /// Parse the contents of a `config.toml` file.
    pub fn from_toml(contents: &str) -> Result<Self, AppError> {
        Ok(toml::from_str(contents)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_flags_all_false() {
        let flags = FeatureFlags::default();
        assert!(!flags.read_only);
        assert!(!flags.breadcrumbs);
    }

    #[test]
    fn deserialize_empty_toml_defaults_all_false() {
        let config = AppConfig::from_toml("").unwrap();
        assert_eq!(config.features, FeatureFlags::default());
    }

    #[test]
    fn deserialize_partial_toml_defaults_missing_fields() {
        let config = AppConfig::from_toml(
            r#"
            [features]
            read_only = true
            "#,
        )
        .unwrap();
        assert!(config.features.read_only);
        assert!(!config.features.breadcrumbs);
    }

    #[test]
    fn user_section_is_optional() {
        assert!(AppConfig::from_toml("").unwrap().user.is_none());

        let config = AppConfig::from_toml(
            r#"
            [user]
            username = "jdoe"
            display_name = "Jane Doe"
            role = "developer"
            "#,
        )
        .unwrap();
        let user = config.user.unwrap();
        assert_eq!(user.username, "jdoe");
        assert!(user.is_developer());
    }

    #[test]
    fn malformed_toml_is_a_config_error() {
        let err = AppConfig::from_toml("[features]\nread_only = \"maybe\"").unwrap_err();
        assert_eq!(err.kind, crate::AppErrorKind::ConfigError);
    }

    #[test]
    fn is_enabled_reads_the_named_flag() {
        let flags = FeatureFlags {
            read_only: true,
            ..FeatureFlags::default()
        };
        assert!(flags.is_enabled(Feature::ReadOnly));
        assert!(!flags.is_enabled(Feature::Breadcrumbs));
    }

    #[test]
    fn deserialize_json_with_missing_fields_defaults() {
        let flags: FeatureFlags = serde_json::from_str("{}").unwrap();
        assert_eq!(flags, FeatureFlags::default());
    }
}
