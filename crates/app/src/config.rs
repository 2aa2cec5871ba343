use shared_types::{AppConfig, AuthUser, FeatureFlags};
use std::sync::OnceLock;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// `config.toml` as shipped with the build.
const BUNDLED_CONFIG: &str = include_str!("../config.toml");

/// Parse config contents, defaulting everything off when they are unusable.
pub fn parse_config(contents: &str) -> AppConfig {
    match AppConfig::from_toml(contents) {
        Ok(config) => {
            tracing::debug!("[config] Feature flags: {:?}", config.features);
            config
        }
        Err(e) => {
            tracing::warn!("[config] Failed to parse config.toml: {e}; defaulting all flags off");
            AppConfig::default()
        }
    }
}

/// The bundled configuration, parsed on first use.
pub fn config() -> &'static AppConfig {
    CONFIG.get_or_init(|| parse_config(BUNDLED_CONFIG))
}

pub fn feature_flags() -> FeatureFlags {
    config().features.clone()
}

pub fn configured_user() -> Option<AuthUser> {
    config().user.clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_config_parses() {
        let config = AppConfig::from_toml(BUNDLED_CONFIG).unwrap();
        assert!(config.user.is_some());
    }

    #[test]
    fn unusable_config_falls_back_to_defaults() {
        let config = parse_config("[features\nread_only = yes");
        assert_eq!(config.features, FeatureFlags::default());
        assert!(config.user.is_none());
    }
}
