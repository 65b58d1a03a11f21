use serde::Deserialize;
use std::fmt;

/// Environment variable holding the New Relic API key
pub const NEW_RELIC_KEY: &str = "NEW_RELIC_KEY";

/// Environment variable holding the New Relic license key
pub const NEW_RELIC_LICENSE_KEY: &str = "NEW_RELIC_LICENSE_KEY";

/// Environment variable holding the application name reported to New Relic
pub const APP_NAME: &str = "APP_NAME";

/// Every variable name the loader resolves into [`AppConfig`]
pub const RECOGNIZED_KEYS: [&str; 3] = [NEW_RELIC_KEY, NEW_RELIC_LICENSE_KEY, APP_NAME];

/// Application configuration resolved once at startup.
///
/// Field names are the lowercase form of the variable they are read from.
/// A variable that is set nowhere leaves its field empty.
#[derive(Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct AppConfig {
    /// New Relic API key (`NEW_RELIC_KEY`)
    #[serde(default)]
    pub new_relic_key: String,

    /// New Relic license key (`NEW_RELIC_LICENSE_KEY`)
    #[serde(default)]
    pub new_relic_license_key: String,

    /// Application name (`APP_NAME`)
    #[serde(default)]
    pub app_name: String,
}

impl AppConfig {
    /// Build a record directly, without reading any source
    pub fn new(
        new_relic_key: impl Into<String>,
        new_relic_license_key: impl Into<String>,
        app_name: impl Into<String>,
    ) -> Self {
        Self {
            new_relic_key: new_relic_key.into(),
            new_relic_license_key: new_relic_license_key.into(),
            app_name: app_name.into(),
        }
    }

    /// Whether both New Relic keys were provided
    pub fn has_new_relic_credentials(&self) -> bool {
        !self.new_relic_key.is_empty() && !self.new_relic_license_key.is_empty()
    }
}

// Keys never reach log output through Debug.
impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("new_relic_key", &redact(&self.new_relic_key))
            .field("new_relic_license_key", &redact(&self.new_relic_license_key))
            .field("app_name", &self.app_name)
            .finish()
    }
}

fn redact(value: &str) -> &'static str {
    if value.is_empty() {
        "<unset>"
    } else {
        "[REDACTED]"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty() {
        let config = AppConfig::default();
        assert_eq!(config.new_relic_key, "");
        assert_eq!(config.new_relic_license_key, "");
        assert_eq!(config.app_name, "");
        assert!(!config.has_new_relic_credentials());
    }

    #[test]
    fn test_debug_redacts_keys() {
        let config = AppConfig::new("nr-key-123", "nr-license-456", "svc-1");
        let debug = format!("{config:?}");

        assert!(!debug.contains("nr-key-123"));
        assert!(!debug.contains("nr-license-456"));
        assert!(debug.contains("[REDACTED]"));
        assert!(debug.contains("svc-1"));
    }

    #[test]
    fn test_debug_marks_unset_keys() {
        let config = AppConfig::new("", "", "svc-1");
        assert!(format!("{config:?}").contains("<unset>"));
    }

    #[test]
    fn test_missing_fields_deserialize_empty() {
        let config: AppConfig =
            serde_json::from_str(r#"{"app_name": "svc-json"}"#).expect("JSON should parse");

        assert_eq!(config.app_name, "svc-json");
        assert_eq!(config.new_relic_key, "");
        assert_eq!(config.new_relic_license_key, "");
    }

    #[test]
    fn test_recognized_keys_are_uppercase_field_names() {
        let fields = ["new_relic_key", "new_relic_license_key", "app_name"];
        for (key, field) in RECOGNIZED_KEYS.iter().zip(fields) {
            assert_eq!(key.to_lowercase(), field);
        }
    }
}
