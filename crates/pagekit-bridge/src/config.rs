use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Errors that can occur while reading or writing a configuration document.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The document contains invalid TOML or does not match the expected structure.
    #[error("failed to deserialize config: {0}")]
    DeserializeError(#[from] toml::de::Error),
    /// Failed to serialize the configuration to TOML.
    #[error("failed to serialize config: {0}")]
    SerializeError(#[from] toml::ser::Error),
}

/// Fixed on-screen position of notification surfaces, in CSS pixels.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ToastPlacement {
    /// Distance from the top of the viewport.
    pub top: u32,
    /// Distance from the right edge of the viewport.
    pub right: u32,
    /// Stacking order, high enough to float above page content.
    pub z_index: u32,
    /// Minimum width of a surface.
    pub min_width: u32,
}

impl Default for ToastPlacement {
    fn default() -> Self {
        Self {
            top: 20,
            right: 20,
            z_index: 9999,
            min_width: 300,
        }
    }
}

/// Configuration of the notification center.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct NotificationConfig {
    /// Delay before a notification is removed automatically, in milliseconds.
    pub display_duration_ms: u64,
    pub placement: ToastPlacement,
}

impl NotificationConfig {
    pub fn display_duration(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.display_duration_ms)
    }
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            display_duration_ms: 5000,
            placement: ToastPlacement::default(),
        }
    }
}

/// Policy controlling which page credentials accompany a request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CredentialScope {
    /// Never send credentials.
    Omit,
    /// Send credentials only to the origin of the hosting page.
    #[default]
    SameOrigin,
    /// Send credentials to every origin.
    Include,
}

/// Defaults merged into every request issued by the HTTP client.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Headers used when the caller does not supply its own header map.
    pub default_headers: BTreeMap<String, String>,
    pub credentials: CredentialScope,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            default_headers: BTreeMap::from([(
                "Content-Type".to_string(),
                "application/json".to_string(),
            )]),
            credentials: CredentialScope::SameOrigin,
        }
    }
}

/// Messages attached to fields that fail validation.
///
/// `number_below_min` and `number_above_max` may contain a `{min}` or `{max}`
/// placeholder which is replaced by the bound.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ValidationMessages {
    pub required: String,
    pub email: String,
    pub not_a_number: String,
    pub number_below_min: String,
    pub number_above_max: String,
}

impl Default for ValidationMessages {
    fn default() -> Self {
        Self {
            required: "This field is required".to_string(),
            email: "Please enter a valid email address".to_string(),
            not_a_number: "Please enter a valid number".to_string(),
            number_below_min: "Value must be at least {min}".to_string(),
            number_above_max: "Value must be no more than {max}".to_string(),
        }
    }
}

/// Timings of the decorative effects wired when a page is activated.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct EffectsConfig {
    /// Delay added between consecutive fade-in elements, in milliseconds.
    pub fade_in_stagger_ms: u64,
    /// Whether hover lifts are bound to cards.
    pub enable_hover: bool,
    /// Whether tooltips are attached.
    pub enable_tooltips: bool,
}

impl Default for EffectsConfig {
    fn default() -> Self {
        Self {
            fade_in_stagger_ms: 100,
            enable_hover: true,
            enable_tooltips: true,
        }
    }
}

/// Global library configuration, supplied by the embedding application.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub notifications: NotificationConfig,
    pub http: HttpConfig,
    pub validation: ValidationMessages,
    pub effects: EffectsConfig,
}

impl Config {
    /// Parses a configuration from a TOML document. Missing sections and keys
    /// keep their default values.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    /// Serializes the configuration to pretty-printed TOML.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_yields_defaults() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.notifications.display_duration_ms, 5000);
        assert_eq!(
            config.http.default_headers.get("Content-Type").map(String::as_str),
            Some("application/json")
        );
        assert_eq!(config.http.credentials, CredentialScope::SameOrigin);
    }

    #[test]
    fn partial_document_overrides_only_given_keys() {
        let config = Config::from_toml_str(
            r#"
            [notifications]
            display_duration_ms = 2500

            [http]
            credentials = "include"

            [validation]
            required = "Required"
            "#,
        )
        .unwrap();

        assert_eq!(config.notifications.display_duration_ms, 2500);
        assert_eq!(config.notifications.placement, ToastPlacement::default());
        assert_eq!(config.http.credentials, CredentialScope::Include);
        assert_eq!(config.validation.required, "Required");
        assert_eq!(config.validation.email, "Please enter a valid email address");
    }

    #[test]
    fn invalid_document_is_rejected() {
        let result = Config::from_toml_str("[http]\ncredentials = \"sometimes\"");
        assert!(matches!(result, Err(ConfigError::DeserializeError(_))));
    }

    #[test]
    fn serialized_config_reads_back() {
        let mut config = Config::default();
        config.effects.fade_in_stagger_ms = 40;
        let text = config.to_toml_string().unwrap();
        assert_eq!(Config::from_toml_str(&text).unwrap(), config);
    }
}
