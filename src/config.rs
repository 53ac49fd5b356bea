//! Resolver configuration.

use serde::Deserialize;

/// Storage key the preference is persisted under.
pub const DEFAULT_STORAGE_KEY: &str = "vectorlab-theme";

/// Class marking the root targets while the dark theme is applied.
pub const DEFAULT_DARK_CLASS: &str = "dark";

/// Names the resolver uses when talking to its ports.
///
/// Both fields default to the values the frontend stylesheet expects, so
/// hosts only deserialize this from their own config when they need to
/// rename something. Missing fields fall back to the defaults.
///
/// ```rust
/// use vectorlab_theme::ResolverConfig;
///
/// let config: ResolverConfig = serde_json::from_str(r#"{ "dark_class": "theme-dark" }"#).unwrap();
/// assert_eq!(config.storage_key, "vectorlab-theme");
/// assert_eq!(config.dark_class, "theme-dark");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    pub storage_key: String,
    pub dark_class: String,
}

impl ResolverConfig {
    /// Replaces the storage key, returning the updated config for chaining.
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    pub fn with_dark_class(mut self, class: impl Into<String>) -> Self {
        self.dark_class = class.into();
        self
    }
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            dark_class: DEFAULT_DARK_CLASS.to_string(),
        }
    }
}
