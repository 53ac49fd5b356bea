//! The two-valued appearance setting.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The user's preferred color mode.
///
/// Encoded as the lowercase strings `"light"` and `"dark"` both in storage
/// and through serde. Decoding is case-sensitive: `"Dark"` is not a mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
}

impl ThemeMode {
    /// Returns the storage encoding of this mode.
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    /// Decodes a stored value, returning `None` for anything that is not
    /// exactly one of the two encodings.
    ///
    /// # Example
    ///
    /// ```rust
    /// use vectorlab_theme::ThemeMode;
    ///
    /// assert_eq!(ThemeMode::decode("dark"), Some(ThemeMode::Dark));
    /// assert_eq!(ThemeMode::decode("Dark"), None);
    /// assert_eq!(ThemeMode::decode("purple"), None);
    /// ```
    pub fn decode(value: &str) -> Option<Self> {
        match value {
            "light" => Some(ThemeMode::Light),
            "dark" => Some(ThemeMode::Dark),
            _ => None,
        }
    }

    /// Returns the opposite mode.
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == ThemeMode::Dark
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing a string that is not a theme mode.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme mode '{0}', expected 'light' or 'dark'")]
pub struct ParseThemeModeError(String);

impl FromStr for ThemeMode {
    type Err = ParseThemeModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ThemeMode::decode(s).ok_or_else(|| ParseThemeModeError(s.to_string()))
    }
}
