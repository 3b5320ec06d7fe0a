//! Tunable limits and behaviors.

use serde::Deserialize;

/// Default upper bound on the length of a single definition token.
pub const DEFAULT_MAX_TOKEN_LENGTH: usize = 1000;

/// Settings shared by registration and parsing.
///
/// Missing fields take their defaults when deserialized, so hosts can keep
/// a partial configuration file:
///
/// ```
/// use argspec::Settings;
///
/// let settings: Settings = serde_json::from_str(r#"{ "implicit_properties": false }"#).unwrap();
/// assert!(!settings.implicit_properties);
/// assert_eq!(settings.max_token_length, 1000);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Longest definition token accepted, in characters.
    pub max_token_length: usize,
    /// Whether `-D<key>=<value>` tokens become implicit commands.
    pub implicit_properties: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            max_token_length: DEFAULT_MAX_TOKEN_LENGTH,
            implicit_properties: true,
        }
    }
}

impl Settings {
    /// Sets the longest definition token accepted.
    pub fn max_token_length(mut self, max: usize) -> Self {
        self.max_token_length = max;
        self
    }

    /// Enables or disables implicit `-D<key>=<value>` commands.
    pub fn implicit_properties(mut self, enabled: bool) -> Self {
        self.implicit_properties = enabled;
        self
    }
}
