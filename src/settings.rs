//! Module-wide Flickr settings
//!
//! Settings are loaded once at startup (from a TOML document or constructed
//! directly) and stay read-only afterwards. Reloading means loading a fresh
//! value and swapping it at the call site.

use serde::Deserialize;

/// Flickr REST API services endpoint.
pub const FLICKR_API_URL: &str = "https://api.flickr.com/services/rest/";

fn default_photo_count() -> u32 {
    10
}

fn default_api_base_uri() -> String {
    FLICKR_API_URL.to_string()
}

fn default_request_timeout_secs() -> u64 {
    30
}

/// Static module settings shared by all requests
///
/// Missing keys fall back to defaults; an absent `api_key` is not rejected
/// here, the API itself reports invalid credentials on the first fetch.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FlickrSettings {
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_photo_count")]
    pub default_photo_count: u32,
    #[serde(default = "default_api_base_uri")]
    pub api_base_uri: String,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl Default for FlickrSettings {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            default_photo_count: default_photo_count(),
            api_base_uri: default_api_base_uri(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

/// Error type for settings loading
#[derive(Debug)]
pub enum SettingsError {
    IoError(std::io::Error),
    ParseError(String),
}

impl std::fmt::Display for SettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingsError::IoError(e) => write!(f, "IO error: {}", e),
            SettingsError::ParseError(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for SettingsError {}

impl From<std::io::Error> for SettingsError {
    fn from(err: std::io::Error) -> Self {
        SettingsError::IoError(err)
    }
}

impl FlickrSettings {
    /// Parse settings from a TOML document
    pub fn from_toml_str(document: &str) -> Result<Self, SettingsError> {
        toml::from_str(document).map_err(|e| SettingsError::ParseError(e.to_string()))
    }

    /// Load settings from a TOML file
    pub fn load(path: &str) -> Result<Self, SettingsError> {
        let document = std::fs::read_to_string(path)?;
        Self::from_toml_str(&document)
    }
}
