//! Per-request configuration
//!
//! Merges the static module settings with per-request parameters into one
//! immutable value that is passed down the fetch and markup chain.

use crate::settings::FlickrSettings;

/// Immutable configuration for a single Flickr request
///
/// Built fresh per request via [`RequestConfig::build`]; never mutated
/// afterwards. Empty keys or ids are not rejected here — the API reports
/// them through its own failure status on fetch.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestConfig {
    pub api_key: String,
    pub base_uri: String,
    pub user_id: String,
    pub photoset_id: Option<String>,
    pub photo_count: u32,
}

impl RequestConfig {
    /// Merge static settings with per-request parameters
    ///
    /// The photo-count override wins when present and non-zero, otherwise
    /// the static default applies.
    pub fn build(
        settings: &FlickrSettings,
        user_id: &str,
        photoset_id: Option<&str>,
        photo_count: Option<u32>,
    ) -> Self {
        Self {
            api_key: settings.api_key.clone(),
            base_uri: settings.api_base_uri.clone(),
            user_id: user_id.to_string(),
            photoset_id: photoset_id.map(|id| id.to_string()),
            photo_count: photo_count
                .filter(|count| *count > 0)
                .unwrap_or(settings.default_photo_count),
        }
    }
}
