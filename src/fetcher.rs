//! Flickr photo fetching
//!
//! One HTTP GET per call against the configured REST endpoint, for either
//! an album's photos or a user's public photos. API-level failures
//! (`stat == "fail"`) are logged and passed through; transport-level
//! failures are logged with a remediation hint and collapsed to the empty
//! envelope by the compatibility surface. Nothing past this boundary ever
//! raises.

use std::time::Duration;

use crate::config::RequestConfig;
use crate::models::ApiEnvelope;
use crate::settings::FlickrSettings;

/// Query method for photos in an album (photoset).
pub const METHOD_ALBUM_PHOTOS: &str = "flickr.photosets.getPhotos";

/// Query method for a user's public photos.
pub const METHOD_USER_PHOTOS: &str = "flickr.people.getPublicPhotos";

/// Error type for transport-level fetch failures
#[derive(Debug)]
pub enum FetchError {
    RequestError(String),
    HttpStatus(u16),
    DecodeError(String),
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FetchError::RequestError(msg) => write!(f, "Request error: {}", msg),
            FetchError::HttpStatus(status) => write!(f, "Unexpected HTTP status: {}", status),
            FetchError::DecodeError(msg) => write!(f, "Decode error: {}", msg),
        }
    }
}

impl std::error::Error for FetchError {}

/// Tagged result of one fetch call
///
/// Distinguishes "API said fail" from "transport threw"; the
/// compatibility surface collapses both via [`FetchOutcome::into_envelope`].
#[derive(Debug)]
pub enum FetchOutcome {
    /// API responded with `stat == "ok"`.
    Ok(ApiEnvelope),
    /// API responded with `stat == "fail"`; envelope passed through as-is.
    UpstreamFailure(ApiEnvelope),
    /// The HTTP round-trip or body decoding failed.
    TransportError(FetchError),
}

impl FetchOutcome {
    /// Collapse to the envelope shape callers of the `get_*` surface see:
    /// fail envelopes unchanged, transport errors as the empty envelope.
    pub fn into_envelope(self) -> ApiEnvelope {
        match self {
            FetchOutcome::Ok(envelope) | FetchOutcome::UpstreamFailure(envelope) => envelope,
            FetchOutcome::TransportError(_) => ApiEnvelope::empty(),
        }
    }
}

/// Flickr photo stream service
pub struct FlickrStreamService {
    client: reqwest::Client,
}

impl FlickrStreamService {
    /// Create a service with a client configured from the module settings
    pub fn new(settings: &FlickrSettings) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.request_timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("FlickrStream/0.1.0")
            .build()
            .map_err(|e| FetchError::RequestError(format!("Client build failed: {}", e)))?;
        Ok(Self { client })
    }

    /// Create a service around an injected HTTP client
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// Query parameters for the album (photoset) variant
    pub fn album_query(config: &RequestConfig) -> Vec<(String, String)> {
        vec![
            ("method".to_string(), METHOD_ALBUM_PHOTOS.to_string()),
            ("api_key".to_string(), config.api_key.clone()),
            (
                "photoset_id".to_string(),
                config.photoset_id.clone().unwrap_or_default(),
            ),
            ("user_id".to_string(), config.user_id.clone()),
            ("format".to_string(), "json".to_string()),
            ("nojsoncallback".to_string(), "1".to_string()),
            ("per_page".to_string(), config.photo_count.to_string()),
        ]
    }

    /// Query parameters for the user public-photos variant
    pub fn user_query(config: &RequestConfig) -> Vec<(String, String)> {
        vec![
            ("method".to_string(), METHOD_USER_PHOTOS.to_string()),
            ("api_key".to_string(), config.api_key.clone()),
            ("user_id".to_string(), config.user_id.clone()),
            ("format".to_string(), "json".to_string()),
            ("nojsoncallback".to_string(), "1".to_string()),
            ("per_page".to_string(), config.photo_count.to_string()),
        ]
    }

    /// Fetch photos from an album, with a tagged outcome
    pub async fn fetch_album_photos(&self, config: &RequestConfig) -> FetchOutcome {
        self.fetch(config, Self::album_query(config)).await
    }

    /// Fetch a user's public photos, with a tagged outcome
    pub async fn fetch_user_photos(&self, config: &RequestConfig) -> FetchOutcome {
        self.fetch(config, Self::user_query(config)).await
    }

    /// Fetch photos from an album
    ///
    /// Compatibility surface: fail envelopes are returned as-is (check
    /// [`ApiEnvelope::is_fail`]), transport errors as the empty envelope.
    pub async fn get_album_photos(&self, config: &RequestConfig) -> ApiEnvelope {
        self.fetch_album_photos(config).await.into_envelope()
    }

    /// Fetch a user's public photos
    ///
    /// Compatibility surface: fail envelopes are returned as-is (check
    /// [`ApiEnvelope::is_fail`]), transport errors as the empty envelope.
    pub async fn get_user_photos(&self, config: &RequestConfig) -> ApiEnvelope {
        self.fetch_user_photos(config).await.into_envelope()
    }

    async fn fetch(&self, config: &RequestConfig, query: Vec<(String, String)>) -> FetchOutcome {
        match self.request(config, &query).await {
            Ok(envelope) => {
                if envelope.is_fail() {
                    log::warn!(
                        "Flickr api returned {} (code {}) with message: {}",
                        envelope.stat,
                        envelope.code.unwrap_or_default(),
                        envelope.message.as_deref().unwrap_or("")
                    );
                    FetchOutcome::UpstreamFailure(envelope)
                } else {
                    FetchOutcome::Ok(envelope)
                }
            }
            Err(err) => {
                log::warn!("Flickr request failed: {}", err);
                log::error!(
                    "Please check the Flickr credentials and field inputs. See the logs for more information"
                );
                FetchOutcome::TransportError(err)
            }
        }
    }

    async fn request(
        &self,
        config: &RequestConfig,
        query: &[(String, String)],
    ) -> Result<ApiEnvelope, FetchError> {
        let response = self
            .client
            .get(&config.base_uri)
            .query(query)
            .send()
            .await
            .map_err(|e| FetchError::RequestError(e.to_string()))?;

        if !response.status().is_success() {
            return Err(FetchError::HttpStatus(response.status().as_u16()));
        }

        response
            .json::<ApiEnvelope>()
            .await
            .map_err(|e| FetchError::DecodeError(e.to_string()))
    }
}
