//! # Flickr Stream
//!
//! A small content-rendering integration library for Flickr photo streams.
//!
//! This crate fetches an album's or a user's public photos from the Flickr
//! REST API and turns the result into a themed image render list:
//! - Static module settings with TOML loading
//! - Immutable per-request configuration
//! - One-GET-per-call photo fetching with pass-through failure envelopes
//! - Render-list building with pluggable URL normalization and image styles
//!
//! ## Failure policy
//!
//! The fetch boundary never raises. An API-level failure (`stat == "fail"`)
//! is logged and handed back as-is; a transport failure is logged with a
//! remediation hint and collapsed to an empty envelope. Callers that need
//! to tell the two apart use the tagged [`FetchOutcome`] surface.
//!
//! ## Example Usage
//!
//! ```rust,ignore
//! use flickr_stream::{
//!     ApiType, FlickrSettings, FlickrStreamService, ImageStyleConfig,
//!     MarkupBuilder, RequestConfig,
//! };
//!
//! let settings = FlickrSettings::load("flickr.toml")?;
//! let service = FlickrStreamService::new(&settings)?;
//! let config = RequestConfig::build(&settings, "66@N00", Some("728"), None);
//!
//! let envelope = service.get_album_photos(&config).await;
//! let list = MarkupBuilder::passthrough().build(
//!     &envelope,
//!     ApiType::Album,
//!     &ImageStyleConfig::default(),
//! );
//! ```

pub mod config;
pub mod fetcher;
pub mod markup;
pub mod models;
pub mod settings;

pub use config::RequestConfig;
pub use fetcher::{
    FetchError, FetchOutcome, FlickrStreamService, METHOD_ALBUM_PHOTOS, METHOD_USER_PHOTOS,
};
pub use markup::{
    generate_photo_uri, ApiType, CacheLifetime, CacheMetadata, IdentityNormalizer,
    ImageStyleConfig, ImageStyleRegistry, MarkupBuilder, NoStyles, RenderItem, RenderList,
    UriNormalizer, DEFAULT_IMAGE_STYLE, IMAGE_THEME, LIST_THEME,
};
pub use models::{ApiEnvelope, Farm, PhotoList, PhotoRecord};
pub use settings::{FlickrSettings, SettingsError, FLICKR_API_URL};
