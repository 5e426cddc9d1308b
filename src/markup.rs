//! Render-list building
//!
//! Turns a decoded API envelope into a themed image list for the render
//! pipeline. URL normalization ("cache external image") and named image
//! styles are external collaborators injected at construction; the cache
//! annotation on the list is pass-through metadata, never interpreted here.

use serde::Serialize;

use crate::models::{ApiEnvelope, PhotoRecord};

/// Theme name of one rendered image.
pub const IMAGE_THEME: &str = "flickr_image";

/// Theme name of the wrapping list.
pub const LIST_THEME: &str = "item_list";

/// Style name selecting the raw generated URL.
pub const DEFAULT_IMAGE_STYLE: &str = "default";

/// Which API variant produced the envelope
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiType {
    /// Read `photoset.photo` from the envelope.
    Album,
    /// Read `photos.photo` from the envelope.
    User,
}

/// Named image-derivative selection for rendered photos
#[derive(Debug, Clone, PartialEq)]
pub struct ImageStyleConfig {
    pub style_name: String,
}

impl ImageStyleConfig {
    pub fn new(style_name: impl Into<String>) -> Self {
        Self {
            style_name: style_name.into(),
        }
    }
}

impl Default for ImageStyleConfig {
    fn default() -> Self {
        Self::new(DEFAULT_IMAGE_STYLE)
    }
}

/// Maps a remote image URL to a locally-resolvable one
///
/// Collaborator seam for the external image-cache step.
pub trait UriNormalizer {
    fn normalize(&self, remote_uri: &str) -> String;
}

/// Pass-through normalizer: the remote URL is used directly.
pub struct IdentityNormalizer;

impl UriNormalizer for IdentityNormalizer {
    fn normalize(&self, remote_uri: &str) -> String {
        remote_uri.to_string()
    }
}

/// Resolves a named image style to a derivative URL
///
/// Collaborator seam for the external image-derivative service.
pub trait ImageStyleRegistry {
    fn build_url(&self, style_name: &str, source_uri: &str) -> String;
}

/// Registry with no styles: every lookup degrades to the source URL.
pub struct NoStyles;

impl ImageStyleRegistry for NoStyles {
    fn build_url(&self, _style_name: &str, source_uri: &str) -> String {
        source_uri.to_string()
    }
}

/// One rendered image entry, in API response order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderItem {
    pub theme: &'static str,
    pub uri: String,
    pub alt: String,
}

/// Cache lifetime annotation for the wrapping list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CacheLifetime {
    Permanent,
}

/// Pass-through cache policy consumed by the render pipeline
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CacheMetadata {
    pub contexts: Vec<String>,
    pub tags: Vec<String>,
    pub max_age: CacheLifetime,
}

impl CacheMetadata {
    /// Session-scoped, permanent absent invalidating tags.
    pub fn session_permanent() -> Self {
        Self {
            contexts: vec!["session".to_string()],
            tags: Vec::new(),
            max_age: CacheLifetime::Permanent,
        }
    }
}

/// The full image-list render descriptor
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderList {
    pub theme: &'static str,
    pub list_type: &'static str,
    pub class: String,
    pub items: Vec<RenderItem>,
    pub cache: CacheMetadata,
}

/// Canonical static-image URL for one photo record.
pub fn generate_photo_uri(photo: &PhotoRecord) -> String {
    format!(
        "https://farm{}.staticflickr.com/{}/{}_{}_b.jpg",
        photo.farm, photo.server, photo.id, photo.secret
    )
}

/// Builds themed image lists from decoded envelopes
pub struct MarkupBuilder {
    normalizer: Box<dyn UriNormalizer + Send + Sync>,
    styles: Box<dyn ImageStyleRegistry + Send + Sync>,
}

impl MarkupBuilder {
    pub fn new(
        normalizer: Box<dyn UriNormalizer + Send + Sync>,
        styles: Box<dyn ImageStyleRegistry + Send + Sync>,
    ) -> Self {
        Self { normalizer, styles }
    }

    /// Builder with pass-through collaborators.
    pub fn passthrough() -> Self {
        Self::new(Box::new(IdentityNormalizer), Box::new(NoStyles))
    }

    /// Build the image list for one envelope
    ///
    /// An envelope lacking the expected photo path (for instance the empty
    /// transport-failure shape) yields an empty item list. Alt text is the
    /// record title, unescaped — sanitization belongs to the renderer.
    pub fn build(
        &self,
        envelope: &ApiEnvelope,
        api_type: ApiType,
        style: &ImageStyleConfig,
    ) -> RenderList {
        let records: &[PhotoRecord] = match api_type {
            ApiType::Album => envelope
                .photoset
                .as_ref()
                .map(|list| list.photo.as_slice())
                .unwrap_or(&[]),
            ApiType::User => envelope
                .photos
                .as_ref()
                .map(|list| list.photo.as_slice())
                .unwrap_or(&[]),
        };

        let items = records
            .iter()
            .map(|record| {
                let generated = self.normalizer.normalize(&generate_photo_uri(record));
                let uri = if style.style_name == DEFAULT_IMAGE_STYLE {
                    generated
                } else {
                    self.styles.build_url(&style.style_name, &generated)
                };
                RenderItem {
                    theme: IMAGE_THEME,
                    uri,
                    alt: record.title.clone(),
                }
            })
            .collect();

        RenderList {
            theme: LIST_THEME,
            list_type: "ul",
            class: "flickr-image-list".to_string(),
            items,
            cache: CacheMetadata::session_permanent(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Farm, PhotoList};

    fn record(id: &str, secret: &str, title: &str) -> PhotoRecord {
        PhotoRecord {
            id: id.to_string(),
            secret: secret.to_string(),
            server: "2".to_string(),
            farm: Farm::Number(1),
            title: title.to_string(),
        }
    }

    fn album_envelope(photos: Vec<PhotoRecord>) -> ApiEnvelope {
        ApiEnvelope {
            stat: "ok".to_string(),
            photoset: Some(PhotoList { photo: photos }),
            ..ApiEnvelope::default()
        }
    }

    #[test]
    fn test_generate_photo_uri() {
        assert_eq!(
            generate_photo_uri(&record("3", "abc", "")),
            "https://farm1.staticflickr.com/2/3_abc_b.jpg"
        );
    }

    #[test]
    fn test_build_album_preserves_order_and_theme() {
        let envelope = album_envelope(vec![
            record("1", "aa", "First"),
            record("2", "bb", "Second"),
            record("3", "cc", "Third"),
        ]);
        let builder = MarkupBuilder::passthrough();

        let list = builder.build(&envelope, ApiType::Album, &ImageStyleConfig::default());

        assert_eq!(list.theme, "item_list");
        assert_eq!(list.list_type, "ul");
        assert_eq!(list.class, "flickr-image-list");
        assert_eq!(list.items.len(), 3);
        for item in &list.items {
            assert_eq!(item.theme, "flickr_image");
        }
        assert_eq!(list.items[0].alt, "First");
        assert_eq!(list.items[1].alt, "Second");
        assert_eq!(list.items[2].alt, "Third");
        assert_eq!(
            list.items[1].uri,
            "https://farm1.staticflickr.com/2/2_bb_b.jpg"
        );
    }

    #[test]
    fn test_build_user_reads_photos_path() {
        let envelope = ApiEnvelope {
            stat: "ok".to_string(),
            photos: Some(PhotoList {
                photo: vec![record("9", "zz", "Pier")],
            }),
            ..ApiEnvelope::default()
        };
        let builder = MarkupBuilder::passthrough();

        let list = builder.build(&envelope, ApiType::User, &ImageStyleConfig::default());
        assert_eq!(list.items.len(), 1);
        assert_eq!(list.items[0].alt, "Pier");

        // The same envelope has no album path.
        let list = builder.build(&envelope, ApiType::Album, &ImageStyleConfig::default());
        assert!(list.items.is_empty());
    }

    #[test]
    fn test_build_on_empty_envelope_yields_empty_list() {
        let builder = MarkupBuilder::passthrough();
        let list = builder.build(
            &ApiEnvelope::empty(),
            ApiType::Album,
            &ImageStyleConfig::default(),
        );
        assert!(list.items.is_empty());
        assert_eq!(list.cache, CacheMetadata::session_permanent());
    }

    struct PrefixNormalizer;

    impl UriNormalizer for PrefixNormalizer {
        fn normalize(&self, remote_uri: &str) -> String {
            format!("public://externals/{}", remote_uri.rsplit('/').next().unwrap())
        }
    }

    struct PathStyles;

    impl ImageStyleRegistry for PathStyles {
        fn build_url(&self, style_name: &str, source_uri: &str) -> String {
            format!("{}?style={}", source_uri, style_name)
        }
    }

    #[test]
    fn test_normalizer_is_applied_before_styles() {
        let builder = MarkupBuilder::new(Box::new(PrefixNormalizer), Box::new(PathStyles));
        let envelope = album_envelope(vec![record("3", "abc", "Sunset")]);

        let list = builder.build(&envelope, ApiType::Album, &ImageStyleConfig::new("thumbnail"));
        assert_eq!(
            list.items[0].uri,
            "public://externals/3_abc_b.jpg?style=thumbnail"
        );
    }

    #[test]
    fn test_default_style_skips_the_registry() {
        let builder = MarkupBuilder::new(Box::new(IdentityNormalizer), Box::new(PathStyles));
        let envelope = album_envelope(vec![record("3", "abc", "Sunset")]);

        let list = builder.build(&envelope, ApiType::Album, &ImageStyleConfig::default());
        assert_eq!(
            list.items[0].uri,
            "https://farm1.staticflickr.com/2/3_abc_b.jpg"
        );
    }
}
