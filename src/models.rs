//! Wire models for the Flickr REST API
//!
//! The remote schema is not under this crate's control, so decoding is
//! tolerant: unknown fields are ignored, optional containers default to
//! absent, and the farm id accepts both the number and string spellings
//! the API has been observed to send.

use serde::{Deserialize, Serialize};

/// Farm id of the static-image host, sent by the API as number or string
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Farm {
    Number(u64),
    Text(String),
}

impl std::fmt::Display for Farm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Farm::Number(n) => write!(f, "{}", n),
            Farm::Text(s) => write!(f, "{}", s),
        }
    }
}

/// One photo entry from an API response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhotoRecord {
    pub id: String,
    pub secret: String,
    pub server: String,
    pub farm: Farm,
    #[serde(default)]
    pub title: String,
}

/// Nested photo container (`photoset.photo` or `photos.photo`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PhotoList {
    #[serde(default)]
    pub photo: Vec<PhotoRecord>,
}

/// Top-level response envelope
///
/// When `stat` is `"fail"` the photo containers are absent and `message`
/// carries the API's diagnostic. The all-empty envelope doubles as the
/// transport-failure sentinel returned by the compatibility fetch surface.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiEnvelope {
    #[serde(default)]
    pub stat: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photoset: Option<PhotoList>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photos: Option<PhotoList>,
}

impl ApiEnvelope {
    /// The transport-failure sentinel: no status, no payload
    pub fn empty() -> Self {
        Self::default()
    }

    /// True when the API itself reported a failure
    pub fn is_fail(&self) -> bool {
        self.stat == "fail"
    }

    /// True for the transport-failure sentinel shape
    pub fn is_empty(&self) -> bool {
        self.stat.is_empty() && self.photoset.is_none() && self.photos.is_none()
    }
}
