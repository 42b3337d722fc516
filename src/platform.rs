//! Host-defined result shapes. The host marshals these as-is, so they stay plain data.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformId {
    pub platform: String,
    pub value: String,
    pub plugin_id: String,
}

impl PlatformId {
    pub fn new(platform: &str, value: impl Into<String>, plugin_id: &str) -> Self {
        Self {
            platform: platform.to_string(),
            value: value.into(),
            plugin_id: plugin_id.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Thumbnail {
    pub url: String,
    pub quality: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthorLink {
    pub id: PlatformId,
    pub name: String,
    pub url: String,
    pub thumbnail: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Channel {
    pub id: PlatformId,
    pub name: String,
    pub url: String,
    pub banner: Option<String>,
    pub thumbnail: Option<String>,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    pub id: PlatformId,
    pub name: String,
    pub thumbnails: Vec<Thumbnail>,
    pub author: AuthorLink,
    /// Unix seconds.
    pub datetime: i64,
    pub url: String,
    pub share_url: String,
    /// Seconds.
    pub duration: u64,
    pub is_live: bool,
}

/// A playable HLS stream. `priority == false` keeps accessibility tracks out of the default pick.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HlsSource {
    pub name: String,
    pub url: String,
    pub priority: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct VideoSourceDescriptor {
    pub sources: Vec<HlsSource>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RatingLikes {
    pub likes: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoDetails {
    pub id: PlatformId,
    pub name: String,
    pub url: String,
    pub share_url: String,
    pub thumbnails: Vec<Thumbnail>,
    pub author: AuthorLink,
    /// Unix seconds.
    pub datetime: i64,
    pub description: String,
    pub rating: RatingLikes,
    pub is_live: bool,
    pub video: VideoSourceDescriptor,
}
