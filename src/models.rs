use std::collections::HashMap;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::state::Token;

// Common catalog types
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Images {
    pub wallpaper: Option<String>,
    pub poster: Option<String>,
    pub tile: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Offer {
    pub delivery_type: Option<String>,
    pub resolution: Option<String>,
    pub availability: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

/// Reads an explicit `null` as the type's default.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Free-form `customFields` object. Values are usually strings but may nest.
pub type CustomFields = HashMap<String, Value>;

fn custom_str<'a>(fields: &'a CustomFields, key: &str) -> Option<&'a str> {
    fields.get(key).and_then(Value::as_str)
}

// Feed types
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ShowFeed {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub path: String,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub short_description: String,
    pub images: Images,
    pub custom_fields: CustomFields,
    pub available_season_count: Option<u32>,
}

impl ShowFeed {
    /// Slug the website uses for the series, e.g. `matador_52419`.
    pub fn path_id_segment(&self) -> Option<&str> {
        custom_str(&self.custom_fields, "PathIdSegment")
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EpisodeFeed {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub path: String,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub contextual_title: String,
    pub episode_name: Option<String>,
    pub episode_number: Option<u32>,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    pub images: Images,
    pub offers: Vec<Offer>,
    #[serde(deserialize_with = "null_as_default")]
    pub show_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub season_id: String,
    /// Seconds.
    pub duration: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub watch_path: String,
    pub custom_fields: CustomFields,
}

impl EpisodeFeed {
    /// ISO-8601 instant from which the episode may be streamed.
    pub fn available_from(&self) -> Option<&str> {
        custom_str(&self.custom_fields, "AvailableFrom")
    }
}

// Detail types
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct EpisodeList {
    pub id: Option<String>,
    pub items: Vec<EpisodeFeed>,
    pub size: Option<u32>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SeasonDetail {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    pub season_number: Option<u32>,
    pub show: ShowFeed,
    pub episodes: EpisodeList,
}

/// One row of `/account/items/{id}/videos`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct VideoResult {
    pub access_service: String,
    pub format: String,
    pub url: String,
    pub is_stream_live: bool,
    pub resolution: Option<String>,
    pub language: Option<String>,
    pub delivery_type: Option<String>,
}

// Top level response types
// /api/authorization/anonymous-sso
pub type TokenResult = Vec<Token>;

// /api/account
#[derive(Debug, Clone, Deserialize)]
pub struct AccountResult {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SeriesResults {
    pub items: Vec<ShowFeed>,
}

// /api/v2/search
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SearchResult {
    pub term: Option<String>,
    pub total: Option<u32>,
    pub series: SeriesResults,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PageEntry {
    #[serde(default)]
    pub id: Option<String>,
    pub item: SeasonDetail,
}

// /api/page
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PageResult {
    pub id: Option<String>,
    pub path: Option<String>,
    pub title: Option<String>,
    pub entries: Vec<PageEntry>,
}

// /api/account/items/:itemId/videos
pub type VideosResult = Vec<VideoResult>;
