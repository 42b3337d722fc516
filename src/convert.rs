use chrono::{DateTime, NaiveDateTime};

use crate::models::{EpisodeFeed, ShowFeed};
use crate::platform::{AuthorLink, Channel, PlatformId, Thumbnail, Video};
use crate::{DrtvError, MAIN_URL, PLATFORM};

/// Quality hint attached to the single tile thumbnail of every item.
pub const THUMBNAIL_QUALITY: u32 = 100;

pub fn site_url(path: &str) -> String {
    format!("{}{}", MAIN_URL, path)
}

pub fn show_to_channel(show: &ShowFeed, plugin_id: &str) -> Channel {
    Channel {
        id: PlatformId::new(PLATFORM, show.id.as_str(), plugin_id),
        name: show.title.clone(),
        url: site_url(&show.path),
        banner: show.images.wallpaper.clone(),
        thumbnail: show.images.tile.clone(),
        description: show.short_description.clone(),
    }
}

/// Author links are keyed by the show's path slug rather than its numeric id.
pub fn show_to_author_link(show: &ShowFeed, plugin_id: &str) -> Result<AuthorLink, DrtvError> {
    let slug = show.path_id_segment().ok_or_else(|| DrtvError::MissingField {
        field: "PathIdSegment",
        item: show.id.clone(),
    })?;

    Ok(AuthorLink {
        id: PlatformId::new(PLATFORM, slug, plugin_id),
        name: show.title.clone(),
        url: site_url(&show.path),
        thumbnail: show.images.tile.clone(),
    })
}

/// The episode tile as its one thumbnail. An episode without a tile gets none.
pub fn episode_thumbnails(episode: &EpisodeFeed) -> Vec<Thumbnail> {
    episode
        .images
        .tile
        .iter()
        .map(|url| Thumbnail {
            url: url.clone(),
            quality: THUMBNAIL_QUALITY,
        })
        .collect()
}

/// `AvailableFrom` as whole Unix seconds (floored).
pub fn published_at(episode: &EpisodeFeed) -> Result<i64, DrtvError> {
    let raw = episode.available_from().ok_or_else(|| DrtvError::MissingField {
        field: "AvailableFrom",
        item: episode.id.clone(),
    })?;
    parse_timestamp(raw)
}

/// ISO-8601 to Unix seconds. An instant without an offset is read as UTC.
pub fn parse_timestamp(raw: &str) -> Result<i64, DrtvError> {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(dt) => Ok(dt.timestamp()),
        Err(source) => NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
            .map(|naive| naive.and_utc().timestamp())
            .map_err(|_| DrtvError::InvalidTimestamp {
                value: raw.to_string(),
                source,
            }),
    }
}

pub fn episode_to_video(
    episode: &EpisodeFeed,
    author: &AuthorLink,
    plugin_id: &str,
) -> Result<Video, DrtvError> {
    Ok(Video {
        id: PlatformId::new(PLATFORM, episode.id.as_str(), plugin_id),
        name: episode.contextual_title.clone(),
        thumbnails: episode_thumbnails(episode),
        author: author.clone(),
        datetime: published_at(episode)?,
        url: site_url(&episode.watch_path),
        share_url: site_url(&episode.path),
        duration: episode.duration,
        is_live: false,
    })
}
