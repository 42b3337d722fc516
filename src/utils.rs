use lazy_static::lazy_static;
use regex::Regex;
use uuid::Uuid;

use crate::DrtvError;

lazy_static! {
    static ref CHANNEL_URL_RE: Regex =
        Regex::new(r"^https?://(?:www\.)?dr\.dk/drtv/serie/").unwrap();
    static ref CONTENT_URL_RE: Regex = Regex::new(r"^https?://dr\.dk/drtv/se/").unwrap();
    static ref SERIES_ID_RE: Regex = Regex::new(r"dr\.dk/drtv/serie/(?P<id>.+)$").unwrap();
}

/// `http(s)://[www.]dr.dk/drtv/serie/...`
pub fn is_channel_url(url: &str) -> bool {
    CHANNEL_URL_RE.is_match(url)
}

/// `http(s)://dr.dk/drtv/se/...`
pub fn is_content_details_url(url: &str) -> bool {
    CONTENT_URL_RE.is_match(url)
}

/// Pull the series slug out of a channel URL, e.g. `matador_52419`.
pub fn extract_series_id(channel_url: &str) -> Result<&str, DrtvError> {
    SERIES_ID_RE
        .captures(channel_url)
        .and_then(|cap| cap.name("id"))
        .map(|m| m.as_str())
        .ok_or_else(|| DrtvError::InvalidChannelUrl(channel_url.to_string()))
}

/// Content id is whatever follows the last `_` in a watch URL.
pub fn extract_content_id(content_url: &str) -> Result<&str, DrtvError> {
    match content_url.rsplit_once('_') {
        Some((_, id)) if !id.is_empty() => Ok(id),
        _ => Err(DrtvError::MissingContentId(content_url.to_string())),
    }
}

/// Fresh client-device identifier for the anonymous session request.
pub fn generate_device_id() -> String {
    Uuid::new_v4().to_string()
}
