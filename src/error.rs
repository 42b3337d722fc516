use thiserror::Error;

/// Upper bound on how much of an unparseable body is kept in a [`DrtvError::ParseError`].
const PAYLOAD_PREVIEW_LEN: usize = 512;

// One variant per failure site, so a failed lookup says where it broke
#[derive(Error, Debug)]
pub enum DrtvError {
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("Request failed [{status}] for {url}")]
    HttpStatus { status: u16, url: String },

    #[error("Parse error in {context}: {error}")]
    ParseError {
        error: serde_json::Error,
        context: String,
        payload: String,
    },

    #[error("URL encoding failed: {0}")]
    UrlEncodingFailed(#[from] serde_urlencoded::ser::Error),

    #[error("Session state encoding failed: {0}")]
    StateEncodingFailed(#[from] serde_json::Error),

    #[error("Failed to parse channel path: {0}")]
    InvalidChannelUrl(String),

    #[error("Failed to get content ID from {0}")]
    MissingContentId(String),

    #[error("Unable to get anonymous token")]
    NoAccountToken,

    #[error("Failed to get channel for {0}")]
    ChannelNotFound(String),

    #[error("Missing custom field {field} on item {item}")]
    MissingField { field: &'static str, item: String },

    #[error("Invalid timestamp {value:?}: {source}")]
    InvalidTimestamp {
        value: String,
        source: chrono::ParseError,
    },
}

impl DrtvError {
    /// Build a [`DrtvError::ParseError`] from a failed decode, keeping a bounded preview of the body.
    pub(crate) fn parse(error: serde_json::Error, context: &str, payload: &[u8]) -> Self {
        let text = String::from_utf8_lossy(payload);
        let payload = match text.char_indices().nth(PAYLOAD_PREVIEW_LEN) {
            Some((cut, _)) => format!("{}...", &text[..cut]),
            None => text.into_owned(),
        };
        DrtvError::ParseError {
            error,
            context: context.to_string(),
            payload,
        }
    }

    /// True when the failure came from the catalog answering with a non-2xx status.
    pub fn is_http_status(&self) -> bool {
        matches!(self, DrtvError::HttpStatus { .. })
    }
}
