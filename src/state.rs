use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::DrtvError;

/// How many hours before its real expiry a token is treated as stale.
pub const REFRESH_MARGIN_HOURS: i64 = 3;

/// Discriminator the anonymous-sso endpoint puts on each token it hands out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TokenType {
    UserAccount,
    UserProfile,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Token {
    pub value: String,
    pub expiration_date: DateTime<Utc>,
    #[serde(default)]
    pub refreshable: bool,
    #[serde(rename = "type")]
    pub token_type: TokenType,
}

impl Token {
    /// A token is refreshed once `now` comes within [`REFRESH_MARGIN_HOURS`] of its expiry (inclusive).
    pub fn needs_refresh(&self, now: DateTime<Utc>) -> bool {
        self.expiration_date <= now + Duration::hours(REFRESH_MARGIN_HOURS)
    }

    pub(crate) fn bearer(&self) -> String {
        format!("Bearer {}", self.value)
    }
}

/// Everything the adapter remembers between host activations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionState {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<Token>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse the opaque string the host handed back from a previous `save_state`.
    pub fn restore(saved: &str) -> Result<Self, DrtvError> {
        serde_json::from_str(saved).map_err(|e| DrtvError::parse(e, "saved state", saved.as_bytes()))
    }

    pub fn to_json(&self) -> Result<String, DrtvError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Install a new token. The user id belonged to the old one, so it goes too.
    pub fn replace_token(&mut self, token: Token) {
        self.token = Some(token);
        self.user_id = None;
    }
}
