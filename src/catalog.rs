use serde::de::DeserializeOwned;
use serde_json::json;
use tracing::{debug, error};

use crate::models::{AccountResult, PageResult, SearchResult, TokenResult, VideosResult};
use crate::state::{Token, TokenType};
use crate::transport::{HttpRequest, HttpTransport};
use crate::utils::{extract_series_id, generate_device_id};
use crate::{DrtvError, API_V1_URL, API_V2_URL};

/// Query flags every catalog content lookup carries.
const CATALOG_LOCALE: [(&str, &str); 3] = [
    ("geoLocation", "dk"),
    ("isDeviceAbroad", "false"),
    ("sub", "Registered"),
];

fn with_query(base: &str, params: &[(&str, &str)]) -> Result<String, DrtvError> {
    Ok(format!("{}?{}", base, serde_urlencoded::to_string(params)?))
}

/// Stateless wrapper over the six catalog endpoints. Owns the transport, never the session.
pub struct CatalogClient<T> {
    transport: T,
}

impl<T: HttpTransport> CatalogClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    async fn fetch_json<R: DeserializeOwned>(
        &self,
        request: HttpRequest,
        context: &str,
    ) -> Result<R, DrtvError> {
        let response = self.transport.execute(request).await?.error_for_status()?;
        response.json(context)
    }

    /// Ask for a fresh anonymous session and keep its `UserAccount` token.
    pub async fn anonymous_token(&self) -> Result<Token, DrtvError> {
        let url = with_query(
            &format!("{}/authorization/anonymous-sso", API_V1_URL),
            &[
                ("device", "phone_android"),
                ("lang", "da"),
                ("supportFallbackToken", "true"),
            ],
        )?;
        let body = json!({
            "deviceId": generate_device_id(),
            "scopes": ["Catalog"],
            "optout": true,
        });
        let request = HttpRequest::post(url, body.to_string())
            .header("Content-Type", "application/json");

        let tokens: TokenResult = self.fetch_json(request, "anonymous token").await?;
        let offered: Vec<TokenType> = tokens.iter().map(|t| t.token_type).collect();

        match tokens
            .into_iter()
            .find(|t| t.token_type == TokenType::UserAccount)
        {
            Some(token) => Ok(token),
            None => {
                error!(?offered, "Unable to get anonymous token from response");
                Err(DrtvError::NoAccountToken)
            }
        }
    }

    pub async fn account(&self, token: &Token) -> Result<AccountResult, DrtvError> {
        let request = HttpRequest::get(format!("{}/account", API_V1_URL))
            .header("X-Authorization", token.bearer());
        self.fetch_json(request, "account").await
    }

    /// `GET /page` for an arbitrary site path, with item details fully expanded.
    pub async fn page(&self, path: &str) -> Result<PageResult, DrtvError> {
        let mut params: Vec<(&str, &str)> = CATALOG_LOCALE.to_vec();
        params.extend([
            ("text_entry_format", "html"),
            ("item_detail_expand", "all"),
            ("path", path),
        ]);
        let url = with_query(&format!("{}/page", API_V1_URL), &params)?;
        self.fetch_json(HttpRequest::get(url), "page").await
    }

    /// `GET /items/{id}`; `expand_all` pulls in nested season/show records.
    pub async fn item<R: DeserializeOwned>(
        &self,
        id: &str,
        expand_all: bool,
    ) -> Result<R, DrtvError> {
        let mut params: Vec<(&str, &str)> = Vec::with_capacity(4);
        if expand_all {
            params.push(("expand", "all"));
        }
        params.extend(CATALOG_LOCALE);
        let url = with_query(&format!("{}/items/{}", API_V1_URL, id), &params)?;
        self.fetch_json(HttpRequest::get(url), "item").await
    }

    /// Playable stream variants of one item at the given resolution.
    pub async fn videos(
        &self,
        item_id: &str,
        resolution: &str,
        token: &Token,
    ) -> Result<VideosResult, DrtvError> {
        let url = with_query(
            &format!("{}/account/items/{}/videos", API_V1_URL, item_id),
            &[
                ("delivery", "stream"),
                ("device", "web_browser"),
                ("resolution", resolution),
                ("sub", "Registered"),
            ],
        )?;
        let request = HttpRequest::get(url).header("X-Authorization", token.bearer());
        self.fetch_json(request, "videos").await
    }

    pub async fn search(&self, term: &str, user_id: &str) -> Result<SearchResult, DrtvError> {
        let url = with_query(
            &format!("{}/search", API_V2_URL),
            &[
                ("group", "false"),
                ("sub", "Registered"),
                ("term", term),
                ("userId", user_id),
            ],
        )?;
        let result: SearchResult = self.fetch_json(HttpRequest::get(url), "search").await?;
        debug!(term, hits = result.series.items.len(), "Search returned");
        Ok(result)
    }

    /// Resolve a channel URL to its series page. A URL of the wrong shape fails before any request.
    pub async fn get_channel_page(&self, channel_url: &str) -> Result<PageResult, DrtvError> {
        let series_id = extract_series_id(channel_url)?;
        let page = self.page(&format!("/serie/{}", series_id)).await?;

        if page.entries.is_empty() {
            error!(channel_url, "Series page has no entries");
            return Err(DrtvError::ChannelNotFound(channel_url.to_string()));
        }
        debug!(
            channel_url,
            episodes = page.entries[0].item.episodes.items.len(),
            "Fetched series page"
        );
        Ok(page)
    }
}
