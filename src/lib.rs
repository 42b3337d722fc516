pub mod auth;
pub use auth::{ensure_valid, ensure_valid_at, Credentials};
mod catalog;
pub use catalog::CatalogClient;
pub mod convert;
mod error;
pub use error::DrtvError;
pub mod models;
mod pager;
pub use pager::{ChannelPager, Pager, SingleBatch, VideoPager};
pub mod platform;
pub use platform::{
    AuthorLink, Channel, HlsSource, PlatformId, RatingLikes, Thumbnail, Video, VideoDetails,
    VideoSourceDescriptor,
};
pub mod settings;
pub mod sources;
pub use sources::{select_sources, AccessService};
mod state;
pub use state::{SessionState, Token, TokenType, REFRESH_MARGIN_HOURS};
mod transport;
pub use transport::{HttpRequest, HttpResponse, HttpTransport, ReqwestTransport};
pub mod utils;

use std::collections::HashMap;

use tracing::{debug, info};

use crate::convert::{
    episode_thumbnails, episode_to_video, published_at, show_to_author_link, show_to_channel,
    site_url,
};
use crate::models::{EpisodeFeed, ShowFeed};

pub const PLATFORM: &str = "DRTV";
pub const MAIN_URL: &str = "https://dr.dk/drtv";
pub const API_V1_URL: &str = "https://production-cdn.dr-massive.com/api";
pub const API_V2_URL: &str = "https://production-cdn.dr-massive.com/api/v2";

/// Resolution asked for when the first offer names none, or there is no offer.
pub const DEFAULT_RESOLUTION: &str = "HD-1080";

/// Host-side plugin configuration. Only the plugin id is read; it scopes every [`PlatformId`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceConfig {
    pub id: String,
}

impl SourceConfig {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

/// User-facing settings the host passes on enable. The adapter exposes none of its own.
pub type SourceSettings = HashMap<String, serde_json::Value>;

/// The DR TV content source: the fixed set of operations a host invokes.
///
/// Each call runs its catalog requests one after another and returns once
/// they are done. Calls that may refresh the session take `&mut self`, so the
/// host can only drive one of them at a time.
///
/// # Logging
///
/// This library uses the `tracing` crate for logging. To see its output,
/// install a subscriber in the host application:
/// ```no_run
/// use tracing::Level;
/// use tracing_subscriber::FmtSubscriber;
///
/// let subscriber = FmtSubscriber::builder()
///     .with_max_level(Level::DEBUG)
///     .finish();
///
/// tracing::subscriber::set_global_default(subscriber)
///     .expect("Failed to set tracing subscriber");
/// ```
pub struct DrtvSource<T> {
    client: CatalogClient<T>,
    config: SourceConfig,
    state: SessionState,
}

impl DrtvSource<ReqwestTransport> {
    /// Build a source on top of the bundled `reqwest` transport.
    pub fn with_default_transport() -> Result<Self, DrtvError> {
        Ok(Self::new(ReqwestTransport::new()?))
    }
}

impl<T: HttpTransport> DrtvSource<T> {
    pub fn new(transport: T) -> Self {
        Self {
            client: CatalogClient::new(transport),
            config: SourceConfig::default(),
            state: SessionState::new(),
        }
    }

    pub fn session(&self) -> &SessionState {
        &self.state
    }

    pub fn config(&self) -> &SourceConfig {
        &self.config
    }

    /// Activate the source, restoring `saved_state` if the host kept one, then validate the session.
    pub async fn enable(
        &mut self,
        config: SourceConfig,
        settings: &SourceSettings,
        saved_state: Option<&str>,
    ) -> Result<(), DrtvError> {
        info!(plugin_id = %config.id, "Enabling DRTV source");
        debug!(?settings, "Host settings (unused)");
        self.config = config;

        if let Some(saved) = saved_state.filter(|s| !s.is_empty()) {
            self.state = SessionState::restore(saved)?;
            debug!(
                has_token = self.state.token.is_some(),
                has_user_id = self.state.user_id.is_some(),
                "Restored saved session state"
            );
        }

        ensure_valid(&self.client, &mut self.state).await?;
        Ok(())
    }

    pub fn disable(&mut self) {}

    pub fn save_state(&self) -> Result<String, DrtvError> {
        self.state.to_json()
    }

    /// Search the catalog for series. The endpoint is not paginated, so this is one batch.
    pub async fn search_channels(&mut self, query: &str) -> Result<ChannelPager, DrtvError> {
        let credentials = ensure_valid(&self.client, &mut self.state).await?;
        let result = self.client.search(query, &credentials.user_id).await?;

        let channels = result
            .series
            .items
            .iter()
            .map(|show| show_to_channel(show, &self.config.id))
            .collect();
        Ok(SingleBatch::new(channels))
    }

    pub fn is_channel_url(&self, url: &str) -> bool {
        utils::is_channel_url(url)
    }

    pub async fn get_channel(&self, url: &str) -> Result<Channel, DrtvError> {
        let page = self.client.get_channel_page(url).await?;
        let season = page
            .entries
            .first()
            .map(|entry| &entry.item)
            .ok_or_else(|| DrtvError::ChannelNotFound(url.to_string()))?;

        Ok(show_to_channel(&season.show, &self.config.id))
    }

    /// Every episode of the series' first page entry, as one batch.
    pub async fn get_channel_contents(&self, url: &str) -> Result<VideoPager, DrtvError> {
        let page = self.client.get_channel_page(url).await?;
        let season = page
            .entries
            .first()
            .map(|entry| &entry.item)
            .ok_or_else(|| DrtvError::ChannelNotFound(url.to_string()))?;

        let author = show_to_author_link(&season.show, &self.config.id)?;
        let videos = season
            .episodes
            .items
            .iter()
            .map(|episode| episode_to_video(episode, &author, &self.config.id))
            .collect::<Result<Vec<_>, _>>()?;

        debug!(url, count = videos.len(), "Listed channel contents");
        Ok(SingleBatch::new(videos))
    }

    pub fn is_content_details_url(&self, url: &str) -> bool {
        utils::is_content_details_url(url)
    }

    /// Resolve a watch URL into a playable description. Any failed step fails the whole lookup.
    pub async fn get_content_details(&mut self, url: &str) -> Result<VideoDetails, DrtvError> {
        let credentials = ensure_valid(&self.client, &mut self.state).await?;
        let content_id = utils::extract_content_id(url)?;

        let episode: EpisodeFeed = self.client.item(content_id, true).await?;
        let show: ShowFeed = self.client.item(&episode.show_id, false).await?;

        let resolution = episode
            .offers
            .first()
            .and_then(|offer| offer.resolution.as_deref())
            .unwrap_or(DEFAULT_RESOLUTION);
        let videos = self
            .client
            .videos(content_id, resolution, &credentials.token)
            .await?;
        let sources = select_sources(&videos);
        debug!(
            content_id,
            resolution,
            variants = videos.len(),
            playable = sources.len(),
            "Selected video sources"
        );

        Ok(VideoDetails {
            id: PlatformId::new(PLATFORM, episode.id.as_str(), &self.config.id),
            name: episode.contextual_title.clone(),
            url: site_url(&episode.watch_path),
            share_url: site_url(&episode.path),
            thumbnails: episode_thumbnails(&episode),
            author: show_to_author_link(&show, &self.config.id)?,
            datetime: published_at(&episode)?,
            description: episode.description.clone(),
            rating: RatingLikes::default(),
            is_live: videos.iter().any(|v| v.is_stream_live),
            video: VideoSourceDescriptor { sources },
        })
    }
}
