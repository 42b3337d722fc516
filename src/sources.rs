use tracing::warn;

use crate::models::VideoResult;
use crate::platform::HlsSource;

/// The only container format the adapter can hand to the host player.
pub const HLS_FORMAT: &str = "video/hls";

/// Audience accommodation a stream variant is tagged with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessService {
    StandardVideo,
    SpokenSubtitles,
    SignLanguage,
    VisuallyInterpreted,
    Other(String),
}

impl AccessService {
    pub fn from_api(value: &str) -> Self {
        match value {
            "StandardVideo" => AccessService::StandardVideo,
            "SpokenSubtitles" => AccessService::SpokenSubtitles,
            "SignLanguage" => AccessService::SignLanguage,
            "VisuallyInterpreted" => AccessService::VisuallyInterpreted,
            other => AccessService::Other(other.to_string()),
        }
    }

    /// Accessibility tracks never win the default pick.
    pub fn is_preferred(&self) -> bool {
        !matches!(
            self,
            AccessService::SpokenSubtitles
                | AccessService::SignLanguage
                | AccessService::VisuallyInterpreted
        )
    }
}

/// Turn the variants of one episode into playable sources, in the order the catalog listed them.
pub fn select_sources(videos: &[VideoResult]) -> Vec<HlsSource> {
    videos
        .iter()
        .filter_map(|video| match video.format.as_str() {
            HLS_FORMAT => Some(HlsSource {
                name: video.access_service.clone(),
                url: video.url.clone(),
                priority: AccessService::from_api(&video.access_service).is_preferred(),
            }),
            other => {
                warn!(
                    format = other,
                    access_service = %video.access_service,
                    "Found an unsupported video source, skipping it"
                );
                None
            }
        })
        .collect()
}
