use once_cell::sync::Lazy;
use std::{env, time::Duration};

/// Transport tunables, read once from ENV with fallbacks.
///
/// The catalog hosts and query constants are fixed and deliberately absent here.
pub struct Settings {
    pub request_timeout: Duration,
    pub connect_timeout: Duration,
    pub pool_idle_timeout: Duration,
    pub user_agent: String,
}

impl Settings {
    fn from_env() -> Self {
        // optionally load .env
        let _ = dotenvy::dotenv();

        // helper to parse seconds into Duration
        fn parse_secs(var: &str, default_secs: u64) -> Duration {
            env::var(var)
                .ok()
                .and_then(|v| v.parse::<u64>().ok())
                .map(Duration::from_secs)
                .unwrap_or_else(|| Duration::from_secs(default_secs))
        }

        Settings {
            request_timeout: parse_secs("REQUEST_TIMEOUT_SECS", 10),
            connect_timeout: parse_secs("CONNECT_TIMEOUT_SECS", 10),
            pool_idle_timeout: parse_secs("POOL_IDLE_TIMEOUT_SECS", 600),
            user_agent: env::var("DRTV_USER_AGENT").unwrap_or_else(|_| {
                format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
            }),
        }
    }
}

/// Global settings instance
pub static SETTINGS: Lazy<Settings> = Lazy::new(Settings::from_env);
