use std::env;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://api.balldontlie.io/v1";

#[derive(Clone, Debug)]
pub struct Config {
    /// Provider credential. Missing is allowed; requests then fail upstream.
    pub api_key: Option<String>,
    pub base_url: String,
    pub host: String,
    pub port: u16,
    pub cache_ttl: Duration,
    /// Season stat queries start from; one earlier season is the fallback.
    pub current_season: i32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            host: "0.0.0.0".to_string(),
            port: 3001,
            cache_ttl: Duration::from_secs(120),
            current_season: 2025,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            api_key: env::var("BALLDONTLIE_API_KEY")
                .ok()
                .filter(|k| !k.trim().is_empty()),
            base_url: env::var("BALLDONTLIE_BASE_URL").unwrap_or(defaults.base_url),
            host: env::var("HOST").unwrap_or(defaults.host),
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.port),
            cache_ttl: env::var("CACHE_TTL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .map(Duration::from_secs)
                .unwrap_or(defaults.cache_ttl),
            current_season: env::var("CURRENT_SEASON")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.current_season),
        }
    }
}
