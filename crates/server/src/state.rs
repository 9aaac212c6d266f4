use std::sync::Arc;

use crate::clients::{StatsTransport, UpstreamClient};
use crate::config::Config;
use crate::error::FetchError;
use crate::resolver::GameResolver;

/// Shared components, built once at startup and handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub upstream: Arc<UpstreamClient>,
    pub games: Arc<GameResolver>,
    pub current_season: i32,
}

impl AppState {
    pub fn new(config: &Config, transport: Arc<dyn StatsTransport>) -> Result<Self, FetchError> {
        let upstream = Arc::new(UpstreamClient::new(
            &config.base_url,
            transport,
            config.cache_ttl,
        )?);
        let games = Arc::new(GameResolver::new(Arc::clone(&upstream)));
        Ok(Self {
            upstream,
            games,
            current_season: config.current_season,
        })
    }
}
