//! Game lookups shared across handlers.
//!
//! Games are registered when the daily schedule is listed and fetched on
//! demand otherwise. Entries live as long as the process.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use courtside_core::models::GameRecord;

use crate::clients::{Endpoint, UpstreamClient};
use crate::error::FetchError;

pub struct GameResolver {
    upstream: Arc<UpstreamClient>,
    games: RwLock<HashMap<String, Arc<GameRecord>>>,
}

impl GameResolver {
    pub fn new(upstream: Arc<UpstreamClient>) -> Self {
        Self {
            upstream,
            games: RwLock::new(HashMap::new()),
        }
    }

    pub fn register(&self, record: GameRecord) -> Arc<GameRecord> {
        let record = Arc::new(record);
        self.games
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(record.id.to_string(), Arc::clone(&record));
        record
    }

    pub fn cached(&self, game_id: &str) -> Option<Arc<GameRecord>> {
        self.games
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(game_id)
            .cloned()
    }

    /// The game with `game_id`, fetching the single-game endpoint on a miss.
    pub async fn resolve(&self, game_id: &str) -> Result<Arc<GameRecord>, FetchError> {
        if let Some(game) = self.cached(game_id) {
            tracing::debug!("Resolved game {game_id} from memory");
            return Ok(game);
        }

        let record: GameRecord = self
            .upstream
            .fetch_one(&Endpoint::game(game_id), "Game")
            .await?;
        let game = Arc::new(record);
        // Keyed by the requested id so later lookups with the same string hit.
        self.games
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(game_id.to_string(), Arc::clone(&game));
        Ok(game)
    }

    pub fn len(&self) -> usize {
        self.games.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
