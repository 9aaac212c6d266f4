use chrono::NaiveDate;

use courtside_core::models::{Game, GameRecord, Player, PlayerRecord};
use courtside_core::views::{away_team_name, game_view, home_team_name, roster_player};

use crate::clients::{Endpoint, UpstreamClient};
use crate::error::FetchError;
use crate::state::AppState;

/// Games scheduled on `date`. Each one is registered with the resolver so
/// later roster and stats lookups skip the single-game fetch.
pub async fn games_on(state: &AppState, date: NaiveDate) -> Result<Vec<Game>, FetchError> {
    let records: Vec<GameRecord> = state
        .upstream
        .fetch_list(&Endpoint::games_on(date))
        .await?;

    if let Some(first) = records.first() {
        tracing::debug!("Sample game data: {first:?}");
    }

    let games: Vec<Game> = records
        .into_iter()
        .map(|record| {
            let game = game_view(&record);
            state.games.register(record);
            game
        })
        .collect();

    tracing::info!("Found {} games for {}", games.len(), date.format("%Y-%m-%d"));
    Ok(games)
}

/// Active rosters for both teams of a game, home first. An empty list means
/// the rosters are not published yet.
pub async fn game_players(state: &AppState, game_id: &str) -> Result<Vec<Player>, FetchError> {
    let game = state.games.resolve(game_id).await?;

    let home_name = home_team_name(&game);
    let away_name = away_team_name(&game);
    let (mut players, away) = tokio::try_join!(
        roster(&state.upstream, game.home_team_id(), &home_name),
        roster(&state.upstream, game.away_team_id(), &away_name),
    )?;
    players.extend(away);

    tracing::info!("Returning {} players for game {}", players.len(), game_id);
    Ok(players)
}

/// One team's active roster. A side without a team id is skipped.
async fn roster(
    upstream: &UpstreamClient,
    team_id: Option<i64>,
    team_name: &str,
) -> Result<Vec<Player>, FetchError> {
    let Some(team_id) = team_id else {
        return Ok(Vec::new());
    };

    let records: Vec<PlayerRecord> = upstream
        .fetch_list(&Endpoint::active_roster(team_id))
        .await?;
    Ok(records
        .iter()
        .map(|p| roster_player(p, team_name, team_id))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::testing_utils::ScriptedTransport;
    use serde_json::json;
    use std::sync::Arc;

    fn state(transport: Arc<ScriptedTransport>) -> AppState {
        let config = Config {
            base_url: "http://upstream.test/v1".into(),
            ..Config::default()
        };
        AppState::new(&config, transport).unwrap()
    }

    fn schedule() -> serde_json::Value {
        json!({
            "data": [{
                "id": 100,
                "date": "2025-01-15",
                "status": "Final",
                "home_team": { "id": 1, "full_name": "Atlanta Hawks", "name": "Hawks" },
                "visitor_team": { "id": 2, "full_name": "Boston Celtics", "name": "Celtics" },
            }]
        })
    }

    #[tokio::test]
    async fn test_games_are_registered_for_later_lookups() {
        let transport = Arc::new(ScriptedTransport::new());
        transport.respond("/v1/games?dates[]=2025-01-15", schedule());
        transport.respond(
            "/v1/players/active?team_ids[]=1&per_page=25",
            json!({ "data": [{ "id": 7, "first_name": "Trae", "last_name": "Young", "position": "G" }] }),
        );
        transport.respond(
            "/v1/players/active?team_ids[]=2&per_page=25",
            json!({ "data": [{ "id": 8, "first_name": "Jayson", "last_name": "Tatum", "position": "F" }] }),
        );
        let state = state(Arc::clone(&transport));

        let date = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
        let games = games_on(&state, date).await.unwrap();
        assert_eq!(games.len(), 1);
        assert_eq!(games[0].id, "100");
        assert_eq!(games[0].start_time.as_deref(), Some("2025-01-15T12:00:00"));

        let players = game_players(&state, "100").await.unwrap();
        assert_eq!(transport.call_count("/v1/games/100"), 0);
        assert_eq!(players.len(), 2);
        assert_eq!(players[0].name, "Trae Young");
        assert_eq!(players[0].team, "Atlanta Hawks");
        assert_eq!(players[0].team_id, 1);
        assert_eq!(players[1].name, "Jayson Tatum");
        assert_eq!(players[1].team, "Boston Celtics");
    }

    #[tokio::test]
    async fn test_missing_side_is_skipped() {
        let transport = Arc::new(ScriptedTransport::new());
        transport.respond(
            "/v1/games/5",
            json!({ "data": { "id": 5, "home_team": { "id": 3, "name": "Nets" } } }),
        );
        transport.respond(
            "/v1/players/active?team_ids[]=3&per_page=25",
            json!({ "data": [{ "id": 9, "first_name": "Cam", "last_name": "Thomas" }] }),
        );
        let state = state(Arc::clone(&transport));

        let players = game_players(&state, "5").await.unwrap();
        assert_eq!(players.len(), 1);
        assert_eq!(players[0].team, "Nets");
        assert_eq!(players[0].position, "N/A");
        assert_eq!(transport.total_calls(), 2);
    }

    #[tokio::test]
    async fn test_unpublished_rosters_are_empty() {
        let transport = Arc::new(ScriptedTransport::new());
        transport.respond("/v1/games?dates[]=2025-01-15", schedule());
        transport.respond("/v1/players/active?team_ids[]=1&per_page=25", json!({ "data": [] }));
        transport.respond("/v1/players/active?team_ids[]=2&per_page=25", json!({ "data": [] }));
        let state = state(transport);

        let date = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
        games_on(&state, date).await.unwrap();
        assert!(game_players(&state, "100").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_roster_failure_propagates() {
        let transport = Arc::new(ScriptedTransport::new());
        transport.respond("/v1/games?dates[]=2025-01-15", schedule());
        transport.respond("/v1/players/active?team_ids[]=1&per_page=25", json!({ "data": [] }));
        transport.fail("/v1/players/active?team_ids[]=2&per_page=25", 429, "Too Many Requests");
        let state = state(transport);

        let date = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
        games_on(&state, date).await.unwrap();
        let err = game_players(&state, "100").await.unwrap_err();
        assert!(matches!(err, FetchError::Upstream { status: 429, .. }));
    }
}
