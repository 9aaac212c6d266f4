//! Recent-game summary for one player ahead of a specific game.

use courtside_core::aggregate::{opponent_side, summarize};
use courtside_core::derive::opponent_display_name;
use courtside_core::models::{PlayerRecord, PlayerRef, PlayerStatsSummary, StatRecord};

use crate::clients::{Endpoint, UpstreamClient};
use crate::error::FetchError;
use crate::state::AppState;

pub async fn build_player_stats_summary(
    state: &AppState,
    player_id: &str,
    game_id: &str,
) -> Result<PlayerStatsSummary, FetchError> {
    let player: PlayerRecord = state
        .upstream
        .fetch_one(&Endpoint::player(player_id), "Player")
        .await?;
    let player_name = player.full_name();
    tracing::info!("Fetching stats for {player_name} (ID: {player_id})");

    let game = state.games.resolve(game_id).await?;
    let opponent_team = opponent_display_name(opponent_side(player.team_id(), &game));

    let records = season_stats(&state.upstream, player_id, state.current_season).await?;

    let summary = summarize(
        PlayerRef {
            id: player_id.to_string(),
            name: player_name,
        },
        opponent_team,
        records,
    );

    tracing::info!(
        "Season average for player {}: {} over {} recent games shown",
        player_id,
        summary.season_avg_points,
        summary.last10_games.len()
    );
    Ok(summary)
}

/// Stat lines for `season`, or for the season before when the provider has
/// none yet. At most one fallback request is made.
async fn season_stats(
    upstream: &UpstreamClient,
    player_id: &str,
    season: i32,
) -> Result<Vec<StatRecord>, FetchError> {
    let records: Vec<StatRecord> = upstream
        .fetch_list(&Endpoint::season_stats(player_id, season))
        .await?;
    tracing::info!("Found {} game stats for {} season", records.len(), season);

    if !records.is_empty() {
        return Ok(records);
    }

    let previous = season - 1;
    tracing::info!("No {season} stats, trying {previous}");
    let records: Vec<StatRecord> = upstream
        .fetch_list(&Endpoint::season_stats(player_id, previous))
        .await?;
    tracing::info!("Found {} game stats for {} season", records.len(), previous);
    Ok(records)
}
