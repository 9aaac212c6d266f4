use axum::{
    extract::{rejection::QueryRejection, Path, Query},
    Extension, Json,
};
use serde::Deserialize;

use courtside_core::models::PlayerStatsSummary;

use crate::error::AppError;
use crate::services::player_stats;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct PlayerStatsQuery {
    #[serde(rename = "gameId")]
    pub game_id: Option<String>,
}

/// GET /api/players/{player_id}/stats?gameId=...
pub async fn get_player_stats(
    Extension(state): Extension<AppState>,
    Path(player_id): Path<String>,
    query: Result<Query<PlayerStatsQuery>, QueryRejection>,
) -> Result<Json<PlayerStatsSummary>, AppError> {
    // An unreadable query string (e.g. a repeated gameId) names no usable game.
    let q = query.map(|Query(q)| q).unwrap_or_else(|rejection| {
        tracing::debug!("Rejected stats query: {rejection}");
        PlayerStatsQuery { game_id: None }
    });
    let game_id = q
        .game_id
        .as_deref()
        .filter(|id| !id.is_empty())
        .ok_or(AppError::BadRequest("Missing gameId query param".into()))?;

    let summary = player_stats::build_player_stats_summary(&state, &player_id, game_id)
        .await
        .map_err(AppError::failed("Failed to fetch player stats"))?;
    Ok(Json(summary))
}
