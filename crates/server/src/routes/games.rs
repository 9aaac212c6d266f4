use axum::{extract::Path, Extension, Json};

use courtside_core::models::{Game, Player};

use crate::error::AppError;
use crate::services::games;
use crate::state::AppState;

/// GET /api/games
/// Today's games, by the server's local calendar date.
pub async fn list_today_games(
    Extension(state): Extension<AppState>,
) -> Result<Json<Vec<Game>>, AppError> {
    let today = chrono::Local::now().date_naive();
    let games = games::games_on(&state, today)
        .await
        .map_err(AppError::failed("Failed to fetch games"))?;
    Ok(Json(games))
}

/// GET /api/games/{game_id}/players
pub async fn list_game_players(
    Extension(state): Extension<AppState>,
    Path(game_id): Path<String>,
) -> Result<Json<Vec<Player>>, AppError> {
    let players = games::game_players(&state, &game_id)
        .await
        .map_err(AppError::failed("Failed to fetch players"))?;
    Ok(Json(players))
}
