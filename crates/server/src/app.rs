use axum::{routing::get, Extension, Router};
use tower_http::cors::{Any, CorsLayer};

use crate::routes;
use crate::state::AppState;

/// The full HTTP surface with shared state attached.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health::health_check))
        .route("/api/games", get(routes::games::list_today_games))
        .route("/api/games/{game_id}/players", get(routes::games::list_game_players))
        .route("/api/players/{player_id}/stats", get(routes::players::get_player_stats))
        .layer(Extension(state))
        .layer(cors)
}
