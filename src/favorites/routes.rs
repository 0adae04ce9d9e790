// src/favorites/routes.rs

use axum::{routing::get, Router};

use super::handlers;

/// Create the favorites router. Every route is protected: the user id comes
/// from the session, so a caller can only touch their own favorites.
pub fn favorites_routes() -> Router {
    Router::new()
        // Teams
        .route(
            "/api/favorites/teams",
            get(handlers::list_favorite_teams).post(handlers::add_favorite_team),
        )
        .route(
            "/api/favorites/teams/:team_id",
            get(handlers::is_favorite_team).delete(handlers::remove_favorite_team),
        )
        // Players
        .route(
            "/api/favorites/players",
            get(handlers::list_favorite_players).post(handlers::add_favorite_player),
        )
        .route(
            "/api/favorites/players/:player_id",
            get(handlers::is_favorite_player).delete(handlers::remove_favorite_player),
        )
}
