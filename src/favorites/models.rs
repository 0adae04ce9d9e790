// src/favorites/models.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// ============================================================================
// Favorite Team Models
// ============================================================================

#[derive(FromRow, Serialize, Deserialize, Debug, Clone)]
pub struct FavoriteTeam {
    pub id: i64,
    pub user_id: i64,
    pub team_id: i64,
    pub team_name: String,
    pub team_logo: Option<String>,
    pub created_at: Option<String>,
}

/// Favorite-time snapshot of an externally-sourced team
#[derive(Debug, Deserialize)]
pub struct AddFavoriteTeam {
    pub team_id: i64,
    pub team_name: String,
    pub team_logo: Option<String>,
}

// ============================================================================
// Favorite Player Models
// ============================================================================

#[derive(FromRow, Serialize, Deserialize, Debug, Clone)]
pub struct FavoritePlayer {
    pub id: i64,
    pub user_id: i64,
    pub player_id: i64,
    pub player_name: String,
    pub player_photo: Option<String>,
    pub team_name: Option<String>,
    pub position: Option<String>,
    pub created_at: Option<String>,
}

/// Favorite-time snapshot of an externally-sourced player
#[derive(Debug, Deserialize)]
pub struct AddFavoritePlayer {
    pub player_id: i64,
    pub player_name: String,
    pub player_photo: Option<String>,
    pub team_name: Option<String>,
    pub position: Option<String>,
}

// ============================================================================
// Shared responses
// ============================================================================

#[derive(Serialize, Debug)]
pub struct FavoriteStatus {
    pub is_favorite: bool,
}
