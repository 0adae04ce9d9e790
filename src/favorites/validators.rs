// src/favorites/validators.rs

use super::models::*;
use crate::common::{ValidationResult, Validator};

pub struct FavoriteTeamValidator;

impl Validator<AddFavoriteTeam> for FavoriteTeamValidator {
    fn validate(&self, data: &AddFavoriteTeam) -> ValidationResult {
        let mut result = ValidationResult::new();

        if data.team_id <= 0 {
            result.add_error("team_id", "Team id must be positive");
        }

        if data.team_name.trim().is_empty() {
            result.add_error("team_name", "Team name is required");
        } else if data.team_name.len() > 255 {
            result.add_error("team_name", "Team name must be less than 255 characters");
        }

        result
    }
}

pub struct FavoritePlayerValidator;

impl Validator<AddFavoritePlayer> for FavoritePlayerValidator {
    fn validate(&self, data: &AddFavoritePlayer) -> ValidationResult {
        let mut result = ValidationResult::new();

        if data.player_id <= 0 {
            result.add_error("player_id", "Player id must be positive");
        }

        if data.player_name.trim().is_empty() {
            result.add_error("player_name", "Player name is required");
        } else if data.player_name.len() > 255 {
            result.add_error("player_name", "Player name must be less than 255 characters");
        }

        if let Some(team_name) = &data.team_name {
            if team_name.len() > 255 {
                result.add_error("team_name", "Team name must be less than 255 characters");
            }
        }

        if let Some(position) = &data.position {
            if position.len() > 100 {
                result.add_error("position", "Position must be less than 100 characters");
            }
        }

        result
    }
}
