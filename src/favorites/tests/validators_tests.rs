// src/favorites/tests/validators_tests.rs

use crate::common::Validator;
use crate::favorites::models::*;
use crate::favorites::validators::*;

#[test]
fn test_team_validator_accepts_valid_data() {
    let data = AddFavoriteTeam {
        team_id: 10,
        team_name: "Flamengo".to_string(),
        team_logo: None,
    };

    assert!(FavoriteTeamValidator.validate(&data).is_valid);
}

#[test]
fn test_team_validator_rejects_bad_id_and_blank_name() {
    let data = AddFavoriteTeam {
        team_id: 0,
        team_name: "  ".to_string(),
        team_logo: None,
    };

    let result = FavoriteTeamValidator.validate(&data);
    assert!(!result.is_valid);
    assert!(result.errors.iter().any(|e| e.field == "team_id"));
    assert!(result.errors.iter().any(|e| e.field == "team_name"));
}

#[test]
fn test_player_validator_accepts_optional_fields_absent() {
    let data = AddFavoritePlayer {
        player_id: 99,
        player_name: "Gabigol".to_string(),
        player_photo: None,
        team_name: None,
        position: None,
    };

    assert!(FavoritePlayerValidator.validate(&data).is_valid);
}

#[test]
fn test_player_validator_rejects_oversized_position() {
    let data = AddFavoritePlayer {
        player_id: 99,
        player_name: "Gabigol".to_string(),
        player_photo: None,
        team_name: None,
        position: Some("p".repeat(101)),
    };

    let result = FavoritePlayerValidator.validate(&data);
    assert!(!result.is_valid);
    assert!(result.errors.iter().any(|e| e.field == "position"));
}
