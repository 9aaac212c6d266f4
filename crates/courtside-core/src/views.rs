//! Builders for the public views handed to the presentation layer.

use crate::derive::{start_time, team_display_name};
use crate::models::{Game, GameRecord, Player, PlayerRecord};

pub const HOME_PLACEHOLDER: &str = "Home";
pub const AWAY_PLACEHOLDER: &str = "Away";

pub fn home_team_name(record: &GameRecord) -> String {
    team_display_name(record.home_team.as_ref(), HOME_PLACEHOLDER)
}

pub fn away_team_name(record: &GameRecord) -> String {
    team_display_name(record.visitor_team.as_ref(), AWAY_PLACEHOLDER)
}

pub fn game_view(record: &GameRecord) -> Game {
    Game {
        id: record.id.to_string(),
        home_team: home_team_name(record),
        away_team: away_team_name(record),
        home_team_id: record.home_team_id(),
        away_team_id: record.away_team_id(),
        start_time: start_time(record),
        status: record.status.clone(),
        time: record.time.clone().filter(|t| !t.is_empty()),
    }
}

/// A roster entry tagged with the team it was listed under.
pub fn roster_player(record: &PlayerRecord, team: &str, team_id: i64) -> Player {
    Player {
        id: record.id.to_string(),
        name: record.full_name(),
        team: team.to_string(),
        team_id,
        position: record.position.clone().unwrap_or_else(|| "N/A".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_game_view_from_provider_record() {
        let record: GameRecord = serde_json::from_value(json!({
            "id": 15907925,
            "date": "2025-01-15",
            "status": "7:30 pm ET",
            "time": "",
            "home_team": { "id": 2, "full_name": "Boston Celtics", "name": "Celtics" },
            "visitor_team": { "id": 20, "name": "Knicks" },
        }))
        .unwrap();

        let game = game_view(&record);
        assert_eq!(game.id, "15907925");
        assert_eq!(game.home_team, "Boston Celtics");
        assert_eq!(game.away_team, "Knicks");
        assert_eq!(game.home_team_id, Some(2));
        assert_eq!(game.away_team_id, Some(20));
        assert_eq!(game.start_time.as_deref(), Some("2025-01-15T12:00:00"));
        assert_eq!(game.status.as_deref(), Some("7:30 pm ET"));
        assert_eq!(game.time, None);
    }

    #[test]
    fn test_game_view_placeholders() {
        let game = game_view(&GameRecord { id: 3, ..Default::default() });
        assert_eq!(game.home_team, "Home");
        assert_eq!(game.away_team, "Away");
        assert_eq!(game.home_team_id, None);
    }

    #[test]
    fn test_roster_player() {
        let record: PlayerRecord = serde_json::from_value(json!({
            "id": 237,
            "first_name": "LeBron",
            "last_name": "James",
        }))
        .unwrap();
        let player = roster_player(&record, "Los Angeles Lakers", 14);
        assert_eq!(player.id, "237");
        assert_eq!(player.name, "LeBron James");
        assert_eq!(player.team, "Los Angeles Lakers");
        assert_eq!(player.team_id, 14);
        assert_eq!(player.position, "N/A");
    }
}
