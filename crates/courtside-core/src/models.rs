//! Provider records and the public views derived from them.
//!
//! Provider records mirror the statistics API with every field optional; the
//! provider omits fields freely depending on the season and endpoint.
//! Public views are what the presentation layer receives.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

// ---------------------------------------------------------------------------
// Provider records
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TeamRecord {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub abbreviation: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub full_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct GameRecord {
    pub id: i64,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub datetime: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default)]
    pub home_team: Option<TeamRecord>,
    #[serde(default)]
    pub visitor_team: Option<TeamRecord>,
    #[serde(default)]
    pub home_team_id: Option<i64>,
    #[serde(default)]
    pub visitor_team_id: Option<i64>,
}

impl GameRecord {
    pub fn home_team_id(&self) -> Option<i64> {
        self.home_team
            .as_ref()
            .and_then(|t| t.id)
            .or(self.home_team_id)
    }

    pub fn away_team_id(&self) -> Option<i64> {
        self.visitor_team
            .as_ref()
            .and_then(|t| t.id)
            .or(self.visitor_team_id)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PlayerRecord {
    pub id: i64,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub team: Option<TeamRecord>,
}

impl PlayerRecord {
    pub fn full_name(&self) -> String {
        let first = self.first_name.as_deref().unwrap_or_default();
        let last = self.last_name.as_deref().unwrap_or_default();
        format!("{first} {last}").trim().to_string()
    }

    pub fn team_id(&self) -> Option<i64> {
        self.team.as_ref().and_then(|t| t.id)
    }
}

/// The game reference embedded in a stat line. Depending on the endpoint
/// version the teams come either nested or as bare ids.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct StatGameRef {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub home_team: Option<TeamRecord>,
    #[serde(default)]
    pub visitor_team: Option<TeamRecord>,
    #[serde(default)]
    pub home_team_id: Option<i64>,
    #[serde(default)]
    pub visitor_team_id: Option<i64>,
}

impl StatGameRef {
    pub fn home_team_id(&self) -> Option<i64> {
        self.home_team
            .as_ref()
            .and_then(|t| t.id)
            .or(self.home_team_id)
    }
}

/// One player-game statistical line.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct StatRecord {
    #[serde(default)]
    pub pts: Option<i64>,
    #[serde(default)]
    pub reb: Option<i64>,
    #[serde(default)]
    pub ast: Option<i64>,
    #[serde(default, deserialize_with = "minutes_from_json")]
    pub min: Option<String>,
    #[serde(default)]
    pub team: Option<TeamRecord>,
    #[serde(default)]
    pub game: Option<StatGameRef>,
}

impl StatRecord {
    pub fn game_date(&self) -> Option<&str> {
        self.game.as_ref().and_then(|g| g.date.as_deref())
    }
}

/// Minutes arrive as `"35"`, `"35:12"`, a bare number, or null.
fn minutes_from_json<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

// ---------------------------------------------------------------------------
// Envelope helpers
// ---------------------------------------------------------------------------

/// Items under the `data` array of a list response. A missing or non-array
/// `data` yields no items.
pub fn list_items(body: &Value) -> &[Value] {
    body.get("data")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

/// The object of a single-record response: `data` when present, else the body.
pub fn single_data(body: &Value) -> &Value {
    body.get("data").unwrap_or(body)
}

// ---------------------------------------------------------------------------
// Public views
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    pub id: String,
    pub home_team: String,
    pub away_team: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub home_team_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub away_team_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    pub time: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: String,
    pub name: String,
    pub team: String,
    pub team_id: i64,
    pub position: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerGameLog {
    pub date: String,
    pub opponent: String,
    pub points: i64,
    pub rebounds: i64,
    pub assists: i64,
    pub minutes: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerRef {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerStatsSummary {
    pub player: PlayerRef,
    pub opponent_team: String,
    pub season_avg_points: f64,
    pub last10_games: Vec<PlayerGameLog>,
    pub last10_vs_opponent: Vec<PlayerGameLog>,
}
