//! Turns a season of stat lines into the recent-game summary.

use crate::derive::{
    minutes_or_default, opponent_abbreviation, parse_game_date, played_minutes, short_date,
};
use crate::models::{
    GameRecord, PlayerGameLog, PlayerRef, PlayerStatsSummary, StatRecord, TeamRecord,
};

/// Number of games in the recent-game log.
pub const RECENT_GAMES: usize = 10;

/// Most recent first. Stable: same-date records keep their fetch order, and
/// records without a usable date go last.
pub fn sort_most_recent_first(records: &mut [StatRecord]) {
    records.sort_by_cached_key(|r| {
        std::cmp::Reverse(r.game_date().and_then(parse_game_date))
    });
}

/// Mean points over games with real playing time, rounded to one decimal
/// (half away from zero). Zero when no game qualifies.
pub fn season_average_points(records: &[StatRecord]) -> f64 {
    let played: Vec<i64> = records
        .iter()
        .filter(|r| played_minutes(r.min.as_deref()))
        .map(|r| r.pts.unwrap_or(0))
        .collect();

    if played.is_empty() {
        return 0.0;
    }

    let total: i64 = played.iter().sum();
    let avg = total as f64 / played.len() as f64;
    (avg * 10.0).round() / 10.0
}

/// The opponent in the game a stat line belongs to, from the side of the
/// team the line was recorded for.
fn historical_opponent(record: &StatRecord) -> Option<&TeamRecord> {
    let game = record.game.as_ref()?;
    let own_team_id = record.team.as_ref().and_then(|t| t.id);
    let is_home = own_team_id.is_some() && own_team_id == game.home_team_id();
    if is_home {
        game.visitor_team.as_ref()
    } else {
        game.home_team.as_ref()
    }
}

pub fn game_log_entry(record: &StatRecord) -> PlayerGameLog {
    PlayerGameLog {
        date: short_date(record.game_date()),
        opponent: opponent_abbreviation(historical_opponent(record)),
        points: record.pts.unwrap_or(0),
        rebounds: record.reb.unwrap_or(0),
        assists: record.ast.unwrap_or(0),
        minutes: minutes_or_default(record.min.as_deref()),
    }
}

/// First `limit` entries of an already sorted list. Zero-minute games are
/// kept here; only the average excludes them.
pub fn recent_game_log(sorted: &[StatRecord], limit: usize) -> Vec<PlayerGameLog> {
    sorted.iter().take(limit).map(game_log_entry).collect()
}

/// The team across from `player_team_id` in `game`. A player whose team is
/// not the home side is treated as the away side.
pub fn opponent_side(player_team_id: Option<i64>, game: &GameRecord) -> Option<&TeamRecord> {
    let is_home = player_team_id.is_some() && player_team_id == game.home_team_id();
    if is_home {
        game.visitor_team.as_ref()
    } else {
        game.home_team.as_ref()
    }
}

pub fn summarize(
    player: PlayerRef,
    opponent_team: String,
    mut records: Vec<StatRecord>,
) -> PlayerStatsSummary {
    sort_most_recent_first(&mut records);

    PlayerStatsSummary {
        player,
        opponent_team,
        season_avg_points: season_average_points(&records),
        last10_games: recent_game_log(&records, RECENT_GAMES),
        // Head-to-head filtering is not offered yet; the field stays present.
        last10_vs_opponent: Vec::new(),
    }
}
