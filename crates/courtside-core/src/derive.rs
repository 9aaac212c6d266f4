//! Default resolution for optional provider fields.
//!
//! The provider drops fields freely, so every public value has a fallback
//! chain. Each chain lives in its own function.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::models::{GameRecord, TeamRecord};

/// Appended to date-only start times so that consumers in other UTC offsets
/// still land on the same calendar day.
pub const MIDDAY_SUFFIX: &str = "T12:00:00";

const ZERO_MINUTES: &[&str] = &["0:00", "00"];

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}

/// full name → short name → placeholder.
pub fn team_display_name(team: Option<&TeamRecord>, placeholder: &str) -> String {
    team.and_then(|t| t.full_name.as_deref().or(t.name.as_deref()))
        .unwrap_or(placeholder)
        .to_string()
}

pub fn opponent_display_name(team: Option<&TeamRecord>) -> String {
    team_display_name(team, "Opponent")
}

/// Short label for a team: official abbreviation, else the first three letters
/// of the short name, else of the last word of the full name, else `"OPP"`.
pub fn opponent_abbreviation(team: Option<&TeamRecord>) -> String {
    let Some(team) = team else {
        return "OPP".to_string();
    };

    if let Some(abbr) = non_empty(team.abbreviation.as_deref()) {
        return abbr.to_string();
    }

    if let Some(name) = non_empty(team.name.as_deref()) {
        return first_three_upper(name);
    }

    if let Some(last_word) = non_empty(team.full_name.as_deref())
        .and_then(|full| full.split(' ').next_back())
        .filter(|w| !w.is_empty())
    {
        return first_three_upper(last_word);
    }

    "OPP".to_string()
}

fn first_three_upper(s: &str) -> String {
    s.chars().take(3).collect::<String>().to_uppercase()
}

/// `datetime` when the provider sent one, else `date`; date-only values get a
/// midday time component.
pub fn start_time(game: &GameRecord) -> Option<String> {
    let raw = non_empty(game.datetime.as_deref()).or(non_empty(game.date.as_deref()))?;
    if raw.contains('T') || raw.contains(':') {
        Some(raw.to_string())
    } else {
        Some(format!("{raw}{MIDDAY_SUFFIX}"))
    }
}

/// Parse a provider date: RFC 3339, a naive `YYYY-MM-DDTHH:MM:SS`, or a
/// `YYYY-MM-DD` prefix.
pub fn parse_game_date(raw: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_utc());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
        return Some(dt);
    }
    raw.get(..10)
        .and_then(|prefix| NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok())
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// `"Jan 5"` style label. The calendar day is taken from the provider's date
/// as written, never shifted through a local offset.
pub fn short_date(raw: Option<&str>) -> String {
    let Some(raw) = non_empty(raw) else {
        return String::new();
    };

    let day = raw
        .get(..10)
        .and_then(|prefix| NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok())
        .or_else(|| parse_game_date(raw).map(|dt| dt.date()));

    day.map(|d| d.format("%b %-d").to_string()).unwrap_or_default()
}

/// Whether a minutes value represents actual playing time.
pub fn played_minutes(min: Option<&str>) -> bool {
    match non_empty(min) {
        Some(m) => !ZERO_MINUTES.contains(&m),
        None => false,
    }
}

pub fn minutes_or_default(min: Option<&str>) -> String {
    min.unwrap_or("0").to_string()
}
