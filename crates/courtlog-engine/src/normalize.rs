//! Raw records to the canonical ordered stream.
//!
//! This boundary owns canonical team spellings, date parsing, the
//! as-of-date conference annotations, the appearance join and the
//! stream sort. Records that cannot be keyed (empty game id,
//! unrecognizable gender marker) drop here rather than get guessed at;
//! every downstream rule keys on those fields. Callers that care about
//! drop counts compare input and output lengths.

use std::collections::BTreeMap;

use courtlog_lookup::{date_key, TeamDirectory};
use courtlog_schemas::{AppearanceRecord, GameRecord};

use crate::dates;
use crate::types::{stream_order, ConferenceTable, GameEvent, Gender, PlayerEvent, PlayerKey};

impl ConferenceTable {
    /// Roster-derived engine inputs. Sentinel groupings and non-top
    /// divisions are already excluded by the directory accessors.
    pub fn from_directory(dir: &TeamDirectory) -> Self {
        Self {
            totals: dir.totals(),
            top_division: dir.top_division_teams(),
        }
    }
}

/// Normalizes and sorts the full dataset. Infallible by contract:
/// malformed fields degrade to their empty defaults and unkeyable
/// records drop.
pub fn normalize(
    games: &[GameRecord],
    appearances: &[AppearanceRecord],
    dir: &TeamDirectory,
) -> Vec<GameEvent> {
    let mut players_by_game: BTreeMap<&str, Vec<PlayerEvent>> = BTreeMap::new();
    for rec in appearances {
        if rec.game_id.is_empty() || rec.team.is_empty() {
            continue;
        }
        let key = match (&rec.player_id, rec.player.as_str()) {
            (Some(id), _) if !id.is_empty() => PlayerKey::Id(id.clone()),
            (_, name) if !name.is_empty() => PlayerKey::Name(name.to_string()),
            _ => continue,
        };
        players_by_game
            .entry(rec.game_id.as_str())
            .or_default()
            .push(PlayerEvent {
                key,
                name: rec.player.clone(),
                team: dir.canonical_name(&rec.team).to_string(),
                previous_schools: rec
                    .previous_schools
                    .iter()
                    .filter(|s| !s.is_empty())
                    .map(|s| dir.canonical_name(s).to_string())
                    .collect(),
            });
    }
    // Join order inside a game is part of the deterministic contract.
    for list in players_by_game.values_mut() {
        list.sort_by(|a, b| {
            a.team
                .cmp(&b.team)
                .then_with(|| a.name.cmp(&b.name))
                .then_with(|| a.key.cmp(&b.key))
        });
    }

    let mut events = Vec::with_capacity(games.len());
    for rec in games {
        if rec.game_id.is_empty() {
            continue;
        }
        let Some(gender) = Gender::parse(&rec.gender) else {
            continue;
        };
        let away_team = dir.canonical_name(&rec.away_team).to_string();
        let home_team = dir.canonical_name(&rec.home_team).to_string();
        let on = date_key(&rec.date_sort);
        events.push(GameEvent {
            game_id: rec.game_id.clone(),
            date_sort: rec.date_sort.clone(),
            date: dates::parse_date_sort(&rec.date_sort),
            time_sort: rec.time_sort.clone().filter(|t| !t.is_empty()),
            gender,
            division: rec.division.clone(),
            away_conf: conference_for(dir, &away_team, on),
            home_conf: conference_for(dir, &home_team, on),
            away_team,
            home_team,
            away_score: rec.away_score.unwrap_or(0),
            home_score: rec.home_score.unwrap_or(0),
            venue: rec.venue.clone(),
            city: rec.city.clone(),
            state: rec.state.clone(),
            players: players_by_game.remove(rec.game_id.as_str()).unwrap_or_default(),
        });
    }

    events.sort_by(stream_order);
    events
}

fn conference_for(dir: &TeamDirectory, team: &str, on: Option<u32>) -> Option<String> {
    if team.is_empty() {
        return None;
    }
    dir.conference_on(team, on).map(str::to_string)
}
