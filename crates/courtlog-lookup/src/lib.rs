//! Team and conference reference lookups.
//!
//! Pure, in-memory resolution over immutable tables: canonical team
//! spelling, conference membership today, and conference membership on a
//! given date (realignment-aware). No state is mutated after construction
//! and no call here performs I/O except the roster-file constructor.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;

mod data;

/// Aggregate roster entry covering every top-division team. Not a real
/// conference; excluded from all milestone logic.
pub const ALL_D1: &str = "All D1";

/// Catch-all roster entry for teams seen in the log but not on any
/// current roster. Not a real conference; excluded from all milestone
/// logic.
pub const HISTORICAL_OTHER: &str = "Historical/Other";

/// Roster grouping entries for teams outside the top division. Real
/// opponents, but not conferences: excluded from the top-division set and
/// from completion totals.
pub const NON_D1_GROUPS: &[&str] = &["D2", "D3", "NAIA", "Non-D1"];

pub fn is_sentinel(conference: &str) -> bool {
    conference == ALL_D1 || conference == HISTORICAL_OTHER
}

fn is_group(conference: &str) -> bool {
    NON_D1_GROUPS.contains(&conference)
}

/// Strict YYYYMMDD -> comparable integer key. Anything that is not eight
/// ASCII digits is treated as absent.
pub fn date_key(date_sort: &str) -> Option<u32> {
    if date_sort.len() != 8 || !date_sort.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    date_sort.parse().ok()
}

#[derive(Debug, Deserialize)]
struct RosterFile {
    #[serde(default)]
    conferences: BTreeMap<String, Vec<String>>,
}

/// Immutable team/conference directory: rosters, aliases, and
/// effective-dated history.
#[derive(Debug, Clone)]
pub struct TeamDirectory {
    conferences: BTreeMap<String, Vec<String>>,
    aliases: BTreeMap<String, String>,
    history: BTreeMap<String, Vec<(u32, String)>>,
}

impl TeamDirectory {
    /// Directory backed by the built-in tables (2024-25 rosters).
    pub fn builtin() -> Self {
        let conferences = data::DEFAULT_CONFERENCES
            .iter()
            .map(|(conf, teams)| {
                (
                    (*conf).to_string(),
                    teams.iter().map(|t| (*t).to_string()).collect(),
                )
            })
            .collect();
        let aliases = data::TEAM_ALIASES
            .iter()
            .map(|(alias, canonical)| ((*alias).to_string(), (*canonical).to_string()))
            .collect();
        let history = data::CONFERENCE_HISTORY
            .iter()
            .map(|(team, entries)| {
                (
                    (*team).to_string(),
                    entries.iter().map(|(d, c)| (*d, (*c).to_string())).collect(),
                )
            })
            .collect();
        Self {
            conferences,
            aliases,
            history,
        }
    }

    /// Directory with the conference table replaced from a roster file
    /// (JSON object `{"conferences": {name: [teams...]}}`). Aliases and
    /// history stay built in; an empty or missing `conferences` key keeps
    /// the built-in table.
    pub fn from_roster_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read roster file: {}", path.display()))?;
        let file: RosterFile = serde_json::from_str(&raw)
            .with_context(|| format!("invalid roster json: {}", path.display()))?;
        let mut dir = Self::builtin();
        if !file.conferences.is_empty() {
            dir.conferences = file.conferences;
        }
        Ok(dir)
    }

    /// One alias-map hop; unknown names pass through unchanged.
    pub fn canonical_name<'a>(&'a self, name: &'a str) -> &'a str {
        self.aliases.get(name).map(String::as_str).unwrap_or(name)
    }

    /// Current conference membership. Rosters may list either spelling of
    /// an aliased team, so the search runs direct, then through the
    /// alias, then through any alias pointing back at this name.
    pub fn conference_of(&self, team: &str) -> Option<&str> {
        if team.is_empty() {
            return None;
        }
        if let Some(conf) = self.member_of(team) {
            return Some(conf);
        }
        if let Some(canonical) = self.aliases.get(team) {
            if let Some(conf) = self.member_of(canonical) {
                return Some(conf);
            }
        }
        for (alias, canonical) in &self.aliases {
            if canonical == team {
                if let Some(conf) = self.member_of(alias) {
                    return Some(conf);
                }
            }
        }
        None
    }

    /// Conference membership in effect on a date. The latest history
    /// entry at or before the date wins (checked under both the given
    /// and canonical spelling); teams with no applicable entry fall back
    /// to current membership, as does an absent date.
    pub fn conference_on(&self, team: &str, date: Option<u32>) -> Option<&str> {
        let canonical = self.canonical_name(team);
        let Some(date) = date else {
            return self.conference_of(canonical);
        };
        let entries = self
            .history
            .get(team)
            .or_else(|| self.history.get(canonical));
        if let Some(entries) = entries {
            let mut current = None;
            for (effective, conf) in entries {
                if *effective <= date {
                    current = Some(conf.as_str());
                } else {
                    break;
                }
            }
            if current.is_some() {
                return current;
            }
        }
        self.conference_of(canonical)
    }

    /// Every top-division team, closed over the alias table in both
    /// directions so game records carrying either spelling match.
    /// Sentinels and non-D1 grouping entries contribute nothing.
    pub fn top_division_teams(&self) -> BTreeSet<String> {
        let mut set = BTreeSet::new();
        for (conf, teams) in &self.conferences {
            if is_sentinel(conf) || is_group(conf) {
                continue;
            }
            for team in teams {
                set.insert(team.clone());
            }
        }
        for (alias, canonical) in &self.aliases {
            if set.contains(canonical) {
                set.insert(alias.clone());
            }
            if set.contains(alias) {
                set.insert(canonical.clone());
            }
        }
        set
    }

    /// Conference -> member count, for completion detection. Sentinels
    /// and grouping entries are excluded (they can never complete).
    pub fn totals(&self) -> BTreeMap<String, u32> {
        self.conferences
            .iter()
            .filter(|(conf, _)| !is_sentinel(conf) && !is_group(conf))
            .map(|(conf, teams)| (conf.clone(), teams.len() as u32))
            .collect()
    }

    fn member_of(&self, team: &str) -> Option<&str> {
        for (conf, teams) in &self.conferences {
            if teams.iter().any(|t| t == team) {
                return Some(conf.as_str());
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_name_is_single_step() {
        let dir = TeamDirectory::builtin();
        assert_eq!(dir.canonical_name("Pitt"), "Pittsburgh");
        assert_eq!(dir.canonical_name("Pittsburgh"), "Pittsburgh");
        // Bidirectional pair: one hop each way, no chasing.
        assert_eq!(dir.canonical_name("UConn"), "Connecticut");
        assert_eq!(dir.canonical_name("Connecticut"), "UConn");
    }

    #[test]
    fn date_key_rejects_malformed() {
        assert_eq!(date_key("20240115"), Some(20240115));
        assert_eq!(date_key(""), None);
        assert_eq!(date_key("2024011"), None);
        assert_eq!(date_key("2024-01-15"), None);
        assert_eq!(date_key("2024011a"), None);
    }

    #[test]
    fn conference_of_direct_match() {
        let dir = TeamDirectory::builtin();
        assert_eq!(dir.conference_of("Michigan"), Some("Big Ten"));
        assert_eq!(dir.conference_of("Gonzaga"), Some("WCC"));
        assert_eq!(dir.conference_of("Nowhere State"), None);
        assert_eq!(dir.conference_of(""), None);
    }

    #[test]
    fn conference_of_via_alias_and_reverse_alias() {
        let dir = TeamDirectory::builtin();
        // Roster lists "NC State"; both the listed form and its canonical
        // expansion must resolve.
        assert_eq!(dir.conference_of("NC State"), Some("ACC"));
        assert_eq!(dir.conference_of("North Carolina State"), Some("ACC"));
        // Roster lists "UConn"; "Connecticut" resolves through the
        // reverse direction.
        assert_eq!(dir.conference_of("UConn"), Some("Big East"));
        assert_eq!(dir.conference_of("Connecticut"), Some("Big East"));
    }

    #[test]
    fn conference_on_picks_latest_effective_entry() {
        let dir = TeamDirectory::builtin();
        assert_eq!(dir.conference_on("UCLA", Some(20231115)), Some("Pac-12"));
        assert_eq!(dir.conference_on("UCLA", Some(20240701)), Some("Big Ten"));
        assert_eq!(dir.conference_on("UCLA", Some(20241115)), Some("Big Ten"));
        // Before the first effective date: current membership fallback.
        assert_eq!(dir.conference_on("UCLA", Some(19000101)), Some("Big Ten"));
        // Absent date: current membership.
        assert_eq!(dir.conference_on("UCLA", None), Some("Big Ten"));
    }

    #[test]
    fn conference_on_without_history_uses_roster() {
        let dir = TeamDirectory::builtin();
        assert_eq!(dir.conference_on("Michigan", Some(20150101)), Some("Big Ten"));
        assert_eq!(dir.conference_on("Nowhere State", Some(20240101)), None);
    }

    #[test]
    fn top_division_set_closes_over_aliases() {
        let dir = TeamDirectory::builtin();
        let d1 = dir.top_division_teams();
        assert!(d1.contains("Michigan"));
        // Listed spelling and its canonical expansion.
        assert!(d1.contains("NC State"));
        assert!(d1.contains("North Carolina State"));
        // Alias of a listed member.
        assert!(d1.contains("Pitt"));
        assert!(!d1.contains("Nowhere State"));
    }

    #[test]
    fn totals_exclude_sentinels_and_groups() {
        let mut dir = TeamDirectory::builtin();
        dir.conferences
            .insert(ALL_D1.to_string(), vec!["Michigan".to_string()]);
        dir.conferences
            .insert(HISTORICAL_OTHER.to_string(), vec!["Old College".to_string()]);
        dir.conferences
            .insert("D2".to_string(), vec!["Hillsdale".to_string()]);
        let totals = dir.totals();
        assert!(!totals.contains_key(ALL_D1));
        assert!(!totals.contains_key(HISTORICAL_OTHER));
        assert!(!totals.contains_key("D2"));
        assert_eq!(totals.get("Ivy League"), Some(&8));

        let d1 = dir.top_division_teams();
        assert!(!d1.contains("Hillsdale"));
        assert!(!d1.contains("Old College"));
    }
}
