//! The milestone pass.
//!
//! One deterministic forward traversal of the sorted stream. Every rule
//! reads and updates rolling state owned by the engine value; badges for
//! a game append in rule order. No I/O, no wall clock, no randomness.

use std::collections::btree_map::Entry;
use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;

use courtlog_lookup::is_sentinel;

use crate::dates;
use crate::types::{
    is_d1_team_milestone, stream_order, Badge, ConfKey, ConfPairKey, ConfProgress, ConfVenueKey,
    ConferenceTable, GameEvent, MatchupKey, MilestoneReport, PlayerEvent, PlayerKey, RollingState,
    Summary, TeamKey, GAME_COUNT_MILESTONES, TOP_DIVISION, VISIT_MILESTONES,
};

/// Every dated appearance in the input, keyed by player. Built before
/// the pass, read-only during it, consulted only for dates strictly
/// before the game under evaluation.
type PriorAppearances = BTreeMap<PlayerKey, Vec<(NaiveDate, String)>>;

/// Replays an attended-games stream and emits milestone badges.
///
/// The engine owns its rolling state for exactly one pass; `run`
/// consumes the value, so stale aggregates cannot leak into a rerun.
pub struct MilestoneEngine {
    table: ConferenceTable,
    state: RollingState,
}

impl MilestoneEngine {
    pub fn new(table: ConferenceTable) -> Self {
        Self { table, state: RollingState::new() }
    }

    /// Runs the pass. Sorting happens here, so callers may hand over
    /// games in any order. Never fails: a game missing a field skips the
    /// rules that need it and still counts for the rest.
    ///
    /// Rule order per game:
    /// 1. game-count, then d1-game
    /// 2. streak
    /// 3. new-state
    /// 4. venue-count / venue-visit
    /// 5. team rules, away side then home side
    /// 6. conference rules, away side then home side
    /// 7. new-matchup
    /// 8. conf-matchup
    /// 9. transfers
    pub fn run(mut self, events: &[GameEvent]) -> MilestoneReport {
        let mut ordered: Vec<&GameEvent> = events.iter().collect();
        ordered.sort_by(|a, b| stream_order(a, b));

        let prior = build_prior_appearances(&ordered);

        let mut badges_by_game = BTreeMap::new();
        let mut game_order = Vec::with_capacity(ordered.len());
        for ev in ordered {
            let mut badges = Vec::new();
            self.game_counts(ev, &mut badges);
            self.streak(ev, &mut badges);
            self.new_state(ev, &mut badges);
            self.venue(ev, &mut badges);
            self.teams(ev, &mut badges);
            self.conferences(ev, &mut badges);
            self.matchup(ev, &mut badges);
            self.conference_matchup(ev, &mut badges);
            self.transfers(ev, &prior, &mut badges);
            game_order.push(ev.game_id.clone());
            badges_by_game.insert(ev.game_id.clone(), badges);
        }

        // The still-open run counts toward max and history.
        self.state.streak.close_open();

        MilestoneReport { badges_by_game, game_order, summary: self.summarize() }
    }

    fn game_counts(&mut self, ev: &GameEvent, out: &mut Vec<Badge>) {
        self.state.games += 1;
        if GAME_COUNT_MILESTONES.contains(&self.state.games) {
            out.push(Badge::GameCount { count: self.state.games });
        }
        if ev.division == TOP_DIVISION {
            self.state.d1_games += 1;
            if GAME_COUNT_MILESTONES.contains(&self.state.d1_games) {
                out.push(Badge::D1Game { count: self.state.d1_games });
            }
        }
    }

    fn streak(&mut self, ev: &GameEvent, out: &mut Vec<Badge>) {
        let st = &mut self.state.streak;
        let Some(date) = ev.date else {
            // An undated game breaks the chain and cannot anchor a new one.
            st.close_open();
            st.current = 0;
            st.last_date = None;
            return;
        };
        match st.last_date {
            Some(prev) if prev == date => {}
            Some(prev) if dates::day_gap(prev, date) == 1 => st.current += 1,
            _ => {
                st.close_open();
                st.current = 1;
            }
        }
        st.last_date = Some(date);
        if st.current >= 2 {
            out.push(Badge::Streak { days: st.current });
        }
    }

    fn new_state(&mut self, ev: &GameEvent, out: &mut Vec<Badge>) {
        if ev.state.is_empty() {
            return;
        }
        if let Some(rank) = self.state.states.insert(&ev.state) {
            out.push(Badge::NewState { state: ev.state.clone(), rank });
        }
    }

    fn venue(&mut self, ev: &GameEvent, out: &mut Vec<Badge>) {
        if ev.venue.is_empty() {
            return;
        }
        if let Some(rank) = self.state.venues.insert(&ev.venue) {
            out.push(Badge::VenueCount { venue: ev.venue.clone(), rank });
        }
        let visits = {
            let v = self.state.venue_visits.entry(ev.venue.clone()).or_insert(0);
            *v += 1;
            *v
        };
        // Visit #1 already surfaced as the venue-count badge.
        if visits > 1 {
            out.push(Badge::VenueVisit { venue: ev.venue.clone(), visits });
        }
    }

    fn teams(&mut self, ev: &GameEvent, out: &mut Vec<Badge>) {
        let sides = [
            (&ev.away_team, ev.away_score, ev.home_score),
            (&ev.home_team, ev.home_score, ev.away_score),
        ];
        for (team, scored, allowed) in sides {
            if team.is_empty() {
                continue;
            }
            let key = TeamKey::new(team.clone(), ev.gender);
            if !self.state.team_games.contains_key(&key) {
                out.push(Badge::NewTeam { team: team.clone(), gender: ev.gender });
                if self.table.top_division.contains(team) {
                    let seen = self.state.d1_teams_seen.entry(ev.gender).or_default();
                    if seen.insert(team.clone()) {
                        let count = seen.len() as u32;
                        if is_d1_team_milestone(count) {
                            out.push(Badge::D1Team { count, gender: ev.gender });
                        }
                    }
                }
            }
            let games = {
                let g = self.state.team_games.entry(key.clone()).or_insert(0);
                *g += 1;
                *g
            };
            // Game #1 already surfaced as the new-team badge.
            if games > 1 && VISIT_MILESTONES.contains(&games) {
                out.push(Badge::TeamVisit { team: team.clone(), gender: ev.gender, visits: games });
            }
            // Ties (bad parses) update neither column.
            if scored != allowed {
                let record = self.state.team_records.entry(key).or_default();
                if scored > allowed {
                    record.wins += 1;
                } else {
                    record.losses += 1;
                }
            }
        }
    }

    fn conferences(&mut self, ev: &GameEvent, out: &mut Vec<Badge>) {
        let sides = [(&ev.away_team, &ev.away_conf), (&ev.home_team, &ev.home_conf)];
        for (team, conf) in sides {
            if team.is_empty() {
                continue;
            }
            let Some(conf) = conf else { continue };
            if conf.is_empty() || is_sentinel(conf) {
                continue;
            }
            let key = ConfKey::new(conf.clone(), ev.gender);
            let first_member = self
                .state
                .conf_teams_seen
                .entry(key.clone())
                .or_default()
                .insert(team.clone());
            if first_member {
                *self.state.conf_team_counts.entry(conf.clone()).or_insert(0) += 1;
                if self.state.confs_seen.insert(conf.clone()) {
                    out.push(Badge::NewConference { conference: conf.clone() });
                }
            }
            if !ev.venue.is_empty() {
                self.state.conf_venues.insert(ConfVenueKey::new(conf.clone(), ev.venue.clone()));
            }
            let total = self.table.totals.get(conf).copied().unwrap_or(0);
            if total > 0 {
                let seen = self
                    .state
                    .conf_teams_seen
                    .get(&key)
                    .map(|teams| teams.len() as u32)
                    .unwrap_or(0);
                if seen >= total && self.state.conf_complete.insert(key) {
                    out.push(Badge::ConferenceComplete {
                        conference: conf.clone(),
                        gender: ev.gender,
                    });
                }
            }
        }
    }

    fn matchup(&mut self, ev: &GameEvent, out: &mut Vec<Badge>) {
        if ev.away_team.is_empty() || ev.home_team.is_empty() {
            return;
        }
        let key = MatchupKey::new(&ev.away_team, &ev.home_team, ev.gender);
        if self.state.matchups_seen.insert(key) {
            out.push(Badge::NewMatchup {
                away: ev.away_team.clone(),
                home: ev.home_team.clone(),
                gender: ev.gender,
            });
        }
    }

    fn conference_matchup(&mut self, ev: &GameEvent, out: &mut Vec<Badge>) {
        let (Some(away), Some(home)) = (&ev.away_conf, &ev.home_conf) else {
            return;
        };
        if away.is_empty() || home.is_empty() || away == home {
            return;
        }
        if is_sentinel(away) || is_sentinel(home) {
            return;
        }
        let key = ConfPairKey::new(away, home);
        if !self.state.conf_matchups.contains_key(&key) {
            out.push(Badge::ConferenceMatchup {
                first: key.first.clone(),
                second: key.second.clone(),
            });
        }
        *self.state.conf_matchups.entry(key).or_insert(0) += 1;
    }

    fn transfers(&mut self, ev: &GameEvent, prior: &PriorAppearances, out: &mut Vec<Badge>) {
        for p in &ev.players {
            let schools = match self.state.player_schools.entry(p.key.clone()) {
                Entry::Vacant(slot) => slot.insert(seed_known_schools(p, ev.date, prior)),
                Entry::Occupied(slot) => slot.into_mut(),
            };
            if !schools.is_empty() && !schools.contains(&p.team) {
                out.push(Badge::Transfer {
                    player: p.name.clone(),
                    from: schools.iter().cloned().collect(),
                    to: p.team.clone(),
                });
                self.state.transfers += 1;
            }
            schools.insert(p.team.clone());
        }
    }

    fn summarize(&self) -> Summary {
        let mut conference_progress = Vec::new();
        for (key, teams) in &self.state.conf_teams_seen {
            conference_progress.push(ConfProgress {
                conference: key.conference.clone(),
                gender: key.gender,
                seen: teams.len() as u32,
                total: self.table.totals.get(&key.conference).copied().unwrap_or(0),
                complete: self.state.conf_complete.contains(key),
            });
        }
        let mut conference_venues: BTreeMap<String, u32> = BTreeMap::new();
        for key in &self.state.conf_venues {
            *conference_venues.entry(key.conference.clone()).or_insert(0) += 1;
        }
        let d1_teams = self
            .state
            .d1_teams_seen
            .iter()
            .map(|(gender, teams)| (*gender, teams.len() as u32))
            .collect();
        Summary {
            games: self.state.games,
            d1_games: self.state.d1_games,
            current_streak: self.state.streak.current,
            max_streak: self.state.streak.max,
            streak_history: self.state.streak.history.clone(),
            states: self.state.states.to_vec(),
            venues: self.state.venues.to_vec(),
            venue_visits: self.state.venue_visits.clone(),
            team_games: self.state.team_games.clone(),
            team_records: self.state.team_records.clone(),
            d1_teams,
            conference_progress,
            conference_teams: self.state.conf_team_counts.clone(),
            conference_venues,
            distinct_matchups: self.state.matchups_seen.len() as u32,
            conference_matchups: self.state.conf_matchups.clone(),
            players_tracked: self.state.player_schools.len() as u32,
            transfers: self.state.transfers,
        }
    }
}

fn build_prior_appearances(ordered: &[&GameEvent]) -> PriorAppearances {
    let mut index: PriorAppearances = BTreeMap::new();
    for ev in ordered {
        let Some(date) = ev.date else { continue };
        for p in &ev.players {
            index.entry(p.key.clone()).or_default().push((date, p.team.clone()));
        }
    }
    index
}

/// A previous-school claim counts only when some earlier dated
/// appearance actually puts the player at that school. An undated game
/// can never verify "strictly before", so it seeds nothing.
fn seed_known_schools(
    p: &PlayerEvent,
    game_date: Option<NaiveDate>,
    prior: &PriorAppearances,
) -> BTreeSet<String> {
    let mut known = BTreeSet::new();
    let Some(game_date) = game_date else {
        return known;
    };
    let Some(entries) = prior.get(&p.key) else {
        return known;
    };
    for school in &p.previous_schools {
        if entries.iter().any(|(d, team)| *d < game_date && team == school) {
            known.insert(school.clone());
        }
    }
    known
}
