use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;

/// Division marker for the top tier.
pub const TOP_DIVISION: &str = "D1";

/// Counts that fire game-count and d1-game badges.
pub const GAME_COUNT_MILESTONES: &[u32] = &[1, 10, 25, 50, 75, 100, 150, 200, 250, 500];

/// Repeat-appearance counts worth a team-visit badge. The low end is a
/// member so the set can double as a rank filter, but visit badges
/// require a count above one.
pub const VISIT_MILESTONES: &[u32] = &[1, 5, 10, 15, 20, 25, 30, 35, 40, 45, 50, 75, 100, 150, 200];

/// Distinct top-division team counts worth a d1-team badge: multiples
/// of five, up to one hundred.
pub fn is_d1_team_milestone(count: u32) -> bool {
    count >= 5 && count <= 100 && count % 5 == 0
}

/// Game gender. Declaration order carries the stream tie-break: W sorts
/// before M, which decides which half of a doubleheader day claims a
/// shared first.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Gender {
    W,
    M,
}

impl Gender {
    /// Accepts the two raw markers, case-insensitively, after trimming.
    /// Anything else is unrecognizable and the record gets dropped
    /// upstream.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "W" | "w" => Some(Gender::W),
            "M" | "m" => Some(Gender::M),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::W => "W",
            Gender::M => "M",
        }
    }

    /// Possessive label used in badge titles.
    pub fn label(&self) -> &'static str {
        match self {
            Gender::W => "women's",
            Gender::M => "men's",
        }
    }
}

/// Transfer-tracking identity: the upstream id when present, otherwise
/// the player name. Never name plus team; a key that embeds the team
/// cannot observe the player changing teams.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum PlayerKey {
    Id(String),
    Name(String),
}

/// One player appearance, joined to its game and canonicalized.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayerEvent {
    pub key: PlayerKey,
    pub name: String,
    pub team: String,
    pub previous_schools: Vec<String>,
}

/// One normalized stream element. Team spellings are canonical, the
/// date is parsed (None when the raw value was malformed) and the
/// conference annotations are resolved as of the game date.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameEvent {
    pub game_id: String,
    pub date_sort: String,
    pub date: Option<NaiveDate>,
    pub time_sort: Option<String>,
    pub gender: Gender,
    pub division: String,
    pub away_team: String,
    pub home_team: String,
    pub away_score: u32,
    pub home_score: u32,
    pub venue: String,
    pub city: String,
    pub state: String,
    pub away_conf: Option<String>,
    pub home_conf: Option<String>,
    pub players: Vec<PlayerEvent>,
}

impl GameEvent {
    /// Bare event with the identity and ordering fields set; everything
    /// else defaults to empty. The date parses here so hand-built
    /// events behave like normalized records.
    pub fn new(
        game_id: impl Into<String>,
        date_sort: impl Into<String>,
        gender: Gender,
        away_team: impl Into<String>,
        home_team: impl Into<String>,
    ) -> Self {
        let date_sort = date_sort.into();
        let date = crate::dates::parse_date_sort(&date_sort);
        Self {
            game_id: game_id.into(),
            date_sort,
            date,
            time_sort: None,
            gender,
            division: String::new(),
            away_team: away_team.into(),
            home_team: home_team.into(),
            away_score: 0,
            home_score: 0,
            venue: String::new(),
            city: String::new(),
            state: String::new(),
            away_conf: None,
            home_conf: None,
            players: Vec::new(),
        }
    }
}

/// Stream order: date, then tip time when both sides carry one and they
/// differ, then gender (W first), then game id. Any other order changes
/// which game claims a shared first.
pub fn stream_order(a: &GameEvent, b: &GameEvent) -> Ordering {
    a.date_sort
        .cmp(&b.date_sort)
        .then_with(|| match (&a.time_sort, &b.time_sort) {
            (Some(x), Some(y)) if !x.is_empty() && !y.is_empty() && x != y => x.cmp(y),
            _ => Ordering::Equal,
        })
        .then_with(|| a.gender.cmp(&b.gender))
        .then_with(|| a.game_id.cmp(&b.game_id))
}

/// (team, gender). The unit every per-team count and record is keyed by.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct TeamKey {
    pub team: String,
    pub gender: Gender,
}

impl TeamKey {
    pub fn new(team: impl Into<String>, gender: Gender) -> Self {
        Self { team: team.into(), gender }
    }
}

/// (conference, gender). Seen-sets and completion flags key on this.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct ConfKey {
    pub conference: String,
    pub gender: Gender,
}

impl ConfKey {
    pub fn new(conference: impl Into<String>, gender: Gender) -> Self {
        Self { conference: conference.into(), gender }
    }
}

/// (conference, venue). One entry per venue that hosted a game involving
/// a team of the conference, either gender.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct ConfVenueKey {
    pub conference: String,
    pub venue: String,
}

impl ConfVenueKey {
    pub fn new(conference: impl Into<String>, venue: impl Into<String>) -> Self {
        Self { conference: conference.into(), venue: venue.into() }
    }
}

/// Order-independent pairing of two teams within a gender. Home and
/// away swap freely between seasons; the sorted pair is the identity.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct MatchupKey {
    pub first: String,
    pub second: String,
    pub gender: Gender,
}

impl MatchupKey {
    pub fn new(a: &str, b: &str, gender: Gender) -> Self {
        let (first, second) = if a <= b { (a, b) } else { (b, a) };
        Self { first: first.to_string(), second: second.to_string(), gender }
    }
}

/// Order-independent pairing of two conferences. No gender component; a
/// pairing met in either gender counts as met.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct ConfPairKey {
    pub first: String,
    pub second: String,
}

impl ConfPairKey {
    pub fn new(a: &str, b: &str) -> Self {
        let (first, second) = if a <= b { (a, b) } else { (b, a) };
        Self { first: first.to_string(), second: second.to_string() }
    }
}

/// Insertion-ordered set: O(log n) membership plus the stable first-seen
/// order whose 1-based ranks appear in badge text.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OrderedSet {
    items: Vec<String>,
    index: BTreeSet<String>,
}

impl OrderedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts and returns the new member's 1-based rank, or None when
    /// the value was already present.
    pub fn insert(&mut self, value: &str) -> Option<u32> {
        if self.index.contains(value) {
            return None;
        }
        self.index.insert(value.to_string());
        self.items.push(value.to_string());
        Some(self.items.len() as u32)
    }

    pub fn contains(&self, value: &str) -> bool {
        self.index.contains(value)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Members in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(String::as_str)
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.items.clone()
    }
}

/// One detected milestone, attached to the game that fired it. Each
/// variant carries only what its wording needs; the wire tag, the short
/// label and the tooltip are derived, never stored.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Badge {
    GameCount { count: u32 },
    D1Game { count: u32 },
    Streak { days: u32 },
    NewState { state: String, rank: u32 },
    VenueCount { venue: String, rank: u32 },
    VenueVisit { venue: String, visits: u32 },
    NewTeam { team: String, gender: Gender },
    D1Team { count: u32, gender: Gender },
    TeamVisit { team: String, gender: Gender, visits: u32 },
    NewConference { conference: String },
    ConferenceComplete { conference: String, gender: Gender },
    NewMatchup { away: String, home: String, gender: Gender },
    ConferenceMatchup { first: String, second: String },
    Transfer { player: String, from: Vec<String>, to: String },
}

impl Badge {
    /// Wire-stable tag consumed by the export and presentation layers.
    pub fn kind(&self) -> &'static str {
        match self {
            Badge::GameCount { .. } => "game-count",
            Badge::D1Game { .. } => "d1-game",
            Badge::Streak { .. } => "streak",
            Badge::NewState { .. } => "new-state",
            Badge::VenueCount { .. } => "venue-count",
            Badge::VenueVisit { .. } => "venue-visit",
            Badge::NewTeam { .. } => "new-team",
            Badge::D1Team { .. } => "d1-team",
            Badge::TeamVisit { .. } => "team-visit",
            Badge::NewConference { .. } => "new-conf",
            Badge::ConferenceComplete { .. } => "conf-complete",
            Badge::NewMatchup { .. } => "new-matchup",
            Badge::ConferenceMatchup { .. } => "conf-matchup",
            Badge::Transfer { .. } => "transfer",
        }
    }

    /// Short display label.
    pub fn text(&self) -> String {
        match self {
            Badge::GameCount { count } => format!("Game #{count}"),
            Badge::D1Game { count } => format!("D1 game #{count}"),
            Badge::Streak { days } => format!("{days}-day streak"),
            Badge::NewState { state, .. } => format!("New state: {state}"),
            Badge::VenueCount { rank, .. } => format!("Venue #{rank}"),
            Badge::VenueVisit { visits, .. } => format!("Visit #{visits}"),
            Badge::NewTeam { team, .. } => format!("New team: {team}"),
            Badge::D1Team { count, .. } => format!("D1 team #{count}"),
            Badge::TeamVisit { team, visits, .. } => format!("{team} x{visits}"),
            Badge::NewConference { conference } => format!("New conference: {conference}"),
            Badge::ConferenceComplete { conference, .. } => format!("{conference} complete"),
            Badge::NewMatchup { .. } => "New matchup".to_string(),
            Badge::ConferenceMatchup { .. } => "New conference matchup".to_string(),
            Badge::Transfer { player, .. } => format!("Transfer: {player}"),
        }
    }

    /// Tooltip wording with ordinals spelled out.
    pub fn title(&self) -> String {
        match self {
            Badge::GameCount { count } => {
                format!("{} game attended", ordinal(*count))
            }
            Badge::D1Game { count } => {
                format!("{} Division I game attended", ordinal(*count))
            }
            Badge::Streak { days } => {
                format!("Games on {days} consecutive days")
            }
            Badge::NewState { state, rank } => {
                format!("{state} is the {} state seen", ordinal(*rank))
            }
            Badge::VenueCount { venue, rank } => {
                format!("{venue} is the {} venue seen", ordinal(*rank))
            }
            Badge::VenueVisit { venue, visits } => {
                format!("{} game at {venue}", ordinal(*visits))
            }
            Badge::NewTeam { team, gender } => {
                format!("First {team} {} game", gender.label())
            }
            Badge::D1Team { count, gender } => {
                format!("{} Division I {} team seen", ordinal(*count), gender.label())
            }
            Badge::TeamVisit { team, gender, visits } => {
                format!("{} {team} {} game", ordinal(*visits), gender.label())
            }
            Badge::NewConference { conference } => {
                format!("First game with a {conference} team")
            }
            Badge::ConferenceComplete { conference, gender } => {
                format!("Every {conference} {} team seen", gender.label())
            }
            Badge::NewMatchup { away, home, gender } => {
                format!("First {away} at {home} {} meeting", gender.label())
            }
            Badge::ConferenceMatchup { first, second } => {
                format!("First {first} vs {second} game")
            }
            Badge::Transfer { player, from, to } => {
                format!("{player} ({to}) previously seen with {}", from.join(", "))
            }
        }
    }
}

/// 1 -> "1st", 2 -> "2nd", 11 -> "11th", 23 -> "23rd".
pub fn ordinal(n: u32) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{n}{suffix}")
}

/// One (team, gender)'s cumulative record across attended games.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WinLoss {
    pub wins: u32,
    pub losses: u32,
}

/// Progress toward seeing every member of one (conference, gender).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConfProgress {
    pub conference: String,
    pub gender: Gender,
    pub seen: u32,
    pub total: u32,
    pub complete: bool,
}

/// Roster-derived inputs the pass needs: completion denominators and the
/// top-division membership test. Sentinel groupings never appear here.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConferenceTable {
    /// Conference name to full member count. Completion requires a
    /// positive denominator.
    pub totals: BTreeMap<String, u32>,
    /// Canonical and aliased spellings of every top-division team.
    pub top_division: BTreeSet<String>,
}

impl ConferenceTable {
    /// No denominators, no membership. Completion and d1-team badges
    /// stay silent against this table.
    pub fn empty() -> Self {
        Self::default()
    }
}

/// Calendar-day streak bookkeeping.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StreakState {
    pub current: u32,
    pub last_date: Option<NaiveDate>,
    pub max: u32,
    pub history: Vec<u32>,
}

impl StreakState {
    /// Flushes the open run: finished streaks of length two or more go
    /// to the history and the max folds in regardless.
    pub fn close_open(&mut self) {
        if self.current >= 2 {
            self.history.push(self.current);
        }
        if self.current > self.max {
            self.max = self.current;
        }
    }
}

/// Everything accumulated across one pass. Derived purely from the
/// processed prefix of the stream; owned by a single engine value and
/// discarded with it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RollingState {
    pub games: u32,
    pub d1_games: u32,
    pub streak: StreakState,
    pub states: OrderedSet,
    pub venues: OrderedSet,
    pub venue_visits: BTreeMap<String, u32>,
    pub team_games: BTreeMap<TeamKey, u32>,
    pub team_records: BTreeMap<TeamKey, WinLoss>,
    pub d1_teams_seen: BTreeMap<Gender, BTreeSet<String>>,
    pub conf_teams_seen: BTreeMap<ConfKey, BTreeSet<String>>,
    /// Distinct (team, gender) introductions per conference, both genders
    /// pooled.
    pub conf_team_counts: BTreeMap<String, u32>,
    pub confs_seen: BTreeSet<String>,
    pub conf_venues: BTreeSet<ConfVenueKey>,
    pub conf_complete: BTreeSet<ConfKey>,
    pub matchups_seen: BTreeSet<MatchupKey>,
    pub conf_matchups: BTreeMap<ConfPairKey, u32>,
    pub player_schools: BTreeMap<PlayerKey, BTreeSet<String>>,
    pub transfers: u32,
}

impl RollingState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// End-of-pass snapshot of the rolling state, flattened for export.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Summary {
    pub games: u32,
    pub d1_games: u32,
    pub current_streak: u32,
    pub max_streak: u32,
    pub streak_history: Vec<u32>,
    /// First-seen order.
    pub states: Vec<String>,
    /// First-seen order.
    pub venues: Vec<String>,
    pub venue_visits: BTreeMap<String, u32>,
    pub team_games: BTreeMap<TeamKey, u32>,
    pub team_records: BTreeMap<TeamKey, WinLoss>,
    /// Distinct top-division teams seen, per gender.
    pub d1_teams: BTreeMap<Gender, u32>,
    pub conference_progress: Vec<ConfProgress>,
    /// Distinct (team, gender) introductions per conference, both genders
    /// pooled.
    pub conference_teams: BTreeMap<String, u32>,
    /// Distinct venues that hosted each conference's teams.
    pub conference_venues: BTreeMap<String, u32>,
    pub distinct_matchups: u32,
    /// Games per conference pairing, every meeting counted.
    pub conference_matchups: BTreeMap<ConfPairKey, u32>,
    pub players_tracked: u32,
    pub transfers: u32,
}

/// Output of one pass over the stream.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MilestoneReport {
    /// Game id to badges in rule-firing order. Every processed game has
    /// an entry, possibly empty.
    pub badges_by_game: BTreeMap<String, Vec<Badge>>,
    /// Stream order of the processed games; a game's position plus one
    /// is its game number.
    pub game_order: Vec<String>,
    pub summary: Summary,
}

impl MilestoneReport {
    pub fn badges_for(&self, game_id: &str) -> &[Badge] {
        self.badges_by_game.get(game_id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn total_badges(&self) -> usize {
        self.badges_by_game.values().map(Vec::len).sum()
    }
}
