use serde::{Deserialize, Serialize};

/// One completed contest as emitted by the upstream box-score parser.
/// Field keys match the parser's JSON output; everything except the id is
/// optional in the wild and defaults to empty/absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    #[serde(rename = "GameID", default)]
    pub game_id: String,
    /// Fixed-width YYYYMMDD; empty or malformed values are tolerated.
    #[serde(rename = "DateSort", default)]
    pub date_sort: String,
    /// Finer ordering key for multi-game days; only present when the
    /// upstream source had tip-off times.
    #[serde(rename = "TimeSort", default)]
    pub time_sort: Option<String>,
    /// "M" or "W".
    #[serde(rename = "Gender", default)]
    pub gender: String,
    #[serde(rename = "Division", default)]
    pub division: String,
    #[serde(rename = "Away Team", default)]
    pub away_team: String,
    #[serde(rename = "Away Score", default)]
    pub away_score: Option<u32>,
    #[serde(rename = "Home Team", default)]
    pub home_team: String,
    #[serde(rename = "Home Score", default)]
    pub home_score: Option<u32>,
    #[serde(rename = "Venue", default)]
    pub venue: String,
    #[serde(rename = "City", default)]
    pub city: String,
    #[serde(rename = "State", default)]
    pub state: String,
}

/// One player's participation in one game, joinable to `GameRecord` by id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppearanceRecord {
    #[serde(rename = "GameID", default)]
    pub game_id: String,
    /// Stable id from the upstream source; absent for players it could not
    /// resolve, in which case the name carries identity.
    #[serde(rename = "Player ID", default)]
    pub player_id: Option<String>,
    #[serde(rename = "Player", default)]
    pub player: String,
    #[serde(rename = "Team", default)]
    pub team: String,
    /// Prior schools from the biography lookup, best-effort.
    #[serde(rename = "PreviousSchools", default)]
    pub previous_schools: Vec<String>,
}
