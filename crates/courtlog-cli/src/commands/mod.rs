//! Command handler modules for the courtlog binary.
//!
//! Dataset loading shared by every command lives here.
//! Command-specific output lives in the submodules.

pub mod badges;
pub mod compute;
pub mod summary;

use anyhow::{Context, Result};
use std::path::Path;
use tracing::{debug, warn};

use courtlog_engine::{normalize, ConferenceTable, MilestoneEngine, MilestoneReport};
use courtlog_lookup::TeamDirectory;
use courtlog_schemas::{AppearanceRecord, GameRecord};

pub struct Dataset {
    pub games: Vec<GameRecord>,
    pub appearances: Vec<AppearanceRecord>,
    pub directory: TeamDirectory,
}

/// Loads the input files every command needs.
///
/// The games file is required. A players file that does not exist is
/// tolerated (transfer tracking just stays empty); a players file that
/// exists but fails to parse is still an error.
pub fn load_dataset(
    games: &str,
    players: Option<&str>,
    rosters: Option<&str>,
) -> Result<Dataset> {
    let games_path = Path::new(games);
    let games = courtlog_ingest::load_games(games_path)
        .with_context(|| format!("load games failed: {}", games_path.display()))?;
    debug!("loaded {} game records", games.len());

    let appearances = match players {
        Some(p) if Path::new(p).exists() => {
            let path = Path::new(p);
            courtlog_ingest::load_appearances(path)
                .with_context(|| format!("load players failed: {}", path.display()))?
        }
        Some(p) => {
            warn!("players file not found, skipping transfer data: {}", p);
            Vec::new()
        }
        None => Vec::new(),
    };
    debug!("loaded {} appearance records", appearances.len());

    let directory = match rosters {
        Some(r) => {
            let path = Path::new(r);
            TeamDirectory::from_roster_file(path)
                .with_context(|| format!("load rosters failed: {}", path.display()))?
        }
        None => TeamDirectory::builtin(),
    };

    Ok(Dataset {
        games,
        appearances,
        directory,
    })
}

/// Normalizes the dataset and runs the milestone pass.
pub fn run_engine(ds: &Dataset) -> MilestoneReport {
    let events = normalize(&ds.games, &ds.appearances, &ds.directory);
    debug!("normalized {} game events", events.len());
    let table = ConferenceTable::from_directory(&ds.directory);
    MilestoneEngine::new(table).run(&events)
}
