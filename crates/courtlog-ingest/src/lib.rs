//! courtlog-ingest
//!
//! JSON loading for the attended-games dataset.
//!
//! Input format
//!
//! Both files are plain JSON arrays as written by the upstream box-score
//! parser:
//! - games: array of objects with `GameID`, `DateSort`, `Gender`,
//!   `Division`, `Away Team`, `Away Score`, `Home Team`, `Home Score`,
//!   `Venue`, `City`, `State`, optional `TimeSort`.
//! - appearances: array of objects with `GameID`, `Player ID`, `Player`,
//!   `Team`, `PreviousSchools`.
//!
//! Unknown keys are ignored and missing keys default, so newer parser
//! output loads against older readers. Everything is read whole into
//! memory; the downstream pass needs random access anyway.

use std::fs;
use std::path::{Path, PathBuf};

use courtlog_schemas::{AppearanceRecord, GameRecord};

/// Loader errors are small, explicit, and test-friendly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    Empty { path: PathBuf },
    Io { path: PathBuf, detail: String },
    Parse { path: PathBuf, detail: String },
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadError::Empty { path } => write!(f, "empty input: {}", path.display()),
            LoadError::Io { path, detail } => {
                write!(f, "failed to read {}: {}", path.display(), detail)
            }
            LoadError::Parse { path, detail } => {
                write!(f, "invalid JSON in {}: {}", path.display(), detail)
            }
        }
    }
}

impl std::error::Error for LoadError {}

/// Load game records from a JSON array file on disk.
pub fn load_games(path: impl AsRef<Path>) -> Result<Vec<GameRecord>, LoadError> {
    load_array(path.as_ref())
}

/// Load player-appearance records from a JSON array file on disk.
pub fn load_appearances(path: impl AsRef<Path>) -> Result<Vec<AppearanceRecord>, LoadError> {
    load_array(path.as_ref())
}

fn load_array<T: serde::de::DeserializeOwned>(path: &Path) -> Result<Vec<T>, LoadError> {
    let raw = fs::read_to_string(path).map_err(|e| LoadError::Io {
        path: path.to_path_buf(),
        detail: e.to_string(),
    })?;
    // Strip a UTF-8 BOM if the upstream tool left one behind.
    let raw = raw.trim_start_matches('\u{feff}');
    if raw.trim().is_empty() {
        return Err(LoadError::Empty { path: path.to_path_buf() });
    }
    serde_json::from_str(raw).map_err(|e| LoadError::Parse {
        path: path.to_path_buf(),
        detail: e.to_string(),
    })
}
