//! courtlog-export
//!
//! Artifact writer for one milestone pass. Every engine-derived byte is
//! deterministic; only manifest metadata (export id, timestamp) varies
//! between runs over the same dataset.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use uuid::Uuid;

use courtlog_engine::{MilestoneReport, Summary};
use courtlog_schemas::GameRecord;

pub const SCHEMA_VERSION: i32 = 1;

/// One badge as the presentation layer consumes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BadgeRow {
    pub game_id: String,
    /// Position of the game in stream order, 1-based.
    pub game_number: u32,
    #[serde(rename = "type")]
    pub kind: String,
    pub text: String,
    pub title: String,
}

/// summary.json payload. Flattened from the engine summary; per-team
/// tables live in the CSV artifacts instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryDoc {
    pub games: u32,
    pub d1_games: u32,
    pub current_streak: u32,
    pub max_streak: u32,
    pub streak_history: Vec<u32>,
    pub states: Vec<String>,
    pub venues: Vec<String>,
    /// Distinct top-division teams seen, keyed "W"/"M".
    pub d1_teams: BTreeMap<String, u32>,
    pub conferences: Vec<ConfProgressRow>,
    /// Distinct (team, gender) introductions per conference, both genders
    /// pooled.
    pub conference_teams: BTreeMap<String, u32>,
    pub conference_venues: BTreeMap<String, u32>,
    pub distinct_matchups: u32,
    pub conference_matchups: Vec<ConfMatchupRow>,
    pub players_tracked: u32,
    pub transfers: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfProgressRow {
    pub conference: String,
    pub gender: String,
    pub seen: u32,
    pub total: u32,
    pub complete: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfMatchupRow {
    pub first: String,
    pub second: String,
    pub games: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportManifest {
    pub schema_version: i32,
    pub export_id: Uuid,
    pub created_at_utc: DateTime<Utc>,
    /// SHA-256 over the canonical encoding of the input game records.
    pub dataset_fingerprint: String,
    pub counts: ExportCounts,
    pub artifacts: ArtifactList,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportCounts {
    pub games: u32,
    pub badges: u32,
    pub teams: u32,
    pub venues: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtifactList {
    pub badges_json: String,
    pub summary_json: String,
    pub team_records_csv: String,
    pub streaks_csv: String,
    pub manifest_json: String,
}

pub struct ExportResult {
    pub export_dir: PathBuf,
    pub manifest_path: PathBuf,
}

/// Badge rows in stream order, rule order within a game.
pub fn badge_rows(report: &MilestoneReport) -> Vec<BadgeRow> {
    let mut rows = Vec::new();
    for (i, game_id) in report.game_order.iter().enumerate() {
        for badge in report.badges_for(game_id) {
            rows.push(BadgeRow {
                game_id: game_id.clone(),
                game_number: (i + 1) as u32,
                kind: badge.kind().to_string(),
                text: badge.text(),
                title: badge.title(),
            });
        }
    }
    rows
}

pub fn summary_doc(summary: &Summary) -> SummaryDoc {
    SummaryDoc {
        games: summary.games,
        d1_games: summary.d1_games,
        current_streak: summary.current_streak,
        max_streak: summary.max_streak,
        streak_history: summary.streak_history.clone(),
        states: summary.states.clone(),
        venues: summary.venues.clone(),
        d1_teams: summary
            .d1_teams
            .iter()
            .map(|(g, n)| (g.as_str().to_string(), *n))
            .collect(),
        conferences: summary
            .conference_progress
            .iter()
            .map(|p| ConfProgressRow {
                conference: p.conference.clone(),
                gender: p.gender.as_str().to_string(),
                seen: p.seen,
                total: p.total,
                complete: p.complete,
            })
            .collect(),
        conference_teams: summary.conference_teams.clone(),
        conference_venues: summary.conference_venues.clone(),
        distinct_matchups: summary.distinct_matchups,
        conference_matchups: summary
            .conference_matchups
            .iter()
            .map(|(pair, games)| ConfMatchupRow {
                first: pair.first.clone(),
                second: pair.second.clone(),
                games: *games,
            })
            .collect(),
        players_tracked: summary.players_tracked,
        transfers: summary.transfers,
    }
}

/// Canonical dataset hash: records sorted by game id, serialized with a
/// fixed field order, SHA-256, hex. Input file ordering does not matter.
pub fn dataset_fingerprint(games: &[GameRecord]) -> Result<String> {
    let mut sorted: Vec<&GameRecord> = games.iter().collect();
    sorted.sort_by(|a, b| a.game_id.cmp(&b.game_id));
    let canonical = serde_json::to_string(&sorted).context("serialize dataset for fingerprint")?;
    Ok(sha256_hex(canonical.as_bytes()))
}

/// Writes one export directory `<exports_root>/<export_id>/` containing
/// badges.json, summary.json, team_records.csv, streaks.csv and, last,
/// manifest.json. A manifest on disk therefore implies the other
/// artifacts are complete.
pub fn write_export(
    exports_root: &Path,
    report: &MilestoneReport,
    games: &[GameRecord],
) -> Result<ExportResult> {
    let export_id = Uuid::new_v4();
    let export_dir = exports_root.join(export_id.to_string());
    fs::create_dir_all(&export_dir)
        .with_context(|| format!("create export dir failed: {}", export_dir.display()))?;

    let rows = badge_rows(report);
    write_json(&export_dir.join("badges.json"), &rows)?;
    write_json(&export_dir.join("summary.json"), &summary_doc(&report.summary))?;
    write_team_records_csv(&export_dir.join("team_records.csv"), &report.summary)?;
    write_streaks_csv(&export_dir.join("streaks.csv"), &report.summary)?;

    let manifest = ExportManifest {
        schema_version: SCHEMA_VERSION,
        export_id,
        created_at_utc: Utc::now(),
        dataset_fingerprint: dataset_fingerprint(games)?,
        counts: ExportCounts {
            games: report.game_order.len() as u32,
            badges: rows.len() as u32,
            teams: report.summary.team_games.len() as u32,
            venues: report.summary.venues.len() as u32,
        },
        artifacts: ArtifactList {
            badges_json: "badges.json".to_string(),
            summary_json: "summary.json".to_string(),
            team_records_csv: "team_records.csv".to_string(),
            streaks_csv: "streaks.csv".to_string(),
            manifest_json: "manifest.json".to_string(),
        },
    };
    let manifest_path = export_dir.join("manifest.json");
    write_json(&manifest_path, &manifest)?;

    Ok(ExportResult { export_dir, manifest_path })
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)
        .with_context(|| format!("serialize failed: {}", path.display()))?;
    fs::write(path, format!("{json}\n"))
        .with_context(|| format!("write failed: {}", path.display()))?;
    Ok(())
}

#[derive(Serialize)]
struct TeamRecordRow<'a> {
    team: &'a str,
    gender: &'a str,
    games: u32,
    wins: u32,
    losses: u32,
}

fn write_team_records_csv(path: &Path, summary: &Summary) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)
        .with_context(|| format!("open csv failed: {}", path.display()))?;
    for (key, games) in &summary.team_games {
        let record = summary.team_records.get(key).copied().unwrap_or_default();
        wtr.serialize(TeamRecordRow {
            team: &key.team,
            gender: key.gender.as_str(),
            games: *games,
            wins: record.wins,
            losses: record.losses,
        })
        .with_context(|| format!("write csv row failed: {}", path.display()))?;
    }
    wtr.flush().with_context(|| format!("flush csv failed: {}", path.display()))?;
    Ok(())
}

#[derive(Serialize)]
struct StreakRow {
    days: u32,
}

fn write_streaks_csv(path: &Path, summary: &Summary) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)
        .with_context(|| format!("open csv failed: {}", path.display()))?;
    for days in &summary.streak_history {
        wtr.serialize(StreakRow { days: *days })
            .with_context(|| format!("write csv row failed: {}", path.display()))?;
    }
    wtr.flush().with_context(|| format!("flush csv failed: {}", path.display()))?;
    Ok(())
}

fn sha256_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    let out = hasher.finalize();
    hex::encode(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use courtlog_engine::{ConferenceTable, GameEvent, Gender, MilestoneEngine};

    fn small_report() -> (MilestoneReport, Vec<GameRecord>) {
        let mut g1 = GameEvent::new("g1", "20240101", Gender::M, "TeamX", "TeamY");
        g1.venue = "Arena1".to_string();
        let mut g2 = GameEvent::new("g2", "20240102", Gender::M, "TeamY", "TeamX");
        g2.venue = "Arena2".to_string();
        let report = MilestoneEngine::new(ConferenceTable::empty()).run(&[g1, g2]);

        let records = vec![
            GameRecord { game_id: "g1".to_string(), ..GameRecord::default() },
            GameRecord { game_id: "g2".to_string(), ..GameRecord::default() },
        ];
        (report, records)
    }

    #[test]
    fn badge_rows_number_games_in_stream_order() {
        let (report, _) = small_report();
        let rows = badge_rows(&report);
        assert!(!rows.is_empty());
        assert!(rows.iter().all(|r| r.game_number >= 1 && r.game_number <= 2));
        assert_eq!(rows[0].game_id, "g1");
        assert_eq!(rows[0].game_number, 1);
        let first_kinds: Vec<&str> = rows
            .iter()
            .filter(|r| r.game_id == "g1")
            .map(|r| r.kind.as_str())
            .collect();
        assert_eq!(first_kinds, vec!["game-count", "venue-count", "new-team", "new-team", "new-matchup"]);
    }

    #[test]
    fn badge_row_json_uses_presentation_keys() {
        let row = BadgeRow {
            game_id: "g1".to_string(),
            game_number: 7,
            kind: "venue-count".to_string(),
            text: "Venue #5".to_string(),
            title: "X is the 5th venue seen".to_string(),
        };
        let json = serde_json::to_string(&row).unwrap();
        assert!(json.contains(r#""gameId":"g1""#));
        assert!(json.contains(r#""gameNumber":7"#));
        assert!(json.contains(r#""type":"venue-count""#));
    }

    #[test]
    fn fingerprint_ignores_input_order_but_not_content() {
        let (_, records) = small_report();
        let mut reversed = records.clone();
        reversed.reverse();
        let a = dataset_fingerprint(&records).unwrap();
        let b = dataset_fingerprint(&reversed).unwrap();
        assert_eq!(a, b);

        let mut tweaked = records.clone();
        tweaked[0].venue = "Somewhere".to_string();
        let c = dataset_fingerprint(&tweaked).unwrap();
        assert_ne!(a, c);
        assert_eq!(a.len(), 64, "sha-256 hex digest");
    }

    #[test]
    fn write_export_produces_all_artifacts() {
        let (report, records) = small_report();
        let root = tempfile::tempdir().unwrap();
        let result = write_export(root.path(), &report, &records).unwrap();

        for name in [
            "badges.json",
            "summary.json",
            "team_records.csv",
            "streaks.csv",
            "manifest.json",
        ] {
            assert!(result.export_dir.join(name).exists(), "missing artifact {name}");
        }

        let manifest: ExportManifest =
            serde_json::from_str(&fs::read_to_string(&result.manifest_path).unwrap()).unwrap();
        assert_eq!(manifest.schema_version, SCHEMA_VERSION);
        assert_eq!(manifest.counts.games, 2);
        assert_eq!(manifest.counts.teams, 2);
        assert_eq!(manifest.counts.venues, 2);

        let rows: Vec<BadgeRow> = serde_json::from_str(
            &fs::read_to_string(result.export_dir.join("badges.json")).unwrap(),
        )
        .unwrap();
        assert_eq!(rows.len() as u32, manifest.counts.badges);

        let csv_text = fs::read_to_string(result.export_dir.join("team_records.csv")).unwrap();
        let mut lines = csv_text.lines();
        assert_eq!(lines.next(), Some("team,gender,games,wins,losses"));
        assert_eq!(lines.next(), Some("TeamX,M,2,0,0"));
    }

    #[test]
    fn summary_doc_keys_gender_by_marker() {
        let (report, _) = small_report();
        let doc = summary_doc(&report.summary);
        assert_eq!(doc.games, 2);
        assert_eq!(doc.venues, vec!["Arena1", "Arena2"]);
        assert!(doc.d1_teams.is_empty(), "no roster, no top-division counts");
    }
}
