//! `courtlog compute` handler.

use anyhow::{Context, Result};
use std::path::Path;
use tracing::debug;

use crate::commands::{load_dataset, run_engine};

pub fn execute(
    games: String,
    players: Option<String>,
    rosters: Option<String>,
    out: String,
) -> Result<()> {
    let ds = load_dataset(&games, players.as_deref(), rosters.as_deref())?;
    let report = run_engine(&ds);
    debug!(
        "pass complete: {} games, {} badges",
        report.game_order.len(),
        report.total_badges()
    );

    let result = courtlog_export::write_export(Path::new(&out), &report, &ds.games)
        .with_context(|| format!("write export failed under {}", out))?;

    println!("compute_ok=true");
    println!("games={}", report.game_order.len());
    println!("badges={}", report.total_badges());
    println!("transfers={}", report.summary.transfers);
    println!("export_dir={}", result.export_dir.display());
    println!("manifest={}", result.manifest_path.display());

    Ok(())
}
