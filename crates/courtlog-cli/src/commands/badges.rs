//! `courtlog badges` handler.

use anyhow::Result;

use crate::commands::{load_dataset, run_engine};

pub fn execute(
    games: String,
    players: Option<String>,
    rosters: Option<String>,
    game: Option<String>,
) -> Result<()> {
    let ds = load_dataset(&games, players.as_deref(), rosters.as_deref())?;
    let report = run_engine(&ds);
    let rows = courtlog_export::badge_rows(&report);

    let mut printed = 0u32;
    for row in &rows {
        if let Some(filter) = game.as_deref() {
            if row.game_id != filter {
                continue;
            }
        }
        println!(
            "game_number={} game_id={} type={} title={}",
            row.game_number, row.game_id, row.kind, row.title
        );
        printed += 1;
    }
    println!("badges_printed={}", printed);

    Ok(())
}
