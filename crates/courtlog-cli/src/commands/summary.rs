//! `courtlog summary` handler.

use anyhow::{Context, Result};

use crate::commands::{load_dataset, run_engine};

pub fn execute(
    games: String,
    players: Option<String>,
    rosters: Option<String>,
    json: bool,
) -> Result<()> {
    let ds = load_dataset(&games, players.as_deref(), rosters.as_deref())?;
    let report = run_engine(&ds);
    let s = &report.summary;

    if json {
        let doc = courtlog_export::summary_doc(s);
        let out = serde_json::to_string_pretty(&doc).context("serialize summary failed")?;
        println!("{out}");
        return Ok(());
    }

    println!("games={}", s.games);
    println!("d1_games={}", s.d1_games);
    println!("current_streak={}", s.current_streak);
    println!("max_streak={}", s.max_streak);
    println!("states={}", s.states.len());
    println!("venues={}", s.venues.len());
    println!("teams={}", s.team_games.len());
    for (gender, n) in &s.d1_teams {
        println!("d1_teams_{}={}", gender.as_str(), n);
    }
    println!("distinct_matchups={}", s.distinct_matchups);
    println!("players_tracked={}", s.players_tracked);
    println!("transfers={}", s.transfers);

    for p in &s.conference_progress {
        println!(
            "conference={} gender={} seen={} total={} complete={}",
            p.conference,
            p.gender.as_str(),
            p.seen,
            p.total,
            p.complete
        );
    }

    Ok(())
}
