//! Transfer detection and prior-school seeding.
//!
//! A transfer badge needs two things: a known prior school and an
//! appearance for a different team. Prior-school claims from the
//! biography feed count only when an independent appearance record
//! shows the player on that roster strictly before the claiming game.

use courtlog_engine::*;

fn game_with(id: &str, date: &str, away: &str, home: &str, players: Vec<PlayerEvent>) -> GameEvent {
    let mut g = GameEvent::new(id, date, Gender::M, away, home);
    g.players = players;
    g
}

fn appearance(id: &str, name: &str, team: &str, prev: &[&str]) -> PlayerEvent {
    PlayerEvent {
        key: PlayerKey::Id(id.to_string()),
        name: name.to_string(),
        team: team.to_string(),
        previous_schools: prev.iter().map(|s| s.to_string()).collect(),
    }
}

fn transfer_badges(report: &MilestoneReport) -> Vec<(String, String)> {
    report
        .game_order
        .iter()
        .flat_map(|id| report.badges_for(id))
        .filter_map(|b| match b {
            Badge::Transfer { player, to, .. } => Some((player.clone(), to.clone())),
            _ => None,
        })
        .collect()
}

#[test]
fn observed_team_change_is_a_transfer() {
    let games = vec![
        game_with("g1", "20240110", "Akron", "Toledo", vec![appearance("p1", "Jo Hart", "Akron", &[])]),
        game_with("g2", "20250110", "Dayton", "Xavier", vec![appearance("p1", "Jo Hart", "Dayton", &[])]),
    ];
    let report = MilestoneEngine::new(ConferenceTable::empty()).run(&games);

    assert_eq!(transfer_badges(&report), vec![("Jo Hart".to_string(), "Dayton".to_string())]);
    let badge = report
        .badges_for("g2")
        .iter()
        .find_map(|b| match b {
            Badge::Transfer { from, .. } => Some(from.clone()),
            _ => None,
        })
        .unwrap();
    assert_eq!(badge, vec!["Akron"]);
    assert_eq!(report.summary.transfers, 1);
    assert_eq!(report.summary.players_tracked, 1);
}

#[test]
fn biography_claim_alongside_observed_history_still_transfers() {
    // The Kent State stop is both claimed and observed; the observed
    // record is what carries the badge.
    let games = vec![
        game_with("g1", "20240110", "Kent State", "Ball State", vec![appearance("p2", "Max Cole", "Kent State", &[])]),
        game_with(
            "g2",
            "20250110",
            "Butler",
            "Xavier",
            vec![appearance("p2", "Max Cole", "Butler", &["Kent State"])],
        ),
    ];
    let report = MilestoneEngine::new(ConferenceTable::empty()).run(&games);
    assert_eq!(transfer_badges(&report), vec![("Max Cole".to_string(), "Butler".to_string())]);
}

#[test]
fn unverifiable_claim_does_not_seed() {
    // Nobody ever saw p3 at the claimed school inside this dataset.
    let games = vec![game_with(
        "g1",
        "20250110",
        "Butler",
        "Xavier",
        vec![appearance("p3", "Sam Reed", "Butler", &["Duke"])],
    )];
    let report = MilestoneEngine::new(ConferenceTable::empty()).run(&games);
    assert!(transfer_badges(&report).is_empty());
    assert_eq!(report.summary.players_tracked, 1);
}

#[test]
fn claim_verified_only_by_later_games_does_not_seed() {
    // The verifying appearance happens after the claiming game, so it
    // cannot justify the claim at seeding time.
    let games = vec![
        game_with(
            "g1",
            "20240110",
            "Butler",
            "Xavier",
            vec![appearance("p4", "Lee Park", "Butler", &["Evansville"])],
        ),
        game_with("g2", "20250110", "Evansville", "Drake", vec![appearance("p4", "Lee Park", "Evansville", &[])]),
    ];
    let report = MilestoneEngine::new(ConferenceTable::empty()).run(&games);

    // The move Butler -> Evansville is itself an observed change.
    assert_eq!(transfer_badges(&report), vec![("Lee Park".to_string(), "Evansville".to_string())]);
}

#[test]
fn nameless_ids_and_idless_names_stay_distinct() {
    let by_name = PlayerEvent {
        key: PlayerKey::Name("Jo Hart".to_string()),
        name: "Jo Hart".to_string(),
        team: "Akron".to_string(),
        previous_schools: vec![],
    };
    let games = vec![
        game_with("g1", "20240110", "Akron", "Toledo", vec![by_name]),
        game_with("g2", "20250110", "Dayton", "Xavier", vec![appearance("p9", "Jo Hart", "Dayton", &[])]),
    ];
    let report = MilestoneEngine::new(ConferenceTable::empty()).run(&games);

    // Different keys: the id-bearing appearance is a fresh player, not a
    // transfer of the name-keyed one.
    assert!(transfer_badges(&report).is_empty());
    assert_eq!(report.summary.players_tracked, 2);
}

#[test]
fn repeat_transfers_accumulate_known_schools() {
    let games = vec![
        game_with("g1", "20230110", "Akron", "Toledo", vec![appearance("p5", "Ty Moss", "Akron", &[])]),
        game_with("g2", "20240110", "Dayton", "Xavier", vec![appearance("p5", "Ty Moss", "Dayton", &[])]),
        game_with("g3", "20250110", "Butler", "Drake", vec![appearance("p5", "Ty Moss", "Butler", &[])]),
    ];
    let report = MilestoneEngine::new(ConferenceTable::empty()).run(&games);

    let badges = transfer_badges(&report);
    assert_eq!(badges.len(), 2);
    let third = report
        .badges_for("g3")
        .iter()
        .find_map(|b| match b {
            Badge::Transfer { from, .. } => Some(from.clone()),
            _ => None,
        })
        .unwrap();
    assert_eq!(third, vec!["Akron", "Dayton"], "both prior stops are named");
}
