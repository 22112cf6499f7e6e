//! Count-threshold boundaries.
//!
//! team-visit fires exactly at set members (the 5th appearance, never
//! the 4th or 6th), venue-visit marks every return trip, and the
//! top-division team counter badges at multiples of five.

use courtlog_engine::*;

fn visit(id: u32, date: String, away: &str, home: &str) -> GameEvent {
    GameEvent::new(format!("g{id:03}"), date, Gender::M, away, home)
}

fn day(n: u32) -> String {
    // Spread across months to keep every date valid.
    format!("2025{:02}{:02}", 1 + n / 27, 1 + n % 27)
}

#[test]
fn team_visit_fires_on_fifth_appearance_only() {
    // Purdue appears in every game against a rotating opponent.
    let games: Vec<GameEvent> = (0..7)
        .map(|i| visit(i, day(i), "Purdue", &format!("Opp{i}")))
        .collect();
    let report = MilestoneEngine::new(ConferenceTable::empty()).run(&games);

    let visits_fired: Vec<u32> = report
        .game_order
        .iter()
        .flat_map(|id| report.badges_for(id))
        .filter_map(|b| match b {
            Badge::TeamVisit { team, visits, .. } if team == "Purdue" => Some(*visits),
            _ => None,
        })
        .collect();
    assert_eq!(visits_fired, vec![5], "only the 5th appearance is a set member");

    let key = TeamKey::new("Purdue", Gender::M);
    assert_eq!(report.summary.team_games.get(&key), Some(&7));
}

#[test]
fn venue_visit_marks_every_return() {
    let games: Vec<GameEvent> = (0..4)
        .map(|i| {
            let mut g = visit(i, day(i), &format!("A{i}"), &format!("B{i}"));
            g.venue = "Hinkle Fieldhouse".to_string();
            g
        })
        .collect();
    let report = MilestoneEngine::new(ConferenceTable::empty()).run(&games);

    let visits_fired: Vec<u32> = report
        .game_order
        .iter()
        .flat_map(|id| report.badges_for(id))
        .filter_map(|b| match b {
            Badge::VenueVisit { visits, .. } => Some(*visits),
            _ => None,
        })
        .collect();
    assert_eq!(visits_fired, vec![2, 3, 4], "the first sighting badges as venue-count instead");
}

#[test]
fn d1_team_counter_badges_at_multiples_of_five() {
    let mut table = ConferenceTable::empty();
    for i in 0..20 {
        table.top_division.insert(format!("Team{i:02}"));
    }
    // Ten games, two fresh top-division teams each: counter hits 2, 4,
    // 6, ... 20, crossing 5 inside game 3 and 10 inside game 5.
    let games: Vec<GameEvent> = (0..10)
        .map(|i| {
            visit(
                i,
                day(i),
                &format!("Team{:02}", 2 * i),
                &format!("Team{:02}", 2 * i + 1),
            )
        })
        .collect();
    let report = MilestoneEngine::new(table).run(&games);

    let counts_fired: Vec<u32> = report
        .game_order
        .iter()
        .flat_map(|id| report.badges_for(id))
        .filter_map(|b| match b {
            Badge::D1Team { count, .. } => Some(*count),
            _ => None,
        })
        .collect();
    assert_eq!(counts_fired, vec![5, 10, 15, 20]);
    assert_eq!(report.summary.d1_teams.get(&Gender::M), Some(&20));
}

#[test]
fn game_count_set_skips_between_members() {
    let games: Vec<GameEvent> = (0..26)
        .map(|i| visit(i, day(i), &format!("A{i}"), &format!("B{i}")))
        .collect();
    let report = MilestoneEngine::new(ConferenceTable::empty()).run(&games);

    let counts_fired: Vec<u32> = report
        .game_order
        .iter()
        .flat_map(|id| report.badges_for(id))
        .filter_map(|b| match b {
            Badge::GameCount { count } => Some(*count),
            _ => None,
        })
        .collect();
    assert_eq!(counts_fired, vec![1, 10, 25]);
}
