//! Doubleheader tie-break order.
//!
//! When several games share a date the stream order decides which one
//! claims a shared first. Tip times order the day when both games carry
//! one; otherwise the women's game goes first, then the lower game id.

use courtlog_engine::*;

fn at(id: &str, gender: Gender, venue: &str) -> GameEvent {
    let mut g = GameEvent::new(id, "20250201", gender, format!("Away-{id}"), format!("Home-{id}"));
    g.venue = venue.to_string();
    g
}

fn venue_rank(report: &MilestoneReport, game_id: &str) -> Option<u32> {
    report.badges_for(game_id).iter().find_map(|b| match b {
        Badge::VenueCount { rank, .. } => Some(*rank),
        _ => None,
    })
}

#[test]
fn womens_half_of_the_doubleheader_claims_the_first() {
    // Same arena, same day, no tip times: the women's game wins the tie.
    let men = at("a-men", Gender::M, "Gainbridge Fieldhouse");
    let women = at("z-women", Gender::W, "Gainbridge Fieldhouse");
    let report = MilestoneEngine::new(ConferenceTable::empty()).run(&[men, women]);

    assert_eq!(report.game_order, vec!["z-women", "a-men"]);
    assert_eq!(venue_rank(&report, "z-women"), Some(1));
    assert_eq!(venue_rank(&report, "a-men"), None, "second visit, not a new venue");
    assert!(report
        .badges_for("a-men")
        .iter()
        .any(|b| matches!(b, Badge::VenueVisit { visits: 2, .. })));
}

#[test]
fn tip_times_outrank_gender() {
    let mut men_noon = at("m1", Gender::M, "Pinnacle Bank Arena");
    men_noon.time_sort = Some("1200".to_string());
    let mut women_evening = at("w1", Gender::W, "Pinnacle Bank Arena");
    women_evening.time_sort = Some("1930".to_string());
    let report = MilestoneEngine::new(ConferenceTable::empty()).run(&[women_evening, men_noon]);

    assert_eq!(report.game_order, vec!["m1", "w1"]);
    assert_eq!(venue_rank(&report, "m1"), Some(1));
}

#[test]
fn missing_time_falls_back_to_gender_then_id() {
    // One timed, one not: the pair cannot be ordered by time, so the
    // gender rule applies.
    let mut men_timed = at("m1", Gender::M, "Allen Fieldhouse");
    men_timed.time_sort = Some("1100".to_string());
    let women_untimed = at("w1", Gender::W, "Allen Fieldhouse");
    let report = MilestoneEngine::new(ConferenceTable::empty()).run(&[men_timed, women_untimed]);

    assert_eq!(report.game_order, vec!["w1", "m1"]);

    // Same gender, no usable times: lexicographic id decides.
    let a = at("b2", Gender::M, "Hilton Coliseum");
    let b = at("a1", Gender::M, "Hilton Coliseum");
    let report = MilestoneEngine::new(ConferenceTable::empty()).run(&[a, b]);
    assert_eq!(report.game_order, vec!["a1", "b2"]);
}

#[test]
fn shared_first_is_stable_across_reruns() {
    let men = at("a-men", Gender::M, "Breslin Center");
    let women = at("z-women", Gender::W, "Breslin Center");
    let forward = MilestoneEngine::new(ConferenceTable::empty()).run(&[men.clone(), women.clone()]);
    let backward = MilestoneEngine::new(ConferenceTable::empty()).run(&[women, men]);

    assert_eq!(forward.badges_by_game, backward.badges_by_game);
    assert_eq!(forward.game_order, backward.game_order);
}
