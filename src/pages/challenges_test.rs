use super::*;

fn challenge(id: &str, target: i64) -> Challenge {
    Challenge {
        id: id.into(),
        title: "Plante 20 mudas".into(),
        description: "Plante mudas nativas na sua região".into(),
        challenge_type: "planting".into(),
        target_value: target,
        points_reward: Some(50),
    }
}

fn progress(challenge_id: &str, current: Option<i64>, completed_at: Option<&str>) -> ChallengeProgress {
    ChallengeProgress {
        challenge_id: challenge_id.into(),
        current_progress: current,
        completed_at: completed_at.map(str::to_owned),
    }
}

fn tracked(current: i64, target: i64, completed_at: Option<&str>) -> TrackedChallenge {
    TrackedChallenge {
        challenge: challenge("c1", target),
        current,
        completed_at: completed_at.map(str::to_owned),
    }
}

// =========================================================================
// Joining progress rows
// =========================================================================

#[test]
fn challenges_without_rows_start_at_zero() {
    let joined = track(vec![challenge("c1", 20)], &[]);
    assert_eq!(joined.len(), 1);
    assert_eq!(joined[0].current, 0);
    assert_eq!(joined[0].completed_at, None);
}

#[test]
fn rows_join_by_challenge_id() {
    let rows = vec![
        progress("c2", Some(7), None),
        progress("c1", Some(12), Some("2024-06-01")),
    ];
    let joined = track(vec![challenge("c1", 20), challenge("c2", 10)], &rows);
    assert_eq!(joined[0].current, 12);
    assert_eq!(joined[0].completed_at.as_deref(), Some("2024-06-01"));
    assert_eq!(joined[1].current, 7);
}

#[test]
fn null_progress_counts_as_zero() {
    let rows = vec![progress("c1", None, None)];
    let joined = track(vec![challenge("c1", 20)], &rows);
    assert_eq!(joined[0].current, 0);
}

// =========================================================================
// Completion
// =========================================================================

#[test]
fn percent_caps_at_one_hundred() {
    assert_eq!(tracked(15, 20, None).percent(), 75);
    assert_eq!(tracked(25, 20, None).percent(), 100);
}

#[test]
fn percent_of_zero_target_is_zero() {
    assert_eq!(tracked(5, 0, None).percent(), 0);
}

#[test]
fn completion_timestamp_wins_over_low_progress() {
    let item = tracked(2, 20, Some("2024-06-01"));
    assert!(item.is_completed());
}

#[test]
fn reaching_the_target_completes_without_timestamp() {
    assert!(tracked(20, 20, None).is_completed());
    assert!(!tracked(19, 20, None).is_completed());
}

// =========================================================================
// Presentation
// =========================================================================

#[test]
fn icons_cover_every_challenge_kind() {
    assert_eq!(challenge_icon("planting"), "🌱");
    assert_eq!(challenge_icon("biodiversity"), "🐝");
    assert_eq!(challenge_icon("composting"), "♻️");
    assert_eq!(challenge_icon("maintenance"), "🌳");
    assert_eq!(challenge_icon("education"), "📚");
    assert_eq!(challenge_icon("algo-novo"), "🎯");
}

#[test]
fn unknown_kinds_fall_back_to_other() {
    assert_eq!(challenge_modifier("planting"), "planting");
    assert_eq!(challenge_modifier("algo-novo"), "other");
}
