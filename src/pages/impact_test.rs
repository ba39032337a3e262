use super::*;

#[test]
fn project_statuses_map_to_their_modifiers() {
    assert_eq!(status_modifier("Ativo"), "active");
    assert_eq!(status_modifier("Crescendo"), "growing");
    assert_eq!(status_modifier("Planejando"), "planning");
}

#[test]
fn unknown_statuses_render_with_the_planning_treatment() {
    assert_eq!(status_modifier("Pausado"), "planning");
}

#[test]
fn every_goal_percent_stays_within_the_bar() {
    for (_, _, percent) in YEAR_GOALS {
        assert!(percent <= 100);
    }
}
