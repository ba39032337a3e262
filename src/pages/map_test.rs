use super::*;

fn project(name: &str, description: Option<&str>, location: Option<&str>) -> MicroforestProject {
    MicroforestProject {
        id: format!("id-{name}"),
        user_id: "owner-1".into(),
        name: name.into(),
        description: description.map(str::to_owned),
        location_name: location.map(str::to_owned),
        location_lat: None,
        location_lng: None,
        trees_planned: Some(20),
        trees_planted: Some(5),
        tree_types: None,
        status: Some("active".into()),
        created_at: "2024-06-12T10:00:00+00:00".into(),
    }
}

// =========================================================================
// Status badges
// =========================================================================

#[test]
fn status_labels_cover_known_lifecycle() {
    assert_eq!(status_label("active"), "Ativo");
    assert_eq!(status_label("planning"), "Planejamento");
    assert_eq!(status_label("completed"), "Concluído");
    assert_eq!(status_label("weird"), "Desconhecido");
}

#[test]
fn status_modifier_falls_back_to_unknown() {
    assert_eq!(status_modifier("active"), "active");
    assert_eq!(status_modifier(""), "unknown");
}

// =========================================================================
// Owner attribution
// =========================================================================

#[test]
fn owner_name_resolves_from_profiles() {
    let profiles = vec![UserProfile {
        id: "owner-1".into(),
        full_name: Some("Dona Rosa".into()),
    }];
    assert_eq!(owner_display_name(&profiles, "owner-1"), "Dona Rosa");
}

#[test]
fn owner_without_profile_is_anonymous() {
    assert_eq!(owner_display_name(&[], "owner-1"), ANONYMOUS_OWNER);
}

#[test]
fn owner_with_unnamed_profile_is_anonymous() {
    let profiles = vec![UserProfile {
        id: "owner-1".into(),
        full_name: None,
    }];
    assert_eq!(owner_display_name(&profiles, "owner-1"), ANONYMOUS_OWNER);
}

// =========================================================================
// Search filter
// =========================================================================

#[test]
fn empty_search_keeps_everything() {
    let projects = vec![project("Bosque", None, None), project("Jardim", None, None)];
    assert_eq!(filter_projects(&projects, "  ").len(), 2);
}

#[test]
fn search_matches_name_case_insensitively() {
    let projects = vec![project("Bosque Urbano", None, None)];
    assert_eq!(filter_projects(&projects, "bosque").len(), 1);
    assert_eq!(filter_projects(&projects, "URBANO").len(), 1);
    assert_eq!(filter_projects(&projects, "praia").len(), 0);
}

#[test]
fn search_matches_description_and_location() {
    let projects = vec![
        project("A", Some("plantio de ipês"), None),
        project("B", None, Some("Paulista - PE")),
    ];
    assert_eq!(filter_projects(&projects, "ipês").len(), 1);
    assert_eq!(filter_projects(&projects, "paulista").len(), 1);
}

