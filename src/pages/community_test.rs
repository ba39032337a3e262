use super::*;

fn post(id: &str, title: &str, content: &str, category: Option<&str>) -> CommunityPost {
    CommunityPost {
        id: id.into(),
        user_id: "user-1".into(),
        title: title.into(),
        content: content.into(),
        category: category.map(Into::into),
        likes_count: Some(0),
        created_at: "2024-06-01T00:00:00+00:00".into(),
    }
}

// ============================================================================
// Category lookup
// ============================================================================

#[test]
fn category_info_resolves_known_ids() {
    assert_eq!(category_info("duvidas"), ("🧠", "Dúvidas e Soluções"));
    assert_eq!(category_info("eventos"), ("📅", "Eventos e Mutirões"));
}

#[test]
fn category_info_falls_back_to_the_catch_all() {
    assert_eq!(category_info("unheard-of"), ("📋", "Todos"));
}

// ============================================================================
// Draft validation
// ============================================================================

#[test]
fn validate_post_requires_a_title() {
    assert!(validate_post("", "conteúdo").is_err());
    assert!(validate_post("   ", "conteúdo").is_err());
}

#[test]
fn validate_post_requires_content() {
    assert!(validate_post("título", "").is_err());
    assert!(validate_post("título", "  \n ").is_err());
}

#[test]
fn validate_post_accepts_a_filled_draft() {
    assert!(validate_post("Mutirão no sábado", "Quem topa aparecer?").is_ok());
}

// ============================================================================
// Filtering
// ============================================================================

#[test]
fn the_catch_all_category_keeps_every_post() {
    let posts = vec![
        post("1", "Solo", "argila", Some("duvidas")),
        post("2", "Mutirão", "sábado", Some("eventos")),
        post("3", "Sem categoria", "texto", None),
    ];
    assert_eq!(filter_posts(&posts, "all", "").len(), 3);
}

#[test]
fn a_specific_category_narrows_the_list() {
    let posts = vec![
        post("1", "Solo", "argila", Some("duvidas")),
        post("2", "Mutirão", "sábado", Some("eventos")),
    ];
    let filtered = filter_posts(&posts, "eventos", "");
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].id, "2");
}

#[test]
fn uncategorized_posts_only_show_under_the_catch_all() {
    let posts = vec![post("1", "Sem categoria", "texto", None)];
    assert!(filter_posts(&posts, "duvidas", "").is_empty());
    assert_eq!(filter_posts(&posts, "all", "").len(), 1);
}

#[test]
fn search_matches_title_and_content_case_insensitively() {
    let posts = vec![
        post("1", "Solo argiloso", "dicas de preparo", Some("duvidas")),
        post("2", "Mutirão", "traga MUDAS nativas", Some("eventos")),
    ];
    assert_eq!(filter_posts(&posts, "all", "SOLO")[0].id, "1");
    assert_eq!(filter_posts(&posts, "all", "mudas")[0].id, "2");
    assert!(filter_posts(&posts, "all", "compostagem").is_empty());
}

// ============================================================================
// Sample fallback
// ============================================================================

#[test]
fn an_empty_forum_falls_back_to_the_sample_posts() {
    let visible = visible_posts(&[], "all", "");
    assert_eq!(visible.len(), 3);
    assert_eq!(visible[0].title, "Como identificar o melhor tipo de solo?");
}

#[test]
fn sample_posts_are_filtered_like_real_ones() {
    let visible = visible_posts(&[], "parcerias", "");
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].id, "3");
}

#[test]
fn real_posts_replace_the_samples_entirely() {
    let posts = vec![post("42", "Primeiro post real", "olá", Some("duvidas"))];
    let visible = visible_posts(&posts, "all", "");
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].id, "42");
}
