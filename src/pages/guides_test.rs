use super::*;

fn article(id: &str, title: &str, summary: Option<&str>, category: &str) -> GuideArticle {
    GuideArticle {
        id: id.into(),
        title: title.into(),
        content: "corpo do artigo".into(),
        summary: summary.map(Into::into),
        category: category.into(),
        published_at: "2024-06-01T00:00:00+00:00".into(),
    }
}

// ============================================================================
// Category lookup
// ============================================================================

#[test]
fn category_info_resolves_known_ids() {
    assert_eq!(category_info("especies"), ("🌳", "Espécies Nativas"));
    assert_eq!(category_info("agua"), ("🚿", "Captação de Água"));
}

#[test]
fn category_info_falls_back_to_the_catch_all() {
    assert_eq!(category_info("misterio"), ("📚", "Todos"));
}

// ============================================================================
// Filtering
// ============================================================================

#[test]
fn the_catch_all_category_keeps_every_article() {
    let articles = vec![
        article("1", "Ipês", None, "especies"),
        article("2", "Composteira", None, "compostagem"),
    ];
    assert_eq!(filter_articles(&articles, "all", "").len(), 2);
}

#[test]
fn a_specific_category_narrows_the_grid() {
    let articles = vec![
        article("1", "Ipês", None, "especies"),
        article("2", "Composteira", None, "compostagem"),
    ];
    let filtered = filter_articles(&articles, "compostagem", "");
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].id, "2");
}

#[test]
fn search_covers_title_and_summary() {
    let articles = vec![
        article("1", "Preparo do solo", Some("análise de pH"), "solo"),
        article("2", "Gotejamento", Some("economia de água"), "agua"),
    ];
    assert_eq!(filter_articles(&articles, "all", "PH")[0].id, "1");
    assert_eq!(filter_articles(&articles, "all", "gotejamento")[0].id, "2");
    assert!(filter_articles(&articles, "all", "mutirão").is_empty());
}

#[test]
fn articles_without_a_summary_still_match_by_title() {
    let articles = vec![article("1", "Podas de formação", None, "manutencao")];
    assert_eq!(filter_articles(&articles, "all", "podas").len(), 1);
    assert!(filter_articles(&articles, "all", "irrigação").is_empty());
}

// ============================================================================
// Sample catalog
// ============================================================================

#[test]
fn the_sample_catalog_covers_every_real_category() {
    let samples = sample_articles();
    assert_eq!(samples.len(), 6);
    for (id, ..) in GUIDE_CATEGORIES.iter().skip(1) {
        assert!(
            samples.iter().any(|article| article.category == *id),
            "no sample article for category {id}",
        );
    }
}
