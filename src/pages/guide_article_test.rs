use super::*;

// ============================================================================
// Catalog lookup
// ============================================================================

#[test]
fn every_catalog_id_resolves() {
    assert_eq!(
        article_by_id("1").map(|article| article.title),
        Some("Como Preparar o Solo para Microflorestas"),
    );
    assert_eq!(
        article_by_id("2").map(|article| article.title),
        Some("Espécies Nativas do Cerrado"),
    );
    assert_eq!(
        article_by_id("3").map(|article| article.title),
        Some("Sistema de Irrigação por Gotejamento"),
    );
}

#[test]
fn unknown_ids_resolve_to_nothing() {
    assert!(article_by_id("4").is_none());
    assert!(article_by_id("").is_none());
    assert!(article_by_id("solo").is_none());
}

// ============================================================================
// Markdown rendering
// ============================================================================

#[test]
fn headings_and_lists_render_as_html() {
    let html = render_markdown_html("## Análise\n\n- pH\n- drenagem\n");
    assert!(html.contains("<h2>Análise</h2>"));
    assert!(html.contains("<li>pH</li>"));
    assert!(html.contains("<li>drenagem</li>"));
}

#[test]
fn ordered_lists_keep_their_numbering() {
    let html = render_markdown_html("1. limpeza\n2. aração\n");
    assert!(html.contains("<ol>"));
    assert!(html.contains("<li>limpeza</li>"));
}

#[test]
fn raw_html_is_stripped_from_the_output() {
    let html = render_markdown_html("texto <script>alert('x')</script> seguro");
    assert!(!html.contains("<script>"));
    assert!(html.contains("texto"));
    assert!(html.contains("seguro"));
}

#[test]
fn every_catalog_body_renders_with_sections() {
    for id in ["1", "2", "3"] {
        let article = article_by_id(id).unwrap();
        let html = render_markdown_html(article.body);
        assert!(html.contains("<h2>"), "article {id} lost its headings");
        assert!(html.contains("<li>"), "article {id} lost its lists");
    }
}
