//! Guia PUFF: the knowledge center.
//!
//! Articles come from the backend ordered by publication date. The
//! catalog ships with six sample articles that stand in whenever the
//! backend has nothing to offer or the request fails, so the guide is
//! readable offline too. Category chips and a search box narrow the
//! grid client-side.

use leptos::prelude::*;

use crate::components::page_header::PageHeader;
#[cfg(feature = "hydrate")]
use crate::net::api;
use crate::net::types::GuideArticle;
use crate::util::fmt::format_date_br;

#[cfg(test)]
#[path = "guides_test.rs"]
mod guides_test;

/// Guide categories as (id, icon, name). `all` only exists as a filter.
const GUIDE_CATEGORIES: [(&str, &str, &str); 7] = [
    ("all", "📚", "Todos"),
    ("especies", "🌳", "Espécies Nativas"),
    ("solo", "🧑‍🌾", "Preparo do Solo"),
    ("compostagem", "♻️", "Compostagem"),
    ("agua", "🚿", "Captação de Água"),
    ("manutencao", "🌿", "Manutenção"),
    ("educacao", "🎨", "Atividades Educativas"),
];

/// (icon, title, caption) tiles of the quick start card.
const QUICK_START: [(&str, &str, &str); 3] = [
    ("🌱", "Primeiros Passos", "Como começar seu projeto"),
    ("📋", "Checklist Completo", "Lista de verificação"),
    ("🎥", "Vídeo Tutorial", "Aprenda assistindo"),
];

/// (icon, title, caption) tiles of the extra resources card.
const EXTRA_RESOURCES: [(&str, &str, &str); 4] = [
    ("⬇️", "Manual PDF", "Guia completo"),
    ("🎥", "Vídeo Aulas", "12 episódios"),
    ("📄", "Checklists", "Listas práticas"),
    ("📖", "E-books", "Conteúdo extra"),
];

/// Icon and name for a category id, falling back to the catch-all.
fn category_info(id: &str) -> (&'static str, &'static str) {
    GUIDE_CATEGORIES
        .iter()
        .find(|(candidate, ..)| *candidate == id)
        .or(GUIDE_CATEGORIES.first())
        .map_or(("📚", "Todos"), |(_, icon, name)| (icon, name))
}

/// Category + free-text filter. Search covers title and summary.
fn filter_articles(articles: &[GuideArticle], category: &str, term: &str) -> Vec<GuideArticle> {
    let needle = term.trim().to_lowercase();
    articles
        .iter()
        .filter(|article| {
            let in_category = category == "all" || article.category == category;
            let matches = needle.is_empty()
                || article.title.to_lowercase().contains(&needle)
                || article
                    .summary
                    .as_deref()
                    .unwrap_or_default()
                    .to_lowercase()
                    .contains(&needle);
            in_category && matches
        })
        .cloned()
        .collect()
}

/// Built-in catalog shown when the backend has no articles.
fn sample_articles() -> Vec<GuideArticle> {
    let entries: [(&str, &str, &str, &str, &str, &str); 6] = [
        (
            "1",
            "Espécies Nativas da Mata Atlântica para Microflorestas",
            "A Mata Atlântica é um dos biomas mais ricos em biodiversidade do mundo. Para criar \
             microflorestas eficazes, é essencial conhecer as espécies nativas da região...",
            "Conheça as principais árvores nativas ideais para seu projeto de microfloresta",
            "especies",
            "2024-06-10T12:00:00+00:00",
        ),
        (
            "2",
            "Como Preparar o Solo para Microflorestas Urbanas",
            "O preparo adequado do solo é fundamental para o sucesso de qualquer microfloresta. \
             Aprenda técnicas de análise, correção e enriquecimento do solo urbano...",
            "Técnicas essenciais para preparar e enriquecer o solo urbano",
            "solo",
            "2024-06-09T12:00:00+00:00",
        ),
        (
            "3",
            "Compostagem Escolar: Transformando Resíduos em Adubo",
            "A compostagem é uma técnica sustentável que transforma resíduos orgânicos em adubo \
             rico em nutrientes. Veja como implementar na sua escola...",
            "Guia completo para implementar compostagem em escolas e comunidades",
            "compostagem",
            "2024-06-08T12:00:00+00:00",
        ),
        (
            "4",
            "Sistemas de Captação de Água da Chuva",
            "A água da chuva pode ser uma excelente fonte de irrigação para microflorestas. \
             Aprenda a criar sistemas simples e eficientes de captação...",
            "Crie sistemas sustentáveis de irrigação usando água da chuva",
            "agua",
            "2024-06-07T12:00:00+00:00",
        ),
        (
            "5",
            "Manutenção e Cuidados com Microflorestas",
            "Após o plantio, as microflorestas precisam de cuidados específicos para crescer \
             saudáveis. Conheça técnicas de poda, adubação e controle de pragas...",
            "Mantenha sua microfloresta saudável com estas práticas essenciais",
            "manutencao",
            "2024-06-06T12:00:00+00:00",
        ),
        (
            "6",
            "Atividades Educativas para Escolas",
            "Transforme sua microfloresta em uma sala de aula ao ar livre. Descubra atividades \
             práticas para engajar estudantes na educação ambiental...",
            "Atividades práticas para educação ambiental usando microflorestas",
            "educacao",
            "2024-06-05T12:00:00+00:00",
        ),
    ];
    entries
        .into_iter()
        .map(|(id, title, content, summary, category, published_at)| GuideArticle {
            id: id.into(),
            title: title.into(),
            content: content.into(),
            summary: Some(summary.into()),
            category: category.into(),
            published_at: published_at.into(),
        })
        .collect()
}

#[component]
pub fn GuidesPage() -> impl IntoView {
    let articles = RwSignal::new(Vec::<GuideArticle>::new());
    let loading = RwSignal::new(true);
    let category = RwSignal::new("all".to_owned());
    let search = RwSignal::new(String::new());

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match api::list_guide_articles().await {
            Ok(rows) if !rows.is_empty() => articles.set(rows),
            Ok(_) => articles.set(sample_articles()),
            Err(err) => {
                log::warn!("guide listing failed: {err}");
                articles.set(sample_articles());
            }
        }
        loading.set(false);
    });

    let grid = move || {
        if loading.get() {
            return (0..6)
                .map(|_| view! { <div class="guide-card guide-card--skeleton"></div> })
                .collect_view()
                .into_any();
        }
        let visible = filter_articles(&articles.get(), &category.get(), &search.get());
        if visible.is_empty() {
            return view! {
                <div class="guides__empty">
                    <span class="guides__empty-icon">"📄"</span>
                    <h3>"Nenhum artigo encontrado"</h3>
                    <p>"Tente ajustar os filtros ou termo de busca"</p>
                </div>
            }
            .into_any();
        }
        visible
            .into_iter()
            .map(|article| {
                let (icon, name) = category_info(&article.category);
                let href = format!("/guia/artigo/{}", article.id);
                view! {
                    <article class="guide-card">
                        <div class="guide-card__meta">
                            <span class="guide-card__category">{icon} " " {name}</span>
                            <span class="guide-card__date">
                                {format_date_br(&article.published_at)}
                            </span>
                        </div>
                        <h3 class="guide-card__title">{article.title.clone()}</h3>
                        <p class="guide-card__summary">
                            {article.summary.clone().unwrap_or_default()}
                        </p>
                        <div class="guide-card__footer">
                            <span class="guide-card__kind">"📄 Artigo"</span>
                            <a class="guide-card__read" href=href>
                                "Ler Mais"
                            </a>
                        </div>
                    </article>
                }
            })
            .collect_view()
            .into_any()
    };

    view! {
        <div class="guides">
            <PageHeader title="📚 Guia PUFF">
                <span class="guides__tagline">"Centro de Conhecimento"</span>
            </PageHeader>
            <main class="guides__content">
                <section class="guides__intro">
                    <h2>"📖 Central de Conhecimento"</h2>
                    <p>"Aprenda tudo sobre microflorestas, desde o planejamento até a manutenção"</p>
                </section>

                <input
                    class="guides__search"
                    type="text"
                    placeholder="Buscar artigos, tutoriais..."
                    prop:value=move || search.get()
                    on:input=move |ev| search.set(event_target_value(&ev))
                />
                <div class="guides__chips">
                    {GUIDE_CATEGORIES
                        .iter()
                        .map(|(id, icon, name)| {
                            view! {
                                <button
                                    class=move || {
                                        if category.get() == *id {
                                            "guides__chip guides__chip--active"
                                        } else {
                                            "guides__chip"
                                        }
                                    }
                                    on:click=move |_| category.set((*id).to_owned())
                                >
                                    {*icon} " " {*name}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>

                <section class="guides__quick-start">
                    <h2>"🚀 Início Rápido"</h2>
                    <p class="guides__subtitle">"Novato em microflorestas? Comece por aqui!"</p>
                    <div class="guides__tiles">
                        {QUICK_START
                            .iter()
                            .map(|(icon, title, caption)| {
                                view! {
                                    <div class="guide-tile">
                                        <span class="guide-tile__icon">{*icon}</span>
                                        <strong>{*title}</strong>
                                        <span class="guide-tile__caption">{*caption}</span>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </section>

                <section class="guides__grid">{grid}</section>

                <section class="guides__resources">
                    <h2>"📁 Recursos Adicionais"</h2>
                    <p class="guides__subtitle">
                        "Materiais complementares para download e consulta"
                    </p>
                    <div class="guides__tiles">
                        {EXTRA_RESOURCES
                            .iter()
                            .map(|(icon, title, caption)| {
                                view! {
                                    <div class="guide-tile">
                                        <span class="guide-tile__icon">{*icon}</span>
                                        <strong>{*title}</strong>
                                        <span class="guide-tile__caption">{*caption}</span>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </section>
            </main>
        </div>
    }
}
