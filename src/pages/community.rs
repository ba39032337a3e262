//! Comunidade: the collaborative forum.
//!
//! Posts are public reading; publishing needs an account. While the
//! backend has no posts yet the page falls back to a fixed set of
//! sample posts so the forum never looks abandoned. Filtering runs
//! client-side over category and a free-text search.

use leptos::prelude::*;

use crate::components::page_header::PageHeader;
#[cfg(feature = "hydrate")]
use crate::net::api;
use crate::net::types::{CommunityPost, NewPost};
use crate::session::provider::use_identity;
use crate::util::fmt::format_date_br;
#[cfg(feature = "hydrate")]
use crate::util::session_store;

#[cfg(test)]
#[path = "community_test.rs"]
mod community_test;

/// Forum categories as (id, icon, name). `all` is the filter-only
/// pseudo-category and never appears on a post.
const CATEGORIES: [(&str, &str, &str); 5] = [
    ("all", "📋", "Todos"),
    ("duvidas", "🧠", "Dúvidas e Soluções"),
    ("projetos", "🌟", "Projetos Inspiradores"),
    ("parcerias", "🛠️", "Parcerias e Doações"),
    ("eventos", "📅", "Eventos e Mutirões"),
];

/// Icon and name for a category id, falling back to the catch-all.
fn category_info(id: &str) -> (&'static str, &'static str) {
    CATEGORIES
        .iter()
        .find(|(candidate, ..)| *candidate == id)
        .or(CATEGORIES.first())
        .map_or(("📋", "Todos"), |(_, icon, name)| (icon, name))
}

/// Validate a post draft before publishing.
fn validate_post(title: &str, content: &str) -> Result<(), &'static str> {
    if title.trim().is_empty() || content.trim().is_empty() {
        return Err("Por favor, preencha título e conteúdo");
    }
    Ok(())
}

/// Category + free-text filter over a post list.
fn filter_posts(posts: &[CommunityPost], category: &str, term: &str) -> Vec<CommunityPost> {
    let needle = term.trim().to_lowercase();
    posts
        .iter()
        .filter(|post| {
            let in_category = category == "all" || post.category.as_deref() == Some(category);
            let matches = needle.is_empty()
                || post.title.to_lowercase().contains(&needle)
                || post.content.to_lowercase().contains(&needle);
            in_category && matches
        })
        .cloned()
        .collect()
}

/// Seed content shown while the forum is empty.
fn sample_posts() -> Vec<CommunityPost> {
    vec![
        CommunityPost {
            id: "1".into(),
            user_id: "sample".into(),
            title: "Como identificar o melhor tipo de solo?".into(),
            content: "Estou iniciando minha primeira microfloresta e tenho dúvidas sobre como \
                      analisar o solo. Alguém pode me ajudar com dicas práticas?"
                .into(),
            category: Some("duvidas".into()),
            likes_count: Some(12),
            created_at: "2024-06-10T12:00:00+00:00".into(),
        },
        CommunityPost {
            id: "2".into(),
            user_id: "sample".into(),
            title: "Microfloresta da Escola Verde - Resultados incríveis!".into(),
            content: "Após 6 meses, nossa microfloresta já tem 2 metros de altura! Compartilho \
                      aqui nossos aprendizados e progressos."
                .into(),
            category: Some("projetos".into()),
            likes_count: Some(28),
            created_at: "2024-06-09T12:00:00+00:00".into(),
        },
        CommunityPost {
            id: "3".into(),
            user_id: "sample".into(),
            title: "Procuramos parceiros para projeto comunitário".into(),
            content: "Queremos criar uma grande área verde no bairro. Quem pode nos ajudar com \
                      mudas, ferramentas ou conhecimento?"
                .into(),
            category: Some("parcerias".into()),
            likes_count: Some(8),
            created_at: "2024-06-08T12:00:00+00:00".into(),
        },
    ]
}

/// What the list shows: real posts when any exist, samples otherwise.
/// The filters apply to both.
fn visible_posts(posts: &[CommunityPost], category: &str, term: &str) -> Vec<CommunityPost> {
    if posts.is_empty() {
        filter_posts(&sample_posts(), category, term)
    } else {
        filter_posts(posts, category, term)
    }
}

#[component]
pub fn CommunityPage() -> impl IntoView {
    let identity = use_identity();
    let session = identity.state();
    let posts = RwSignal::new(Vec::<CommunityPost>::new());
    let loading = RwSignal::new(true);
    let category = RwSignal::new("all".to_owned());
    let search = RwSignal::new(String::new());
    let show_form = RwSignal::new(false);
    let title = RwSignal::new(String::new());
    let content = RwSignal::new(String::new());
    let post_category = RwSignal::new("duvidas".to_owned());
    let feedback = RwSignal::new(None::<String>);

    let load_posts = move || {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match api::list_posts().await {
                Ok(rows) => posts.set(rows),
                Err(err) => {
                    log::warn!("post listing failed: {err}");
                    feedback.set(Some(
                        "Não foi possível carregar os posts da comunidade".to_owned(),
                    ));
                }
            }
            loading.set(false);
        });
    };
    load_posts();

    let publish = move |_| {
        let Some(user) = session.get_untracked().user().cloned() else {
            feedback.set(Some("Você precisa estar logado para criar posts".to_owned()));
            return;
        };
        let title_value = title.get_untracked();
        let content_value = content.get_untracked();
        if let Err(message) = validate_post(&title_value, &content_value) {
            feedback.set(Some(message.to_owned()));
            return;
        }
        let request = NewPost {
            user_id: user.id,
            title: title_value.trim().to_owned(),
            content: content_value.trim().to_owned(),
            category: post_category.get_untracked(),
        };
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let Some(token) = session_store::read_token() else {
                feedback.set(Some("Você precisa estar logado para criar posts".to_owned()));
                return;
            };
            match api::create_post(&token, &request).await {
                Ok(()) => {
                    feedback.set(Some("Seu post foi publicado na comunidade".to_owned()));
                    title.set(String::new());
                    content.set(String::new());
                    post_category.set("duvidas".to_owned());
                    show_form.set(false);
                    load_posts();
                }
                Err(err) => {
                    log::warn!("post creation failed: {err}");
                    feedback.set(Some("Não foi possível criar o post".to_owned()));
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = request;
    };

    let list = move || {
        if loading.get() {
            return (0..3)
                .map(|_| view! { <div class="post-card post-card--skeleton"></div> })
                .collect_view()
                .into_any();
        }
        let visible = visible_posts(&posts.get(), &category.get(), &search.get());
        if visible.is_empty() {
            return view! {
                <div class="community__empty">
                    <span class="community__empty-icon">"💬"</span>
                    <h3>"Nenhum post encontrado"</h3>
                    <p>"Seja o primeiro a compartilhar algo com a comunidade!"</p>
                </div>
            }
            .into_any();
        }
        visible
            .into_iter()
            .map(|post| {
                let (icon, name) = category_info(post.category.as_deref().unwrap_or("all"));
                let likes = post.likes_count.unwrap_or(0);
                view! {
                    <article class="post-card">
                        <div class="post-card__meta">
                            <span class="post-card__category">{icon} " " {name}</span>
                            <span class="post-card__date">{format_date_br(&post.created_at)}</span>
                        </div>
                        <h3 class="post-card__title">{post.title.clone()}</h3>
                        <p class="post-card__content">{post.content.clone()}</p>
                        <div class="post-card__actions">
                            <span>"❤️ " {likes}</span>
                            <span>"💬 Comentar"</span>
                            <span>"🔗 Compartilhar"</span>
                        </div>
                    </article>
                }
            })
            .collect_view()
            .into_any()
    };

    view! {
        <div class="community">
            <PageHeader title="🤝 Comunidade PUFF">
                <button class="community__new" on:click=move |_| show_form.update(|open| *open = !*open)>
                    "+ Novo Post"
                </button>
            </PageHeader>
            <main class="community__content">
                <section class="community__intro">
                    <h2>"👥 Fórum Colaborativo"</h2>
                    <p>
                        "Conecte-se com outros entusiastas de microflorestas, tire dúvidas e compartilhe experiências"
                    </p>
                </section>

                <Show when=move || show_form.get()>
                    <section class="community__form">
                        <h3>"Criar Novo Post"</h3>
                        <input
                            class="community__field"
                            type="text"
                            placeholder="Título do seu post"
                            prop:value=move || title.get()
                            on:input=move |ev| title.set(event_target_value(&ev))
                        />
                        <select
                            class="community__field"
                            prop:value=move || post_category.get()
                            on:change=move |ev| post_category.set(event_target_value(&ev))
                        >
                            {CATEGORIES
                                .iter()
                                .skip(1)
                                .map(|(id, icon, name)| {
                                    view! {
                                        <option value=*id>{*icon} " " {*name}</option>
                                    }
                                })
                                .collect_view()}
                        </select>
                        <textarea
                            class="community__field"
                            rows="4"
                            placeholder="Compartilhe seus pensamentos, dúvidas ou experiências..."
                            prop:value=move || content.get()
                            on:input=move |ev| content.set(event_target_value(&ev))
                        ></textarea>
                        <div class="community__form-actions">
                            <button class="community__publish" on:click=publish>
                                "Publicar"
                            </button>
                            <button
                                class="community__cancel"
                                on:click=move |_| show_form.set(false)
                            >
                                "Cancelar"
                            </button>
                        </div>
                    </section>
                </Show>

                {move || {
                    feedback
                        .get()
                        .map(|message| view! { <p class="community__feedback">{message}</p> })
                }}

                <input
                    class="community__search"
                    type="text"
                    placeholder="Buscar posts..."
                    prop:value=move || search.get()
                    on:input=move |ev| search.set(event_target_value(&ev))
                />
                <div class="community__chips">
                    {CATEGORIES
                        .iter()
                        .map(|(id, icon, name)| {
                            view! {
                                <button
                                    class=move || {
                                        if category.get() == *id {
                                            "community__chip community__chip--active"
                                        } else {
                                            "community__chip"
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

                <section class="community__list">{list}</section>
            </main>
        </div>
    }
}
