//! Mapa Verde: the public directory of microforest projects.
//!
//! Fetches every project plus the public owner profiles, joins them
//! client-side for attribution, and filters the grid by a free-text
//! search over name, description, and location. The map panel is a
//! static preview of the neighborhood pins.

use leptos::prelude::*;

use crate::components::page_header::PageHeader;
#[cfg(feature = "hydrate")]
use crate::net::api;
use crate::net::types::{MicroforestProject, UserProfile};
use crate::util::fmt::{format_date_br, progress_percent};

#[cfg(test)]
#[path = "map_test.rs"]
mod map_test;

/// Owner name shown when a project has no public profile.
const ANONYMOUS_OWNER: &str = "Usuário Anônimo";

// TODO: replace the static pin list with real map tiles once the
// Leaflet interop lands.
const MAP_PINS: [(&str, &str, &str, &str); 6] = [
    (
        "Projeto Escola Verde",
        "R. Ten. Agnaldo Lima, Paulista - PE",
        "Ativo",
        "15/20",
    ),
    (
        "Microfloresta Comunitária",
        "Rua Ares 282, Paulista - PE",
        "Em Crescimento",
        "8/12",
    ),
    (
        "Bosque Urbano",
        "Av. Pref. Geraldo Pinho Alves, Paulista - PE",
        "Planejamento",
        "0/25",
    ),
    (
        "Jardim Sustentável",
        "R. Estr. de Jaguarana 155, Paulista - PE",
        "Ativo",
        "30/30",
    ),
    (
        "Parque do Janga Verde",
        "R. Sessenta e Quatro, Parque do Janga, Paulista - PE",
        "Em Crescimento",
        "18/22",
    ),
    (
        "Floresta Pau Amarelo",
        "Av. Dr. Cláudio José Gueiros Leite, Pau Amarelo, Paulista - PE",
        "Concluído",
        "50/50",
    ),
];

/// Badge text for a project lifecycle status.
fn status_label(status: &str) -> &'static str {
    match status {
        "active" => "Ativo",
        "planning" => "Planejamento",
        "completed" => "Concluído",
        _ => "Desconhecido",
    }
}

/// Badge class modifier for a project lifecycle status.
fn status_modifier(status: &str) -> &'static str {
    match status {
        "active" => "active",
        "planning" => "planning",
        "completed" => "completed",
        _ => "unknown",
    }
}

/// Resolve a project owner to a display name.
fn owner_display_name<'a>(profiles: &'a [UserProfile], user_id: &str) -> &'a str {
    profiles
        .iter()
        .find(|profile| profile.id == user_id)
        .and_then(|profile| profile.full_name.as_deref())
        .unwrap_or(ANONYMOUS_OWNER)
}

/// Case-insensitive search over name, description, and location.
fn filter_projects(projects: &[MicroforestProject], term: &str) -> Vec<MicroforestProject> {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return projects.to_vec();
    }
    projects
        .iter()
        .filter(|project| {
            project.name.to_lowercase().contains(&needle)
                || project
                    .description
                    .as_deref()
                    .is_some_and(|description| description.to_lowercase().contains(&needle))
                || project
                    .location_name
                    .as_deref()
                    .is_some_and(|location| location.to_lowercase().contains(&needle))
        })
        .cloned()
        .collect()
}

#[component]
pub fn GreenMapPage() -> impl IntoView {
    let projects = RwSignal::new(Vec::<MicroforestProject>::new());
    let profiles = RwSignal::new(Vec::<UserProfile>::new());
    let loading = RwSignal::new(true);
    let search = RwSignal::new(String::new());

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match api::list_projects().await {
            Ok(rows) => projects.set(rows),
            Err(err) => log::warn!("project listing failed: {err}"),
        }
        // Attribution only; a missing profile just means "anonymous".
        match api::list_profiles().await {
            Ok(rows) => profiles.set(rows),
            Err(err) => log::warn!("profile listing failed: {err}"),
        }
        loading.set(false);
    });

    let grid = move || {
        if loading.get() {
            return (0..6)
                .map(|_| view! { <div class="project-card project-card--skeleton"></div> })
                .collect_view()
                .into_any();
        }
        let visible = filter_projects(&projects.get(), &search.get());
        if visible.is_empty() {
            return view! {
                <div class="map__empty">
                    <span class="map__empty-icon">"🌱"</span>
                    <h3>"Nenhum projeto encontrado"</h3>
                    <p>"Seja o primeiro a criar uma microfloresta!"</p>
                </div>
            }
            .into_any();
        }
        let owners = profiles.get();
        visible
            .into_iter()
            .map(|project| {
                let status = project.status.clone().unwrap_or_else(|| "planning".to_owned());
                let planted = project.trees_planted.unwrap_or(0);
                let planned = project.trees_planned.unwrap_or(0);
                let percent = progress_percent(planted, planned);
                let owner = owner_display_name(&owners, &project.user_id).to_owned();
                view! {
                    <article class="project-card">
                        <div class="project-card__top">
                            <div>
                                <h3 class="project-card__name">{project.name.clone()}</h3>
                                <p class="project-card__description">
                                    {project
                                        .description
                                        .clone()
                                        .unwrap_or_else(|| "Sem descrição disponível".to_owned())}
                                </p>
                            </div>
                            <span class=format!(
                                "project-card__badge project-card__badge--{}",
                                status_modifier(&status),
                            )>{status_label(&status)}</span>
                        </div>
                        <p class="project-card__location">
                            "📍 "
                            {project
                                .location_name
                                .clone()
                                .unwrap_or_else(|| "Local não especificado".to_owned())}
                        </p>
                        <p class="project-card__owner">"👤 " {owner}</p>
                        <div class="project-card__progress">
                            <div class="project-card__progress-row">
                                <span>"🌱 Progresso"</span>
                                <span class="project-card__percent">{percent} "%"</span>
                            </div>
                            <div class="progress-bar">
                                <div
                                    class="progress-bar__fill"
                                    style=format!("width: {}%", percent.clamp(0, 100))
                                ></div>
                            </div>
                            <div class="project-card__counts">
                                <span>{planted} " plantadas"</span>
                                <span>{planned} " planejadas"</span>
                            </div>
                        </div>
                        <p class="project-card__date">
                            "Criado em " {format_date_br(&project.created_at)}
                        </p>
                    </article>
                }
            })
            .collect_view()
            .into_any()
    };

    view! {
        <div class="map">
            <PageHeader title="Mapa Verde" />
            <main class="map__content">
                <p class="map__subtitle">"Explore projetos de microflorestas ao redor do mundo"</p>

                <section class="map__panel">
                    {MAP_PINS
                        .iter()
                        .map(|(name, address, status, seedlings)| {
                            view! {
                                <div class="map-pin">
                                    <span class="map-pin__marker">"📍"</span>
                                    <div>
                                        <strong>{*name}</strong>
                                        <p class="map-pin__address">{*address}</p>
                                        <span class="map-pin__status">{*status}</span>
                                        <span class="map-pin__seedlings">
                                            "Mudas: " {*seedlings}
                                        </span>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </section>

                <input
                    class="map__search"
                    type="text"
                    placeholder="Buscar projetos..."
                    prop:value=move || search.get()
                    on:input=move |ev| search.set(event_target_value(&ev))
                />

                <section class="map__grid">{grid}</section>
            </main>
        </div>
    }
}
