//! Meus Plantios: the signed-in user's own projects.
//!
//! Account-only screen (the route guard keeps guests out). Lists the
//! user's projects newest first and lets them delete one after a
//! browser confirm. Deletion updates the list optimistically from the
//! backend answer; there is no local cache to reconcile.

use leptos::prelude::*;

use crate::components::page_header::PageHeader;
#[cfg(feature = "hydrate")]
use crate::net::api;
use crate::net::types::MicroforestProject;
use crate::session::provider::use_identity;
use crate::util::fmt::{format_date_br, progress_percent};
#[cfg(feature = "hydrate")]
use crate::util::session_store;

#[cfg(test)]
#[path = "plantings_test.rs"]
mod plantings_test;

/// Badge text for the owner's view of a project lifecycle status.
fn status_label(status: &str) -> &'static str {
    match status {
        "planning" => "Planejando",
        "active" => "Ativo",
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

#[component]
pub fn MyPlantingsPage() -> impl IntoView {
    let identity = use_identity();
    let session = identity.state();
    let projects = RwSignal::new(Vec::<MicroforestProject>::new());
    let loading = RwSignal::new(true);
    let feedback = RwSignal::new(None::<String>);

    // The guard only mounts this page once the session is resolved to an
    // account, so the owner can be read straight away.
    #[cfg(feature = "hydrate")]
    {
        let user_id = session.get_untracked().user().map(|user| user.id.clone());
        let token = session_store::read_token();
        if let (Some(user_id), Some(token)) = (user_id, token) {
            leptos::task::spawn_local(async move {
                match api::list_own_projects(&token, &user_id).await {
                    Ok(rows) => projects.set(rows),
                    Err(err) => {
                        log::warn!("own project listing failed: {err}");
                        feedback.set(Some("Não foi possível carregar seus projetos".to_owned()));
                    }
                }
                loading.set(false);
            });
        } else {
            loading.set(false);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = session;

    let grid = move || {
        if loading.get() {
            return (0..3)
                .map(|_| view! { <div class="project-card project-card--skeleton"></div> })
                .collect_view()
                .into_any();
        }
        let rows = projects.get();
        if rows.is_empty() {
            return view! {
                <div class="plantings__empty">
                    <span class="plantings__empty-icon">"🌳"</span>
                    <h3>"Você ainda não tem projetos"</h3>
                    <p>"Crie seu primeiro projeto de microfloresta e comece a fazer a diferença!"</p>
                    <a class="plantings__create" href="/criar-microfloresta">
                        "Criar Primeira Microfloresta"
                    </a>
                </div>
            }
            .into_any();
        }
        rows.into_iter()
            .map(|project| {
                let status = project.status.clone().unwrap_or_else(|| "planning".to_owned());
                let planted = project.trees_planted.unwrap_or(0);
                let planned = project.trees_planned.unwrap_or(0);
                let percent = progress_percent(planted, planned);
                let delete = {
                    let project_id = project.id.clone();
                    let project_name = project.name.clone();
                    move |_| {
                        #[cfg(feature = "hydrate")]
                        {
                            let prompt = format!(
                                "Tem certeza que deseja excluir o projeto \"{project_name}\"?"
                            );
                            let confirmed = web_sys::window().is_some_and(|window| {
                                window.confirm_with_message(&prompt).unwrap_or(false)
                            });
                            if !confirmed {
                                return;
                            }
                            let Some(token) = session_store::read_token() else {
                                return;
                            };
                            let project_id = project_id.clone();
                            let project_name = project_name.clone();
                            leptos::task::spawn_local(async move {
                                match api::delete_project(&token, &project_id).await {
                                    Ok(()) => {
                                        projects
                                            .update(|rows| rows.retain(|row| row.id != project_id));
                                        feedback.set(Some(format!(
                                            "O projeto \"{project_name}\" foi excluído com sucesso"
                                        )));
                                    }
                                    Err(err) => {
                                        log::warn!("project delete failed: {err}");
                                        feedback.set(Some(
                                            "Não foi possível excluir o projeto".to_owned(),
                                        ));
                                    }
                                }
                            });
                        }
                        #[cfg(not(feature = "hydrate"))]
                        let _ = (&project_id, &project_name);
                    }
                };
                view! {
                    <article class="project-card">
                        <div class="project-card__top">
                            <h3 class="project-card__name">{project.name.clone()}</h3>
                            <span class=format!(
                                "project-card__badge project-card__badge--{}",
                                status_modifier(&status),
                            )>{status_label(&status)}</span>
                        </div>
                        <p class="project-card__date">
                            "Criado em " {format_date_br(&project.created_at)}
                        </p>
                        <p class="project-card__location">
                            "📍 "
                            {project
                                .location_name
                                .clone()
                                .unwrap_or_else(|| "Localização não informada".to_owned())}
                        </p>
                        <p class="project-card__trees">
                            "🌳 " {planted} " de " {planned} " árvores"
                        </p>
                        <div class="progress-bar">
                            <div
                                class="progress-bar__fill"
                                style=format!("width: {}%", percent.clamp(0, 100))
                            ></div>
                        </div>
                        <p class="project-card__percent">{percent} "% concluído"</p>
                        {project
                            .description
                            .clone()
                            .map(|description| {
                                view! { <p class="project-card__description">{description}</p> }
                            })}
                        <div class="project-card__actions">
                            <button class="project-card__edit">"✏️ Editar"</button>
                            <button class="project-card__delete" on:click=delete>
                                "🗑️"
                            </button>
                        </div>
                    </article>
                }
            })
            .collect_view()
            .into_any()
    };

    view! {
        <div class="plantings">
            <PageHeader title="🌳 Meus Plantios">
                <a class="plantings__new" href="/criar-microfloresta">
                    "+ Novo Projeto"
                </a>
            </PageHeader>
            <main class="plantings__content">
                <section class="plantings__intro">
                    <h2>"Seus Projetos de Microflorestas"</h2>
                    <p>"Gerencie e acompanhe o progresso dos seus projetos"</p>
                </section>
                {move || {
                    feedback.get().map(|message| view! { <p class="plantings__feedback">{message}</p> })
                }}
                <section class="plantings__grid">{grid}</section>
            </main>
        </div>
    }
}
