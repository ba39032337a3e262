//! Criar Microfloresta: five-step project creation wizard.
//!
//! Steps: basics, location, site data, objective, summary. Only the
//! name (step 1) and location (step 2) gate advancement; the site and
//! objective answers feed the generated plan on the summary step but
//! are not persisted yet. Submission inserts the project in `planning`
//! status with zero seedlings planted and then moves on to the
//! owner's project list.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::page_header::PageHeader;
#[cfg(feature = "hydrate")]
use crate::net::api;
use crate::net::types::NewProject;
use crate::session::provider::use_identity;
#[cfg(feature = "hydrate")]
use crate::util::session_store;

#[cfg(test)]
#[path = "create_project_test.rs"]
mod create_project_test;

const TOTAL_STEPS: u8 = 5;

const SOIL_TYPES: [(&str, &str); 5] = [
    ("clay", "Argiloso"),
    ("sandy", "Arenoso"),
    ("loamy", "Humoso"),
    ("mixed", "Misto"),
    ("unknown", "Não sei identificar"),
];

const SUNLIGHT_OPTIONS: [(&str, &str); 3] = [
    ("full", "Sol pleno (mais de 6h/dia)"),
    ("partial", "Parcial (3-6h/dia)"),
    ("shade", "Sombra (menos de 3h/dia)"),
];

const WATER_OPTIONS: [(&str, &str); 5] = [
    ("tap", "Torneira/mangueira"),
    ("rain", "Água da chuva"),
    ("well", "Poço artesiano"),
    ("river", "Rio/córrego próximo"),
    ("other", "Outro"),
];

const OBJECTIVE_OPTIONS: [(&str, &str); 6] = [
    ("shade", "Criar sombra e conforto térmico"),
    ("biodiversity", "Aumentar biodiversidade"),
    ("education", "Educação ambiental"),
    ("food", "Produção de alimentos"),
    ("air", "Melhorar qualidade do ar"),
    ("erosion", "Controle de erosão"),
];

const PRE_PLANTING_CHECKLIST: [&str; 5] = [
    "Analisar e preparar o solo",
    "Escolher espécies nativas adequadas",
    "Preparar sistema de irrigação",
    "Delimitar área de plantio",
    "Adquirir mudas e ferramentas",
];

/// Everything the wizard collects before submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProjectDraft {
    pub name: String,
    pub description: String,
    pub location_name: String,
    pub area_size: String,
    pub soil_type: String,
    pub sunlight: String,
    pub water_access: String,
    pub objective: String,
    pub trees_planned: i64,
}

impl Default for ProjectDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            location_name: String::new(),
            area_size: String::new(),
            soil_type: String::new(),
            sunlight: String::new(),
            water_access: String::new(),
            objective: String::new(),
            trees_planned: 10,
        }
    }
}

fn step_title(step: u8) -> &'static str {
    match step {
        1 => "Informações Básicas",
        2 => "Localização",
        3 => "Dados do Espaço",
        4 => "Objetivo e Planejamento",
        _ => "Resumo do Projeto",
    }
}

fn step_hint(step: u8) -> &'static str {
    match step {
        1 => "Vamos começar com o nome e descrição do seu projeto",
        2 => "Onde será implementada sua microfloresta?",
        3 => "Características do local de plantio",
        4 => "Defina os objetivos do seu projeto",
        _ => "Revise as informações antes de criar o projeto",
    }
}

/// Whether the wizard may advance past `step`. Only the name and the
/// location are required.
fn can_advance(step: u8, draft: &ProjectDraft) -> bool {
    match step {
        1 => !draft.name.trim().is_empty(),
        2 => !draft.location_name.trim().is_empty(),
        _ => true,
    }
}

fn some_if_filled(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_owned())
    }
}

/// Insert payload for the finished draft. New projects always start in
/// `planning` with nothing planted; coordinates come later.
fn build_request(draft: &ProjectDraft, user_id: &str) -> NewProject {
    NewProject {
        user_id: user_id.to_owned(),
        name: draft.name.trim().to_owned(),
        description: some_if_filled(&draft.description),
        location_name: some_if_filled(&draft.location_name),
        location_lat: None,
        location_lng: None,
        trees_planned: draft.trees_planned.max(0),
        trees_planted: 0,
        status: "planning".to_owned(),
    }
}

#[component]
pub fn CreateProjectPage() -> impl IntoView {
    let identity = use_identity();
    let session = identity.state();
    let step = RwSignal::new(1u8);
    let draft = RwSignal::new(ProjectDraft::default());
    let saving = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let created = RwSignal::new(false);

    // Navigation happens here so the dynamic footer button never has to
    // capture the router handle.
    let navigate = use_navigate();
    Effect::new(move |_| {
        if created.get() {
            navigate("/meus-plantios", NavigateOptions::default());
        }
    });

    let submit = move |_| {
        if saving.get_untracked() {
            return;
        }
        let Some(user) = session.get_untracked().user().cloned() else {
            return;
        };
        let request = build_request(&draft.get_untracked(), &user.id);
        saving.set(true);
        error.set(None);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let Some(token) = session_store::read_token() else {
                error.set(Some("Você precisa estar logado para criar um projeto".to_owned()));
                saving.set(false);
                return;
            };
            match api::create_project(&token, &request).await {
                Ok(()) => created.set(true),
                Err(err) => {
                    log::warn!("project creation failed: {err}");
                    error.set(Some(
                        "Não foi possível criar o projeto. Tente novamente.".to_owned(),
                    ));
                    saving.set(false);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = request;
    };

    let step_body = move || match step.get() {
        1 => view! {
            <div class="wizard__fields">
                <label class="wizard__label">"Nome do Projeto"</label>
                <input
                    class="wizard__field"
                    type="text"
                    placeholder="Ex: Microfloresta da Escola Verde"
                    prop:value=move || draft.get().name
                    on:input=move |ev| draft.update(|d| d.name = event_target_value(&ev))
                />
                <label class="wizard__label">"Descrição"</label>
                <textarea
                    class="wizard__field"
                    rows="4"
                    placeholder="Descreva o objetivo e características do seu projeto"
                    prop:value=move || draft.get().description
                    on:input=move |ev| draft.update(|d| d.description = event_target_value(&ev))
                ></textarea>
            </div>
        }
        .into_any(),
        2 => view! {
            <div class="wizard__fields">
                <label class="wizard__label">"Localização"</label>
                <input
                    class="wizard__field"
                    type="text"
                    placeholder="Ex: Rua das Flores, 123 - Bairro Verde"
                    prop:value=move || draft.get().location_name
                    on:input=move |ev| draft.update(|d| d.location_name = event_target_value(&ev))
                />
                <div class="wizard__tip">
                    <p>
                        "💡 Dica: Você pode adicionar coordenadas GPS mais tarde para uma localização mais precisa no mapa"
                    </p>
                </div>
            </div>
        }
        .into_any(),
        3 => view! {
            <div class="wizard__fields">
                <label class="wizard__label">"Área Disponível (m²)"</label>
                <input
                    class="wizard__field"
                    type="number"
                    placeholder="Ex: 100"
                    prop:value=move || draft.get().area_size
                    on:input=move |ev| draft.update(|d| d.area_size = event_target_value(&ev))
                />
                <label class="wizard__label">"Tipo de Solo"</label>
                <select
                    class="wizard__field"
                    prop:value=move || draft.get().soil_type
                    on:change=move |ev| draft.update(|d| d.soil_type = event_target_value(&ev))
                >
                    <option value="">"Selecione o tipo de solo"</option>
                    {SOIL_TYPES
                        .iter()
                        .map(|(value, label)| view! { <option value=*value>{*label}</option> })
                        .collect_view()}
                </select>
                <label class="wizard__label">"Exposição Solar"</label>
                <select
                    class="wizard__field"
                    prop:value=move || draft.get().sunlight
                    on:change=move |ev| draft.update(|d| d.sunlight = event_target_value(&ev))
                >
                    <option value="">"Selecione a exposição solar"</option>
                    {SUNLIGHT_OPTIONS
                        .iter()
                        .map(|(value, label)| view! { <option value=*value>{*label}</option> })
                        .collect_view()}
                </select>
                <label class="wizard__label">"Acesso à Água"</label>
                <select
                    class="wizard__field"
                    prop:value=move || draft.get().water_access
                    on:change=move |ev| draft.update(|d| d.water_access = event_target_value(&ev))
                >
                    <option value="">"Como será a irrigação?"</option>
                    {WATER_OPTIONS
                        .iter()
                        .map(|(value, label)| view! { <option value=*value>{*label}</option> })
                        .collect_view()}
                </select>
            </div>
        }
        .into_any(),
        4 => view! {
            <div class="wizard__fields">
                <label class="wizard__label">"Objetivo Principal"</label>
                <select
                    class="wizard__field"
                    prop:value=move || draft.get().objective
                    on:change=move |ev| draft.update(|d| d.objective = event_target_value(&ev))
                >
                    <option value="">"Qual o objetivo principal?"</option>
                    {OBJECTIVE_OPTIONS
                        .iter()
                        .map(|(value, label)| view! { <option value=*value>{*label}</option> })
                        .collect_view()}
                </select>
                <label class="wizard__label">"Número de Mudas Planejadas"</label>
                <input
                    class="wizard__field"
                    type="number"
                    min="1"
                    prop:value=move || draft.get().trees_planned.to_string()
                    on:input=move |ev| {
                        draft
                            .update(|d| {
                                d.trees_planned = event_target_value(&ev).parse().unwrap_or(0);
                            });
                    }
                />
            </div>
        }
        .into_any(),
        _ => view! {
            <div class="wizard__summary">
                <div class="wizard__plan">
                    <h3>"🌱 Plano Gerado para sua Microfloresta"</h3>
                    <div class="wizard__plan-row">
                        <span>"Projeto:"</span>
                        <strong>{move || draft.get().name}</strong>
                    </div>
                    <div class="wizard__plan-row">
                        <span>"Localização:"</span>
                        <strong>{move || draft.get().location_name}</strong>
                    </div>
                    <div class="wizard__plan-row">
                        <span>"Mudas Planejadas:"</span>
                        <strong>{move || format!("{} mudas", draft.get().trees_planned)}</strong>
                    </div>
                    <div class="wizard__plan-row">
                        <span>"Área Estimada:"</span>
                        <strong>{move || format!("{} m²", draft.get().area_size)}</strong>
                    </div>
                </div>
                <div class="wizard__checklist">
                    <h4>"📋 Checklist Pré-Plantio"</h4>
                    <ul>
                        {PRE_PLANTING_CHECKLIST
                            .iter()
                            .map(|item| view! { <li>"✓ " {*item}</li> })
                            .collect_view()}
                    </ul>
                </div>
            </div>
        }
        .into_any(),
    };

    view! {
        <div class="wizard">
            <PageHeader title="🛠️ Criar Microfloresta">
                <span class="wizard__counter">
                    {move || format!("{}/{}", step.get(), TOTAL_STEPS)}
                </span>
            </PageHeader>
            <main class="wizard__content">
                <section class="wizard__card">
                    <h2 class="wizard__title">{move || step_title(step.get())}</h2>
                    <p class="wizard__hint">{move || step_hint(step.get())}</p>

                    {step_body}

                    {move || {
                        error.get().map(|message| view! { <p class="wizard__error">{message}</p> })
                    }}

                    <div class="wizard__footer">
                        <button
                            class="wizard__prev"
                            disabled=move || step.get() == 1
                            on:click=move |_| {
                                step.update(|s| {
                                    if *s > 1 {
                                        *s -= 1;
                                    }
                                });
                            }
                        >
                            "Anterior"
                        </button>
                        {move || {
                            if step.get() < TOTAL_STEPS {
                                view! {
                                    <button
                                        class="wizard__next"
                                        disabled=move || !can_advance(step.get(), &draft.get())
                                        on:click=move |_| {
                                            step.update(|s| {
                                                if *s < TOTAL_STEPS {
                                                    *s += 1;
                                                }
                                            });
                                        }
                                    >
                                        "Próximo →"
                                    </button>
                                }
                                    .into_any()
                            } else {
                                view! {
                                    <button
                                        class="wizard__submit"
                                        disabled=move || saving.get()
                                        on:click=submit
                                    >
                                        {move || {
                                            if saving.get() { "Criando..." } else { "Criar Projeto" }
                                        }}
                                    </button>
                                }
                                    .into_any()
                            }
                        }}
                    </div>
                </section>
            </main>
        </div>
    }
}
