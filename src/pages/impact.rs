//! Impacto Ambiental: aggregate environmental numbers for the whole
//! initiative. Fixed showcase content until the reporting backend lands.

use leptos::prelude::*;

use crate::components::page_header::PageHeader;

#[cfg(test)]
#[path = "impact_test.rs"]
mod impact_test;

/// (color, icon, title, value, unit, growth note)
const IMPACT_METRICS: [(&str, &str, &str, &str, &str, &str); 6] = [
    ("green", "🌳", "Mudas Plantadas", "2,847", "árvores", "+12% este mês"),
    ("blue", "🍃", "Área Verde Criada", "15,234", "m²", "+8% este mês"),
    ("purple", "💨", "CO₂ Capturado", "4.2", "toneladas", "+15% este mês"),
    (
        "orange",
        "🌡️",
        "Redução de Temperatura",
        "2.5",
        "°C estimado",
        "Nas áreas plantadas",
    ),
    ("pink", "👥", "Pessoas Engajadas", "1,247", "participantes", "+23% este mês"),
    ("cyan", "💧", "Água Conservada", "850", "litros/dia", "Através de captação"),
];

/// (name, trees, area, captured CO₂, status label)
const PROJECT_IMPACT: [(&str, i64, &str, &str, &str); 3] = [
    ("Escola Verde Sustentável", 45, "320 m²", "0.8 ton", "Ativo"),
    ("Parque Comunitário Centro", 78, "650 m²", "1.2 ton", "Crescendo"),
    ("Microfloresta Urbana Norte", 32, "280 m²", "0.6 ton", "Planejando"),
];

/// (goal label, progress text, percent complete)
const YEAR_GOALS: [(&str, &str, u32); 3] = [
    ("3.000 Mudas Plantadas", "2,847 / 3,000", 95),
    ("20,000 m² de Área Verde", "15,234 / 20,000", 76),
    ("5 Toneladas de CO₂ Capturado", "4.2 / 5.0", 84),
];

/// CSS modifier for a project status label. Anything unrecognized
/// renders with the planning treatment.
fn status_modifier(label: &str) -> &'static str {
    match label {
        "Ativo" => "active",
        "Crescendo" => "growing",
        _ => "planning",
    }
}

#[component]
pub fn ImpactPage() -> impl IntoView {
    view! {
        <div class="impact">
            <PageHeader title="📊 Impacto Ambiental" />
            <main class="impact__content">
                <section class="impact__metrics">
                    {IMPACT_METRICS
                        .iter()
                        .map(|(color, icon, title, value, unit, growth)| {
                            view! {
                                <div class="metric-card">
                                    <span class=format!(
                                        "metric-card__icon metric-card__icon--{color}",
                                    )>{*icon}</span>
                                    <h3 class="metric-card__title">{*title}</h3>
                                    <p class="metric-card__value">
                                        <strong>{*value}</strong>
                                        " "
                                        <span class="metric-card__unit">{*unit}</span>
                                    </p>
                                    <p class="metric-card__growth">{*growth}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </section>

                <section class="impact__projects">
                    <h2>"Impacto por Projeto"</h2>
                    <p class="impact__subtitle">
                        "Veja como cada microfloresta contribui para o impacto ambiental"
                    </p>
                    {PROJECT_IMPACT
                        .iter()
                        .map(|(name, trees, area, co2, status)| {
                            view! {
                                <div class="impact-row">
                                    <div class="impact-row__details">
                                        <h4>{*name}</h4>
                                        <div class="impact-row__figures">
                                            <span>"🌳 " {*trees} " árvores"</span>
                                            <span>"🍃 " {*area}</span>
                                            <span>"💨 " {*co2} " CO₂"</span>
                                        </div>
                                    </div>
                                    <span class=format!(
                                        "impact-row__status impact-row__status--{}",
                                        status_modifier(status),
                                    )>{*status}</span>
                                </div>
                            }
                        })
                        .collect_view()}
                </section>

                <section class="impact__goals">
                    <h2>"Metas Ambientais 2024"</h2>
                    <p class="impact__subtitle">"Nossos objetivos para este ano"</p>
                    {YEAR_GOALS
                        .iter()
                        .map(|(label, progress, percent)| {
                            view! {
                                <div class="goal-row">
                                    <div class="goal-row__labels">
                                        <span>{*label}</span>
                                        <span class="goal-row__progress">{*progress}</span>
                                    </div>
                                    <div class="progress-bar">
                                        <div
                                            class="progress-bar__fill"
                                            style:width=format!("{percent}%")
                                        ></div>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </section>
            </main>
        </div>
    }
}
