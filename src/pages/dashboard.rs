//! Dashboard: the home screen after sign-in or guest entry.
//!
//! Greets the visitor by name, links out to every feature area, and
//! shows the headline community numbers. The numbers and the activity
//! feed are editorial placeholders until the stats endpoints exist.

use leptos::prelude::*;

use crate::components::logout_button::LogoutButton;
use crate::components::side_menu::SideMenu;
use crate::session::provider::use_identity;

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

/// Feature cards as (route, icon, title, description, stat line).
const NAV_CARDS: [(&str, &str, &str, &str, &str); 7] = [
    (
        "/mapa-verde",
        "📍",
        "Mapa Verde",
        "Explore projetos de microflorestas",
        "127 projetos ativos",
    ),
    (
        "/meus-plantios",
        "🌱",
        "Meus Plantios",
        "Gerencie seus projetos",
        "3 projetos em andamento",
    ),
    (
        "/criar-microfloresta",
        "➕",
        "Criar Microfloresta",
        "Inicie um novo projeto",
        "Plano personalizado",
    ),
    (
        "/guia",
        "📖",
        "Guia PUFF",
        "Centro de conhecimento",
        "50+ artigos",
    ),
    (
        "/desafios",
        "🎯",
        "Desafios e Ranking",
        "Gamificação e conquistas",
        "Nível 7 - Guardião",
    ),
    (
        "/comunidade",
        "👥",
        "Comunidade PUFF",
        "Fórum e colaboração",
        "1.2k membros ativos",
    ),
    (
        "/impacto-ambiental",
        "📊",
        "Impacto Ambiental",
        "Métricas de sustentabilidade",
        "2.5t CO₂ capturado",
    ),
];

/// Quick stats strip as (modifier class, icon, label, value).
const QUICK_STATS: [(&str, &str, &str, &str); 4] = [
    ("green", "🌱", "Mudas Plantadas", "247"),
    ("blue", "📍", "Área Verde (m²)", "1,234"),
    ("yellow", "🎯", "Desafios", "15/20"),
    ("purple", "👥", "Comunidade", "1,247"),
];

/// Recent activity feed as (icon, text, meta line).
const RECENT_ACTIVITY: [(&str, &str, &str); 3] = [
    (
        "🌱",
        "Microfloresta da Escola Verde crescendo bem!",
        "Há 2 horas • +5 XP",
    ),
    (
        "🎯",
        "Desafio \"20 mudas em Junho\" concluído! 🎉",
        "Ontem • +50 XP",
    ),
    (
        "👥",
        "3 novos membros seguiram seu projeto",
        "2 dias atrás",
    ),
];

/// Greeting line for the header.
fn greeting_for(name: &str) -> String {
    format!("Olá, {name}! 👋")
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let identity = use_identity();
    let session = identity.state();
    let menu_open = RwSignal::new(false);

    let greeting = move || greeting_for(&session.get().display_name());
    let subtitle = move || {
        if session.get().is_guest() {
            "Você está explorando como visitante"
        } else {
            "Bem-vinda de volta"
        }
    };

    view! {
        <div class="dashboard">
            <SideMenu open=menu_open />

            <header class="dashboard__header">
                <div class="dashboard__header-left">
                    <button class="dashboard__menu-button" on:click=move |_| menu_open.set(true)>
                        "☰"
                    </button>
                    <span class="dashboard__logo">"🌱"</span>
                    <h1 class="dashboard__brand">"PUFF"</h1>
                </div>
                <div class="dashboard__header-right">
                    <button class="dashboard__bell">
                        "🔔"
                        <span class="dashboard__badge">"3"</span>
                    </button>
                    <div class="dashboard__greeting">
                        <p class="dashboard__greeting-name">{greeting}</p>
                        <p class="dashboard__greeting-sub">{subtitle}</p>
                    </div>
                    <Show when=move || session.get().is_guest()>
                        <button
                            class="dashboard__guest-exit"
                            on:click=move |_| identity.sign_out()
                        >
                            "Sair do modo visitante"
                        </button>
                    </Show>
                    <LogoutButton />
                </div>
            </header>

            <main class="dashboard__content">
                <section class="dashboard__banner">
                    <h2>"Pronta para plantar hoje?"</h2>
                    <p>
                        "Sua jornada sustentável continua. Que tal conferir novos desafios ou atualizar seus projetos?"
                    </p>
                    <div class="dashboard__banner-actions">
                        <a class="dashboard__banner-button" href="/criar-microfloresta">
                            "Criar Projeto"
                        </a>
                        <a class="dashboard__banner-button--outline" href="/desafios">
                            "Ver Desafios"
                        </a>
                    </div>
                    <span class="dashboard__banner-leaf">"🌿"</span>
                </section>

                <section class="dashboard__stats">
                    {QUICK_STATS
                        .iter()
                        .map(|(modifier, icon, label, value)| {
                            view! {
                                <div class=format!(
                                    "stat-card stat-card--{modifier}",
                                )>
                                    <div>
                                        <p class="stat-card__label">{*label}</p>
                                        <p class="stat-card__value">{*value}</p>
                                    </div>
                                    <span class="stat-card__icon">{*icon}</span>
                                </div>
                            }
                        })
                        .collect_view()}
                </section>

                <section class="dashboard__cards">
                    {NAV_CARDS
                        .iter()
                        .map(|(href, icon, title, description, stats)| {
                            view! {
                                <a class="feature-card" href=*href>
                                    <span class="feature-card__icon">{*icon}</span>
                                    <h3 class="feature-card__title">{*title}</h3>
                                    <p class="feature-card__description">{*description}</p>
                                    <p class="feature-card__stats">{*stats}</p>
                                </a>
                            }
                        })
                        .collect_view()}
                </section>

                <section class="dashboard__activity">
                    <h3>"Atividade Recente"</h3>
                    <p class="dashboard__activity-sub">"Últimas atualizações dos seus projetos"</p>
                    <ul>
                        {RECENT_ACTIVITY
                            .iter()
                            .map(|(icon, text, meta)| {
                                view! {
                                    <li class="activity-item">
                                        <span class="activity-item__icon">{*icon}</span>
                                        <div>
                                            <p class="activity-item__text">{*text}</p>
                                            <p class="activity-item__meta">{*meta}</p>
                                        </div>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </section>
            </main>
        </div>
    }
}
