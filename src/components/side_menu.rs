//! Slide-in navigation menu
//! =======================
//!
//! Overlay menu opened from the dashboard header. Every entry is a plain
//! router anchor, so closing the menu on click is the only state this
//! component manages.

use leptos::prelude::*;

/// Menu entries as (route, icon, label).
const MENU_ITEMS: [(&str, &str, &str); 7] = [
    ("/mapa-verde", "📍", "Mapa Verde"),
    ("/meus-plantios", "🌱", "Meus Plantios"),
    ("/criar-microfloresta", "➕", "Novo Projeto"),
    ("/guia", "📖", "Guia de Plantio"),
    ("/desafios", "🎯", "Desafios"),
    ("/comunidade", "👥", "Fórum"),
    ("/impacto-ambiental", "📊", "Impacto Ambiental"),
];

#[component]
pub fn SideMenu(open: RwSignal<bool>) -> impl IntoView {
    view! {
        <Show when=move || open.get()>
            <div class="side-menu__backdrop" on:click=move |_| open.set(false)></div>
            <nav class="side-menu">
                <div class="side-menu__header">
                    <span class="side-menu__logo">"🌱"</span>
                    <span class="side-menu__brand">"PUFF"</span>
                </div>
                <ul class="side-menu__items">
                    {MENU_ITEMS
                        .iter()
                        .map(|(href, icon, label)| {
                            view! {
                                <li>
                                    <a
                                        class="side-menu__item"
                                        href=*href
                                        on:click=move |_| open.set(false)
                                    >
                                        <span class="side-menu__icon">{*icon}</span>
                                        <span>{*label}</span>
                                    </a>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
                <div class="side-menu__promo">
                    <h4>"🌿 Plante uma Ideia!"</h4>
                    <p>"Transforme sua comunidade com microflorestas"</p>
                </div>
            </nav>
        </Show>
    }
}
