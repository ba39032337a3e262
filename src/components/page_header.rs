//! Shared feature-page header with a back affordance.

use leptos::prelude::*;

use crate::app::DASHBOARD_ROUTE;

/// Header bar used by every feature screen: back link, title, and an
/// optional right-hand slot for page actions.
#[component]
pub fn PageHeader(
    #[prop(into)] title: String,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    view! {
        <header class="page-header">
            <a class="page-header__back" href=DASHBOARD_ROUTE>
                "← Voltar"
            </a>
            <h1 class="page-header__title">{title}</h1>
            <div class="page-header__extra">{children.map(|children| children())}</div>
        </header>
    }
}
