//! Catch-all for unknown routes.

use leptos::prelude::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    #[cfg(feature = "hydrate")]
    if let Some(path) = web_sys::window().and_then(|window| window.location().pathname().ok()) {
        log::warn!("unknown route: {path}");
    }

    view! {
        <div class="not-found">
            <h1 class="not-found__code">"404"</h1>
            <p>"Ops! Página não encontrada"</p>
            <a class="not-found__home" href="/">
                "Voltar ao início"
            </a>
        </div>
    }
}
