//! Sign-out button, visible only while an account session is active.
//!
//! Guests exit through their own affordance on the dashboard, so this
//! button hides itself for guest and unauthenticated sessions. It only
//! clears the session; the route guard notices the change and performs
//! the redirect back to the entry screen.

use leptos::prelude::*;

use crate::session::provider::use_identity;

#[component]
pub fn LogoutButton() -> impl IntoView {
    let identity = use_identity();
    let session = identity.state();

    view! {
        <Show when=move || session.get().user().is_some()>
            <button class="logout-button" on:click=move |_| identity.sign_out()>
                "Sair"
            </button>
        </Show>
    }
}
