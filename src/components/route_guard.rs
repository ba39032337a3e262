//! Access control wrapper for routed pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every feature route renders inside a [`RouteGuard`] so access rules
//! live in one place instead of being re-implemented per page.
//!
//! DESIGN
//! ======
//! The guard is driven by a pure [`evaluate`] function over the session
//! state. While the session is still resolving it renders a neutral
//! placeholder and never redirects, so a signed-in user reloading a deep
//! link is not bounced through the entry screen. Once resolved, an
//! unauthorized visitor is sent to the entry route and the protected
//! content is withheld for the frame in between.

#[cfg(test)]
#[path = "route_guard_test.rs"]
mod route_guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::app::ENTRY_ROUTE;
use crate::session::provider::use_identity;
use crate::state::identity::SessionState;

/// Who may see a guarded route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccessPolicy {
    /// Guests and account holders.
    AllowGuest,
    /// Account holders only.
    RequireAccount,
}

/// What the guard should do for the current session state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Session unresolved: render a placeholder, do not redirect.
    Pending,
    /// Resolved and not permitted: send to the entry route.
    Redirect,
    /// Resolved and permitted: render the page.
    Render,
}

/// Decide how a policy treats a session state.
#[must_use]
pub fn evaluate(policy: AccessPolicy, state: &SessionState) -> GuardOutcome {
    if state.is_loading() {
        return GuardOutcome::Pending;
    }
    let permitted = match policy {
        AccessPolicy::AllowGuest => state.is_signed_in(),
        AccessPolicy::RequireAccount => state.user().is_some(),
    };
    if permitted {
        GuardOutcome::Render
    } else {
        GuardOutcome::Redirect
    }
}

/// Wrap a page in an access policy.
#[component]
pub fn RouteGuard(
    #[prop(default = AccessPolicy::AllowGuest)] policy: AccessPolicy,
    children: ChildrenFn,
) -> impl IntoView {
    let identity = use_identity();
    let session = identity.state();

    let navigate = use_navigate();
    Effect::new(move || {
        if evaluate(policy, &session.get()) == GuardOutcome::Redirect {
            navigate(ENTRY_ROUTE, NavigateOptions::default());
        }
    });

    view! {
        {move || match evaluate(policy, &session.get()) {
            GuardOutcome::Pending => view! {
                <div class="guard-placeholder">
                    <p>"Carregando..."</p>
                </div>
            }
            .into_any(),
            GuardOutcome::Redirect => view! {
                <div class="guard-placeholder">
                    <p>"Redirecionando..."</p>
                </div>
            }
            .into_any(),
            GuardOutcome::Render => children().into_any(),
        }}
    }
}
