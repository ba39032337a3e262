//! Splash screen and startup routing
//! =================================
//!
//! First screen of the app. It plays the brand animation while the
//! persisted session is being resolved, then forwards the visitor to
//! the right place.
//!
//! DESIGN
//! ======
//! The exit decision is a join of two conditions: the splash must have
//! been on screen for at least `SPLASH_MIN_MS`, and the session must be
//! resolved. Whichever finishes last triggers the decision. A watchdog
//! caps the wait at `SPLASH_MAX_WAIT_MS`; if resolution still has not
//! landed by then the visitor is routed to the entry screen as if no
//! session existed. The decision itself runs exactly once, tracked by
//! `SplashPhase`, so a late resolution can never cause a second
//! navigation.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::app::{DASHBOARD_ROUTE, ENTRY_ROUTE};
use crate::session::provider::use_identity;
use crate::state::identity::SessionState;

#[cfg(test)]
#[path = "splash_test.rs"]
mod splash_test;

/// Minimum time the splash stays on screen.
pub const SPLASH_MIN_MS: u64 = 2000;

/// Upper bound on waiting for session resolution before the visitor is
/// routed as unauthenticated.
pub const SPLASH_MAX_WAIT_MS: u64 = 8000;

#[cfg(feature = "hydrate")]
const LOGO_REVEAL_MS: u64 = 300;
#[cfg(feature = "hydrate")]
const SLOGAN_REVEAL_MS: u64 = 1000;

/// Lifecycle of the splash screen. The decision fires on the single
/// transition out of `ShowingSplash`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SplashPhase {
    #[default]
    ShowingSplash,
    Deciding,
    Done,
}

/// Join point for the exit conditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SplashJoin {
    timer_done: bool,
    resolved: bool,
    timed_out: bool,
}

impl SplashJoin {
    pub fn note_timer(&mut self) {
        self.timer_done = true;
    }

    pub fn note_resolved(&mut self) {
        self.resolved = true;
    }

    pub fn note_timeout(&mut self) {
        self.timed_out = true;
    }

    /// True once the splash may leave: minimum display time elapsed and
    /// the session is resolved, or the watchdog gave up on it.
    #[must_use]
    pub fn ready(self) -> bool {
        self.timer_done && (self.resolved || self.timed_out)
    }
}

/// Where the splash sends the visitor. An unresolved session only
/// reaches this point through the watchdog and counts as signed out.
fn splash_destination(state: &SessionState) -> &'static str {
    if state.is_resolved() && state.is_signed_in() {
        DASHBOARD_ROUTE
    } else {
        ENTRY_ROUTE
    }
}

/// Advances the splash lifecycle. Returns the next phase and, on the
/// `ShowingSplash` exit, the route to navigate to.
fn sequence_step(
    phase: SplashPhase,
    join: SplashJoin,
    state: &SessionState,
) -> (SplashPhase, Option<&'static str>) {
    if phase != SplashPhase::ShowingSplash || !join.ready() {
        return (phase, None);
    }
    (SplashPhase::Deciding, Some(splash_destination(state)))
}

#[component]
pub fn SplashScreen() -> impl IntoView {
    let identity = use_identity();
    let session = identity.state();
    let phase = RwSignal::new(SplashPhase::ShowingSplash);
    let join = RwSignal::new(SplashJoin::default());
    let logo_visible = RwSignal::new(false);
    let slogan_visible = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    {
        use std::time::Duration;

        use gloo_timers::future::sleep;

        leptos::task::spawn_local(async move {
            sleep(Duration::from_millis(LOGO_REVEAL_MS)).await;
            logo_visible.set(true);
        });
        leptos::task::spawn_local(async move {
            sleep(Duration::from_millis(SLOGAN_REVEAL_MS)).await;
            slogan_visible.set(true);
        });
        leptos::task::spawn_local(async move {
            sleep(Duration::from_millis(SPLASH_MIN_MS)).await;
            join.update(SplashJoin::note_timer);
        });
        leptos::task::spawn_local(async move {
            sleep(Duration::from_millis(SPLASH_MAX_WAIT_MS)).await;
            join.update(SplashJoin::note_timeout);
        });
    }

    Effect::new(move |_| {
        if session.get().is_resolved() {
            join.update(SplashJoin::note_resolved);
        }
    });

    let navigate = use_navigate();
    Effect::new(move |_| {
        let (next, destination) = sequence_step(phase.get_untracked(), join.get(), &session.get());
        if let Some(destination) = destination {
            phase.set(next);
            navigate(destination, NavigateOptions::default());
            phase.set(SplashPhase::Done);
        }
    });

    view! {
        <main class="splash">
            <div class=move || {
                if logo_visible.get() {
                    "splash__logo splash__logo--visible"
                } else {
                    "splash__logo"
                }
            }>
                <span class="splash__logo-icon">"🌱"</span>
                <h1 class="splash__logo-text">"PUFF"</h1>
            </div>
            <p class=move || {
                if slogan_visible.get() {
                    "splash__slogan splash__slogan--visible"
                } else {
                    "splash__slogan"
                }
            }>"Plante Um Futuro Feliz"</p>
            <div class="splash__dots">
                <span class="splash__dot"></span>
                <span class="splash__dot"></span>
                <span class="splash__dot"></span>
            </div>
        </main>
    }
}
