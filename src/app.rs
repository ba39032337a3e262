//! Application shell: route table, access policies, and global providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! The shell mounts the identity provider above the router so every
//! page shares one session, then maps each path to a page wrapped in
//! the access guard it needs. The splash and auth screens run without
//! a guard. Every other route allows guests except the two screens
//! that mutate account data, which require a full account.
//!
//! DESIGN
//! ======
//! Access policy lives entirely in this route table. Pages never check
//! who is looking at them; by the time a page renders, the guard has
//! already decided it may.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::route_guard::{AccessPolicy, RouteGuard};
use crate::pages::auth::AuthScreen;
use crate::pages::challenges::ChallengesPage;
use crate::pages::community::CommunityPage;
use crate::pages::create_project::CreateProjectPage;
use crate::pages::dashboard::DashboardPage;
use crate::pages::guide_article::GuideArticlePage;
use crate::pages::guides::GuidesPage;
use crate::pages::impact::ImpactPage;
use crate::pages::map::GreenMapPage;
use crate::pages::not_found::NotFoundPage;
use crate::pages::plantings::MyPlantingsPage;
use crate::pages::splash::SplashScreen;
use crate::session::provider::IdentityProvider;

/// Where unauthenticated visitors are sent.
pub const ENTRY_ROUTE: &str = "/auth";

/// Where signed-in visitors land.
pub const DASHBOARD_ROUTE: &str = "/dashboard";

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="pt-BR">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/puff-web.css" />
        <Title text="PUFF - Plante Um Futuro Feliz" />
        <IdentityProvider>
            <Router>
                <Routes fallback=|| view! { <NotFoundPage /> }>
                    <Route path=StaticSegment("") view=SplashScreen />
                    <Route path=StaticSegment("auth") view=AuthScreen />
                    <Route
                        path=StaticSegment("dashboard")
                        view=|| view! {
                            <RouteGuard>
                                <DashboardPage />
                            </RouteGuard>
                        }
                    />
                    <Route
                        path=StaticSegment("mapa-verde")
                        view=|| view! {
                            <RouteGuard>
                                <GreenMapPage />
                            </RouteGuard>
                        }
                    />
                    <Route
                        path=StaticSegment("meus-plantios")
                        view=|| view! {
                            <RouteGuard policy=AccessPolicy::RequireAccount>
                                <MyPlantingsPage />
                            </RouteGuard>
                        }
                    />
                    <Route
                        path=StaticSegment("criar-microfloresta")
                        view=|| view! {
                            <RouteGuard policy=AccessPolicy::RequireAccount>
                                <CreateProjectPage />
                            </RouteGuard>
                        }
                    />
                    <Route
                        path=StaticSegment("desafios")
                        view=|| view! {
                            <RouteGuard>
                                <ChallengesPage />
                            </RouteGuard>
                        }
                    />
                    <Route
                        path=StaticSegment("comunidade")
                        view=|| view! {
                            <RouteGuard>
                                <CommunityPage />
                            </RouteGuard>
                        }
                    />
                    <Route
                        path=StaticSegment("impacto-ambiental")
                        view=|| view! {
                            <RouteGuard>
                                <ImpactPage />
                            </RouteGuard>
                        }
                    />
                    <Route
                        path=StaticSegment("guia")
                        view=|| view! {
                            <RouteGuard>
                                <GuidesPage />
                            </RouteGuard>
                        }
                    />
                    <Route
                        path=(StaticSegment("guia"), StaticSegment("artigo"), ParamSegment("id"))
                        view=|| view! {
                            <RouteGuard>
                                <GuideArticlePage />
                            </RouteGuard>
                        }
                    />
                </Routes>
            </Router>
        </IdentityProvider>
    }
}
