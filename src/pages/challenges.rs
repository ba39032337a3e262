//! Desafios: gamified environmental challenges.
//!
//! The challenge list is public data. Progress is personal: account
//! holders get their progress rows joined onto the list, guests see the
//! list with an invitation to sign in. Completion counts either way a
//! challenge can finish: an explicit completion timestamp or progress
//! reaching the target.

use leptos::prelude::*;

use crate::components::page_header::PageHeader;
#[cfg(feature = "hydrate")]
use crate::net::api;
use crate::net::types::{Challenge, ChallengeProgress};
use crate::session::provider::use_identity;
#[cfg(feature = "hydrate")]
use crate::util::session_store;

#[cfg(test)]
#[path = "challenges_test.rs"]
mod challenges_test;

/// Community ranking as (name, completion line, XP badge). Editorial
/// placeholder until a ranking endpoint exists.
const RANKING: [(&str, &str, &str); 3] = [
    ("Thais Lima", "15 desafios completos", "1,250 XP"),
    ("João Silva", "12 desafios completos", "980 XP"),
    ("Maria Santos", "10 desafios completos", "850 XP"),
];

/// Icon for a challenge kind.
fn challenge_icon(kind: &str) -> &'static str {
    match kind {
        "planting" => "🌱",
        "biodiversity" => "🐝",
        "composting" => "♻️",
        "maintenance" => "🌳",
        "education" => "📚",
        _ => "🎯",
    }
}

/// Badge class modifier for a challenge kind.
fn challenge_modifier(kind: &str) -> &'static str {
    match kind {
        "planting" => "planting",
        "biodiversity" => "biodiversity",
        "composting" => "composting",
        "maintenance" => "maintenance",
        "education" => "education",
        _ => "other",
    }
}

/// A challenge joined with the viewer's progress row, if any.
#[derive(Clone, Debug, PartialEq)]
pub struct TrackedChallenge {
    pub challenge: Challenge,
    pub current: i64,
    pub completed_at: Option<String>,
}

impl TrackedChallenge {
    /// Progress toward the target in percent, capped at 100.
    pub fn percent(&self) -> i64 {
        let target = self.challenge.target_value;
        if target <= 0 {
            return 0;
        }
        ((self.current * 100 + target / 2) / target).min(100)
    }

    /// Either the backend marked it complete or the target was reached.
    pub fn is_completed(&self) -> bool {
        self.completed_at.is_some() || self.percent() >= 100
    }
}

/// Join challenges with the viewer's progress rows. Challenges without
/// a row start at zero.
fn track(challenges: Vec<Challenge>, progress: &[ChallengeProgress]) -> Vec<TrackedChallenge> {
    challenges
        .into_iter()
        .map(|challenge| {
            let row = progress.iter().find(|row| row.challenge_id == challenge.id);
            TrackedChallenge {
                current: row.and_then(|row| row.current_progress).unwrap_or(0),
                completed_at: row.and_then(|row| row.completed_at.clone()),
                challenge,
            }
        })
        .collect()
}

#[component]
pub fn ChallengesPage() -> impl IntoView {
    let identity = use_identity();
    let session = identity.state();
    let tracked = RwSignal::new(Vec::<TrackedChallenge>::new());
    let loading = RwSignal::new(true);
    let feedback = RwSignal::new(None::<String>);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match api::list_active_challenges().await {
            Ok(challenges) => {
                let mut progress_rows = Vec::new();
                let viewer = session.get_untracked();
                if let Some(user) = viewer.user() {
                    if let Some(token) = session_store::read_token() {
                        match api::list_challenge_progress(&token, &user.id).await {
                            Ok(rows) => progress_rows = rows,
                            Err(err) => log::warn!("challenge progress fetch failed: {err}"),
                        }
                    }
                }
                tracked.set(track(challenges, &progress_rows));
            }
            Err(err) => {
                log::warn!("challenge listing failed: {err}");
                feedback.set(Some("Não foi possível carregar os desafios".to_owned()));
            }
        }
        loading.set(false);
    });

    let grid = move || {
        if loading.get() {
            return (0..3)
                .map(|_| view! { <div class="challenge-card challenge-card--skeleton"></div> })
                .collect_view()
                .into_any();
        }
        tracked
            .get()
            .into_iter()
            .map(|item| {
                let done = item.is_completed();
                let percent = item.percent();
                let kind = item.challenge.challenge_type.clone();
                let points = item.challenge.points_reward.unwrap_or(0);
                view! {
                    <article class=if done {
                        "challenge-card challenge-card--done"
                    } else {
                        "challenge-card"
                    }>
                        <div class="challenge-card__top">
                            <span class=format!(
                                "challenge-card__icon challenge-card__icon--{}",
                                challenge_modifier(&kind),
                            )>{challenge_icon(&kind)}</span>
                            {done.then(|| view! { <span class="challenge-card__check">"✅"</span> })}
                            <span class="challenge-card__xp">"+" {points} " XP"</span>
                        </div>
                        <h3 class="challenge-card__title">{item.challenge.title.clone()}</h3>
                        <p class="challenge-card__description">
                            {item.challenge.description.clone()}
                        </p>
                        <div class="challenge-card__progress-row">
                            <span>"Progresso"</span>
                            <span>{item.current} " / " {item.challenge.target_value}</span>
                        </div>
                        <div class="progress-bar">
                            <div
                                class="progress-bar__fill"
                                style=format!("width: {percent}%")
                            ></div>
                        </div>
                        <p class="challenge-card__percent">{percent} "% concluído"</p>
                        {if done {
                            view! {
                                <div class="challenge-card__done-banner">
                                    "⭐ Desafio Concluído!"
                                </div>
                            }
                                .into_any()
                        } else {
                            view! {
                                <button
                                    class="challenge-card__continue"
                                    on:click=move |_| {
                                        feedback
                                            .set(
                                                Some(
                                                    "Continue suas atividades para completar este desafio!"
                                                        .to_owned(),
                                                ),
                                            );
                                    }
                                >
                                    "🎯 Continuar Desafio"
                                </button>
                            }
                                .into_any()
                        }}
                    </article>
                }
            })
            .collect_view()
            .into_any()
    };

    view! {
        <div class="challenges">
            <PageHeader title="🎯 Desafios e Ranking">
                <Show when=move || session.get().user().is_some()>
                    <span class="challenges__level">"🏆 Nível 7 - Guardião"</span>
                </Show>
            </PageHeader>
            <main class="challenges__content">
                {move || {
                    if session.get().is_guest() {
                        view! {
                            <section class="challenges__guest-note">
                                <h2>"Faça login para ver seus desafios"</h2>
                                <p>
                                    "Entre na sua conta para participar dos desafios e ganhar pontos"
                                </p>
                            </section>
                        }
                            .into_any()
                    } else {
                        view! {
                            <section class="challenges__intro">
                                <h2>"Seus Desafios Ambientais"</h2>
                                <p>"Complete desafios para ganhar pontos XP e medalhas especiais"</p>
                            </section>
                        }
                            .into_any()
                    }
                }}
                {move || {
                    feedback
                        .get()
                        .map(|message| view! { <p class="challenges__feedback">{message}</p> })
                }}
                <section class="challenges__grid">{grid}</section>

                <section class="challenges__ranking">
                    <h3>"🏆 Ranking da Comunidade"</h3>
                    <p>"Veja como você está comparado a outros membros"</p>
                    <ol>
                        {RANKING
                            .iter()
                            .enumerate()
                            .map(|(index, (name, detail, xp))| {
                                view! {
                                    <li class="ranking-row">
                                        <span class="ranking-row__position">{index + 1}</span>
                                        <div class="ranking-row__who">
                                            <p class="ranking-row__name">{*name}</p>
                                            <p class="ranking-row__detail">{*detail}</p>
                                        </div>
                                        <span class="ranking-row__xp">{*xp}</span>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ol>
                </section>
            </main>
        </div>
    }
}
