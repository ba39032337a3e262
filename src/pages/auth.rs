//! Entry screen: sign in, register, or continue as guest
//! =====================================================
//!
//! SYSTEM CONTEXT
//! ==============
//! The fixed entry route. Route guards redirect here whenever a screen
//! requires a session the visitor does not have, and the splash sends
//! first-time visitors here.
//!
//! DESIGN
//! ======
//! One card with a login/register tab pair, plus a guest button below
//! it. A successful login or auto-confirmed registration leaves through
//! a full page load so the next boot resolves the freshly persisted
//! token. Guest entry must NOT reload: the guest session lives only in
//! memory, so it navigates in-app instead.
//!
//! ERROR HANDLING
//! ==============
//! Validation and backend rejections surface inline above the submit
//! button. Registrations that need email confirmation show a notice and
//! keep the visitor on this screen.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::app::DASHBOARD_ROUTE;
use crate::net::types::{SignUpRequest, UserType};
use crate::session::provider::use_identity;

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

const CONFIRMATION_NOTICE: &str = "Conta criada! Verifique seu e-mail para confirmar o cadastro.";

/// Which form the card is showing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum AuthTab {
    #[default]
    Login,
    Signup,
}

/// Validate the login form before any backend call.
fn validate_login_input(email: &str, password: &str) -> Result<(), &'static str> {
    if email.trim().is_empty() || password.is_empty() {
        return Err("Informe e-mail e senha.");
    }
    Ok(())
}

/// Validate the registration form before any backend call.
fn validate_signup_input(
    name: &str,
    email: &str,
    password: &str,
    accepted_terms: bool,
) -> Result<(), &'static str> {
    if name.trim().is_empty() {
        return Err("Informe seu nome completo.");
    }
    if email.trim().is_empty() || password.is_empty() {
        return Err("Informe e-mail e senha.");
    }
    if password.chars().count() < 6 {
        return Err("A senha deve ter pelo menos 6 caracteres.");
    }
    if !accepted_terms {
        return Err("É necessário aceitar os termos de uso.");
    }
    Ok(())
}

/// Leave through a full page load so the next boot resolves the token
/// that was just persisted.
#[cfg(feature = "hydrate")]
fn reload_into(route: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href(route);
    }
}

#[component]
pub fn AuthScreen() -> impl IntoView {
    let identity = use_identity();
    let session = identity.state();

    let tab = RwSignal::new(AuthTab::Login);
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let full_name = RwSignal::new(String::new());
    let user_type = RwSignal::new(UserType::Student.as_str().to_owned());
    let terms = RwSignal::new(false);
    let busy = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let notice = RwSignal::new(None::<String>);

    // Already signed in with an account? Nothing to do here.
    let navigate = use_navigate();
    Effect::new(move |_| {
        let state = session.get();
        if state.is_resolved() && state.user().is_some() {
            navigate(DASHBOARD_ROUTE, NavigateOptions::default());
        }
    });

    let submit_login = move |ev: SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let email_value = email.get_untracked();
        let password_value = password.get_untracked();
        if let Err(message) = validate_login_input(&email_value, &password_value) {
            error.set(Some(message.to_owned()));
            return;
        }
        error.set(None);
        notice.set(None);
        busy.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match identity.sign_in(email_value.trim(), &password_value).await {
                Ok(()) => reload_into(DASHBOARD_ROUTE),
                Err(err) => {
                    error.set(Some(err.to_string()));
                    busy.set(false);
                }
            }
        });
    };

    let submit_signup = move |ev: SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let name_value = full_name.get_untracked();
        let email_value = email.get_untracked();
        let password_value = password.get_untracked();
        if let Err(message) = validate_signup_input(
            &name_value,
            &email_value,
            &password_value,
            terms.get_untracked(),
        ) {
            error.set(Some(message.to_owned()));
            return;
        }
        let request = SignUpRequest {
            email: email_value.trim().to_owned(),
            password: password_value,
            full_name: name_value.trim().to_owned(),
            user_type: UserType::parse(&user_type.get_untracked()),
        };
        error.set(None);
        notice.set(None);
        busy.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            use crate::session::provider::SignUpOutcome;

            match identity.sign_up(&request).await {
                Ok(SignUpOutcome::SessionIssued) => reload_into(DASHBOARD_ROUTE),
                Ok(SignUpOutcome::ConfirmationRequired) => {
                    notice.set(Some(CONFIRMATION_NOTICE.to_owned()));
                    busy.set(false);
                }
                Err(err) => {
                    error.set(Some(err.to_string()));
                    busy.set(false);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = request;
    };

    let navigate_guest = use_navigate();
    let enter_as_guest = move |_| {
        identity.sign_in_as_guest();
        navigate_guest(DASHBOARD_ROUTE, NavigateOptions::default());
    };

    let feedback = move || {
        view! {
            {move || error.get().map(|message| view! { <p class="auth-form__error">{message}</p> })}
            {move || {
                notice.get().map(|message| view! { <p class="auth-form__notice">{message}</p> })
            }}
        }
    };

    view! {
        <main class="auth">
            <div class="auth__branding">
                <span class="auth__logo">"🌱"</span>
                <h1 class="auth__title">"PUFF"</h1>
                <p class="auth__slogan">"Plante Um Futuro Feliz"</p>
            </div>

            <div class="auth__card">
                <div class="auth__tabs">
                    <button
                        class=move || {
                            if tab.get() == AuthTab::Login {
                                "auth__tab auth__tab--active"
                            } else {
                                "auth__tab"
                            }
                        }
                        on:click=move |_| {
                            tab.set(AuthTab::Login);
                            error.set(None);
                            notice.set(None);
                        }
                    >
                        "Entrar"
                    </button>
                    <button
                        class=move || {
                            if tab.get() == AuthTab::Signup {
                                "auth__tab auth__tab--active"
                            } else {
                                "auth__tab"
                            }
                        }
                        on:click=move |_| {
                            tab.set(AuthTab::Signup);
                            error.set(None);
                            notice.set(None);
                        }
                    >
                        "Cadastrar"
                    </button>
                </div>

                <Show
                    when=move || tab.get() == AuthTab::Login
                    fallback=move || {
                        view! {
                            <form class="auth-form" on:submit=submit_signup>
                                <h2 class="auth-form__heading">"Criar Conta"</h2>
                                <p class="auth-form__hint">"Junte-se à comunidade PUFF"</p>
                                <input
                                    class="auth-form__field"
                                    type="text"
                                    placeholder="Seu nome completo"
                                    prop:value=move || full_name.get()
                                    on:input=move |ev| full_name.set(event_target_value(&ev))
                                />
                                <input
                                    class="auth-form__field"
                                    type="email"
                                    placeholder="seu@email.com"
                                    prop:value=move || email.get()
                                    on:input=move |ev| email.set(event_target_value(&ev))
                                />
                                <input
                                    class="auth-form__field"
                                    type="password"
                                    placeholder="Mínimo 6 caracteres"
                                    prop:value=move || password.get()
                                    on:input=move |ev| password.set(event_target_value(&ev))
                                />
                                <select
                                    class="auth-form__field"
                                    prop:value=move || user_type.get()
                                    on:change=move |ev| user_type.set(event_target_value(&ev))
                                >
                                    {UserType::ALL
                                        .iter()
                                        .map(|kind| {
                                            view! {
                                                <option value=kind.as_str()>{kind.label()}</option>
                                            }
                                        })
                                        .collect_view()}
                                </select>
                                <label class="auth-form__terms">
                                    <input
                                        type="checkbox"
                                        prop:checked=move || terms.get()
                                        on:change=move |ev| terms.set(event_target_checked(&ev))
                                    />
                                    <span>"Concordo com os termos e política de uso"</span>
                                </label>
                                {feedback}
                                <button
                                    class="auth-form__submit"
                                    type="submit"
                                    disabled=move || busy.get() || !terms.get()
                                >
                                    {move || if busy.get() { "Criando conta..." } else { "Criar Conta" }}
                                </button>
                            </form>
                        }
                    }
                >
                    <form class="auth-form" on:submit=submit_login>
                        <h2 class="auth-form__heading">"Fazer Login"</h2>
                        <p class="auth-form__hint">"Entre com sua conta PUFF"</p>
                        <input
                            class="auth-form__field"
                            type="email"
                            placeholder="seu@email.com"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                        <input
                            class="auth-form__field"
                            type="password"
                            placeholder="Sua senha"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                        {feedback}
                        <button
                            class="auth-form__submit"
                            type="submit"
                            disabled=move || busy.get()
                        >
                            {move || if busy.get() { "Entrando..." } else { "Entrar" }}
                        </button>
                    </form>
                </Show>
            </div>

            <button class="auth__guest" on:click=enter_as_guest>
                "Explorar como Visitante"
            </button>
        </main>
    }
}
