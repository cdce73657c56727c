//! Login page for the placeholder session gate.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::{LoginError, SessionState};

/// Attempt a sign-in and return the banner text on failure.
fn submit_login(session: &mut SessionState, username: &str, password: &str) -> Result<(), String> {
    session.sign_in(username, password).map_err(|e: LoginError| e.to_string())
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let (user, pass) = (username.get_untracked(), password.get_untracked());
        match session.try_update(|s| submit_login(s, &user, &pass)) {
            Some(Ok(())) => {
                error.set(None);
                navigate("/", NavigateOptions::default());
            }
            Some(Err(message)) => error.set(Some(message)),
            None => {}
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Campus Admin"</h1>
                <p class="login-card__subtitle">"Sign in to manage staff, students, and clubs"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        placeholder="Username"
                        autocomplete="username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        autocomplete="current-password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit">
                        "Sign In"
                    </button>
                </form>
                <Show when=move || error.get().is_some()>
                    <p class="login-message">{move || error.get().unwrap_or_default()}</p>
                </Show>
            </div>
        </div>
    }
}
