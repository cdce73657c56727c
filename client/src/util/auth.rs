//! Shared session-gate UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every console route applies the same unauthenticated redirect behavior.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::session::SessionState;

/// Whether a console route should bounce to `/login`.
pub fn should_redirect_unauth(state: &SessionState) -> bool {
    !state.is_signed_in()
}

/// Redirect to `/login` whenever no user is signed in.
pub fn install_unauth_redirect<F>(session: RwSignal<SessionState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_unauth(&session.get()) {
            navigate("/login", NavigateOptions::default());
        }
    });
}

/// Run `load` whenever a user becomes signed in, including on mount when
/// the session is already open.
pub fn load_when_signed_in<F>(load: F)
where
    F: Fn() + 'static,
{
    let session = expect_context::<RwSignal<SessionState>>();
    Effect::new(move || {
        if session.with(SessionState::is_signed_in) {
            load();
        }
    });
}
