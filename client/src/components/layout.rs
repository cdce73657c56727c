//! Console chrome: side navigation, API health badge, and the session bar.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every console route renders inside `ConsoleLayout`. The layout applies
//! the unauthenticated redirect and renders page content only while a user
//! is signed in. It issues one status call on mount and shows the result as
//! a badge; it holds no other state.

use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};

use crate::net::console_api;
use crate::state::session::SessionState;
use crate::state::shell::{ApiHealth, NAV_ITEMS, check_health, is_active};
use crate::util::auth::install_unauth_redirect;
use crate::util::task::spawn;

#[component]
pub fn ConsoleLayout(title: &'static str, children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    install_unauth_redirect(session, use_navigate());

    let health = RwSignal::new(ApiHealth::Checking);
    Effect::new(move || {
        spawn(async move {
            let status = check_health(&console_api()).await;
            health.set(status);
        });
    });

    let pathname = use_location().pathname;
    let nav_class = move |href: &'static str| {
        if is_active(&pathname.get(), href) { "nav__link nav__link--active" } else { "nav__link" }
    };

    let on_logout = move |_| session.update(SessionState::sign_out);

    view! {
        <div class="console">
            <nav class="console__nav">
                <div class="console__brand">"Campus Admin"</div>
                {NAV_ITEMS
                    .into_iter()
                    .map(|item| {
                        view! {
                            <a class=move || nav_class(item.href) href=item.href>
                                {item.label}
                            </a>
                        }
                    })
                    .collect_view()}
            </nav>
            <div class="console__main">
                <header class="console__topbar toolbar">
                    <h1 class="console__title">{title}</h1>
                    <span class="toolbar__spacer"></span>
                    <span class=move || health.get().badge_class()>{move || health.get().label()}</span>
                    <span class="toolbar__self">{move || session.get().user.unwrap_or_default()}</span>
                    <button class="btn toolbar__logout" on:click=on_logout title="Logout">
                        "Logout"
                    </button>
                </header>
                <Show
                    when=move || session.get().is_signed_in()
                    fallback=|| view! { <p class="console__redirect">"Redirecting to login..."</p> }
                >
                    <main class="console__content">{children()}</main>
                </Show>
            </div>
        </div>
    }
}
