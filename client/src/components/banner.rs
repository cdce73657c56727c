//! Dismissible message banner for screen errors and notices.

use leptos::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BannerKind {
    #[default]
    Error,
    Notice,
}

impl BannerKind {
    fn class(self) -> &'static str {
        match self {
            Self::Error => "banner banner--error",
            Self::Notice => "banner banner--notice",
        }
    }
}

/// Shows `message` while it is set; the close button runs `on_dismiss`.
#[component]
pub fn Banner(
    message: Signal<Option<String>>,
    on_dismiss: Callback<()>,
    #[prop(optional)] kind: BannerKind,
) -> impl IntoView {
    view! {
        <Show when=move || message.get().is_some()>
            <div class=kind.class() role="alert">
                <span class="banner__text">{move || message.get().unwrap_or_default()}</span>
                <button class="banner__dismiss" title="Dismiss" on:click=move |_| on_dismiss.run(())>
                    "×"
                </button>
            </div>
        </Show>
    }
}
