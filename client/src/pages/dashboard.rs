//! Dashboard page: live summary counts and quick links to each screen.

use leptos::prelude::*;

use crate::components::banner::Banner;
use crate::components::layout::ConsoleLayout;
use crate::components::stat_tile::StatTile;
use crate::net::console_api;
use crate::state::dashboard::{self, DashboardState};
use crate::util::auth::load_when_signed_in;
use crate::util::task::spawn;

const QUICK_ACTIONS: [(&str, &str); 4] = [
    ("Manage Staff", "/staff"),
    ("Manage Students", "/students"),
    ("Manage Clubs", "/clubs"),
    ("Manage Clusters", "/clusters"),
];

/// Dashboard page, the console landing route.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let state = RwSignal::new(DashboardState::default());
    load_when_signed_in(move || reload(state));

    view! {
        <ConsoleLayout title="Dashboard">
            <Banner
                message=Signal::derive(move || state.get().error)
                on_dismiss=Callback::new(move |()| state.update(DashboardState::dismiss_error))
            />
            <Show when=move || !state.with(|s| s.loading) fallback=|| view! { <p class="loading">"Loading summary..."</p> }>
                <div class="stat-grid">
                    {move || {
                        state
                            .get()
                            .tiles
                            .into_iter()
                            .map(|tile| view! { <StatTile label=tile.label value=Signal::derive(move || tile.value())/> })
                            .collect_view()
                    }}
                </div>
            </Show>
            <section class="quick-actions">
                <h2>"Quick Actions"</h2>
                <div class="quick-actions__links">
                    {QUICK_ACTIONS
                        .into_iter()
                        .map(|(label, href)| view! { <a class="btn" href=href>{label}</a> })
                        .collect_view()}
                </div>
            </section>
        </ConsoleLayout>
    }
}

fn reload(state: RwSignal<DashboardState>) {
    state.update(DashboardState::begin_load);
    spawn(async move {
        let load = dashboard::load(&console_api()).await;
        state.update(|s| s.apply_load(load));
    });
}
