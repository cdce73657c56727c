//! Summary count tile.

use leptos::prelude::*;

#[component]
pub fn StatTile(label: &'static str, value: Signal<String>) -> impl IntoView {
    view! {
        <div class="stat-tile">
            <span class="stat-tile__value">{move || value.get()}</span>
            <span class="stat-tile__label">{label}</span>
        </div>
    }
}
