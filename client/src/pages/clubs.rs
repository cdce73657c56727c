//! Clubs page: club cards with coordinator, capacity, and status, plus a
//! settings tab holding the two-step "delete all clubs" action.

use campus_api::types::Club;
use leptos::prelude::*;

use crate::components::banner::Banner;
use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::fields::{SelectField, TextAreaField, TextField};
use crate::components::layout::ConsoleLayout;
use crate::components::modal::FormModal;
use crate::net::console_api;
use crate::state::clubs::{self, ClubForm, ClubsState, ClubsTab, occupancy};
use crate::util::auth::load_when_signed_in;
use crate::util::task::spawn;

#[component]
pub fn ClubsPage() -> impl IntoView {
    let state = RwSignal::new(ClubsState::default());
    load_when_signed_in(move || reload(state));

    let tab_class = move |tab: ClubsTab| {
        if state.with(|s| s.tab == tab) { "tabs__tab tabs__tab--active" } else { "tabs__tab" }
    };

    view! {
        <ConsoleLayout title="Club Management">
            <Banner
                message=Signal::derive(move || state.get().error)
                on_dismiss=Callback::new(move |()| state.update(ClubsState::dismiss_error))
            />
            <div class="tabs">
                <button class=move || tab_class(ClubsTab::Clubs) on:click=move |_| state.update(|s| s.tab = ClubsTab::Clubs)>
                    "Clubs"
                </button>
                <button
                    class=move || tab_class(ClubsTab::Settings)
                    on:click=move |_| state.update(|s| s.tab = ClubsTab::Settings)
                >
                    "Settings"
                </button>
            </div>
            <Show
                when=move || state.with(|s| s.tab == ClubsTab::Clubs)
                fallback=move || view! { <SettingsTab state=state/> }
            >
                <ClubsTabView state=state/>
            </Show>
            <ClubModal state=state/>
            <Show when=move || state.with(|s| s.deleting.is_open())>
                <ConfirmDialog
                    title="Delete Club"
                    message=Signal::derive(|| "Are you sure you want to delete this club?".to_owned())
                    on_confirm=Callback::new(move |()| confirm_delete(state))
                    on_cancel=Callback::new(move |()| state.update(|s| s.deleting.cancel()))
                />
            </Show>
            <Show when=move || state.with(|s| s.delete_all_prompt().is_some())>
                <ConfirmDialog
                    title="Delete All Clubs"
                    message=Signal::derive(move || {
                        state.with(|s| s.delete_all_prompt().unwrap_or_default().to_owned())
                    })
                    confirm_label="Delete All"
                    on_confirm=Callback::new(move |()| accept_delete_all(state))
                    on_cancel=Callback::new(move |()| state.update(|s| s.delete_all.cancel()))
                />
            </Show>
        </ConsoleLayout>
    }
}

// =============================================================================
// CLUBS TAB
// =============================================================================

#[component]
fn ClubsTabView(state: RwSignal<ClubsState>) -> impl IntoView {
    view! {
        <div class="page-actions">
            <button class="btn btn--primary" on:click=move |_| state.update(ClubsState::open_create)>
                "+ Create Club"
            </button>
        </div>
        <Show
            when=move || !state.with(|s| s.clubs.is_loading())
            fallback=|| view! { <p class="loading">"Loading clubs..."</p> }
        >
            <Show
                when=move || state.with(|s| s.empty_message().is_none())
                fallback=move || view! { <p class="empty-state">{move || state.with(ClubsState::empty_message)}</p> }
            >
                <div class="card-grid">
                    {move || {
                        let current = state.get();
                        current
                            .clubs
                            .items
                            .iter()
                            .map(|club| {
                                let coordinator = current.coordinator_label(club);
                                view! { <ClubCard club=club.clone() coordinator=coordinator state=state/> }
                            })
                            .collect_view()
                    }}
                </div>
            </Show>
        </Show>
    }
}

#[component]
fn ClubCard(club: Club, coordinator: String, state: RwSignal<ClubsState>) -> impl IntoView {
    let id = club.id;
    let name = club.name.clone();
    let description = club.description.clone().unwrap_or_default();
    let members = occupancy(&club);
    let representatives = club.representative_count;
    let (status, status_class) =
        if club.is_active { ("Active", "badge badge--ok") } else { ("Inactive", "badge badge--muted") };

    view! {
        <div class="club-card">
            <div class="club-card__header">
                <h3>{name}</h3>
                <span class=status_class>{status}</span>
            </div>
            <p class="club-card__description">{description}</p>
            <dl class="club-card__facts">
                <dt>"Coordinator"</dt>
                <dd>{coordinator}</dd>
                <dt>"Members"</dt>
                <dd>{members}</dd>
                <dt>"Representatives"</dt>
                <dd>{representatives}</dd>
            </dl>
            <div class="club-card__actions">
                <button class="btn btn--small" on:click=move |_| state.update(|s| s.open_edit(&club))>
                    "Edit"
                </button>
                <button class="btn btn--small" on:click=move |_| toggle(state, id)>
                    "Toggle Status"
                </button>
                <button class="btn btn--small btn--danger" on:click=move |_| state.update(|s| s.deleting.request(id))>
                    "Delete"
                </button>
            </div>
        </div>
    }
}

#[component]
fn SettingsTab(state: RwSignal<ClubsState>) -> impl IntoView {
    view! {
        <section class="danger-zone">
            <h2>"Danger Zone"</h2>
            <p>"Delete every club along with its memberships. This cannot be undone."</p>
            <button
                class="btn btn--danger"
                disabled=move || state.with(|s| s.clubs.items.is_empty())
                on:click=move |_| state.update(|s| s.delete_all.begin())
            >
                "Delete All Clubs"
            </button>
        </section>
    }
}

#[component]
fn ClubModal(state: RwSignal<ClubsState>) -> impl IntoView {
    let coordinator_options = Signal::derive(move || {
        state.with(|s| s.staff.items.iter().map(|m| (m.id.to_string(), m.name.clone())).collect::<Vec<_>>())
    });

    view! {
        <Show when=move || state.with(|s| s.editor.is_some())>
            <FormModal
                title=Signal::derive(move || {
                    state.with(|s| s.editor.as_ref().map(|e| e.title("Club")).unwrap_or_default())
                })
                on_submit=Callback::new(move |()| save(state))
                on_close=Callback::new(move |()| state.update(ClubsState::close_editor))
            >
                <TextField
                    label="Club Name"
                    required=true
                    value=form_value(state, |f| f.name.clone())
                    on_input=Callback::new(move |v| edit_form(state, |f| f.name = v))
                />
                <SelectField
                    label="Coordinator"
                    required=true
                    placeholder="Select coordinator"
                    value=form_value(state, |f| f.coordinator.clone())
                    options=coordinator_options
                    on_change=Callback::new(move |v| edit_form(state, |f| f.coordinator = v))
                />
                <TextAreaField
                    label="Description"
                    value=form_value(state, |f| f.description.clone())
                    on_input=Callback::new(move |v| edit_form(state, |f| f.description = v))
                />
                <TextField
                    label="Max Members"
                    input_type="number"
                    value=form_value(state, |f| f.max_members.clone())
                    on_input=Callback::new(move |v| edit_form(state, |f| f.max_members = v))
                />
            </FormModal>
        </Show>
    }
}

fn form_value(state: RwSignal<ClubsState>, read: fn(&ClubForm) -> String) -> Signal<String> {
    Signal::derive(move || state.with(|s| s.editor.as_ref().map(|e| read(&e.form)).unwrap_or_default()))
}

fn edit_form(state: RwSignal<ClubsState>, edit: impl FnOnce(&mut ClubForm)) {
    state.update(|s| {
        if let Some(editor) = s.editor.as_mut() {
            edit(&mut editor.form);
        }
    });
}

// =============================================================================
// ACTIONS
// =============================================================================

fn reload(state: RwSignal<ClubsState>) {
    state.update(ClubsState::begin_load);
    spawn(async move {
        let load = clubs::load(&console_api()).await;
        state.update(|s| s.apply_load(load));
    });
}

fn save(state: RwSignal<ClubsState>) {
    let Some((mode, payload)) = state.try_update(ClubsState::prepare_save).flatten() else {
        return;
    };
    spawn(async move {
        let outcome = clubs::save(&console_api(), mode, &payload).await;
        state.update(|s| s.apply_save(outcome));
    });
}

fn confirm_delete(state: RwSignal<ClubsState>) {
    let Some(id) = state.try_update(|s| s.deleting.confirm()).flatten() else {
        return;
    };
    spawn(async move {
        let outcome = clubs::delete(&console_api(), id).await;
        state.update(|s| s.apply_delete(outcome));
    });
}

fn toggle(state: RwSignal<ClubsState>, id: i64) {
    spawn(async move {
        let outcome = clubs::toggle(&console_api(), id).await;
        state.update(|s| s.apply_toggle(outcome));
    });
}

/// Advance the two-prompt gate; the second acceptance deletes every club.
fn accept_delete_all(state: RwSignal<ClubsState>) {
    let Some(ids) = state
        .try_update(|s| s.delete_all.accept().then(|| s.all_club_ids()))
        .flatten()
    else {
        return;
    };
    spawn(async move {
        let outcome = clubs::delete_all(&console_api(), &ids).await;
        state.update(|s| s.apply_delete_all(outcome));
    });
}
