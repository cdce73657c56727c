//! Clusters page: cohort list with create/edit, delete, and status toggle.

use campus_api::types::Cluster;
use leptos::prelude::*;

use crate::components::banner::Banner;
use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::fields::{CheckboxField, TextAreaField, TextField};
use crate::components::layout::ConsoleLayout;
use crate::components::modal::FormModal;
use crate::net::console_api;
use crate::state::clusters::{self, ClusterForm, ClustersState};
use crate::util::auth::load_when_signed_in;
use crate::util::task::spawn;

#[component]
pub fn ClustersPage() -> impl IntoView {
    let state = RwSignal::new(ClustersState::default());
    load_when_signed_in(move || reload(state));

    let on_dismiss = Callback::new(move |()| state.update(ClustersState::dismiss_error));
    let on_close = Callback::new(move |()| state.update(ClustersState::close_editor));
    let on_save = Callback::new(move |()| save(state));
    let on_delete_cancel = Callback::new(move |()| state.update(|s| s.deleting.cancel()));
    let on_delete_confirm = Callback::new(move |()| confirm_delete(state));

    view! {
        <ConsoleLayout title="Clusters">
            <Banner message=Signal::derive(move || state.get().error) on_dismiss=on_dismiss/>
            <div class="page-actions">
                <button class="btn btn--primary" on:click=move |_| state.update(ClustersState::open_create)>
                    "+ Add Cluster"
                </button>
            </div>
            <Show
                when=move || !state.with(|s| s.clusters.is_loading())
                fallback=|| view! { <p class="loading">"Loading clusters..."</p> }
            >
                <Show
                    when=move || state.with(|s| s.empty_message().is_none())
                    fallback=move || view! { <p class="empty-state">{move || state.with(ClustersState::empty_message)}</p> }
                >
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>"Name"</th>
                                <th>"Code"</th>
                                <th>"Description"</th>
                                <th>"Status"</th>
                                <th>"Actions"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                state
                                    .get()
                                    .clusters
                                    .items
                                    .into_iter()
                                    .map(|cluster| view! { <ClusterRow cluster=cluster state=state/> })
                                    .collect_view()
                            }}
                        </tbody>
                    </table>
                </Show>
            </Show>
            <Show when=move || state.with(|s| s.editor.is_some())>
                <FormModal
                    title=Signal::derive(move || {
                        state.with(|s| s.editor.as_ref().map(|e| e.title("Cluster")).unwrap_or_default())
                    })
                    on_submit=on_save
                    on_close=on_close
                >
                    <TextField
                        label="Cluster Name"
                        required=true
                        value=form_value(state, |f| f.name.clone())
                        on_input=Callback::new(move |v| edit_form(state, |f| f.name = v))
                    />
                    <TextField
                        label="Cluster Code"
                        required=true
                        value=form_value(state, |f| f.code.clone())
                        on_input=Callback::new(move |v| edit_form(state, |f| f.code = v))
                    />
                    <TextAreaField
                        label="Description"
                        value=form_value(state, |f| f.description.clone())
                        on_input=Callback::new(move |v| edit_form(state, |f| f.description = v))
                    />
                    <CheckboxField
                        label="Active"
                        checked=form_value(state, |f| f.is_active)
                        on_toggle=Callback::new(move |v| edit_form(state, |f| f.is_active = v))
                    />
                </FormModal>
            </Show>
            <Show when=move || state.with(|s| s.deleting.is_open())>
                <ConfirmDialog
                    title="Delete Cluster"
                    message=Signal::derive(|| "Are you sure you want to delete this cluster?".to_owned())
                    on_confirm=on_delete_confirm
                    on_cancel=on_delete_cancel
                />
            </Show>
        </ConsoleLayout>
    }
}

#[component]
fn ClusterRow(cluster: Cluster, state: RwSignal<ClustersState>) -> impl IntoView {
    let id = cluster.id;
    let name = cluster.name.clone();
    let code = cluster.code.clone();
    let description = cluster.description.clone().unwrap_or_default();
    let (status, status_class) =
        if cluster.is_active { ("Active", "badge badge--ok") } else { ("Inactive", "badge badge--muted") };

    view! {
        <tr>
            <td>{name}</td>
            <td>{code}</td>
            <td>{description}</td>
            <td>
                <span class=status_class>{status}</span>
            </td>
            <td class="data-table__actions">
                <button class="btn btn--small" on:click=move |_| state.update(|s| s.open_edit(&cluster))>
                    "Edit"
                </button>
                <button class="btn btn--small" on:click=move |_| toggle(state, id)>
                    "Toggle Status"
                </button>
                <button class="btn btn--small btn--danger" on:click=move |_| state.update(|s| s.deleting.request(id))>
                    "Delete"
                </button>
            </td>
        </tr>
    }
}

// =============================================================================
// FORM BINDING
// =============================================================================

fn form_value<T>(state: RwSignal<ClustersState>, read: fn(&ClusterForm) -> T) -> Signal<T>
where
    T: Default + Send + Sync + 'static,
{
    Signal::derive(move || state.with(|s| s.editor.as_ref().map(|e| read(&e.form)).unwrap_or_default()))
}

fn edit_form(state: RwSignal<ClustersState>, edit: impl FnOnce(&mut ClusterForm)) {
    state.update(|s| {
        if let Some(editor) = s.editor.as_mut() {
            edit(&mut editor.form);
        }
    });
}

// =============================================================================
// ACTIONS
// =============================================================================

fn reload(state: RwSignal<ClustersState>) {
    state.update(ClustersState::begin_load);
    spawn(async move {
        let result = clusters::load(&console_api()).await;
        state.update(|s| s.apply_load(result));
    });
}

fn save(state: RwSignal<ClustersState>) {
    let Some((mode, payload)) = state.try_update(ClustersState::prepare_save).flatten() else {
        return;
    };
    spawn(async move {
        let outcome = clusters::save(&console_api(), mode, &payload).await;
        state.update(|s| s.apply_save(outcome));
    });
}

fn confirm_delete(state: RwSignal<ClustersState>) {
    let Some(id) = state.try_update(|s| s.deleting.confirm()).flatten() else {
        return;
    };
    spawn(async move {
        let outcome = clusters::delete(&console_api(), id).await;
        state.update(|s| s.apply_delete(outcome));
    });
}

fn toggle(state: RwSignal<ClustersState>, id: i64) {
    spawn(async move {
        let outcome = clusters::toggle(&console_api(), id).await;
        state.update(|s| s.apply_toggle(outcome));
    });
}
