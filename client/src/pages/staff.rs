//! Staff page: staff directory and the departments tab.
//!
//! SYSTEM CONTEXT
//! ==============
//! Staff writes are multipart (optional photo) and reload only the staff
//! list; department writes reload only departments. Mentor-cluster options
//! come from the clusters list loaded alongside.

use campus_api::types::{Department, Staff};
use leptos::prelude::*;

use crate::components::banner::Banner;
use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::fields::{CheckboxField, SelectField, TextField};
use crate::components::layout::ConsoleLayout;
use crate::components::modal::FormModal;
use crate::net::console_api;
use crate::state::staff::{self, DepartmentForm, StaffForm, StaffState, StaffTab};
use crate::util::auth::load_when_signed_in;
use crate::util::files::read_file_input;
use crate::util::task::spawn;

#[component]
pub fn StaffPage() -> impl IntoView {
    let state = RwSignal::new(StaffState::default());
    load_when_signed_in(move || reload(state));

    let on_dismiss = Callback::new(move |()| state.update(StaffState::dismiss_error));
    let tab_class = move |tab: StaffTab| {
        if state.with(|s| s.tab == tab) { "tabs__tab tabs__tab--active" } else { "tabs__tab" }
    };

    view! {
        <ConsoleLayout title="Staff Management">
            <Banner message=Signal::derive(move || state.get().error) on_dismiss=on_dismiss/>
            <div class="tabs">
                <button class=move || tab_class(StaffTab::Staff) on:click=move |_| state.update(|s| s.tab = StaffTab::Staff)>
                    "Staff"
                </button>
                <button
                    class=move || tab_class(StaffTab::Departments)
                    on:click=move |_| state.update(|s| s.tab = StaffTab::Departments)
                >
                    "Departments"
                </button>
            </div>
            <Show
                when=move || state.with(|s| s.tab == StaffTab::Staff)
                fallback=move || view! { <DepartmentsTab state=state/> }
            >
                <StaffTabView state=state/>
            </Show>
            <StaffModal state=state/>
            <DepartmentModal state=state/>
            <Show when=move || state.with(|s| s.deleting_staff.is_open())>
                <ConfirmDialog
                    title="Delete Staff Member"
                    message=Signal::derive(|| "Are you sure you want to delete this staff member?".to_owned())
                    on_confirm=Callback::new(move |()| confirm_staff_delete(state))
                    on_cancel=Callback::new(move |()| state.update(|s| s.deleting_staff.cancel()))
                />
            </Show>
            <Show when=move || state.with(|s| s.deleting_department.is_open())>
                <ConfirmDialog
                    title="Delete Department"
                    message=Signal::derive(move || {
                        let name = state.with(|s| s.deleting_department.pending().map(|(_, name)| name.clone()));
                        format!("Are you sure you want to delete the department \"{}\"?", name.unwrap_or_default())
                    })
                    on_confirm=Callback::new(move |()| confirm_department_delete(state))
                    on_cancel=Callback::new(move |()| state.update(|s| s.deleting_department.cancel()))
                />
            </Show>
        </ConsoleLayout>
    }
}

// =============================================================================
// STAFF TAB
// =============================================================================

#[component]
fn StaffTabView(state: RwSignal<StaffState>) -> impl IntoView {
    view! {
        <div class="page-actions">
            <button class="btn btn--primary" on:click=move |_| state.update(StaffState::open_create)>
                "+ Add Staff"
            </button>
        </div>
        <Show
            when=move || !state.with(|s| s.staff.is_loading())
            fallback=|| view! { <p class="loading">"Loading staff..."</p> }
        >
            <Show
                when=move || state.with(|s| s.empty_message().is_none())
                fallback=move || view! { <p class="empty-state">{move || state.with(StaffState::empty_message)}</p> }
            >
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Staff ID"</th>
                            <th>"Name"</th>
                            <th>"Email"</th>
                            <th>"Department"</th>
                            <th>"Access"</th>
                            <th>"Status"</th>
                            <th>"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let current = state.get();
                            current
                                .staff
                                .items
                                .iter()
                                .map(|member| {
                                    let department = current.department_label(member);
                                    view! { <StaffRow member=member.clone() department=department state=state/> }
                                })
                                .collect_view()
                        }}
                    </tbody>
                </table>
            </Show>
        </Show>
    }
}

fn access_summary(member: &Staff) -> String {
    let mut access = Vec::new();
    if member.departmental_access_enabled {
        access.push("Departmental".to_owned());
    }
    if member.mentor_access_enabled {
        match &member.mentor_cluster_name {
            Some(cluster) => access.push(format!("Mentor ({cluster})")),
            None => access.push("Mentor".to_owned()),
        }
    }
    if access.is_empty() { "—".to_owned() } else { access.join(", ") }
}

#[component]
fn StaffRow(member: Staff, department: String, state: RwSignal<StaffState>) -> impl IntoView {
    let id = member.id;
    let staff_id = member.staff_id.clone();
    let name = member.name.clone();
    let email = member.email.clone();
    let access = access_summary(&member);
    let (status, status_class) =
        if member.is_active { ("Active", "badge badge--ok") } else { ("Inactive", "badge badge--muted") };

    view! {
        <tr>
            <td>{staff_id}</td>
            <td>{name}</td>
            <td>{email}</td>
            <td>{department}</td>
            <td>{access}</td>
            <td>
                <span class=status_class>{status}</span>
            </td>
            <td class="data-table__actions">
                <button class="btn btn--small" on:click=move |_| state.update(|s| s.open_edit(&member))>
                    "Edit"
                </button>
                <button class="btn btn--small" on:click=move |_| toggle_staff(state, id)>
                    "Toggle Status"
                </button>
                <button
                    class="btn btn--small btn--danger"
                    on:click=move |_| state.update(|s| s.deleting_staff.request(id))
                >
                    "Delete"
                </button>
            </td>
        </tr>
    }
}

#[component]
fn StaffModal(state: RwSignal<StaffState>) -> impl IntoView {
    let department_options = Signal::derive(move || {
        state.with(|s| s.departments.items.iter().map(|d| (d.id.to_string(), d.name.clone())).collect::<Vec<_>>())
    });
    let cluster_options = Signal::derive(move || {
        state.with(|s| s.clusters.iter().map(|c| (c.id.to_string(), c.name.clone())).collect::<Vec<_>>())
    });

    view! {
        <Show when=move || state.with(|s| s.editor.is_some())>
            <FormModal
                title=Signal::derive(move || {
                    state.with(|s| s.editor.as_ref().map(|e| e.title("Staff Member")).unwrap_or_default())
                })
                on_submit=Callback::new(move |()| save_staff(state))
                on_close=Callback::new(move |()| state.update(StaffState::close_editor))
            >
                <TextField
                    label="Full Name"
                    required=true
                    value=staff_value(state, |f| f.name.clone())
                    on_input=Callback::new(move |v| edit_staff(state, |f| f.name = v))
                />
                <TextField
                    label="Staff ID"
                    required=true
                    value=staff_value(state, |f| f.staff_id.clone())
                    on_input=Callback::new(move |v| edit_staff(state, |f| f.staff_id = v))
                />
                <TextField
                    label="Email"
                    input_type="email"
                    required=true
                    value=staff_value(state, |f| f.email.clone())
                    on_input=Callback::new(move |v| edit_staff(state, |f| f.email = v))
                />
                <TextField
                    label="Phone"
                    input_type="tel"
                    value=staff_value(state, |f| f.phone.clone())
                    on_input=Callback::new(move |v| edit_staff(state, |f| f.phone = v))
                />
                <SelectField
                    label="Department"
                    required=true
                    placeholder="Select department"
                    value=staff_value(state, |f| f.department.clone())
                    options=department_options
                    on_change=Callback::new(move |v| edit_staff(state, |f| f.department = v))
                />
                <TextField
                    label="Qualification"
                    required=true
                    value=staff_value(state, |f| f.qualification.clone())
                    on_input=Callback::new(move |v| edit_staff(state, |f| f.qualification = v))
                />
                <TextField
                    label="Subject Expertise"
                    required=true
                    value=staff_value(state, |f| f.subject_expertise.clone())
                    on_input=Callback::new(move |v| edit_staff(state, |f| f.subject_expertise = v))
                />
                <CheckboxField
                    label="Departmental access"
                    checked=staff_value(state, |f| f.departmental_access_enabled)
                    on_toggle=Callback::new(move |v| edit_staff(state, |f| f.departmental_access_enabled = v))
                />
                <CheckboxField
                    label="Mentor access"
                    checked=staff_value(state, |f| f.mentor_access_enabled)
                    on_toggle=Callback::new(move |v| edit_staff(state, |f| f.mentor_access_enabled = v))
                />
                <Show when=move || state.with(|s| s.editor.as_ref().is_some_and(|e| e.form.mentor_access_enabled))>
                    <SelectField
                        label="Mentor Cluster"
                        placeholder="Select cluster"
                        value=staff_value(state, |f| f.mentor_cluster.clone())
                        options=cluster_options
                        on_change=Callback::new(move |v| edit_staff(state, |f| f.mentor_cluster = v))
                    />
                </Show>
                <label class="dialog__label">
                    "Photo"
                    <input
                        class="dialog__input"
                        type="file"
                        accept="image/*"
                        on:change=move |ev| read_file_input(&ev, move |upload| edit_staff(state, |f| f.photo = upload))
                    />
                </label>
            </FormModal>
        </Show>
    }
}

fn staff_value<T>(state: RwSignal<StaffState>, read: fn(&StaffForm) -> T) -> Signal<T>
where
    T: Default + Send + Sync + 'static,
{
    Signal::derive(move || state.with(|s| s.editor.as_ref().map(|e| read(&e.form)).unwrap_or_default()))
}

fn edit_staff(state: RwSignal<StaffState>, edit: impl FnOnce(&mut StaffForm)) {
    state.update(|s| {
        if let Some(editor) = s.editor.as_mut() {
            edit(&mut editor.form);
        }
    });
}

// =============================================================================
// DEPARTMENTS TAB
// =============================================================================

#[component]
fn DepartmentsTab(state: RwSignal<StaffState>) -> impl IntoView {
    view! {
        <div class="page-actions">
            <button class="btn btn--primary" on:click=move |_| state.update(StaffState::open_department_create)>
                "+ Add Department"
            </button>
        </div>
        <Show
            when=move || !state.with(|s| s.departments.is_loading())
            fallback=|| view! { <p class="loading">"Loading departments..."</p> }
        >
            <Show
                when=move || state.with(|s| s.departments_empty_message().is_none())
                fallback=move || {
                    view! { <p class="empty-state">{move || state.with(StaffState::departments_empty_message)}</p> }
                }
            >
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Name"</th>
                            <th>"Code"</th>
                            <th>"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            state
                                .get()
                                .departments
                                .items
                                .into_iter()
                                .map(|department| view! { <DepartmentRow department=department state=state/> })
                                .collect_view()
                        }}
                    </tbody>
                </table>
            </Show>
        </Show>
    }
}

#[component]
fn DepartmentRow(department: Department, state: RwSignal<StaffState>) -> impl IntoView {
    let id = department.id;
    let name = department.name.clone();
    let code = department.code.clone();
    let label = department.name.clone();

    view! {
        <tr>
            <td>{name}</td>
            <td>{code}</td>
            <td class="data-table__actions">
                <button class="btn btn--small" on:click=move |_| state.update(|s| s.open_department_edit(&department))>
                    "Edit"
                </button>
                <button
                    class="btn btn--small btn--danger"
                    on:click=move |_| state.update(|s| s.deleting_department.request((id, label.clone())))
                >
                    "Delete"
                </button>
            </td>
        </tr>
    }
}

#[component]
fn DepartmentModal(state: RwSignal<StaffState>) -> impl IntoView {
    view! {
        <Show when=move || state.with(|s| s.department_editor.is_some())>
            <FormModal
                title=Signal::derive(move || {
                    state.with(|s| s.department_editor.as_ref().map(|e| e.title("Department")).unwrap_or_default())
                })
                on_submit=Callback::new(move |()| save_department(state))
                on_close=Callback::new(move |()| state.update(StaffState::close_department_editor))
            >
                <TextField
                    label="Department Name"
                    required=true
                    value=department_value(state, |f| f.name.clone())
                    on_input=Callback::new(move |v| edit_department(state, |f| f.name = v))
                />
                <TextField
                    label="Department Code"
                    required=true
                    value=department_value(state, |f| f.code.clone())
                    on_input=Callback::new(move |v| edit_department(state, |f| f.code = v))
                />
            </FormModal>
        </Show>
    }
}

fn department_value(state: RwSignal<StaffState>, read: fn(&DepartmentForm) -> String) -> Signal<String> {
    Signal::derive(move || state.with(|s| s.department_editor.as_ref().map(|e| read(&e.form)).unwrap_or_default()))
}

fn edit_department(state: RwSignal<StaffState>, edit: impl FnOnce(&mut DepartmentForm)) {
    state.update(|s| {
        if let Some(editor) = s.department_editor.as_mut() {
            edit(&mut editor.form);
        }
    });
}

// =============================================================================
// ACTIONS
// =============================================================================

fn reload(state: RwSignal<StaffState>) {
    state.update(StaffState::begin_load);
    spawn(async move {
        let load = staff::load(&console_api()).await;
        state.update(|s| s.apply_load(load));
    });
}

fn save_staff(state: RwSignal<StaffState>) {
    let Some((mode, payload)) = state.try_update(StaffState::prepare_save).flatten() else {
        return;
    };
    spawn(async move {
        let outcome = staff::save(&console_api(), mode, &payload).await;
        state.update(|s| s.apply_save(outcome));
    });
}

fn confirm_staff_delete(state: RwSignal<StaffState>) {
    let Some(id) = state.try_update(|s| s.deleting_staff.confirm()).flatten() else {
        return;
    };
    spawn(async move {
        let outcome = staff::delete(&console_api(), id).await;
        state.update(|s| s.apply_delete(outcome));
    });
}

fn toggle_staff(state: RwSignal<StaffState>, id: i64) {
    spawn(async move {
        let outcome = staff::toggle(&console_api(), id).await;
        state.update(|s| s.apply_toggle(outcome));
    });
}

fn save_department(state: RwSignal<StaffState>) {
    let Some((mode, payload)) = state.try_update(StaffState::prepare_department_save).flatten() else {
        return;
    };
    spawn(async move {
        let outcome = staff::save_department(&console_api(), mode, &payload).await;
        state.update(|s| s.apply_department_save(mode, outcome));
    });
}

fn confirm_department_delete(state: RwSignal<StaffState>) {
    let Some((id, _)) = state.try_update(|s| s.deleting_department.confirm()).flatten() else {
        return;
    };
    spawn(async move {
        let outcome = staff::delete_department(&console_api(), id).await;
        state.update(|s| s.apply_department_delete(outcome));
    });
}
