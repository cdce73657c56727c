//! Students page: roster with search/cluster filter, row actions,
//! credentials modal, and bulk spreadsheet upload.

use campus_api::ApiError;
use campus_api::types::Student;
use leptos::prelude::*;

use crate::components::banner::{Banner, BannerKind};
use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::fields::{SelectField, TextField};
use crate::components::layout::ConsoleLayout;
use crate::components::modal::FormModal;
use crate::components::stat_tile::StatTile;
use crate::net::console_api;
use crate::state::students::{self, CredentialsDraft, StudentForm, StudentsState, TEMPLATE_FILE_NAME};
use crate::util::auth::load_when_signed_in;
use crate::util::clock::current_year;
use crate::util::files::{read_file_input, save_download};
use crate::util::task::spawn;

#[component]
pub fn StudentsPage() -> impl IntoView {
    let state = RwSignal::new(StudentsState::default());
    load_when_signed_in(move || reload(state));

    let summary = move || state.with(StudentsState::summary);
    let cluster_options = Signal::derive(move || {
        state.with(|s| {
            s.clusters.items.iter().map(|c| (c.id.to_string(), format!("{} ({})", c.name, c.code))).collect::<Vec<_>>()
        })
    });

    view! {
        <ConsoleLayout title="Student Management">
            <Banner
                message=Signal::derive(move || state.get().error)
                on_dismiss=Callback::new(move |()| state.update(StudentsState::dismiss_error))
            />
            <Banner
                kind=BannerKind::Notice
                message=Signal::derive(move || state.get().notice)
                on_dismiss=Callback::new(move |()| state.update(StudentsState::dismiss_notice))
            />
            <div class="stat-grid">
                <StatTile label="Total Students" value=Signal::derive(move || summary().total.to_string())/>
                <StatTile label="Showing" value=Signal::derive(move || summary().filtered.to_string())/>
                <StatTile label="Credentials Sent" value=Signal::derive(move || summary().credentials_sent.to_string())/>
                <StatTile label="In a Club" value=Signal::derive(move || summary().in_club.to_string())/>
            </div>
            <div class="page-actions">
                <input
                    class="search-input"
                    type="search"
                    placeholder="Search by name, email, or student ID"
                    prop:value=move || state.with(|s| s.filter.search.clone())
                    on:input=move |ev| {
                        let search = event_target_value(&ev);
                        state.update(|s| s.filter.search = search);
                    }
                />
                <SelectField
                    label="Cluster"
                    placeholder="All clusters"
                    value=Signal::derive(move || {
                        state.with(|s| s.filter.cluster.map(|id| id.to_string()).unwrap_or_default())
                    })
                    options=cluster_options
                    on_change=Callback::new(move |v: String| state.update(|s| s.filter.cluster = v.parse().ok()))
                />
                <span class="toolbar__spacer"></span>
                <button class="btn" on:click=move |_| download_template(state)>
                    "Download Template"
                </button>
                <button class="btn" on:click=move |_| state.update(StudentsState::open_bulk_upload)>
                    "Bulk Upload"
                </button>
                <button class="btn btn--primary" on:click=move |_| state.update(|s| s.open_create(current_year()))>
                    "+ Add Student"
                </button>
            </div>
            <Show
                when=move || !state.with(|s| s.students.is_loading())
                fallback=|| view! { <p class="loading">"Loading students..."</p> }
            >
                {move || match state.with(StudentsState::empty_message) {
                    Some(message) => view! { <p class="empty-state">{message}</p> }.into_any(),
                    None => view! { <StudentsTable state=state/> }.into_any(),
                }}
            </Show>
            <StudentModal state=state cluster_options=cluster_options/>
            <CredentialsModal state=state/>
            <BulkUploadModal state=state/>
            <Show when=move || state.with(|s| s.deleting.is_open())>
                <ConfirmDialog
                    title="Delete Student"
                    message=Signal::derive(|| "Are you sure you want to delete this student?".to_owned())
                    on_confirm=Callback::new(move |()| confirm_delete(state))
                    on_cancel=Callback::new(move |()| state.update(|s| s.deleting.cancel()))
                />
            </Show>
            <Show when=move || state.with(|s| s.resetting.is_open())>
                <ConfirmDialog
                    title="Reset Password"
                    message=Signal::derive(|| {
                        "Reset this student's password? A new temporary password will be emailed to them.".to_owned()
                    })
                    confirm_label="Reset"
                    on_confirm=Callback::new(move |()| confirm_reset(state))
                    on_cancel=Callback::new(move |()| state.update(|s| s.resetting.cancel()))
                />
            </Show>
        </ConsoleLayout>
    }
}

// =============================================================================
// TABLE
// =============================================================================

#[component]
fn StudentsTable(state: RwSignal<StudentsState>) -> impl IntoView {
    view! {
        <table class="data-table">
            <thead>
                <tr>
                    <th>"Student ID"</th>
                    <th>"Name"</th>
                    <th>"Email"</th>
                    <th>"Cluster"</th>
                    <th>"Year / Sem"</th>
                    <th>"Club"</th>
                    <th>"Credentials"</th>
                    <th>"Actions"</th>
                </tr>
            </thead>
            <tbody>
                {move || {
                    let current = state.get();
                    current
                        .visible()
                        .into_iter()
                        .map(|student| {
                            let cluster = current.cluster_label(student);
                            view! { <StudentRow student=student.clone() cluster=cluster state=state/> }
                        })
                        .collect_view()
                }}
            </tbody>
        </table>
    }
}

#[component]
fn StudentRow(student: Student, cluster: String, state: RwSignal<StudentsState>) -> impl IntoView {
    let id = student.id;
    let student_id = student.student_id.clone();
    let name = student.name.clone();
    let email = student.email.clone();
    let year_sem = format!("{} / {}", student.year_of_admission, student.current_semester);
    let club = student.current_club.clone().filter(|c| !c.is_empty()).unwrap_or_else(|| "—".to_owned());
    let (credentials, credentials_class) =
        if student.credentials_sent { ("Sent", "badge badge--ok") } else { ("Pending", "badge badge--pending") };
    let club_change_label = if student.can_change_club { "Lock Club" } else { "Allow Club Change" };
    let edit_record = student.clone();

    view! {
        <tr>
            <td>{student_id}</td>
            <td>{name}</td>
            <td>{email}</td>
            <td>{cluster}</td>
            <td>{year_sem}</td>
            <td>{club}</td>
            <td>
                <span class=credentials_class>{credentials}</span>
            </td>
            <td class="data-table__actions">
                <button class="btn btn--small" on:click=move |_| state.update(|s| s.open_edit(&edit_record))>
                    "Edit"
                </button>
                <button class="btn btn--small" on:click=move |_| state.update(|s| s.open_credentials(&student))>
                    "Credentials"
                </button>
                <button class="btn btn--small" on:click=move |_| send_credentials(state, id)>
                    "Send Credentials"
                </button>
                <button class="btn btn--small" on:click=move |_| toggle_club_change(state, id)>
                    {club_change_label}
                </button>
                <button class="btn btn--small" on:click=move |_| state.update(|s| s.resetting.request(id))>
                    "Reset Password"
                </button>
                <button class="btn btn--small btn--danger" on:click=move |_| state.update(|s| s.deleting.request(id))>
                    "Delete"
                </button>
            </td>
        </tr>
    }
}

// =============================================================================
// MODALS
// =============================================================================

#[component]
fn StudentModal(state: RwSignal<StudentsState>, cluster_options: Signal<Vec<(String, String)>>) -> impl IntoView {
    view! {
        <Show when=move || state.with(|s| s.editor.is_some())>
            <FormModal
                title=Signal::derive(move || {
                    state.with(|s| s.editor.as_ref().map(|e| e.title("Student")).unwrap_or_default())
                })
                on_submit=Callback::new(move |()| save(state))
                on_close=Callback::new(move |()| state.update(StudentsState::close_editor))
            >
                <TextField
                    label="Full Name"
                    required=true
                    value=form_value(state, |f| f.name.clone())
                    on_input=Callback::new(move |v| edit_form(state, |f| f.name = v))
                />
                <TextField
                    label="Student ID"
                    required=true
                    value=form_value(state, |f| f.student_id.clone())
                    on_input=Callback::new(move |v| edit_form(state, |f| f.student_id = v))
                />
                <TextField
                    label="Email"
                    input_type="email"
                    required=true
                    value=form_value(state, |f| f.email.clone())
                    on_input=Callback::new(move |v| edit_form(state, |f| f.email = v))
                />
                <TextField
                    label="Phone"
                    input_type="tel"
                    value=form_value(state, |f| f.phone.clone())
                    on_input=Callback::new(move |v| edit_form(state, |f| f.phone = v))
                />
                <SelectField
                    label="Cluster"
                    required=true
                    placeholder="Select cluster"
                    value=form_value(state, |f| f.cluster.clone())
                    options=cluster_options
                    on_change=Callback::new(move |v| edit_form(state, |f| f.cluster = v))
                />
                <TextField
                    label="Year of Admission"
                    input_type="number"
                    required=true
                    value=form_value(state, |f| f.year_of_admission.clone())
                    on_input=Callback::new(move |v| edit_form(state, |f| f.year_of_admission = v))
                />
                <TextField
                    label="Current Semester"
                    input_type="number"
                    required=true
                    value=form_value(state, |f| f.current_semester.clone())
                    on_input=Callback::new(move |v| edit_form(state, |f| f.current_semester = v))
                />
            </FormModal>
        </Show>
    }
}

#[component]
fn CredentialsModal(state: RwSignal<StudentsState>) -> impl IntoView {
    view! {
        <Show when=move || state.with(|s| s.credentials.is_some())>
            <FormModal
                title=Signal::derive(move || {
                    let name = state.with(|s| s.credentials.as_ref().map(|d| d.student_name.clone()));
                    format!("Credentials: {}", name.unwrap_or_default())
                })
                on_submit=Callback::new(move |()| save_credentials(state))
                on_close=Callback::new(move |()| state.update(StudentsState::close_credentials))
            >
                <TextField
                    label="Username"
                    value=draft_value(state, |d| d.username.clone())
                    on_input=Callback::new(move |v| edit_draft(state, |d| d.username = v))
                />
                <TextField
                    label="Temporary Password"
                    value=draft_value(state, |d| d.temp_password.clone())
                    on_input=Callback::new(move |v| edit_draft(state, |d| d.temp_password = v))
                />
                <button class="btn" type="button" on:click=move |_| generate_password(state)>
                    "Generate Password"
                </button>
            </FormModal>
        </Show>
    }
}

#[component]
fn BulkUploadModal(state: RwSignal<StudentsState>) -> impl IntoView {
    let report = move || state.with(|s| s.bulk.as_ref().and_then(|b| b.report.clone()));

    view! {
        <Show when=move || state.with(|s| s.bulk.is_some())>
            <FormModal
                title=Signal::derive(|| "Bulk Upload Students".to_owned())
                submit_label="Upload"
                on_submit=Callback::new(move |()| bulk_upload(state))
                on_close=Callback::new(move |()| state.update(StudentsState::close_bulk_upload))
            >
                <label class="dialog__label">
                    "Excel file (.xlsx or .xls)"
                    <input
                        class="dialog__input"
                        type="file"
                        accept=".xlsx,.xls"
                        on:change=move |ev| {
                            read_file_input(
                                &ev,
                                move |upload| {
                                    state.update(|s| {
                                        if let Some(draft) = s.bulk.as_mut() {
                                            draft.file = upload;
                                        }
                                    });
                                },
                            );
                        }
                    />
                </label>
                {move || {
                    report()
                        .map(|report| {
                            let created = report.created_students.len();
                            let errors = report.errors.clone();
                            view! {
                                <div class="upload-report">
                                    <p>{format!("{created} student(s) created")}</p>
                                    <ul class="upload-report__errors">
                                        {errors.into_iter().map(|e| view! { <li>{e}</li> }).collect_view()}
                                    </ul>
                                </div>
                            }
                        })
                }}
            </FormModal>
        </Show>
    }
}

fn form_value(state: RwSignal<StudentsState>, read: fn(&StudentForm) -> String) -> Signal<String> {
    Signal::derive(move || state.with(|s| s.editor.as_ref().map(|e| read(&e.form)).unwrap_or_default()))
}

fn edit_form(state: RwSignal<StudentsState>, edit: impl FnOnce(&mut StudentForm)) {
    state.update(|s| {
        if let Some(editor) = s.editor.as_mut() {
            edit(&mut editor.form);
        }
    });
}

fn draft_value(state: RwSignal<StudentsState>, read: fn(&CredentialsDraft) -> String) -> Signal<String> {
    Signal::derive(move || state.with(|s| s.credentials.as_ref().map(read).unwrap_or_default()))
}

fn edit_draft(state: RwSignal<StudentsState>, edit: impl FnOnce(&mut CredentialsDraft)) {
    state.update(|s| {
        if let Some(draft) = s.credentials.as_mut() {
            edit(draft);
        }
    });
}

// =============================================================================
// ACTIONS
// =============================================================================

fn reload(state: RwSignal<StudentsState>) {
    state.update(StudentsState::begin_load);
    spawn(async move {
        let load = students::load(&console_api()).await;
        state.update(|s| s.apply_load(load));
    });
}

fn save(state: RwSignal<StudentsState>) {
    let Some((mode, payload)) = state.try_update(StudentsState::prepare_save).flatten() else {
        return;
    };
    spawn(async move {
        let outcome = students::save(&console_api(), mode, &payload).await;
        state.update(|s| s.apply_save(mode, &payload.email, outcome));
    });
}

fn confirm_delete(state: RwSignal<StudentsState>) {
    let Some(id) = state.try_update(|s| s.deleting.confirm()).flatten() else {
        return;
    };
    spawn(async move {
        let outcome = students::delete(&console_api(), id).await;
        state.update(|s| s.apply_delete(outcome));
    });
}

fn toggle_club_change(state: RwSignal<StudentsState>, id: i64) {
    spawn(async move {
        let outcome = students::toggle_club_change(&console_api(), id).await;
        state.update(|s| s.apply_club_change_toggle(outcome));
    });
}

fn send_credentials(state: RwSignal<StudentsState>, id: i64) {
    spawn(async move {
        let outcome = students::send_credentials(&console_api(), id).await;
        state.update(|s| s.apply_send_credentials(outcome));
    });
}

fn confirm_reset(state: RwSignal<StudentsState>) {
    let Some(id) = state.try_update(|s| s.resetting.confirm()).flatten() else {
        return;
    };
    spawn(async move {
        let result = students::reset_password(&console_api(), id).await;
        state.update(|s| s.apply_reset_password(result));
    });
}

fn generate_password(state: RwSignal<StudentsState>) {
    let Some(id) = state.with_untracked(|s| s.credentials.as_ref().map(|d| d.student)) else {
        return;
    };
    spawn(async move {
        let result = students::generate_password(&console_api(), id).await;
        state.update(|s| s.apply_generated_password(result));
    });
}

fn save_credentials(state: RwSignal<StudentsState>) {
    let Some(draft) = state.with_untracked(|s| s.credentials.clone()) else {
        return;
    };
    spawn(async move {
        let outcome = students::save_credentials(&console_api(), &draft).await;
        state.update(|s| s.apply_credentials_save(outcome));
    });
}

fn bulk_upload(state: RwSignal<StudentsState>) {
    let Some(file) = state.try_update(StudentsState::prepare_bulk_upload).flatten() else {
        return;
    };
    spawn(async move {
        let outcome = students::bulk_upload(&console_api(), file).await;
        state.update(|s| s.apply_bulk_upload(outcome));
    });
}

fn download_template(state: RwSignal<StudentsState>) {
    spawn(async move {
        let saved = match students::download_template(&console_api()).await {
            Ok(bytes) => save_download(TEMPLATE_FILE_NAME, &bytes).map_err(ApiError::Transport),
            Err(e) => Err(e),
        };
        if let Err(e) = saved {
            state.update(|s| s.apply_template_failure(&e));
        }
    });
}
