use campus_api::testing::RecordingTransport;
use campus_api::{Method, RequestBody};
use futures::executor::block_on;
use serde_json::json;

use super::*;

fn api() -> AdminApi<RecordingTransport> {
    AdminApi::new(RecordingTransport::new())
}

fn iyer() -> Staff {
    Staff {
        id: 9,
        staff_id: "ST09".to_owned(),
        name: "R. Iyer".to_owned(),
        email: "iyer@example.com".to_owned(),
        phone: Some("555-0101".to_owned()),
        department: Some(2),
        qualification: "PhD".to_owned(),
        subject_expertise: "Algebra".to_owned(),
        mentor_access_enabled: true,
        mentor_cluster: Some(4),
        ..Default::default()
    }
}

fn filled_form() -> StaffForm {
    StaffForm {
        name: "A. Rao".to_owned(),
        staff_id: "ST10".to_owned(),
        email: "rao@example.com".to_owned(),
        subject_expertise: "Botany".to_owned(),
        qualification: "MSc".to_owned(),
        department: "2".to_owned(),
        ..Default::default()
    }
}

// =============================================================
// Loading
// =============================================================

#[test]
fn load_fetches_all_three_lists() {
    let api = api();
    let mut state = StaffState::default();
    state.begin_load();
    state.apply_load(block_on(load(&api)));

    let mut calls = api.transport().call_lines();
    calls.sort();
    assert_eq!(calls, vec!["GET /clusters/", "GET /departments/", "GET /staff/"]);
    assert!(state.staff.is_empty_ready());
    assert!(state.departments.is_empty_ready());
    assert!(state.error.is_none());
}

#[test]
fn empty_lists_show_their_empty_messages() {
    let api = api();
    let mut state = StaffState::default();
    state.begin_load();
    assert_eq!(state.empty_message(), None);
    assert_eq!(state.departments_empty_message(), None);

    state.apply_load(block_on(load(&api)));
    assert_eq!(state.empty_message(), Some(EMPTY_STAFF));
    assert_eq!(state.departments_empty_message(), Some(EMPTY_DEPARTMENTS));
}

#[test]
fn loaded_staff_hides_empty_message() {
    let api = api();
    api.transport().respond_json(Method::Get, "/staff/", 200, &json!([{"id": 9, "staff_id": "ST09", "name": "R. Iyer", "email": "iyer@example.com"}]));
    let mut state = StaffState::default();
    state.apply_load(block_on(load(&api)));
    assert_eq!(state.empty_message(), None);
    assert_eq!(state.departments_empty_message(), Some(EMPTY_DEPARTMENTS));
}

#[test]
fn department_failure_raises_banner_and_empties_it() {
    let api = api();
    api.transport().respond(Method::Get, "/departments/", 500, "");
    api.transport().respond_json(Method::Get, "/staff/", 200, &json!([{"id": 1, "staff_id": "S", "name": "N", "email": "e"}]));
    let mut state = StaffState::default();
    state.begin_load();
    state.apply_load(block_on(load(&api)));

    assert_eq!(state.error.as_deref(), Some(LOAD_FAILED));
    assert!(state.departments.items.is_empty());
    assert!(state.departments.has_failed());
    assert_eq!(state.staff.items.len(), 1);
}

#[test]
fn cluster_failure_only_empties_mentor_options() {
    let api = api();
    api.transport().fail(Method::Get, "/clusters/", "offline");
    let mut state = StaffState::default();
    state.apply_load(block_on(load(&api)));
    assert!(state.error.is_none());
    assert!(state.clusters.is_empty());
}

// =============================================================
// Staff form
// =============================================================

#[test]
fn edit_prefills_every_field() {
    let mut state = StaffState::default();
    state.open_edit(&iyer());
    let editor = state.editor.as_ref().unwrap();
    assert_eq!(editor.mode, FormMode::Edit(9));
    assert_eq!(editor.form.name, "R. Iyer");
    assert_eq!(editor.form.staff_id, "ST09");
    assert_eq!(editor.form.phone, "555-0101");
    assert_eq!(editor.form.department, "2");
    assert_eq!(editor.form.mentor_cluster, "4");
    assert!(editor.form.mentor_access_enabled);
    assert!(editor.form.photo.is_none());
}

#[test]
fn missing_department_is_rejected() {
    let form = StaffForm { department: String::new(), ..filled_form() };
    assert_eq!(form.validate(), Err(FormError("Please fill in all required fields")));
}

#[test]
fn mentor_cluster_is_dropped_without_mentor_access() {
    let form = StaffForm { mentor_cluster: "4".to_owned(), ..filled_form() };
    assert_eq!(form.validate().unwrap().mentor_cluster, None);

    let form = StaffForm { mentor_access_enabled: true, mentor_cluster: "4".to_owned(), ..filled_form() };
    assert_eq!(form.validate().unwrap().mentor_cluster, Some(4));
}

#[test]
fn create_sends_multipart_then_reloads_staff() {
    let api = api();
    let mut state = StaffState::default();
    state.open_create();
    if let Some(editor) = state.editor.as_mut() {
        editor.form = filled_form();
        editor.form.photo = Some(Upload::new("rao.jpg", "image/jpeg", vec![0xff, 0xd8]));
    }
    let (mode, payload) = state.prepare_save().unwrap();
    state.apply_save(block_on(save(&api, mode, &payload)));

    assert_eq!(api.transport().call_lines(), vec!["POST /staff/", "GET /staff/"]);
    let RequestBody::Multipart(parts) = &api.transport().calls()[0].body else {
        panic!("expected multipart body");
    };
    assert!(parts.iter().any(|p| p.name == "photo"));
    assert!(!parts.iter().any(|p| p.name == "phone"));
    assert!(state.editor.is_none());
}

#[test]
fn edit_updates_by_id() {
    let api = api();
    let mut state = StaffState::default();
    state.open_edit(&iyer());
    let (mode, payload) = state.prepare_save().unwrap();
    state.apply_save(block_on(save(&api, mode, &payload)));
    assert_eq!(api.transport().call_lines(), vec!["PUT /staff/9/", "GET /staff/"]);
}

#[test]
fn staff_delete_requires_confirmation() {
    let api = api();
    let mut state = StaffState::default();
    state.deleting_staff.request(9);
    state.deleting_staff.cancel();
    assert!(state.deleting_staff.confirm().is_none());
    assert!(api.transport().calls().is_empty());

    state.deleting_staff.request(9);
    let id = state.deleting_staff.confirm().unwrap();
    state.apply_delete(block_on(delete(&api, id)));
    assert_eq!(api.transport().call_lines(), vec!["DELETE /staff/9/", "GET /staff/"]);
}

// =============================================================
// Departments
// =============================================================

#[test]
fn department_code_is_uppercased() {
    let form = DepartmentForm { name: " Science ".to_owned(), code: " sci ".to_owned() };
    assert_eq!(form.validate(), Ok(DepartmentPayload { name: "Science".to_owned(), code: "SCI".to_owned() }));
}

#[test]
fn department_requires_name_and_code() {
    let mut state = StaffState::default();
    state.open_department_create();
    assert!(state.prepare_department_save().is_none());
    assert_eq!(state.error.as_deref(), Some("Department name and code are required"));
}

#[test]
fn failed_department_update_uses_update_message() {
    let api = api();
    api.transport().respond(Method::Put, "/departments/2/", 400, "");
    let mut state = StaffState::default();
    state.open_department_edit(&Department { id: 2, name: "Science".to_owned(), code: "SCI".to_owned(), ..Default::default() });
    let (mode, payload) = state.prepare_department_save().unwrap();
    state.apply_department_save(mode, block_on(save_department(&api, mode, &payload)));

    assert_eq!(state.error.as_deref(), Some(DEPARTMENT_UPDATE_FAILED));
    assert!(state.department_editor.is_some());
}

#[test]
fn failed_department_delete_explains_assignment() {
    let api = api();
    api.transport().respond(Method::Delete, "/departments/2/", 409, "");
    let mut state = StaffState::default();
    state.deleting_department.request((2, "Science".to_owned()));
    let (id, _) = state.deleting_department.confirm().unwrap();
    state.apply_department_delete(block_on(delete_department(&api, id)));
    assert_eq!(state.error.as_deref(), Some(DEPARTMENT_DELETE_FAILED));
    assert_eq!(api.transport().call_lines(), vec!["DELETE /departments/2/"]);
}

#[test]
fn department_label_prefers_loaded_name() {
    let mut state = StaffState::default();
    state.departments.finish::<ApiError>(Ok(vec![Department { id: 2, name: "Science".to_owned(), ..Default::default() }]));
    assert_eq!(state.department_label(&iyer()), "Science");
    let orphan = Staff { department: None, department_name: None, ..iyer() };
    assert_eq!(state.department_label(&orphan), "—");
}
