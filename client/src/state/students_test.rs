use campus_api::testing::RecordingTransport;
use campus_api::{Method, PartValue, RequestBody};
use futures::executor::block_on;
use serde_json::json;

use super::*;

const CLUSTER_X: i64 = 10;
const CLUSTER_Y: i64 = 20;

fn api() -> AdminApi<RecordingTransport> {
    AdminApi::new(RecordingTransport::new())
}

fn student(id: i64, name: &str, student_id: &str, cluster: i64) -> Student {
    Student {
        id,
        name: name.to_owned(),
        student_id: student_id.to_owned(),
        email: format!("{}@example.com", name.to_lowercase()),
        cluster: Some(cluster),
        year_of_admission: 2024,
        current_semester: 3,
        ..Default::default()
    }
}

fn roster() -> Vec<Student> {
    vec![student(1, "Alice", "a1", CLUSTER_X), student(2, "Bob", "b1", CLUSTER_Y)]
}

fn loaded(students: Vec<Student>) -> StudentsState {
    let mut state = StudentsState::default();
    state.students.finish::<ApiError>(Ok(students));
    state
}

fn names(students: &[&Student]) -> Vec<String> {
    students.iter().map(|s| s.name.clone()).collect()
}

// =============================================================
// Filter
// =============================================================

#[test]
fn search_substring_matches_name() {
    let filter = StudentFilter { search: "ali".to_owned(), cluster: None };
    assert_eq!(names(&filter.apply(&roster())), vec!["Alice"]);
}

#[test]
fn cluster_filter_matches_equality() {
    let filter = StudentFilter { search: String::new(), cluster: Some(CLUSTER_Y) };
    assert_eq!(names(&filter.apply(&roster())), vec!["Bob"]);
}

#[test]
fn unmatched_search_with_matched_cluster_is_empty() {
    let filter = StudentFilter { search: "zed".to_owned(), cluster: Some(CLUSTER_X) };
    assert!(filter.apply(&roster()).is_empty());
}

#[test]
fn search_covers_email_and_student_id() {
    let by_email = StudentFilter { search: "BOB@EXAMPLE".to_owned(), cluster: None };
    assert_eq!(names(&by_email.apply(&roster())), vec!["Bob"]);
    let by_id = StudentFilter { search: "a1".to_owned(), cluster: None };
    assert_eq!(names(&by_id.apply(&roster())), vec!["Alice"]);
}

#[test]
fn search_term_is_used_verbatim() {
    let blank = StudentFilter { search: "  ".to_owned(), cluster: None };
    assert!(blank.apply(&roster()).is_empty());
    let padded = StudentFilter { search: " ali".to_owned(), cluster: None };
    assert!(padded.apply(&roster()).is_empty());
}

// =============================================================
// Empty states and summary
// =============================================================

#[test]
fn empty_roster_shows_no_students() {
    assert_eq!(loaded(Vec::new()).empty_message(), Some(EMPTY));
}

#[test]
fn filtered_out_roster_shows_no_matches() {
    let mut state = loaded(roster());
    state.filter.search = "nobody".to_owned();
    assert_eq!(state.empty_message(), Some(NO_MATCHES));
    state.filter.search.clear();
    assert_eq!(state.empty_message(), None);
}

#[test]
fn summary_counts_tiles() {
    let mut students = roster();
    students[0].credentials_sent = true;
    students[1].current_club = Some("Photography".to_owned());
    let mut state = loaded(students);
    state.filter.cluster = Some(CLUSTER_X);
    assert_eq!(state.summary(), StudentSummary { total: 2, filtered: 1, credentials_sent: 1, in_club: 1 });
}

#[test]
fn failed_load_shows_students_message() {
    let api = api();
    api.transport().respond(Method::Get, "/students/", 500, "");
    api.transport().respond(Method::Get, "/clusters/", 500, "");
    let mut state = loaded(roster());
    state.begin_load();
    state.apply_load(block_on(load(&api)));
    assert!(state.students.items.is_empty());
    assert!(!state.students.is_loading());
    assert_eq!(state.error.as_deref(), Some(LOAD_FAILED));
}

// =============================================================
// Create / edit
// =============================================================

#[test]
fn create_posts_once_reloads_once_and_notifies() {
    let api = api();
    let mut state = StudentsState::default();
    state.open_create(2025);
    if let Some(editor) = state.editor.as_mut() {
        editor.form.name = "Asha".to_owned();
        editor.form.student_id = "BCA1234".to_owned();
        editor.form.email = "asha@example.com".to_owned();
        editor.form.cluster = CLUSTER_X.to_string();
        editor.form.current_semester = "2".to_owned();
    }
    let (mode, payload) = state.prepare_save().unwrap();
    let email = payload.email.clone();
    state.apply_save(mode, &email, block_on(save(&api, mode, &payload)));

    assert_eq!(api.transport().call_lines(), vec!["POST /students/", "GET /students/"]);
    let RequestBody::Json(body) = &api.transport().calls()[0].body else {
        panic!("expected json body");
    };
    assert_eq!(body["year_of_admission"], 2025);
    assert_eq!(body["current_semester"], 2);
    assert_eq!(body["cluster"], CLUSTER_X);
    assert_eq!(state.notice.as_deref(), Some("Student created successfully! Credentials have been sent to asha@example.com"));
    assert!(state.editor.is_none());
}

#[test]
fn out_of_range_year_is_rejected() {
    let form = StudentForm {
        name: "Asha".to_owned(),
        student_id: "S1".to_owned(),
        email: "a@x".to_owned(),
        cluster: "1".to_owned(),
        year_of_admission: "2019".to_owned(),
        ..Default::default()
    };
    assert_eq!(form.validate(), Err(FormError("Year of admission must be between 2020 and 2030")));
    let form = StudentForm { year_of_admission: "2024".to_owned(), current_semester: "9".to_owned(), ..form };
    assert_eq!(form.validate(), Err(FormError("Semester must be between 1 and 8")));
}

#[test]
fn edit_prefills_and_puts_by_id() {
    let api = api();
    let mut state = StudentsState::default();
    let bob = student(2, "Bob", "b1", CLUSTER_Y);
    state.open_edit(&bob);
    let form = &state.editor.as_ref().unwrap().form;
    assert_eq!(form.year_of_admission, "2024");
    assert_eq!(form.current_semester, "3");
    assert_eq!(form.cluster, CLUSTER_Y.to_string());

    let (mode, payload) = state.prepare_save().unwrap();
    state.apply_save(mode, &payload.email.clone(), block_on(save(&api, mode, &payload)));
    assert_eq!(api.transport().call_lines(), vec!["PUT /students/2/", "GET /students/"]);
    assert!(state.notice.is_none());
}

// =============================================================
// Row actions
// =============================================================

#[test]
fn delete_without_confirmation_sends_nothing() {
    let api = api();
    let mut state = loaded(roster());
    state.deleting.request(1);
    state.deleting.cancel();
    assert!(state.deleting.confirm().is_none());
    assert!(api.transport().calls().is_empty());
}

#[test]
fn send_credentials_notifies_and_reloads() {
    let api = api();
    api.transport().respond_json(Method::Post, "/students/1/send-credentials/", 200, &json!({"message": "sent"}));
    let mut state = loaded(roster());
    state.apply_send_credentials(block_on(send_credentials(&api, 1)));
    assert_eq!(api.transport().call_lines(), vec!["POST /students/1/send-credentials/", "GET /students/"]);
    assert_eq!(state.notice.as_deref(), Some(CREDENTIALS_SENT));
}

#[test]
fn failed_club_permission_toggle_sets_banner() {
    let api = api();
    api.transport().respond(Method::Post, "/students/1/toggle-club-change/", 500, "");
    let mut state = loaded(roster());
    state.apply_club_change_toggle(block_on(toggle_club_change(&api, 1)));
    assert_eq!(state.error.as_deref(), Some(CLUB_PERMISSION_FAILED));
    assert_eq!(state.students.items.len(), 2);
}

#[test]
fn reset_password_requires_confirmation_and_does_not_reload() {
    let api = api();
    let mut state = loaded(roster());
    state.resetting.request(2);
    let id = state.resetting.confirm().unwrap();
    state.apply_reset_password(block_on(reset_password(&api, id)));
    assert_eq!(api.transport().call_lines(), vec!["POST /students/2/reset-password/"]);
    assert_eq!(state.notice.as_deref(), Some(PASSWORD_RESET_SENT));
}

// =============================================================
// Credentials modal
// =============================================================

#[test]
fn credentials_prefill_falls_back_to_email() {
    let mut alice = student(1, "Alice", "a1", CLUSTER_X);
    alice.temp_password = Some("Tmp#1".to_owned());
    let draft = CredentialsDraft::for_student(&alice);
    assert_eq!(draft.username, "alice@example.com");
    assert_eq!(draft.temp_password, "Tmp#1");

    alice.username = Some("alice01".to_owned());
    assert_eq!(CredentialsDraft::for_student(&alice).username, "alice01");
}

#[test]
fn generate_then_save_credentials() {
    let api = api();
    api.transport().respond_json(Method::Post, "/students/1/generate-password/", 200, &json!({"temp_password": "Q9#zz"}));
    let mut state = loaded(roster());
    state.open_credentials(&roster()[0]);
    state.apply_generated_password(block_on(generate_password(&api, 1)));
    assert_eq!(state.credentials.as_ref().unwrap().temp_password, "Q9#zz");

    let draft = state.credentials.clone().unwrap();
    state.apply_credentials_save(block_on(save_credentials(&api, &draft)));
    assert!(state.credentials.is_none());
    let calls = api.transport().calls();
    assert_eq!(calls[1].path, "/students/1/credentials/");
    let RequestBody::Json(body) = &calls[1].body else {
        panic!("expected json body");
    };
    assert_eq!(body["temp_password"], "Q9#zz");
    assert_eq!(calls[2].path, "/students/");
}

#[test]
fn failed_generate_keeps_previous_password() {
    let api = api();
    api.transport().respond(Method::Post, "/students/1/generate-password/", 500, "");
    let mut state = loaded(roster());
    state.open_credentials(&roster()[0]);
    state.apply_generated_password(block_on(generate_password(&api, 1)));
    assert_eq!(state.error.as_deref(), Some(GENERATE_PASSWORD_FAILED));
    assert_eq!(state.credentials.as_ref().unwrap().temp_password, "");
}

// =============================================================
// Bulk upload / template
// =============================================================

#[test]
fn bulk_upload_rejects_non_spreadsheet() {
    let mut state = StudentsState::default();
    state.open_bulk_upload();
    assert!(state.prepare_bulk_upload().is_none());
    if let Some(draft) = state.bulk.as_mut() {
        draft.file = Some(Upload::new("roster.csv", "text/csv", b"a,b".to_vec()));
    }
    assert!(state.prepare_bulk_upload().is_none());
    assert_eq!(state.error.as_deref(), Some("Please choose an Excel file (.xlsx or .xls)"));
}

#[test]
fn bulk_upload_reports_summary_and_reloads() {
    let api = api();
    api.transport().respond_json(
        Method::Post,
        "/students/bulk-upload/",
        201,
        &json!({
            "message": "Successfully created 1 students",
            "created_students": [{"name": "Asha", "email": "asha@example.com"}],
            "errors": ["Row 3: invalid email"],
            "upload_id": 7
        }),
    );
    let mut state = StudentsState::default();
    state.open_bulk_upload();
    if let Some(draft) = state.bulk.as_mut() {
        draft.file = Some(Upload::new("Roster.XLSX", "", vec![0x50, 0x4b]));
    }
    let upload = state.prepare_bulk_upload().unwrap();
    state.apply_bulk_upload(block_on(bulk_upload(&api, upload)));

    assert_eq!(api.transport().call_lines(), vec!["POST /students/bulk-upload/", "GET /students/"]);
    let RequestBody::Multipart(parts) = &api.transport().calls()[0].body else {
        panic!("expected multipart body");
    };
    assert!(matches!(&parts[0].value, PartValue::File(file) if file.file_name == "Roster.XLSX"));

    let report = state.bulk.as_ref().and_then(|b| b.report.as_ref()).unwrap();
    assert_eq!(report.created_students.len(), 1);
    assert_eq!(report.errors, vec!["Row 3: invalid email"]);
    assert_eq!(state.notice.as_deref(), Some("Successfully created 1 students"));
}

#[test]
fn template_failure_sets_banner() {
    let api = api();
    api.transport().respond(Method::Get, "/students/template/", 404, "");
    let mut state = StudentsState::default();
    if let Err(e) = block_on(download_template(&api)) {
        state.apply_template_failure(&e);
    }
    assert_eq!(state.error.as_deref(), Some(TEMPLATE_FAILED));
}
