use futures::executor::block_on;
use serde_json::json;

use super::*;
use crate::testing::RecordingTransport;
use crate::transport::{Method, PartValue};

fn api() -> AdminApi<RecordingTransport> {
    AdminApi::new(RecordingTransport::new())
}

// =============================================================
// Status mapping
// =============================================================

#[test]
fn status_decodes_health_body() {
    let api = api();
    api.transport().respond_json(Method::Get, "/status/", 200, &json!({"status": "success", "version": "1.0.0"}));
    let status = block_on(api.status()).unwrap();
    assert!(status.is_success());
    assert_eq!(status.version.as_deref(), Some("1.0.0"));
}

#[test]
fn non_success_status_becomes_status_error() {
    let api = api();
    api.transport().respond(Method::Get, "/clusters/", 500, "boom");
    let err = block_on(api.list_clusters()).unwrap_err();
    assert_eq!(err, ApiError::Status { status: 500, body: "boom".to_owned() });
    assert_eq!(err.status(), Some(500));
}

#[test]
fn transport_failure_passes_through() {
    let api = api();
    api.transport().fail(Method::Get, "/status/", "connection refused");
    let err = block_on(api.status()).unwrap_err();
    assert!(matches!(err, ApiError::Transport(ref m) if m == "connection refused"));
}

// =============================================================
// Lists
// =============================================================

#[test]
fn list_students_accepts_paginated_body() {
    let api = api();
    api.transport().respond_json(
        Method::Get,
        "/students/",
        200,
        &json!({"results": [{"id": 1, "student_id": "S1", "name": "Asha", "email": "a@x"}]}),
    );
    let students = block_on(api.list_students()).unwrap();
    assert_eq!(students.len(), 1);
    assert_eq!(students[0].name, "Asha");
}

#[test]
fn unscripted_list_is_empty() {
    let api = api();
    assert!(block_on(api.list_clubs()).unwrap().is_empty());
    assert_eq!(api.transport().call_lines(), vec!["GET /clubs/"]);
}

// =============================================================
// Writes
// =============================================================

#[test]
fn create_cluster_sends_json_payload() {
    let api = api();
    let payload = ClusterPayload {
        cluster_name: "Commerce".to_owned(),
        cluster_code: "BCOM".to_owned(),
        description: String::new(),
        is_active: true,
    };
    block_on(api.create_cluster(&payload)).unwrap();

    let calls = api.transport().calls();
    assert_eq!(calls[0].method, Method::Post);
    assert_eq!(calls[0].path, "/clusters/");
    match &calls[0].body {
        RequestBody::Json(body) => {
            assert_eq!(body["cluster_code"], "BCOM");
            assert_eq!(body["is_active"], true);
        }
        other => panic!("expected json body, got {other:?}"),
    }
}

#[test]
fn delete_with_empty_body_yields_null() {
    let api = api();
    api.transport().respond(Method::Delete, "/clubs/4/", 204, Vec::new());
    assert_eq!(block_on(api.delete_club(4)).unwrap(), Value::Null);
}

#[test]
fn update_staff_sends_multipart() {
    let api = api();
    let payload = StaffPayload { name: "R. Iyer".to_owned(), department: 2, ..Default::default() };
    block_on(api.update_staff(9, &payload)).unwrap();

    let calls = api.transport().calls();
    assert_eq!(calls[0].method, Method::Put);
    assert_eq!(calls[0].path, "/staff/9/");
    assert!(matches!(calls[0].body, RequestBody::Multipart(_)));
}

#[test]
fn bulk_upload_sends_file_field() {
    let api = api();
    api.transport().respond_json(
        Method::Post,
        "/students/bulk-upload/",
        201,
        &json!({"message": "2 created", "created_students": [], "errors": ["row 3: bad email"]}),
    );
    let upload = Upload::new("roster.xlsx", "", vec![1, 2, 3]);
    let report = block_on(api.bulk_upload_students(upload)).unwrap();
    assert_eq!(report.errors, vec!["row 3: bad email"]);

    let calls = api.transport().calls();
    let RequestBody::Multipart(parts) = &calls[0].body else {
        panic!("expected multipart body");
    };
    assert_eq!(parts.len(), 1);
    assert_eq!(parts[0].name, "file");
    match &parts[0].value {
        PartValue::File(file) => assert_eq!(file.content_type, "application/octet-stream"),
        PartValue::Text(_) => panic!("expected file part"),
    }
}

#[test]
fn template_download_returns_raw_bytes() {
    let api = api();
    api.transport().respond(Method::Get, "/students/template/", 200, vec![0x50, 0x4b, 0x03, 0x04]);
    assert_eq!(block_on(api.download_template()).unwrap(), vec![0x50, 0x4b, 0x03, 0x04]);
}

#[test]
fn generate_password_requires_temp_password() {
    let api = api();
    api.transport().respond_json(Method::Post, "/students/5/generate-password/", 200, &json!({"temp_password": "Xy7!"}));
    assert_eq!(block_on(api.generate_password(5)).unwrap().temp_password, "Xy7!");

    api.transport().respond_json(Method::Post, "/students/5/generate-password/", 200, &json!({}));
    assert!(matches!(block_on(api.generate_password(5)).unwrap_err(), ApiError::Decode(_)));
}

#[test]
fn update_credentials_puts_json() {
    let api = api();
    let payload = CredentialsPayload { username: "asha".to_owned(), temp_password: "Xy7!".to_owned() };
    block_on(api.update_credentials(5, &payload)).unwrap();
    assert_eq!(api.transport().call_lines(), vec!["PUT /students/5/credentials/"]);
}

#[test]
fn toggles_hit_their_action_paths() {
    let api = api();
    block_on(api.toggle_cluster(1)).unwrap();
    block_on(api.toggle_staff(2)).unwrap();
    block_on(api.toggle_club(3)).unwrap();
    block_on(api.toggle_club_change(4)).unwrap();
    assert_eq!(
        api.transport().call_lines(),
        vec![
            "POST /clusters/1/toggle_status/",
            "POST /staff/2/toggle_status/",
            "POST /clubs/3/toggle-status/",
            "POST /students/4/toggle-club-change/",
        ]
    );
}
