use super::*;
use crate::transport::PartValue;

// =============================================================
// Entity decoding
// =============================================================

#[test]
fn cluster_reads_backend_field_names() {
    let cluster: Cluster = serde_json::from_value(serde_json::json!({
        "cluster_id": 4,
        "cluster_name": "Computer Applications",
        "cluster_code": "BCA",
        "description": null,
        "is_active": true,
        "display_name": "BCA (Computer Applications)"
    }))
    .unwrap();
    assert_eq!(cluster.id, 4);
    assert_eq!(cluster.name, "Computer Applications");
    assert_eq!(cluster.code, "BCA");
    assert!(cluster.is_active);
    assert_eq!(cluster.extra.get("display_name"), Some(&serde_json::json!("BCA (Computer Applications)")));
}

#[test]
fn cluster_serializes_back_to_backend_names() {
    let cluster = Cluster { id: 1, name: "Commerce".to_owned(), code: "BCOM".to_owned(), ..Default::default() };
    let value = serde_json::to_value(&cluster).unwrap();
    assert_eq!(value["cluster_id"], 1);
    assert_eq!(value["cluster_name"], "Commerce");
    assert_eq!(value["cluster_code"], "BCOM");
}

#[test]
fn club_accepts_camel_case_aliases() {
    let club: Club = serde_json::from_value(serde_json::json!({
        "id": 2,
        "clubId": "c0ffee",
        "name": "Photography",
        "coordinator": 11,
        "memberCount": 12,
        "maxMembers": 40,
        "representatives": 2,
        "is_active": true
    }))
    .unwrap();
    assert_eq!(club.club_id, "c0ffee");
    assert_eq!(club.member_count, 12);
    assert_eq!(club.max_members, 40);
    assert_eq!(club.representative_count, 2);
    assert_eq!(club.coordinator, Some(11));
}

#[test]
fn student_defaults_missing_flags() {
    let student: Student = serde_json::from_value(serde_json::json!({
        "id": 8,
        "student_id": "BCA1234",
        "name": "Asha",
        "email": "asha@example.com",
        "cluster": 4
    }))
    .unwrap();
    assert!(!student.credentials_sent);
    assert!(!student.can_change_club);
    assert_eq!(student.current_club, None);
    assert_eq!(student.cluster, Some(4));
}

#[test]
fn staff_keeps_unknown_fields() {
    let staff: Staff = serde_json::from_value(serde_json::json!({
        "id": 3,
        "staff_id": "ST01",
        "name": "R. Iyer",
        "email": "iyer@example.com",
        "department": 2,
        "date_joined": "2025-01-01T00:00:00Z"
    }))
    .unwrap();
    assert_eq!(staff.department, Some(2));
    assert!(staff.extra.contains_key("date_joined"));
    let round = serde_json::to_value(&staff).unwrap();
    assert_eq!(round["date_joined"], "2025-01-01T00:00:00Z");
}

// =============================================================
// List decoding
// =============================================================

#[test]
fn decode_list_accepts_records_without_numeric_id() {
    let students = br#"[{"student_id":"BCA1234","name":"Alice","email":"alice@example.com","cluster":1,"year_of_admission":2023,"current_semester":3,"is_active":true,"can_change_club":false,"username":"alice"}]"#;
    let students: Vec<Student> = decode_list(students).unwrap();
    assert_eq!(students.len(), 1);
    assert_eq!(students[0].id, 0);
    assert_eq!(students[0].student_id, "BCA1234");
    assert_eq!(students[0].cluster, Some(1));

    let clubs = br#"[{"club_id":"9b2f6c1e-0d3a-4c1f-9a57-2b8e4d1f0a11","name":"Chess","coordinator":1,"coordinator_name":"R. Iyer","department_name":"Science","max_members":50,"is_active":true}]"#;
    let clubs: Vec<Club> = decode_list(clubs).unwrap();
    assert_eq!(clubs.len(), 1);
    assert_eq!(clubs[0].id, 0);
    assert_eq!(clubs[0].club_id, "9b2f6c1e-0d3a-4c1f-9a57-2b8e4d1f0a11");
    assert_eq!(clubs[0].max_members, 50);
    assert_eq!(clubs[0].extra.get("department_name").and_then(Value::as_str), Some("Science"));
}

#[test]
fn decode_list_accepts_bare_array() {
    let body = br#"[{"id":1,"name":"Science","code":"SCI"}]"#;
    let departments: Vec<Department> = decode_list(body).unwrap();
    assert_eq!(departments.len(), 1);
    assert_eq!(departments[0].code, "SCI");
}

#[test]
fn decode_list_accepts_paginated_results() {
    let body = br#"{"count":1,"results":[{"id":1,"name":"Science","code":"SCI"}]}"#;
    let departments: Vec<Department> = decode_list(body).unwrap();
    assert_eq!(departments.len(), 1);
}

#[test]
fn decode_list_treats_other_shapes_as_empty() {
    let departments: Vec<Department> = decode_list(br#"{"detail":"nothing"}"#).unwrap();
    assert!(departments.is_empty());
    let departments: Vec<Department> = decode_list(b"42").unwrap();
    assert!(departments.is_empty());
}

#[test]
fn decode_list_rejects_non_json() {
    let err = decode_list::<Department>(b"<html>").unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}

#[test]
fn decode_value_maps_empty_body_to_null() {
    assert_eq!(decode_value(b"").unwrap(), Value::Null);
    assert_eq!(decode_value(b"  \n").unwrap(), Value::Null);
    assert_eq!(decode_value(br#"{"ok":true}"#).unwrap(), serde_json::json!({"ok": true}));
}

// =============================================================
// Staff multipart
// =============================================================

#[test]
fn staff_parts_skip_empty_fields() {
    let payload = StaffPayload {
        name: "R. Iyer".to_owned(),
        staff_id: "ST01".to_owned(),
        email: "iyer@example.com".to_owned(),
        subject_expertise: "Algebra".to_owned(),
        qualification: "PhD".to_owned(),
        department: 2,
        ..Default::default()
    };
    let parts = payload.to_parts();
    let names: Vec<&str> = parts.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "name",
            "staff_id",
            "email",
            "subject_expertise",
            "qualification",
            "department",
            "departmental_access_enabled",
            "mentor_access_enabled",
        ]
    );
    assert_eq!(parts[5].as_text(), Some("2"));
    assert_eq!(parts[6].as_text(), Some("false"));
}

#[test]
fn staff_parts_include_mentor_cluster_and_photo() {
    let payload = StaffPayload {
        name: "R. Iyer".to_owned(),
        mentor_access_enabled: true,
        mentor_cluster: Some(4),
        photo: Some(Upload::new("iyer.png", "image/png", vec![0x89, 0x50])),
        ..Default::default()
    };
    let parts = payload.to_parts();
    let mentor = parts.iter().find(|p| p.name == "mentor_cluster").unwrap();
    assert_eq!(mentor.as_text(), Some("4"));
    let photo = parts.iter().find(|p| p.name == "photo").unwrap();
    match &photo.value {
        PartValue::File(upload) => assert_eq!(upload.file_name, "iyer.png"),
        PartValue::Text(_) => panic!("photo should be a file part"),
    }
}

#[test]
fn api_status_success_flag() {
    let ok: ApiStatus = serde_json::from_str(r#"{"status":"success","message":"up","version":"1.0.0"}"#).unwrap();
    assert!(ok.is_success());
    let bad = ApiStatus { status: "error".to_owned(), ..Default::default() };
    assert!(!bad.is_success());
}
