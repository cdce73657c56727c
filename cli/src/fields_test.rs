use std::path::PathBuf;

use super::*;

fn pairs(raw: &[&str]) -> Vec<(String, String)> {
    raw.iter().map(|r| parse_field(r).unwrap()).collect()
}

#[test]
fn parse_field_splits_on_first_equals() {
    assert_eq!(parse_field("email=a=b@example.com").unwrap(), ("email".to_owned(), "a=b@example.com".to_owned()));
    assert!(matches!(parse_field("email"), Err(CliError::MalformedField(_))));
    assert!(matches!(parse_field("=x"), Err(CliError::MalformedField(_))));
}

#[test]
fn staff_payload_maps_known_fields() {
    let fields = pairs(&[
        "name=R. Iyer",
        "staff_id=ST09",
        "email=iyer@example.com",
        "department=2",
        "mentor_access_enabled=true",
        "mentor_cluster=4",
    ]);
    let payload = staff_payload(&fields, None).unwrap();
    assert_eq!(payload.name, "R. Iyer");
    assert_eq!(payload.department, 2);
    assert!(payload.mentor_access_enabled);
    assert!(!payload.departmental_access_enabled);
    assert_eq!(payload.mentor_cluster, Some(4));
}

#[test]
fn staff_payload_requires_department() {
    let fields = pairs(&["name=R. Iyer"]);
    assert!(matches!(staff_payload(&fields, None), Err(CliError::MissingField("department"))));
}

#[test]
fn staff_payload_rejects_unknown_and_invalid_fields() {
    assert!(matches!(staff_payload(&pairs(&["salary=1"]), None), Err(CliError::UnknownField(k)) if k == "salary"));
    assert!(matches!(
        staff_payload(&pairs(&["department=science"]), None),
        Err(CliError::InvalidField { field, .. }) if field == "department"
    ));
}

#[test]
fn photo_becomes_a_file_part() {
    let photo = Upload::new("iyer.png", "image/png", vec![1, 2, 3]);
    let payload = staff_payload(&pairs(&["department=2"]), Some(photo)).unwrap();
    assert!(payload.to_parts().iter().any(|p| p.name == "photo"));
}

#[test]
fn mime_for_uses_extension() {
    assert_eq!(mime_for(&PathBuf::from("a/b/photo.JPG")), "image/jpeg");
    assert_eq!(mime_for(&PathBuf::from("roster.xlsx")), "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet");
    assert_eq!(mime_for(&PathBuf::from("README")), "application/octet-stream");
}

#[test]
fn read_upload_reports_missing_file() {
    let err = read_upload(&PathBuf::from("/definitely/not/here.xlsx")).unwrap_err();
    assert!(matches!(err, CliError::Io { .. }));
}
