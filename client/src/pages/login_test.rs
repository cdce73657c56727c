use super::*;

#[test]
fn submit_login_signs_in_with_placeholder_pair() {
    let mut session = SessionState::default();
    assert_eq!(submit_login(&mut session, "admin", "admin"), Ok(()));
    assert_eq!(session.user.as_deref(), Some("admin"));
}

#[test]
fn submit_login_reports_blank_fields() {
    let mut session = SessionState::default();
    assert_eq!(submit_login(&mut session, "", "admin"), Err("Enter both username and password.".to_owned()));
    assert!(!session.is_signed_in());
}

#[test]
fn submit_login_reports_mismatch() {
    let mut session = SessionState::default();
    assert_eq!(submit_login(&mut session, "admin", "hunter2"), Err("Invalid credentials".to_owned()));
    assert!(!session.is_signed_in());
}
