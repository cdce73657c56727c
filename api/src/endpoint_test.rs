use super::*;

#[test]
fn status_is_get_without_body() {
    assert_eq!(Endpoint::Status.method(), Method::Get);
    assert_eq!(Endpoint::Status.path(), "/status/");
    assert_eq!(Endpoint::Status.encoding(), Encoding::None);
}

#[test]
fn cluster_routes() {
    assert_eq!(Endpoint::ListClusters.path(), "/clusters/");
    assert_eq!(Endpoint::CreateCluster.method(), Method::Post);
    assert_eq!(Endpoint::UpdateCluster(3).method(), Method::Put);
    assert_eq!(Endpoint::UpdateCluster(3).path(), "/clusters/3/");
    assert_eq!(Endpoint::DeleteCluster(3).method(), Method::Delete);
    assert_eq!(Endpoint::ToggleCluster(3).path(), "/clusters/3/toggle_status/");
    assert_eq!(Endpoint::ToggleCluster(3).method(), Method::Post);
}

#[test]
fn staff_writes_are_multipart() {
    assert_eq!(Endpoint::CreateStaff.encoding(), Encoding::Multipart);
    assert_eq!(Endpoint::UpdateStaff(9).encoding(), Encoding::Multipart);
    assert_eq!(Endpoint::UpdateStaff(9).path(), "/staff/9/");
    assert_eq!(Endpoint::ToggleStaff(9).path(), "/staff/9/toggle_status/");
}

#[test]
fn department_routes_have_no_toggle() {
    assert_eq!(Endpoint::ListDepartments.path(), "/departments/");
    assert_eq!(Endpoint::UpdateDepartment(2).path(), "/departments/2/");
    assert_eq!(Endpoint::CreateDepartment.encoding(), Encoding::Json);
}

#[test]
fn student_action_routes() {
    assert_eq!(Endpoint::BulkUploadStudents.path(), "/students/bulk-upload/");
    assert_eq!(Endpoint::BulkUploadStudents.encoding(), Encoding::Multipart);
    assert_eq!(Endpoint::StudentTemplate.method(), Method::Get);
    assert_eq!(Endpoint::StudentTemplate.path(), "/students/template/");
    assert_eq!(Endpoint::SendCredentials(5).path(), "/students/5/send-credentials/");
    assert_eq!(Endpoint::ToggleClubChange(5).path(), "/students/5/toggle-club-change/");
    assert_eq!(Endpoint::ResetPassword(5).path(), "/students/5/reset-password/");
    assert_eq!(Endpoint::GeneratePassword(5).path(), "/students/5/generate-password/");
    assert_eq!(Endpoint::UpdateCredentials(5).method(), Method::Put);
    assert_eq!(Endpoint::UpdateCredentials(5).path(), "/students/5/credentials/");
    assert_eq!(Endpoint::UpdateCredentials(5).encoding(), Encoding::Json);
}

#[test]
fn club_toggle_uses_hyphenated_action() {
    assert_eq!(Endpoint::ToggleClub(7).path(), "/clubs/7/toggle-status/");
    assert_eq!(Endpoint::DeleteClub(7).method(), Method::Delete);
    assert_eq!(Endpoint::DeleteClub(7).encoding(), Encoding::None);
}

#[test]
fn post_actions_carry_no_body() {
    for endpoint in [
        Endpoint::ToggleCluster(1),
        Endpoint::ToggleStaff(1),
        Endpoint::SendCredentials(1),
        Endpoint::ToggleClubChange(1),
        Endpoint::ResetPassword(1),
        Endpoint::GeneratePassword(1),
        Endpoint::ToggleClub(1),
    ] {
        assert_eq!(endpoint.method(), Method::Post, "{endpoint:?}");
        assert_eq!(endpoint.encoding(), Encoding::None, "{endpoint:?}");
    }
}
