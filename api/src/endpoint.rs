//! Endpoint table for the back-office REST surface.
//!
//! Each variant is one back-end operation. Paths are relative to the API
//! base (`/api` in the browser) and keep the trailing slash the back end's
//! router expects.

#[cfg(test)]
#[path = "endpoint_test.rs"]
mod endpoint_test;

use crate::transport::Method;

/// How an endpoint's request body is encoded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Encoding {
    /// No body is sent.
    None,
    Json,
    /// File-bearing form.
    Multipart,
}

/// One back-end operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Status,

    ListClusters,
    CreateCluster,
    UpdateCluster(i64),
    DeleteCluster(i64),
    ToggleCluster(i64),

    ListStaff,
    CreateStaff,
    UpdateStaff(i64),
    DeleteStaff(i64),
    ToggleStaff(i64),

    ListDepartments,
    CreateDepartment,
    UpdateDepartment(i64),
    DeleteDepartment(i64),

    ListStudents,
    CreateStudent,
    UpdateStudent(i64),
    DeleteStudent(i64),
    BulkUploadStudents,
    StudentTemplate,
    SendCredentials(i64),
    ToggleClubChange(i64),
    ResetPassword(i64),
    GeneratePassword(i64),
    UpdateCredentials(i64),

    ListClubs,
    CreateClub,
    UpdateClub(i64),
    DeleteClub(i64),
    ToggleClub(i64),
}

impl Endpoint {
    #[must_use]
    pub fn method(self) -> Method {
        match self {
            Self::Status
            | Self::ListClusters
            | Self::ListStaff
            | Self::ListDepartments
            | Self::ListStudents
            | Self::StudentTemplate
            | Self::ListClubs => Method::Get,

            Self::UpdateCluster(_)
            | Self::UpdateStaff(_)
            | Self::UpdateDepartment(_)
            | Self::UpdateStudent(_)
            | Self::UpdateCredentials(_)
            | Self::UpdateClub(_) => Method::Put,

            Self::DeleteCluster(_)
            | Self::DeleteStaff(_)
            | Self::DeleteDepartment(_)
            | Self::DeleteStudent(_)
            | Self::DeleteClub(_) => Method::Delete,

            Self::CreateCluster
            | Self::ToggleCluster(_)
            | Self::CreateStaff
            | Self::ToggleStaff(_)
            | Self::CreateDepartment
            | Self::CreateStudent
            | Self::BulkUploadStudents
            | Self::SendCredentials(_)
            | Self::ToggleClubChange(_)
            | Self::ResetPassword(_)
            | Self::GeneratePassword(_)
            | Self::CreateClub
            | Self::ToggleClub(_) => Method::Post,
        }
    }

    /// Path relative to the API base.
    #[must_use]
    pub fn path(self) -> String {
        match self {
            Self::Status => "/status/".to_owned(),

            Self::ListClusters | Self::CreateCluster => "/clusters/".to_owned(),
            Self::UpdateCluster(id) | Self::DeleteCluster(id) => format!("/clusters/{id}/"),
            Self::ToggleCluster(id) => format!("/clusters/{id}/toggle_status/"),

            Self::ListStaff | Self::CreateStaff => "/staff/".to_owned(),
            Self::UpdateStaff(id) | Self::DeleteStaff(id) => format!("/staff/{id}/"),
            Self::ToggleStaff(id) => format!("/staff/{id}/toggle_status/"),

            Self::ListDepartments | Self::CreateDepartment => "/departments/".to_owned(),
            Self::UpdateDepartment(id) | Self::DeleteDepartment(id) => format!("/departments/{id}/"),

            Self::ListStudents | Self::CreateStudent => "/students/".to_owned(),
            Self::UpdateStudent(id) | Self::DeleteStudent(id) => format!("/students/{id}/"),
            Self::BulkUploadStudents => "/students/bulk-upload/".to_owned(),
            Self::StudentTemplate => "/students/template/".to_owned(),
            Self::SendCredentials(id) => format!("/students/{id}/send-credentials/"),
            Self::ToggleClubChange(id) => format!("/students/{id}/toggle-club-change/"),
            Self::ResetPassword(id) => format!("/students/{id}/reset-password/"),
            Self::GeneratePassword(id) => format!("/students/{id}/generate-password/"),
            Self::UpdateCredentials(id) => format!("/students/{id}/credentials/"),

            Self::ListClubs | Self::CreateClub => "/clubs/".to_owned(),
            Self::UpdateClub(id) | Self::DeleteClub(id) => format!("/clubs/{id}/"),
            Self::ToggleClub(id) => format!("/clubs/{id}/toggle-status/"),
        }
    }

    /// Body encoding the back end expects for this operation.
    #[must_use]
    pub fn encoding(self) -> Encoding {
        match self {
            Self::CreateStaff | Self::UpdateStaff(_) | Self::BulkUploadStudents => Encoding::Multipart,
            Self::CreateCluster
            | Self::UpdateCluster(_)
            | Self::CreateDepartment
            | Self::UpdateDepartment(_)
            | Self::CreateStudent
            | Self::UpdateStudent(_)
            | Self::UpdateCredentials(_)
            | Self::CreateClub
            | Self::UpdateClub(_) => Encoding::Json,
            _ => Encoding::None,
        }
    }
}
