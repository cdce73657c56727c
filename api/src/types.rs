//! Wire DTOs for the back-office API.
//!
//! DESIGN
//! ======
//! Records are owned by the back end; the console only passes them through.
//! Field names follow the back end's serializers, and every record keeps
//! unrecognised fields in a flattened `extra` map so nothing is dropped.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::ApiError;
use crate::transport::{FormPart, Upload};

// =============================================================================
// ENTITIES
// =============================================================================

/// Academic cohort/program grouping.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Cluster {
    #[serde(rename = "cluster_id", alias = "id")]
    pub id: i64,
    #[serde(rename = "cluster_name", alias = "name")]
    pub name: String,
    #[serde(rename = "cluster_code", alias = "code")]
    pub code: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub is_active: bool,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Staff member (faculty or administrator).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Staff {
    pub id: i64,
    pub staff_id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub department: Option<i64>,
    #[serde(default)]
    pub department_name: Option<String>,
    #[serde(default)]
    pub qualification: String,
    #[serde(default)]
    pub subject_expertise: String,
    #[serde(default)]
    pub departmental_access_enabled: bool,
    #[serde(default)]
    pub mentor_access_enabled: bool,
    #[serde(default)]
    pub mentor_cluster: Option<i64>,
    #[serde(default)]
    pub mentor_cluster_name: Option<String>,
    /// Photo URL, when one was uploaded.
    #[serde(default)]
    pub photo: Option<String>,
    #[serde(default)]
    pub is_active: bool,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Department {
    pub id: i64,
    pub name: String,
    pub code: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub is_active: bool,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Student {
    /// Absent from some back-end serializers; `0` then.
    #[serde(default)]
    pub id: i64,
    pub student_id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub cluster: Option<i64>,
    #[serde(default)]
    pub cluster_name: Option<String>,
    #[serde(default)]
    pub roll_number: Option<String>,
    #[serde(default)]
    pub year_of_admission: i32,
    #[serde(default)]
    pub current_semester: u8,
    /// Name of the club the student currently belongs to.
    #[serde(default)]
    pub current_club: Option<String>,
    #[serde(default)]
    pub credentials_sent: bool,
    #[serde(default)]
    pub can_change_club: bool,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub temp_password: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Club {
    /// Absent when the back end exposes only `club_id`; `0` then.
    #[serde(default)]
    pub id: i64,
    /// Public club identifier (UUID string).
    #[serde(default, alias = "clubId")]
    pub club_id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Coordinating staff member id.
    #[serde(default)]
    pub coordinator: Option<i64>,
    #[serde(default)]
    pub coordinator_name: Option<String>,
    #[serde(default, alias = "memberCount")]
    pub member_count: u32,
    /// Capacity.
    #[serde(default, alias = "maxMembers")]
    pub max_members: u32,
    #[serde(default, alias = "representatives")]
    pub representative_count: u32,
    #[serde(default)]
    pub is_active: bool,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

// =============================================================================
// RESPONSES
// =============================================================================

/// Body of the health-check endpoint.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiStatus {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
}

impl ApiStatus {
    /// The back end reports itself healthy with `status: "success"`.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status == "success"
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedStudent {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub roll_number: Option<String>,
}

/// Result of a bulk student upload.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkUploadReport {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub created_students: Vec<CreatedStudent>,
    #[serde(default)]
    pub errors: Vec<String>,
    #[serde(default)]
    pub upload_id: Option<i64>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordReset {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub new_password: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedPassword {
    pub temp_password: String,
}

// =============================================================================
// PAYLOADS
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClusterPayload {
    pub cluster_name: String,
    pub cluster_code: String,
    pub description: String,
    pub is_active: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartmentPayload {
    pub name: String,
    pub code: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentPayload {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub student_id: String,
    pub year_of_admission: i32,
    pub current_semester: u8,
    pub cluster: i64,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClubPayload {
    pub name: String,
    pub description: String,
    pub coordinator: i64,
    pub max_members: u32,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialsPayload {
    pub username: String,
    pub temp_password: String,
}

/// Staff create/update form, sent as multipart so a photo can ride along.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StaffPayload {
    pub name: String,
    pub staff_id: String,
    pub email: String,
    pub phone: String,
    pub subject_expertise: String,
    pub qualification: String,
    pub department: i64,
    pub departmental_access_enabled: bool,
    pub mentor_access_enabled: bool,
    pub mentor_cluster: Option<i64>,
    pub photo: Option<Upload>,
}

impl StaffPayload {
    /// Multipart fields in form order. Empty text fields are omitted.
    #[must_use]
    pub fn to_parts(&self) -> Vec<FormPart> {
        let mut parts = Vec::new();
        let mut push_text = |name: &str, value: &str| {
            if !value.is_empty() {
                parts.push(FormPart::text(name, value));
            }
        };
        push_text("name", &self.name);
        push_text("staff_id", &self.staff_id);
        push_text("email", &self.email);
        push_text("phone", &self.phone);
        push_text("subject_expertise", &self.subject_expertise);
        push_text("qualification", &self.qualification);
        push_text("department", &self.department.to_string());
        push_text("departmental_access_enabled", bool_field(self.departmental_access_enabled));
        push_text("mentor_access_enabled", bool_field(self.mentor_access_enabled));
        if let Some(cluster) = self.mentor_cluster {
            push_text("mentor_cluster", &cluster.to_string());
        }
        if let Some(photo) = &self.photo {
            parts.push(FormPart::file("photo", photo.clone()));
        }
        parts
    }
}

fn bool_field(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}

// =============================================================================
// DECODING
// =============================================================================

/// Decode a list response.
///
/// Accepts a bare JSON array or a paginated object with a `results` array.
/// Any other shape yields an empty list.
///
/// # Errors
///
/// Returns [`ApiError::Decode`] if the body is not JSON or an element does not
/// match `T`.
pub fn decode_list<T: DeserializeOwned>(body: &[u8]) -> Result<Vec<T>, ApiError> {
    let value: Value = serde_json::from_slice(body).map_err(|e| ApiError::Decode(e.to_string()))?;
    let items = match value {
        Value::Array(items) => items,
        Value::Object(mut object) => match object.remove("results") {
            Some(Value::Array(items)) => items,
            _ => return Ok(Vec::new()),
        },
        _ => return Ok(Vec::new()),
    };
    items
        .into_iter()
        .map(|item| serde_json::from_value(item).map_err(|e| ApiError::Decode(e.to_string())))
        .collect()
}

/// Decode a single JSON object.
///
/// # Errors
///
/// Returns [`ApiError::Decode`] if the body does not match `T`.
pub fn decode_json<T: DeserializeOwned>(body: &[u8]) -> Result<T, ApiError> {
    serde_json::from_slice(body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Decode a write response as raw JSON; an empty body becomes `Null`.
///
/// # Errors
///
/// Returns [`ApiError::Decode`] if a non-empty body is not JSON.
pub fn decode_value(body: &[u8]) -> Result<Value, ApiError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Null);
    }
    decode_json(body)
}
