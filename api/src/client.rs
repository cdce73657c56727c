//! Typed facade over a [`Transport`]: one method per back-end endpoint.
//!
//! ERROR HANDLING
//! ==============
//! Non-2xx responses become [`ApiError::Status`]. Every response and every
//! failure is logged with the originating path; nothing is retried.

#[cfg(test)]
#[path = "client_test.rs"]
mod client_test;

use serde::Serialize;
use serde_json::Value;

use crate::endpoint::Endpoint;
use crate::error::ApiError;
use crate::transport::{ApiRequest, ApiResponse, FormPart, RequestBody, Transport, Upload};
use crate::types::{
    ApiStatus, BulkUploadReport, Club, ClubPayload, Cluster, ClusterPayload, CredentialsPayload, Department,
    DepartmentPayload, GeneratedPassword, MessageResponse, PasswordReset, Staff, StaffPayload, Student,
    StudentPayload, decode_json, decode_list, decode_value,
};

/// Shared, stateless API client.
#[derive(Clone, Debug, Default)]
pub struct AdminApi<T> {
    transport: T,
}

impl<T: Transport> AdminApi<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    async fn call(&self, endpoint: Endpoint, body: RequestBody) -> Result<ApiResponse, ApiError> {
        let request = ApiRequest { method: endpoint.method(), path: endpoint.path(), body };
        let method = request.method;
        let path = request.path.clone();

        let result = match self.transport.send(request).await {
            Ok(response) if response.is_success() => Ok(response),
            Ok(response) => Err(ApiError::Status { status: response.status, body: response.text() }),
            Err(e) => Err(e),
        };

        match &result {
            Ok(response) => tracing::debug!(%method, %path, status = response.status, "api response"),
            Err(e) => tracing::warn!(%method, %path, error = %e, "api error"),
        }
        result
    }

    async fn call_json_body<B: Serialize>(&self, endpoint: Endpoint, body: &B) -> Result<Value, ApiError> {
        let json = serde_json::to_value(body).map_err(|e| ApiError::Encode(e.to_string()))?;
        let response = self.call(endpoint, RequestBody::Json(json)).await?;
        decode_value(&response.body)
    }

    async fn call_empty(&self, endpoint: Endpoint) -> Result<Value, ApiError> {
        let response = self.call(endpoint, RequestBody::Empty).await?;
        decode_value(&response.body)
    }

    async fn call_multipart(&self, endpoint: Endpoint, parts: Vec<FormPart>) -> Result<ApiResponse, ApiError> {
        self.call(endpoint, RequestBody::Multipart(parts)).await
    }

    async fn list<R: serde::de::DeserializeOwned>(&self, endpoint: Endpoint) -> Result<Vec<R>, ApiError> {
        let response = self.call(endpoint, RequestBody::Empty).await?;
        decode_list(&response.body)
    }

    // =========================================================================
    // STATUS
    // =========================================================================

    /// Health check.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the call fails or the body is not a status object.
    pub async fn status(&self) -> Result<ApiStatus, ApiError> {
        let response = self.call(Endpoint::Status, RequestBody::Empty).await?;
        decode_json(&response.body)
    }

    // =========================================================================
    // CLUSTERS
    // =========================================================================

    /// # Errors
    ///
    /// Returns an [`ApiError`] if the call fails or the list cannot be decoded.
    pub async fn list_clusters(&self) -> Result<Vec<Cluster>, ApiError> {
        self.list(Endpoint::ListClusters).await
    }

    /// # Errors
    ///
    /// Returns an [`ApiError`] if the call fails.
    pub async fn create_cluster(&self, payload: &ClusterPayload) -> Result<Value, ApiError> {
        self.call_json_body(Endpoint::CreateCluster, payload).await
    }

    /// # Errors
    ///
    /// Returns an [`ApiError`] if the call fails.
    pub async fn update_cluster(&self, id: i64, payload: &ClusterPayload) -> Result<Value, ApiError> {
        self.call_json_body(Endpoint::UpdateCluster(id), payload).await
    }

    /// # Errors
    ///
    /// Returns an [`ApiError`] if the call fails.
    pub async fn delete_cluster(&self, id: i64) -> Result<Value, ApiError> {
        self.call_empty(Endpoint::DeleteCluster(id)).await
    }

    /// # Errors
    ///
    /// Returns an [`ApiError`] if the call fails.
    pub async fn toggle_cluster(&self, id: i64) -> Result<Value, ApiError> {
        self.call_empty(Endpoint::ToggleCluster(id)).await
    }

    // =========================================================================
    // STAFF
    // =========================================================================

    /// # Errors
    ///
    /// Returns an [`ApiError`] if the call fails or the list cannot be decoded.
    pub async fn list_staff(&self) -> Result<Vec<Staff>, ApiError> {
        self.list(Endpoint::ListStaff).await
    }

    /// Create a staff member. Sent as multipart.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the call fails.
    pub async fn create_staff(&self, payload: &StaffPayload) -> Result<Value, ApiError> {
        let response = self.call_multipart(Endpoint::CreateStaff, payload.to_parts()).await?;
        decode_value(&response.body)
    }

    /// Update a staff member. Sent as multipart.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the call fails.
    pub async fn update_staff(&self, id: i64, payload: &StaffPayload) -> Result<Value, ApiError> {
        let response = self.call_multipart(Endpoint::UpdateStaff(id), payload.to_parts()).await?;
        decode_value(&response.body)
    }

    /// # Errors
    ///
    /// Returns an [`ApiError`] if the call fails.
    pub async fn delete_staff(&self, id: i64) -> Result<Value, ApiError> {
        self.call_empty(Endpoint::DeleteStaff(id)).await
    }

    /// # Errors
    ///
    /// Returns an [`ApiError`] if the call fails.
    pub async fn toggle_staff(&self, id: i64) -> Result<Value, ApiError> {
        self.call_empty(Endpoint::ToggleStaff(id)).await
    }

    // =========================================================================
    // DEPARTMENTS
    // =========================================================================

    /// # Errors
    ///
    /// Returns an [`ApiError`] if the call fails or the list cannot be decoded.
    pub async fn list_departments(&self) -> Result<Vec<Department>, ApiError> {
        self.list(Endpoint::ListDepartments).await
    }

    /// # Errors
    ///
    /// Returns an [`ApiError`] if the call fails.
    pub async fn create_department(&self, payload: &DepartmentPayload) -> Result<Value, ApiError> {
        self.call_json_body(Endpoint::CreateDepartment, payload).await
    }

    /// # Errors
    ///
    /// Returns an [`ApiError`] if the call fails.
    pub async fn update_department(&self, id: i64, payload: &DepartmentPayload) -> Result<Value, ApiError> {
        self.call_json_body(Endpoint::UpdateDepartment(id), payload).await
    }

    /// # Errors
    ///
    /// Returns an [`ApiError`] if the call fails.
    pub async fn delete_department(&self, id: i64) -> Result<Value, ApiError> {
        self.call_empty(Endpoint::DeleteDepartment(id)).await
    }

    // =========================================================================
    // STUDENTS
    // =========================================================================

    /// # Errors
    ///
    /// Returns an [`ApiError`] if the call fails or the list cannot be decoded.
    pub async fn list_students(&self) -> Result<Vec<Student>, ApiError> {
        self.list(Endpoint::ListStudents).await
    }

    /// # Errors
    ///
    /// Returns an [`ApiError`] if the call fails.
    pub async fn create_student(&self, payload: &StudentPayload) -> Result<Value, ApiError> {
        self.call_json_body(Endpoint::CreateStudent, payload).await
    }

    /// # Errors
    ///
    /// Returns an [`ApiError`] if the call fails.
    pub async fn update_student(&self, id: i64, payload: &StudentPayload) -> Result<Value, ApiError> {
        self.call_json_body(Endpoint::UpdateStudent(id), payload).await
    }

    /// # Errors
    ///
    /// Returns an [`ApiError`] if the call fails.
    pub async fn delete_student(&self, id: i64) -> Result<Value, ApiError> {
        self.call_empty(Endpoint::DeleteStudent(id)).await
    }

    /// Upload a roster spreadsheet as the multipart `file` field.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the call fails or the report cannot be decoded.
    pub async fn bulk_upload_students(&self, file: Upload) -> Result<BulkUploadReport, ApiError> {
        let parts = vec![FormPart::file("file", file)];
        let response = self.call_multipart(Endpoint::BulkUploadStudents, parts).await?;
        decode_json(&response.body)
    }

    /// Download the bulk-upload spreadsheet template.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the call fails.
    pub async fn download_template(&self) -> Result<Vec<u8>, ApiError> {
        let response = self.call(Endpoint::StudentTemplate, RequestBody::Empty).await?;
        Ok(response.body)
    }

    /// # Errors
    ///
    /// Returns an [`ApiError`] if the call fails.
    pub async fn send_credentials(&self, id: i64) -> Result<MessageResponse, ApiError> {
        let response = self.call(Endpoint::SendCredentials(id), RequestBody::Empty).await?;
        decode_json(&response.body)
    }

    /// # Errors
    ///
    /// Returns an [`ApiError`] if the call fails.
    pub async fn toggle_club_change(&self, id: i64) -> Result<Value, ApiError> {
        self.call_empty(Endpoint::ToggleClubChange(id)).await
    }

    /// # Errors
    ///
    /// Returns an [`ApiError`] if the call fails.
    pub async fn reset_password(&self, id: i64) -> Result<PasswordReset, ApiError> {
        let response = self.call(Endpoint::ResetPassword(id), RequestBody::Empty).await?;
        decode_json(&response.body)
    }

    /// # Errors
    ///
    /// Returns an [`ApiError`] if the call fails or the body lacks `temp_password`.
    pub async fn generate_password(&self, id: i64) -> Result<GeneratedPassword, ApiError> {
        let response = self.call(Endpoint::GeneratePassword(id), RequestBody::Empty).await?;
        decode_json(&response.body)
    }

    /// # Errors
    ///
    /// Returns an [`ApiError`] if the call fails.
    pub async fn update_credentials(&self, id: i64, payload: &CredentialsPayload) -> Result<Value, ApiError> {
        self.call_json_body(Endpoint::UpdateCredentials(id), payload).await
    }

    // =========================================================================
    // CLUBS
    // =========================================================================

    /// # Errors
    ///
    /// Returns an [`ApiError`] if the call fails or the list cannot be decoded.
    pub async fn list_clubs(&self) -> Result<Vec<Club>, ApiError> {
        self.list(Endpoint::ListClubs).await
    }

    /// # Errors
    ///
    /// Returns an [`ApiError`] if the call fails.
    pub async fn create_club(&self, payload: &ClubPayload) -> Result<Value, ApiError> {
        self.call_json_body(Endpoint::CreateClub, payload).await
    }

    /// # Errors
    ///
    /// Returns an [`ApiError`] if the call fails.
    pub async fn update_club(&self, id: i64, payload: &ClubPayload) -> Result<Value, ApiError> {
        self.call_json_body(Endpoint::UpdateClub(id), payload).await
    }

    /// # Errors
    ///
    /// Returns an [`ApiError`] if the call fails.
    pub async fn delete_club(&self, id: i64) -> Result<Value, ApiError> {
        self.call_empty(Endpoint::DeleteClub(id)).await
    }

    /// # Errors
    ///
    /// Returns an [`ApiError`] if the call fails.
    pub async fn toggle_club(&self, id: i64) -> Result<Value, ApiError> {
        self.call_empty(Endpoint::ToggleClub(id)).await
    }
}
