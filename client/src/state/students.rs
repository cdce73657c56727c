//! Students screen state.
//!
//! SYSTEM CONTEXT
//! ==============
//! The busiest screen: roster CRUD, client-side search/cluster filtering,
//! credential dispatch and editing, password reset, club-change permission,
//! spreadsheet bulk upload, and template download. Every action maps its
//! failure to one fixed banner message; successes that the user must notice
//! (credentials sent, password reset) go to a separate notice line.

#[cfg(test)]
#[path = "students_test.rs"]
mod students_test;

use campus_api::types::{BulkUploadReport, Cluster, CredentialsPayload, GeneratedPassword, PasswordReset, Student, StudentPayload};
use campus_api::{AdminApi, ApiError, Transport, Upload};

use super::collection::{Collection, LoadState, Mutation, apply_load, apply_mutation, write_then_reload};
use super::confirm::Confirmation;
use super::editor::{Editor, FormError, FormMode, FromRecord, parse_id, trimmed};

pub const LOAD_FAILED: &str = "Failed to load students";
pub const CLUSTERS_LOAD_FAILED: &str = "Failed to load clusters";
pub const ADD_FAILED: &str = "Failed to add student";
pub const UPDATE_FAILED: &str = "Failed to update student";
pub const DELETE_FAILED: &str = "Failed to delete student";
pub const CLUB_PERMISSION_FAILED: &str = "Failed to update club permission";
pub const SEND_CREDENTIALS_FAILED: &str = "Failed to send credentials";
pub const RESET_PASSWORD_FAILED: &str = "Failed to reset password";
pub const GENERATE_PASSWORD_FAILED: &str = "Failed to generate new password";
pub const UPDATE_CREDENTIALS_FAILED: &str = "Failed to update credentials";
pub const UPLOAD_FAILED: &str = "Failed to upload students";
pub const TEMPLATE_FAILED: &str = "Failed to download template";

pub const CREDENTIALS_SENT: &str = "Credentials sent successfully!";
pub const PASSWORD_RESET_SENT: &str = "Password reset email sent successfully!";

pub const EMPTY: &str = "No students found";
pub const NO_MATCHES: &str = "No students match your search criteria";

pub const TEMPLATE_FILE_NAME: &str = "students_template.xlsx";

const ADMISSION_YEARS: std::ops::RangeInclusive<i32> = 2020..=2030;
const SEMESTERS: std::ops::RangeInclusive<u8> = 1..=8;

// =============================================================================
// FORMS
// =============================================================================

/// Add/edit student fields. Numeric inputs stay strings until validation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StudentForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub student_id: String,
    pub year_of_admission: String,
    pub current_semester: String,
    pub cluster: String,
}

impl Default for StudentForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            student_id: String::new(),
            year_of_admission: String::new(),
            current_semester: "1".to_owned(),
            cluster: String::new(),
        }
    }
}

impl FromRecord<Student> for StudentForm {
    fn from_record(student: &Student) -> Self {
        Self {
            name: student.name.clone(),
            email: student.email.clone(),
            phone: student.phone.clone().unwrap_or_default(),
            student_id: student.student_id.clone(),
            year_of_admission: student.year_of_admission.to_string(),
            current_semester: student.current_semester.to_string(),
            cluster: student.cluster.map(|id| id.to_string()).unwrap_or_default(),
        }
    }
}

impl StudentForm {
    /// # Errors
    ///
    /// Returns [`FormError`] for a blank required field or an out-of-range
    /// year or semester.
    pub fn validate(&self) -> Result<StudentPayload, FormError> {
        const MISSING: FormError = FormError("Please fill in all required fields");

        let required = [&self.name, &self.student_id, &self.email];
        if required.iter().any(|field| field.trim().is_empty()) {
            return Err(MISSING);
        }
        let cluster = parse_id(&self.cluster).ok_or(MISSING)?;
        let year_of_admission = self
            .year_of_admission
            .trim()
            .parse::<i32>()
            .ok()
            .filter(|year| ADMISSION_YEARS.contains(year))
            .ok_or(FormError("Year of admission must be between 2020 and 2030"))?;
        let current_semester = self
            .current_semester
            .trim()
            .parse::<u8>()
            .ok()
            .filter(|sem| SEMESTERS.contains(sem))
            .ok_or(FormError("Semester must be between 1 and 8"))?;

        Ok(StudentPayload {
            name: trimmed(&self.name),
            email: trimmed(&self.email),
            phone: trimmed(&self.phone),
            student_id: trimmed(&self.student_id),
            year_of_admission,
            current_semester,
            cluster,
        })
    }
}

/// Open credentials modal for one student.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CredentialsDraft {
    pub student: i64,
    pub student_name: String,
    pub username: String,
    pub temp_password: String,
}

impl CredentialsDraft {
    pub fn for_student(student: &Student) -> Self {
        let username = student.username.clone().filter(|u| !u.is_empty()).unwrap_or_else(|| student.email.clone());
        Self {
            student: student.id,
            student_name: student.name.clone(),
            username,
            temp_password: student.temp_password.clone().unwrap_or_default(),
        }
    }

    pub fn payload(&self) -> CredentialsPayload {
        CredentialsPayload { username: trimmed(&self.username), temp_password: self.temp_password.clone() }
    }
}

/// Open bulk-upload modal.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BulkUploadDraft {
    pub file: Option<Upload>,
    /// Report from the last upload, shown as a summary.
    pub report: Option<BulkUploadReport>,
}

impl BulkUploadDraft {
    /// # Errors
    ///
    /// Returns [`FormError`] when no spreadsheet is chosen.
    pub fn validate(&self) -> Result<Upload, FormError> {
        const NOT_EXCEL: FormError = FormError("Please choose an Excel file (.xlsx or .xls)");
        let file = self.file.as_ref().ok_or(NOT_EXCEL)?;
        let name = file.file_name.to_ascii_lowercase();
        if !(name.ends_with(".xlsx") || name.ends_with(".xls")) {
            return Err(NOT_EXCEL);
        }
        Ok(file.clone())
    }
}

// =============================================================================
// FILTERING
// =============================================================================

/// Search box plus cluster select.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StudentFilter {
    pub search: String,
    pub cluster: Option<i64>,
}

impl StudentFilter {
    /// Case-insensitive substring over name/email/student id, AND cluster equality.
    pub fn matches(&self, student: &Student) -> bool {
        let term = self.search.to_lowercase();
        let matches_search = term.is_empty()
            || student.name.to_lowercase().contains(&term)
            || student.email.to_lowercase().contains(&term)
            || student.student_id.to_lowercase().contains(&term);
        let matches_cluster = self.cluster.is_none_or(|cluster| student.cluster == Some(cluster));
        matches_search && matches_cluster
    }

    pub fn apply<'a>(&self, students: &'a [Student]) -> Vec<&'a Student> {
        students.iter().filter(|s| self.matches(s)).collect()
    }
}

/// Numbers for the summary tiles.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StudentSummary {
    pub total: usize,
    pub filtered: usize,
    pub credentials_sent: usize,
    pub in_club: usize,
}

// =============================================================================
// SCREEN STATE
// =============================================================================

#[derive(Debug)]
pub struct StudentsLoad {
    pub students: Result<Vec<Student>, ApiError>,
    pub clusters: Result<Vec<Cluster>, ApiError>,
}

/// Outcome of a bulk upload followed by a roster reload.
#[derive(Clone, Debug, PartialEq)]
pub enum BulkOutcome {
    Rejected(ApiError),
    Uploaded(BulkUploadReport, Result<Vec<Student>, ApiError>),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct StudentsState {
    pub students: Collection<Student>,
    pub clusters: Collection<Cluster>,
    pub filter: StudentFilter,
    pub editor: Option<Editor<StudentForm>>,
    pub credentials: Option<CredentialsDraft>,
    pub bulk: Option<BulkUploadDraft>,
    pub deleting: Confirmation<i64>,
    pub resetting: Confirmation<i64>,
    pub error: Option<String>,
    pub notice: Option<String>,
}

impl StudentsState {
    pub fn begin_load(&mut self) {
        self.students.begin_load();
        self.clusters.begin_load();
    }

    pub fn apply_load(&mut self, load: StudentsLoad) {
        let clusters_failed = apply_load(&mut self.clusters, load.clusters, CLUSTERS_LOAD_FAILED);
        let students_failed = apply_load(&mut self.students, load.students, LOAD_FAILED);
        self.error = students_failed.or(clusters_failed);
    }

    pub fn visible(&self) -> Vec<&Student> {
        self.filter.apply(&self.students.items)
    }

    pub fn summary(&self) -> StudentSummary {
        let items = &self.students.items;
        StudentSummary {
            total: items.len(),
            filtered: self.visible().len(),
            credentials_sent: items.iter().filter(|s| s.credentials_sent).count(),
            in_club: items.iter().filter(|s| s.current_club.as_deref().is_some_and(|c| !c.is_empty())).count(),
        }
    }

    /// Empty-state text for the table, if it has no rows to show.
    pub fn empty_message(&self) -> Option<&'static str> {
        if self.students.is_settled_empty() {
            Some(EMPTY)
        } else if self.students.load == LoadState::Ready && self.visible().is_empty() {
            Some(NO_MATCHES)
        } else {
            None
        }
    }

    pub fn cluster_label(&self, student: &Student) -> String {
        student
            .cluster
            .and_then(|id| self.clusters.items.iter().find(|c| c.id == id))
            .map(|c| c.code.clone())
            .or_else(|| student.cluster_name.clone())
            .unwrap_or_else(|| "—".to_owned())
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    fn report(&mut self, message: Option<String>) {
        if message.is_some() {
            self.error = message;
        }
    }

    // -------------------------------------------------------------------------
    // Create / edit / delete
    // -------------------------------------------------------------------------

    pub fn open_create(&mut self, current_year: i32) {
        let mut editor = Editor::<StudentForm>::create();
        editor.form.year_of_admission = current_year.to_string();
        self.editor = Some(editor);
    }

    pub fn open_edit(&mut self, student: &Student) {
        self.editor = Some(Editor::edit(student.id, student));
    }

    pub fn close_editor(&mut self) {
        self.editor = None;
    }

    pub fn prepare_save(&mut self) -> Option<(FormMode, StudentPayload)> {
        let editor = self.editor.as_ref()?;
        match editor.form.validate() {
            Ok(payload) => {
                self.error = None;
                Some((editor.mode, payload))
            }
            Err(e) => {
                self.error = Some(e.to_string());
                None
            }
        }
    }

    /// `email` is the address the credentials were dispatched to.
    pub fn apply_save(&mut self, mode: FormMode, email: &str, outcome: Mutation<Student>) {
        if outcome.was_applied() {
            self.editor = None;
            if mode == FormMode::Create {
                self.notice = Some(format!("Student created successfully! Credentials have been sent to {email}"));
            }
        }
        let write_failed = if mode == FormMode::Create { ADD_FAILED } else { UPDATE_FAILED };
        let message = apply_mutation(&mut self.students, outcome, write_failed, LOAD_FAILED);
        self.report(message);
    }

    pub fn apply_delete(&mut self, outcome: Mutation<Student>) {
        let message = apply_mutation(&mut self.students, outcome, DELETE_FAILED, LOAD_FAILED);
        self.report(message);
    }

    // -------------------------------------------------------------------------
    // Row actions
    // -------------------------------------------------------------------------

    pub fn apply_club_change_toggle(&mut self, outcome: Mutation<Student>) {
        let message = apply_mutation(&mut self.students, outcome, CLUB_PERMISSION_FAILED, LOAD_FAILED);
        self.report(message);
    }

    pub fn apply_send_credentials(&mut self, outcome: Mutation<Student>) {
        if outcome.was_applied() {
            self.error = None;
            self.notice = Some(CREDENTIALS_SENT.to_owned());
        }
        let message = apply_mutation(&mut self.students, outcome, SEND_CREDENTIALS_FAILED, LOAD_FAILED);
        self.report(message);
    }

    pub fn apply_reset_password(&mut self, result: Result<PasswordReset, ApiError>) {
        match result {
            Ok(_) => {
                self.error = None;
                self.notice = Some(PASSWORD_RESET_SENT.to_owned());
            }
            Err(e) => {
                log::debug!("{RESET_PASSWORD_FAILED}: {e}");
                self.error = Some(RESET_PASSWORD_FAILED.to_owned());
            }
        }
    }

    // -------------------------------------------------------------------------
    // Credentials modal
    // -------------------------------------------------------------------------

    pub fn open_credentials(&mut self, student: &Student) {
        self.credentials = Some(CredentialsDraft::for_student(student));
    }

    pub fn close_credentials(&mut self) {
        self.credentials = None;
    }

    pub fn apply_generated_password(&mut self, result: Result<GeneratedPassword, ApiError>) {
        match result {
            Ok(generated) => {
                if let Some(draft) = self.credentials.as_mut() {
                    draft.temp_password = generated.temp_password;
                }
            }
            Err(e) => {
                log::debug!("{GENERATE_PASSWORD_FAILED}: {e}");
                self.error = Some(GENERATE_PASSWORD_FAILED.to_owned());
            }
        }
    }

    pub fn apply_credentials_save(&mut self, outcome: Mutation<Student>) {
        if outcome.was_applied() {
            self.credentials = None;
        }
        let message = apply_mutation(&mut self.students, outcome, UPDATE_CREDENTIALS_FAILED, LOAD_FAILED);
        self.report(message);
    }

    // -------------------------------------------------------------------------
    // Bulk upload / template
    // -------------------------------------------------------------------------

    pub fn open_bulk_upload(&mut self) {
        self.bulk = Some(BulkUploadDraft::default());
    }

    pub fn close_bulk_upload(&mut self) {
        self.bulk = None;
    }

    pub fn prepare_bulk_upload(&mut self) -> Option<Upload> {
        let draft = self.bulk.as_ref()?;
        match draft.validate() {
            Ok(upload) => {
                self.error = None;
                Some(upload)
            }
            Err(e) => {
                self.error = Some(e.to_string());
                None
            }
        }
    }

    /// The modal stays open to show the report.
    pub fn apply_bulk_upload(&mut self, outcome: BulkOutcome) {
        match outcome {
            BulkOutcome::Rejected(e) => {
                log::debug!("{UPLOAD_FAILED}: {e}");
                self.error = Some(UPLOAD_FAILED.to_owned());
            }
            BulkOutcome::Uploaded(report, reload) => {
                if !report.message.is_empty() {
                    self.notice = Some(report.message.clone());
                }
                if let Some(draft) = self.bulk.as_mut() {
                    draft.file = None;
                    draft.report = Some(report);
                }
                let message = apply_load(&mut self.students, reload, LOAD_FAILED);
                self.report(message);
            }
        }
    }

    pub fn apply_template_failure(&mut self, e: &ApiError) {
        log::debug!("{TEMPLATE_FAILED}: {e}");
        self.error = Some(TEMPLATE_FAILED.to_owned());
    }
}

// =============================================================================
// OPERATIONS
// =============================================================================

pub async fn load<T: Transport>(api: &AdminApi<T>) -> StudentsLoad {
    let (students, clusters) = futures::join!(api.list_students(), api.list_clusters());
    StudentsLoad { students, clusters }
}

pub async fn save<T: Transport>(api: &AdminApi<T>, mode: FormMode, payload: &StudentPayload) -> Mutation<Student> {
    match mode {
        FormMode::Create => write_then_reload(api.create_student(payload), api.list_students()).await,
        FormMode::Edit(id) => write_then_reload(api.update_student(id, payload), api.list_students()).await,
    }
}

pub async fn delete<T: Transport>(api: &AdminApi<T>, id: i64) -> Mutation<Student> {
    write_then_reload(api.delete_student(id), api.list_students()).await
}

pub async fn toggle_club_change<T: Transport>(api: &AdminApi<T>, id: i64) -> Mutation<Student> {
    write_then_reload(api.toggle_club_change(id), api.list_students()).await
}

pub async fn send_credentials<T: Transport>(api: &AdminApi<T>, id: i64) -> Mutation<Student> {
    write_then_reload(api.send_credentials(id), api.list_students()).await
}

pub async fn reset_password<T: Transport>(api: &AdminApi<T>, id: i64) -> Result<PasswordReset, ApiError> {
    api.reset_password(id).await
}

pub async fn generate_password<T: Transport>(api: &AdminApi<T>, id: i64) -> Result<GeneratedPassword, ApiError> {
    api.generate_password(id).await
}

pub async fn save_credentials<T: Transport>(api: &AdminApi<T>, draft: &CredentialsDraft) -> Mutation<Student> {
    write_then_reload(api.update_credentials(draft.student, &draft.payload()), api.list_students()).await
}

pub async fn bulk_upload<T: Transport>(api: &AdminApi<T>, file: Upload) -> BulkOutcome {
    match api.bulk_upload_students(file).await {
        Ok(report) => BulkOutcome::Uploaded(report, api.list_students().await),
        Err(e) => BulkOutcome::Rejected(e),
    }
}

pub async fn download_template<T: Transport>(api: &AdminApi<T>) -> Result<Vec<u8>, ApiError> {
    api.download_template().await
}
