//! Staff screen: staff roster plus the departments tab.
//!
//! DESIGN
//! ======
//! Staff and departments load together; clusters load alongside them only to
//! populate the mentor-cluster select, so a cluster failure never raises the
//! banner. Staff writes reload staff, department writes reload departments.
//! Staff create/update is multipart so an optional photo can be attached.

#[cfg(test)]
#[path = "staff_test.rs"]
mod staff_test;

use campus_api::types::{Cluster, Department, DepartmentPayload, Staff, StaffPayload};
use campus_api::{AdminApi, ApiError, Transport, Upload};

use super::collection::{Collection, Mutation, apply_mutation, write_then_reload};
use super::confirm::Confirmation;
use super::editor::{Editor, FormError, FormMode, FromRecord, parse_id, trimmed};

pub const LOAD_FAILED: &str = "Failed to load data. Please try again.";
pub const SAVE_FAILED: &str = "Failed to save staff member";
pub const DELETE_FAILED: &str = "Failed to delete staff member";
pub const TOGGLE_FAILED: &str = "Failed to toggle staff status";
pub const DEPARTMENT_ADD_FAILED: &str = "Failed to add department";
pub const DEPARTMENT_UPDATE_FAILED: &str = "Failed to update department";
pub const DEPARTMENT_DELETE_FAILED: &str = "Failed to delete department. It may have staff members assigned to it.";
pub const EMPTY_STAFF: &str = "No staff members found";
pub const EMPTY_DEPARTMENTS: &str = "No departments found";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StaffTab {
    #[default]
    Staff,
    Departments,
}

// =============================================================================
// FORMS
// =============================================================================

/// Staff modal fields. Selects hold record ids as strings.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StaffForm {
    pub name: String,
    pub staff_id: String,
    pub email: String,
    pub phone: String,
    pub subject_expertise: String,
    pub qualification: String,
    pub department: String,
    pub departmental_access_enabled: bool,
    pub mentor_access_enabled: bool,
    pub mentor_cluster: String,
    /// Newly chosen photo; editing never re-sends the stored one.
    pub photo: Option<Upload>,
}

impl FromRecord<Staff> for StaffForm {
    fn from_record(staff: &Staff) -> Self {
        Self {
            name: staff.name.clone(),
            staff_id: staff.staff_id.clone(),
            email: staff.email.clone(),
            phone: staff.phone.clone().unwrap_or_default(),
            subject_expertise: staff.subject_expertise.clone(),
            qualification: staff.qualification.clone(),
            department: staff.department.map(|id| id.to_string()).unwrap_or_default(),
            departmental_access_enabled: staff.departmental_access_enabled,
            mentor_access_enabled: staff.mentor_access_enabled,
            mentor_cluster: staff.mentor_cluster.map(|id| id.to_string()).unwrap_or_default(),
            photo: None,
        }
    }
}

impl StaffForm {
    /// # Errors
    ///
    /// Returns [`FormError`] when a required field is blank or no department is chosen.
    pub fn validate(&self) -> Result<StaffPayload, FormError> {
        const MISSING: FormError = FormError("Please fill in all required fields");

        let required = [&self.name, &self.staff_id, &self.email, &self.subject_expertise, &self.qualification];
        if required.iter().any(|field| field.trim().is_empty()) {
            return Err(MISSING);
        }
        let department = parse_id(&self.department).ok_or(MISSING)?;
        let mentor_cluster = if self.mentor_access_enabled { parse_id(&self.mentor_cluster) } else { None };

        Ok(StaffPayload {
            name: trimmed(&self.name),
            staff_id: trimmed(&self.staff_id),
            email: trimmed(&self.email),
            phone: trimmed(&self.phone),
            subject_expertise: trimmed(&self.subject_expertise),
            qualification: trimmed(&self.qualification),
            department,
            departmental_access_enabled: self.departmental_access_enabled,
            mentor_access_enabled: self.mentor_access_enabled,
            mentor_cluster,
            photo: self.photo.clone(),
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DepartmentForm {
    pub name: String,
    pub code: String,
}

impl FromRecord<Department> for DepartmentForm {
    fn from_record(department: &Department) -> Self {
        Self { name: department.name.clone(), code: department.code.clone() }
    }
}

impl DepartmentForm {
    /// The code is upper-cased.
    ///
    /// # Errors
    ///
    /// Returns [`FormError`] when the name or code is blank.
    pub fn validate(&self) -> Result<DepartmentPayload, FormError> {
        let name = trimmed(&self.name);
        let code = self.code.trim().to_uppercase();
        if name.is_empty() || code.is_empty() {
            return Err(FormError("Department name and code are required"));
        }
        Ok(DepartmentPayload { name, code })
    }
}

// =============================================================================
// SCREEN STATE
// =============================================================================

/// Results of the concurrent initial load.
#[derive(Debug)]
pub struct StaffLoad {
    pub staff: Result<Vec<Staff>, ApiError>,
    pub departments: Result<Vec<Department>, ApiError>,
    pub clusters: Result<Vec<Cluster>, ApiError>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct StaffState {
    pub tab: StaffTab,
    pub staff: Collection<Staff>,
    pub departments: Collection<Department>,
    /// Mentor-cluster options.
    pub clusters: Vec<Cluster>,
    pub editor: Option<Editor<StaffForm>>,
    pub department_editor: Option<Editor<DepartmentForm>>,
    pub deleting_staff: Confirmation<i64>,
    /// Department id and name, for the prompt text.
    pub deleting_department: Confirmation<(i64, String)>,
    pub error: Option<String>,
}

impl StaffState {
    pub fn begin_load(&mut self) {
        self.error = None;
        self.staff.begin_load();
        self.departments.begin_load();
    }

    pub fn apply_load(&mut self, load: StaffLoad) {
        let staff_failed = self.staff.finish(load.staff);
        let departments_failed = self.departments.finish(load.departments);
        if let Some(e) = staff_failed.as_ref().or(departments_failed.as_ref()) {
            log::debug!("{LOAD_FAILED}: {e}");
            self.error = Some(LOAD_FAILED.to_owned());
        }
        self.clusters = load.clusters.unwrap_or_else(|e| {
            log::debug!("mentor cluster options unavailable: {e}");
            Vec::new()
        });
    }

    pub fn empty_message(&self) -> Option<&'static str> {
        self.staff.is_settled_empty().then_some(EMPTY_STAFF)
    }

    pub fn departments_empty_message(&self) -> Option<&'static str> {
        self.departments.is_settled_empty().then_some(EMPTY_DEPARTMENTS)
    }

    pub fn department_label(&self, staff: &Staff) -> String {
        staff
            .department
            .and_then(|id| self.departments.items.iter().find(|d| d.id == id))
            .map(|d| d.name.clone())
            .or_else(|| staff.department_name.clone())
            .unwrap_or_else(|| "—".to_owned())
    }

    // -------------------------------------------------------------------------
    // Staff
    // -------------------------------------------------------------------------

    pub fn open_create(&mut self) {
        self.editor = Some(Editor::create());
    }

    pub fn open_edit(&mut self, staff: &Staff) {
        self.editor = Some(Editor::edit(staff.id, staff));
    }

    pub fn close_editor(&mut self) {
        self.editor = None;
    }

    pub fn prepare_save(&mut self) -> Option<(FormMode, StaffPayload)> {
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

    pub fn apply_save(&mut self, outcome: Mutation<Staff>) {
        if outcome.was_applied() {
            self.editor = None;
        }
        let message = apply_mutation(&mut self.staff, outcome, SAVE_FAILED, LOAD_FAILED);
        self.report(message);
    }

    pub fn apply_delete(&mut self, outcome: Mutation<Staff>) {
        let message = apply_mutation(&mut self.staff, outcome, DELETE_FAILED, LOAD_FAILED);
        self.report(message);
    }

    pub fn apply_toggle(&mut self, outcome: Mutation<Staff>) {
        let message = apply_mutation(&mut self.staff, outcome, TOGGLE_FAILED, LOAD_FAILED);
        self.report(message);
    }

    // -------------------------------------------------------------------------
    // Departments
    // -------------------------------------------------------------------------

    pub fn open_department_create(&mut self) {
        self.department_editor = Some(Editor::create());
    }

    pub fn open_department_edit(&mut self, department: &Department) {
        self.department_editor = Some(Editor::edit(department.id, department));
    }

    pub fn close_department_editor(&mut self) {
        self.department_editor = None;
    }

    pub fn prepare_department_save(&mut self) -> Option<(FormMode, DepartmentPayload)> {
        let editor = self.department_editor.as_ref()?;
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

    pub fn apply_department_save(&mut self, mode: FormMode, outcome: Mutation<Department>) {
        if outcome.was_applied() {
            self.department_editor = None;
        }
        let write_failed = match mode {
            FormMode::Create => DEPARTMENT_ADD_FAILED,
            FormMode::Edit(_) => DEPARTMENT_UPDATE_FAILED,
        };
        let message = apply_mutation(&mut self.departments, outcome, write_failed, LOAD_FAILED);
        self.report(message);
    }

    pub fn apply_department_delete(&mut self, outcome: Mutation<Department>) {
        let message = apply_mutation(&mut self.departments, outcome, DEPARTMENT_DELETE_FAILED, LOAD_FAILED);
        self.report(message);
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    fn report(&mut self, message: Option<String>) {
        if message.is_some() {
            self.error = message;
        }
    }
}

// =============================================================================
// OPERATIONS
// =============================================================================

pub async fn load<T: Transport>(api: &AdminApi<T>) -> StaffLoad {
    let (staff, departments, clusters) = futures::join!(api.list_staff(), api.list_departments(), api.list_clusters());
    StaffLoad { staff, departments, clusters }
}

pub async fn save<T: Transport>(api: &AdminApi<T>, mode: FormMode, payload: &StaffPayload) -> Mutation<Staff> {
    match mode {
        FormMode::Create => write_then_reload(api.create_staff(payload), api.list_staff()).await,
        FormMode::Edit(id) => write_then_reload(api.update_staff(id, payload), api.list_staff()).await,
    }
}

pub async fn delete<T: Transport>(api: &AdminApi<T>, id: i64) -> Mutation<Staff> {
    write_then_reload(api.delete_staff(id), api.list_staff()).await
}

pub async fn toggle<T: Transport>(api: &AdminApi<T>, id: i64) -> Mutation<Staff> {
    write_then_reload(api.toggle_staff(id), api.list_staff()).await
}

pub async fn save_department<T: Transport>(
    api: &AdminApi<T>,
    mode: FormMode,
    payload: &DepartmentPayload,
) -> Mutation<Department> {
    match mode {
        FormMode::Create => write_then_reload(api.create_department(payload), api.list_departments()).await,
        FormMode::Edit(id) => write_then_reload(api.update_department(id, payload), api.list_departments()).await,
    }
}

pub async fn delete_department<T: Transport>(api: &AdminApi<T>, id: i64) -> Mutation<Department> {
    write_then_reload(api.delete_department(id), api.list_departments()).await
}
