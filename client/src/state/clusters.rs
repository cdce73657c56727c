//! Clusters screen: list, create/edit modal, delete confirmation, status toggle.

#[cfg(test)]
#[path = "clusters_test.rs"]
mod clusters_test;

use campus_api::types::{Cluster, ClusterPayload};
use campus_api::{AdminApi, ApiError, Transport};

use super::collection::{Collection, Mutation, apply_load, apply_mutation, write_then_reload};
use super::confirm::Confirmation;
use super::editor::{Editor, FormError, FormMode, FromRecord, trimmed};

pub const LOAD_FAILED: &str = "Failed to load clusters";
pub const SAVE_FAILED: &str = "Failed to save cluster";
pub const DELETE_FAILED: &str = "Failed to delete cluster";
pub const TOGGLE_FAILED: &str = "Failed to toggle cluster status";
pub const EMPTY: &str = "No clusters found";

// =============================================================================
// FORM
// =============================================================================

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClusterForm {
    pub name: String,
    pub code: String,
    pub description: String,
    pub is_active: bool,
}

impl Default for ClusterForm {
    fn default() -> Self {
        Self { name: String::new(), code: String::new(), description: String::new(), is_active: true }
    }
}

impl FromRecord<Cluster> for ClusterForm {
    fn from_record(cluster: &Cluster) -> Self {
        Self {
            name: cluster.name.clone(),
            code: cluster.code.clone(),
            description: cluster.description.clone().unwrap_or_default(),
            is_active: cluster.is_active,
        }
    }
}

impl ClusterForm {
    /// # Errors
    ///
    /// Returns [`FormError`] when the name or code is blank.
    pub fn validate(&self) -> Result<ClusterPayload, FormError> {
        let cluster_name = trimmed(&self.name);
        let cluster_code = trimmed(&self.code);
        if cluster_name.is_empty() || cluster_code.is_empty() {
            return Err(FormError("Cluster name and code are required"));
        }
        Ok(ClusterPayload { cluster_name, cluster_code, description: trimmed(&self.description), is_active: self.is_active })
    }
}

// =============================================================================
// SCREEN STATE
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ClustersState {
    pub clusters: Collection<Cluster>,
    pub editor: Option<Editor<ClusterForm>>,
    pub deleting: Confirmation<i64>,
    pub error: Option<String>,
}

impl ClustersState {
    pub fn begin_load(&mut self) {
        self.clusters.begin_load();
    }

    pub fn apply_load(&mut self, result: Result<Vec<Cluster>, ApiError>) {
        let message = apply_load(&mut self.clusters, result, LOAD_FAILED);
        self.report(message);
    }

    /// Message shown in place of the table once the list settles empty.
    pub fn empty_message(&self) -> Option<&'static str> {
        self.clusters.is_settled_empty().then_some(EMPTY)
    }

    pub fn open_create(&mut self) {
        self.editor = Some(Editor::create());
    }

    pub fn open_edit(&mut self, cluster: &Cluster) {
        self.editor = Some(Editor::edit(cluster.id, cluster));
    }

    pub fn close_editor(&mut self) {
        self.editor = None;
    }

    /// Validate the open form. A validation failure goes to the banner.
    pub fn prepare_save(&mut self) -> Option<(FormMode, ClusterPayload)> {
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

    /// A rejected save keeps the modal open.
    pub fn apply_save(&mut self, outcome: Mutation<Cluster>) {
        if outcome.was_applied() {
            self.editor = None;
        }
        let message = apply_mutation(&mut self.clusters, outcome, SAVE_FAILED, LOAD_FAILED);
        self.report(message);
    }

    pub fn apply_delete(&mut self, outcome: Mutation<Cluster>) {
        let message = apply_mutation(&mut self.clusters, outcome, DELETE_FAILED, LOAD_FAILED);
        self.report(message);
    }

    pub fn apply_toggle(&mut self, outcome: Mutation<Cluster>) {
        let message = apply_mutation(&mut self.clusters, outcome, TOGGLE_FAILED, LOAD_FAILED);
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

pub async fn load<T: Transport>(api: &AdminApi<T>) -> Result<Vec<Cluster>, ApiError> {
    api.list_clusters().await
}

pub async fn save<T: Transport>(api: &AdminApi<T>, mode: FormMode, payload: &ClusterPayload) -> Mutation<Cluster> {
    match mode {
        FormMode::Create => write_then_reload(api.create_cluster(payload), api.list_clusters()).await,
        FormMode::Edit(id) => write_then_reload(api.update_cluster(id, payload), api.list_clusters()).await,
    }
}

pub async fn delete<T: Transport>(api: &AdminApi<T>, id: i64) -> Mutation<Cluster> {
    write_then_reload(api.delete_cluster(id), api.list_clusters()).await
}

pub async fn toggle<T: Transport>(api: &AdminApi<T>, id: i64) -> Mutation<Cluster> {
    write_then_reload(api.toggle_cluster(id), api.list_clusters()).await
}
