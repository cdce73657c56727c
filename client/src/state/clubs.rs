//! Clubs screen: club cards, coordinator selection, and bulk delete.
//!
//! Delete-all issues every club delete concurrently and waits for all of
//! them. Any failure reports the group as failed and skips the reload;
//! deletions that already succeeded stay applied on the back end.

#[cfg(test)]
#[path = "clubs_test.rs"]
mod clubs_test;

use campus_api::types::{Club, ClubPayload, Staff};
use campus_api::{AdminApi, ApiError, Transport};
use futures::future::join_all;

use super::collection::{Collection, Mutation, apply_load, apply_mutation, write_then_reload};
use super::confirm::{BulkConfirm, BulkStage, Confirmation};
use super::editor::{Editor, FormError, FormMode, FromRecord, parse_id, trimmed};

pub const LOAD_FAILED: &str = "Failed to load clubs";
pub const STAFF_LOAD_FAILED: &str = "Failed to load staff";
pub const SAVE_FAILED: &str = "Failed to save club";
pub const DELETE_FAILED: &str = "Failed to delete club";
pub const TOGGLE_FAILED: &str = "Failed to toggle club status";
pub const DELETE_ALL_FAILED: &str = "Failed to delete all clubs";
pub const EMPTY: &str = "No clubs created yet";

pub const DELETE_ALL_FIRST_PROMPT: &str =
    "Are you sure you want to delete ALL clubs? This will remove all club data and memberships permanently.";
pub const DELETE_ALL_SECOND_PROMPT: &str = "This action cannot be undone. Are you absolutely sure?";

const DEFAULT_MAX_MEMBERS: u32 = 50;
const MAX_MEMBERS: std::ops::RangeInclusive<u32> = 1..=100;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ClubsTab {
    #[default]
    Clubs,
    Settings,
}

// =============================================================================
// FORM
// =============================================================================

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClubForm {
    pub name: String,
    pub description: String,
    /// Coordinator staff id, as held by the select.
    pub coordinator: String,
    pub max_members: String,
}

impl Default for ClubForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            coordinator: String::new(),
            max_members: DEFAULT_MAX_MEMBERS.to_string(),
        }
    }
}

impl FromRecord<Club> for ClubForm {
    fn from_record(club: &Club) -> Self {
        let max_members = if club.max_members == 0 { DEFAULT_MAX_MEMBERS } else { club.max_members };
        Self {
            name: club.name.clone(),
            description: club.description.clone().unwrap_or_default(),
            coordinator: club.coordinator.map(|id| id.to_string()).unwrap_or_default(),
            max_members: max_members.to_string(),
        }
    }
}

impl ClubForm {
    /// # Errors
    ///
    /// Returns [`FormError`] when the name or coordinator is missing or the
    /// capacity is outside 1..=100.
    pub fn validate(&self) -> Result<ClubPayload, FormError> {
        const MISSING: FormError = FormError("Club name and coordinator are required");

        let name = trimmed(&self.name);
        if name.is_empty() {
            return Err(MISSING);
        }
        let coordinator = parse_id(&self.coordinator).ok_or(MISSING)?;
        let max_members = self
            .max_members
            .trim()
            .parse::<u32>()
            .ok()
            .filter(|n| MAX_MEMBERS.contains(n))
            .ok_or(FormError("Max members must be between 1 and 100"))?;
        Ok(ClubPayload { name, description: trimmed(&self.description), coordinator, max_members })
    }
}

// =============================================================================
// SCREEN STATE
// =============================================================================

#[derive(Debug)]
pub struct ClubsLoad {
    pub clubs: Result<Vec<Club>, ApiError>,
    pub staff: Result<Vec<Staff>, ApiError>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ClubsState {
    pub tab: ClubsTab,
    pub clubs: Collection<Club>,
    /// Coordinator options.
    pub staff: Collection<Staff>,
    pub editor: Option<Editor<ClubForm>>,
    pub deleting: Confirmation<i64>,
    pub delete_all: BulkConfirm,
    pub error: Option<String>,
}

impl ClubsState {
    pub fn begin_load(&mut self) {
        self.clubs.begin_load();
        self.staff.begin_load();
    }

    pub fn apply_load(&mut self, load: ClubsLoad) {
        let staff_failed = apply_load(&mut self.staff, load.staff, STAFF_LOAD_FAILED);
        let clubs_failed = apply_load(&mut self.clubs, load.clubs, LOAD_FAILED);
        self.error = clubs_failed.or(staff_failed);
    }

    pub fn empty_message(&self) -> Option<&'static str> {
        self.clubs.is_settled_empty().then_some(EMPTY)
    }

    pub fn coordinator_label(&self, club: &Club) -> String {
        club.coordinator
            .and_then(|id| self.staff.items.iter().find(|s| s.id == id))
            .map(|s| s.name.clone())
            .or_else(|| club.coordinator_name.clone())
            .unwrap_or_else(|| "Unassigned".to_owned())
    }

    pub fn open_create(&mut self) {
        self.editor = Some(Editor::create());
    }

    pub fn open_edit(&mut self, club: &Club) {
        self.editor = Some(Editor::edit(club.id, club));
    }

    pub fn close_editor(&mut self) {
        self.editor = None;
    }

    pub fn prepare_save(&mut self) -> Option<(FormMode, ClubPayload)> {
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

    pub fn apply_save(&mut self, outcome: Mutation<Club>) {
        if outcome.was_applied() {
            self.editor = None;
        }
        let message = apply_mutation(&mut self.clubs, outcome, SAVE_FAILED, LOAD_FAILED);
        self.report(message);
    }

    pub fn apply_delete(&mut self, outcome: Mutation<Club>) {
        let message = apply_mutation(&mut self.clubs, outcome, DELETE_FAILED, LOAD_FAILED);
        self.report(message);
    }

    pub fn apply_toggle(&mut self, outcome: Mutation<Club>) {
        let message = apply_mutation(&mut self.clubs, outcome, TOGGLE_FAILED, LOAD_FAILED);
        self.report(message);
    }

    /// Prompt text for the current delete-all stage, if a prompt is open.
    pub fn delete_all_prompt(&self) -> Option<&'static str> {
        match self.delete_all.stage() {
            BulkStage::Idle => None,
            BulkStage::First => Some(DELETE_ALL_FIRST_PROMPT),
            BulkStage::Second => Some(DELETE_ALL_SECOND_PROMPT),
        }
    }

    /// Ids to delete once both prompts were accepted.
    pub fn all_club_ids(&self) -> Vec<i64> {
        self.clubs.items.iter().map(|c| c.id).collect()
    }

    pub fn apply_delete_all(&mut self, outcome: Mutation<Club>) {
        let message = apply_mutation(&mut self.clubs, outcome, DELETE_ALL_FAILED, LOAD_FAILED);
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

/// "12 / 40" style occupancy text.
pub fn occupancy(club: &Club) -> String {
    format!("{} / {}", club.member_count, club.max_members)
}

// =============================================================================
// OPERATIONS
// =============================================================================

pub async fn load<T: Transport>(api: &AdminApi<T>) -> ClubsLoad {
    let (clubs, staff) = futures::join!(api.list_clubs(), api.list_staff());
    ClubsLoad { clubs, staff }
}

pub async fn save<T: Transport>(api: &AdminApi<T>, mode: FormMode, payload: &ClubPayload) -> Mutation<Club> {
    match mode {
        FormMode::Create => write_then_reload(api.create_club(payload), api.list_clubs()).await,
        FormMode::Edit(id) => write_then_reload(api.update_club(id, payload), api.list_clubs()).await,
    }
}

pub async fn delete<T: Transport>(api: &AdminApi<T>, id: i64) -> Mutation<Club> {
    write_then_reload(api.delete_club(id), api.list_clubs()).await
}

pub async fn toggle<T: Transport>(api: &AdminApi<T>, id: i64) -> Mutation<Club> {
    write_then_reload(api.toggle_club(id), api.list_clubs()).await
}

/// Delete every club concurrently; reload only if all deletes succeeded.
pub async fn delete_all<T: Transport>(api: &AdminApi<T>, ids: &[i64]) -> Mutation<Club> {
    let results = join_all(ids.iter().map(|&id| api.delete_club(id))).await;
    if let Some(e) = results.into_iter().find_map(Result::err) {
        return Mutation::Rejected(e);
    }
    Mutation::Applied(api.list_clubs().await)
}
