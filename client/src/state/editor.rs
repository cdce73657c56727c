//! Create/edit modal state shared by every entity screen.

#[cfg(test)]
#[path = "editor_test.rs"]
mod editor_test;

/// Whether a submitted form creates a record or updates an existing one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(i64),
}

/// Client-side validation failure, shown in the screen banner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct FormError(pub &'static str);

/// Build a form pre-filled from an existing record.
pub trait FromRecord<R> {
    fn from_record(record: &R) -> Self;
}

/// An open modal: its mode plus the form being edited.
#[derive(Clone, Debug, PartialEq)]
pub struct Editor<F> {
    pub mode: FormMode,
    pub form: F,
}

impl<F: Default> Editor<F> {
    pub fn create() -> Self {
        Self { mode: FormMode::Create, form: F::default() }
    }
}

impl<F> Editor<F> {
    pub fn edit<R>(id: i64, record: &R) -> Self
    where
        F: FromRecord<R>,
    {
        Self { mode: FormMode::Edit(id), form: F::from_record(record) }
    }

    pub fn is_edit(&self) -> bool {
        matches!(self.mode, FormMode::Edit(_))
    }

    /// Modal title, e.g. "Add Cluster" or "Edit Cluster".
    pub fn title(&self, noun: &str) -> String {
        if self.is_edit() { format!("Edit {noun}") } else { format!("Add {noun}") }
    }
}

/// Trimmed copy of a text field.
pub(crate) fn trimmed(value: &str) -> String {
    value.trim().to_owned()
}

/// Parse a select's value as a record id; empty or malformed yields `None`.
pub(crate) fn parse_id(value: &str) -> Option<i64> {
    value.trim().parse().ok()
}
