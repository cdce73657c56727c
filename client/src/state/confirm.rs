//! Confirmation gates for destructive actions.
//!
//! A delete is only issued for a key handed back by [`Confirmation::confirm`];
//! cancelling drops the key without any request.

#[cfg(test)]
#[path = "confirm_test.rs"]
mod confirm_test;

/// A single pending confirmation for the record identified by `K`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Confirmation<K> {
    pending: Option<K>,
}

impl<K> Default for Confirmation<K> {
    fn default() -> Self {
        Self { pending: None }
    }
}

impl<K> Confirmation<K> {
    pub fn request(&mut self, key: K) {
        self.pending = Some(key);
    }

    pub fn pending(&self) -> Option<&K> {
        self.pending.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.pending.is_some()
    }

    /// Take the confirmed key. Returns `None` if nothing was pending.
    pub fn confirm(&mut self) -> Option<K> {
        self.pending.take()
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }
}

/// Progress through a two-prompt confirmation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BulkStage {
    #[default]
    Idle,
    First,
    Second,
}

/// Two-step gate guarding an irreversible bulk action.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BulkConfirm {
    stage: BulkStage,
}

impl BulkConfirm {
    pub fn stage(self) -> BulkStage {
        self.stage
    }

    pub fn begin(&mut self) {
        self.stage = BulkStage::First;
    }

    /// Accept the current prompt. Returns `true` once both prompts were accepted.
    pub fn accept(&mut self) -> bool {
        match self.stage {
            BulkStage::Idle => false,
            BulkStage::First => {
                self.stage = BulkStage::Second;
                false
            }
            BulkStage::Second => {
                self.stage = BulkStage::Idle;
                true
            }
        }
    }

    pub fn cancel(&mut self) {
        self.stage = BulkStage::Idle;
    }
}
