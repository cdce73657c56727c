//! Load-state tracking for one fetched entity list.
//!
//! DESIGN
//! ======
//! Screens never patch lists locally. Every write is followed by a full
//! reload, and the reload result replaces `items` wholesale. A failed load
//! always empties the list and lands in `Failed`, so no screen can stay in
//! `Loading` after its request settles.

#[cfg(test)]
#[path = "collection_test.rs"]
mod collection_test;

use std::future::Future;

use campus_api::ApiError;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Ready,
    Failed,
}

/// One entity list plus its load state.
#[derive(Clone, Debug, PartialEq)]
pub struct Collection<T> {
    pub items: Vec<T>,
    pub load: LoadState,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self { items: Vec::new(), load: LoadState::Idle }
    }
}

impl<T> Collection<T> {
    pub fn begin_load(&mut self) {
        self.load = LoadState::Loading;
    }

    /// Settle a load. On error the list is cleared and the error handed back.
    pub fn finish<E>(&mut self, result: Result<Vec<T>, E>) -> Option<E> {
        match result {
            Ok(items) => {
                self.items = items;
                self.load = LoadState::Ready;
                None
            }
            Err(e) => {
                self.items.clear();
                self.load = LoadState::Failed;
                Some(e)
            }
        }
    }

    pub fn is_loading(&self) -> bool {
        self.load == LoadState::Loading
    }

    /// Loaded successfully and nothing came back.
    pub fn is_empty_ready(&self) -> bool {
        self.load == LoadState::Ready && self.items.is_empty()
    }

    /// Load finished, successfully or not, with nothing to show.
    pub fn is_settled_empty(&self) -> bool {
        matches!(self.load, LoadState::Ready | LoadState::Failed) && self.items.is_empty()
    }

    pub fn has_failed(&self) -> bool {
        self.load == LoadState::Failed
    }
}

// =============================================================================
// MUTATIONS
// =============================================================================

/// Outcome of a write followed by a list reload.
#[derive(Clone, Debug, PartialEq)]
pub enum Mutation<T> {
    /// The write failed; no reload was issued.
    Rejected(ApiError),
    /// The write succeeded and the list was reloaded once.
    Applied(Result<Vec<T>, ApiError>),
}

impl<T> Mutation<T> {
    pub fn was_applied(&self) -> bool {
        matches!(self, Self::Applied(_))
    }
}

/// Await `write`, then `reload` only if the write succeeded.
///
/// `reload` is an unpolled future, so a rejected write sends nothing else.
pub async fn write_then_reload<T, V>(
    write: impl Future<Output = Result<V, ApiError>>,
    reload: impl Future<Output = Result<Vec<T>, ApiError>>,
) -> Mutation<T> {
    if let Err(e) = write.await {
        return Mutation::Rejected(e);
    }
    Mutation::Applied(reload.await)
}

/// Fold a mutation into `list`, returning the banner message if anything failed.
///
/// A rejected write leaves the list untouched; a failed reload empties it.
pub fn apply_mutation<T>(
    list: &mut Collection<T>,
    outcome: Mutation<T>,
    write_failed: &str,
    load_failed: &str,
) -> Option<String> {
    match outcome {
        Mutation::Rejected(e) => {
            log::debug!("{write_failed}: {e}");
            Some(write_failed.to_owned())
        }
        Mutation::Applied(result) => list.finish(result).map(|e| {
            log::debug!("{load_failed}: {e}");
            load_failed.to_owned()
        }),
    }
}

/// Fold a plain load result into `list`, returning the banner message on failure.
pub fn apply_load<T>(list: &mut Collection<T>, result: Result<Vec<T>, ApiError>, load_failed: &str) -> Option<String> {
    list.finish(result).map(|e| {
        log::debug!("{load_failed}: {e}");
        load_failed.to_owned()
    })
}
