//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (file inputs, blob
//! downloads, task spawning) from page and component logic.

pub mod auth;
pub mod clock;
pub mod files;
pub mod task;
