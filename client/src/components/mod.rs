//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render console chrome, dialogs, and form controls. They hold
//! no screen state of their own; pages pass values in as signals and take
//! edits back through callbacks.

pub mod banner;
pub mod confirm_dialog;
pub mod fields;
pub mod layout;
pub mod modal;
pub mod stat_tile;
