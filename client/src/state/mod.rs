//! Per-screen state machines and the shared list/form machinery they use.
//!
//! DESIGN
//! ======
//! Each screen module exposes two halves: `async` operations over
//! `&AdminApi<T>` that talk to the back end, and pure `apply_*` methods that
//! fold their results into the screen state. Pages hold the state in a
//! page-local `RwSignal` and only wire the two halves together, so every
//! behavior here is testable without a browser.

pub mod clubs;
pub mod clusters;
pub mod collection;
pub mod confirm;
pub mod dashboard;
pub mod editor;
pub mod session;
pub mod shell;
pub mod staff;
pub mod students;
