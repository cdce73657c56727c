//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its screen state signal and wires it to the state module's
//! operations; rendering details live in `components`.

pub mod clubs;
pub mod clusters;
pub mod dashboard;
pub mod login;
pub mod staff;
pub mod students;
