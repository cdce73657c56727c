//! Browser networking.
//!
//! SYSTEM CONTEXT
//! ==============
//! The console talks only to its own origin. The host forwards `/api/*` to
//! the configured back end, so [`transport::BrowserTransport`] needs no
//! configuration beyond the fixed base path.

pub mod transport;

pub use transport::{BrowserTransport, console_api};
