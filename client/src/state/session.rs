//! Console session gate.
//!
//! SYSTEM CONTEXT
//! ==============
//! The back end exposes no login endpoint, so the gate compares against a
//! fixed placeholder pair and keeps the signed-in name in memory only. A
//! reload signs the user out. Nothing here is an authorization boundary.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

const PLACEHOLDER_USERNAME: &str = "admin";
const PLACEHOLDER_PASSWORD: &str = "admin";

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LoginError {
    /// Either field was blank.
    #[error("Enter both username and password.")]
    MissingFields,
    #[error("Invalid credentials")]
    InvalidCredentials,
}

/// Signed-in user, if any.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub user: Option<String>,
}

impl SessionState {
    /// Check a credential pair and sign in on match.
    ///
    /// # Errors
    ///
    /// Returns [`LoginError`] when a field is blank or the pair does not match.
    pub fn sign_in(&mut self, username: &str, password: &str) -> Result<(), LoginError> {
        if username.trim().is_empty() || password.is_empty() {
            return Err(LoginError::MissingFields);
        }
        if username != PLACEHOLDER_USERNAME || password != PLACEHOLDER_PASSWORD {
            return Err(LoginError::InvalidCredentials);
        }
        self.user = Some(username.to_owned());
        Ok(())
    }

    pub fn sign_out(&mut self) {
        self.user = None;
    }

    pub fn is_signed_in(&self) -> bool {
        self.user.is_some()
    }
}
