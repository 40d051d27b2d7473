//! The persisted session: the currently authenticated user.
//!
//! One JSON document per profile holds the active user record. A missing
//! document means "not logged in". Passwords never reach this file — the
//! directory strips them before a user record is handed out.

use std::path::PathBuf;

use tracing::debug;

use triage_contracts::{
    error::{TriageError, TriageResult},
    user::User,
};

/// File-backed storage for the active user record.
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The active user, or `None` when no session exists.
    pub fn load(&self) -> TriageResult<Option<User>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let contents =
            std::fs::read_to_string(&self.path).map_err(|e| TriageError::SessionUnavailable {
                reason: format!("failed to read '{}': {}", self.path.display(), e),
            })?;

        let user = serde_json::from_str(&contents).map_err(|e| TriageError::SessionUnavailable {
            reason: format!("failed to parse '{}': {}", self.path.display(), e),
        })?;
        Ok(Some(user))
    }

    /// Overwrite the session with `user`.
    pub fn save(&self, user: &User) -> TriageResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| TriageError::SessionUnavailable {
                reason: format!("failed to create '{}': {}", parent.display(), e),
            })?;
        }

        let json = serde_json::to_string_pretty(user).map_err(|e| {
            TriageError::SessionUnavailable {
                reason: format!("failed to serialize user record: {}", e),
            }
        })?;

        std::fs::write(&self.path, json).map_err(|e| TriageError::SessionUnavailable {
            reason: format!("failed to write '{}': {}", self.path.display(), e),
        })?;

        debug!(user_id = %user.id, "session saved");
        Ok(())
    }

    /// Remove the session document, ending the login.
    pub fn clear(&self) -> TriageResult<()> {
        if self.path.exists() {
            std::fs::remove_file(&self.path).map_err(|e| TriageError::SessionUnavailable {
                reason: format!("failed to remove '{}': {}", self.path.display(), e),
            })?;
        }
        Ok(())
    }
}
