//! Per-profile preferences: theme choice and the organ-donor pledge marker.
//!
//! These are the remaining durable entries next to the session and the
//! record collection. Missing file means defaults.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use triage_contracts::error::{TriageError, TriageResult};

/// Display theme preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

/// The persisted preference document.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default)]
    pub theme: Theme,
    /// True once the patient has pledged organ donation.
    #[serde(default)]
    pub organ_donor_pledged: bool,
}

/// File-backed storage for `Preferences`.
#[derive(Debug, Clone)]
pub struct PreferenceStore {
    path: PathBuf,
}

impl PreferenceStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Load preferences; a missing document yields the defaults.
    pub fn load(&self) -> TriageResult<Preferences> {
        if !self.path.exists() {
            return Ok(Preferences::default());
        }

        let contents =
            std::fs::read_to_string(&self.path).map_err(|e| TriageError::SessionUnavailable {
                reason: format!("failed to read '{}': {}", self.path.display(), e),
            })?;

        serde_json::from_str(&contents).map_err(|e| TriageError::SessionUnavailable {
            reason: format!("failed to parse '{}': {}", self.path.display(), e),
        })
    }

    /// Overwrite the preference document.
    pub fn save(&self, prefs: &Preferences) -> TriageResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| TriageError::SessionUnavailable {
                reason: format!("failed to create '{}': {}", parent.display(), e),
            })?;
        }

        let json =
            serde_json::to_string_pretty(prefs).map_err(|e| TriageError::SessionUnavailable {
                reason: format!("failed to serialize preferences: {}", e),
            })?;

        std::fs::write(&self.path, json).map_err(|e| TriageError::SessionUnavailable {
            reason: format!("failed to write '{}': {}", self.path.display(), e),
        })
    }
}
