//! The immutable disease registry.
//!
//! `DiseaseRegistry` wraps the ordered catalog loaded from TOML. Order is a
//! contract: the first entry is the fallback target for low-overlap scans,
//! and ties between equal scores resolve to the earlier entry.

use std::path::Path;

use tracing::debug;

use triage_contracts::{
    disease::Disease,
    error::{TriageError, TriageResult},
};

use crate::config::CatalogConfig;

/// The catalog document compiled into the binary.
const BUILTIN_CATALOG: &str = include_str!("../catalog/diseases.toml");

/// An ordered, immutable disease catalog.
///
/// Construct via `builtin()`, `from_toml_str`, or `from_file`, then share
/// behind an `Arc` with every component that scores or renders diseases.
#[derive(Debug, Clone)]
pub struct DiseaseRegistry {
    diseases: Vec<Disease>,
    symptom_list: Vec<String>,
}

impl DiseaseRegistry {
    /// Load the catalog shipped with the binary.
    ///
    /// The built-in document is validated at load time like any other; a
    /// failure here is a build defect, so the error is still surfaced rather
    /// than panicking.
    pub fn builtin() -> TriageResult<Self> {
        Self::from_toml_str(BUILTIN_CATALOG)
    }

    /// Parse `s` as TOML and build a registry.
    ///
    /// Returns `TriageError::ConfigError` if the TOML is malformed, the
    /// catalog is empty (the fallback needs a first entry), or two entries
    /// share a name (case-insensitive).
    pub fn from_toml_str(s: &str) -> TriageResult<Self> {
        let config: CatalogConfig = toml::from_str(s).map_err(|e| TriageError::ConfigError {
            reason: format!("failed to parse catalog TOML: {}", e),
        })?;

        if config.diseases.is_empty() {
            return Err(TriageError::ConfigError {
                reason: "catalog must contain at least one disease entry".to_string(),
            });
        }

        let mut seen = std::collections::HashSet::new();
        for entry in &config.diseases {
            if !seen.insert(entry.name.to_lowercase()) {
                return Err(TriageError::ConfigError {
                    reason: format!("duplicate disease entry '{}'", entry.name),
                });
            }
        }

        let diseases: Vec<Disease> = config.diseases.into_iter().map(Into::into).collect();

        debug!(entries = diseases.len(), "disease catalog loaded");

        Ok(Self {
            diseases,
            symptom_list: config.symptom_list,
        })
    }

    /// Read the file at `path` and parse it as a TOML catalog document.
    pub fn from_file(path: &Path) -> TriageResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| TriageError::ConfigError {
            reason: format!("failed to read catalog file '{}': {}", path.display(), e),
        })?;
        Self::from_toml_str(&contents)
    }

    /// All entries in declaration order.
    pub fn diseases(&self) -> &[Disease] {
        &self.diseases
    }

    /// The fallback target: the first catalog entry.
    ///
    /// Guaranteed to exist — an empty catalog is rejected at load time.
    pub fn first(&self) -> &Disease {
        &self.diseases[0]
    }

    /// Look up an entry by name, case-insensitive.
    pub fn get(&self, name: &str) -> Option<&Disease> {
        self.diseases
            .iter()
            .find(|d| d.name.eq_ignore_ascii_case(name))
    }

    /// The canonical tag vocabulary offered to symptom pickers.
    pub fn symptom_list(&self) -> &[String] {
        &self.symptom_list
    }
}
