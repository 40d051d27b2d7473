//! Disease catalog entry types.
//!
//! A `Disease` is static reference data: the catalog is loaded once at
//! startup and never mutated at runtime. The predictor scores symptom sets
//! against the `symptoms` list; `severity` and `specialty` are copied into
//! each prediction record at creation time.

use serde::{Deserialize, Serialize};

/// Clinical severity grade attached to a catalog entry.
///
/// Copied verbatim into every prediction record that matches the entry —
/// records do not recompute severity after creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "Low"),
            Self::Medium => write!(f, "Medium"),
            Self::High => write!(f, "High"),
            Self::Critical => write!(f, "Critical"),
        }
    }
}

/// One medication line within a clinical protocol.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Medication {
    pub name: String,
    /// Dose strength, e.g. "500mg".
    pub dosage: String,
    /// Dosing schedule, e.g. "1-0-1" or "SOS".
    pub frequency: String,
}

/// An ordered treatment plan attached to some catalog entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClinicalProtocol {
    /// Treatment steps in recommended order.
    pub steps: Vec<String>,
    pub medications: Vec<Medication>,
}

/// A single disease catalog entry.
///
/// `name` is the unique key within a registry. `symptoms` is the ordered
/// canonical tag list the overlap score is computed against; an entry with
/// an empty list always scores zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Disease {
    pub name: String,
    /// Canonical symptom tags, lowercase by convention.
    pub symptoms: Vec<String>,
    pub severity: Severity,
    /// Specialty to route a confirmed case to, e.g. "Cardiologist".
    pub specialty: String,
    /// Present only for entries with an established treatment plan.
    pub protocol: Option<ClinicalProtocol>,
}
