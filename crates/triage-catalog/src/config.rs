//! Catalog document schema.
//!
//! A `CatalogConfig` is deserialized from TOML and holds the symptom picker
//! list plus an ordered list of `DiseaseEntry` tables. Entries keep their
//! declaration order — the registry relies on it for fallback selection and
//! tie-breaking.

use serde::{Deserialize, Serialize};

use triage_contracts::disease::{ClinicalProtocol, Disease, Medication, Severity};

/// Severity as written in catalog TOML (kebab-case for readability).
///
/// Example:
/// ```toml
/// severity = "low"
/// severity = "critical"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SeverityName {
    Low,
    Medium,
    High,
    Critical,
}

impl From<SeverityName> for Severity {
    fn from(name: SeverityName) -> Self {
        match name {
            SeverityName::Low => Severity::Low,
            SeverityName::Medium => Severity::Medium,
            SeverityName::High => Severity::High,
            SeverityName::Critical => Severity::Critical,
        }
    }
}

/// One medication line as written in TOML.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MedicationEntry {
    pub name: String,
    pub dosage: String,
    pub frequency: String,
}

/// Optional `[diseases.protocol]` sub-table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProtocolEntry {
    pub steps: Vec<String>,
    #[serde(default)]
    pub medications: Vec<MedicationEntry>,
}

/// A single `[[diseases]]` table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiseaseEntry {
    pub name: String,
    pub symptoms: Vec<String>,
    pub severity: SeverityName,
    pub specialty: String,
    pub protocol: Option<ProtocolEntry>,
}

impl From<DiseaseEntry> for Disease {
    fn from(entry: DiseaseEntry) -> Self {
        Disease {
            name: entry.name,
            symptoms: entry.symptoms,
            severity: entry.severity.into(),
            specialty: entry.specialty,
            protocol: entry.protocol.map(|p| ClinicalProtocol {
                steps: p.steps,
                medications: p
                    .medications
                    .into_iter()
                    .map(|m| Medication {
                        name: m.name,
                        dosage: m.dosage,
                        frequency: m.frequency,
                    })
                    .collect(),
            }),
        }
    }
}

/// The top-level structure deserialized from a TOML catalog file.
///
/// Example:
/// ```toml
/// symptom_list = ["fever", "cough"]
///
/// [[diseases]]
/// name = "Influenza"
/// symptoms = ["fever", "cough"]
/// severity = "medium"
/// specialty = "General Physician"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// The canonical tag vocabulary offered to symptom pickers.
    #[serde(default)]
    pub symptom_list: Vec<String>,

    /// Ordered list of catalog entries. Declaration order is significant.
    pub diseases: Vec<DiseaseEntry>,
}
