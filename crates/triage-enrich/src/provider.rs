//! Rationale providers.
//!
//! A `RationaleProvider` turns a disease name and a symptom list into
//! free-form narrative text. The production deployment would back this with
//! a generative-text service; this crate ships an offline template provider
//! built from catalog data, so no external system is ever contacted.

use std::sync::Arc;

use triage_catalog::DiseaseRegistry;
use triage_contracts::error::{TriageError, TriageResult};

/// A source of narrative clinical rationale.
///
/// Implementations may fail or be unavailable at any time; callers in the
/// prediction flow must treat any error as "no rationale available" and
/// carry on.
pub trait RationaleProvider: Send + Sync {
    /// Produce rationale text for a predicted disease and the symptoms that
    /// led to it.
    fn clinical_rationale(&self, disease_name: &str, symptoms: &[String]) -> TriageResult<String>;
}

/// A deterministic, offline provider assembling rationale from catalog data.
///
/// The text covers the presentation, the canonical-list coverage, the
/// routing specialty, and the protocol when one exists.
pub struct TemplateRationaleProvider {
    registry: Arc<DiseaseRegistry>,
}

impl TemplateRationaleProvider {
    pub fn new(registry: Arc<DiseaseRegistry>) -> Self {
        Self { registry }
    }
}

impl RationaleProvider for TemplateRationaleProvider {
    fn clinical_rationale(&self, disease_name: &str, symptoms: &[String]) -> TriageResult<String> {
        let disease = self.registry.get(disease_name).ok_or_else(|| {
            TriageError::EnrichmentUnavailable {
                reason: format!("no reference entry for '{}'", disease_name),
            }
        })?;

        let mut lines = Vec::new();
        lines.push(format!(
            "Preliminary screening matched the reported presentation ({}) against {}.",
            symptoms.join(", "),
            disease.name
        ));
        lines.push(format!(
            "The canonical presentation of {} covers: {}. Overlap with the reported \
             indicators drives the confidence figure; it is a coverage ratio, not a \
             diagnostic probability.",
            disease.name,
            disease.symptoms.join(", ")
        ));
        lines.push(format!(
            "Severity grade {} — recommended routing: {}.",
            disease.severity, disease.specialty
        ));

        if let Some(protocol) = &disease.protocol {
            lines.push(format!(
                "Reference protocol: {}.",
                protocol.steps.join("; ")
            ));
            if !protocol.medications.is_empty() {
                let meds: Vec<String> = protocol
                    .medications
                    .iter()
                    .map(|m| format!("{} {} ({})", m.name, m.dosage, m.frequency))
                    .collect();
                lines.push(format!("Reference medications: {}.", meds.join(", ")));
            }
        }

        lines.push(
            "This summary is generated from static reference data and requires clinician review."
                .to_string(),
        );

        Ok(lines.join("\n"))
    }
}

/// A provider that is never available. Exercises degradation paths.
pub struct UnavailableProvider;

impl RationaleProvider for UnavailableProvider {
    fn clinical_rationale(&self, _disease_name: &str, _symptoms: &[String]) -> TriageResult<String> {
        Err(TriageError::EnrichmentUnavailable {
            reason: "rationale service not reachable".to_string(),
        })
    }
}
