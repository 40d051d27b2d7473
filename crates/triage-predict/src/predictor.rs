//! The prediction engine: symptom set in, Pending record out.
//!
//! The predictor wires the scoring pass, the match policy, and the review
//! sink together:
//!
//!   symptoms → rank against catalog → select match → build record → append
//!
//! Exactly one record is appended to the sink per successful call, before
//! the record is returned. The computation itself is deterministic over the
//! catalog and the input set; only the id and timestamp are fresh per call.

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info, warn};

use triage_catalog::DiseaseRegistry;
use triage_contracts::{
    error::{TriageError, TriageResult},
    prediction::{PredictionId, PredictionRecord, PredictionStatus},
};

use crate::{policy::MatchPolicy, score, sink::ReviewSink};

/// The symptom-to-disease prediction engine.
///
/// Construct once at startup with the shared catalog and the review store,
/// then call [`predict`](Predictor::predict) per scan request. The engine
/// holds no mutable state of its own.
pub struct Predictor {
    registry: Arc<DiseaseRegistry>,
    sink: Arc<dyn ReviewSink>,
    policy: MatchPolicy,
}

impl Predictor {
    /// Create a predictor with the default match policy.
    pub fn new(registry: Arc<DiseaseRegistry>, sink: Arc<dyn ReviewSink>) -> Self {
        Self::with_policy(registry, sink, MatchPolicy::default())
    }

    /// Create a predictor with an explicit match policy.
    pub fn with_policy(
        registry: Arc<DiseaseRegistry>,
        sink: Arc<dyn ReviewSink>,
        policy: MatchPolicy,
    ) -> Self {
        Self {
            registry,
            sink,
            policy,
        }
    }

    /// Run one scan: score `symptoms` against the catalog, select the match,
    /// file a new Pending record with the sink, and return it.
    ///
    /// # Errors
    ///
    /// - `TriageError::EmptySymptoms` when `symptoms` is empty — the
    ///   interaction boundary should have rejected the request already; no
    ///   record is created.
    /// - Any error from the sink's `append`; the record is not returned in
    ///   that case, so callers never hold a record the store does not.
    pub fn predict(
        &self,
        patient_id: &str,
        patient_name: &str,
        symptoms: &[String],
        location: &str,
    ) -> TriageResult<PredictionRecord> {
        if symptoms.is_empty() {
            warn!(patient_id = %patient_id, "scan requested with no symptoms");
            return Err(TriageError::EmptySymptoms);
        }

        debug!(
            patient_id = %patient_id,
            symptom_count = symptoms.len(),
            "scoring symptom set against catalog"
        );

        let ranked = score::rank(&self.registry, symptoms);
        let selected = self.policy.select(&ranked, &self.registry);

        let record = PredictionRecord {
            id: PredictionId::new(),
            patient_id: patient_id.to_string(),
            patient_name: patient_name.to_string(),
            disease_name: selected.disease.name.clone(),
            confidence: selected.confidence,
            symptoms: symptoms.to_vec(),
            location: location.to_string(),
            status: PredictionStatus::Pending,
            doctor_note: None,
            verified_by: None,
            severity: selected.disease.severity,
            specialty: selected.disease.specialty.clone(),
            timestamp: Utc::now(),
            clinical_rationale: None,
        };

        self.sink.append(&record)?;

        info!(
            prediction_id = %record.id,
            disease = %record.disease_name,
            confidence = record.confidence,
            fallback = selected.fallback,
            "prediction recorded"
        );

        Ok(record)
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────
