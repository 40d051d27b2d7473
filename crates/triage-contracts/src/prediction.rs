//! Prediction record types and the review-decision vocabulary.
//!
//! `PredictionRecord` is the stored outcome of one scoring run together with
//! its review lifecycle. Records are created by the predictor in `Pending`
//! status and mutated only by the review-decision operation on the store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::disease::Severity;

/// Unique identifier for a single prediction record.
///
/// Assigned at creation, never reused. Appears in log lines and review
/// decisions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PredictionId(pub uuid::Uuid);

impl PredictionId {
    /// Create a new, unique prediction ID.
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4())
    }
}

impl Default for PredictionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for PredictionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The review lifecycle state of a prediction record.
///
/// `Pending` is the only legal creation state. A transition away from
/// `Pending` is one-way: there is no un-verify operation.
///
/// `Modified` is reserved vocabulary: it is kept so persisted documents that
/// carry it still deserialize, but no operation in this workspace produces
/// it. Pending product clarification on an amend-after-verify flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PredictionStatus {
    Pending,
    Verified,
    Rejected,
    Modified,
}

impl std::fmt::Display for PredictionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pending => write!(f, "Pending"),
            Self::Verified => write!(f, "Verified"),
            Self::Rejected => write!(f, "Rejected"),
            Self::Modified => write!(f, "Modified"),
        }
    }
}

/// The outcome a clinician may assign when reviewing a pending record.
///
/// Deliberately narrower than `PredictionStatus`: a review can only verify
/// or reject, so the other statuses are unrepresentable as decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReviewDecision {
    Verified,
    Rejected,
}

impl ReviewDecision {
    /// The record status this decision assigns.
    pub fn status(self) -> PredictionStatus {
        match self {
            Self::Verified => PredictionStatus::Verified,
            Self::Rejected => PredictionStatus::Rejected,
        }
    }
}

/// The stored outcome of one symptom-to-disease scoring run.
///
/// `disease_name`, `confidence`, `severity`, `specialty`, `symptoms`, and
/// `timestamp` are fixed at creation; a review decision replaces only
/// `status`, `doctor_note`, and `verified_by`. `clinical_rationale` is an
/// optional post-creation enrichment; absence is always valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionRecord {
    pub id: PredictionId,
    pub patient_id: String,
    pub patient_name: String,
    /// Name of the matched catalog entry.
    pub disease_name: String,
    /// Overlap-derived percentage in 0–100. Not a statistical probability.
    pub confidence: u8,
    /// The exact symptom set the score was computed from.
    pub symptoms: Vec<String>,
    /// Caller-supplied location hint; not derived from any real geolocation.
    pub location: String,
    pub status: PredictionStatus,
    /// Free-text assessment, set only by a review decision.
    pub doctor_note: Option<String>,
    /// Reviewer identity, set only by a review decision.
    pub verified_by: Option<String>,
    pub severity: Severity,
    pub specialty: String,
    /// Creation time (UTC), immutable.
    pub timestamp: DateTime<Utc>,
    /// Narrative rationale attached by the enrichment provider, if any.
    pub clinical_rationale: Option<String>,
}

impl PredictionRecord {
    /// True while the record still awaits a review decision.
    pub fn is_pending(&self) -> bool {
        self.status == PredictionStatus::Pending
    }
}
