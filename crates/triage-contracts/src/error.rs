//! Runtime error types for the TRIAGE prediction and review pipeline.
//!
//! All fallible operations in the TRIAGE crates return `TriageResult<T>`.
//! Error variants carry enough context to produce actionable log entries.

use thiserror::Error;

/// The unified error type for the TRIAGE workspace.
#[derive(Debug, Error)]
pub enum TriageError {
    /// A scan was requested with no symptoms selected.
    ///
    /// The interaction boundary is expected to reject this before the
    /// predictor runs; reaching the predictor with an empty set produces
    /// this error and no record is created.
    #[error("prediction requires at least one symptom")]
    EmptySymptoms,

    /// A review decision referenced a prediction id absent from the store.
    ///
    /// The store is left unchanged when this is returned.
    #[error("prediction record '{id}' not found")]
    RecordNotFound { id: String },

    /// The storage backend could not load or persist the record collection.
    #[error("review store unavailable: {reason}")]
    StoreUnavailable { reason: String },

    /// A catalog document is missing, unreadable, or malformed.
    #[error("configuration error: {reason}")]
    ConfigError { reason: String },

    /// Login was refused: unknown role, bad credentials, or no active session.
    #[error("authentication denied: {reason}")]
    AuthDenied { reason: String },

    /// The session or preference file could not be read or written.
    #[error("session storage unavailable: {reason}")]
    SessionUnavailable { reason: String },

    /// The rationale provider failed or is unreachable.
    ///
    /// Callers in the review flow swallow this into an absent
    /// `clinical_rationale` field; it never fails the surrounding action.
    #[error("enrichment unavailable: {reason}")]
    EnrichmentUnavailable { reason: String },
}

/// Convenience alias used throughout the TRIAGE crates.
pub type TriageResult<T> = Result<T, TriageError>;
