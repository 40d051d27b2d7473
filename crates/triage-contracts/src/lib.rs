//! # triage-contracts
//!
//! Shared types and error definitions for the TRIAGE workspace.
//!
//! All crates in the workspace import from here. No business logic lives in
//! this crate — only data definitions and error types.

pub mod disease;
pub mod error;
pub mod prediction;
pub mod user;

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use disease::Severity;
    use error::TriageError;
    use prediction::{PredictionId, PredictionRecord, PredictionStatus, ReviewDecision};
    use user::{User, UserRole};

    fn make_record() -> PredictionRecord {
        PredictionRecord {
            id: PredictionId::new(),
            patient_id: "p1".to_string(),
            patient_name: "John Doe".to_string(),
            disease_name: "Influenza".to_string(),
            confidence: 80,
            symptoms: vec!["fever".to_string(), "headache".to_string()],
            location: "Hyderabad, Telangana".to_string(),
            status: PredictionStatus::Pending,
            doctor_note: None,
            verified_by: None,
            severity: Severity::Medium,
            specialty: "General Physician".to_string(),
            timestamp: Utc::now(),
            clinical_rationale: None,
        }
    }

    // ── PredictionId ─────────────────────────────────────────────────────────

    #[test]
    fn prediction_id_new_produces_unique_values() {
        let ids: Vec<PredictionId> = (0..100).map(|_| PredictionId::new()).collect();

        // All 100 IDs should be distinct.
        let unique: std::collections::HashSet<String> =
            ids.iter().map(|id| id.to_string()).collect();
        assert_eq!(unique.len(), 100);
    }

    // ── ReviewDecision ───────────────────────────────────────────────────────

    #[test]
    fn review_decision_maps_to_matching_status() {
        assert_eq!(ReviewDecision::Verified.status(), PredictionStatus::Verified);
        assert_eq!(ReviewDecision::Rejected.status(), PredictionStatus::Rejected);
    }

    // ── Serde round-trips ────────────────────────────────────────────────────

    #[test]
    fn prediction_record_round_trips() {
        let original = make_record();
        let json = serde_json::to_string(&original).unwrap();
        let decoded: PredictionRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(original, decoded);
    }

    #[test]
    fn every_status_variant_round_trips() {
        // Modified is never produced by any operation, but persisted documents
        // carrying it must still deserialize.
        for status in [
            PredictionStatus::Pending,
            PredictionStatus::Verified,
            PredictionStatus::Rejected,
            PredictionStatus::Modified,
        ] {
            let json = serde_json::to_string(&status).unwrap();
            let decoded: PredictionStatus = serde_json::from_str(&json).unwrap();
            assert_eq!(status, decoded);
        }
    }

    #[test]
    fn user_round_trips_with_role_fields() {
        let mut user = User::new("d1", "Dr. Sarah Smith", "doctor@triage.health", UserRole::Doctor);
        user.specialty = Some("Neurology".to_string());
        user.license_number = Some("MD-9922-K".to_string());

        let json = serde_json::to_string(&user).unwrap();
        let decoded: User = serde_json::from_str(&json).unwrap();
        assert_eq!(user, decoded);
    }

    // ── Record helpers ───────────────────────────────────────────────────────

    #[test]
    fn is_pending_tracks_status() {
        let mut record = make_record();
        assert!(record.is_pending());

        record.status = PredictionStatus::Verified;
        assert!(!record.is_pending());

        record.status = PredictionStatus::Rejected;
        assert!(!record.is_pending());
    }

    // ── TriageError display messages ─────────────────────────────────────────

    #[test]
    fn error_empty_symptoms_display() {
        let err = TriageError::EmptySymptoms;
        assert!(err.to_string().contains("at least one symptom"));
    }

    #[test]
    fn error_record_not_found_display() {
        let err = TriageError::RecordNotFound {
            id: "abc-123".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("not found"));
        assert!(msg.contains("abc-123"));
    }

    #[test]
    fn error_store_unavailable_display() {
        let err = TriageError::StoreUnavailable {
            reason: "disk full".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("review store unavailable"));
        assert!(msg.contains("disk full"));
    }

    #[test]
    fn error_config_display() {
        let err = TriageError::ConfigError {
            reason: "missing catalog path".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("configuration error"));
        assert!(msg.contains("missing catalog path"));
    }

    #[test]
    fn error_auth_denied_display() {
        let err = TriageError::AuthDenied {
            reason: "bad credentials".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("authentication denied"));
        assert!(msg.contains("bad credentials"));
    }

    #[test]
    fn error_session_unavailable_display() {
        let err = TriageError::SessionUnavailable {
            reason: "file locked".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("session storage unavailable"));
        assert!(msg.contains("file locked"));
    }

    #[test]
    fn error_enrichment_unavailable_display() {
        let err = TriageError::EnrichmentUnavailable {
            reason: "provider timed out".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("enrichment unavailable"));
        assert!(msg.contains("provider timed out"));
    }

    // ── Severity ordering of display names ───────────────────────────────────

    #[test]
    fn severity_display_names() {
        assert_eq!(Severity::Low.to_string(), "Low");
        assert_eq!(Severity::Medium.to_string(), "Medium");
        assert_eq!(Severity::High.to_string(), "High");
        assert_eq!(Severity::Critical.to_string(), "Critical");
    }
}
