//! # triage-store
//!
//! The prediction record store for TRIAGE.
//!
//! ## Overview
//!
//! [`ReviewStore`] owns the ordered, most-recent-first collection of
//! prediction records. It provides the only sanctioned mutation paths —
//! `append` for new Pending records and `apply_decision` for clinician
//! reviews — and persists the whole collection through a
//! [`backend::StorageBackend`] on every mutation. Consumers that need to
//! react to changes subscribe via `subscribe()` instead of polling.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use triage_store::{ReviewStore, backend::JsonFileBackend};
//!
//! let store = ReviewStore::open(Box::new(JsonFileBackend::new("predictions.json")))?;
//! let rx = store.subscribe();
//! ```

pub mod backend;
pub mod events;
pub mod store;

pub use backend::{JsonFileBackend, MemoryBackend, StorageBackend};
pub use events::StoreEvent;
pub use store::ReviewStore;

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use triage_contracts::{
        disease::Severity,
        error::{TriageError, TriageResult},
        prediction::{PredictionId, PredictionRecord, PredictionStatus, ReviewDecision},
    };

    use super::{
        backend::{JsonFileBackend, MemoryBackend, StorageBackend},
        events::StoreEvent,
        store::ReviewStore,
    };

    // ── Helpers ───────────────────────────────────────────────────────────────

    /// Build a Pending record with a distinguishable patient name.
    fn make_record(patient_name: &str) -> PredictionRecord {
        PredictionRecord {
            id: PredictionId::new(),
            patient_id: "p1".to_string(),
            patient_name: patient_name.to_string(),
            disease_name: "Influenza".to_string(),
            confidence: 80,
            symptoms: vec!["fever".to_string(), "cough".to_string()],
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

    fn open_memory_store() -> ReviewStore {
        ReviewStore::open(Box::new(MemoryBackend::new())).unwrap()
    }

    /// A backend whose persist always fails, for rollback tests.
    struct FailingBackend;

    impl StorageBackend for FailingBackend {
        fn load(&self) -> TriageResult<Vec<PredictionRecord>> {
            Ok(Vec::new())
        }

        fn persist(&self, _records: &[PredictionRecord]) -> TriageResult<()> {
            Err(TriageError::StoreUnavailable {
                reason: "disk full".to_string(),
            })
        }
    }

    // ── Ordering and reads ────────────────────────────────────────────────────

    /// New records are prepended: after append(r1), append(r2) the snapshot
    /// reads [r2, r1].
    #[test]
    fn test_append_prepends() {
        let store = open_memory_store();
        let r1 = make_record("first");
        let r2 = make_record("second");

        store.append(&r1).unwrap();
        store.append(&r2).unwrap();

        let listed = store.list().unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].id, r2.id);
        assert_eq!(listed[1].id, r1.id);
    }

    /// Reading twice with no intervening mutation yields identical sequences.
    #[test]
    fn test_list_is_idempotent() {
        let store = open_memory_store();
        store.append(&make_record("a")).unwrap();
        store.append(&make_record("b")).unwrap();

        assert_eq!(store.list().unwrap(), store.list().unwrap());
    }

    /// `pending` filters reviewed records out but keeps order.
    #[test]
    fn test_pending_filter() {
        let store = open_memory_store();
        let r1 = make_record("reviewed");
        let r2 = make_record("waiting");
        store.append(&r1).unwrap();
        store.append(&r2).unwrap();

        store
            .apply_decision(&r1.id, ReviewDecision::Verified, "confirmed", "Dr. Sarah Smith")
            .unwrap();

        let pending = store.pending().unwrap();
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].id, r2.id);
    }

    /// `get` finds present ids and misses cleanly.
    #[test]
    fn test_get_by_id() {
        let store = open_memory_store();
        let record = make_record("find-me");
        store.append(&record).unwrap();

        assert_eq!(store.get(&record.id).unwrap().unwrap().id, record.id);
        assert!(store.get(&PredictionId::new()).unwrap().is_none());
    }

    // ── Review decisions ──────────────────────────────────────────────────────

    /// A decision replaces status, note, and reviewer; everything else is
    /// untouched.
    #[test]
    fn test_apply_decision_replaces_review_fields_only() {
        let store = open_memory_store();
        let record = make_record("case");
        store.append(&record).unwrap();

        let updated = store
            .apply_decision(
                &record.id,
                ReviewDecision::Verified,
                "consistent with presentation",
                "Dr. Sarah Smith",
            )
            .unwrap();

        assert_eq!(updated.status, PredictionStatus::Verified);
        assert_eq!(updated.doctor_note.as_deref(), Some("consistent with presentation"));
        assert_eq!(updated.verified_by.as_deref(), Some("Dr. Sarah Smith"));

        // Identity and scoring outcome are fixed at creation.
        assert_eq!(updated.id, record.id);
        assert_eq!(updated.disease_name, record.disease_name);
        assert_eq!(updated.confidence, record.confidence);
        assert_eq!(updated.symptoms, record.symptoms);
        assert_eq!(updated.timestamp, record.timestamp);

        // The stored copy matches what was returned.
        assert_eq!(store.get(&record.id).unwrap().unwrap(), updated);
    }

    /// Rejection works symmetrically.
    #[test]
    fn test_apply_decision_reject() {
        let store = open_memory_store();
        let record = make_record("case");
        store.append(&record).unwrap();

        let updated = store
            .apply_decision(&record.id, ReviewDecision::Rejected, "insufficient overlap", "Dr. Sarah Smith")
            .unwrap();

        assert_eq!(updated.status, PredictionStatus::Rejected);
    }

    /// An unknown id signals NotFound and performs no mutation.
    #[test]
    fn test_apply_decision_unknown_id_is_noop() {
        let store = open_memory_store();
        store.append(&make_record("only")).unwrap();
        let before = store.list().unwrap();

        let result = store.apply_decision(
            &PredictionId::new(),
            ReviewDecision::Verified,
            "note",
            "Dr. X",
        );

        match result {
            Err(TriageError::RecordNotFound { .. }) => {}
            other => panic!("expected RecordNotFound, got {:?}", other),
        }
        assert_eq!(store.list().unwrap(), before, "collection must be unchanged");
    }

    // ── Persistence ───────────────────────────────────────────────────────────

    /// A store reopened over the same backend sees everything persisted
    /// through the first handle, in the same order.
    #[test]
    fn test_reopen_round_trips_collection() {
        let backend = MemoryBackend::new();
        let store = ReviewStore::open(Box::new(backend.clone())).unwrap();

        let r1 = make_record("first");
        let r2 = make_record("second");
        store.append(&r1).unwrap();
        store.append(&r2).unwrap();
        store
            .apply_decision(&r1.id, ReviewDecision::Verified, "ok", "Dr. Sarah Smith")
            .unwrap();
        let before = store.list().unwrap();

        let reopened = ReviewStore::open(Box::new(backend)).unwrap();
        assert_eq!(reopened.list().unwrap(), before);
    }

    /// The JSON file backend round-trips the full collection through disk.
    #[test]
    fn test_json_file_round_trip() {
        let path = std::env::temp_dir().join(format!(
            "triage-store-test-{}.json",
            PredictionId::new()
        ));

        let store = ReviewStore::open(Box::new(JsonFileBackend::new(&path))).unwrap();
        let r1 = make_record("first");
        let r2 = make_record("second");
        store.append(&r1).unwrap();
        store.append(&r2).unwrap();
        store
            .apply_decision(&r2.id, ReviewDecision::Rejected, "ruled out", "Dr. Sarah Smith")
            .unwrap();
        let before = store.list().unwrap();

        let reopened = ReviewStore::open(Box::new(JsonFileBackend::new(&path))).unwrap();
        assert_eq!(reopened.list().unwrap(), before);

        std::fs::remove_file(&path).ok();
    }

    /// A missing document loads as an empty store.
    #[test]
    fn test_missing_file_loads_empty() {
        let path = std::env::temp_dir().join(format!(
            "triage-store-missing-{}.json",
            PredictionId::new()
        ));

        let store = ReviewStore::open(Box::new(JsonFileBackend::new(&path))).unwrap();
        assert!(store.list().unwrap().is_empty());
    }

    /// A failed persist rolls the append back: the caller sees the error and
    /// the collection is unchanged.
    #[test]
    fn test_append_rolls_back_on_persist_failure() {
        let store = ReviewStore::open(Box::new(FailingBackend)).unwrap();

        let result = store.append(&make_record("doomed"));

        assert!(matches!(result, Err(TriageError::StoreUnavailable { .. })));
        assert!(store.list().unwrap().is_empty(), "failed append must not be visible");
    }

    // ── Subscriptions ─────────────────────────────────────────────────────────

    /// Subscribers receive one event per committed mutation, in order.
    #[test]
    fn test_subscription_delivers_mutations_in_order() {
        let store = open_memory_store();
        let rx = store.subscribe();

        let record = make_record("watched");
        store.append(&record).unwrap();
        store
            .apply_decision(&record.id, ReviewDecision::Verified, "ok", "Dr. Sarah Smith")
            .unwrap();

        match rx.try_recv().unwrap() {
            StoreEvent::Appended { record: appended } => {
                assert_eq!(appended.id, record.id);
                assert_eq!(appended.status, PredictionStatus::Pending);
            }
            other => panic!("expected Appended first, got {:?}", other),
        }

        match rx.try_recv().unwrap() {
            StoreEvent::DecisionApplied { record: decided } => {
                assert_eq!(decided.id, record.id);
                assert_eq!(decided.status, PredictionStatus::Verified);
            }
            other => panic!("expected DecisionApplied second, got {:?}", other),
        }

        assert!(rx.try_recv().is_err(), "no further events expected");
    }

    /// A failed mutation emits no event.
    #[test]
    fn test_failed_mutation_emits_no_event() {
        let store = ReviewStore::open(Box::new(FailingBackend)).unwrap();
        let rx = store.subscribe();

        store.append(&make_record("doomed")).unwrap_err();

        assert!(rx.try_recv().is_err());
    }

    /// A dropped receiver is pruned; later mutations still succeed.
    #[test]
    fn test_dropped_subscriber_does_not_block_mutations() {
        let store = open_memory_store();
        drop(store.subscribe());

        store.append(&make_record("still-works")).unwrap();
        assert_eq!(store.list().unwrap().len(), 1);
    }
}
