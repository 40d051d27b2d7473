//! The review store: the sole owner of the prediction record collection.
//!
//! All reads return snapshots; the only sanctioned mutations are `append`
//! (new Pending records, via the predictor) and `apply_decision` (the
//! clinician review). Every mutation persists the whole collection through
//! the backend before subscribers are notified, and rolls the in-memory
//! state back if persistence fails — a mutation either lands completely or
//! not at all.

use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::Mutex;

use tracing::{info, warn};

use triage_contracts::{
    error::{TriageError, TriageResult},
    prediction::{PredictionId, PredictionRecord, ReviewDecision},
};
use triage_predict::sink::ReviewSink;

use crate::{backend::StorageBackend, events::StoreEvent};

/// The ordered prediction record collection, most-recent-first.
///
/// Open one store per profile and share it behind an `Arc`. Interior
/// mutability keeps the public surface `&self`, matching how the predictor
/// and the review flow both hold the same handle.
pub struct ReviewStore {
    records: Mutex<Vec<PredictionRecord>>,
    backend: Box<dyn StorageBackend>,
    subscribers: Mutex<Vec<Sender<StoreEvent>>>,
}

impl ReviewStore {
    /// Open a store over `backend`, loading whatever it already holds.
    pub fn open(backend: Box<dyn StorageBackend>) -> TriageResult<Self> {
        let records = backend.load()?;
        info!(records = records.len(), "review store opened");
        Ok(Self {
            records: Mutex::new(records),
            backend,
            subscribers: Mutex::new(Vec::new()),
        })
    }

    /// Full snapshot of the collection, most-recent-first.
    ///
    /// Two calls with no intervening mutation return identical sequences.
    pub fn list(&self) -> TriageResult<Vec<PredictionRecord>> {
        Ok(self.lock_records()?.clone())
    }

    /// Snapshot of the records still awaiting review, most-recent-first.
    pub fn pending(&self) -> TriageResult<Vec<PredictionRecord>> {
        Ok(self
            .lock_records()?
            .iter()
            .filter(|r| r.is_pending())
            .cloned()
            .collect())
    }

    /// Look up one record by id.
    pub fn get(&self, id: &PredictionId) -> TriageResult<Option<PredictionRecord>> {
        Ok(self.lock_records()?.iter().find(|r| &r.id == id).cloned())
    }

    /// Insert a new record at the front of the collection.
    ///
    /// Most-recent-first ordering is a contract other views rely on for
    /// "latest prediction" semantics: new records are prepended. The whole
    /// collection is persisted before the append is visible to subscribers;
    /// a persistence failure undoes the in-memory insert.
    pub fn append(&self, record: &PredictionRecord) -> TriageResult<()> {
        let mut records = self.lock_records()?;
        records.insert(0, record.clone());

        if let Err(e) = self.backend.persist(&records) {
            warn!(prediction_id = %record.id, "append rolled back: {}", e);
            records.remove(0);
            return Err(e);
        }
        drop(records);

        self.notify(StoreEvent::Appended {
            record: record.clone(),
        });
        Ok(())
    }

    /// Apply a clinician's review decision to the record with `id`.
    ///
    /// Replaces `status`, `doctor_note`, and `verified_by` in place; every
    /// other field is untouched. Returns the updated record.
    ///
    /// A decision can never return a record to Pending — `ReviewDecision`
    /// only carries the two terminal review outcomes.
    ///
    /// # Errors
    ///
    /// `TriageError::RecordNotFound` when `id` is absent; the collection is
    /// left unchanged. Backend failures roll the record back to its prior
    /// state.
    pub fn apply_decision(
        &self,
        id: &PredictionId,
        decision: ReviewDecision,
        note: &str,
        reviewer_name: &str,
    ) -> TriageResult<PredictionRecord> {
        let mut records = self.lock_records()?;

        let index = records
            .iter()
            .position(|r| &r.id == id)
            .ok_or_else(|| TriageError::RecordNotFound { id: id.to_string() })?;

        let prior = records[index].clone();
        {
            let record = &mut records[index];
            record.status = decision.status();
            record.doctor_note = Some(note.to_string());
            record.verified_by = Some(reviewer_name.to_string());
        }

        if let Err(e) = self.backend.persist(&records) {
            warn!(prediction_id = %id, "decision rolled back: {}", e);
            records[index] = prior;
            return Err(e);
        }

        let updated = records[index].clone();
        drop(records);

        info!(
            prediction_id = %id,
            status = %updated.status,
            reviewer = %reviewer_name,
            "review decision applied"
        );

        self.notify(StoreEvent::DecisionApplied {
            record: updated.clone(),
        });
        Ok(updated)
    }

    /// Subscribe to committed mutations.
    ///
    /// The receiver gets one `StoreEvent` per mutation, in mutation order,
    /// starting from the moment of subscription. Drop the receiver to
    /// unsubscribe.
    pub fn subscribe(&self) -> Receiver<StoreEvent> {
        let (tx, rx) = channel();
        self.subscribers
            .lock()
            .expect("subscriber lock poisoned")
            .push(tx);
        rx
    }

    // ── Internal helpers ─────────────────────────────────────────────────────

    fn lock_records(&self) -> TriageResult<std::sync::MutexGuard<'_, Vec<PredictionRecord>>> {
        self.records.lock().map_err(|e| TriageError::StoreUnavailable {
            reason: format!("store state lock poisoned: {}", e),
        })
    }

    /// Deliver `event` to every live subscriber, pruning the dead ones.
    fn notify(&self, event: StoreEvent) {
        let mut subscribers = self
            .subscribers
            .lock()
            .expect("subscriber lock poisoned");
        subscribers.retain(|tx| tx.send(event.clone()).is_ok());
    }
}

impl ReviewSink for ReviewStore {
    /// The predictor files new records through this seam.
    fn append(&self, record: &PredictionRecord) -> TriageResult<()> {
        ReviewStore::append(self, record)
    }
}
