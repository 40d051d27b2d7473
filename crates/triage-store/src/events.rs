//! Store change notifications.
//!
//! Views that used to poll the collection on a timer subscribe to the store
//! instead: `ReviewStore::subscribe` hands out an `mpsc::Receiver` that
//! delivers one event per committed mutation, in mutation order. Dropping
//! the receiver unsubscribes; the store prunes dead senders on the next
//! notification.

use triage_contracts::prediction::PredictionRecord;

/// One committed store mutation.
///
/// Events are emitted after the mutation has been persisted, so a consumer
/// that re-reads the store on receipt always observes the change.
#[derive(Debug, Clone)]
pub enum StoreEvent {
    /// A new record entered the collection (always Pending).
    Appended { record: PredictionRecord },

    /// A review decision was applied to an existing record.
    DecisionApplied { record: PredictionRecord },
}

impl StoreEvent {
    /// The record the event concerns.
    pub fn record(&self) -> &PredictionRecord {
        match self {
            Self::Appended { record } => record,
            Self::DecisionApplied { record } => record,
        }
    }
}
