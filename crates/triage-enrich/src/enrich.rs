//! Record enrichment with graceful degradation.
//!
//! Enrichment is strictly additive: it fills `clinical_rationale` when the
//! provider succeeds and does nothing at all when it fails. It never touches
//! the store — the record is enriched in the caller's hands.

use tracing::{debug, warn};

use triage_contracts::prediction::PredictionRecord;

use crate::provider::RationaleProvider;

/// Attach rationale text to `record` if the provider can supply it.
///
/// Provider failures are swallowed: the field stays `None` and the caller's
/// flow continues. An already-present rationale is kept as-is. Returns true
/// when a rationale was attached by this call.
pub fn enrich_record(record: &mut PredictionRecord, provider: &dyn RationaleProvider) -> bool {
    if record.clinical_rationale.is_some() {
        debug!(prediction_id = %record.id, "record already enriched");
        return false;
    }

    match provider.clinical_rationale(&record.disease_name, &record.symptoms) {
        Ok(text) => {
            record.clinical_rationale = Some(text);
            debug!(prediction_id = %record.id, "rationale attached");
            true
        }
        Err(e) => {
            warn!(
                prediction_id = %record.id,
                "rationale unavailable, continuing without: {}", e
            );
            false
        }
    }
}
