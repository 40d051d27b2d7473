//! Symptom-overlap scoring.
//!
//! The score of a disease against a selected symptom set is the percentage
//! of the disease's canonical symptom list covered by the selection:
//!
//!   score(d) = 100 * |d.symptoms ∩ selected| / |d.symptoms|
//!
//! The measure is deliberately asymmetric: a disease with a short canonical
//! list can reach 100 on a single overlapping symptom, and an entry with an
//! empty list always scores 0. Comparison is case-insensitive on both sides.

use std::collections::HashSet;

use triage_catalog::DiseaseRegistry;
use triage_contracts::disease::Disease;

/// One catalog entry paired with its score for a given symptom set.
#[derive(Debug, Clone)]
pub struct ScoredDisease<'a> {
    pub disease: &'a Disease,
    /// Coverage percentage in [0, 100].
    pub score: f64,
}

/// Score a single catalog entry against the selected symptom set.
pub fn overlap_score(disease: &Disease, selected: &[String]) -> f64 {
    if disease.symptoms.is_empty() {
        return 0.0;
    }

    let selected: HashSet<String> = selected.iter().map(|s| s.to_lowercase()).collect();
    let matches = disease
        .symptoms
        .iter()
        .filter(|s| selected.contains(&s.to_lowercase()))
        .count();

    100.0 * matches as f64 / disease.symptoms.len() as f64
}

/// Score every catalog entry and rank by descending score.
///
/// The sort is stable, so entries with equal scores keep catalog order —
/// the earlier entry wins a tie. Callers take the first element as the best
/// match candidate.
pub fn rank<'a>(registry: &'a DiseaseRegistry, selected: &[String]) -> Vec<ScoredDisease<'a>> {
    let mut scored: Vec<ScoredDisease<'a>> = registry
        .diseases()
        .iter()
        .map(|disease| ScoredDisease {
            disease,
            score: overlap_score(disease, selected),
        })
        .collect();

    scored.sort_by(|a, b| b.score.total_cmp(&a.score));
    scored
}

// ── Tests ────────────────────────────────────────────────────────────────────
