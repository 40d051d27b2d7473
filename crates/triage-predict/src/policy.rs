//! Match-selection policy: threshold gate and low-overlap fallback.
//!
//! The policy decides which ranked entry becomes the prediction. It is kept
//! separate from scoring so a real classifier can replace it without
//! touching the store contract or the record shape.

use tracing::debug;

use triage_catalog::DiseaseRegistry;
use triage_contracts::disease::Disease;

use crate::score::ScoredDisease;

/// The disease a scan resolves to, with its reported confidence.
#[derive(Debug, Clone)]
pub struct SelectedMatch<'a> {
    pub disease: &'a Disease,
    /// Rounded percentage in [0, 100]; fixed at 15 on the fallback path.
    pub confidence: u8,
    /// True when no entry cleared the threshold and the first catalog entry
    /// was substituted.
    pub fallback: bool,
}

/// Selection rules applied to a ranked score list.
///
/// The top-ranked entry is used when its score is strictly greater than
/// `threshold`. Otherwise the first catalog entry is substituted with the
/// fixed `fallback_confidence`, regardless of its actual overlap — a
/// placeholder heuristic that guarantees every scan produces a displayable
/// result. The manufactured confidence does not reflect real overlap; it is
/// preserved as-is for compatibility and must not be "corrected" here.
#[derive(Debug, Clone)]
pub struct MatchPolicy {
    /// Minimum score (exclusive) for the top entry to be accepted.
    pub threshold: f64,
    /// Confidence reported on the fallback path.
    pub fallback_confidence: u8,
}

impl Default for MatchPolicy {
    fn default() -> Self {
        Self {
            threshold: 20.0,
            fallback_confidence: 15,
        }
    }
}

impl MatchPolicy {
    /// Resolve a ranked score list to the final match.
    ///
    /// `ranked` must come from `score::rank` over the same registry, so the
    /// stable descending order already encodes catalog-order tie-breaking.
    /// An exact-threshold score does NOT clear the gate.
    pub fn select<'a>(
        &self,
        ranked: &[ScoredDisease<'a>],
        registry: &'a DiseaseRegistry,
    ) -> SelectedMatch<'a> {
        match ranked.first() {
            Some(top) if top.score > self.threshold => {
                debug!(
                    disease = %top.disease.name,
                    score = top.score,
                    "top-ranked entry cleared the match threshold"
                );
                SelectedMatch {
                    disease: top.disease,
                    confidence: top.score.round() as u8,
                    fallback: false,
                }
            }
            _ => {
                debug!(
                    fallback = %registry.first().name,
                    "no entry cleared the match threshold, using fallback"
                );
                SelectedMatch {
                    disease: registry.first(),
                    confidence: self.fallback_confidence,
                    fallback: true,
                }
            }
        }
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────
