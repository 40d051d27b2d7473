//! # triage-enrich
//!
//! Optional clinical-rationale enrichment for prediction records.
//!
//! The [`provider::RationaleProvider`] trait is the boundary a generative
//! text service would sit behind. This crate ships an offline
//! [`provider::TemplateRationaleProvider`] assembled from catalog reference
//! data, and [`enrich::enrich_record`], which degrades any provider failure
//! to an absent field — enrichment is never required for correctness.

pub mod enrich;
pub mod provider;

pub use enrich::enrich_record;
pub use provider::{RationaleProvider, TemplateRationaleProvider, UnavailableProvider};

// ── Tests ─────────────────────────────────────────────────────────────────────
