//! # triage-predict
//!
//! The symptom-to-disease prediction engine for TRIAGE.
//!
//! This crate provides:
//! - [`score`] — the overlap-ratio scoring pass over the disease catalog
//! - [`policy::MatchPolicy`] — the threshold gate and low-overlap fallback
//! - [`Predictor`] — the engine that synthesizes Pending prediction records
//! - [`sink::ReviewSink`] — the trait seam the review store implements
//!
//! ## Usage
//!
//! ```rust,ignore
//! use triage_predict::{Predictor, sink::ReviewSink};
//! ```

pub mod policy;
pub mod predictor;
pub mod score;
pub mod sink;

pub use predictor::Predictor;
