//! # triage-catalog
//!
//! The TOML-driven static disease catalog for TRIAGE.
//!
//! ## Overview
//!
//! This crate provides [`DiseaseRegistry`], the ordered, immutable catalog
//! the predictor scores symptom sets against. Entries are declared in a TOML
//! document and keep their declaration order — the first entry doubles as
//! the fallback target for scans no disease matches well, and ties between
//! equal scores resolve to the earlier entry.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use triage_catalog::DiseaseRegistry;
//!
//! let registry = DiseaseRegistry::builtin()?;
//! // Pass `Arc::new(registry)` to `triage_predict::Predictor::new(...)`.
//! ```

pub mod config;
pub mod registry;

pub use config::CatalogConfig;
pub use registry::DiseaseRegistry;

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use triage_contracts::{disease::Severity, error::TriageError};

    use crate::DiseaseRegistry;

    // ── 1. built-in catalog shape ─────────────────────────────────────────────

    /// The shipped catalog is valid and carries the expected entries.
    #[test]
    fn test_builtin_catalog_loads() {
        let registry = DiseaseRegistry::builtin().unwrap();

        assert_eq!(registry.diseases().len(), 8);
        assert_eq!(registry.first().name, "Common Cold");
        assert!(!registry.symptom_list().is_empty());
    }

    /// Influenza ships with the five canonical symptoms the scoring examples
    /// are calibrated against.
    #[test]
    fn test_builtin_influenza_entry() {
        let registry = DiseaseRegistry::builtin().unwrap();
        let flu = registry.get("Influenza").expect("Influenza must be in the catalog");

        assert_eq!(
            flu.symptoms,
            vec!["fever", "body aches", "fatigue", "cough", "headache"]
        );
        assert_eq!(flu.severity, Severity::Medium);
        assert_eq!(flu.specialty, "General Physician");
        assert!(flu.protocol.is_some());
    }

    /// Entries without a `[diseases.protocol]` table load with protocol None.
    #[test]
    fn test_builtin_protocol_optional() {
        let registry = DiseaseRegistry::builtin().unwrap();

        assert!(registry.get("Pneumonia").unwrap().protocol.is_none());
        let cold = registry.get("Common Cold").unwrap();
        let protocol = cold.protocol.as_ref().unwrap();
        assert_eq!(protocol.steps[0], "Hydration");
        assert_eq!(protocol.medications[0].name, "Paracetamol");
    }

    // ── 2. lookup ─────────────────────────────────────────────────────────────

    /// `get` matches case-insensitively and misses cleanly.
    #[test]
    fn test_lookup_case_insensitive() {
        let registry = DiseaseRegistry::builtin().unwrap();

        assert!(registry.get("influenza").is_some());
        assert!(registry.get("INFLUENZA").is_some());
        assert!(registry.get("No Such Disease").is_none());
    }

    // ── 3. custom documents ───────────────────────────────────────────────────

    /// A minimal custom catalog parses and preserves declaration order.
    #[test]
    fn test_custom_catalog_order_preserved() {
        let toml = r#"
            [[diseases]]
            name = "Alpha"
            symptoms = ["a1", "a2"]
            severity = "low"
            specialty = "General Physician"

            [[diseases]]
            name = "Beta"
            symptoms = ["b1"]
            severity = "critical"
            specialty = "Cardiologist"
        "#;

        let registry = DiseaseRegistry::from_toml_str(toml).unwrap();
        assert_eq!(registry.diseases()[0].name, "Alpha");
        assert_eq!(registry.diseases()[1].name, "Beta");
        assert_eq!(registry.first().name, "Alpha");
        assert_eq!(registry.diseases()[1].severity, Severity::Critical);
    }

    /// An entry with no symptoms is legal; it simply never scores above zero.
    #[test]
    fn test_zero_symptom_entry_allowed() {
        let toml = r#"
            [[diseases]]
            name = "Degenerate"
            symptoms = []
            severity = "low"
            specialty = "General Physician"
        "#;

        let registry = DiseaseRegistry::from_toml_str(toml).unwrap();
        assert!(registry.first().symptoms.is_empty());
    }

    // ── 4. rejection paths ────────────────────────────────────────────────────

    /// Malformed TOML must produce a `TriageError::ConfigError`.
    #[test]
    fn test_toml_parse_error() {
        let bad_toml = r#"
            this is not valid toml ][[[
        "#;

        let result = DiseaseRegistry::from_toml_str(bad_toml);

        match result {
            Err(TriageError::ConfigError { reason }) => {
                assert!(
                    reason.contains("failed to parse catalog TOML"),
                    "expected parse error message, got: {reason}"
                );
            }
            other => panic!("expected ConfigError, got {:?}", other),
        }
    }

    /// An empty catalog is rejected — the fallback needs a first entry.
    #[test]
    fn test_empty_catalog_rejected() {
        let toml = r#"
            diseases = []
        "#;

        match DiseaseRegistry::from_toml_str(toml) {
            Err(TriageError::ConfigError { reason }) => {
                assert!(reason.contains("at least one disease"));
            }
            other => panic!("expected ConfigError, got {:?}", other),
        }
    }

    /// Duplicate names are rejected case-insensitively.
    #[test]
    fn test_duplicate_names_rejected() {
        let toml = r#"
            [[diseases]]
            name = "Influenza"
            symptoms = ["fever"]
            severity = "medium"
            specialty = "General Physician"

            [[diseases]]
            name = "INFLUENZA"
            symptoms = ["cough"]
            severity = "low"
            specialty = "General Physician"
        "#;

        match DiseaseRegistry::from_toml_str(toml) {
            Err(TriageError::ConfigError { reason }) => {
                assert!(reason.contains("duplicate disease entry"));
            }
            other => panic!("expected ConfigError, got {:?}", other),
        }
    }

    /// A missing catalog file maps to ConfigError, not a panic.
    #[test]
    fn test_missing_file_is_config_error() {
        let result = DiseaseRegistry::from_file(std::path::Path::new(
            "/definitely/not/a/real/catalog.toml",
        ));

        match result {
            Err(TriageError::ConfigError { reason }) => {
                assert!(reason.contains("failed to read catalog file"));
            }
            other => panic!("expected ConfigError, got {:?}", other),
        }
    }
}
