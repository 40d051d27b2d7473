//! # triage-auth
//!
//! Authentication and session persistence for TRIAGE.
//!
//! Credentials are checked against a static in-memory table ([`directory`]);
//! the resulting user record round-trips through a per-profile JSON session
//! document ([`session`]). Real credential security is explicitly not a goal
//! of this service — it stands in for an identity provider so the review
//! flow has a user to attribute decisions to. [`prefs`] holds the remaining
//! per-profile durable entries (theme, organ-donor pledge).

pub mod directory;
pub mod prefs;
pub mod service;
pub mod session;

pub use directory::UserDirectory;
pub use prefs::{PreferenceStore, Preferences, Theme};
pub use service::AuthService;
pub use session::SessionStore;

// ── Tests ─────────────────────────────────────────────────────────────────────
