//! The authentication service.
//!
//! Login checks credentials against the static directory and round-trips the
//! resulting user record through the session store. An existing session for
//! the requested role is resumed without re-checking credentials, matching
//! the single-profile medium this service is designed for.

use tracing::{info, warn};

use triage_contracts::{
    error::{TriageError, TriageResult},
    user::{User, UserRole},
};

use crate::{directory::UserDirectory, session::SessionStore};

/// Static-table authentication with a persisted session.
///
/// The review flow consumes only `id` and `name` of the user this service
/// reports as active; everything else is account-view data.
pub struct AuthService {
    directory: UserDirectory,
    session: SessionStore,
}

impl AuthService {
    pub fn new(directory: UserDirectory, session: SessionStore) -> Self {
        Self { directory, session }
    }

    /// Authenticate as `role`.
    ///
    /// Resolution order:
    /// 1. An existing session with a matching role (and matching email, when
    ///    one is supplied) is resumed as-is.
    /// 2. With both email and password supplied, they are checked against
    ///    the directory entry for the role; a mismatch is refused.
    /// 3. With no credentials, the directory entry for the role is used
    ///    directly (demo-style role-tap login).
    ///
    /// A successful login persists the user record to the session store.
    pub fn login(
        &self,
        role: UserRole,
        email: Option<&str>,
        password: Option<&str>,
    ) -> TriageResult<User> {
        if let Some(existing) = self.session.load()? {
            if existing.role == role && email.map_or(true, |e| existing.email == e) {
                info!(user_id = %existing.id, role = %role, "resumed existing session");
                return Ok(existing);
            }
        }

        let entry = self
            .directory
            .entry_for_role(role)
            .ok_or_else(|| TriageError::AuthDenied {
                reason: format!("no account for role '{}'", role),
            })?;

        if let (Some(email), Some(password)) = (email, password) {
            if entry.user.email != email || entry.password != password {
                warn!(role = %role, "login refused: credential mismatch");
                return Err(TriageError::AuthDenied {
                    reason: format!("invalid credentials for role '{}'", role),
                });
            }
        }

        self.session.save(&entry.user)?;
        info!(user_id = %entry.user.id, role = %role, "login succeeded");
        Ok(entry.user.clone())
    }

    /// End the active session, if any.
    pub fn logout(&self) -> TriageResult<()> {
        self.session.clear()?;
        info!("session cleared");
        Ok(())
    }

    /// The active user, or `None` when nobody is logged in.
    pub fn current_user(&self) -> TriageResult<Option<User>> {
        self.session.load()
    }

    /// Apply `update` to the active user's record and persist the result.
    ///
    /// Refused when no session exists.
    pub fn update_profile(&self, update: impl FnOnce(&mut User)) -> TriageResult<User> {
        let mut user = self.session.load()?.ok_or_else(|| TriageError::AuthDenied {
            reason: "no active session".to_string(),
        })?;

        update(&mut user);
        self.session.save(&user)?;
        Ok(user)
    }
}
