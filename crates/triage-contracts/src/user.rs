//! User identity and role types.
//!
//! The prediction/review core only ever reads `id` and `name` of the active
//! user (to attribute a review decision); the remaining fields exist for the
//! account views that sit outside the core.

use serde::{Deserialize, Serialize};

/// The three roles the application recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UserRole {
    Patient,
    Doctor,
    Admin,
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Patient => write!(f, "Patient"),
            Self::Doctor => write!(f, "Doctor"),
            Self::Admin => write!(f, "Admin"),
        }
    }
}

/// An authenticated user record.
///
/// Role-specific fields are optional and populated only for the matching
/// role. None of them participate in prediction or review logic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: UserRole,

    // Doctor
    pub specialty: Option<String>,
    pub license_number: Option<String>,
    pub hospital_affiliation: Option<String>,
    pub years_of_experience: Option<u32>,

    // Admin
    pub access_level: Option<String>,
    pub department: Option<String>,

    // Patient
    pub blood_group: Option<String>,
    pub phone: Option<String>,
    pub allergies: Option<String>,
    pub chronic_conditions: Option<String>,
}

impl User {
    /// Minimal constructor; role-specific fields start empty.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
        role: UserRole,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            role,
            specialty: None,
            license_number: None,
            hospital_affiliation: None,
            years_of_experience: None,
            access_level: None,
            department: None,
            blood_group: None,
            phone: None,
            allergies: None,
            chronic_conditions: None,
        }
    }
}
