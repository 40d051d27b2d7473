//! The static user table.
//!
//! All identities in this module are hardcoded and fictional — the table
//! stands in for a real identity provider. One account exists per role.
//! Passwords live only in this in-memory table; they are never written to
//! the session file.

use triage_contracts::user::{User, UserRole};

/// One table row: a user record plus its login password.
#[derive(Debug, Clone)]
pub struct DirectoryEntry {
    pub user: User,
    pub password: String,
}

/// The in-memory account table consulted at login.
#[derive(Debug, Clone)]
pub struct UserDirectory {
    entries: Vec<DirectoryEntry>,
}

impl UserDirectory {
    /// The three built-in demo accounts (patient, doctor, admin).
    pub fn builtin() -> Self {
        let mut patient = User::new("p1", "John Doe", "patient@triage.health", UserRole::Patient);
        patient.phone = Some("+91 9876543210".to_string());
        patient.blood_group = Some("O+".to_string());
        patient.allergies = Some("Peanuts, Shellfish, Dust Mites".to_string());
        patient.chronic_conditions = Some("Mild Seasonal Asthma".to_string());

        let mut doctor = User::new("d1", "Dr. Sarah Smith", "doctor@triage.health", UserRole::Doctor);
        doctor.specialty = Some("Neurology".to_string());
        doctor.license_number = Some("MD-AI-9922-K".to_string());
        doctor.hospital_affiliation = Some("TRIAGE Research Hospital & Clinic".to_string());
        doctor.years_of_experience = Some(14);

        let mut admin = User::new("a1", "Admin Supervisor", "admin@triage.health", UserRole::Admin);
        admin.access_level = Some("Level 5 (Superuser)".to_string());
        admin.department = Some("Global Health Surveillance".to_string());

        Self {
            entries: vec![
                DirectoryEntry {
                    user: patient,
                    password: "password".to_string(),
                },
                DirectoryEntry {
                    user: doctor,
                    password: "password".to_string(),
                },
                DirectoryEntry {
                    user: admin,
                    password: "password".to_string(),
                },
            ],
        }
    }

    /// The table entry for `role`, if one exists.
    pub fn entry_for_role(&self, role: UserRole) -> Option<&DirectoryEntry> {
        self.entries.iter().find(|e| e.user.role == role)
    }
}
