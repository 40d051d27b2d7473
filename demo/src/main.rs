//! TRIAGE — Prediction & Review Workflow Demo CLI
//!
//! Drives the full flow against one profile directory: a patient logs in and
//! scans a symptom set, the predictor files a Pending record, a doctor
//! reviews the queue and applies a decision, and every view reads the same
//! persisted collection.
//!
//! Usage:
//!   cargo run -p demo -- login --role patient
//!   cargo run -p demo -- scan --symptoms "fever,headache,body aches,fatigue"
//!   cargo run -p demo -- login --role doctor
//!   cargo run -p demo -- queue
//!   cargo run -p demo -- decide --id <uuid> --decision verified --note "..."
//!   cargo run -p demo -- run-all

use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use triage_auth::{AuthService, PreferenceStore, SessionStore, Theme, UserDirectory};
use triage_catalog::DiseaseRegistry;
use triage_contracts::{
    error::{TriageError, TriageResult},
    prediction::{PredictionId, PredictionRecord, ReviewDecision},
    user::{User, UserRole},
};
use triage_enrich::{enrich_record, TemplateRationaleProvider};
use triage_predict::{sink::ReviewSink, Predictor};
use triage_store::{JsonFileBackend, ReviewStore, StoreEvent};

// ── CLI definition ────────────────────────────────────────────────────────────

/// TRIAGE — symptom-to-disease prediction with clinician review.
///
/// Each subcommand operates on the profile directory given by --data-dir:
/// the record collection, the active session, and the preference entries all
/// live there as JSON documents.
#[derive(Parser)]
#[command(
    name = "demo",
    about = "TRIAGE prediction and review workflow demo",
    long_about = "Runs the TRIAGE demo flows: patient symptom scans, the clinician\n\
                  review queue, and the preference entries, all persisted to one\n\
                  profile directory."
)]
struct Cli {
    /// Profile directory holding predictions.json, session.json, prefs.json.
    #[arg(long, default_value = ".triage")]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Log in as one of the built-in accounts.
    Login {
        #[arg(long, value_enum)]
        role: RoleArg,
        /// Optional email; required together with --password for a
        /// credential check instead of role-tap login.
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        password: Option<String>,
    },
    /// End the active session.
    Logout,
    /// Patient flow: score a symptom set and file a Pending record.
    Scan {
        /// Comma-separated symptom tags, e.g. "fever,headache".
        #[arg(long)]
        symptoms: String,
        #[arg(long, default_value = "Hyderabad, Telangana")]
        location: String,
        /// Attach offline clinical rationale to the displayed result.
        #[arg(long)]
        rationale: bool,
        /// Pause briefly before scoring, mirroring the original scan UX.
        #[arg(long)]
        simulate_latency: bool,
    },
    /// Clinician view: records still awaiting review.
    Queue,
    /// Apply a review decision to a pending record (doctor session required).
    Decide {
        /// The prediction record id (UUID).
        #[arg(long)]
        id: String,
        #[arg(long, value_enum)]
        decision: DecisionArg,
        #[arg(long, default_value = "")]
        note: String,
    },
    /// Full record history, most recent first.
    History,
    /// Show or set the display theme preference.
    Theme {
        #[arg(value_enum)]
        set: Option<ThemeArg>,
    },
    /// Record the organ-donor pledge marker.
    DonorPledge,
    /// Scripted end-to-end walkthrough in one process.
    RunAll,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum RoleArg {
    Patient,
    Doctor,
    Admin,
}

impl From<RoleArg> for UserRole {
    fn from(role: RoleArg) -> Self {
        match role {
            RoleArg::Patient => UserRole::Patient,
            RoleArg::Doctor => UserRole::Doctor,
            RoleArg::Admin => UserRole::Admin,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum DecisionArg {
    Verified,
    Rejected,
}

impl From<DecisionArg> for ReviewDecision {
    fn from(decision: DecisionArg) -> Self {
        match decision {
            DecisionArg::Verified => ReviewDecision::Verified,
            DecisionArg::Rejected => ReviewDecision::Rejected,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ThemeArg {
    Light,
    Dark,
}

impl From<ThemeArg> for Theme {
    fn from(theme: ThemeArg) -> Self {
        match theme {
            ThemeArg::Light => Theme::Light,
            ThemeArg::Dark => Theme::Dark,
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    // Initialize structured logging. Set RUST_LOG=debug for verbose output.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .compact()
        .init();

    let cli = Cli::parse();

    let result = run(&cli);

    if let Err(e) = result {
        eprintln!("Demo error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> TriageResult<()> {
    let profile = Profile::open(&cli.data_dir)?;

    match &cli.command {
        Command::Login { role, email, password } => {
            cmd_login(&profile, (*role).into(), email.as_deref(), password.as_deref())
        }
        Command::Logout => cmd_logout(&profile),
        Command::Scan {
            symptoms,
            location,
            rationale,
            simulate_latency,
        } => cmd_scan(&profile, symptoms, location, *rationale, *simulate_latency),
        Command::Queue => cmd_queue(&profile),
        Command::Decide { id, decision, note } => {
            cmd_decide(&profile, id, (*decision).into(), note)
        }
        Command::History => cmd_history(&profile),
        Command::Theme { set } => cmd_theme(&profile, (*set).map(Into::into)),
        Command::DonorPledge => cmd_donor_pledge(&profile),
        Command::RunAll => cmd_run_all(&profile),
    }
}

// ── Profile wiring ────────────────────────────────────────────────────────────

/// Everything one profile directory holds, opened and shared explicitly —
/// no component reaches for global state.
struct Profile {
    registry: Arc<DiseaseRegistry>,
    store: Arc<ReviewStore>,
    auth: AuthService,
    prefs: PreferenceStore,
}

impl Profile {
    fn open(data_dir: &Path) -> TriageResult<Self> {
        let registry = Arc::new(DiseaseRegistry::builtin()?);
        let store = Arc::new(ReviewStore::open(Box::new(JsonFileBackend::new(
            data_dir.join("predictions.json"),
        )))?);
        let auth = AuthService::new(
            UserDirectory::builtin(),
            SessionStore::new(data_dir.join("session.json")),
        );
        let prefs = PreferenceStore::new(data_dir.join("prefs.json"));

        Ok(Self {
            registry,
            store,
            auth,
            prefs,
        })
    }

    /// The active user, or an error directing the caller to log in.
    fn active_user(&self) -> TriageResult<User> {
        self.auth.current_user()?.ok_or_else(|| TriageError::AuthDenied {
            reason: "no active session — run `demo login --role <role>` first".to_string(),
        })
    }
}

// ── Commands ──────────────────────────────────────────────────────────────────

fn cmd_login(
    profile: &Profile,
    role: UserRole,
    email: Option<&str>,
    password: Option<&str>,
) -> TriageResult<()> {
    let user = profile.auth.login(role, email, password)?;
    println!("Logged in as {} ({})", user.name, user.role);
    Ok(())
}

fn cmd_logout(profile: &Profile) -> TriageResult<()> {
    profile.auth.logout()?;
    println!("Session ended.");
    Ok(())
}

fn cmd_scan(
    profile: &Profile,
    symptoms: &str,
    location: &str,
    rationale: bool,
    simulate_latency: bool,
) -> TriageResult<()> {
    let user = profile.active_user()?;
    if user.role != UserRole::Patient {
        return Err(TriageError::AuthDenied {
            reason: "symptom scans require a patient session".to_string(),
        });
    }

    let selected: Vec<String> = symptoms
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();

    // The interaction boundary rejects empty selections before the
    // predictor ever runs.
    if selected.is_empty() {
        return Err(TriageError::EmptySymptoms);
    }

    if simulate_latency {
        println!("Processing scan...");
        std::thread::sleep(std::time::Duration::from_millis(1800));
    }

    let sink: Arc<dyn ReviewSink> = profile.store.clone();
    let predictor = Predictor::new(profile.registry.clone(), sink);

    let mut record = predictor.predict(&user.id, &user.name, &selected, location)?;

    if rationale {
        let provider = TemplateRationaleProvider::new(profile.registry.clone());
        enrich_record(&mut record, &provider);
    }

    println!();
    println!("Prediction result");
    println!("-----------------");
    print_record(&record, true);
    Ok(())
}

fn cmd_queue(profile: &Profile) -> TriageResult<()> {
    let pending = profile.store.pending()?;

    if pending.is_empty() {
        println!("Review queue is empty.");
        return Ok(());
    }

    println!("Review queue ({} pending)", pending.len());
    println!("-------------------------");
    for record in &pending {
        print_record(record, false);
        println!();
    }
    Ok(())
}

fn cmd_decide(
    profile: &Profile,
    id: &str,
    decision: ReviewDecision,
    note: &str,
) -> TriageResult<()> {
    let user = profile.active_user()?;
    if user.role != UserRole::Doctor {
        return Err(TriageError::AuthDenied {
            reason: "review decisions require a doctor session".to_string(),
        });
    }

    let uuid = uuid::Uuid::parse_str(id).map_err(|_| TriageError::RecordNotFound {
        id: id.to_string(),
    })?;

    let updated = profile
        .store
        .apply_decision(&PredictionId(uuid), decision, note, &user.name)?;

    println!("Decision recorded");
    println!("-----------------");
    print_record(&updated, true);
    Ok(())
}

fn cmd_history(profile: &Profile) -> TriageResult<()> {
    let records = profile.store.list()?;

    if records.is_empty() {
        println!("No predictions recorded yet.");
        return Ok(());
    }

    println!("Prediction history ({} records, most recent first)", records.len());
    println!("--------------------------------------------------");
    for record in &records {
        print_record(record, false);
        println!();
    }
    Ok(())
}

fn cmd_theme(profile: &Profile, set: Option<Theme>) -> TriageResult<()> {
    let mut prefs = profile.prefs.load()?;

    match set {
        Some(theme) => {
            prefs.theme = theme;
            profile.prefs.save(&prefs)?;
            println!("Theme set to {:?}.", prefs.theme);
        }
        None => println!("Theme: {:?}", prefs.theme),
    }
    Ok(())
}

fn cmd_donor_pledge(profile: &Profile) -> TriageResult<()> {
    let mut prefs = profile.prefs.load()?;

    if prefs.organ_donor_pledged {
        println!("Organ-donor pledge already recorded.");
        return Ok(());
    }

    prefs.organ_donor_pledged = true;
    profile.prefs.save(&prefs)?;
    println!("Organ-donor pledge recorded.");
    Ok(())
}

/// The scripted walkthrough: patient scan, doctor review, final history,
/// with the store's event channel printed at the end. Subscribing replaces
/// the fixed-interval re-read a browser view would do.
fn cmd_run_all(profile: &Profile) -> TriageResult<()> {
    print_banner();

    let events = profile.store.subscribe();

    // ── Patient: scan ─────────────────────────────────────────────────────
    let patient = profile.auth.login(UserRole::Patient, None, None)?;
    println!("[1] {} scans: fever, headache, body aches, fatigue", patient.name);

    let sink: Arc<dyn ReviewSink> = profile.store.clone();
    let predictor = Predictor::new(profile.registry.clone(), sink);
    let mut record = predictor.predict(
        &patient.id,
        &patient.name,
        &[
            "fever".to_string(),
            "headache".to_string(),
            "body aches".to_string(),
            "fatigue".to_string(),
        ],
        "Hyderabad, Telangana",
    )?;

    let provider = TemplateRationaleProvider::new(profile.registry.clone());
    enrich_record(&mut record, &provider);
    print_record(&record, true);
    println!();

    // ── Doctor: review ────────────────────────────────────────────────────
    let doctor = profile.auth.login(UserRole::Doctor, None, None)?;
    let pending = profile.store.pending()?;
    println!("[2] {} reviews the queue ({} pending)", doctor.name, pending.len());

    let updated = profile.store.apply_decision(
        &record.id,
        ReviewDecision::Verified,
        "Presentation is consistent with seasonal influenza.",
        &doctor.name,
    )?;
    print_record(&updated, true);
    println!();

    // ── History + event stream ────────────────────────────────────────────
    let history = profile.store.list()?;
    println!("[3] History now holds {} record(s).", history.len());

    println!("[4] Store events observed this run:");
    while let Ok(event) = events.try_recv() {
        match event {
            StoreEvent::Appended { record } => {
                println!("    appended        {} ({})", record.id, record.disease_name)
            }
            StoreEvent::DecisionApplied { record } => {
                println!("    decision        {} → {}", record.id, record.status)
            }
        }
    }

    println!();
    println!("Walkthrough complete.");
    Ok(())
}

// ── Output helpers ────────────────────────────────────────────────────────────

fn print_record(record: &PredictionRecord, detailed: bool) {
    println!(
        "  {}  {}  {}% confidence  [{}]",
        record.id, record.disease_name, record.confidence, record.status
    );
    println!(
        "      patient: {}  symptoms: {}  severity: {}",
        record.patient_name,
        record.symptoms.join(", "),
        record.severity
    );

    if !detailed {
        return;
    }

    println!(
        "      specialty: {}  location: {}  at: {}",
        record.specialty, record.location, record.timestamp
    );
    if let Some(reviewer) = &record.verified_by {
        println!("      reviewed by: {}", reviewer);
    }
    if let Some(note) = &record.doctor_note {
        if !note.is_empty() {
            println!("      note: {}", note);
        }
    }
    if let Some(rationale) = &record.clinical_rationale {
        println!("      rationale:");
        for line in rationale.lines() {
            println!("        {}", line);
        }
    }
}

fn print_banner() {
    println!();
    println!("TRIAGE — Prediction & Review Demo");
    println!("=================================");
    println!();
    println!("Flow per scan:");
    println!("  [1] Patient selects symptoms → overlap score against the catalog");
    println!("  [2] Best match above the threshold wins; otherwise the fallback entry");
    println!("  [3] A Pending record is filed in the review store");
    println!("  [4] A doctor applies Verified/Rejected with a note");
    println!("  [5] Every view reads the same persisted collection");
    println!();
}
