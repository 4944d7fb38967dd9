//! Persistence gateway.
//!
//! `Repository` abstracts the row store and identity table (SQLite in
//! production, memory in tests). `Gateway` wraps a repository so that every
//! backend failure is converted into a user-visible error paired with a safe
//! default: an empty list on read failure, "not saved" on write failure and
//! no identity on auth failure. Nothing past this boundary sees a raw
//! backend fault.

mod memory;
pub mod password;

pub use memory::MemoryRepository;

use crate::errors::{AppError, AppResult};
use crate::models::{CravingEvent, Identity, NewCravingEvent};
use crate::ui::messages::warning;
use chrono::Local;
use regex::Regex;
use std::sync::LazyLock;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("valid email regex"));

/// Storage backend for craving rows, users and the audit log.
///
/// Implementations only insert and select craving rows; there is no update
/// or delete path.
pub trait Repository {
    /// Store an already prepared event (trimmed, timestamped) and return the stored row.
    fn insert_event(&mut self, event: &NewCravingEvent) -> AppResult<CravingEvent>;

    /// `user_id`'s events, or the anonymous ones (no owner) when `None`. Newest first.
    fn list_events(&mut self, user_id: Option<i64>) -> AppResult<Vec<CravingEvent>>;

    fn create_user(&mut self, email: &str, password_hash: &str) -> AppResult<Identity>;

    /// Look a user up by (normalized) email, returning the identity and its password hash.
    fn find_user(&mut self, email: &str) -> AppResult<Option<(Identity, String)>>;

    /// Append a line to the internal audit log.
    fn audit(&mut self, operation: &str, target: &str, message: &str) -> AppResult<()>;
}

/// Result of a write through the gateway.
#[derive(Debug)]
pub enum SaveOutcome {
    Saved(CravingEvent),
    NotSaved(AppError),
}

/// Result of a read through the gateway. `events` is empty when `error` is set.
#[derive(Debug, Default)]
pub struct Fetched {
    pub events: Vec<CravingEvent>,
    pub error: Option<AppError>,
}

/// Result of register / authenticate.
#[derive(Debug)]
pub enum AuthOutcome {
    SignedIn(Identity),
    Rejected(AppError),
}

pub struct Gateway<R: Repository> {
    repo: R,
}

impl<R: Repository> Gateway<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    pub fn repository_mut(&mut self) -> &mut R {
        &mut self.repo
    }

    pub fn insert_event(&mut self, event: NewCravingEvent) -> SaveOutcome {
        let event = match event.prepared(Local::now()) {
            Ok(ev) => ev,
            Err(e) => return SaveOutcome::NotSaved(e),
        };

        match self.repo.insert_event(&event) {
            Ok(saved) => {
                self.audit(
                    "save",
                    &saved.craving_item,
                    &format!("Logged '{}' → {}", saved.craving_item, saved.action_taken),
                );
                SaveOutcome::Saved(saved)
            }
            Err(e) => SaveOutcome::NotSaved(as_backend(e)),
        }
    }

    pub fn list_events(&mut self, user_id: Option<i64>) -> Fetched {
        match self.repo.list_events(user_id) {
            Ok(events) => Fetched {
                events,
                error: None,
            },
            Err(e) => Fetched {
                events: Vec::new(),
                error: Some(as_backend(e)),
            },
        }
    }

    pub fn register(&mut self, email: &str, password: &str, confirm: &str) -> AuthOutcome {
        let email = normalize_email(email);

        if !EMAIL_RE.is_match(&email) {
            return AuthOutcome::Rejected(AppError::Validation(format!(
                "'{email}' is not a valid email address"
            )));
        }
        if password.is_empty() {
            return AuthOutcome::Rejected(AppError::Validation(
                "Password must not be empty".to_string(),
            ));
        }
        if password != confirm {
            return AuthOutcome::Rejected(AppError::Validation(
                "Passwords do not match".to_string(),
            ));
        }

        match self.repo.find_user(&email) {
            Ok(Some(_)) => {
                return AuthOutcome::Rejected(AppError::Auth(format!(
                    "an account for {email} already exists"
                )));
            }
            Ok(None) => {}
            Err(e) => return AuthOutcome::Rejected(as_backend(e)),
        }

        let hash = match password::hash_password(password) {
            Ok(h) => h,
            Err(e) => return AuthOutcome::Rejected(e),
        };

        match self.repo.create_user(&email, &hash) {
            Ok(identity) => {
                self.audit("register", &identity.email, "Account created");
                AuthOutcome::SignedIn(identity)
            }
            Err(e) => AuthOutcome::Rejected(as_backend(e)),
        }
    }

    pub fn authenticate(&mut self, email: &str, password: &str) -> AuthOutcome {
        let email = normalize_email(email);
        let bad_credentials = || AppError::Auth("invalid email or password".to_string());

        let (identity, hash) = match self.repo.find_user(&email) {
            Ok(Some(found)) => found,
            Ok(None) => return AuthOutcome::Rejected(bad_credentials()),
            Err(e) => return AuthOutcome::Rejected(as_backend(e)),
        };

        match password::verify_password(password, &hash) {
            Ok(true) => {
                self.audit("login", &identity.email, "Signed in");
                AuthOutcome::SignedIn(identity)
            }
            Ok(false) => AuthOutcome::Rejected(bad_credentials()),
            Err(e) => AuthOutcome::Rejected(e),
        }
    }

    /// Identities are not tracked server-side; signing out only leaves a trace in the log.
    pub fn sign_out(&mut self, identity: &Identity) {
        self.audit("logout", &identity.email, "Signed out");
    }

    // Audit failures never block the operation that triggered them.
    fn audit(&mut self, operation: &str, target: &str, message: &str) {
        if let Err(e) = self.repo.audit(operation, target, message) {
            warning(format!("Failed to write internal log: {e}"));
        }
    }
}

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

fn as_backend(e: AppError) -> AppError {
    match e {
        AppError::Backend(_) | AppError::Validation(_) | AppError::Auth(_) => e,
        other => AppError::Backend(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gateway() -> Gateway<MemoryRepository> {
        Gateway::new(MemoryRepository::new())
    }

    #[test]
    fn insert_assigns_timestamp_and_success() {
        let mut gw = gateway();
        let saved = match gw.insert_event(NewCravingEvent::new(None, "chips", "Water", false)) {
            SaveOutcome::Saved(ev) => ev,
            SaveOutcome::NotSaved(e) => panic!("unexpected failure: {e}"),
        };

        assert_eq!(saved.craving_item, "chips");
        assert!(saved.success);
        assert_eq!(gw.repository().audit_entries().len(), 1);
    }

    #[test]
    fn insert_rejects_blank_craving_without_touching_the_store() {
        let mut gw = gateway();
        let outcome = gw.insert_event(NewCravingEvent::new(None, "  ", "Water", false));

        assert!(matches!(
            outcome,
            SaveOutcome::NotSaved(AppError::Validation(_))
        ));
        assert!(gw.list_events(None).events.is_empty());
    }

    #[test]
    fn write_failure_is_reported_as_not_saved() {
        let mut gw = Gateway::new(MemoryRepository::new().failing_writes());
        let outcome = gw.insert_event(NewCravingEvent::new(None, "cake", "Water", false));

        assert!(matches!(outcome, SaveOutcome::NotSaved(AppError::Backend(_))));
    }

    #[test]
    fn read_failure_falls_back_to_empty_list() {
        let mut gw = Gateway::new(MemoryRepository::new().failing_reads());
        let fetched = gw.list_events(None);

        assert!(fetched.events.is_empty());
        assert!(matches!(fetched.error, Some(AppError::Backend(_))));
    }

    #[test]
    fn list_filters_by_owner() {
        let mut gw = gateway();
        gw.insert_event(NewCravingEvent::new(Some(1), "chips", "Water", false));
        gw.insert_event(NewCravingEvent::new(Some(2), "cake", "Water", true));
        gw.insert_event(NewCravingEvent::new(None, "pizza", "Water", false));

        let mine = gw.list_events(Some(1)).events;
        assert_eq!(mine.len(), 1);
        assert_eq!(mine[0].craving_item, "chips");

        let anonymous = gw.list_events(None).events;
        assert_eq!(anonymous.len(), 1);
        assert_eq!(anonymous[0].craving_item, "pizza");
    }

    #[test]
    fn register_validates_input() {
        let mut gw = gateway();

        assert!(matches!(
            gw.register("nobody", "pw", "pw"),
            AuthOutcome::Rejected(AppError::Validation(_))
        ));
        assert!(matches!(
            gw.register("a@b.io", "pw", "other"),
            AuthOutcome::Rejected(AppError::Validation(_))
        ));
    }

    #[test]
    fn register_then_authenticate() {
        let mut gw = gateway();

        let id = match gw.register(" Me@Example.com ", "pw", "pw") {
            AuthOutcome::SignedIn(identity) => identity,
            AuthOutcome::Rejected(e) => panic!("register failed: {e}"),
        };
        assert_eq!(id.email, "me@example.com");

        assert!(matches!(
            gw.register("me@example.com", "pw", "pw"),
            AuthOutcome::Rejected(AppError::Auth(_))
        ));
        assert!(matches!(
            gw.authenticate("me@example.com", "nope"),
            AuthOutcome::Rejected(AppError::Auth(_))
        ));
        assert!(matches!(
            gw.authenticate("ME@example.com", "pw"),
            AuthOutcome::SignedIn(ref i) if i.id == id.id
        ));
    }

    #[test]
    fn unknown_user_cannot_sign_in() {
        let mut gw = gateway();
        assert!(matches!(
            gw.authenticate("ghost@example.com", "pw"),
            AuthOutcome::Rejected(AppError::Auth(_))
        ));
    }
}
