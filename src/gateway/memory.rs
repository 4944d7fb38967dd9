//! In-memory implementation of `Repository`.
//!
//! Everything is lost when the value is dropped. Used by the workflow and
//! gateway tests; the failure switches simulate an unreachable backend.

use super::Repository;
use crate::errors::{AppError, AppResult};
use crate::models::{CravingEvent, Identity, NewCravingEvent};

#[derive(Debug, Default)]
pub struct MemoryRepository {
    events: Vec<CravingEvent>,
    users: Vec<(Identity, String)>,
    log: Vec<(String, String, String)>,
    fail_reads: bool,
    fail_writes: bool,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_reads(mut self) -> Self {
        self.fail_reads = true;
        self
    }

    pub fn failing_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    pub fn set_fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    pub fn stored_events(&self) -> &[CravingEvent] {
        &self.events
    }

    /// (operation, target, message) triples in insertion order.
    pub fn audit_entries(&self) -> &[(String, String, String)] {
        &self.log
    }

    fn unavailable(what: &str) -> AppError {
        AppError::Backend(format!("store unavailable while {what}"))
    }
}

impl Repository for MemoryRepository {
    fn insert_event(&mut self, event: &NewCravingEvent) -> AppResult<CravingEvent> {
        if self.fail_writes {
            return Err(Self::unavailable("inserting"));
        }
        let id = self.events.len() as i64 + 1;
        let stored = event.clone().into_event(id);
        self.events.push(stored.clone());
        Ok(stored)
    }

    fn list_events(&mut self, user_id: Option<i64>) -> AppResult<Vec<CravingEvent>> {
        if self.fail_reads {
            return Err(Self::unavailable("reading"));
        }
        let mut out: Vec<CravingEvent> = self
            .events
            .iter()
            .filter(|ev| ev.user_id == user_id)
            .cloned()
            .collect();
        out.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(out)
    }

    fn create_user(&mut self, email: &str, password_hash: &str) -> AppResult<Identity> {
        if self.fail_writes {
            return Err(Self::unavailable("creating user"));
        }
        if self.users.iter().any(|(u, _)| u.email == email) {
            return Err(AppError::Auth(format!("an account for {email} already exists")));
        }
        let identity = Identity::new(self.users.len() as i64 + 1, email);
        self.users.push((identity.clone(), password_hash.to_string()));
        Ok(identity)
    }

    fn find_user(&mut self, email: &str) -> AppResult<Option<(Identity, String)>> {
        if self.fail_reads {
            return Err(Self::unavailable("looking up user"));
        }
        Ok(self.users.iter().find(|(u, _)| u.email == email).cloned())
    }

    fn audit(&mut self, operation: &str, target: &str, message: &str) -> AppResult<()> {
        self.log
            .push((operation.to_string(), target.to_string(), message.to_string()));
        Ok(())
    }
}
