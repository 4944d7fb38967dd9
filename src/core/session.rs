//! Workflow persistence between CLI invocations.
//!
//! Every command is a fresh process, so the workflow record (draft, state,
//! identity) is kept in a small YAML file next to the database. History is
//! not stored there: it is re-queried from the gateway on every run.

use crate::core::workflow::SessionWorkflow;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::warning;
use std::fs;
use std::path::{Path, PathBuf};

pub struct SessionFile {
    path: PathBuf,
}

impl SessionFile {
    /// Session file belonging to the database at `db_path`.
    pub fn for_database(db_path: &str) -> Self {
        Self {
            path: Path::new(db_path).with_extension("session.yml"),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Missing file → fresh workflow. An unreadable one is reported and replaced.
    pub fn load(&self) -> SessionWorkflow {
        if !self.path.exists() {
            return SessionWorkflow::default();
        }

        let parsed = fs::read_to_string(&self.path)
            .map_err(AppError::from)
            .and_then(|content| serde_yaml::from_str(&content).map_err(AppError::from));

        match parsed {
            Ok(wf) => wf,
            Err(e) => {
                warning(format!(
                    "Session file {} is unreadable ({e}); starting a new session",
                    self.path.display()
                ));
                SessionWorkflow::default()
            }
        }
    }

    pub fn save(&self, workflow: &SessionWorkflow) -> AppResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_yaml::to_string(workflow)?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::workflow::WorkflowState;
    use crate::models::Identity;

    #[test]
    fn round_trips_state_but_not_history() {
        let dir = tempfile::tempdir().unwrap();
        let db = dir.path().join("cravings.sqlite");
        let file = SessionFile::for_database(&db.to_string_lossy());

        let mut wf = SessionWorkflow::new(Some(Identity::new(3, "me@example.com")));
        wf.draft = "half".to_string();
        wf.state = WorkflowState::AwaitingAction {
            craving: "chips".to_string(),
        };
        file.save(&wf).unwrap();

        let loaded = file.load();
        assert_eq!(loaded.state, wf.state);
        assert_eq!(loaded.draft, "half");
        assert_eq!(loaded.identity, wf.identity);
        assert!(loaded.history.is_empty());
        assert!(file.path().ends_with("cravings.session.yml"));
    }

    #[test]
    fn garbage_file_gives_fresh_session() {
        let dir = tempfile::tempdir().unwrap();
        let db = dir.path().join("x.sqlite");
        let file = SessionFile::for_database(&db.to_string_lossy());
        fs::write(file.path(), "state: [not, a, state").unwrap();

        assert_eq!(file.load(), SessionWorkflow::default());
    }
}
