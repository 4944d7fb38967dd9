//! One CLI invocation = one refresh cycle: load the saved workflow, re-derive
//! its history from the store, apply at most one command, save it back.

use crate::config::Config;
use crate::core::session::SessionFile;
use crate::core::workflow::{Command, SessionWorkflow};
use crate::db::SqliteRepository;
use crate::errors::AppResult;
use crate::gateway::Gateway;
use crate::ui::messages::notice;

pub struct Session {
    pub gateway: Gateway<SqliteRepository>,
    pub workflow: SessionWorkflow,
    file: SessionFile,
}

impl Session {
    pub fn open(cfg: &Config) -> AppResult<Self> {
        let mut gateway = Gateway::new(SqliteRepository::open(&cfg.database)?);
        let file = SessionFile::for_database(&cfg.database);

        let loaded = file.load().refresh(&mut gateway);
        loaded.notices.iter().for_each(notice);

        Ok(Self {
            gateway,
            workflow: loaded.workflow,
            file,
        })
    }

    /// Run one transition and print its notices. Returns `true` when nothing went wrong.
    pub fn apply(&mut self, command: Command) -> bool {
        let current = std::mem::take(&mut self.workflow);
        let transition = current.apply(command, &mut self.gateway);

        transition.notices.iter().for_each(notice);
        let ok = transition.problems().next().is_none();

        self.workflow = transition.workflow;
        ok
    }

    pub fn close(self) -> AppResult<()> {
        self.file.save(&self.workflow)
    }
}
