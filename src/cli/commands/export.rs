use crate::cli::parser::Commands;
use crate::cli::session::Session;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::gateway::Repository;
use crate::ui::messages::warning;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        force,
    } = cmd
    {
        let mut session = Session::open(cfg)?;

        ExportLogic::export(&session.workflow.history, *format, file, *force)?;

        if let Err(e) = session.gateway.repository_mut().audit(
            "export",
            format.as_str(),
            &format!("{} rows exported to {file}", session.workflow.history.len()),
        ) {
            warning(format!("Failed to write internal log: {e}"));
        }

        session.close()?;
    }
    Ok(())
}
