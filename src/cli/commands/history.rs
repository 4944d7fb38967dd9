use crate::cli::parser::Commands;
use crate::cli::session::Session;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::render;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let session = Session::open(cfg)?;
    let view = session.workflow.view();

    match cmd {
        Commands::History { limit, all } => {
            let limit = if *all {
                None
            } else {
                Some(limit.unwrap_or(cfg.history_limit))
            };
            render::history(view.history, limit, cfg);
        }
        Commands::Insights => render::insights(&view.insights, view.history, cfg),
        _ => {}
    }

    session.close()
}
