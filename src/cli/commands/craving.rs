use crate::cli::parser::Commands;
use crate::cli::session::Session;
use crate::config::Config;
use crate::core::workflow::Command;
use crate::errors::AppResult;
use crate::ui::messages::{problem, warning};
use crate::ui::render;

/// Handle the workflow commands: draft, crave, suggest, choose, cancel, clear, status.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let mut session = Session::open(cfg)?;

    match cmd {
        Commands::Draft { text } => {
            session.apply(Command::SetDraft(text.join(" ")));
        }

        Commands::Crave { text } => {
            let text = (!text.is_empty()).then(|| text.join(" "));
            if session.apply(Command::Submit(text)) {
                show_suggestions(&session);
            }
        }

        Commands::Suggest => {
            if session.workflow.state.craving().is_some() {
                show_suggestions(&session);
            } else {
                warning("No craving is logged. Start with `cravings crave <TEXT>`.");
            }
        }

        Commands::Choose { action, pick, ate } => {
            let text = action.join(" ");
            let suggestions = session.workflow.view().suggestions;

            // With no craving in flight the workflow rejects the command itself.
            let resolved = match (pick, suggestions) {
                (Some(n), Some(s)) => s.pick(*n, Some(text.as_str())),
                _ => Ok(text),
            };

            match resolved {
                Ok(action) => {
                    session.apply(Command::Choose {
                        action,
                        did_eat_craved: *ate,
                    });
                }
                Err(e) => problem(&e),
            }
        }

        Commands::Cancel => {
            session.apply(Command::Cancel);
        }

        Commands::Clear => {
            session.apply(Command::ClearInput);
        }

        Commands::Status => render::status(&session.workflow.view()),

        _ => {}
    }

    session.close()
}

fn show_suggestions(session: &Session) {
    if let Some(s) = session.workflow.view().suggestions {
        render::suggestions_menu(&s.options(), s.category.label());
        println!("Use `cravings choose --pick <N>` (add --ate if you gave in).");
    }
}
