use crate::cli::parser::Commands;
use crate::cli::session::Session;
use crate::config::Config;
use crate::core::workflow::Command;
use crate::errors::AppResult;
use std::io::{self, Write};

/// Handle register / login / logout.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let mut session = Session::open(cfg)?;

    match cmd {
        Commands::Register {
            email,
            password,
            confirm,
        } => {
            let password = secret_or_prompt(password, "Password")?;
            let confirm = secret_or_prompt(confirm, "Confirm password")?;
            session.apply(Command::Register {
                email: email.clone(),
                password,
                confirm,
            });
        }

        Commands::Login { email, password } => {
            let password = secret_or_prompt(password, "Password")?;
            session.apply(Command::SignIn {
                email: email.clone(),
                password,
            });
        }

        Commands::Logout => {
            session.apply(Command::SignOut);
        }

        _ => {}
    }

    session.close()
}

fn secret_or_prompt(given: &Option<String>, prompt: &str) -> AppResult<String> {
    if let Some(value) = given {
        return Ok(value.clone());
    }

    // plain stdin read: the terminal echoes what is typed
    print!("{prompt} (input is visible): ");
    io::stdout().flush().ok();

    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
