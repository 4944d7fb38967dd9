use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{error, success, warning};
use std::path::Path;
use std::process::Command;

/// Handle `config --print` / `config --edit`.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Config {
        print_config,
        edit_config,
        editor,
    } = cmd
    else {
        return Ok(());
    };

    let path = Config::config_file();

    if *print_config {
        println!("📄 Current configuration ({}):\n", path.display());
        println!("{}", serde_yaml::to_string(cfg)?);
    }

    if *edit_config {
        if !path.exists() {
            warning(format!(
                "No configuration file at {}; run `cravings init` first.",
                path.display()
            ));
            return Ok(());
        }

        let fallback = system_editor();
        let chosen = editor.clone().unwrap_or_else(|| fallback.clone());

        let edited = open_in(&chosen, &path) || {
            warning(format!(
                "Editor '{chosen}' not available, falling back to '{fallback}'"
            ));
            chosen != fallback && open_in(&fallback, &path)
        };

        if !edited {
            error(format!("Could not open {} in an editor", path.display()));
            return Ok(());
        }

        // re-read so a broken edit is reported now rather than on the next command
        match Config::load_from(&path) {
            Ok(_) => success(format!("Configuration saved: {}", path.display())),
            Err(e) => error(e),
        }
    }

    Ok(())
}

/// $EDITOR, then $VISUAL, then the platform default.
fn system_editor() -> String {
    std::env::var("EDITOR")
        .or_else(|_| std::env::var("VISUAL"))
        .unwrap_or_else(|_| {
            if cfg!(target_os = "windows") {
                "notepad".to_string()
            } else {
                "nano".to_string()
            }
        })
}

fn open_in(editor: &str, path: &Path) -> bool {
    Command::new(editor)
        .arg(path)
        .status()
        .is_ok_and(|s| s.success())
}
