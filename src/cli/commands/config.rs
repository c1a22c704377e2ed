use crate::cli::parser::Commands;
use crate::config::{Config, migrate};
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};
use std::fs;
use std::process::Command;

const MASK: &str = "********";

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
        migrate: run_migrate,
        edit_config,
        editor,
    } = cmd
    {
        let path = Config::config_file();

        // ---- PRINT CONFIG ----
        if *print_config {
            let mut shown = cfg.clone();
            shown.credentials.password = MASK.to_string();
            println!("📄 Current configuration:\n");
            println!("{}", serde_yaml::to_string(&shown)?);
        }

        // ---- CHECK CONFIG ----
        if *check {
            let content = if path.exists() {
                fs::read_to_string(&path)?
            } else {
                String::new()
            };
            let missing = migrate::missing_keys(&content)?;
            if missing.is_empty() {
                success(format!("{} is up to date", path.display()));
            } else {
                warning(format!("{} lacks {} key(s):", path.display(), missing.len()));
                for k in &missing {
                    println!("   - {k}");
                }
                info("Run `sehatkan config --migrate` to add them with default values.");
            }
        }

        // ---- MIGRATE CONFIG ----
        if *run_migrate {
            let added = migrate::migrate_file(&path)?;
            if added.is_empty() {
                info("Nothing to migrate.");
            } else {
                success(format!(
                    "Added {} key(s) to {}: {}",
                    added.len(),
                    path.display(),
                    added.join(", ")
                ));
            }
        }

        // ---- EDIT CONFIG ----
        if *edit_config {
            let default_editor = std::env::var("EDITOR")
                .or_else(|_| std::env::var("VISUAL"))
                .unwrap_or_else(|_| {
                    if cfg!(target_os = "windows") {
                        "notepad".to_string()
                    } else {
                        "nano".to_string()
                    }
                });

            let editor_to_use = editor.clone().unwrap_or_else(|| default_editor.clone());

            match Command::new(&editor_to_use).arg(&path).status() {
                Ok(s) if s.success() => {
                    success(format!(
                        "Configuration file edited successfully using '{editor_to_use}'"
                    ));
                }
                _ => {
                    warning(format!(
                        "Editor '{editor_to_use}' not available, falling back to '{default_editor}'"
                    ));

                    match Command::new(&default_editor).arg(&path).status() {
                        Ok(s) if s.success() => {
                            success(format!(
                                "Configuration file edited successfully using fallback '{default_editor}'"
                            ));
                        }
                        _ => {
                            crate::ui::messages::error(format!(
                                "Failed to edit configuration file using fallback '{default_editor}'"
                            ));
                        }
                    }
                }
            }
        }
    }

    Ok(())
}
