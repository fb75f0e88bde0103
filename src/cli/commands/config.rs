use crate::Context;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::config::ConfigLogic;
use crate::errors::AppResult;
use crate::store::log::qlog_quiet;
use crate::ui::messages::{info, success, warning};

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, ctx: &Context) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
        migrate,
        edit_config,
        editor,
    } = cmd
    {
        let path = Config::config_file();

        // ---- PRINT CONFIG ----
        if *print_config {
            ConfigLogic::print(&ctx.cfg)?;
        }

        // ---- CHECK CONFIG ----
        if *check {
            let report = ConfigLogic::check(&path)?;
            if report.is_clean() {
                success(format!("{} is complete", path.display()));
            }
            for key in &report.missing {
                warning(format!("Missing field: {} (default will be used)", key));
            }
            for key in &report.unknown {
                info(format!("Unknown field ignored: {}", key));
            }
        }

        // ---- MIGRATE CONFIG ----
        if *migrate {
            let added = ConfigLogic::migrate(&path)?;
            if added.is_empty() {
                info("Configuration already up to date");
            } else {
                success(format!("Added fields: {}", added.join(", ")));
                qlog_quiet(
                    &ctx.activity_log(),
                    "config",
                    &path.to_string_lossy(),
                    &format!("Migrated: {}", added.join(", ")),
                );
            }
        }

        // ---- EDIT CONFIG ----
        if *edit_config {
            ConfigLogic::edit(&path, editor)?;
        }
    }

    Ok(())
}
