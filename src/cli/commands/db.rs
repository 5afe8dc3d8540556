use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::stats;
use crate::errors::AppResult;
use crate::provider::DataProvider;
use crate::ui::messages::{error, info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Db {
        check,
        vacuum,
        info: show_info,
    } = cmd
    {
        let mut provider = DataProvider::new(cfg.database_path());

        if *show_info {
            stats::print_db_info(provider.pool(), &cfg.date_format)?;
        }

        if *check {
            info("Running integrity check…");
            let integrity: String = provider
                .pool()
                .readable()?
                .query_row("PRAGMA integrity_check;", [], |row| row.get(0))?;

            if integrity == "ok" {
                success("Integrity check passed.");
            } else {
                error(format!("Integrity check failed: {}", integrity));
            }
        }

        if *vacuum {
            info("Running VACUUM…");
            provider.pool().writable()?.execute_batch("VACUUM;")?;
            success("Vacuum completed.");
        }
    }

    Ok(())
}
