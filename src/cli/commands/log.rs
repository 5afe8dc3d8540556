use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::load_journal;
use crate::errors::AppResult;
use crate::provider::DataProvider;
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::Log { print: true }) {
        let mut provider = DataProvider::new(cfg.database_path());
        let entries = load_journal(provider.pool().readable()?)?;

        if entries.is_empty() {
            println!("Journal is empty.");
            return Ok(());
        }

        let mut table = Table::new(
            ["id", "date", "operation", "target", "message"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        );
        for e in entries {
            table.add_row(vec![e.id.to_string(), e.date, e.operation, e.target, e.message]);
        }
        print!("{}", table.render());
    }

    Ok(())
}
