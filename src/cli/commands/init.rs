use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::journal::record;
use crate::db::schema::{current_version, latest_version};
use crate::errors::AppResult;
use crate::provider::DataProvider;
use crate::ui::messages::success;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and file (skipped in test mode)
///  - the SQLite database and its schema
pub fn handle(cli: &Cli) -> AppResult<()> {
    let cfg = Config::init_all(cli.db.as_deref(), cli.test)?;
    let db_path = cfg.database_path();

    println!("⚙️  Initializing bluebird…");
    if !cli.test {
        println!("📄 Config file : {}", Config::config_file().display());
    }
    println!("🗄️  Database   : {}", db_path.display());

    let mut provider = DataProvider::new(&db_path);
    let version = {
        let conn = provider.pool().readable()?;
        current_version(conn)?
    };

    success(format!(
        "Database initialized at {} (schema version {}/{})",
        db_path.display(),
        version,
        latest_version()
    ));

    record(
        &mut provider,
        "init",
        &db_path.to_string_lossy(),
        "Database initialized",
    );

    Ok(())
}
