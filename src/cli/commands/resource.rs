//! Generic commands addressed purely by resource URI.

use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::journal::record;
use crate::errors::{AppError, AppResult};
use crate::provider::values::parse_value;
use crate::provider::{ContentValues, DataProvider};
use crate::ui::messages::success;
use crate::utils::table::Table;
use rusqlite::types::Value;

fn parse_args(args: &[String]) -> Vec<Value> {
    args.iter().map(|a| parse_value(a)).collect()
}

fn parse_assignments(set: &[String]) -> AppResult<ContentValues> {
    let mut values = ContentValues::new();
    for assignment in set {
        values.put_assignment(assignment)?;
    }
    Ok(values)
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let mut provider = DataProvider::new(cfg.database_path());

    match cmd {
        Commands::Type { uri } => {
            println!("{}", provider.get_type(uri)?);
        }

        Commands::Query {
            uri,
            columns,
            selection,
            args,
            sort,
            json,
        } => {
            let projection: Vec<&str> = columns.iter().map(String::as_str).collect();
            let projection = (!projection.is_empty()).then_some(projection.as_slice());

            let rows = provider.query(
                uri,
                projection,
                selection.as_deref(),
                &parse_args(args),
                *sort,
            )?;

            if *json {
                let text = serde_json::to_string_pretty(&rows.to_json())
                    .map_err(|e| AppError::Other(e.to_string()))?;
                println!("{}", text);
            } else if rows.is_empty() {
                println!("No rows for {}", uri);
            } else {
                print!("{}", Table::from_row_set(&rows).render());
                println!("({} rows)", rows.len());
            }
        }

        Commands::Insert { uri, set } => {
            let values = parse_assignments(set)?;
            let new_uri = provider.insert(uri, &values)?;
            record(&mut provider, "insert", &new_uri, &format!("Inserted through {}", uri));
            success(format!("Inserted {}", new_uri));
        }

        Commands::Update {
            uri,
            set,
            selection,
            args,
        } => {
            let values = parse_assignments(set)?;
            let changed = provider.update(uri, &values, selection.as_deref(), &parse_args(args))?;
            record(&mut provider, "update", uri, &format!("{} row(s) updated", changed));
            success(format!("{} row(s) updated", changed));
        }

        Commands::Delete {
            uri,
            selection,
            args,
        } => {
            let deleted = provider.delete(uri, selection.as_deref(), &parse_args(args))?;
            record(&mut provider, "delete", uri, &format!("{} row(s) deleted", deleted));
            success(format!("{} row(s) deleted", deleted));
        }

        _ => {}
    }

    Ok(())
}
