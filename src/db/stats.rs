use crate::db::pool::{DbLocation, DbPool};
use crate::db::queries::count_rows;
use crate::errors::AppResult;
use crate::provider::uri::{BOX_TABLE, OBSERVATION_TABLE};
use crate::utils::date::millis_to_date_string;
use ansi_term::Colour::{Cyan, Green, Yellow};
use ansi_term::Style;
use std::fs;

/// Summary of a store, as shown by `db --info`.
#[derive(Debug, Clone, PartialEq)]
pub struct DbInfo {
    pub file_size: u64,
    pub boxes: i64,
    pub observations: i64,
    pub first_obs_date: Option<i64>,
    pub last_obs_date: Option<i64>,
}

pub fn collect_db_info(pool: &mut DbPool) -> AppResult<DbInfo> {
    let file_size = match pool.location() {
        DbLocation::File(p) => fs::metadata(p).map(|m| m.len()).unwrap_or(0),
        DbLocation::Memory => 0,
    };

    let conn = pool.readable()?;
    let boxes = count_rows(conn, BOX_TABLE)?;
    let observations = count_rows(conn, OBSERVATION_TABLE)?;
    let (first_obs_date, last_obs_date): (Option<i64>, Option<i64>) = conn.query_row(
        "SELECT MIN(obs_date), MAX(obs_date) FROM Observation",
        [],
        |row| Ok((row.get(0)?, row.get(1)?)),
    )?;

    Ok(DbInfo {
        file_size,
        boxes,
        observations,
        first_obs_date,
        last_obs_date,
    })
}

pub fn print_db_info(pool: &mut DbPool, date_format: &str) -> AppResult<()> {
    let info = collect_db_info(pool)?;
    let label = |s: &str| Cyan.paint(format!("• {}:", s));
    let dim = Style::new().dimmed().paint("--").to_string();

    println!();
    println!("{} {}", label("File"), Yellow.paint(pool.location().display()));
    println!(
        "{} {:.2} MB",
        label("Size"),
        info.file_size as f64 / (1024.0 * 1024.0)
    );
    println!("{} {}", label("Boxes"), Green.paint(info.boxes.to_string()));
    println!(
        "{} {}",
        label("Observations"),
        Green.paint(info.observations.to_string())
    );

    let fmt = |d: Option<i64>| {
        d.map(|ms| millis_to_date_string(ms, date_format))
            .unwrap_or_else(|| dim.clone())
    };
    println!("{}", label("Observation range"));
    println!("    from: {}", fmt(info.first_obs_date));
    println!("    to:   {}", fmt(info.last_obs_date));
    println!();

    Ok(())
}
