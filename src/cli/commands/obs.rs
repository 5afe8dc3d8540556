use crate::cli::parser::{Commands, ObsAction};
use crate::config::Config;
use crate::core::observations::ObservationLogic;
use crate::errors::{AppError, AppResult};
use crate::models::observation::Observation;
use crate::provider::DataProvider;
use crate::ui::messages::success;
use crate::utils::date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Obs { action } = cmd else {
        return Ok(());
    };

    match action {
        ObsAction::Add {
            box_id,
            date: date_str,
            problem,
            laid,
            missing,
            destroyed,
            non_viable,
        } => {
            let day = match date_str {
                Some(s) => date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?,
                None => date::today(),
            };

            let obs = Observation {
                box_key: *box_id,
                obs_date: date::date_to_millis(day),
                problem: problem.clone().filter(|p| !p.trim().is_empty()),
                eggs_laid: *laid,
                eggs_missing: *missing,
                eggs_destroyed: *destroyed,
                eggs_non_viable: *non_viable,
                ..Observation::default()
            };

            let mut provider = DataProvider::new(cfg.database_path());
            let uri = ObservationLogic::add(&mut provider, &obs)?;
            success(format!("Observation for box {} on {} recorded: {}", box_id, day, uri));
        }
    }

    Ok(())
}
