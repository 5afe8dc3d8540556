use crate::core::journal::record;
use crate::errors::{AppError, AppResult};
use crate::models::observation::Observation;
use crate::provider::DataProvider;
use crate::provider::uri::{all_observations_uri, box_uri};

pub struct ObservationLogic;

impl ObservationLogic {
    /// Record a visit and return the new observation's URI.
    ///
    /// The box must exist; egg counts cannot be negative.
    pub fn add(provider: &mut DataProvider, obs: &Observation) -> AppResult<String> {
        let counts = [
            obs.eggs_laid,
            obs.eggs_missing,
            obs.eggs_destroyed,
            obs.eggs_non_viable,
        ];
        if counts.iter().flatten().any(|n| *n < 0) {
            return Err(AppError::InvalidValue("egg counts must not be negative".into()));
        }

        let found = provider.query(&box_uri(obs.box_key), Some(&["_id"][..]), None, &[], None)?;
        if found.is_empty() {
            return Err(AppError::NotFound(format!("box {}", obs.box_key)));
        }

        let uri = provider.insert(&all_observations_uri(), &obs.to_values())?;
        record(
            provider,
            "insert",
            &uri,
            &format!("Recorded observation for box {}", obs.box_key),
        );
        Ok(uri)
    }
}
