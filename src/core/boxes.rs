use crate::core::journal::record;
use crate::errors::{AppError, AppResult};
use crate::models::nest_box::NestBox;
use crate::models::observation::Observation;
use crate::provider::DataProvider;
use crate::provider::uri::{all_boxes_uri, box_observations_uri, box_uri};

pub struct BoxLogic;

impl BoxLogic {
    /// Add a box and return its URI.
    pub fn add(provider: &mut DataProvider, box_number: &str) -> AppResult<String> {
        let box_number = box_number.trim();
        if box_number.is_empty() {
            return Err(AppError::InvalidValue("box number must not be empty".into()));
        }

        let uri = provider.insert(&all_boxes_uri(), &NestBox::new_values(box_number))?;
        record(provider, "insert", &uri, &format!("Added box {}", box_number));
        Ok(uri)
    }

    /// Every box, ordered by id.
    pub fn list(provider: &mut DataProvider) -> AppResult<Vec<NestBox>> {
        let rows = provider.query(&all_boxes_uri(), None, None, &[], None)?;
        rows.rows().map(|r| NestBox::from_row(&r)).collect()
    }

    /// A box with its observations, newest first.
    pub fn show(provider: &mut DataProvider, id: i64) -> AppResult<(NestBox, Vec<Observation>)> {
        let rows = provider.query(&box_uri(id), None, None, &[], None)?;
        let nest_box = match rows.row(0) {
            Some(r) => NestBox::from_row(&r)?,
            None => return Err(AppError::NotFound(format!("box {}", id))),
        };

        let obs_rows = provider.query(&box_observations_uri(id), None, None, &[], None)?;
        let observations = obs_rows
            .rows()
            .map(|r| Observation::from_row(&r))
            .collect::<AppResult<Vec<_>>>()?;

        Ok((nest_box, observations))
    }
}
