use super::row_set::RowRef;
use crate::errors::{AppError, AppResult};
use crate::provider::ContentValues;
use crate::utils::date::millis_to_date_string;

pub const ID: &str = "_id";
pub const BOX_KEY: &str = "box_key";
pub const OBS_DATE: &str = "obs_date";
pub const PROBLEM: &str = "problem";
pub const EGGS_LAID: &str = "eggs_laid";
pub const EGGS_MISSING: &str = "eggs_missing";
pub const EGGS_DESTROYED: &str = "eggs_destroyed";
pub const EGGS_NON_VIABLE: &str = "eggs_non_viable";

/// One recorded visit to a box.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Observation {
    pub id: i64,
    pub box_key: i64,
    pub obs_date: i64, // ms since epoch
    pub problem: Option<String>,
    pub eggs_laid: Option<i64>,
    pub eggs_missing: Option<i64>,
    pub eggs_destroyed: Option<i64>,
    pub eggs_non_viable: Option<i64>,
}

impl Observation {
    pub fn from_row(row: &RowRef<'_>) -> AppResult<Self> {
        let required = |col: &str| {
            row.get_i64(col)
                .ok_or_else(|| AppError::InvalidValue(format!("observation row without {}", col)))
        };

        Ok(Self {
            id: required(ID)?,
            box_key: required(BOX_KEY)?,
            obs_date: required(OBS_DATE)?,
            problem: row.get_text(PROBLEM).map(str::to_string),
            eggs_laid: row.get_i64(EGGS_LAID),
            eggs_missing: row.get_i64(EGGS_MISSING),
            eggs_destroyed: row.get_i64(EGGS_DESTROYED),
            eggs_non_viable: row.get_i64(EGGS_NON_VIABLE),
        })
    }

    /// Values for inserting this observation; the id is left to the engine
    /// and absent counts are not sent.
    pub fn to_values(&self) -> ContentValues {
        let mut values = ContentValues::new();
        values.put(BOX_KEY, self.box_key).put(OBS_DATE, self.obs_date);

        if let Some(p) = &self.problem {
            values.put(PROBLEM, p.clone());
        }

        let counts = [
            (EGGS_LAID, self.eggs_laid),
            (EGGS_MISSING, self.eggs_missing),
            (EGGS_DESTROYED, self.eggs_destroyed),
            (EGGS_NON_VIABLE, self.eggs_non_viable),
        ];
        for (col, count) in counts {
            if let Some(n) = count {
                values.put(col, n);
            }
        }
        values
    }

    pub fn date_str(&self, format: &str) -> String {
        millis_to_date_string(self.obs_date, format)
    }
}
