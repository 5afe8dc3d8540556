use super::row_set::RowRef;
use crate::errors::{AppError, AppResult};
use crate::provider::ContentValues;

pub const ID: &str = "_id";
pub const BOX_NUMBER: &str = "box_number";

/// A monitored nesting box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NestBox {
    pub id: i64,
    /// Label painted on the box; shown in lists.
    pub box_number: String,
}

impl NestBox {
    pub fn from_row(row: &RowRef<'_>) -> AppResult<Self> {
        Ok(Self {
            id: row
                .get_i64(ID)
                .ok_or_else(|| AppError::InvalidValue(format!("box row without {}", ID)))?,
            box_number: row
                .get(BOX_NUMBER)
                .map(crate::models::row_set::value_to_string)
                .ok_or_else(|| AppError::InvalidValue(format!("box row without {}", BOX_NUMBER)))?,
        })
    }

    /// Values for inserting a new box.
    pub fn new_values(box_number: &str) -> ContentValues {
        let mut values = ContentValues::new();
        values.put(BOX_NUMBER, box_number.to_string());
        values
    }
}
