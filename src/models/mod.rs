pub mod nest_box;
pub mod observation;
pub mod row_set;
