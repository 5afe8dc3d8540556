pub mod boxes;
pub mod journal;
pub mod observations;
