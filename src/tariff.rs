pub mod band;
pub mod error;
pub mod schedule;
pub mod table;

pub use self::{band::Band, error::InvalidHour, schedule::Schedule, table::RateTable};
