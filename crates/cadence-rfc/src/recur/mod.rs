//! `RRULE` rendering and rule-set construction.

mod build;
mod set;

pub use build::{dtstart, last_inclusive_instant, to_rrule_string, to_rruleset_string};
pub use set::build_rrule_set;
