//! Generic structures and procedures, not specific to functional dependencies.

pub mod power_set;
