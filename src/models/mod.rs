pub mod common;
pub mod league;
pub mod matches;
