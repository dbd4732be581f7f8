pub mod dashboard;
pub mod games;
pub mod league;
pub mod lifecycle;
pub mod standings;
pub mod validation;
