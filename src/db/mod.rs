pub mod helpers;
pub mod league_queries;
pub mod match_queries;
