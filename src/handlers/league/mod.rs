pub mod game_handler;
pub mod league_handler;
