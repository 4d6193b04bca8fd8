pub mod game_session;
pub mod identity;
pub mod lobby;
