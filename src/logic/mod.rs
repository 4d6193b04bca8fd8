pub mod acquire_constants;
pub mod acquire_game;
pub mod acquire_game_state;
pub mod acquire_request;
pub mod acquire_response;
pub mod brand;
pub mod errors;
pub mod game_board;
pub mod game_config;
pub mod game_states;
pub mod player;
pub mod stock_market;
pub mod tile;
pub mod turn_engine;
pub mod view;
