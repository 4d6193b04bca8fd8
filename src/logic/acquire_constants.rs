pub const BOARD_ROWS: usize = 9;
pub const BOARD_COLS: usize = 12;

// a chain this size or larger can no longer be acquired
pub const SAFE_CHAIN_SIZE: usize = 11;
pub const END_GAME_CHAIN_SIZE: usize = 41;
pub const VIABLE_CHAIN_SIZE: usize = 7;
pub const FOUNDING_CHAIN_SIZE: usize = 2;

pub const STOCK_TO_BUY_PER_TURN: u32 = 3;
pub const SHARES_PER_BRAND: u32 = 25;
pub const STARTING_CASH: u32 = 6000;
// keeps every payout well inside a u32
pub const MAX_STARTING_CASH: u32 = 1_000_000;
pub const TILES_PER_HAND: usize = 6;

pub const MIN_PLAYERS: usize = 2;
pub const MAX_PLAYERS: usize = 6;

// acquired shares traded per surviving share
pub const TRADE_RATIO: u32 = 2;

// split bonuses are floored to this unit, the remainder stays with the bank
pub const BONUS_ROUNDING: u32 = 100;
