use serde::{Deserialize, Serialize};

use super::{
    acquire_constants::{
        BOARD_COLS, BOARD_ROWS, END_GAME_CHAIN_SIZE, FOUNDING_CHAIN_SIZE, MAX_PLAYERS,
        MAX_STARTING_CASH, MIN_PLAYERS, SAFE_CHAIN_SIZE, SHARES_PER_BRAND, STARTING_CASH,
        STOCK_TO_BUY_PER_TURN, TILES_PER_HAND, VIABLE_CHAIN_SIZE,
    },
    errors::Rejection,
};

/// Rule parameters of one game. Every field defaults to the standard rules.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize, typed_builder::TypedBuilder)]
#[serde(default)]
pub struct GameConfig {
    #[builder(default = SAFE_CHAIN_SIZE)]
    pub safe_chain_size: usize,
    #[builder(default = END_GAME_CHAIN_SIZE)]
    pub end_game_chain_size: usize,
    /// The game may end once every active chain is at least this large.
    #[builder(default = VIABLE_CHAIN_SIZE)]
    pub viable_chain_size: usize,
    #[builder(default = FOUNDING_CHAIN_SIZE)]
    pub founding_chain_size: usize,
    #[builder(default = STOCK_TO_BUY_PER_TURN)]
    pub max_purchase_per_turn: u32,
    #[builder(default = SHARES_PER_BRAND)]
    pub shares_per_brand: u32,
    #[builder(default = STARTING_CASH)]
    pub starting_cash: u32,
    #[builder(default = TILES_PER_HAND)]
    pub tiles_per_hand: usize,
    #[builder(default = MIN_PLAYERS)]
    pub min_players: usize,
    #[builder(default = MAX_PLAYERS)]
    pub max_players: usize,
    /// Place one drawn tile per player on the board at start.
    #[builder(default = true)]
    pub seed_board: bool,
    /// Award a free share to whoever founds a chain.
    #[builder(default = true)]
    pub founder_share: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl GameConfig {
    /// Rejects overrides the engine cannot play safely. The purchase cap and
    /// share pools may be lowered but never raised.
    pub fn validate(&self) -> Result<(), Rejection> {
        let board_size = BOARD_ROWS * BOARD_COLS;
        let malformed = |reason: &str| -> Result<(), Rejection> {
            Err(Rejection::Malformed(format!("config: {}", reason)))
        };

        if !(1..=STOCK_TO_BUY_PER_TURN).contains(&self.max_purchase_per_turn) {
            return malformed(&format!("max_purchase_per_turn must be 1 to {}", STOCK_TO_BUY_PER_TURN));
        }
        if !(1..=SHARES_PER_BRAND).contains(&self.shares_per_brand) {
            return malformed(&format!("shares_per_brand must be 1 to {}", SHARES_PER_BRAND));
        }
        if self.starting_cash > MAX_STARTING_CASH {
            return malformed(&format!("starting_cash may be at most {}", MAX_STARTING_CASH));
        }
        if self.founding_chain_size < FOUNDING_CHAIN_SIZE
            || self.founding_chain_size > self.viable_chain_size
            || self.viable_chain_size > self.end_game_chain_size
            || self.founding_chain_size > self.safe_chain_size
            || self.safe_chain_size > self.end_game_chain_size
            || self.end_game_chain_size > board_size
        {
            return malformed("chain sizes must rise from founding through viable and safe to end game");
        }
        if self.min_players < MIN_PLAYERS
            || self.max_players > MAX_PLAYERS
            || self.min_players > self.max_players
        {
            return malformed(&format!("player limits must lie within {} to {}", MIN_PLAYERS, MAX_PLAYERS));
        }
        // every rack plus one starting tile per seat must come out of the bag
        let dealt = self
            .tiles_per_hand
            .checked_add(1)
            .and_then(|per_seat| per_seat.checked_mul(self.max_players));
        if self.tiles_per_hand == 0 || dealt.map_or(true, |dealt| dealt > board_size) {
            return malformed("tiles_per_hand does not fit the tile bag");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_standard_rules() {
        let config = GameConfig::default();
        assert_eq!(config.safe_chain_size, 11);
        assert_eq!(config.end_game_chain_size, 41);
        assert_eq!(config.max_purchase_per_turn, 3);
        assert_eq!(config.shares_per_brand, 25);
        assert_eq!(config.starting_cash, 6000);
        assert!(config.seed_board);
    }

    #[test]
    fn test_builder_overrides() {
        let config = GameConfig::builder().seed_board(false).tiles_per_hand(2).build();
        assert!(!config.seed_board);
        assert_eq!(config.tiles_per_hand, 2);
        assert_eq!(config.min_players, 2);
    }

    #[test]
    fn test_validate() {
        assert_eq!(GameConfig::default().validate(), Ok(()));
        assert_eq!(
            GameConfig::builder().max_purchase_per_turn(2).shares_per_brand(10).build().validate(),
            Ok(())
        );

        let unsafe_configs = [
            GameConfig::builder().max_purchase_per_turn(4).build(),
            GameConfig::builder().max_purchase_per_turn(0).build(),
            GameConfig::builder().shares_per_brand(26).build(),
            GameConfig::builder().starting_cash(u32::MAX - 100).build(),
            GameConfig::builder().safe_chain_size(50).build(),
            GameConfig::builder().founding_chain_size(1).build(),
            GameConfig::builder().end_game_chain_size(200).build(),
            GameConfig::builder().max_players(7).build(),
            GameConfig::builder().min_players(4).max_players(3).build(),
            GameConfig::builder().tiles_per_hand(0).build(),
            GameConfig::builder().tiles_per_hand(usize::MAX).build(),
        ];
        for config in unsafe_configs {
            assert!(
                matches!(config.validate(), Err(Rejection::Malformed(_))),
                "accepted {:?}",
                config
            );
        }
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config: GameConfig = serde_json::from_str(r#"{"founder_share": false}"#).unwrap();
        assert!(!config.founder_share);
        assert_eq!(config.tiles_per_hand, 6);
    }
}
