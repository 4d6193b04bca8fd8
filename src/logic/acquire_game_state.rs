use serde::{Deserialize, Serialize};

use super::{
    game_states::{buy_stock_state::BuyStockState, merge_state::MergerState},
    player::PlayerId,
};

/// The phase the acting player is in.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActionType {
    Place,
    Buy,
    Resolve,
    GameOver,
}

impl ActionType {
    pub fn describe(&self) -> &'static str {
        match self {
            ActionType::Place => "place a tile",
            ActionType::Buy => "buy stock",
            ActionType::Resolve => "resolve an acquisition",
            ActionType::GameOver => "finish the game",
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct Standing {
    pub player: PlayerId,
    pub display_name: String,
    pub money: u32,
}

/// Payload specific to the active phase.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
#[serde(tag = "phase", rename_all = "snake_case")]
pub enum ActionDetails {
    Buy(BuyStockState),
    Resolve(MergerState),
    GameOver { standings: Vec<Standing> },
}

#[derive(Debug, PartialEq, Eq, Clone, Default, Serialize, Deserialize)]
pub struct TurnState {
    /// Whose turn it is. Differs from the acting player while resolving.
    pub current_turn_player: Option<PlayerId>,
    pub current_action_player: Option<PlayerId>,
    /// `None` until the game starts.
    pub current_action_type: Option<ActionType>,
    pub current_action_details: Option<ActionDetails>,
}

impl TurnState {
    pub fn is_over(&self) -> bool {
        self.current_action_type == Some(ActionType::GameOver)
    }
}
