use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{
    acquire_constants::{BOARD_COLS, BOARD_ROWS},
    acquire_game::{GameId, GameState},
    acquire_game_state::{ActionDetails, ActionType},
    brand::Brand,
    game_board::{Chain, Space},
    player::{Player, PlayerId},
    tile::Tile,
};

/// What every observer may see of a player.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct PublicPlayer {
    pub id: PlayerId,
    pub display_name: String,
    pub money: u32,
    pub stocks: BTreeMap<Brand, u32>,
}

impl From<&Player> for PublicPlayer {
    fn from(player: &Player) -> Self {
        Self {
            id: player.id.clone(),
            display_name: player.display_name.clone(),
            money: player.money,
            stocks: player.stocks.clone(),
        }
    }
}

/// The shared snapshot published after every commit. Never contains racks.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct GameView {
    pub id: GameId,
    pub title: String,
    pub player_order: Vec<PlayerId>,
    pub players: BTreeMap<PlayerId, PublicPlayer>,
    pub grid: [[Space; BOARD_COLS]; BOARD_ROWS],
    pub chains: BTreeMap<Brand, Chain>,
    pub stock_availability: BTreeMap<Brand, u32>,
    pub active_brands: Vec<Brand>,
    pub inactive_brands: Vec<Brand>,
    pub current_turn_player: Option<PlayerId>,
    pub current_action_player: Option<PlayerId>,
    pub current_action_type: Option<ActionType>,
    pub current_action_details: Option<ActionDetails>,
    pub is_started: bool,
    pub most_recent_actions: Vec<String>,
    pub most_recently_placed_tile: Option<Tile>,
    pub tiles_remaining: usize,
    pub revision: u64,
}

/// One player's rack, served only to that player.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct PrivateView {
    pub game_id: GameId,
    pub player_id: PlayerId,
    pub tiles: Vec<Tile>,
    pub revision: u64,
}

impl GameState {
    pub fn view(&self) -> GameView {
        GameView {
            id: self.id.clone(),
            title: self.title.clone(),
            player_order: self.player_order.clone(),
            players: self
                .players
                .iter()
                .map(|(id, player)| (id.clone(), PublicPlayer::from(player)))
                .collect(),
            grid: self.board.cells,
            chains: self.board.chains.clone(),
            stock_availability: self.market.availability.clone(),
            active_brands: self.board.get_active_brands(),
            inactive_brands: self.board.get_inactive_brands(),
            current_turn_player: self.turn.current_turn_player.clone(),
            current_action_player: self.turn.current_action_player.clone(),
            current_action_type: self.turn.current_action_type,
            current_action_details: self.turn.current_action_details.clone(),
            is_started: self.is_started,
            most_recent_actions: self.most_recent_actions.clone(),
            most_recently_placed_tile: self.most_recently_placed_tile,
            tiles_remaining: self.tiles_remaining(),
            revision: self.revision,
        }
    }

    pub fn private_view(&self, id: &PlayerId) -> Option<PrivateView> {
        let player = self.players.get(id)?;
        let mut tiles = player.tiles.clone();
        tiles.sort();
        Some(PrivateView {
            game_id: self.id.clone(),
            player_id: id.clone(),
            tiles,
            revision: self.revision,
        })
    }
}
