use std::{collections::BTreeMap, fmt};

use rand::{seq::SliceRandom, Rng};
use serde::{Deserialize, Serialize};

use super::{
    acquire_constants::TRADE_RATIO,
    acquire_game_state::{ActionDetails, ActionType, TurnState},
    brand::Brand,
    errors::Rejection,
    game_board::{GameBoard, PlacementOutcome},
    game_config::GameConfig,
    game_states::game_start_state::GameStartState,
    player::{Player, PlayerId},
    stock_market::{compute_bonuses, PurchaseOrder, StockMarket},
    tile::Tile,
};

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameId(pub String);

impl From<&str> for GameId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Authoritative state of one game, private racks and tile bag included.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct GameState {
    pub id: GameId,
    pub title: String,
    pub config: GameConfig,
    pub player_order: Vec<PlayerId>,
    pub players: BTreeMap<PlayerId, Player>,
    pub board: GameBoard,
    pub market: StockMarket,
    pub turn: TurnState,
    pub is_started: bool,
    pub most_recent_actions: Vec<String>,
    pub most_recently_placed_tile: Option<Tile>,
    pub tile_bag: Vec<Tile>,
    /// Bumped on every committed action.
    pub revision: u64,
}

impl GameState {
    pub fn new(id: GameId, title: &str, config: GameConfig) -> Self {
        Self {
            id,
            title: title.to_string(),
            board: GameBoard::new(config.safe_chain_size, config.founding_chain_size),
            market: StockMarket::new(config.shares_per_brand),
            config,
            player_order: Vec::new(),
            players: BTreeMap::new(),
            turn: TurnState::default(),
            is_started: false,
            most_recent_actions: Vec::new(),
            most_recently_placed_tile: None,
            tile_bag: Vec::new(),
            revision: 0,
        }
    }

    pub fn player(&self, id: &PlayerId) -> Result<&Player, Rejection> {
        self.players
            .get(id)
            .ok_or_else(|| Rejection::NotSeated(id.clone()))
    }

    pub(crate) fn player_mut(&mut self, id: &PlayerId) -> Result<&mut Player, Rejection> {
        self.players
            .get_mut(id)
            .ok_or_else(|| Rejection::NotSeated(id.clone()))
    }

    pub fn display_name(&self, id: &PlayerId) -> String {
        self.players
            .get(id)
            .map_or_else(|| id.to_string(), |player| player.display_name.clone())
    }

    pub fn tiles_remaining(&self) -> usize {
        self.tile_bag.len()
    }

    pub(crate) fn record(&mut self, text: String) {
        self.most_recent_actions.push(text);
    }

    pub fn join(&mut self, id: PlayerId, display_name: &str) -> Result<(), Rejection> {
        if self.is_started {
            return Err(Rejection::GameAlreadyStarted);
        }
        if self.players.contains_key(&id) {
            return Err(Rejection::AlreadySeated(id));
        }
        if self.player_order.len() >= self.config.max_players {
            return Err(Rejection::PlayerCount(self.player_order.len() + 1));
        }

        self.player_order.push(id.clone());
        self.players
            .insert(id.clone(), Player::new(id, display_name, self.config.starting_cash));
        self.record(format!("{} joined the game.", display_name));
        Ok(())
    }

    pub fn start<R: Rng>(&mut self, rng: &mut R) -> Result<(), Rejection> {
        if self.is_started {
            return Err(Rejection::GameAlreadyStarted);
        }
        let player_count = self.player_order.len();
        if player_count < self.config.min_players || player_count > self.config.max_players {
            return Err(Rejection::PlayerCount(player_count));
        }

        self.tile_bag = Tile::all().collect();
        self.tile_bag.shuffle(rng);

        if self.config.seed_board {
            let mut start_state = GameStartState::new();
            for seat in 0..player_count {
                let Some(tile) = self.tile_bag.pop() else { break };
                self.board.place_initial_tile(tile);
                start_state.player_drew_tile(seat, tile);
                let name = self.display_name(&self.player_order[seat]);
                self.record(format!("{} drew {} as a starting tile.", name, tile));
            }
            if let Some((seat, tile)) = start_state.winner() {
                let name = self.display_name(&self.player_order[seat]);
                self.record(format!("{} drew the lowest tile, {}.", name, tile));
                self.player_order.rotate_left(seat);
            }
        }

        for id in self.player_order.clone() {
            let hand = self.config.tiles_per_hand.min(self.tile_bag.len());
            let tiles = self.tile_bag.split_off(self.tile_bag.len() - hand);
            self.player_mut(&id)?.tiles = tiles;
        }

        let first = self
            .player_order
            .first()
            .cloned()
            .ok_or(Rejection::PlayerCount(0))?;
        self.is_started = true;
        self.record(format!("The game has started. {} goes first.", self.display_name(&first)));
        self.begin_turn(first);
        Ok(())
    }

    /// A rack tile that can be placed right now, possibly with a brand choice.
    pub fn has_playable_tile(&self, id: &PlayerId) -> bool {
        self.players.get(id).is_some_and(|player| {
            player.tiles.iter().any(|tile| {
                matches!(
                    self.board.analyze_placement(*tile, None),
                    Ok(_) | Err(Rejection::BrandRequired { .. })
                )
            })
        })
    }

    pub fn place_tile(
        &mut self,
        id: &PlayerId,
        tile: Option<Tile>,
        brand: Option<Brand>,
        skip: bool,
    ) -> Result<(), Rejection> {
        self.ensure_turn(id, ActionType::Place)?;
        let name = self.display_name(id);

        if skip {
            if self.has_playable_tile(id) {
                return Err(Rejection::SkipNotAllowed);
            }
            self.record(format!("{} had no playable tile and passed.", name));
            self.enter_buy();
            return Ok(());
        }

        let tile = tile.ok_or_else(|| Rejection::Malformed("x and y are required unless skipping".to_string()))?;
        if !tile.is_on_board() {
            return Err(Rejection::OutOfBounds(tile));
        }
        if !self.player(id)?.holds(tile) {
            return Err(Rejection::TileNotOwned(tile));
        }

        let placement = self.board.analyze_placement(tile, brand)?;

        self.player_mut(id)?.remove_tile(tile);
        self.board.apply_placement(&placement);
        self.most_recently_placed_tile = Some(tile);

        let text = match &placement.outcome {
            PlacementOutcome::Found(brand) => {
                format!("{} placed a tile at {} and founded {}.", name, tile, brand)
            }
            PlacementOutcome::Acquisition { survivor, acquired } => format!(
                "{} placed a tile at {}. {} acquires {}.",
                name,
                tile,
                survivor,
                acquired
                    .iter()
                    .map(Brand::to_string)
                    .collect::<Vec<_>>()
                    .join(", ")
            ),
            _ => format!("{} placed a tile at {}.", name, tile),
        };
        self.record(text);

        if let PlacementOutcome::Found(brand) = placement.outcome {
            if self.config.founder_share {
                self.award_founder_share(id, brand)?;
            }
        }

        self.transition_from_place(id, placement)
    }

    fn award_founder_share(&mut self, id: &PlayerId, brand: Brand) -> Result<(), Rejection> {
        if self.market.available(brand) == 0 {
            return Ok(());
        }
        let GameState { players, market, .. } = self;
        let player = players.get_mut(id).ok_or_else(|| Rejection::NotSeated(id.clone()))?;
        market.withdraw(player, brand, 1)?;
        let text = format!("{} received a {} founder's share.", player.display_name, brand);
        self.record(text);
        Ok(())
    }

    /// Pays majority and minority bonuses for `brand` at `chain_length`.
    pub(crate) fn pay_bonuses(&mut self, brand: Brand, chain_length: usize) -> Result<(), Rejection> {
        let holders: Vec<(PlayerId, u32)> = self
            .player_order
            .iter()
            .filter_map(|id| self.players.get(id).map(|p| (id.clone(), p.shares_of(brand))))
            .collect();

        for payout in compute_bonuses(&holders, chain_length) {
            if let Some(player) = self.players.get_mut(&payout.player) {
                player.credit(payout.amount)?;
                let place = if payout.place == 1 { "majority" } else { "minority" };
                let text = format!(
                    "{} received the {} {} bonus of ${}.",
                    player.display_name, brand, place, payout.amount
                );
                self.record(text);
            }
        }
        Ok(())
    }

    pub fn buy_stock(&mut self, id: &PlayerId, order: &PurchaseOrder) -> Result<(), Rejection> {
        self.ensure_turn(id, ActionType::Buy)?;

        let limit = self.config.max_purchase_per_turn;
        let GameState { players, market, board, .. } = self;
        let player = players.get_mut(id).ok_or_else(|| Rejection::NotSeated(id.clone()))?;
        let lines = market.buy(board, player, order, limit)?;

        let name = player.display_name.clone();
        if lines.is_empty() {
            self.record(format!("{} bought no stock.", name));
        }
        for line in lines {
            self.record(format!(
                "{} bought {} {} stock @ ${} each.",
                name, line.count, line.brand, line.price
            ));
        }

        self.transition_from_buy()
    }

    pub fn resolve_acquisition(
        &mut self,
        id: &PlayerId,
        sell_count: u32,
        trade_count: u32,
    ) -> Result<(), Rejection> {
        self.ensure_turn(id, ActionType::Resolve)?;

        let (acquirer, acquiree, price) = match &self.turn.current_action_details {
            Some(ActionDetails::Resolve(merger)) => (
                merger.current.acquirer,
                merger.current.acquiree,
                merger.current.acquiree_cost_at_acquisition_time,
            ),
            _ => {
                return Err(Rejection::Invariant(
                    "resolve phase without a pending acquisition".to_string(),
                ))
            }
        };

        let held = self.player(id)?.shares_of(acquiree);
        if sell_count.checked_add(trade_count).map_or(true, |total| total > held) {
            return Err(Rejection::InsufficientShares { brand: acquiree, available: held });
        }
        if trade_count % TRADE_RATIO != 0 {
            return Err(Rejection::OddTrade(trade_count));
        }
        let available = self.market.available(acquirer);
        if trade_count / TRADE_RATIO > available {
            return Err(Rejection::InsufficientShares { brand: acquirer, available });
        }

        let GameState { players, market, .. } = self;
        let player = players.get_mut(id).ok_or_else(|| Rejection::NotSeated(id.clone()))?;
        market.sell(player, acquiree, sell_count, price)?;
        let received = market.trade(player, acquiree, acquirer, trade_count)?;
        let kept = player.shares_of(acquiree);
        let name = player.display_name.clone();

        if sell_count > 0 {
            self.record(format!("{} sold {} {} stock @ ${} each.", name, sell_count, acquiree, price));
        }
        if trade_count > 0 {
            self.record(format!(
                "{} traded {} {} for {} {}.",
                name, trade_count, acquiree, received, acquirer
            ));
        }
        if kept > 0 {
            self.record(format!("{} kept {} {} stock.", name, kept, acquiree));
        }

        match self.turn.current_action_details.take() {
            Some(ActionDetails::Resolve(mut merger)) => {
                merger.current.player_handled_stock();
                self.transition_from_resolve(merger);
                Ok(())
            }
            _ => Err(Rejection::Invariant("pending acquisition vanished".to_string())),
        }
    }

    /// Checks every ledger and registry invariant of the state.
    pub fn verify_invariants(&self) -> Result<(), Rejection> {
        self.board.verify().map_err(Rejection::Invariant)?;
        self.market
            .verify(self.players.values())
            .map_err(Rejection::Invariant)?;

        if self.player_order.len() != self.players.len() {
            return Err(Rejection::Invariant("seating and players disagree".to_string()));
        }

        for player in self.players.values() {
            if let Some(tile) = player.tiles.iter().find(|tile| !self.board.is_empty(**tile)) {
                return Err(Rejection::Invariant(format!("{} holds placed tile {}", player.id, tile)));
            }
        }

        if self.is_started && !self.turn.is_over() {
            let seated = |id: &Option<PlayerId>| id.as_ref().is_some_and(|id| self.player_order.contains(id));
            if !seated(&self.turn.current_action_player) || !seated(&self.turn.current_turn_player) {
                return Err(Rejection::Invariant("acting player is not seated".to_string()));
            }
        }
        if self.turn.is_over() && self.turn.current_action_player.is_some() {
            return Err(Rejection::Invariant("finished game still has an acting player".to_string()));
        }
        Ok(())
    }

    /// Checks what may never change between two committed states.
    pub fn verify_transition(&self, previous: &GameState) -> Result<(), Rejection> {
        for (brand, before) in previous.board.chains.iter().filter(|(_, chain)| chain.is_locked) {
            let locked_now = self.board.is_locked(*brand);
            if !locked_now || self.board.chain_size(*brand) < before.size {
                return Err(Rejection::Invariant(format!("locked chain {} shrank or unlocked", brand)));
            }
        }
        Ok(())
    }
}
