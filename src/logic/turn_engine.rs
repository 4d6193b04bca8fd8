use std::collections::VecDeque;

use super::{
    acquire_game::GameState,
    acquire_game_state::{ActionDetails, ActionType, Standing},
    errors::Rejection,
    game_board::{Placement, PlacementOutcome},
    game_states::{
        buy_stock_state::BuyStockState, dispose_stock_state::DisposeStockState,
        merge_state::MergerState,
    },
    player::PlayerId,
    stock_market::share_price,
};

impl GameState {
    /// Rejects `id` unless it is the acting player and the phase is `action`.
    pub fn ensure_turn(&self, id: &PlayerId, action: ActionType) -> Result<(), Rejection> {
        if !self.is_started {
            return Err(Rejection::GameNotStarted);
        }
        if self.turn.is_over() {
            return Err(Rejection::GameOver);
        }
        if !self.players.contains_key(id) {
            return Err(Rejection::NotSeated(id.clone()));
        }
        if self.turn.current_action_player.as_ref() != Some(id) {
            return Err(Rejection::NotYourTurn(id.clone()));
        }
        if self.turn.current_action_type != Some(action) {
            return Err(Rejection::WrongPhase(action.describe()));
        }
        Ok(())
    }

    pub(crate) fn begin_turn(&mut self, id: PlayerId) {
        self.turn.current_turn_player = Some(id.clone());
        self.turn.current_action_player = Some(id);
        self.turn.current_action_type = Some(ActionType::Place);
        self.turn.current_action_details = None;
    }

    /// Seat order starting at `first`.
    pub fn rotated_order(&self, first: &PlayerId) -> Vec<PlayerId> {
        let mut order = self.player_order.clone();
        if let Some(seat) = order.iter().position(|id| id == first) {
            order.rotate_left(seat);
        }
        order
    }

    pub fn next_player(&self, current: &PlayerId) -> Option<PlayerId> {
        self.rotated_order(current)
            .into_iter()
            .cycle()
            .nth(1)
    }

    pub(crate) fn transition_from_place(
        &mut self,
        id: &PlayerId,
        placement: Placement,
    ) -> Result<(), Rejection> {
        let (survivor, acquired) = match placement.outcome {
            PlacementOutcome::Acquisition { survivor, acquired } => (survivor, acquired),
            _ => {
                self.enter_buy();
                return Ok(());
            }
        };

        // every bonus is paid before anyone sells
        let mut acquisitions = VecDeque::new();
        for brand in acquired {
            let size = self.board.chain_size(brand);
            self.pay_bonuses(brand, size)?;

            let resolvers = self
                .rotated_order(id)
                .into_iter()
                .filter(|holder| {
                    self.players
                        .get(holder)
                        .is_some_and(|player| player.shares_of(brand) > 0)
                })
                .collect();
            acquisitions.push_back(DisposeStockState::new(
                survivor,
                brand,
                size,
                share_price(size),
                resolvers,
            ));
        }

        match MergerState::new(id.clone(), acquisitions) {
            Some(merger) => self.advance_merger(merger),
            None => self.enter_buy(),
        }
        Ok(())
    }

    pub(crate) fn transition_from_resolve(&mut self, merger: MergerState) {
        self.advance_merger(merger);
    }

    // absorbs every acquisition nobody is left to resolve, then prompts the
    // next resolver or hands the turn back for buying
    fn advance_merger(&mut self, mut merger: MergerState) {
        while merger.current.is_resolved() {
            let (resolved, more) = merger.acquisition_resolved();
            self.board.absorb_chain(resolved.acquiree, resolved.acquirer);
            self.record(format!(
                "{} has been absorbed into {}.",
                resolved.acquiree, resolved.acquirer
            ));
            if !more {
                self.enter_buy();
                return;
            }
        }

        self.turn.current_action_player = merger.current.current_resolver().cloned();
        self.turn.current_action_type = Some(ActionType::Resolve);
        self.turn.current_action_details = Some(ActionDetails::Resolve(merger));
    }

    pub(crate) fn enter_buy(&mut self) {
        let details = BuyStockState::new(&self.board, &self.market, self.config.max_purchase_per_turn);
        self.turn.current_action_player = self.turn.current_turn_player.clone();
        self.turn.current_action_type = Some(ActionType::Buy);
        self.turn.current_action_details = Some(ActionDetails::Buy(details));
    }

    pub(crate) fn transition_from_buy(&mut self) -> Result<(), Rejection> {
        if self.is_end_condition_met() {
            return self.finish_game();
        }

        let Some(current) = self.turn.current_turn_player.clone() else {
            return Ok(());
        };
        self.discard_dead_tiles(&current);
        self.refill_rack(&current);

        if let Some(next) = self.next_player(&current) {
            self.begin_turn(next);
        }
        Ok(())
    }

    /// The bag is empty, a chain reached the end size, or every chain is viable.
    pub fn is_end_condition_met(&self) -> bool {
        let active = self.board.get_active_brands();
        let sizes: Vec<usize> = active.iter().map(|brand| self.board.chain_size(*brand)).collect();

        self.tile_bag.is_empty()
            || sizes.iter().any(|size| *size >= self.config.end_game_chain_size)
            || (!sizes.is_empty() && sizes.iter().all(|size| *size >= self.config.viable_chain_size))
    }

    fn discard_dead_tiles(&mut self, id: &PlayerId) {
        let dead: Vec<_> = match self.players.get(id) {
            Some(player) => player
                .tiles
                .iter()
                .copied()
                .filter(|tile| self.board.is_permanently_unplayable(*tile))
                .collect(),
            None => return,
        };

        let name = self.display_name(id);
        for tile in dead {
            if let Some(player) = self.players.get_mut(id) {
                player.remove_tile(tile);
            }
            self.record(format!("{} discarded the unplayable tile {}.", name, tile));
        }
    }

    pub(crate) fn refill_rack(&mut self, id: &PlayerId) {
        let hand_size = self.config.tiles_per_hand;
        let GameState { players, tile_bag, .. } = self;
        if let Some(player) = players.get_mut(id) {
            while player.tiles.len() < hand_size {
                match tile_bag.pop() {
                    Some(tile) => player.tiles.push(tile),
                    None => break,
                }
            }
        }
    }

    fn finish_game(&mut self) -> Result<(), Rejection> {
        self.record("The game has ended.".to_string());

        for brand in self.board.get_active_brands() {
            let size = self.board.chain_size(brand);
            self.pay_bonuses(brand, size)?;
        }

        for brand in self.board.get_active_brands() {
            let price = share_price(self.board.chain_size(brand));
            for id in self.player_order.clone() {
                let GameState { players, market, .. } = self;
                let Some(player) = players.get_mut(&id) else { continue };
                let held = player.shares_of(brand);
                if held == 0 {
                    continue;
                }
                let proceeds = market.sell(player, brand, held, price)?;
                let text = format!(
                    "{} sold {} {} stock for ${}.",
                    player.display_name, held, brand, proceeds
                );
                self.record(text);
            }
        }

        let mut standings: Vec<Standing> = self
            .player_order
            .iter()
            .filter_map(|id| self.players.get(id))
            .map(|player| Standing {
                player: player.id.clone(),
                display_name: player.display_name.clone(),
                money: player.money,
            })
            .collect();
        // stable sort keeps seat order among equal totals
        standings.sort_by(|a, b| b.money.cmp(&a.money));

        for (place, standing) in standings.iter().enumerate() {
            let text = format!("{}. {} with ${}", place + 1, standing.display_name, standing.money);
            self.record(text);
        }

        self.turn.current_action_player = None;
        self.turn.current_action_type = Some(ActionType::GameOver);
        self.turn.current_action_details = Some(ActionDetails::GameOver { standings });
        Ok(())
    }
}
