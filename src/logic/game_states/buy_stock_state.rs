use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::logic::{brand::Brand, game_board::GameBoard, stock_market::{share_price, StockMarket}};

/// What the acting player may buy this turn.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct BuyStockState {
    pub buys_remaining: u32,
    /// Current per-share price of every brand that can be bought.
    pub prices: BTreeMap<Brand, u32>,
}

impl BuyStockState {
    pub fn new(board: &GameBoard, market: &StockMarket, limit: u32) -> Self {
        let prices = board
            .get_active_brands()
            .into_iter()
            .filter(|brand| market.available(*brand) > 0)
            .map(|brand| (brand, share_price(board.chain_size(brand))))
            .collect();

        BuyStockState {
            buys_remaining: limit,
            prices,
        }
    }
}
