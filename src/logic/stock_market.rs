use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{
    acquire_constants::{BONUS_ROUNDING, TRADE_RATIO},
    brand::Brand,
    errors::Rejection,
    game_board::GameBoard,
    player::{Player, PlayerId},
};

fn get_price_row(chain_length: usize) -> u32 {
    match chain_length {
        0..=2 => 0,
        3 => 1,
        4 => 2,
        5 => 3,
        6..=10 => 4,
        11..=20 => 5,
        21..=30 => 6,
        31..=40 => 7,
        _ => 8,
    }
}

/// Per-share price by chain size. Every brand uses the same table.
pub fn share_price(chain_length: usize) -> u32 {
    (get_price_row(chain_length) + 2) * 100
}

pub fn majority_bonus(chain_length: usize) -> u32 {
    share_price(chain_length) * 10
}

pub fn minority_bonus(chain_length: usize) -> u32 {
    share_price(chain_length) * 5
}

/// Even split, floored to the bonus unit. The remainder is forfeited.
pub fn split_bonus(amount: u32, ways: usize) -> u32 {
    match ways {
        0 => 0,
        _ => (amount / ways as u32) / BONUS_ROUNDING * BONUS_ROUNDING,
    }
}

/// Shares requested per brand, bought atomically as one action.
#[derive(Debug, Default, PartialEq, Eq, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PurchaseOrder(pub BTreeMap<Brand, u32>);

impl PurchaseOrder {
    /// Shares requested in all. `None` if the count does not fit a `u32`.
    pub fn total(&self) -> Option<u32> {
        self.0
            .values()
            .try_fold(0u32, |total, count| total.checked_add(*count))
    }

    /// Entries with a non-zero count.
    pub fn requested(&self) -> impl Iterator<Item = (Brand, u32)> + '_ {
        self.0
            .iter()
            .filter(|(_, count)| **count > 0)
            .map(|(brand, count)| (*brand, *count))
    }
}

impl FromIterator<(Brand, u32)> for PurchaseOrder {
    fn from_iter<I: IntoIterator<Item = (Brand, u32)>>(iter: I) -> Self {
        let mut order = BTreeMap::new();
        for (brand, count) in iter {
            *order.entry(brand).or_insert(0) += count;
        }
        Self(order)
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub struct PurchaseLine {
    pub brand: Brand,
    pub count: u32,
    pub price: u32,
}

#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct BonusPayout {
    pub player: PlayerId,
    pub amount: u32,
    /// 1 for the majority bonus, 2 for the minority bonus.
    pub place: u8,
}

/// Majority and minority payouts for one chain. `holders` is in seat order.
pub fn compute_bonuses(holders: &[(PlayerId, u32)], chain_length: usize) -> Vec<BonusPayout> {
    let mut counts: Vec<u32> = holders
        .iter()
        .map(|(_, shares)| *shares)
        .filter(|shares| *shares > 0)
        .collect();
    counts.sort_unstable_by(|a, b| b.cmp(a));
    counts.dedup();

    let tier = |count: u32| -> Vec<PlayerId> {
        holders
            .iter()
            .filter(|(_, shares)| *shares == count)
            .map(|(player, _)| player.clone())
            .collect()
    };

    let payouts = |players: &[PlayerId], amount: u32, place: u8| -> Vec<BonusPayout> {
        let each = split_bonus(amount, players.len());
        players
            .iter()
            .map(|player| BonusPayout {
                player: player.clone(),
                amount: each,
                place,
            })
            .collect()
    };

    let first = match counts.first() {
        Some(count) => tier(*count),
        None => return Vec::new(),
    };
    // with nobody in second place the top tier shares the minority bonus too
    let second = match counts.get(1) {
        Some(count) => tier(*count),
        None => first.clone(),
    };

    let mut result = payouts(&first, majority_bonus(chain_length), 1);
    result.extend(payouts(&second, minority_bonus(chain_length), 2));
    result
}

/// The bank's share pools.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct StockMarket {
    pub availability: BTreeMap<Brand, u32>,
    pub issued: BTreeMap<Brand, u32>,
}

impl StockMarket {
    pub fn new(shares_per_brand: u32) -> Self {
        let pool: BTreeMap<Brand, u32> = Brand::iter().map(|brand| (brand, shares_per_brand)).collect();
        Self {
            availability: pool.clone(),
            issued: pool,
        }
    }

    pub fn available(&self, brand: Brand) -> u32 {
        self.availability.get(&brand).copied().unwrap_or(0)
    }

    /// Prices an order and checks it can be filled, without changing anything.
    pub fn quote(
        &self,
        board: &GameBoard,
        player: &Player,
        order: &PurchaseOrder,
        limit: u32,
    ) -> Result<Vec<PurchaseLine>, Rejection> {
        match order.total() {
            Some(total) if total <= limit => {}
            _ => return Err(Rejection::OverLimit { limit }),
        }

        let mut lines = Vec::new();
        for (brand, count) in order.requested() {
            if !board.is_active(brand) {
                return Err(Rejection::BrandInactive(brand));
            }
            let available = self.available(brand);
            if count > available {
                return Err(Rejection::OverLimit { limit: available });
            }
            lines.push(PurchaseLine {
                brand,
                count,
                price: share_price(board.chain_size(brand)),
            });
        }

        let needed = lines
            .iter()
            .try_fold(0u32, |sum, line| {
                line.count
                    .checked_mul(line.price)
                    .and_then(|cost| sum.checked_add(cost))
            })
            .unwrap_or(u32::MAX);
        if needed > player.money {
            return Err(Rejection::InsufficientFunds {
                needed,
                available: player.money,
            });
        }

        Ok(lines)
    }

    /// Fills the whole order or nothing.
    pub fn buy(
        &mut self,
        board: &GameBoard,
        player: &mut Player,
        order: &PurchaseOrder,
        limit: u32,
    ) -> Result<Vec<PurchaseLine>, Rejection> {
        let lines = self.quote(board, player, order, limit)?;
        for line in &lines {
            self.withdraw(player, line.brand, line.count)?;
            player.money -= line.count * line.price;
        }
        Ok(lines)
    }

    /// Moves shares from the bank to a player.
    pub fn withdraw(&mut self, player: &mut Player, brand: Brand, count: u32) -> Result<(), Rejection> {
        let available = self.available(brand);
        if count > available {
            return Err(Rejection::InsufficientShares { brand, available });
        }
        self.availability.insert(brand, available - count);
        *player.stocks.entry(brand).or_insert(0) += count;
        Ok(())
    }

    /// Moves shares from a player back to the bank.
    pub fn deposit(&mut self, player: &mut Player, brand: Brand, count: u32) -> Result<(), Rejection> {
        let held = player.shares_of(brand);
        if count > held {
            return Err(Rejection::InsufficientShares { brand, available: held });
        }
        player.stocks.insert(brand, held - count);
        *self.availability.entry(brand).or_insert(0) += count;
        Ok(())
    }

    pub fn sell(&mut self, player: &mut Player, brand: Brand, count: u32, price: u32) -> Result<u32, Rejection> {
        let proceeds = count.checked_mul(price);
        let money = proceeds.and_then(|proceeds| player.money.checked_add(proceeds));
        let (Some(proceeds), Some(money)) = (proceeds, money) else {
            return Err(Rejection::Invariant(format!("{} sale overflows {}'s money", brand, player.id)));
        };
        self.deposit(player, brand, count)?;
        player.money = money;
        Ok(proceeds)
    }

    /// Swaps acquired shares for surviving shares at the trade ratio. Returns
    /// the number of surviving shares received.
    pub fn trade(&mut self, player: &mut Player, from: Brand, to: Brand, count: u32) -> Result<u32, Rejection> {
        if count % TRADE_RATIO != 0 {
            return Err(Rejection::OddTrade(count));
        }
        let received = count / TRADE_RATIO;
        let available = self.available(to);
        if received > available {
            return Err(Rejection::InsufficientShares { brand: to, available });
        }
        self.deposit(player, from, count)?;
        self.withdraw(player, to, received)?;
        Ok(received)
    }

    /// Checks the share ledger balances for every brand.
    pub fn verify<'a>(&self, players: impl Iterator<Item = &'a Player> + Clone) -> Result<(), String> {
        for brand in Brand::iter() {
            let held: u32 = players.clone().map(|player| player.shares_of(brand)).sum();
            let issued = self.issued.get(&brand).copied().unwrap_or(0);
            if self.available(brand) + held != issued {
                return Err(format!(
                    "{} ledger imbalance: {} in bank + {} held != {} issued",
                    brand,
                    self.available(brand),
                    held,
                    issued
                ));
            }
        }
        Ok(())
    }
}
