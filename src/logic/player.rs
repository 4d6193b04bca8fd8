use std::{collections::BTreeMap, fmt};

use serde::{Deserialize, Serialize};

use super::{brand::Brand, errors::Rejection, tile::Tile};

/// Verified user id of a seated player.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(pub String);

impl From<&str> for PlayerId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Player {
    pub id: PlayerId,
    pub display_name: String,
    pub stocks: BTreeMap<Brand, u32>,
    pub money: u32,
    /// Private rack, never part of the shared snapshot.
    pub tiles: Vec<Tile>,
}

impl Player {
    pub fn new(id: PlayerId, display_name: &str, money: u32) -> Self {
        Self {
            id,
            display_name: display_name.to_string(),
            stocks: Brand::iter().map(|brand| (brand, 0)).collect(),
            money,
            tiles: Vec::new(),
        }
    }

    pub fn shares_of(&self, brand: Brand) -> u32 {
        self.stocks.get(&brand).copied().unwrap_or(0)
    }

    /// Adds a payout. Money that would not fit is refused, leaving the
    /// balance as it was.
    pub fn credit(&mut self, amount: u32) -> Result<(), Rejection> {
        self.money = self
            .money
            .checked_add(amount)
            .ok_or_else(|| Rejection::Invariant(format!("{} cannot be paid ${}", self.id, amount)))?;
        Ok(())
    }

    pub fn holds(&self, tile: Tile) -> bool {
        self.tiles.contains(&tile)
    }

    pub fn remove_tile(&mut self, tile: Tile) -> bool {
        match self.tiles.iter().position(|t| *t == tile) {
            Some(index) => {
                self.tiles.remove(index);
                true
            }
            None => false,
        }
    }
}
