use crate::logic::tile::Tile;

/// Tracks the starting-tile draw that decides who acts first.
#[derive(Debug, Default)]
pub struct GameStartState {
    winning: Option<(usize, Tile)>,
}

impl GameStartState {
    pub fn new() -> Self {
        Self::default()
    }

    // call this after a seat has drawn its starting tile
    pub fn player_drew_tile(&mut self, seat: usize, tile: Tile) {
        // the tile closest to 1-A wins
        if self.winning.map_or(true, |(_, winning)| tile < winning) {
            self.winning = Some((seat, tile));
        }
    }

    /// The seat that acts first and the tile it drew.
    pub fn winner(&self) -> Option<(usize, Tile)> {
        self.winning
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowest_tile_wins() {
        let mut state = GameStartState::new();
        assert_eq!(state.winner(), None);

        state.player_drew_tile(0, Tile::new(4, 2));
        state.player_drew_tile(1, Tile::new(9, 0));
        state.player_drew_tile(2, Tile::new(0, 1));
        assert_eq!(state.winner(), Some((1, Tile::new(9, 0))));
    }
}
