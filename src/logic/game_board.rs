use core::fmt;
use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use super::{
    acquire_constants::{BOARD_COLS, BOARD_ROWS},
    brand::Brand,
    errors::Rejection,
    tile::Tile,
};

#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Space {
    Empty,
    /// Occupied but not part of any branded chain.
    Independent,
    Hotel(Brand),
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub struct Chain {
    pub brand: Brand,
    pub size: usize,
    pub is_locked: bool,
    pub is_active: bool,
}

impl Chain {
    fn new(brand: Brand) -> Self {
        Self {
            brand,
            size: 0,
            is_locked: false,
            is_active: false,
        }
    }
}

/// What a legal placement will do to the board.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum PlacementOutcome {
    /// No occupied neighbours.
    Isolated,
    /// Joins one or more brand-less clusters without founding a chain.
    Cluster,
    Found(Brand),
    Grow(Brand),
    /// Acquired brands are ordered largest first, then by brand code.
    Acquisition { survivor: Brand, acquired: Vec<Brand> },
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Placement {
    pub tile: Tile,
    pub outcome: PlacementOutcome,
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct GameBoard {
    pub cells: [[Space; BOARD_COLS]; BOARD_ROWS],
    pub chains: BTreeMap<Brand, Chain>,
    /// Brands whose chain was acquired. They cannot be founded again.
    pub retired: BTreeSet<Brand>,
    safe_chain_size: usize,
    founding_chain_size: usize,
}

impl GameBoard {
    pub fn new(safe_chain_size: usize, founding_chain_size: usize) -> GameBoard {
        GameBoard {
            cells: [[Space::Empty; BOARD_COLS]; BOARD_ROWS],
            chains: Brand::iter().map(|brand| (brand, Chain::new(brand))).collect(),
            retired: BTreeSet::new(),
            safe_chain_size,
            founding_chain_size,
        }
    }

    pub fn get_space(&self, tile: Tile) -> Space {
        match tile.is_on_board() {
            true => self.cells[tile.y][tile.x],
            false => Space::Empty,
        }
    }

    fn set_space(&mut self, tile: Tile, space: Space) {
        self.cells[tile.y][tile.x] = space;
    }

    pub fn is_empty(&self, tile: Tile) -> bool {
        self.get_space(tile) == Space::Empty
    }

    /// Starting tiles never found or grow a chain.
    pub fn place_initial_tile(&mut self, tile: Tile) {
        if tile.is_on_board() {
            self.set_space(tile, Space::Independent);
        }
    }

    pub fn get_brand_at(&self, tile: Tile) -> Option<Brand> {
        match self.get_space(tile) {
            Space::Hotel(brand) => Some(brand),
            _ => None,
        }
    }

    pub fn chain_size(&self, brand: Brand) -> usize {
        self.chains.get(&brand).map_or(0, |chain| chain.size)
    }

    pub fn is_locked(&self, brand: Brand) -> bool {
        self.chains.get(&brand).is_some_and(|chain| chain.is_locked)
    }

    pub fn is_active(&self, brand: Brand) -> bool {
        self.chains.get(&brand).is_some_and(|chain| chain.is_active)
    }

    pub fn get_active_brands(&self) -> Vec<Brand> {
        Brand::iter().filter(|brand| self.is_active(*brand)).collect()
    }

    /// Brands that may still be founded.
    pub fn get_inactive_brands(&self) -> Vec<Brand> {
        Brand::iter()
            .filter(|brand| !self.is_active(*brand) && !self.retired.contains(brand))
            .collect()
    }

    pub fn get_adjacent_brands(&self, tile: Tile) -> Vec<Brand> {
        tile.neighbors()
            .filter_map(|neighbor| self.get_brand_at(neighbor))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Distinct brand-less clusters touching `tile`.
    pub fn get_adjacent_clusters(&self, tile: Tile) -> Vec<BTreeSet<Tile>> {
        let mut clusters: Vec<BTreeSet<Tile>> = Vec::new();
        for neighbor in tile.neighbors() {
            if self.get_space(neighbor) != Space::Independent {
                continue;
            }
            if clusters.iter().any(|cluster| cluster.contains(&neighbor)) {
                continue;
            }
            clusters.push(self.collect_cluster(neighbor));
        }
        clusters
    }

    fn collect_cluster(&self, start: Tile) -> BTreeSet<Tile> {
        let mut cluster = BTreeSet::new();
        let mut pending = vec![start];
        while let Some(tile) = pending.pop() {
            if self.get_space(tile) != Space::Independent || !cluster.insert(tile) {
                continue;
            }
            pending.extend(tile.neighbors());
        }
        cluster
    }

    /// A tile touching two locked chains can never be placed.
    pub fn is_permanently_unplayable(&self, tile: Tile) -> bool {
        tile.is_on_board()
            && self.get_space(tile) == Space::Empty
            && self
                .get_adjacent_brands(tile)
                .into_iter()
                .filter(|brand| self.is_locked(*brand))
                .count()
                > 1
    }

    /// Decides what placing `tile` would do without touching the board.
    pub fn analyze_placement(
        &self,
        tile: Tile,
        chosen: Option<Brand>,
    ) -> Result<Placement, Rejection> {
        if !tile.is_on_board() {
            return Err(Rejection::OutOfBounds(tile));
        }

        if self.get_space(tile) != Space::Empty {
            return Err(Rejection::SpaceOccupied(tile));
        }

        let adjacent_brands = self.get_adjacent_brands(tile);
        let locked: Vec<Brand> = adjacent_brands
            .iter()
            .copied()
            .filter(|brand| self.is_locked(*brand))
            .collect();

        if locked.len() > 1 {
            return Err(Rejection::IllegalMerge(tile));
        }

        let outcome = match adjacent_brands.as_slice() {
            [] => self.analyze_unbranded(tile, chosen)?,
            [brand] => match chosen {
                // growing an existing chain never rebrands it
                Some(other) => return Err(Rejection::InvalidBrand(other)),
                None => PlacementOutcome::Grow(*brand),
            },
            _ => self.analyze_merge(adjacent_brands.clone(), locked.first().copied(), chosen)?,
        };

        Ok(Placement { tile, outcome })
    }

    fn analyze_unbranded(
        &self,
        tile: Tile,
        chosen: Option<Brand>,
    ) -> Result<PlacementOutcome, Rejection> {
        let clusters = self.get_adjacent_clusters(tile);
        if clusters.is_empty() {
            return match chosen {
                Some(brand) => Err(Rejection::InvalidBrand(brand)),
                None => Ok(PlacementOutcome::Isolated),
            };
        }

        let merged_size = 1 + clusters.iter().map(BTreeSet::len).sum::<usize>();
        let inactive = self.get_inactive_brands();

        match chosen {
            Some(brand) if inactive.contains(&brand) && merged_size >= self.founding_chain_size => {
                Ok(PlacementOutcome::Found(brand))
            }
            Some(brand) => Err(Rejection::InvalidBrand(brand)),
            None if clusters.len() > 1
                && merged_size >= self.founding_chain_size
                && !inactive.is_empty() =>
            {
                Err(Rejection::BrandRequired { options: inactive })
            }
            None => Ok(PlacementOutcome::Cluster),
        }
    }

    fn analyze_merge(
        &self,
        brands: Vec<Brand>,
        locked: Option<Brand>,
        chosen: Option<Brand>,
    ) -> Result<PlacementOutcome, Rejection> {
        let survivor = match locked {
            Some(locked) => match chosen {
                Some(brand) if brand != locked => return Err(Rejection::InvalidBrand(brand)),
                _ => locked,
            },
            None => {
                let largest = brands
                    .iter()
                    .map(|brand| self.chain_size(*brand))
                    .max()
                    .unwrap_or(0);
                let tied: Vec<Brand> = brands
                    .iter()
                    .copied()
                    .filter(|brand| self.chain_size(*brand) == largest)
                    .collect();

                match (tied.as_slice(), chosen) {
                    ([only], None) => *only,
                    ([only], Some(brand)) if brand == *only => brand,
                    ([_], Some(brand)) => return Err(Rejection::InvalidBrand(brand)),
                    (_, None) => return Err(Rejection::BrandRequired { options: tied }),
                    (_, Some(brand)) if tied.contains(&brand) => brand,
                    (_, Some(brand)) => return Err(Rejection::InvalidBrand(brand)),
                }
            }
        };

        let mut acquired: Vec<Brand> = brands.into_iter().filter(|b| *b != survivor).collect();
        acquired.sort_by(|a, b| {
            self.chain_size(*b)
                .cmp(&self.chain_size(*a))
                .then(a.code().cmp(&b.code()))
        });

        Ok(PlacementOutcome::Acquisition { survivor, acquired })
    }

    /// Applies a placement produced by `analyze_placement` on this board.
    /// Acquired chains keep their tiles until `absorb_chain` is called.
    pub fn apply_placement(&mut self, placement: &Placement) {
        let tile = placement.tile;
        match &placement.outcome {
            PlacementOutcome::Isolated | PlacementOutcome::Cluster => {
                self.set_space(tile, Space::Independent);
            }
            PlacementOutcome::Found(brand) | PlacementOutcome::Grow(brand) => {
                self.flood_hotel(tile, *brand);
                self.refresh_chain(*brand);
            }
            PlacementOutcome::Acquisition { survivor, .. } => {
                self.flood_hotel(tile, *survivor);
                self.refresh_chain(*survivor);
            }
        }
    }

    // paints the tile and every brand-less tile connected to it
    fn flood_hotel(&mut self, tile: Tile, brand: Brand) {
        let mut pending = vec![tile];
        while let Some(tile) = pending.pop() {
            self.set_space(tile, Space::Hotel(brand));
            pending.extend(
                tile.neighbors()
                    .filter(|neighbor| self.get_space(*neighbor) == Space::Independent),
            );
        }
    }

    /// Repaints the acquired chain with the survivor's brand and retires it.
    pub fn absorb_chain(&mut self, acquired: Brand, survivor: Brand) {
        for tile in Tile::all() {
            if self.get_space(tile) == Space::Hotel(acquired) {
                self.set_space(tile, Space::Hotel(survivor));
            }
        }
        self.refresh_chain(acquired);
        self.refresh_chain(survivor);
        self.retired.insert(acquired);
    }

    fn count_tiles(&self, brand: Brand) -> usize {
        Tile::all()
            .filter(|tile| self.get_space(*tile) == Space::Hotel(brand))
            .count()
    }

    fn refresh_chain(&mut self, brand: Brand) {
        let size = self.count_tiles(brand);
        let safe_chain_size = self.safe_chain_size;
        let chain = self.chains.entry(brand).or_insert_with(|| Chain::new(brand));
        chain.size = size;
        chain.is_active = size > 0;
        // locking is permanent
        chain.is_locked |= size >= safe_chain_size;
    }

    /// Rebuilds the chain registry from the cells, e.g. after loading a board.
    pub fn sync_chains(&mut self) {
        for brand in Brand::iter() {
            self.refresh_chain(brand);
        }
    }

    /// Checks that the registry agrees with the cells.
    pub fn verify(&self) -> Result<(), String> {
        for (brand, chain) in &self.chains {
            let counted = self.count_tiles(*brand);
            if chain.size != counted {
                return Err(format!("{} registry size {} but {} tiles", brand, chain.size, counted));
            }
            if chain.is_active != (counted > 0) {
                return Err(format!("{} activity flag disagrees with board", brand));
            }
            if chain.is_active && counted < self.founding_chain_size {
                return Err(format!("{} is active with only {} tiles", brand, counted));
            }
            if chain.is_locked && chain.size < self.safe_chain_size {
                return Err(format!("{} is locked below the safe size", brand));
            }
            if chain.is_active && self.retired.contains(brand) {
                return Err(format!("{} is retired but on the board", brand));
            }
        }
        Ok(())
    }
}

impl fmt::Display for GameBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            for space in row {
                let symbol = match space {
                    Space::Empty => '.',
                    Space::Independent => '*',
                    Space::Hotel(brand) => brand.to_string().chars().next().unwrap_or('?'),
                };
                write!(f, "{}", symbol)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::acquire_constants::{FOUNDING_CHAIN_SIZE, SAFE_CHAIN_SIZE};

    fn new_board() -> GameBoard {
        GameBoard::new(SAFE_CHAIN_SIZE, FOUNDING_CHAIN_SIZE)
    }

    fn paint(board: &mut GameBoard, tiles: &[(usize, usize)], space: Space) {
        for &(x, y) in tiles {
            board.cells[y][x] = space;
        }
        board.sync_chains();
    }

    fn row(y: usize, xs: std::ops::Range<usize>) -> Vec<(usize, usize)> {
        xs.map(|x| (x, y)).collect()
    }

    #[test]
    fn test_new_game_board() {
        let game_board = new_board();
        assert_eq!(game_board.cells.len(), BOARD_ROWS);
        assert_eq!(game_board.cells[0].len(), BOARD_COLS);
        assert_eq!(game_board.chains.len(), Brand::count());
        assert!(game_board.get_active_brands().is_empty());
    }

    #[test]
    fn test_get_space() {
        let game_board = new_board();
        assert_eq!(game_board.get_space(Tile::new(0, 0)), Space::Empty);
        assert_eq!(game_board.get_space(Tile::new(BOARD_COLS, 0)), Space::Empty);
    }

    #[test]
    fn test_get_active_brands() {
        let mut game_board = new_board();
        paint(&mut game_board, &[(0, 0), (1, 0)], Space::Hotel(Brand::Luxor));
        paint(&mut game_board, &[(0, 2), (1, 2)], Space::Hotel(Brand::Tower));

        let active = game_board.get_active_brands();
        let inactive = game_board.get_inactive_brands();

        for brand in [Brand::Luxor, Brand::Tower] {
            assert!(active.contains(&brand));
            assert!(!inactive.contains(&brand));
        }
        for brand in [Brand::American, Brand::Worldwide, Brand::Festival, Brand::Imperial, Brand::Continental] {
            assert!(!active.contains(&brand));
            assert!(inactive.contains(&brand));
        }
    }

    #[test]
    fn test_chain_size() {
        let mut game_board = new_board();
        paint(&mut game_board, &row(0, 0..2), Space::Hotel(Brand::Luxor));
        paint(&mut game_board, &row(2, 0..4), Space::Hotel(Brand::Tower));
        paint(&mut game_board, &row(4, 0..8), Space::Hotel(Brand::American));

        assert_eq!(game_board.chain_size(Brand::Luxor), 2);
        assert_eq!(game_board.chain_size(Brand::Tower), 4);
        assert_eq!(game_board.chain_size(Brand::American), 8);
        assert!(game_board.verify().is_ok());
    }

    #[test]
    fn test_get_adjacent_brands() {
        let mut game_board = new_board();
        game_board.cells[0][1] = Space::Hotel(Brand::Tower);
        game_board.cells[1][0] = Space::Hotel(Brand::Festival);
        game_board.cells[1][2] = Space::Hotel(Brand::Luxor);

        assert_eq!(
            game_board.get_adjacent_brands(Tile::new(0, 0)),
            vec![Brand::Tower, Brand::Festival]
        );
        assert_eq!(
            game_board.get_adjacent_brands(Tile::new(1, 1)),
            vec![Brand::Tower, Brand::Luxor, Brand::Festival]
        );
    }

    #[test]
    fn test_rejects_off_board_and_occupied() {
        let mut game_board = new_board();
        assert_eq!(
            game_board.analyze_placement(Tile::new(BOARD_COLS, BOARD_ROWS), None),
            Err(Rejection::OutOfBounds(Tile::new(BOARD_COLS, BOARD_ROWS)))
        );

        paint(&mut game_board, &[(0, 0)], Space::Independent);
        assert_eq!(
            game_board.analyze_placement(Tile::new(0, 0), None),
            Err(Rejection::SpaceOccupied(Tile::new(0, 0)))
        );
    }

    #[test]
    fn test_isolated_tile() {
        let mut game_board = new_board();
        let placement = game_board.analyze_placement(Tile::new(3, 3), None).unwrap();
        assert_eq!(placement.outcome, PlacementOutcome::Isolated);

        game_board.apply_placement(&placement);
        assert_eq!(game_board.get_space(Tile::new(3, 3)), Space::Independent);

        assert_eq!(
            game_board.analyze_placement(Tile::new(6, 6), Some(Brand::Luxor)),
            Err(Rejection::InvalidBrand(Brand::Luxor))
        );
    }

    #[test]
    fn test_cluster_may_found_chain() {
        let mut game_board = new_board();
        paint(&mut game_board, &[(0, 0)], Space::Independent);

        let unbranded = game_board.analyze_placement(Tile::new(1, 0), None).unwrap();
        assert_eq!(unbranded.outcome, PlacementOutcome::Cluster);

        let founded = game_board
            .analyze_placement(Tile::new(1, 0), Some(Brand::Imperial))
            .unwrap();
        assert_eq!(founded.outcome, PlacementOutcome::Found(Brand::Imperial));

        game_board.apply_placement(&founded);
        assert_eq!(game_board.chain_size(Brand::Imperial), 2);
        assert!(game_board.is_active(Brand::Imperial));
        assert!(!game_board.get_inactive_brands().contains(&Brand::Imperial));
    }

    #[test]
    fn test_joining_clusters_requires_brand() {
        let mut game_board = new_board();
        paint(&mut game_board, &[(0, 0), (2, 0)], Space::Independent);

        match game_board.analyze_placement(Tile::new(1, 0), None) {
            Err(Rejection::BrandRequired { options }) => {
                assert_eq!(options, game_board.get_inactive_brands())
            }
            other => panic!("expected BrandRequired, got {:?}", other),
        }

        paint(&mut game_board, &[(5, 5), (6, 5)], Space::Hotel(Brand::Tower));
        assert_eq!(
            game_board.analyze_placement(Tile::new(1, 0), Some(Brand::Tower)),
            Err(Rejection::InvalidBrand(Brand::Tower))
        );

        let placement = game_board
            .analyze_placement(Tile::new(1, 0), Some(Brand::Luxor))
            .unwrap();
        game_board.apply_placement(&placement);
        assert_eq!(game_board.chain_size(Brand::Luxor), 3);
    }

    #[test]
    fn test_grow_absorbs_independent_tiles() {
        let mut game_board = new_board();
        paint(&mut game_board, &[(0, 0), (0, 1)], Space::Hotel(Brand::Luxor));
        paint(&mut game_board, &[(2, 0), (2, 1)], Space::Independent);

        let placement = game_board.analyze_placement(Tile::new(1, 0), None).unwrap();
        assert_eq!(placement.outcome, PlacementOutcome::Grow(Brand::Luxor));
        game_board.apply_placement(&placement);
        assert_eq!(game_board.chain_size(Brand::Luxor), 5);

        assert_eq!(
            game_board.analyze_placement(Tile::new(0, 2), Some(Brand::Festival)),
            Err(Rejection::InvalidBrand(Brand::Festival))
        );
    }

    #[test]
    fn test_merge_picks_largest_survivor() {
        let mut game_board = new_board();
        paint(&mut game_board, &row(0, 0..3), Space::Hotel(Brand::Tower));
        paint(&mut game_board, &row(2, 0..5), Space::Hotel(Brand::Festival));

        let placement = game_board.analyze_placement(Tile::new(0, 1), None).unwrap();
        assert_eq!(
            placement.outcome,
            PlacementOutcome::Acquisition {
                survivor: Brand::Festival,
                acquired: vec![Brand::Tower],
            }
        );

        game_board.apply_placement(&placement);
        // the acquired chain waits for its resolution
        assert_eq!(game_board.chain_size(Brand::Festival), 6);
        assert_eq!(game_board.chain_size(Brand::Tower), 3);

        game_board.absorb_chain(Brand::Tower, Brand::Festival);
        assert_eq!(game_board.chain_size(Brand::Festival), 9);
        assert!(!game_board.is_active(Brand::Tower));
        assert!(game_board.retired.contains(&Brand::Tower));
        assert!(!game_board.get_inactive_brands().contains(&Brand::Tower));
        assert!(game_board.verify().is_ok());
    }

    #[test]
    fn test_tied_merge_requires_choice() {
        let mut game_board = new_board();
        paint(&mut game_board, &row(0, 0..3), Space::Hotel(Brand::Worldwide));
        paint(&mut game_board, &row(2, 0..3), Space::Hotel(Brand::American));

        assert_eq!(
            game_board.analyze_placement(Tile::new(0, 1), None),
            Err(Rejection::BrandRequired {
                options: vec![Brand::Worldwide, Brand::American]
            })
        );
        assert_eq!(
            game_board.analyze_placement(Tile::new(0, 1), Some(Brand::Luxor)),
            Err(Rejection::InvalidBrand(Brand::Luxor))
        );

        let placement = game_board
            .analyze_placement(Tile::new(0, 1), Some(Brand::American))
            .unwrap();
        assert_eq!(
            placement.outcome,
            PlacementOutcome::Acquisition {
                survivor: Brand::American,
                acquired: vec![Brand::Worldwide],
            }
        );
    }

    #[test]
    fn test_acquired_chains_ordered_by_size_then_code() {
        let mut game_board = new_board();
        paint(&mut game_board, &[(4, 0), (4, 1), (4, 2)], Space::Hotel(Brand::Continental));
        paint(&mut game_board, &[(3, 3), (2, 3)], Space::Hotel(Brand::Luxor));
        paint(&mut game_board, &[(5, 3), (6, 3)], Space::Hotel(Brand::Tower));
        paint(&mut game_board, &[(4, 4), (4, 5), (4, 6), (4, 7)], Space::Hotel(Brand::Imperial));

        let placement = game_board.analyze_placement(Tile::new(4, 3), None).unwrap();
        assert_eq!(
            placement.outcome,
            PlacementOutcome::Acquisition {
                survivor: Brand::Imperial,
                acquired: vec![Brand::Continental, Brand::Tower, Brand::Luxor],
            }
        );
    }

    #[test]
    fn test_locked_chain_survives_and_two_locked_are_illegal() {
        let mut game_board = new_board();
        paint(&mut game_board, &row(0, 0..SAFE_CHAIN_SIZE), Space::Hotel(Brand::Luxor));
        paint(&mut game_board, &row(2, 0..4), Space::Hotel(Brand::Tower));
        assert!(game_board.is_locked(Brand::Luxor));

        let placement = game_board.analyze_placement(Tile::new(0, 1), None).unwrap();
        assert_eq!(
            placement.outcome,
            PlacementOutcome::Acquisition {
                survivor: Brand::Luxor,
                acquired: vec![Brand::Tower],
            }
        );
        assert_eq!(
            game_board.analyze_placement(Tile::new(0, 1), Some(Brand::Tower)),
            Err(Rejection::InvalidBrand(Brand::Tower))
        );

        let mut game_board = new_board();
        paint(&mut game_board, &row(0, 0..SAFE_CHAIN_SIZE), Space::Hotel(Brand::Luxor));
        paint(&mut game_board, &row(2, 0..SAFE_CHAIN_SIZE), Space::Hotel(Brand::Tower));
        assert_eq!(
            game_board.analyze_placement(Tile::new(1, 1), None),
            Err(Rejection::IllegalMerge(Tile::new(1, 1)))
        );
        assert!(game_board.is_permanently_unplayable(Tile::new(1, 1)));
        assert!(!game_board.is_permanently_unplayable(Tile::new(1, 3)));
    }

    #[test]
    fn test_lock_is_permanent() {
        let mut game_board = new_board();
        paint(&mut game_board, &row(0, 0..SAFE_CHAIN_SIZE - 1), Space::Hotel(Brand::Festival));
        assert!(!game_board.is_locked(Brand::Festival));

        let placement = game_board
            .analyze_placement(Tile::new(SAFE_CHAIN_SIZE - 1, 0), None)
            .unwrap();
        game_board.apply_placement(&placement);
        assert!(game_board.is_locked(Brand::Festival));

        game_board.sync_chains();
        assert!(game_board.is_locked(Brand::Festival));
        assert_eq!(game_board.chain_size(Brand::Festival), SAFE_CHAIN_SIZE);
    }

    #[test]
    fn test_display() {
        let mut game_board = new_board();
        paint(&mut game_board, &[(0, 0)], Space::Independent);
        paint(&mut game_board, &[(1, 0), (2, 0)], Space::Hotel(Brand::Tower));
        let rendered = game_board.to_string();
        assert!(rendered.starts_with("*TT."));
        assert_eq!(rendered.lines().count(), BOARD_ROWS);
    }
}
