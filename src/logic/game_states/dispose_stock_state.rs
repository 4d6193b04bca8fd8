use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::logic::{brand::Brand, player::PlayerId};

/// One acquired chain waiting for its shareholders to sell, trade or keep.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct DisposeStockState {
    pub acquirer: Brand,
    pub acquiree: Brand,
    pub acquiree_size: usize,
    pub acquiree_cost_at_acquisition_time: u32,
    /// Shareholders still to decide, the front one is being prompted.
    pub resolvers: VecDeque<PlayerId>,
}

impl DisposeStockState {
    pub fn new(
        acquirer: Brand,
        acquiree: Brand,
        acquiree_size: usize,
        acquiree_cost_at_acquisition_time: u32,
        resolvers: VecDeque<PlayerId>,
    ) -> Self {
        DisposeStockState {
            acquirer,
            acquiree,
            acquiree_size,
            acquiree_cost_at_acquisition_time,
            resolvers,
        }
    }

    pub fn current_resolver(&self) -> Option<&PlayerId> {
        self.resolvers.front()
    }

    // This is called when the prompted player has decided what to do with their stock
    pub fn player_handled_stock(&mut self) {
        self.resolvers.pop_front();
    }

    /// Every shareholder has decided.
    pub fn is_resolved(&self) -> bool {
        self.resolvers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolvers_in_order() {
        let resolvers = ["b", "a"].into_iter().map(PlayerId::from).collect();
        let mut state = DisposeStockState::new(Brand::Festival, Brand::Tower, 3, 300, resolvers);

        assert_eq!(state.current_resolver(), Some(&PlayerId::from("b")));
        assert!(!state.is_resolved());
        state.player_handled_stock();
        assert_eq!(state.current_resolver(), Some(&PlayerId::from("a")));
        state.player_handled_stock();
        assert!(state.is_resolved());
        assert_eq!(state.current_resolver(), None);
    }
}
