use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::logic::{game_states::dispose_stock_state::DisposeStockState, player::PlayerId};

/// All acquisitions triggered by one placement, resolved one chain at a time.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct MergerState {
    pub merge_maker: PlayerId,
    pub current: DisposeStockState,
    pub queued: VecDeque<DisposeStockState>,
}

impl MergerState {
    /// `None` when the placement acquired nothing.
    pub fn new(merge_maker: PlayerId, mut acquisitions: VecDeque<DisposeStockState>) -> Option<Self> {
        let current = acquisitions.pop_front()?;
        Some(MergerState {
            merge_maker,
            current,
            queued: acquisitions,
        })
    }

    // The game should call this after the current acquisition has been resolved
    // It returns the resolved acquisition and false once none remain
    pub fn acquisition_resolved(&mut self) -> (DisposeStockState, bool) {
        match self.queued.pop_front() {
            Some(next) => (std::mem::replace(&mut self.current, next), true),
            None => (self.current.clone(), false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::brand::Brand;

    fn acquisition(acquiree: Brand) -> DisposeStockState {
        DisposeStockState::new(Brand::Imperial, acquiree, 2, 200, VecDeque::new())
    }

    #[test]
    fn test_walks_acquisitions_in_order() {
        let queue = [Brand::Tower, Brand::Luxor].into_iter().map(acquisition).collect();
        let mut merger = MergerState::new(PlayerId::from("a"), queue).unwrap();

        assert_eq!(merger.current.acquiree, Brand::Tower);
        let (resolved, more) = merger.acquisition_resolved();
        assert_eq!(resolved.acquiree, Brand::Tower);
        assert!(more);
        assert_eq!(merger.current.acquiree, Brand::Luxor);

        let (resolved, more) = merger.acquisition_resolved();
        assert_eq!(resolved.acquiree, Brand::Luxor);
        assert!(!more);
    }

    #[test]
    fn test_empty_merger() {
        assert!(MergerState::new(PlayerId::from("a"), VecDeque::new()).is_none());
    }
}
