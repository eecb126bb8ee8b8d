//! Model aggregate for a Klondike game in progress.
//!
//! `KlondikeModel` only owns piles; the rules live in
//! [`crate::controller`]. The model starts with every pile empty and is
//! dealt exactly once via [`crate::controller::init_model`].

use crate::pile::Pile;

/// Number of foundation piles.
pub const NUM_FOUNDATION_PILES: usize = 4;
/// Number of tableau piles.
pub const NUM_TABLEAU_PILES: usize = 7;

/// Pure data aggregate: one main deck, one waste pile, four foundation
/// piles, seven tableau piles. Each pile is owned exclusively by the
/// model; nothing here counts moves or keeps history.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KlondikeModel {
    main_deck: Pile,
    waste_pile: Pile,
    foundation_piles: [Pile; NUM_FOUNDATION_PILES],
    tableau_piles: [Pile; NUM_TABLEAU_PILES],
}

impl KlondikeModel {
    /// Create a model with all piles empty and un-dealt.
    pub fn new() -> Self {
        Self::default()
    }

    /// The main deck pile.
    #[inline]
    pub fn main_deck(&self) -> &Pile {
        &self.main_deck
    }

    #[inline]
    pub fn main_deck_mut(&mut self) -> &mut Pile {
        &mut self.main_deck
    }

    /// The waste pile.
    #[inline]
    pub fn waste_pile(&self) -> &Pile {
        &self.waste_pile
    }

    #[inline]
    pub fn waste_pile_mut(&mut self) -> &mut Pile {
        &mut self.waste_pile
    }

    /// Foundation pile `index`, in 0..=3.
    ///
    /// # Panics
    ///
    /// Panics if `index >= NUM_FOUNDATION_PILES`.
    #[inline]
    pub fn foundation_pile(&self, index: usize) -> &Pile {
        &self.foundation_piles[index]
    }

    #[inline]
    pub fn foundation_pile_mut(&mut self, index: usize) -> &mut Pile {
        &mut self.foundation_piles[index]
    }

    /// Tableau pile `index`, in 0..=6.
    ///
    /// # Panics
    ///
    /// Panics if `index >= NUM_TABLEAU_PILES`.
    #[inline]
    pub fn tableau_pile(&self, index: usize) -> &Pile {
        &self.tableau_piles[index]
    }

    #[inline]
    pub fn tableau_pile_mut(&mut self, index: usize) -> &mut Pile {
        &mut self.tableau_piles[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_model_has_all_piles_empty() {
        let model = KlondikeModel::new();
        assert!(model.main_deck().is_empty());
        assert!(model.waste_pile().is_empty());
        for i in 0..NUM_FOUNDATION_PILES {
            assert!(model.foundation_pile(i).is_empty());
        }
        for i in 0..NUM_TABLEAU_PILES {
            assert!(model.tableau_pile(i).is_empty());
        }
    }

    #[test]
    #[should_panic]
    fn out_of_range_tableau_index_panics() {
        let model = KlondikeModel::new();
        let _ = model.tableau_pile(NUM_TABLEAU_PILES);
    }
}
