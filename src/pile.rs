//! An ordered pile of cards with a face-up boundary.
//!
//! Index 0 is the bottom of the pile; the last index is the top. Each pile
//! carries an *expose index*: the card at position `i` is face-up iff
//! `i >= expose_index`. The expose index is a display/legality attribute
//! only, not a separate stacking structure, and it is deliberately allowed
//! to point past the end of the pile (see [`NEVER_EXPOSED`]).

use rand::Rng;
use rand::seq::SliceRandom;
use thiserror::Error;

use crate::card::{Card, Rank, Suit};

/// Expose index sentinel for a pile whose cards must never be exposed.
///
/// Larger than any index a 52-card pile can attain, so no card in the pile
/// is ever face-up. The waste pile is kept at this value for the whole
/// game.
pub const NEVER_EXPOSED: usize = 9001;

/// Errors surfaced by [`Pile`] operations.
///
/// Both variants indicate a contract violation by the caller: the rules
/// engine checks emptiness and bounds before calling into the pile, so
/// during normal play neither is ever produced.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PileError {
    /// An operation referred to a card position that does not exist.
    ///
    /// Carries the requested index; an empty-pile draw or top-card request
    /// reports index 0, the smallest position that was missing.
    #[error("no card at index {0}")]
    NotFound(usize),

    /// A removal requested more cards than the pile holds.
    #[error("cannot remove {requested} cards from a pile of {available}")]
    TooFewCards { requested: usize, available: usize },
}

/// Result type for pile operations.
pub type PileResult<T> = Result<T, PileError>;

/// An ordered stack of [`Card`]s plus the face-up boundary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pile {
    cards: Vec<Card>,
    expose_index: usize,
}

impl Pile {
    /// Create an empty pile with expose index 0.
    pub fn new() -> Self {
        Pile {
            cards: Vec::new(),
            expose_index: 0,
        }
    }

    /// Number of cards currently in the pile.
    #[inline]
    pub fn num_cards(&self) -> usize {
        self.cards.len()
    }

    /// True if the pile holds no cards.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Add a single card to the top of the pile.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Add a sequence of cards to the top of the pile, preserving their
    /// relative order (the first card ends up deepest of the added group).
    /// Consumes the input.
    pub fn add_cards(&mut self, mut cards: Vec<Card>) {
        self.cards.append(&mut cards);
    }

    /// Get the card at absolute position `index` (0 = bottom).
    ///
    /// Bounds are checked against the pile's actual size, so a request
    /// past the current top reports [`PileError::NotFound`] rather than
    /// reading a card that is not there.
    pub fn get_card(&self, index: usize) -> PileResult<Card> {
        self.cards
            .get(index)
            .copied()
            .ok_or(PileError::NotFound(index))
    }

    /// Get the card on top of the pile, or [`PileError::NotFound`] if the
    /// pile is empty.
    pub fn top_card(&self) -> PileResult<Card> {
        self.cards.last().copied().ok_or(PileError::NotFound(0))
    }

    /// Index of the top card, or `None` if the pile is empty.
    #[inline]
    pub fn top_index(&self) -> Option<usize> {
        self.cards.len().checked_sub(1)
    }

    /// Remove the top `num_cards` cards, returned bottom-of-removed-group
    /// first (the same relative order they had in the pile).
    pub fn remove_cards(&mut self, num_cards: usize) -> PileResult<Vec<Card>> {
        let available = self.cards.len();
        if num_cards > available {
            return Err(PileError::TooFewCards {
                requested: num_cards,
                available,
            });
        }
        Ok(self.cards.split_off(available - num_cards))
    }

    /// Remove and return the single top card, or [`PileError::NotFound`]
    /// if the pile is empty.
    pub fn draw_card(&mut self) -> PileResult<Card> {
        self.cards.pop().ok_or(PileError::NotFound(0))
    }

    /// Append all 52 (suit, rank) combinations, suit-major: every rank of
    /// `Suit::ALL[0]` first, then every rank of `Suit::ALL[1]`, and so on.
    ///
    /// Only meaningful on an empty pile, though that is not enforced.
    pub fn populate(&mut self) {
        for &suit in Suit::ALL.iter() {
            for &rank in Rank::ALL.iter() {
                self.cards.push(Card::new(rank, suit));
            }
        }
    }

    /// Randomly permute the pile's contents in place using the thread RNG.
    pub fn shuffle(&mut self) {
        self.shuffle_with(&mut rand::rng());
    }

    /// Randomly permute the pile's contents in place using the given RNG.
    ///
    /// Seedable entry point so deals can be reproduced in tests.
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// The current expose index.
    #[inline]
    pub fn expose_index(&self) -> usize {
        self.expose_index
    }

    /// Set the expose index.
    ///
    /// Not validated against the pile's size: setting it past the end
    /// (e.g. [`NEVER_EXPOSED`]) hides every card, including cards added
    /// later.
    #[inline]
    pub fn set_expose_index(&mut self, expose_index: usize) {
        self.expose_index = expose_index;
    }

    /// True if the card at `index` would be face-up.
    #[inline]
    pub fn is_exposed(&self, index: usize) -> bool {
        index >= self.expose_index
    }

    /// The pile's cards, bottom-to-top. Presentation layers render this
    /// slice together with [`Pile::expose_index`] as faces vs. backs.
    #[inline]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::CARDS_PER_DECK;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256PlusPlus;
    use std::collections::HashMap;

    /// Map 0..52 onto a card, rank-minor within each suit.
    fn card_from_index(i: u8) -> Card {
        let suit = Suit::ALL[(i / 13) as usize];
        let rank = Rank::ALL[(i % 13) as usize];
        Card::new(rank, suit)
    }

    fn pile_of(indices: &[u8]) -> Pile {
        let mut pile = Pile::new();
        for &i in indices {
            pile.add_card(card_from_index(i));
        }
        pile
    }

    #[test]
    fn new_pile_is_empty_with_expose_zero() {
        let pile = Pile::new();
        assert!(pile.is_empty());
        assert_eq!(pile.num_cards(), 0);
        assert_eq!(pile.expose_index(), 0);
        assert_eq!(pile.top_index(), None);
        assert_eq!(pile.top_card(), Err(PileError::NotFound(0)));
    }

    #[test]
    fn add_and_top_card() {
        let mut pile = Pile::new();
        let seven = Card::new(Rank::Seven, Suit::Clubs);
        let king = Card::new(Rank::King, Suit::Hearts);
        pile.add_card(seven);
        pile.add_card(king);
        assert_eq!(pile.num_cards(), 2);
        assert_eq!(pile.top_card(), Ok(king));
        assert_eq!(pile.top_index(), Some(1));
        assert_eq!(pile.get_card(0), Ok(seven));
    }

    #[test]
    fn get_card_checks_actual_size() {
        let pile = pile_of(&[0, 1, 2]);
        assert_eq!(pile.get_card(2), Ok(card_from_index(2)));
        assert_eq!(pile.get_card(3), Err(PileError::NotFound(3)));
        assert_eq!(pile.get_card(51), Err(PileError::NotFound(51)));
    }

    #[test]
    fn remove_cards_keeps_relative_order() {
        let mut pile = pile_of(&[10, 11, 12, 13, 14]);
        let removed = pile.remove_cards(3).unwrap();
        assert_eq!(
            removed,
            vec![card_from_index(12), card_from_index(13), card_from_index(14)]
        );
        assert_eq!(pile.num_cards(), 2);
        assert_eq!(pile.top_card(), Ok(card_from_index(11)));
    }

    #[test]
    fn remove_too_many_cards_fails_without_mutation() {
        let mut pile = pile_of(&[1, 2]);
        let before = pile.clone();
        assert_eq!(
            pile.remove_cards(3),
            Err(PileError::TooFewCards {
                requested: 3,
                available: 2,
            })
        );
        assert_eq!(pile, before);
    }

    #[test]
    fn draw_card_removes_the_top() {
        let mut pile = pile_of(&[5, 6]);
        assert_eq!(pile.draw_card(), Ok(card_from_index(6)));
        assert_eq!(pile.draw_card(), Ok(card_from_index(5)));
        assert_eq!(pile.draw_card(), Err(PileError::NotFound(0)));
    }

    #[test]
    fn populate_yields_52_distinct_cards() {
        let mut pile = Pile::new();
        pile.populate();
        assert_eq!(pile.num_cards(), CARDS_PER_DECK);

        let mut seen = HashMap::new();
        for &card in pile.cards() {
            *seen.entry(card).or_insert(0usize) += 1;
        }
        assert_eq!(seen.len(), CARDS_PER_DECK);
        assert!(seen.values().all(|&n| n == 1));

        // suit-major layout: first 13 cards share a suit, ranks ascending
        assert_eq!(pile.get_card(0), Ok(Card::new(Rank::Ace, Suit::ALL[0])));
        assert_eq!(pile.get_card(12), Ok(Card::new(Rank::King, Suit::ALL[0])));
        assert_eq!(pile.get_card(13), Ok(Card::new(Rank::Ace, Suit::ALL[1])));
    }

    #[test]
    fn shuffle_preserves_the_multiset() {
        let mut pile = Pile::new();
        pile.populate();
        let before: HashMap<Card, usize> =
            pile.cards().iter().fold(HashMap::new(), |mut m, &c| {
                *m.entry(c).or_insert(0) += 1;
                m
            });

        let mut rng = Xoshiro256PlusPlus::seed_from_u64(0xDEC0);
        pile.shuffle_with(&mut rng);

        let after: HashMap<Card, usize> =
            pile.cards().iter().fold(HashMap::new(), |mut m, &c| {
                *m.entry(c).or_insert(0) += 1;
                m
            });
        assert_eq!(before, after);
        assert_eq!(pile.num_cards(), CARDS_PER_DECK);
    }

    #[test]
    fn expose_index_is_not_validated_against_size() {
        let mut pile = pile_of(&[3]);
        pile.set_expose_index(NEVER_EXPOSED);
        assert_eq!(pile.expose_index(), NEVER_EXPOSED);
        assert!(!pile.is_exposed(0));
        assert!(!pile.is_exposed(51));

        pile.set_expose_index(0);
        assert!(pile.is_exposed(0));
    }

    proptest! {
        /// Removing any prefix of the top and adding it back restores the
        /// pile exactly.
        #[test]
        fn remove_then_add_restores_pile(
            indices in proptest::collection::vec(0u8..52, 0..52),
            split in 0usize..53,
        ) {
            let mut pile = pile_of(&indices);
            let original = pile.clone();
            let n = split % (indices.len() + 1);

            let removed = pile.remove_cards(n).unwrap();
            prop_assert_eq!(removed.len(), n);
            pile.add_cards(removed);
            prop_assert_eq!(pile, original);
        }
    }
}
