//! Location and selection descriptors.
//!
//! A `Location` names "which pile, which card index" for a proposed move;
//! a `Selection` is the transient bundle of cards lifted from a location,
//! alive only between `select` and the matching `move_cards`/`unselect`.

use crate::card::Card;

/// The kind of pile a [`Location`] refers to.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum LocationType {
    MainDeck,
    WastePile,
    FoundationPile,
    TableauPile,
}

/// Identifies a source or destination pile, and optionally a card in it.
///
/// `pile_index` is meaningful only for foundation (0..=3) and tableau
/// (0..=6) piles; `card_index` only for the main deck and tableau piles,
/// where it names the base card of a lift. The unused fields are zero.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Location {
    location_type: LocationType,
    pile_index: usize,
    card_index: usize,
}

impl Location {
    /// A main-deck location; `card_index` must name the deck's top card
    /// for a selection to succeed.
    pub fn main_deck(card_index: usize) -> Self {
        Location {
            location_type: LocationType::MainDeck,
            pile_index: 0,
            card_index,
        }
    }

    /// The waste pile. Never a legal move source; only ever a conceptual
    /// destination that `allow_move` rejects.
    pub fn waste_pile() -> Self {
        Location {
            location_type: LocationType::WastePile,
            pile_index: 0,
            card_index: 0,
        }
    }

    /// A foundation pile destination, `pile_index` in 0..=3.
    pub fn foundation_pile(pile_index: usize) -> Self {
        Location {
            location_type: LocationType::FoundationPile,
            pile_index,
            card_index: 0,
        }
    }

    /// A tableau pile location, `pile_index` in 0..=6; `card_index` names
    /// the base of the lifted run when used as a source.
    pub fn tableau_pile(pile_index: usize, card_index: usize) -> Self {
        Location {
            location_type: LocationType::TableauPile,
            pile_index,
            card_index,
        }
    }

    #[inline]
    pub fn location_type(&self) -> LocationType {
        self.location_type
    }

    #[inline]
    pub fn pile_index(&self) -> usize {
        self.pile_index
    }

    #[inline]
    pub fn card_index(&self) -> usize {
        self.card_index
    }
}

/// Cards lifted from a pile, awaiting a destination.
///
/// Holds the detached cards (bottom-of-run first) plus the origin
/// [`Location`] by value; it never aliases the model's pile storage.
/// Consumed by `move_cards` (commit) or `unselect` (put back).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    origin: Location,
    cards: Vec<Card>,
}

impl Selection {
    /// Bundle an origin with the cards detached from it.
    pub fn new(origin: Location, cards: Vec<Card>) -> Self {
        Selection { origin, cards }
    }

    /// Where the cards were lifted from.
    #[inline]
    pub fn origin(&self) -> Location {
        self.origin
    }

    /// The lifted cards, bottom-of-run first.
    #[inline]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Number of lifted cards.
    #[inline]
    pub fn num_cards(&self) -> usize {
        self.cards.len()
    }

    /// The bottom card of the lifted run, the one the stacking rules
    /// test against a destination top card.
    #[inline]
    pub fn bottom_card(&self) -> Option<Card> {
        self.cards.first().copied()
    }

    /// Decompose into origin and cards, for committing or undoing.
    pub fn into_parts(self) -> (Location, Vec<Card>) {
        (self.origin, self.cards)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Rank, Suit};

    #[test]
    fn location_constructors() {
        let deck = Location::main_deck(23);
        assert_eq!(deck.location_type(), LocationType::MainDeck);
        assert_eq!(deck.card_index(), 23);

        let tab = Location::tableau_pile(4, 2);
        assert_eq!(tab.location_type(), LocationType::TableauPile);
        assert_eq!(tab.pile_index(), 4);
        assert_eq!(tab.card_index(), 2);

        let fnd = Location::foundation_pile(3);
        assert_eq!(fnd.location_type(), LocationType::FoundationPile);
        assert_eq!(fnd.pile_index(), 3);

        assert_eq!(
            Location::waste_pile().location_type(),
            LocationType::WastePile
        );
    }

    #[test]
    fn selection_exposes_bottom_card_and_parts() {
        let origin = Location::tableau_pile(2, 1);
        let bottom = Card::new(Rank::Nine, Suit::Hearts);
        let top = Card::new(Rank::Eight, Suit::Spades);
        let sel = Selection::new(origin, vec![bottom, top]);

        assert_eq!(sel.num_cards(), 2);
        assert_eq!(sel.bottom_card(), Some(bottom));
        assert_eq!(sel.origin(), origin);

        let (o, cards) = sel.into_parts();
        assert_eq!(o, origin);
        assert_eq!(cards, vec![bottom, top]);
    }
}
