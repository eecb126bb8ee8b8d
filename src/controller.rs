//! The Klondike rules engine.
//!
//! All of the game logic lives here as stateless free functions; every
//! piece of game state lives in the [`KlondikeModel`] passed to each call.
//! A presentation layer drives the engine with discrete gestures:
//! [`select`] lifts cards, [`allow_move`] judges a destination,
//! [`move_cards`] commits, [`unselect`] puts a rejected lift back, and
//! [`draw_card_or_recycle_waste`] handles deck clicks.
//!
//! Legality failures are ordinary values (`None` / `false`), never errors:
//! both [`select`] and [`allow_move`] leave the model untouched when they
//! report failure.

use log::{debug, trace};
use rand::Rng;

use crate::card::{fits_on_foundation, fits_on_tableau, NUM_RANKS, Rank};
use crate::location::{Location, LocationType, Selection};
use crate::model::{KlondikeModel, NUM_FOUNDATION_PILES, NUM_TABLEAU_PILES};
use crate::pile::NEVER_EXPOSED;

/// Deal a new game into an empty model, using the thread RNG for the
/// shuffle. Must be performed exactly once before play.
pub fn init_model(model: &mut KlondikeModel) {
    init_model_with_rng(model, &mut rand::rng());
}

/// Deal a new game into an empty model using the given RNG, so deals can
/// be reproduced from a seed.
///
/// Populates and shuffles the main deck, then deals `i + 1` cards onto
/// tableau pile `i` (28 cards total, 24 remain in the deck). Foundations
/// expose everything they will ever hold; each tableau pile and the main
/// deck expose only their top card; the waste pile's expose index is
/// pinned past any reachable size.
pub fn init_model_with_rng<R: Rng + ?Sized>(model: &mut KlondikeModel, rng: &mut R) {
    model.main_deck_mut().populate();
    model.main_deck_mut().shuffle_with(rng);

    for i in 0..NUM_TABLEAU_PILES {
        let dealt = model
            .main_deck_mut()
            .remove_cards(i + 1)
            .expect("a freshly populated deck covers the 28-card deal");
        model.tableau_pile_mut(i).add_cards(dealt);
    }

    for i in 0..NUM_FOUNDATION_PILES {
        model.foundation_pile_mut(i).set_expose_index(0);
    }
    for i in 0..NUM_TABLEAU_PILES {
        let pile = model.tableau_pile_mut(i);
        let top = pile.num_cards() - 1;
        pile.set_expose_index(top);
    }

    let deck = model.main_deck_mut();
    let top = deck.num_cards() - 1;
    deck.set_expose_index(top);

    model.waste_pile_mut().set_expose_index(NEVER_EXPOSED);

    debug!(
        "dealt new game, {} cards left in the main deck",
        model.main_deck().num_cards()
    );
}

/// Attempt to lift cards for a pending move.
///
/// - Main deck: legal only when the deck is non-empty and
///   `location.card_index()` names its top card; lifts that single card.
/// - Tableau pile: legal only when `location.card_index()` names a
///   face-up card (`>= expose_index`, `< num_cards`); lifts that card and
///   every card above it.
/// - Waste and foundation piles are never legal sources.
///
/// On success the cards are detached from the source pile and returned
/// inside a [`Selection`]; on any violated precondition the source is
/// left unmodified and `None` is returned.
pub fn select(model: &mut KlondikeModel, location: Location) -> Option<Selection> {
    match location.location_type() {
        LocationType::MainDeck => {
            let deck = model.main_deck_mut();
            let top = deck.top_index()?;
            if location.card_index() != top {
                return None;
            }
            let cards = deck.remove_cards(1).ok()?;
            trace!("selected {} from the main deck", cards[0]);
            Some(Selection::new(location, cards))
        }

        LocationType::TableauPile => {
            if location.pile_index() >= NUM_TABLEAU_PILES {
                return None;
            }
            let pile = model.tableau_pile_mut(location.pile_index());
            if location.card_index() >= pile.num_cards()
                || location.card_index() < pile.expose_index()
            {
                return None;
            }
            let count = pile.num_cards() - location.card_index();
            let cards = pile.remove_cards(count).ok()?;
            trace!(
                "selected {} card(s) from tableau pile {}",
                cards.len(),
                location.pile_index()
            );
            Some(Selection::new(location, cards))
        }

        LocationType::WastePile | LocationType::FoundationPile => None,
    }
}

/// Undo a selection the caller decided not to commit: the cards go back
/// onto the top of the pile they were lifted from, in their original
/// order.
pub fn unselect(model: &mut KlondikeModel, selection: Selection) {
    let (origin, cards) = selection.into_parts();
    match origin.location_type() {
        LocationType::MainDeck => model.main_deck_mut().add_cards(cards),
        LocationType::TableauPile => {
            model.tableau_pile_mut(origin.pile_index()).add_cards(cards)
        }
        LocationType::WastePile | LocationType::FoundationPile => {
            // `select` never produces these origins.
            debug_assert!(false, "selection origin must be the main deck or a tableau pile");
        }
    }
}

/// Decide whether the selection may be moved to `dest`. Pure predicate:
/// no cards move.
///
/// - Foundation destination: exactly one card, and either the pile is
///   empty and the card is an Ace, or the card matches the top card's
///   suit and is one rank higher.
/// - Tableau destination: either the pile is empty and the selection's
///   bottom card is a King, or the bottom card is the opposite color of
///   the top card and one rank lower.
/// - The main deck and waste pile are never legal destinations.
pub fn allow_move(model: &KlondikeModel, selection: &Selection, dest: Location) -> bool {
    match dest.location_type() {
        LocationType::FoundationPile => {
            if selection.num_cards() != 1 || dest.pile_index() >= NUM_FOUNDATION_PILES {
                return false;
            }
            let Some(card) = selection.bottom_card() else {
                return false;
            };
            match model.foundation_pile(dest.pile_index()).top_card() {
                Err(_) => card.rank() == Rank::Ace,
                Ok(top) => fits_on_foundation(card, top),
            }
        }

        LocationType::TableauPile => {
            if dest.pile_index() >= NUM_TABLEAU_PILES {
                return false;
            }
            let Some(bottom) = selection.bottom_card() else {
                return false;
            };
            match model.tableau_pile(dest.pile_index()).top_card() {
                Err(_) => bottom.rank() == Rank::King,
                Ok(top) => fits_on_tableau(bottom, top),
            }
        }

        LocationType::MainDeck | LocationType::WastePile => false,
    }
}

/// Commit a selection to a destination already approved by
/// [`allow_move`]; legality is not re-checked.
///
/// The destination pile's expose index is left alone. If the origin was a
/// tableau pile whose expose index now points past its last card, the
/// expose index is pulled back to the new top, flipping it face-up (a
/// now-empty origin ends at expose index 0, so its next card is face-up).
/// A main-deck origin re-exposes its new top unconditionally.
pub fn move_cards(model: &mut KlondikeModel, selection: Selection, dest: Location) {
    let (origin, cards) = selection.into_parts();
    debug!(
        "moving {} card(s) from {:?} to {:?}",
        cards.len(),
        origin.location_type(),
        dest.location_type()
    );

    match dest.location_type() {
        LocationType::FoundationPile => {
            model.foundation_pile_mut(dest.pile_index()).add_cards(cards)
        }
        LocationType::TableauPile => {
            model.tableau_pile_mut(dest.pile_index()).add_cards(cards)
        }
        LocationType::MainDeck | LocationType::WastePile => {
            debug_assert!(false, "move destination must be a foundation or tableau pile");
        }
    }

    match origin.location_type() {
        LocationType::TableauPile => {
            let pile = model.tableau_pile_mut(origin.pile_index());
            let new_top = pile.num_cards().saturating_sub(1);
            if pile.expose_index() > new_top {
                pile.set_expose_index(new_top);
            }
        }
        LocationType::MainDeck => {
            let deck = model.main_deck_mut();
            let new_top = deck.num_cards().saturating_sub(1);
            deck.set_expose_index(new_top);
        }
        LocationType::WastePile | LocationType::FoundationPile => {}
    }
}

/// Handle a deck click: draw the main deck's top card onto the waste
/// pile, or, when the deck is empty, drain the waste back into the deck
/// one card at a time.
///
/// The one-at-a-time drain reverses the waste pile's order, which is
/// exactly what restores the deck's original order: drawing all 24 deck
/// cards and then recycling leaves the deck as it was before the draws
/// began. Either way the deck's top card is re-exposed afterwards if the
/// deck is non-empty.
pub fn draw_card_or_recycle_waste(model: &mut KlondikeModel) {
    match model.main_deck_mut().draw_card() {
        Ok(card) => {
            trace!("drew {card} onto the waste pile");
            model.waste_pile_mut().add_card(card);
        }
        Err(_) => {
            debug!(
                "main deck empty, recycling {} waste card(s)",
                model.waste_pile().num_cards()
            );
            while let Ok(card) = model.waste_pile_mut().draw_card() {
                model.main_deck_mut().add_card(card);
            }
        }
    }

    if let Some(top) = model.main_deck().top_index() {
        model.main_deck_mut().set_expose_index(top);
    }
}

/// True iff every foundation pile holds all 13 cards of its suit.
pub fn is_win(model: &KlondikeModel) -> bool {
    (0..NUM_FOUNDATION_PILES).all(|i| model.foundation_pile(i).num_cards() == NUM_RANKS)
}
