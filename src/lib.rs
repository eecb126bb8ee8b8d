//! Rules engine for Klondike solitaire.
//!
//! Tracks a 52-card deck distributed across the standard piles (main
//! deck, waste, four foundations, seven tableaus) and enforces the
//! legality of every card movement. There is no rendering, input
//! handling, or front end here: a presentation layer drives the
//! [`controller`] functions with a [`KlondikeModel`] reference and gets
//! booleans and value objects back.
//!
//! The usual flow:
//!
//! ```
//! use klondike_rules::{controller, KlondikeModel, Location};
//!
//! let mut model = KlondikeModel::new();
//! controller::init_model(&mut model);
//!
//! // a deck click moves the top card to the waste pile
//! controller::draw_card_or_recycle_waste(&mut model);
//! assert_eq!(model.waste_pile().num_cards(), 1);
//!
//! // lifting a face-down tableau card is rejected with no side effects
//! assert!(controller::select(&mut model, Location::tableau_pile(6, 0)).is_none());
//!
//! assert!(!controller::is_win(&model));
//! ```

pub mod card;
pub mod controller;
pub mod location;
pub mod model;
pub mod pile;

pub use card::{Card, Color, Rank, Suit};
pub use location::{Location, LocationType, Selection};
pub use model::KlondikeModel;
pub use pile::{Pile, PileError};
