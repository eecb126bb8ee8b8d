//! Card, Suit, Rank, and Color value objects for a standard 52-card deck.
//!
//! - `Card` is an immutable (rank, suit) pair compared by value.
//! - `Suit` maps to exactly one `Color`; rank order is Ace-low
//!   (Ace = 0 ... King = 12).

use core::fmt;

/// Number of suits in a standard deck.
pub const NUM_SUITS: usize = 4;
/// Number of ranks in a standard deck.
pub const NUM_RANKS: usize = 13;
/// Number of cards in a standard deck.
pub const CARDS_PER_DECK: usize = NUM_SUITS * NUM_RANKS;

/// The four suits in a standard deck.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Suit {
    Hearts,
    Clubs,
    Spades,
    Diamonds,
}

/// Red or black; the only suit property tableau stacking cares about.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Color {
    Red,
    Black,
}

/// The thirteen ranks in a standard deck, Ace low.
///
/// The discriminant doubles as the rank ordinal (0..=12) used by the
/// stacking rules.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
#[repr(u8)]
pub enum Rank {
    Ace = 0,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King, // 12
}

/// A playing card: an immutable (rank, suit) pair.
///
/// Two cards are equal iff their ranks and suits match; there is no card
/// identity beyond the value.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Suit {
    /// All suits in a fixed, reproducible order.
    pub const ALL: [Suit; NUM_SUITS] = [
        Suit::Hearts,
        Suit::Clubs,
        Suit::Spades,
        Suit::Diamonds,
    ];

    /// The color of this suit: hearts/diamonds red, clubs/spades black.
    #[inline]
    pub fn color(self) -> Color {
        match self {
            Suit::Hearts | Suit::Diamonds => Color::Red,
            Suit::Clubs | Suit::Spades => Color::Black,
        }
    }

    /// Single-character representation: 'H', 'C', 'S', or 'D'.
    #[inline]
    pub fn short_char(self) -> char {
        match self {
            Suit::Hearts => 'H',
            Suit::Clubs => 'C',
            Suit::Spades => 'S',
            Suit::Diamonds => 'D',
        }
    }
}

impl Rank {
    /// All ranks in a fixed, reproducible order (Ace..King).
    pub const ALL: [Rank; NUM_RANKS] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    /// Rank ordinal in 0..=12 (Ace=0, King=12).
    #[inline]
    pub fn ordinal(self) -> u8 {
        self as u8
    }

    /// Rank number in 1..=13 (Ace=1, King=13).
    #[inline]
    pub fn number(self) -> u8 {
        self as u8 + 1
    }

    /// Single-character representation: 'A', '2'..'9', 'T', 'J', 'Q', 'K'.
    #[inline]
    pub fn short_char(self) -> char {
        match self {
            Rank::Ace => 'A',
            Rank::Two => '2',
            Rank::Three => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
        }
    }
}

impl Card {
    /// Create a new card from a rank and suit.
    #[inline]
    pub fn new(rank: Rank, suit: Suit) -> Self {
        Card { rank, suit }
    }

    /// Return the rank of this card.
    #[inline]
    pub fn rank(self) -> Rank {
        self.rank
    }

    /// Return the suit of this card.
    #[inline]
    pub fn suit(self) -> Suit {
        self.suit
    }

    /// Return the color of this card's suit.
    #[inline]
    pub fn color(self) -> Color {
        self.suit.color()
    }

    /// Short string like "AH", "7C", "TD", "KS".
    pub fn short_str(self) -> String {
        format!("{}{}", self.rank.short_char(), self.suit.short_char())
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.short_str())
    }
}

/// Tableau stacking rule: can `card` be placed on `dest_top`?
///
/// True if `card` is opposite color from `dest_top` and exactly one rank
/// lower.
#[inline]
pub fn fits_on_tableau(card: Card, dest_top: Card) -> bool {
    card.color() != dest_top.color()
        && card.rank().ordinal() + 1 == dest_top.rank().ordinal()
}

/// Foundation stacking rule: can `card` be placed on `dest_top`?
///
/// True if `card` has the same suit as `dest_top` and is exactly one rank
/// higher.
#[inline]
pub fn fits_on_foundation(card: Card, dest_top: Card) -> bool {
    card.suit() == dest_top.suit()
        && card.rank().ordinal() == dest_top.rank().ordinal() + 1
}
