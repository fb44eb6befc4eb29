//! Card types and deck utilities.

use core::fmt;
use core::str::FromStr;

use alloc::vec::Vec;

use crate::error::ParseCardError;

/// Card color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Red (`r`).
    Red,
    /// Yellow (`y`).
    Yellow,
    /// Blue (`b`).
    Blue,
}

impl Suit {
    /// All suits in canonical order.
    pub const ALL: [Self; 3] = [Self::Red, Self::Yellow, Self::Blue];

    /// Returns the canonical one-character symbol of the suit.
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            Self::Red => 'r',
            Self::Yellow => 'y',
            Self::Blue => 'b',
        }
    }

    /// Parses a suit from its canonical symbol.
    ///
    /// Symbols are lowercase; anything else returns `None`.
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            'r' => Some(Self::Red),
            'y' => Some(Self::Yellow),
            'b' => Some(Self::Blue),
            _ => None,
        }
    }

    /// Position of the suit in [`Self::ALL`].
    const fn index(self) -> usize {
        match self {
            Self::Red => 0,
            Self::Yellow => 1,
            Self::Blue => 2,
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// Lowest valid card rank.
pub const MIN_RANK: u8 = 1;

/// Highest valid card rank.
pub const MAX_RANK: u8 = 8;

/// Number of distinct cards in the deck.
pub const DECK_SIZE: usize = 24;

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The rank of the card (1 through 8).
    pub rank: u8,
    /// The color of the card.
    pub suit: Suit,
}

impl Card {
    /// Creates a new card.
    ///
    /// Note: This function does not validate the rank. Values outside
    /// [`MIN_RANK`]`..=`[`MAX_RANK`] are accepted but are not part of the
    /// deck; parse a token with [`str::parse`] to get validation.
    #[must_use]
    pub const fn new(rank: u8, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Returns the dense index of this card, in `0..DECK_SIZE`.
    ///
    /// Cards are indexed suit-major in [`Suit::ALL`] order with ranks
    /// ascending within each suit. The rank is assumed to be valid; see
    /// [`Self::new`].
    #[must_use]
    pub const fn index(self) -> usize {
        self.suit.index() * MAX_RANK as usize + (self.rank - MIN_RANK) as usize
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

impl FromStr for Card {
    type Err = ParseCardError;

    /// Parses the canonical `{rank}{suit}` form, e.g. `"3r"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let suit_char = chars.next_back().ok_or(ParseCardError::Empty)?;
        let suit = Suit::from_char(suit_char).ok_or(ParseCardError::UnknownSuit)?;

        let rank: u8 = chars
            .as_str()
            .parse()
            .map_err(|_| ParseCardError::InvalidRank)?;
        if !(MIN_RANK..=MAX_RANK).contains(&rank) {
            return Err(ParseCardError::RankOutOfRange);
        }

        Ok(Self::new(rank, suit))
    }
}

/// Returns all [`DECK_SIZE`] cards in canonical order.
///
/// Suits follow [`Suit::ALL`]; ranks ascend within each suit.
#[must_use]
pub fn full_deck() -> Vec<Card> {
    let mut cards = Vec::with_capacity(DECK_SIZE);

    for suit in Suit::ALL {
        for rank in MIN_RANK..=MAX_RANK {
            cards.push(Card::new(rank, suit));
        }
    }

    cards
}
