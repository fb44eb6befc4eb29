//! Caller-owned table state.

use alloc::vec::Vec;

use crate::advice::Advice;
use crate::advisor::{advise, recommend_discard};
use crate::card::Card;
use crate::error::{AdviseError, TableError};
use crate::set::CardSet;

/// Number of cards in a complete hand.
pub const HAND_SIZE: usize = 5;

/// Accumulated card selections for one advisory session.
///
/// The advisor itself is stateless; the caller owns a `Table`, mutates it
/// as the player picks cards, and asks for fresh advice after every
/// change. Discarded and played cards are recorded exactly as given,
/// duplicates included, since scoring only consults membership.
///
/// # Example
///
/// ```
/// use okrs::{Card, Suit, Table};
///
/// let mut table = Table::new();
/// table.add_to_hand(Card::new(3, Suit::Red)).unwrap();
/// table.mark_discarded(Card::new(4, Suit::Red));
///
/// assert_eq!(table.hand().len(), 1);
/// assert_eq!(table.discarded().len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Table {
    /// Cards currently held, in pick order.
    hand: Vec<Card>,
    /// Cards discarded, by this player or anyone else.
    discarded: Vec<Card>,
    /// Cards played in combinations by anyone.
    played: Vec<Card>,
}

impl Table {
    /// Creates an empty table.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            hand: Vec::new(),
            discarded: Vec::new(),
            played: Vec::new(),
        }
    }

    /// Adds a card to the hand.
    ///
    /// # Errors
    ///
    /// Returns an error if the hand already holds [`HAND_SIZE`] cards, if
    /// the card is already held, or if the card was already recorded as
    /// discarded or played.
    pub fn add_to_hand(&mut self, card: Card) -> Result<(), TableError> {
        if self.hand.len() >= HAND_SIZE {
            return Err(TableError::HandFull);
        }
        if self.hand.contains(&card) {
            return Err(TableError::AlreadyInHand);
        }
        if self.discarded.contains(&card) || self.played.contains(&card) {
            return Err(TableError::CardUnavailable);
        }

        self.hand.push(card);
        Ok(())
    }

    /// Removes a card from the hand and records it as discarded.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::NotInHand`] if the card is not held.
    pub fn discard(&mut self, card: Card) -> Result<(), TableError> {
        let position = self
            .hand
            .iter()
            .position(|&held| held == card)
            .ok_or(TableError::NotInHand)?;

        self.hand.remove(position);
        self.discarded.push(card);
        Ok(())
    }

    /// Records a card discarded elsewhere, by another player.
    ///
    /// Not validated: overlaps with the hand and duplicates are legal
    /// inputs and do not affect scoring.
    pub fn mark_discarded(&mut self, card: Card) {
        self.discarded.push(card);
    }

    /// Records a card played in a combination.
    ///
    /// Not validated, as for [`Self::mark_discarded`].
    pub fn mark_played(&mut self, card: Card) {
        self.played.push(card);
    }

    /// Clears the hand and both seen piles.
    pub fn reset(&mut self) {
        self.hand.clear();
        self.discarded.clear();
        self.played.clear();
    }

    /// Returns the held cards in pick order.
    #[must_use]
    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    /// Returns the recorded discards.
    #[must_use]
    pub fn discarded(&self) -> &[Card] {
        &self.discarded
    }

    /// Returns the recorded played cards.
    #[must_use]
    pub fn played(&self) -> &[Card] {
        &self.played
    }

    /// Returns every card recorded on the table, hand included.
    ///
    /// Useful for rendering which deck cards are still selectable.
    #[must_use]
    pub fn used(&self) -> CardSet {
        let mut used = CardSet::new();
        used.extend(self.hand.iter().copied());
        used.extend(self.discarded.iter().copied());
        used.extend(self.played.iter().copied());
        used
    }

    /// Returns whether the hand holds exactly [`HAND_SIZE`] cards.
    #[must_use]
    pub fn has_full_hand(&self) -> bool {
        self.hand.len() == HAND_SIZE
    }

    /// Scores the current hand against the recorded seen cards.
    #[must_use]
    pub fn advice(&self) -> Advice {
        advise(&self.hand, &self.discarded, &self.played)
    }

    /// Recommends the card to discard from a complete hand.
    ///
    /// # Errors
    ///
    /// Returns [`AdviseError::InvalidHandSize`] if the hand does not hold
    /// exactly [`HAND_SIZE`] cards.
    pub fn recommend_discard(&self) -> Result<Card, AdviseError> {
        if !self.has_full_hand() {
            return Err(AdviseError::InvalidHandSize);
        }

        recommend_discard(&self.advice())
    }
}
