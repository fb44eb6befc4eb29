//! Compact card membership set.

use crate::card::Card;

/// A set of cards backed by a 24-bit mask over [`Card::index`].
///
/// Membership is by card identity, so inserting a card twice has no
/// effect. The set is `Copy` and never allocates, which keeps the
/// advisory path free of bookkeeping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CardSet(u32);

impl CardSet {
    /// The empty set.
    pub const EMPTY: Self = Self(0);

    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    /// Inserts a card.
    ///
    /// Returns whether the card was newly inserted.
    pub const fn insert(&mut self, card: Card) -> bool {
        let bit = 1u32 << card.index();
        let newly = self.0 & bit == 0;
        self.0 |= bit;
        newly
    }

    /// Removes a card.
    ///
    /// Returns whether the card was present.
    pub const fn remove(&mut self, card: Card) -> bool {
        let bit = 1u32 << card.index();
        let present = self.0 & bit != 0;
        self.0 &= !bit;
        present
    }

    /// Returns whether the set contains the card.
    #[must_use]
    pub const fn contains(self, card: Card) -> bool {
        self.0 & (1u32 << card.index()) != 0
    }

    /// Returns the union of two sets.
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Returns the number of cards in the set.
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Returns whether the set is empty.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl FromIterator<Card> for CardSet {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        let mut set = Self::EMPTY;
        set.extend(iter);
        set
    }
}

impl Extend<Card> for CardSet {
    fn extend<I: IntoIterator<Item = Card>>(&mut self, iter: I) {
        for card in iter {
            self.insert(card);
        }
    }
}
