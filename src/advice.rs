//! Advisory result types.

use alloc::vec::Vec;

use crate::card::Card;

/// A card-to-score table for one hand.
///
/// Entries keep the order the hand was given in, which is also the order
/// ties are resolved in; see [`recommend_discard`](crate::recommend_discard).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Advice {
    /// Scored cards in hand order.
    entries: Vec<(Card, f64)>,
}

impl Advice {
    pub(crate) const fn from_entries(entries: Vec<(Card, f64)>) -> Self {
        Self { entries }
    }

    /// Returns the scored entries in hand order.
    #[must_use]
    pub fn entries(&self) -> &[(Card, f64)] {
        &self.entries
    }

    /// Returns the score of the given card, if it was part of the hand.
    #[must_use]
    pub fn score(&self, card: Card) -> Option<f64> {
        self.entries
            .iter()
            .find(|&&(scored, _)| scored == card)
            .map(|&(_, score)| score)
    }

    /// Returns the entries sorted by descending score.
    ///
    /// The sort is stable, so cards with equal scores keep their hand
    /// order. This is the presentation order, best card first.
    #[must_use]
    pub fn ranked(&self) -> Vec<(Card, f64)> {
        let mut ranked = self.entries.clone();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
        ranked
    }

    /// Returns the number of scored cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether the table holds no scored cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
