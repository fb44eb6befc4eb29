//! Card evaluation and discard recommendation.
//!
//! Every operation here is a pure function of its inputs: the advisor
//! keeps no state between calls. Scores reward cards whose run partners
//! are still reachable, with partners already held in the hand counting
//! double and partners already discarded or played counting nothing.

use alloc::vec::Vec;

use crate::advice::Advice;
use crate::card::{Card, MAX_RANK, MIN_RANK};
use crate::error::AdviseError;
use crate::set::CardSet;

/// Rank offsets at which a same-suit card can extend a run.
pub const PARTNER_OFFSETS: [i8; 4] = [-2, -1, 1, 2];

/// How a potential partner relates to the advised hand.
///
/// The classification is a single three-way split with hand membership
/// checked first, so a held partner is never also counted as unseen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartnerStatus {
    /// The partner is held in the hand (a realized combination).
    Held,
    /// The partner was discarded or played and can no longer be drawn.
    SeenElsewhere,
    /// The partner is still obtainable from the deck or other players.
    Unseen,
}

impl PartnerStatus {
    /// Returns the score contribution of a partner with this status.
    #[must_use]
    pub const fn weight(self) -> f64 {
        match self {
            Self::Held => 2.0,
            Self::SeenElsewhere => 0.0,
            Self::Unseen => 1.0,
        }
    }
}

/// Classifies a potential partner against the hand and the seen-set.
#[must_use]
pub fn classify_partner(partner: Card, hand: &[Card], seen: CardSet) -> PartnerStatus {
    if hand.contains(&partner) {
        PartnerStatus::Held
    } else if seen.contains(partner) {
        PartnerStatus::SeenElsewhere
    } else {
        PartnerStatus::Unseen
    }
}

/// Returns the potential run partners of a card.
///
/// Partners are the same-suit cards within rank distance 1 or 2,
/// restricted to the valid rank range; a card near a rank boundary has
/// fewer than four.
#[must_use]
pub fn partners(card: Card) -> Vec<Card> {
    PARTNER_OFFSETS
        .iter()
        .filter_map(|&offset| card.rank.checked_add_signed(offset))
        .filter(|rank| (MIN_RANK..=MAX_RANK).contains(rank))
        .map(|rank| Card::new(rank, card.suit))
        .collect()
}

/// Scores a single card against the hand and the seen-set.
///
/// Each potential partner contributes its [`PartnerStatus::weight`]; the
/// sum is the score. `seen` is expected to include the hand itself, as
/// [`advise`] builds it; held partners are classified before the seen
/// check, so the hand entries in `seen` never cancel the held bonus.
#[must_use]
pub fn evaluate_card(card: Card, hand: &[Card], seen: CardSet) -> f64 {
    partners(card)
        .into_iter()
        .map(|partner| classify_partner(partner, hand, seen).weight())
        .sum()
}

/// Scores every card in the hand.
///
/// The seen-set is derived once as the union of the hand, the discarded
/// cards and the played cards. Duplicates across the three collections
/// are harmless since only membership is consulted. The returned table
/// keeps hand order. Any hand size is tolerated; an empty hand yields an
/// empty table.
///
/// # Example
///
/// ```
/// use okrs::{Card, Suit, advise};
///
/// let hand = [Card::new(1, Suit::Red), Card::new(2, Suit::Red)];
/// let advice = advise(&hand, &[], &[]);
///
/// // 1r holds one partner (2r) and can still draw the other (3r).
/// assert_eq!(advice.score(Card::new(1, Suit::Red)), Some(3.0));
/// ```
#[must_use]
pub fn advise(hand: &[Card], discarded: &[Card], played: &[Card]) -> Advice {
    let mut seen = CardSet::new();
    seen.extend(hand.iter().copied());
    seen.extend(discarded.iter().copied());
    seen.extend(played.iter().copied());

    let entries = hand
        .iter()
        .map(|&card| (card, evaluate_card(card, hand, seen)))
        .collect();

    Advice::from_entries(entries)
}

/// Picks the card to discard: the entry with the minimum score.
///
/// Ties are broken deterministically by hand order; the first entry with
/// the minimum score wins.
///
/// # Errors
///
/// Returns [`AdviseError::EmptyHand`] if the table holds no scored cards.
///
/// # Example
///
/// ```
/// use okrs::{Card, Suit, advise, recommend_discard};
///
/// let hand = [
///     Card::new(1, Suit::Red),
///     Card::new(2, Suit::Red),
///     Card::new(3, Suit::Red),
///     Card::new(5, Suit::Red),
///     Card::new(7, Suit::Red),
/// ];
/// let advice = advise(&hand, &[], &[]);
///
/// // 1r and 7r tie at the minimum; 1r comes first in the hand.
/// assert_eq!(recommend_discard(&advice), Ok(Card::new(1, Suit::Red)));
/// ```
pub fn recommend_discard(advice: &Advice) -> Result<Card, AdviseError> {
    let mut entries = advice.entries().iter();
    let &(first, first_score) = entries.next().ok_or(AdviseError::EmptyHand)?;

    let mut weakest = first;
    let mut weakest_score = first_score;
    for &(card, score) in entries {
        // Strict comparison keeps the earliest entry on ties.
        if score < weakest_score {
            weakest = card;
            weakest_score = score;
        }
    }

    Ok(weakest)
}
