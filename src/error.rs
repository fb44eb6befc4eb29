//! Error types for advisory operations.

use thiserror::Error;

/// Errors that can occur when parsing a card token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseCardError {
    /// The token is empty.
    #[error("card token is empty")]
    Empty,
    /// The rank portion is missing or not a number.
    #[error("rank is missing or not a number")]
    InvalidRank,
    /// The rank is outside the valid range of 1 through 8.
    #[error("rank is outside the valid range")]
    RankOutOfRange,
    /// The suit symbol is not recognized.
    #[error("unrecognized suit symbol")]
    UnknownSuit,
}

/// Errors that can occur when requesting a discard recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AdviseError {
    /// Recommendation requested with zero scored cards.
    #[error("no scored cards to recommend from")]
    EmptyHand,
    /// The hand does not hold exactly the expected number of cards.
    #[error("hand does not hold exactly five cards")]
    InvalidHandSize,
}

/// Errors that can occur when mutating the table state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TableError {
    /// The hand already holds the maximum number of cards.
    #[error("hand is already full")]
    HandFull,
    /// The card is already held in the hand.
    #[error("card is already in the hand")]
    AlreadyInHand,
    /// The card was already discarded or played.
    #[error("card was already discarded or played")]
    CardUnavailable,
    /// The card is not held in the hand.
    #[error("card is not in the hand")]
    NotInHand,
}
