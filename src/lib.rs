//! An Okey discard advisor with optional `no_std` support.
//!
//! The crate scores every card in a five-card hand by its remaining
//! run-forming potential, given the cards already discarded or played,
//! and recommends the weakest card as the discard. Partners already held
//! in the hand count double; partners already out of reach count nothing.
//!
//! # Example
//!
//! ```
//! use okrs::{Card, Suit, advise, recommend_discard};
//!
//! let hand = [
//!     Card::new(1, Suit::Red),
//!     Card::new(2, Suit::Red),
//!     Card::new(3, Suit::Red),
//!     Card::new(5, Suit::Red),
//!     Card::new(7, Suit::Red),
//! ];
//!
//! let advice = advise(&hand, &[], &[]);
//! let discard = recommend_discard(&advice).unwrap();
//! assert_eq!(discard, Card::new(1, Suit::Red));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod advice;
pub mod advisor;
pub mod card;
pub mod error;
pub mod set;
pub mod table;

// Re-export main types
pub use advice::Advice;
pub use advisor::{
    PARTNER_OFFSETS, PartnerStatus, advise, classify_partner, evaluate_card, partners,
    recommend_discard,
};
pub use card::{Card, DECK_SIZE, MAX_RANK, MIN_RANK, Suit, full_deck};
pub use error::{AdviseError, ParseCardError, TableError};
pub use set::CardSet;
pub use table::{HAND_SIZE, Table};
