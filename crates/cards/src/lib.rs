// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Handrank Poker cards types.
//!
//! This crate define types to create and parse cards:
//!
//! ```
//! # use handrank_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let kd: Card = "Kd".parse().unwrap();
//! assert_eq!(kd.rank(), Rank::King);
//! assert_eq!(ah.to_string(), "Ah");
//! ```
//!
//! a [Deck] type for sampling and iterating cards in the deck, for example to
//! iterate through all 2 cards hands:
//!
//! ```
//! # use handrank_cards::Deck;
//! let mut counter = 0;
//! Deck::default().for_each(2, |hand| {
//!     counter += 1;
//! });
//! assert_eq!(counter, 1_326);
//! ```
//!
//! to sample 10 random 5-cards hands with a seeded generator:
//!
//! ```
//! # use handrank_cards::Deck;
//! # use rand::{SeedableRng, rngs::StdRng};
//! let mut rng = StdRng::seed_from_u64(13);
//! let mut counter = 0;
//! Deck::default().sample(&mut rng, 10, 5, |hand| {
//!     assert_eq!(hand.len(), 5);
//!     counter += 1;
//! });
//! assert_eq!(counter, 10);
//! ```
//!
//! and the [represent] function to format a hand for display.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod deck;
pub use deck::{Card, Deck, ParseCardError, Rank, Suit};

mod hand;
pub use hand::represent;
