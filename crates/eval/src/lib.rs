// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Handrank Poker hand evaluator.
//!
//! Poker hand evaluator for 5, 6 and 7 cards hands and Omaha hands, and
//! percentile rankings of the starting hands of Texas Hold'em and Omaha Hold'em.
//!
//! To use the evaluator create a hand and use [HandValue] to evaluate the hand
//! and get its rank:
//!
//! ```
//! # use handrank_eval::*;
//! // 2C, 3C, .., JC
//! let cards = Deck::default().into_iter().take(10).collect::<Vec<_>>();
//! let v1 = HandValue::eval(&cards[0..5]);
//! let v2 = HandValue::eval(&cards[5..]);
//! assert!(v2 > v1);
//! assert_eq!(v2.rank(), HandRank::StraightFlush);
//! ```
//!
//! To rank starting hands build a [HandRanking] for a [Variant]:
//!
//! ```
//! # use handrank_eval::*;
//! let config = Config { trials: 100, opponents: 1, ..Config::default() };
//! let ranking = HandRanking::new(Variant::TexasHoldem, config).unwrap();
//!
//! let aces = ["Ah", "As"].map(|c| c.parse::<Card>().unwrap());
//! let percentile = ranking.percentile(&aces).unwrap();
//! assert!(percentile < 0.05);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod eval;
pub use eval::{HandRank, HandValue};

pub mod ranking;
pub use ranking::{Config, HandRanking, StartingHand, Variant};

// Reexport cards types.
pub use handrank_cards::{Card, Deck, Rank, Suit, represent};
