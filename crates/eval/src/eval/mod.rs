// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker hand evaluator.
//!
//! Evaluates 5, 6, and 7 cards poker hands using ranks and suits bitsets in the
//! manner of the [Cactus Kev's][kevlink] card encoding, without lookup tables.
//!
//! It provides a [HandValue::eval] method that computes the value of the best
//! five cards hand, and a [HandValue::eval_omaha] method that applies the Omaha
//! rule of using exactly two hole cards and three board cards.
//!
//! [kevlink]: http://suffe.cool/poker/evaluator.html

#[allow(clippy::module_inception)]
mod eval;
pub use eval::{HandRank, HandValue};
