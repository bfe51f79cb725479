// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand display helpers.
use crate::Card;

/// Formats a hand as a short string with cards ordered from the highest rank,
/// cards with the same rank keep their order in the hand.
///
/// ```
/// # use handrank_cards::{represent, Card};
/// let hand = ["Ks", "Ah"].map(|c| c.parse::<Card>().unwrap());
/// assert_eq!(represent(&hand), "AhKs");
/// ```
pub fn represent(hand: &[Card]) -> String {
    let mut cards = hand.to_vec();
    cards.sort_by(|a, b| b.rank().cmp(&a.rank()));
    cards.iter().map(Card::to_string).collect()
}
