// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand value computation.
use std::fmt;

use handrank_cards::Card;

/// Bit mask for the wheel (Ace, two, three, four, five).
const WHEEL: u32 = 0b1_0000_0000_1111;

/// Bits used by the kickers and ranks details of a hand value.
const DETAIL_BITS: u32 = 26;

/// The hand category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HandRank {
    /// No matches.
    HighCard = 0,
    /// One card matches another.
    OnePair,
    /// Two different pair of matching cards.
    TwoPair,
    /// Three of the same rank.
    ThreeOfAKind,
    /// Five cards in a sequence.
    Straight,
    /// Five cards of the same suit.
    Flush,
    /// Three of one rank and two of another rank.
    FullHouse,
    /// Four of the same rank.
    FourOfAKind,
    /// Five cards in a sequence all of the same suit.
    StraightFlush,
}

impl HandRank {
    fn from_bits(bits: u32) -> Self {
        match bits {
            0 => HandRank::HighCard,
            1 => HandRank::OnePair,
            2 => HandRank::TwoPair,
            3 => HandRank::ThreeOfAKind,
            4 => HandRank::Straight,
            5 => HandRank::Flush,
            6 => HandRank::FullHouse,
            7 => HandRank::FourOfAKind,
            _ => HandRank::StraightFlush,
        }
    }
}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rank = match self {
            HandRank::HighCard => "High Card",
            HandRank::OnePair => "One Pair",
            HandRank::TwoPair => "Two Pair",
            HandRank::ThreeOfAKind => "Three of a Kind",
            HandRank::Straight => "Straight",
            HandRank::Flush => "Flush",
            HandRank::FullHouse => "Full House",
            HandRank::FourOfAKind => "Four of a Kind",
            HandRank::StraightFlush => "Straight Flush",
        };

        write!(f, "{rank}")
    }
}

/// The value of a poker hand, a stronger hand has a greater value.
///
/// The value packs the [HandRank] in the top bits and the ranks bitsets that
/// break ties within the same category in the lower 26 bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HandValue(u32);

impl HandValue {
    /// Evaluates the best five cards hand out of 5, 6 or 7 cards.
    ///
    /// Panics if `cards` has less than 5 or more than 7 cards.
    pub fn eval(cards: &[Card]) -> Self {
        assert!((5..=7).contains(&cards.len()), "5 <= cards <= 7");

        let mut rank_to_count = [0u8; 13];
        let mut count_to_ranks = [0u32; 5];
        let mut suit_ranks = [0u32; 4];
        let mut ranks = 0u32;

        for card in cards {
            let r = card.rank_bits() as usize;
            ranks |= 1 << r;
            rank_to_count[r] += 1;
            suit_ranks[card.suit_index()] |= 1 << r;
        }

        for (rank, &count) in rank_to_count.iter().enumerate() {
            count_to_ranks[count as usize] |= 1 << rank;
        }

        if let Some(&flush) = suit_ranks.iter().find(|s| s.count_ones() >= 5) {
            // With at most 7 cards a flush excludes quads and full houses.
            return match straight(flush) {
                Some(high) => Self::new(HandRank::StraightFlush, high),
                None => Self::new(HandRank::Flush, keep_n(flush, 5)),
            };
        }

        let quads = count_to_ranks[4];
        let trips = count_to_ranks[3];
        let pairs = count_to_ranks[2];

        if quads != 0 {
            let kicker = keep_highest(ranks ^ quads);
            Self::new(HandRank::FourOfAKind, (quads << 13) | kicker)
        } else if trips.count_ones() == 2 {
            let set = keep_highest(trips);
            Self::new(HandRank::FullHouse, (set << 13) | (trips ^ set))
        } else if trips != 0 && pairs != 0 {
            Self::new(HandRank::FullHouse, (trips << 13) | keep_highest(pairs))
        } else if let Some(high) = straight(ranks) {
            Self::new(HandRank::Straight, high)
        } else if trips != 0 {
            let kickers = keep_n(ranks ^ trips, 2);
            Self::new(HandRank::ThreeOfAKind, (trips << 13) | kickers)
        } else if pairs.count_ones() >= 2 {
            let two_pairs = keep_n(pairs, 2);
            let kicker = keep_highest(ranks ^ two_pairs);
            Self::new(HandRank::TwoPair, (two_pairs << 13) | kicker)
        } else if pairs != 0 {
            let kickers = keep_n(ranks ^ pairs, 3);
            Self::new(HandRank::OnePair, (pairs << 13) | kickers)
        } else {
            Self::new(HandRank::HighCard, keep_n(ranks, 5))
        }
    }

    /// Evaluates an Omaha hand, the best hand uses exactly two cards from the
    /// `hole` cards and three cards from the `board`.
    ///
    /// Panics if there are less than two hole cards or three board cards.
    pub fn eval_omaha(hole: &[Card], board: &[Card]) -> Self {
        assert!(hole.len() >= 2, "hole >= 2");
        assert!(board.len() >= 3, "board >= 3");

        let mut best = HandValue(0);
        let mut hand = [hole[0]; 5];

        for h1 in 0..hole.len() {
            for h2 in (h1 + 1)..hole.len() {
                hand[0] = hole[h1];
                hand[1] = hole[h2];

                for b1 in 0..board.len() {
                    for b2 in (b1 + 1)..board.len() {
                        for b3 in (b2 + 1)..board.len() {
                            hand[2] = board[b1];
                            hand[3] = board[b2];
                            hand[4] = board[b3];
                            best = best.max(Self::eval(&hand));
                        }
                    }
                }
            }
        }

        best
    }

    /// The category of this hand.
    pub fn rank(&self) -> HandRank {
        HandRank::from_bits(self.0 >> DETAIL_BITS)
    }

    fn new(rank: HandRank, detail: u32) -> Self {
        Self(((rank as u32) << DETAIL_BITS) | detail)
    }
}

/// Returns the index of the highest card of the best straight in the ranks
/// bitset, the wheel is the lowest straight.
fn straight(ranks: u32) -> Option<u32> {
    let run = ranks & (ranks << 1) & (ranks << 2) & (ranks << 3) & (ranks << 4);
    if run != 0 {
        Some(31 - run.leading_zeros())
    } else if ranks & WHEEL == WHEEL {
        Some(3)
    } else {
        None
    }
}

/// Keeps only the most significant bit.
fn keep_highest(ranks: u32) -> u32 {
    if ranks == 0 {
        0
    } else {
        1 << (31 - ranks.leading_zeros())
    }
}

/// Keeps the n most significant bits.
fn keep_n(ranks: u32, n: u32) -> u32 {
    let mut result = ranks;
    while result.count_ones() > n {
        result &= result - 1;
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use handrank_cards::Deck;

    fn cards(s: &str) -> Vec<Card> {
        s.split_whitespace().map(|c| c.parse().unwrap()).collect()
    }

    fn eval(s: &str) -> HandValue {
        HandValue::eval(&cards(s))
    }

    #[test]
    fn bit_helpers() {
        assert_eq!(keep_highest(0b111), 0b100);
        assert_eq!(keep_highest(0), 0);
        assert_eq!(keep_n(0b1111, 3), 0b1110);
        assert_eq!(straight(0b11111), Some(4));
        assert_eq!(straight(WHEEL), Some(3));
        assert_eq!(straight(0b1_1111_0000_0000), Some(12));
        assert_eq!(straight(0b1_0111_0000_0000), None);
    }

    #[test]
    fn hand_ranks() {
        assert_eq!(eval("Ah Kh Qh Jh Th").rank(), HandRank::StraightFlush);
        assert_eq!(eval("9c 9d 9h 9s 2c").rank(), HandRank::FourOfAKind);
        assert_eq!(eval("9c 9d 9h 2s 2c").rank(), HandRank::FullHouse);
        assert_eq!(eval("Ac 9c 7c 4c 2c").rank(), HandRank::Flush);
        assert_eq!(eval("Ac 2d 3h 4s 5c").rank(), HandRank::Straight);
        assert_eq!(eval("9c 9d 9h 4s 2c").rank(), HandRank::ThreeOfAKind);
        assert_eq!(eval("9c 9d 4h 4s 2c").rank(), HandRank::TwoPair);
        assert_eq!(eval("9c 9d 5h 4s 2c").rank(), HandRank::OnePair);
        assert_eq!(eval("Kc 9d 5h 4s 2c").rank(), HandRank::HighCard);
    }

    #[test]
    fn hand_ordering() {
        // Wheel is the lowest straight.
        assert!(eval("Ac 2d 3h 4s 5c") < eval("2d 3h 4s 5c 6d"));
        assert!(eval("5s 4s 3s 2s As") < eval("6s 5s 4s 3s 2s"));

        // Kickers.
        assert!(eval("Ac Ad Kh 4s 2c") > eval("Ac Ad Qh Js Tc"));
        assert!(eval("Kc Kd 2h 2s Ac") > eval("Kc Kd 2h 2s Qc"));
        assert!(eval("Ah 9c 7c 4c 2c") > eval("Kh Qc Jc 9c 7d"));
        assert_eq!(eval("Ah Kc 7c 4c 2c"), eval("As Kd 7h 4s 2d"));

        // Full houses compare the set first.
        assert!(eval("3c 3d 3h 2s 2c") > eval("2c 2d 2h As Ac"));

        // Categories.
        assert!(eval("2c 3c 4c 5c 6c") > eval("Ac Ad Ah As Kc"));
        assert!(eval("2c 2d 2h 3s 3c") > eval("Ac Kc Qc Jc 9c"));
    }

    #[test]
    fn seven_cards() {
        // Two sets make a full house with the highest set.
        let v = eval("9c 9d 9h 5s 5c 5d Ah");
        assert_eq!(v.rank(), HandRank::FullHouse);
        assert!(v > eval("9c 9d 9h 4s 4c Kd Ah"));

        // Three pairs keep the two highest pairs and best kicker.
        assert_eq!(eval("Ac Ad Kc Kd Qc Qd 2h"), eval("Ac Ad Kc Kd Qh 2s 3s"));

        // Flush beats the straight on the same cards.
        assert_eq!(eval("2h 3h 4h 5d 6h 9h Kc").rank(), HandRank::Flush);

        // Quads with a best kicker.
        assert_eq!(eval("7c 7d 7h 7s Ac Kd Qd"), eval("7c 7d 7h 7s As 2d 3c"));

        // The best straight out of six consecutive cards.
        assert_eq!(eval("4c 5d 6h 7s 8c 9d Kh"), eval("5c 6d 7h 8s 9c Ad Kh"));

        // Straight flush in a seven cards flush.
        assert_eq!(eval("2h 3h 4h 5h 6h 9h Kh").rank(), HandRank::StraightFlush);
    }

    #[test]
    fn omaha_uses_two_hole_cards() {
        // Four hearts on the board but only one in the hand is not a flush.
        let hole = cards("Ah Kc Qd 2s");
        let board = cards("3h 7h 9h Jh 5c");
        assert_ne!(HandValue::eval_omaha(&hole, &board).rank(), HandRank::Flush);

        // Two hearts in the hand make the nut flush.
        let hole = cards("Ah Kh Qd 2s");
        let value = HandValue::eval_omaha(&hole, &board);
        assert_eq!(value.rank(), HandRank::Flush);
        assert_eq!(value, eval("Ah Kh Jh 9h 7h"));

        // Four aces in the hand are only a pair of aces with the board.
        let hole = cards("Ac Ad Ah As");
        let board = cards("2c 7d 9h Js 4c");
        assert_eq!(HandValue::eval_omaha(&hole, &board), eval("Ac Ad Js 9h 7d"));
    }

    #[test]
    fn five_cards_distribution() {
        let mut counts = [0usize; 9];
        Deck::default().for_each(5, |hand| {
            counts[HandValue::eval(hand).rank() as usize] += 1;
        });

        assert_eq!(counts[HandRank::StraightFlush as usize], 40);
        assert_eq!(counts[HandRank::FourOfAKind as usize], 624);
        assert_eq!(counts[HandRank::FullHouse as usize], 3_744);
        assert_eq!(counts[HandRank::Flush as usize], 5_108);
        assert_eq!(counts[HandRank::Straight as usize], 10_200);
        assert_eq!(counts[HandRank::ThreeOfAKind as usize], 54_912);
        assert_eq!(counts[HandRank::TwoPair as usize], 123_552);
        assert_eq!(counts[HandRank::OnePair as usize], 1_098_240);
        assert_eq!(counts[HandRank::HighCard as usize], 1_302_540);
    }

    // This takes a while to run in debug mode as it goes through 133M hands.
    #[test]
    #[ignore]
    fn seven_cards_distribution() {
        let mut counts = [0usize; 9];
        Deck::default().for_each(7, |hand| {
            counts[HandValue::eval(hand).rank() as usize] += 1;
        });

        assert_eq!(counts[HandRank::StraightFlush as usize], 41_584);
        assert_eq!(counts[HandRank::FourOfAKind as usize], 224_848);
        assert_eq!(counts[HandRank::FullHouse as usize], 3_473_184);
        assert_eq!(counts[HandRank::Flush as usize], 4_047_644);
        assert_eq!(counts[HandRank::Straight as usize], 6_180_020);
        assert_eq!(counts[HandRank::ThreeOfAKind as usize], 6_461_620);
        assert_eq!(counts[HandRank::TwoPair as usize], 31_433_400);
        assert_eq!(counts[HandRank::OnePair as usize], 58_627_800);
        assert_eq!(counts[HandRank::HighCard as usize], 23_294_460);
    }
}
