// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// Compares the hand categories of random Omaha deals, using exactly two hole
// cards and three board cards, with the same deals played as Hold'em by the
// best pair of hole cards:
//
// ```bash
// $ cargo r --release --example omaha_ranks -- --deals 1000000
// ```
use clap::Parser;
use rand::prelude::*;
use std::time::Instant;

use handrank_eval::*;

const RANKS: [HandRank; 9] = [
    HandRank::HighCard,
    HandRank::OnePair,
    HandRank::TwoPair,
    HandRank::ThreeOfAKind,
    HandRank::Straight,
    HandRank::Flush,
    HandRank::FullHouse,
    HandRank::FourOfAKind,
    HandRank::StraightFlush,
];

#[derive(Debug, Parser)]
struct Cli {
    /// Random deals of four hole cards and five board cards.
    #[clap(long, short, default_value_t = 1_000_000)]
    deals: usize,
    /// The deals seed.
    #[clap(long, short, default_value_t = 13)]
    seed: u64,
}

fn main() {
    let cli = Cli::parse();
    let now = Instant::now();

    let mut rng = StdRng::seed_from_u64(cli.seed);
    let mut omaha = [0usize; 9];
    let mut any_cards = [0usize; 9];

    Deck::default().sample(&mut rng, cli.deals, 9, |cards| {
        let (hole, board) = cards.split_at(4);
        omaha[HandValue::eval_omaha(hole, board).rank() as usize] += 1;

        let best = (0..4)
            .flat_map(|i| ((i + 1)..4).map(move |j| (i, j)))
            .map(|(i, j)| {
                let hand = [hole[i], hole[j], board[0], board[1], board[2], board[3], board[4]];
                HandValue::eval(&hand)
            })
            .max();

        if let Some(best) = best {
            any_cards[best.rank() as usize] += 1;
        }
    });

    let elapsed = now.elapsed().as_secs_f64();
    println!("Deals:           {}", cli.deals);
    println!("Elapsed:         {elapsed:.3}s\n");
    println!("{:<16} {:>10} {:>10}", "", "Omaha", "Hold'em");

    for rank in RANKS.iter().rev() {
        let idx = *rank as usize;
        println!(
            "{:<16} {:>9.3}% {:>9.3}%",
            rank.to_string(),
            100.0 * omaha[idx] as f64 / cli.deals as f64,
            100.0 * any_cards[idx] as f64 / cli.deals as f64,
        );
    }
}
