// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// Prints the Texas Hold'em starting hands percentiles chart:
//
// ```bash
// $ cargo r --release --example chart -- --opponents 5
// ```
use clap::{Parser, value_parser};
use std::time::Instant;

use handrank_eval::*;

fn separator() {
    print!("|");
    for _ in 0..13 {
        print!("-------|");
    }
    println!();
}

#[derive(Debug, Parser)]
struct Cli {
    /// The number of opposing players.
    #[clap(long, short, default_value_t = 5, value_parser = value_parser!(u8).range(1..=5))]
    opponents: u8,
    /// Simulated deals per starting hand.
    #[clap(long, short, default_value_t = 5_000)]
    trials: usize,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let now = Instant::now();

    let config = Config {
        trials: cli.trials,
        opponents: cli.opponents as usize,
        tasks: std::thread::available_parallelism().map_or(1, |n| n.get()),
        ..Config::default()
    };
    let ranking = HandRanking::new(Variant::TexasHoldem, config)?;

    separator();

    for r1 in Rank::ranks().rev() {
        let mut labels = Vec::with_capacity(13);
        let mut percentiles = Vec::with_capacity(13);

        for r2 in Rank::ranks().rev() {
            let (c1, c2) = if r1 <= r2 {
                // Offsuit or pair
                (Card::new(r2, Suit::Hearts), Card::new(r1, Suit::Spades))
            } else {
                // Suited cards
                (Card::new(r1, Suit::Hearts), Card::new(r2, Suit::Hearts))
            };

            labels.push(StartingHand::new(c1, c2).to_string());
            percentiles.push(ranking.percentile(&[c1, c2])? * 100.0);
        }

        print!("|");
        for label in labels {
            print!(" {label:>5} |");
        }
        println!();

        print!("|");
        for percentile in &percentiles {
            print!(" {percentile:4.1}% |");
        }
        println!();

        separator();
    }

    println!("Elapsed: {:.3}s", now.elapsed().as_secs_f64());
    Ok(())
}
