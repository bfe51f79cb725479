// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Starting hands percentile rankings.
//!
//! The strength of a starting hand is its share of the pot against random
//! opponents hands over a number of seeded random deals. A [HandRanking] is
//! built once for a [Variant] and then maps a starting hand to its percentile,
//! the fraction of starting hands that are at least as strong, so that the best
//! hands rank close to 0 and the worst at 1.
use ahash::AHashMap;
use anyhow::{Result, anyhow, bail};
use rand::prelude::*;
use std::{fmt, thread};
use xxhash_rust::xxh3::xxh3_64;

use crate::{Card, Deck, HandValue, Rank};

/// The number of board cards dealt in a simulation.
const BOARD_SIZE: usize = 5;

/// The number of two cards Texas Hold'em hands.
const HOLDEM_HANDS: usize = 1_326;

/// The game variant of a ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    /// Texas Hold'em, two hole cards.
    TexasHoldem,
    /// Omaha Hold'em, four hole cards and exactly two of them must be used.
    OmahaHoldem,
}

impl Variant {
    /// The number of hole cards for this variant.
    pub fn hole_cards(&self) -> usize {
        match self {
            Variant::TexasHoldem => 2,
            Variant::OmahaHoldem => 4,
        }
    }

    /// Evaluates a player hand with the five board cards.
    fn eval(&self, hole: &[Card], board: &[Card]) -> HandValue {
        match self {
            Variant::TexasHoldem => {
                let mut cards = [board[0]; 7];
                cards[..2].copy_from_slice(hole);
                cards[2..].copy_from_slice(board);
                HandValue::eval(&cards)
            }
            Variant::OmahaHoldem => HandValue::eval_omaha(hole, board),
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Variant::TexasHoldem => write!(f, "Texas Hold'em"),
            Variant::OmahaHoldem => write!(f, "Omaha Hold'em"),
        }
    }
}

/// Simulation parameters for building a ranking.
#[derive(Debug, Clone)]
pub struct Config {
    /// Random deals simulated for each starting hand.
    pub trials: usize,
    /// Random opponents in each deal.
    pub opponents: usize,
    /// Reference hands sampled for variants with too many starting hands to
    /// simulate them all.
    pub population: usize,
    /// The base seed for all simulations.
    pub seed: u64,
    /// The number of threads used to build the ranking.
    pub tasks: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            trials: 1_000,
            opponents: 5,
            population: 300,
            seed: 13,
            tasks: 1,
        }
    }
}

/// A Texas Hold'em starting hand class, e.g. `AKs`, `T9o` or `77`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StartingHand {
    high: Rank,
    low: Rank,
    suited: bool,
}

impl StartingHand {
    /// The starting hand class of two cards.
    pub fn new(c1: Card, c2: Card) -> Self {
        let (high, low) = if c1.rank() >= c2.rank() {
            (c1.rank(), c2.rank())
        } else {
            (c2.rank(), c1.rank())
        };

        Self {
            high,
            low,
            suited: c1.suit() == c2.suit(),
        }
    }

    /// The number of two cards hands in this class.
    pub fn combos(&self) -> usize {
        if self.high == self.low {
            6
        } else if self.suited {
            4
        } else {
            12
        }
    }
}

impl fmt::Display for StartingHand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.high == self.low {
            write!(f, "{}{}", self.high, self.low)
        } else if self.suited {
            write!(f, "{}{}s", self.high, self.low)
        } else {
            write!(f, "{}{}o", self.high, self.low)
        }
    }
}

/// Precomputed percentiles lookup.
#[derive(Debug)]
enum Table {
    /// Percentile for each Texas Hold'em class.
    Classes(AHashMap<StartingHand, f64>),
    /// Reference hands strengths sorted from the strongest.
    Population(Vec<f64>),
}

/// Percentile rankings of the starting hands of a variant.
#[derive(Debug)]
pub struct HandRanking {
    variant: Variant,
    config: Config,
    table: Table,
}

impl HandRanking {
    /// Builds the ranking for a variant.
    ///
    /// Texas Hold'em simulates every one of the 169 starting hand classes,
    /// Omaha Hold'em simulates a seeded population of random hands.
    pub fn new(variant: Variant, config: Config) -> Result<Self> {
        if config.trials == 0 {
            bail!("The number of trials must be positive");
        }

        if config.opponents == 0 {
            bail!("The number of opponents must be positive");
        }

        let dealt = (config.opponents + 1) * variant.hole_cards() + BOARD_SIZE;
        if dealt > Deck::SIZE {
            bail!(
                "{variant} with {} opponents needs {dealt} cards",
                config.opponents
            );
        }

        let table = match variant {
            Variant::TexasHoldem => Table::Classes(holdem_classes(&config)?),
            Variant::OmahaHoldem => {
                if config.population == 0 {
                    bail!("The population size must be positive");
                }

                Table::Population(population(variant, &config)?)
            }
        };

        Ok(Self {
            variant,
            config,
            table,
        })
    }

    /// The variant of this ranking.
    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Returns the percentile of a starting hand, in (0, 1] with the best
    /// hands close to 0.
    pub fn percentile(&self, hand: &[Card]) -> Result<f64> {
        let hole_cards = self.variant.hole_cards();
        if hand.len() != hole_cards {
            bail!(
                "{} hands have {hole_cards} cards, got {}",
                self.variant,
                hand.len()
            );
        }

        for (idx, card) in hand.iter().enumerate() {
            if hand[idx + 1..].contains(card) {
                bail!("Duplicate card {card}");
            }
        }

        match &self.table {
            Table::Classes(classes) => {
                let class = StartingHand::new(hand[0], hand[1]);
                classes
                    .get(&class)
                    .copied()
                    .ok_or_else(|| anyhow!("Unknown starting hand {class}"))
            }
            Table::Population(strengths) => {
                let hero = strength(self.variant, hand, &self.config);
                let stronger = strengths.partition_point(|&s| s > hero);
                Ok((stronger + 1) as f64 / (strengths.len() + 1) as f64)
            }
        }
    }
}

/// Computes the percentile of each Texas Hold'em starting hand class.
fn holdem_classes(config: &Config) -> Result<AHashMap<StartingHand, f64>> {
    let mut hands = AHashMap::<StartingHand, [Card; 2]>::with_capacity(169);
    Deck::default().for_each(2, |h| {
        hands.entry(StartingHand::new(h[0], h[1])).or_insert([h[0], h[1]]);
    });

    let mut classes = hands.into_iter().collect::<Vec<_>>();
    classes.sort_by_key(|(class, _)| *class);

    let strengths = par_map(&classes, config.tasks, |(_, hand)| {
        strength(Variant::TexasHoldem, hand, config)
    })?;

    let percentiles = classes
        .iter()
        .zip(&strengths)
        .map(|((class, _), &s)| {
            let combos = classes
                .iter()
                .zip(&strengths)
                .filter(|(_, other)| **other >= s)
                .map(|((other, _), _)| other.combos())
                .sum::<usize>();

            (*class, combos as f64 / HOLDEM_HANDS as f64)
        })
        .collect();

    Ok(percentiles)
}

/// Computes the strengths of a seeded population of random hands sorted from
/// the strongest.
fn population(variant: Variant, config: &Config) -> Result<Vec<f64>> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut hands = Vec::with_capacity(config.population);
    Deck::default().sample(&mut rng, config.population, variant.hole_cards(), |h| {
        hands.push(h.to_vec());
    });

    let mut strengths = par_map(&hands, config.tasks, |hand| {
        strength(variant, hand, config)
    })?;

    strengths.sort_by(|a, b| b.total_cmp(a));
    Ok(strengths)
}

/// Simulates random deals and returns the average share of the pot won by the
/// hole cards, split pots are shared between the winners.
fn strength(variant: Variant, hole: &[Card], config: &Config) -> f64 {
    let deck = Deck::without(hole);
    let mut rng = StdRng::seed_from_u64(hand_seed(config.seed, hole));

    let holes_size = config.opponents * hole.len();
    let mut pot = 0.0;

    deck.sample(&mut rng, config.trials, holes_size + BOARD_SIZE, |sample| {
        let (holes, board) = sample.split_at(holes_size);
        let hero = variant.eval(hole, board);

        let mut winners = 1;
        for opponent in holes.chunks_exact(hole.len()) {
            let value = variant.eval(opponent, board);
            if value > hero {
                return;
            }

            if value == hero {
                winners += 1;
            }
        }

        pot += 1.0 / winners as f64;
    });

    pot / config.trials as f64
}

/// Mixes the base seed with the hand cards so that each hand gets its own
/// random deals independently of the cards order.
fn hand_seed(seed: u64, hand: &[Card]) -> u64 {
    let mut ids = hand.iter().map(Card::id).collect::<Vec<_>>();
    ids.sort_unstable();

    let bytes = ids
        .iter()
        .flat_map(|id| id.to_le_bytes())
        .collect::<Vec<_>>();

    seed ^ xxh3_64(&bytes)
}

/// Maps items to values using `tasks` scoped threads, the results are in the
/// items order.
fn par_map<T, F>(items: &[T], tasks: usize, f: F) -> Result<Vec<f64>>
where
    T: Sync,
    F: Fn(&T) -> f64 + Sync,
{
    let chunk_size = items.len().div_ceil(tasks.max(1)).max(1);

    thread::scope(|s| {
        let handles = items
            .chunks(chunk_size)
            .map(|chunk| {
                let f = &f;
                s.spawn(move || chunk.iter().map(f).collect::<Vec<_>>())
            })
            .collect::<Vec<_>>();

        let mut values = Vec::with_capacity(items.len());
        for handle in handles {
            let chunk = handle
                .join()
                .map_err(|_| anyhow!("Ranking task panicked"))?;
            values.extend(chunk);
        }

        Ok(values)
    })
}
