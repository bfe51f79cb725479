// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
use clap::Parser;
use handrank_server::server;
use log::error;
use std::{num::NonZeroUsize, thread};

#[derive(Debug, Parser)]
struct Cli {
    /// The server listening address.
    #[clap(long, short, default_value = "127.0.0.1")]
    address: String,
    /// The server listening port.
    #[clap(long, short, default_value_t = 8080)]
    port: u16,
    /// Random opponents in each simulated deal.
    #[clap(long, default_value_t = 5, value_parser = clap::value_parser!(u8).range(1..=5))]
    opponents: u8,
    /// Simulated deals for each Texas Hold'em starting hand.
    #[clap(long, default_value_t = 2000)]
    holdem_trials: usize,
    /// Simulated deals for each Omaha Hold'em hand.
    #[clap(long, default_value_t = 300)]
    omaha_trials: usize,
    /// Reference Omaha Hold'em hands sampled for percentiles.
    #[clap(long, default_value_t = 300)]
    omaha_population: usize,
    /// The base seed for all simulations.
    #[clap(long, default_value_t = 13)]
    seed: u64,
    /// Threads used to build the rankings, defaults to the available cores.
    #[clap(long)]
    tasks: Option<NonZeroUsize>,
}

#[tokio::main]
async fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    let cli = Cli::parse();
    let tasks = cli
        .tasks
        .or_else(|| thread::available_parallelism().ok())
        .map_or(1, NonZeroUsize::get);

    let ranking = handrank_eval::Config {
        opponents: cli.opponents as usize,
        seed: cli.seed,
        tasks,
        ..handrank_eval::Config::default()
    };

    let config = handrank_server::Config {
        address: cli.address,
        port: cli.port,
        holdem: handrank_eval::Config {
            trials: cli.holdem_trials,
            ..ranking
        },
        omaha: handrank_eval::Config {
            trials: cli.omaha_trials,
            population: cli.omaha_population,
            ..ranking
        },
    };

    if let Err(e) = server::run(config).await {
        error!("{e}");
    }
}
