// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Service metadata document.
use serde::Serialize;

use crate::tip::GameType;

/// A game supported by this service.
#[derive(Debug, Clone, Serialize)]
pub struct SupportedGame {
    /// The game type.
    #[serde(rename = "type")]
    pub game_type: GameType,
    /// Supported betting structure, `*` for any.
    pub bet: &'static str,
    /// Supported table format, `*` for any.
    pub format: &'static str,
}

/// The service author.
#[derive(Debug, Clone, Serialize)]
pub struct Author {
    /// Author name.
    pub name: &'static str,
    /// Author email.
    pub email: &'static str,
}

/// The service descriptor returned by `GET /`.
#[derive(Debug, Clone, Serialize)]
pub struct Metadata {
    /// The service title.
    pub title: &'static str,
    /// The service description.
    pub description: &'static str,
    /// The supported games.
    pub games: Vec<SupportedGame>,
    /// The service author.
    pub author: Author,
}

impl Default for Metadata {
    fn default() -> Self {
        let any_game = |game_type| SupportedGame {
            game_type,
            bet: "*",
            format: "*",
        };

        Self {
            title: "Hand Rankings",
            description: "Pre-flop hand percentile rankings for 6-max Texas and Omaha Hold'em",
            games: vec![any_game(GameType::TexasHoldem), any_game(GameType::OmahaHoldem)],
            author: Author {
                name: "Danny Leshem",
                email: "dleshem@gmail.com",
            },
        }
    }
}
