// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Pre-flop hand strength tips.
use anyhow::Result;
use log::debug;
use serde::{Deserialize, Deserializer, Serialize};
use std::{collections::BTreeMap, fmt};

use handrank_eval::{Card, Config, HandRanking, Variant, represent};

use crate::error::TipError;

/// A game type identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum GameType {
    /// Texas Hold'em.
    TexasHoldem,
    /// Omaha Hold'em.
    OmahaHoldem,
    /// A game this service gives no tips for.
    Other(String),
}

impl GameType {
    /// The game type wire identifier.
    pub fn as_str(&self) -> &str {
        match self {
            GameType::TexasHoldem => "texas-holdem",
            GameType::OmahaHoldem => "omaha-holdem",
            GameType::Other(s) => s,
        }
    }
}

impl From<String> for GameType {
    fn from(s: String) -> Self {
        match s.as_str() {
            "texas-holdem" => GameType::TexasHoldem,
            "omaha-holdem" => GameType::OmahaHoldem,
            _ => GameType::Other(s),
        }
    }
}

impl From<GameType> for String {
    fn from(game_type: GameType) -> Self {
        game_type.as_str().to_string()
    }
}

impl fmt::Display for GameType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The game being played.
#[derive(Debug, Clone, Deserialize)]
pub struct Game {
    /// The game type.
    #[serde(rename = "type")]
    pub game_type: GameType,
}

/// A player position at the table.
///
/// Only the hero seat is read, any field of the other seats may be null or
/// missing.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Seat {
    /// Set for the hero seat.
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_me: bool,
    /// The player name.
    #[serde(default)]
    pub player_name: Option<String>,
    /// The player cards tokens.
    #[serde(default, deserialize_with = "null_as_default")]
    pub cards: Vec<String>,
}

/// Deserializes a null value as the type default.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A tip request body.
#[derive(Debug, Clone, Deserialize)]
pub struct TipRequest {
    /// The game being played.
    pub game: Game,
    /// The table seats.
    pub seats: Vec<Seat>,
    /// The community cards tokens.
    pub community: Vec<String>,
}

/// Tips text by player name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Tip {
    /// The tip for each player.
    pub players: BTreeMap<String, String>,
}

/// The starting hands rankings of the supported games.
#[derive(Debug)]
pub struct Rankings {
    /// Texas Hold'em 6-max ranking.
    pub texas_holdem: HandRanking,
    /// Omaha Hold'em 6-max ranking.
    pub omaha_holdem: HandRanking,
}

impl Rankings {
    /// Builds the rankings for all supported games.
    pub fn new(holdem: Config, omaha: Config) -> Result<Self> {
        Ok(Self {
            texas_holdem: HandRanking::new(Variant::TexasHoldem, holdem)?,
            omaha_holdem: HandRanking::new(Variant::OmahaHoldem, omaha)?,
        })
    }
}

/// Generates the tip for the hero seat.
///
/// There is no tip after the flop, without a hero seat, or for games without
/// a ranking. The first seat with `is_me` set is the hero.
pub fn generate_tip(
    rankings: &Rankings,
    game: &Game,
    seats: &[Seat],
    community: &[String],
) -> Result<Tip, TipError> {
    let mut tip = Tip::default();

    if !community.is_empty() {
        return Ok(tip);
    }

    let Some(hero) = seats.iter().find(|seat| seat.is_me) else {
        return Ok(tip);
    };

    if hero.cards.is_empty() {
        return Err(TipError::InvalidData("Hero cards are missing".to_string()));
    }

    let Some(hero_name) = &hero.player_name else {
        return Err(TipError::InvalidData("Hero name is missing".to_string()));
    };

    let ranking = match &game.game_type {
        GameType::TexasHoldem => &rankings.texas_holdem,
        GameType::OmahaHoldem => &rankings.omaha_holdem,
        GameType::Other(game_type) => {
            debug!("No tips for game type {game_type}");
            return Ok(tip);
        }
    };

    let hand = parse_hand(&hero.cards, ranking.variant())?;
    let percentile = ranking.percentile(&hand).map_err(TipError::internal)?;

    tip.players
        .insert(hero_name.clone(), format_tip(&represent(&hand), percentile));

    Ok(tip)
}

/// Formats a tip text, the percentage is rounded to one decimal place.
pub fn format_tip(hand: &str, percentile: f64) -> String {
    format!("{hand} ranks ({:.1}%).", percentile * 100.0)
}

/// Parses the hero cards and checks they make a hand for the variant.
fn parse_hand(tokens: &[String], variant: Variant) -> Result<Vec<Card>, TipError> {
    let hand = tokens
        .iter()
        .map(|token| token.parse::<Card>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| TipError::InvalidData(e.to_string()))?;

    if hand.len() != variant.hole_cards() {
        return Err(TipError::InvalidData(format!(
            "{variant} hands have {} cards, got {}",
            variant.hole_cards(),
            hand.len()
        )));
    }

    for (idx, card) in hand.iter().enumerate() {
        if hand[idx + 1..].contains(card) {
            return Err(TipError::InvalidData(format!("Duplicate card {card}")));
        }
    }

    Ok(hand)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::sync::{Arc, LazyLock};

    /// Small rankings shared by the tests.
    pub(crate) static RANKINGS: LazyLock<Arc<Rankings>> = LazyLock::new(|| {
        let holdem = Config {
            trials: 200,
            opponents: 1,
            tasks: 4,
            ..Config::default()
        };
        let omaha = Config {
            trials: 40,
            opponents: 1,
            population: 30,
            tasks: 4,
            ..Config::default()
        };
        Arc::new(Rankings::new(holdem, omaha).unwrap())
    });

    fn game(game_type: &str) -> Game {
        Game {
            game_type: GameType::from(game_type.to_string()),
        }
    }

    fn seat(is_me: bool, name: &str, cards: &[&str]) -> Seat {
        Seat {
            is_me,
            player_name: Some(name.to_string()),
            cards: cards.iter().map(|c| c.to_string()).collect(),
        }
    }

    fn parse(cards: &[&str]) -> Vec<Card> {
        cards.iter().map(|c| c.parse().unwrap()).collect()
    }

    #[test]
    fn game_type_identifiers() {
        assert_eq!(game("texas-holdem").game_type, GameType::TexasHoldem);
        assert_eq!(game("omaha-holdem").game_type, GameType::OmahaHoldem);
        assert_eq!(
            game("razz").game_type,
            GameType::Other("razz".to_string())
        );

        let json = serde_json::to_value(GameType::OmahaHoldem).unwrap();
        assert_eq!(json, serde_json::json!("omaha-holdem"));

        let game_type: GameType = serde_json::from_str("\"stud\"").unwrap();
        assert_eq!(game_type.to_string(), "stud");
    }

    #[test]
    fn format_tip_rounding() {
        assert_eq!(format_tip("AhAs", 0.004524886), "AhAs ranks (0.5%).");
        assert_eq!(format_tip("7c2d", 1.0), "7c2d ranks (100.0%).");
        assert_eq!(format_tip("AhKs", 0.0456), "AhKs ranks (4.6%).");
        assert_eq!(format_tip("QdJd", 0.1234), "QdJd ranks (12.3%).");
    }

    #[test]
    fn no_tip_after_flop() {
        let seats = [seat(true, "Alice", &[])];
        let community = vec!["Ah".to_string(), "Kd".to_string(), "2c".to_string()];

        let tip = generate_tip(&RANKINGS, &game("texas-holdem"), &seats, &community).unwrap();
        assert!(tip.players.is_empty());
    }

    #[test]
    fn no_tip_without_hero() {
        let seats = [
            seat(false, "Alice", &["Ah", "Ks"]),
            seat(false, "Bob", &["2c", "2d"]),
        ];

        let tip = generate_tip(&RANKINGS, &game("texas-holdem"), &seats, &[]).unwrap();
        assert!(tip.players.is_empty());

        let tip = generate_tip(&RANKINGS, &game("texas-holdem"), &[], &[]).unwrap();
        assert!(tip.players.is_empty());
    }

    #[test]
    fn hero_cards_missing() {
        let seats = [seat(false, "Bob", &["2c", "2d"]), seat(true, "Alice", &[])];

        let err = generate_tip(&RANKINGS, &game("texas-holdem"), &seats, &[]).unwrap_err();
        assert!(matches!(&err, TipError::InvalidData(d) if d == "Hero cards are missing"));

        // Missing cards are checked before the game type.
        let err = generate_tip(&RANKINGS, &game("razz"), &seats, &[]).unwrap_err();
        assert!(matches!(err, TipError::InvalidData(_)));
    }

    #[test]
    fn hero_name_missing() {
        let seats = [Seat {
            is_me: true,
            player_name: None,
            cards: vec!["Ah".to_string(), "Ks".to_string()],
        }];

        let err = generate_tip(&RANKINGS, &game("texas-holdem"), &seats, &[]).unwrap_err();
        assert!(matches!(&err, TipError::InvalidData(d) if d == "Hero name is missing"));
    }

    #[test]
    fn seat_fields_defaults() {
        let seats: Vec<Seat> = serde_json::from_str(
            r#"[
                { "isMe": null, "playerName": null, "cards": null },
                { "playerName": "Bob" },
                {}
            ]"#,
        )
        .unwrap();

        assert!(seats.iter().all(|s| !s.is_me && s.cards.is_empty()));
        assert_eq!(seats[0].player_name, None);
        assert_eq!(seats[1].player_name.as_deref(), Some("Bob"));
        assert_eq!(seats[2].player_name, None);
    }

    #[test]
    fn holdem_tip() {
        let seats = [seat(false, "Bob", &[]), seat(true, "Alice", &["Ks", "Ah"])];

        let tip = generate_tip(&RANKINGS, &game("texas-holdem"), &seats, &[]).unwrap();
        let percentile = RANKINGS
            .texas_holdem
            .percentile(&parse(&["Ah", "Ks"]))
            .unwrap();

        assert_eq!(tip.players.len(), 1);
        assert_eq!(
            tip.players["Alice"],
            format!("AhKs ranks ({:.1}%).", percentile * 100.0)
        );
    }

    #[test]
    fn omaha_tip() {
        let seats = [seat(true, "Alice", &["Kd", "As", "Kc", "Ah"])];

        let tip = generate_tip(&RANKINGS, &game("omaha-holdem"), &seats, &[]).unwrap();
        let percentile = RANKINGS
            .omaha_holdem
            .percentile(&parse(&["As", "Ah", "Kd", "Kc"]))
            .unwrap();

        assert_eq!(
            tip.players["Alice"],
            format_tip("AsAhKdKc", percentile)
        );
    }

    #[test]
    fn first_hero_gets_the_tip() {
        let seats = [
            seat(true, "Alice", &["Ah", "Ks"]),
            seat(true, "Bob", &["2c", "2d"]),
        ];

        let tip = generate_tip(&RANKINGS, &game("texas-holdem"), &seats, &[]).unwrap();
        assert!(tip.players.contains_key("Alice"));
        assert!(!tip.players.contains_key("Bob"));
    }

    #[test]
    fn unknown_game_no_tip() {
        let seats = [seat(true, "Alice", &["Ah", "Ks"])];

        let tip = generate_tip(&RANKINGS, &game("seven-card-stud"), &seats, &[]).unwrap();
        assert!(tip.players.is_empty());
    }

    #[test]
    fn invalid_hands() {
        let check = |game_type: &str, cards: &[&str], detail: &str| {
            let seats = [seat(true, "Alice", cards)];
            let err = generate_tip(&RANKINGS, &game(game_type), &seats, &[]).unwrap_err();
            assert!(
                matches!(&err, TipError::InvalidData(d) if d == detail),
                "{err:?}"
            );
        };

        check("texas-holdem", &["Ah", "Xx"], "Invalid card 'Xx'");
        check(
            "texas-holdem",
            &["Ah", "Ks", "Qd"],
            "Texas Hold'em hands have 2 cards, got 3",
        );
        check(
            "omaha-holdem",
            &["Ah", "Ks"],
            "Omaha Hold'em hands have 4 cards, got 2",
        );
        check("texas-holdem", &["Ah", "ah"], "Duplicate card Ah");
    }

    #[test]
    fn tip_is_deterministic() {
        let seats = [seat(true, "Alice", &["9h", "9c"])];

        let t1 = generate_tip(&RANKINGS, &game("texas-holdem"), &seats, &[]).unwrap();
        let t2 = generate_tip(&RANKINGS, &game("texas-holdem"), &seats, &[]).unwrap();
        assert_eq!(t1, t2);

        let seats = [seat(true, "Alice", &["9h", "9c", "Td", "Jd"])];
        let t1 = generate_tip(&RANKINGS, &game("omaha-holdem"), &seats, &[]).unwrap();
        let t2 = generate_tip(&RANKINGS, &game("omaha-holdem"), &seats, &[]).unwrap();
        assert_eq!(t1, t2);
    }
}
