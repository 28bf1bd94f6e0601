//! The save-file document.
//!
//! ```text
//! Round: 2
//!
//! Computer:
//!    Score: 120 / 34
//!    Hand: AS XS 9H
//!    Capture Pile: KC QC
//!    Melds: KS QS*, QS* JD
//!
//! Human:
//!    ...
//!
//! Trump Card: XS
//!
//! Stock: AH AD JC
//!
//! Next Player: Human
//! ```
//!
//! `SaveData` holds the parsed document with ghost cards. Turning it into a
//! live game (drawing real cards out of a fresh deck) is the game model's job,
//! so a malformed file is rejected before any state is touched.

use super::notation::{format_cards, format_melds, parse_cards, parse_melds, parse_trump};
use super::player_codec::PlayerRecord;
use crate::cards::{Card, Suit};
use crate::core::{Seat, SeatMap};
use crate::error::SaveError;

/// Scores and piles of one seat.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SeatRecord {
    pub game_score: u32,
    pub round_score: u32,
    pub cards: PlayerRecord,
}

/// A parsed save file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SaveData {
    pub round: u32,
    pub seats: SeatMap<SeatRecord>,
    /// `None` once the trump card has been dealt.
    pub trump_card: Option<Card>,
    pub trump_suit: Suit,
    /// Top of the stock first.
    pub stock: Vec<Card>,
    pub next_player: Seat,
}

impl SaveData {
    /// Parse a whole save file. Blank lines are ignored.
    pub fn parse(text: &str) -> Result<SaveData, SaveError> {
        let mut fields = Fields::new(text);

        let round = parse_number("Round", fields.field("Round")?)?;

        let mut seats: SeatMap<SeatRecord> = SeatMap::default();
        for seat in Seat::ALL {
            fields.field(seat.title())?;
            let (game_score, round_score) = parse_score(fields.field("Score")?)?;
            seats[seat] = SeatRecord {
                game_score,
                round_score,
                cards: PlayerRecord {
                    hand: parse_cards(fields.field("Hand")?)?,
                    capture_pile: parse_cards(fields.field("Capture Pile")?)?,
                    melds: parse_melds(fields.field("Melds")?)?,
                },
            };
        }

        let (trump_card, trump_suit) = parse_trump(fields.field("Trump Card")?)?;
        let stock = parse_cards(fields.field("Stock")?)?;
        let next = fields.field("Next Player")?;
        let next_player = Seat::from_title(next).ok_or_else(|| SaveError::BadNextPlayer(next.to_string()))?;

        Ok(SaveData {
            round,
            seats,
            trump_card,
            trump_suit,
            stock,
            next_player,
        })
    }
}

impl std::fmt::Display for SaveData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Round: {}", self.round)?;
        writeln!(f)?;

        for (seat, record) in self.seats.iter() {
            writeln!(f, "{}:", seat.title())?;
            writeln!(f, "   Score: {} / {}", record.game_score, record.round_score)?;
            labelled(f, "   Hand", &format_cards(&record.cards.hand))?;
            labelled(f, "   Capture Pile", &format_cards(&record.cards.capture_pile))?;
            labelled(f, "   Melds", &format_melds(&record.cards.melds))?;
            writeln!(f)?;
        }

        match &self.trump_card {
            Some(card) => writeln!(f, "Trump Card: {card}")?,
            None => writeln!(f, "Trump Card: {}", self.trump_suit.code())?,
        }
        writeln!(f)?;
        labelled(f, "Stock", &format_cards(&self.stock))?;
        writeln!(f)?;
        write!(f, "Next Player: {}", self.next_player.title())
    }
}

/// `label: value`, without a trailing space when the value is empty.
fn labelled(f: &mut std::fmt::Formatter<'_>, label: &str, value: &str) -> std::fmt::Result {
    if value.is_empty() {
        writeln!(f, "{label}:")
    } else {
        writeln!(f, "{label}: {value}")
    }
}

/// Labelled lines of a save file, in order.
struct Fields<'a> {
    lines: std::str::Lines<'a>,
}

impl<'a> Fields<'a> {
    fn new(text: &'a str) -> Self {
        Self { lines: text.lines() }
    }

    /// The value of the next non-blank line, which must be `label: value`.
    fn field(&mut self, label: &'static str) -> Result<&'a str, SaveError> {
        let line = self
            .lines
            .by_ref()
            .map(str::trim)
            .find(|line| !line.is_empty())
            .ok_or(SaveError::MissingField(label))?;
        line.strip_prefix(label)
            .and_then(|rest| rest.strip_prefix(':'))
            .map(str::trim)
            .ok_or(SaveError::MissingField(label))
    }
}

fn parse_number(field: &'static str, value: &str) -> Result<u32, SaveError> {
    value.trim().parse().map_err(|_| SaveError::BadNumber {
        field,
        value: value.to_string(),
    })
}

/// `"120 / 34"`: game score, then round score.
fn parse_score(value: &str) -> Result<(u32, u32), SaveError> {
    let (game, round) = value.split_once('/').ok_or_else(|| SaveError::BadNumber {
        field: "Score",
        value: value.to_string(),
    })?;
    Ok((parse_number("Score", game)?, parse_number("Score", round)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Rank;

    const SAMPLE: &str = "Round: 2

Computer:
   Score: 120 / 34
   Hand: AS XS 9H
   Capture Pile: KC QC
   Melds: KS QS*, QS* JD

Human:
   Score: 80 / 12
   Hand: 9C JH
   Capture Pile:
   Melds:

Trump Card: XS

Stock: AH AD JC

Next Player: Human";

    #[test]
    fn test_parse_sample() {
        let data = SaveData::parse(SAMPLE).unwrap();

        assert_eq!(data.round, 2);
        assert_eq!(data.seats[Seat::Computer].game_score, 120);
        assert_eq!(data.seats[Seat::Computer].round_score, 34);
        assert_eq!(data.seats[Seat::Computer].cards.hand.len(), 3);
        assert_eq!(data.seats[Seat::Computer].cards.melds.len(), 2);
        assert!(data.seats[Seat::Human].cards.capture_pile.is_empty());
        assert_eq!(data.trump_card, Some(Card::ghost(Rank::Ten, Suit::Spades)));
        assert_eq!(data.trump_suit, Suit::Spades);
        assert_eq!(data.stock[0], Card::ghost(Rank::Ace, Suit::Hearts));
        assert_eq!(data.next_player, Seat::Human);
    }

    #[test]
    fn test_emit_matches_sample() {
        let data = SaveData::parse(SAMPLE).unwrap();
        assert_eq!(data.to_string(), SAMPLE);
        assert_eq!(SaveData::parse(&data.to_string()).unwrap(), data);
    }

    #[test]
    fn test_suit_only_trump() {
        let text = SAMPLE.replace("Trump Card: XS", "Trump Card: S").replace("Stock: AH AD JC", "Stock:");
        let data = SaveData::parse(&text).unwrap();

        assert_eq!(data.trump_card, None);
        assert_eq!(data.trump_suit, Suit::Spades);
        assert!(data.stock.is_empty());
        assert!(data.to_string().contains("Trump Card: S\n"));
    }

    #[test]
    fn test_missing_and_malformed_fields() {
        let text = SAMPLE.replace("Next Player: Human", "");
        assert_eq!(SaveData::parse(&text), Err(SaveError::MissingField("Next Player")));

        let text = SAMPLE.replace("Human:", "Dealer:");
        assert_eq!(SaveData::parse(&text), Err(SaveError::MissingField("Human")));

        let text = SAMPLE.replace("80 / 12", "80 12");
        assert_eq!(
            SaveData::parse(&text),
            Err(SaveError::BadNumber {
                field: "Score",
                value: "80 12".into()
            })
        );

        let text = SAMPLE.replace("Next Player: Human", "Next Player: Dealer");
        assert_eq!(SaveData::parse(&text), Err(SaveError::BadNextPlayer("Dealer".into())));

        assert_eq!(SaveData::parse(""), Err(SaveError::MissingField("Round")));
    }
}
