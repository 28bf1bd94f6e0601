//! Short-card notation used in save files.
//!
//! A card is its rank code followed by its suit code (`"XH"` is the Ten of
//! Hearts). Card lists are space separated. Meld lists are comma separated
//! groups of card lists, and a meld card may carry a trailing `*` when it is
//! shared by more than one meld.

use crate::cards::{Card, Suit};
use crate::error::SaveError;

/// Marker for a meld card shared by several melds.
pub const SHARED_MARKER: char = '*';

/// A card as written inside a meld group.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MeldCard {
    pub card: Card,
    pub shared: bool,
}

impl std::fmt::Display for MeldCard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.card)?;
        if self.shared {
            write!(f, "{SHARED_MARKER}")?;
        }
        Ok(())
    }
}

/// Parse one two-character card code into a ghost card.
pub fn parse_card(token: &str) -> Result<Card, SaveError> {
    Card::parse_short(token).ok_or_else(|| SaveError::BadCard(token.to_string()))
}

/// Parse a space separated card list. Blank text is an empty list.
pub fn parse_cards(text: &str) -> Result<Vec<Card>, SaveError> {
    text.split_whitespace().map(parse_card).collect()
}

/// Parse a comma separated list of meld groups.
pub fn parse_melds(text: &str) -> Result<Vec<Vec<MeldCard>>, SaveError> {
    text.split(',')
        .map(str::trim)
        .filter(|group| !group.is_empty())
        .map(|group| group.split_whitespace().map(parse_meld_card).collect())
        .collect()
}

fn parse_meld_card(token: &str) -> Result<MeldCard, SaveError> {
    let (code, shared) = match token.strip_suffix(SHARED_MARKER) {
        Some(code) => (code, true),
        None => (token, false),
    };
    let card = Card::parse_short(code).ok_or_else(|| SaveError::BadCard(token.to_string()))?;
    Ok(MeldCard { card, shared })
}

/// Parse a trump field: a full card, or a lone suit letter once the trump
/// card has been dealt.
pub fn parse_trump(token: &str) -> Result<(Option<Card>, Suit), SaveError> {
    let bad = || SaveError::BadTrump(token.to_string());
    let mut chars = token.chars();
    match (chars.next(), chars.next(), chars.next()) {
        (Some(suit), None, None) => Suit::from_code(suit).map(|s| (None, s)).ok_or_else(bad),
        (Some(_), Some(_), None) => Card::parse_short(token).map(|c| (Some(c), c.suit)).ok_or_else(bad),
        _ => Err(bad()),
    }
}

/// Space separated short codes.
pub fn format_cards<'a>(cards: impl IntoIterator<Item = &'a Card>) -> String {
    join(cards, " ")
}

/// Comma separated meld groups.
pub fn format_melds(melds: &[Vec<MeldCard>]) -> String {
    melds
        .iter()
        .map(|group| join(group, " "))
        .collect::<Vec<_>>()
        .join(", ")
}

fn join<T: std::fmt::Display>(items: impl IntoIterator<Item = T>, separator: &str) -> String {
    items
        .into_iter()
        .map(|item| item.to_string())
        .collect::<Vec<_>>()
        .join(separator)
}
