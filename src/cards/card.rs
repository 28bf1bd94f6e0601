//! Cards: rank, suit and physical identity.
//!
//! A Pinochle deck holds several copies of each rank×suit, so two cards can
//! look the same and still be different cards. `CardId` tells them apart.
//!
//! ## Rank order
//!
//! Pinochle ranks run `Nine < Jack < Queen < King < Ten < Ace`. The derived
//! `Ord` on [`Rank`] follows that order, so plain comparisons work.
//!
//! ## Short codes
//!
//! Each card renders as two characters: rank (`9 J Q K X A`, `X` is Ten)
//! then suit (`C D H S`). `"XH"` is the Ten of Hearts.

use serde::{Deserialize, Serialize};

/// Card rank, declared in Pinochle order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rank {
    Nine,
    Jack,
    Queen,
    King,
    Ten,
    Ace,
}

impl Rank {
    /// Every rank, lowest first.
    pub const ALL: [Rank; 6] = [Rank::Nine, Rank::Jack, Rank::Queen, Rank::King, Rank::Ten, Rank::Ace];

    /// Points for capturing a card of this rank in a turn.
    #[must_use]
    pub const fn points(self) -> u32 {
        match self {
            Rank::Ace => 11,
            Rank::Ten => 10,
            Rank::King => 4,
            Rank::Queen => 3,
            Rank::Jack => 2,
            Rank::Nine => 0,
        }
    }

    /// Single-character code.
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Rank::Nine => '9',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ten => 'X',
            Rank::Ace => 'A',
        }
    }

    /// Parse a single-character code.
    #[must_use]
    pub const fn from_code(code: char) -> Option<Rank> {
        match code {
            '9' => Some(Rank::Nine),
            'J' => Some(Rank::Jack),
            'Q' => Some(Rank::Queen),
            'K' => Some(Rank::King),
            'X' => Some(Rank::Ten),
            'A' => Some(Rank::Ace),
            _ => None,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Rank::Nine => "Nine",
            Rank::Jack => "Jack",
            Rank::Queen => "Queen",
            Rank::King => "King",
            Rank::Ten => "Ten",
            Rank::Ace => "Ace",
        }
    }
}

/// Card suit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    /// Single-character code.
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Suit::Clubs => 'C',
            Suit::Diamonds => 'D',
            Suit::Hearts => 'H',
            Suit::Spades => 'S',
        }
    }

    /// Parse a single-character code.
    #[must_use]
    pub const fn from_code(code: char) -> Option<Suit> {
        match code {
            'C' => Some(Suit::Clubs),
            'D' => Some(Suit::Diamonds),
            'H' => Some(Suit::Hearts),
            'S' => Some(Suit::Spades),
            _ => None,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Suit::Clubs => "Clubs",
            Suit::Diamonds => "Diamonds",
            Suit::Hearts => "Hearts",
            Suit::Spades => "Spades",
        }
    }
}

/// Identity of one physical card.
///
/// Ids are handed out `0..deck_size` when a deck is populated.
/// `CardId::UNDEFINED` marks a card that only carries rank and suit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Placeholder id for cards parsed from text.
    pub const UNDEFINED: CardId = CardId(u32::MAX);

    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    #[must_use]
    pub const fn is_defined(self) -> bool {
        self.0 != u32::MAX
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_defined() {
            write!(f, "Card({})", self.0)
        } else {
            f.write_str("Card(?)")
        }
    }
}

/// A playing card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    #[must_use]
    pub const fn new(id: CardId, rank: Rank, suit: Suit) -> Self {
        Self { id, rank, suit }
    }

    /// A card with rank and suit but no physical identity.
    #[must_use]
    pub const fn ghost(rank: Rank, suit: Suit) -> Self {
        Self::new(CardId::UNDEFINED, rank, suit)
    }

    /// Same id, rank and suit.
    #[must_use]
    pub fn is_identical_to(&self, other: &Card) -> bool {
        self == other
    }

    /// Same rank and suit, ignoring identity.
    #[must_use]
    pub fn same_rank_and_suit(&self, other: &Card) -> bool {
        self.rank == other.rank && self.suit == other.suit
    }

    #[must_use]
    pub fn has_greater_rank_than(&self, other: &Card) -> bool {
        self.rank > other.rank
    }

    #[must_use]
    pub fn has_lesser_rank_than(&self, other: &Card) -> bool {
        self.rank < other.rank
    }

    /// Two-character code, e.g. `"QS"`.
    #[must_use]
    pub fn short_code(&self) -> String {
        let mut code = String::with_capacity(2);
        code.push(self.rank.code());
        code.push(self.suit.code());
        code
    }

    /// Parse a two-character code into a ghost card.
    #[must_use]
    pub fn parse_short(code: &str) -> Option<Card> {
        let mut chars = code.chars();
        let rank = Rank::from_code(chars.next()?)?;
        let suit = Suit::from_code(chars.next()?)?;
        if chars.next().is_some() {
            return None;
        }
        Some(Card::ghost(rank, suit))
    }

    /// "Rank of Suit", e.g. `"Queen of Spades"`.
    #[must_use]
    pub fn long_name(&self) -> String {
        format!("{} of {}", self.rank.name(), self.suit.name())
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.rank.code(), self.suit.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_order() {
        assert!(Rank::Nine < Rank::Jack);
        assert!(Rank::Jack < Rank::Queen);
        assert!(Rank::Queen < Rank::King);
        assert!(Rank::King < Rank::Ten);
        assert!(Rank::Ten < Rank::Ace);
    }

    #[test]
    fn test_rank_comparisons_on_cards() {
        let ten = Card::new(CardId(0), Rank::Ten, Suit::Clubs);
        let king = Card::new(CardId(1), Rank::King, Suit::Hearts);

        assert!(ten.has_greater_rank_than(&king));
        assert!(king.has_lesser_rank_than(&ten));
        assert!(!ten.has_greater_rank_than(&ten));
        assert!(!ten.has_lesser_rank_than(&ten));
    }

    #[test]
    fn test_identity_vs_face() {
        let a = Card::new(CardId(4), Rank::Ace, Suit::Spades);
        let b = Card::new(CardId(5), Rank::Ace, Suit::Spades);

        assert!(!a.is_identical_to(&b));
        assert!(a.same_rank_and_suit(&b));
        assert!(a.same_rank_and_suit(&Card::ghost(Rank::Ace, Suit::Spades)));
    }

    #[test]
    fn test_short_codes() {
        assert_eq!(Card::ghost(Rank::Ten, Suit::Hearts).short_code(), "XH");
        assert_eq!(Card::ghost(Rank::Nine, Suit::Clubs).to_string(), "9C");
        assert_eq!(Card::parse_short("QS"), Some(Card::ghost(Rank::Queen, Suit::Spades)));
        assert_eq!(Card::parse_short("TS"), None);
        assert_eq!(Card::parse_short("QSS"), None);
        assert_eq!(Card::parse_short("Q"), None);
    }

    #[test]
    fn test_long_name() {
        assert_eq!(Card::ghost(Rank::Nine, Suit::Diamonds).long_name(), "Nine of Diamonds");
    }

    #[test]
    fn test_codes_round_trip() {
        for rank in Rank::ALL {
            assert_eq!(Rank::from_code(rank.code()), Some(rank));
        }
        for suit in Suit::ALL {
            assert_eq!(Suit::from_code(suit.code()), Some(suit));
        }
    }

    #[test]
    fn test_undefined_id() {
        assert!(!Card::ghost(Rank::Ace, Suit::Clubs).id.is_defined());
        assert!(CardId::new(0).is_defined());
        assert_eq!(CardId::UNDEFINED.to_string(), "Card(?)");
    }
}
