//! A group of cards offered (or recorded) as one meld.
//!
//! The meld type is recomputed after every mutation, so an instance is always
//! either a recognized meld or plainly invalid.
//!
//! ## Pattern priority
//!
//! Sizes other than 1, 2, 4 and 5 are rejected outright. The remaining
//! checks run in this order and the first match wins:
//!
//! 1. Dix: a single trump Nine
//! 2. Marriage family: King and Queen of one suit (Royal when that suit is trump)
//! 3. Pinochle: Queen of Spades and Jack of Diamonds
//! 4. Four of a kind: four Aces, Kings, Queens or Jacks, one per suit
//! 5. Flush: Ace, Ten, King, Queen and Jack of trump

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::kind::MeldKind;
use crate::cards::{Card, CardId, Rank, Suit};

/// Cards of a single meld. Five is the largest pattern.
pub type MeldCards = SmallVec<[Card; 5]>;

/// Candidate or confirmed meld.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeldInstance {
    cards: MeldCards,
    trump: Suit,
    kind: Option<MeldKind>,
}

impl MeldInstance {
    /// Create an empty (invalid) meld.
    #[must_use]
    pub fn new(trump: Suit) -> Self {
        Self {
            cards: MeldCards::new(),
            trump,
            kind: None,
        }
    }

    /// Build a meld from cards, classifying it against `trump`.
    #[must_use]
    pub fn from_cards(cards: impl IntoIterator<Item = Card>, trump: Suit) -> Self {
        let cards: MeldCards = cards.into_iter().collect();
        let kind = classify(&cards, trump);
        Self { cards, trump, kind }
    }

    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
        self.refresh();
    }

    /// Remove the card with the given id and reclassify.
    pub fn remove_by_id(&mut self, id: CardId) -> Option<Card> {
        let position = self.cards.iter().position(|c| c.id == id)?;
        let card = self.cards.remove(position);
        self.refresh();
        Some(card)
    }

    /// Remove the card at `position` and reclassify.
    pub fn remove_at(&mut self, position: usize) -> Option<Card> {
        if position >= self.cards.len() {
            return None;
        }
        let card = self.cards.remove(position);
        self.refresh();
        Some(card)
    }

    /// Drop every card. The instance becomes invalid.
    pub fn clear(&mut self) {
        self.cards.clear();
        self.kind = None;
    }

    fn refresh(&mut self) {
        self.kind = classify(&self.cards, self.trump);
    }

    /// The recognized meld type, `None` when invalid.
    #[must_use]
    pub fn kind(&self) -> Option<MeldKind> {
        self.kind
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.kind.is_some()
    }

    /// Points scored for this meld, 0 when invalid.
    #[must_use]
    pub fn points(&self) -> u32 {
        self.kind.map_or(0, MeldKind::points)
    }

    #[must_use]
    pub fn trump(&self) -> Suit {
        self.trump
    }

    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[must_use]
    pub fn contains_id(&self, id: CardId) -> bool {
        self.cards.iter().any(|c| c.id == id)
    }

    /// Same size and same card ids, ignoring order.
    #[must_use]
    pub fn is_identical_to(&self, other: &MeldInstance) -> bool {
        self.len() == other.len() && self.cards.iter().all(|c| other.contains_id(c.id))
    }

    pub fn short_codes(&self) -> Vec<String> {
        self.cards.iter().map(Card::short_code).collect()
    }
}

/// Classify `cards` against `trump`.
#[must_use]
pub fn classify(cards: &[Card], trump: Suit) -> Option<MeldKind> {
    match cards.len() {
        1 => is_dix(cards[0], trump).then_some(MeldKind::Dix),
        2 => marriage_kind(cards[0], cards[1], trump)
            .or_else(|| is_pinochle(cards[0], cards[1]).then_some(MeldKind::Pinochle)),
        4 => four_of_a_kind(cards),
        5 => is_flush(cards, trump).then_some(MeldKind::Flush),
        _ => None,
    }
}

fn is_dix(card: Card, trump: Suit) -> bool {
    card.rank == Rank::Nine && card.suit == trump
}

fn marriage_kind(a: Card, b: Card, trump: Suit) -> Option<MeldKind> {
    if a.suit != b.suit {
        return None;
    }
    let pair = matches!(
        (a.rank, b.rank),
        (Rank::King, Rank::Queen) | (Rank::Queen, Rank::King)
    );
    if !pair {
        return None;
    }
    if a.suit == trump {
        Some(MeldKind::RoyalMarriage)
    } else {
        Some(MeldKind::Marriage)
    }
}

fn is_pinochle(a: Card, b: Card) -> bool {
    let queen_of_spades = |c: Card| c.rank == Rank::Queen && c.suit == Suit::Spades;
    let jack_of_diamonds = |c: Card| c.rank == Rank::Jack && c.suit == Suit::Diamonds;
    (queen_of_spades(a) && jack_of_diamonds(b)) || (jack_of_diamonds(a) && queen_of_spades(b))
}

fn four_of_a_kind(cards: &[Card]) -> Option<MeldKind> {
    let rank = cards[0].rank;
    let kind = MeldKind::four_of_a_kind(rank)?;
    let mut seen = [false; 4];
    for card in cards {
        if card.rank != rank {
            return None;
        }
        let slot = &mut seen[card.suit as usize];
        if *slot {
            return None;
        }
        *slot = true;
    }
    Some(kind)
}

fn is_flush(cards: &[Card], trump: Suit) -> bool {
    // Nine is pre-marked so it can never complete a flush.
    let mut seen = [false; 6];
    seen[Rank::Nine as usize] = true;
    for card in cards {
        if card.suit != trump {
            return false;
        }
        let slot = &mut seen[card.rank as usize];
        if *slot {
            return false;
        }
        *slot = true;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(id: u32, rank: Rank, suit: Suit) -> Card {
        Card::new(CardId(id), rank, suit)
    }

    #[test]
    fn test_dix_requires_trump_nine() {
        let nine = [card(0, Rank::Nine, Suit::Hearts)];
        assert_eq!(classify(&nine, Suit::Hearts), Some(MeldKind::Dix));
        assert_eq!(classify(&nine, Suit::Clubs), None);
        assert_eq!(classify(&[card(1, Rank::Ten, Suit::Hearts)], Suit::Hearts), None);
    }

    #[test]
    fn test_marriage_family() {
        let pair = [card(0, Rank::King, Suit::Hearts), card(1, Rank::Queen, Suit::Hearts)];
        assert_eq!(classify(&pair, Suit::Hearts), Some(MeldKind::RoyalMarriage));
        assert_eq!(classify(&pair, Suit::Clubs), Some(MeldKind::Marriage));

        let reversed = [pair[1], pair[0]];
        assert_eq!(classify(&reversed, Suit::Clubs), Some(MeldKind::Marriage));

        let mixed = [card(0, Rank::King, Suit::Hearts), card(1, Rank::Queen, Suit::Clubs)];
        assert_eq!(classify(&mixed, Suit::Clubs), None);
    }

    #[test]
    fn test_pinochle_ignores_trump() {
        let pinochle = [card(0, Rank::Queen, Suit::Spades), card(1, Rank::Jack, Suit::Diamonds)];
        for trump in Suit::ALL {
            assert_eq!(classify(&pinochle, trump), Some(MeldKind::Pinochle));
        }
        let meld = MeldInstance::from_cards([pinochle[1], pinochle[0]], Suit::Hearts);
        assert_eq!(meld.points(), 40);
    }

    #[test]
    fn test_four_of_a_kind_needs_distinct_suits() {
        let kings: Vec<Card> = Suit::ALL
            .iter()
            .enumerate()
            .map(|(i, &s)| card(i as u32, Rank::King, s))
            .collect();
        assert_eq!(classify(&kings, Suit::Clubs), Some(MeldKind::FourKings));

        let mut repeated = kings.clone();
        repeated[3] = card(9, Rank::King, Suit::Clubs);
        assert_eq!(classify(&repeated, Suit::Clubs), None);

        let tens: Vec<Card> = Suit::ALL
            .iter()
            .enumerate()
            .map(|(i, &s)| card(i as u32, Rank::Ten, s))
            .collect();
        assert_eq!(classify(&tens, Suit::Clubs), None);
    }

    #[test]
    fn test_flush() {
        let flush: Vec<Card> = [Rank::Ace, Rank::Ten, Rank::King, Rank::Queen, Rank::Jack]
            .iter()
            .enumerate()
            .map(|(i, &r)| card(i as u32, r, Suit::Spades))
            .collect();
        assert_eq!(classify(&flush, Suit::Spades), Some(MeldKind::Flush));
        assert_eq!(classify(&flush, Suit::Hearts), None);

        let mut with_nine = flush.clone();
        with_nine[4] = card(8, Rank::Nine, Suit::Spades);
        assert_eq!(classify(&with_nine, Suit::Spades), None);
    }

    #[test]
    fn test_size_gates() {
        assert_eq!(classify(&[], Suit::Clubs), None);
        let three = [
            card(0, Rank::King, Suit::Clubs),
            card(1, Rank::Queen, Suit::Clubs),
            card(2, Rank::Nine, Suit::Clubs),
        ];
        assert_eq!(classify(&three, Suit::Clubs), None);
    }

    #[test]
    fn test_mutation_reclassifies() {
        let mut meld = MeldInstance::new(Suit::Diamonds);
        assert!(!meld.is_valid());

        meld.add_card(card(0, Rank::King, Suit::Diamonds));
        assert!(!meld.is_valid());

        meld.add_card(card(1, Rank::Queen, Suit::Diamonds));
        assert_eq!(meld.kind(), Some(MeldKind::RoyalMarriage));

        meld.remove_by_id(CardId(0));
        assert_eq!(meld.kind(), None);

        meld.add_card(card(2, Rank::King, Suit::Diamonds));
        assert!(meld.is_valid());
        assert_eq!(meld.remove_at(0).map(|c| c.id), Some(CardId(1)));
        assert_eq!(meld.points(), 0);

        meld.clear();
        assert!(meld.is_empty());
        assert!(!meld.is_valid());
    }

    #[test]
    fn test_is_identical_ignores_order() {
        let a = MeldInstance::from_cards(
            [card(0, Rank::King, Suit::Clubs), card(1, Rank::Queen, Suit::Clubs)],
            Suit::Hearts,
        );
        let b = MeldInstance::from_cards(
            [card(1, Rank::Queen, Suit::Clubs), card(0, Rank::King, Suit::Clubs)],
            Suit::Hearts,
        );
        assert!(a.is_identical_to(&b));
    }
}
