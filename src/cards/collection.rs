//! Ordered card collections: hands, capture piles, card pools.
//!
//! A `CardCollection` keeps insertion order and allows several cards with the
//! same rank and suit (a double deck). Cards are addressed either by position
//! or by `CardId`; ids are unique across a live game.

use serde::{Deserialize, Serialize};

use super::card::{Card, CardId, Rank, Suit};

/// Ordered, position- and id-addressable group of cards.
///
/// ## Usage
///
/// ```
/// use pinochle::cards::{Card, CardCollection, CardId, Rank, Suit};
///
/// let mut hand = CardCollection::new();
/// hand.add(Card::new(CardId(3), Rank::King, Suit::Hearts));
/// hand.add(Card::new(CardId(7), Rank::Queen, Suit::Hearts));
///
/// assert_eq!(hand.position_of(&Card::new(CardId(7), Rank::Queen, Suit::Hearts)), Some(1));
/// assert_eq!(hand.remove_by_id(CardId(3)).map(|c| c.rank), Some(Rank::King));
/// assert_eq!(hand.len(), 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardCollection {
    cards: Vec<Card>,
}

impl CardCollection {
    /// Create an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an existing list of cards, keeping its order.
    #[must_use]
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Append a card.
    pub fn add(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Remove the card with the given id.
    ///
    /// Returns the removed card, or `None` if no card carries that id.
    pub fn remove_by_id(&mut self, id: CardId) -> Option<Card> {
        debug_assert!(
            self.cards.iter().filter(|c| c.id == id).count() <= 1,
            "duplicate card id {id} in collection"
        );
        let position = self.cards.iter().position(|c| c.id == id)?;
        Some(self.cards.remove(position))
    }

    /// Remove the card at `position`.
    pub fn remove_at(&mut self, position: usize) -> Option<Card> {
        if position >= self.cards.len() {
            return None;
        }
        Some(self.cards.remove(position))
    }

    /// Remove and return the first card matching rank and suit.
    pub fn take_matching(&mut self, rank: Rank, suit: Suit) -> Option<Card> {
        let position = self.cards.iter().position(|c| c.rank == rank && c.suit == suit)?;
        Some(self.cards.remove(position))
    }

    /// Remove every card.
    pub fn clear(&mut self) {
        self.cards.clear();
    }

    /// Get the card at `position`.
    #[must_use]
    pub fn get(&self, position: usize) -> Option<&Card> {
        self.cards.get(position)
    }

    /// Get the card with the given id.
    #[must_use]
    pub fn find_by_id(&self, id: CardId) -> Option<&Card> {
        self.cards.iter().find(|c| c.id == id)
    }

    /// Check whether a card with this id is present.
    #[must_use]
    pub fn contains_id(&self, id: CardId) -> bool {
        self.cards.iter().any(|c| c.id == id)
    }

    /// All cards of a rank, in insertion order.
    #[must_use]
    pub fn by_rank(&self, rank: Rank) -> Vec<Card> {
        self.cards.iter().filter(|c| c.rank == rank).copied().collect()
    }

    /// All cards of a suit, in insertion order.
    #[must_use]
    pub fn by_suit(&self, suit: Suit) -> Vec<Card> {
        self.cards.iter().filter(|c| c.suit == suit).copied().collect()
    }

    /// All cards matching rank and suit, in insertion order.
    #[must_use]
    pub fn by_rank_and_suit(&self, rank: Rank, suit: Suit) -> Vec<Card> {
        self.cards
            .iter()
            .filter(|c| c.rank == rank && c.suit == suit)
            .copied()
            .collect()
    }

    /// Position of the card identical (id, rank and suit) to `card`.
    #[must_use]
    pub fn position_of(&self, card: &Card) -> Option<usize> {
        self.cards.iter().position(|c| c.is_identical_to(card))
    }

    /// Number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Same size and every id of `self` is present in `other`.
    ///
    /// Order is ignored.
    #[must_use]
    pub fn is_identical_to(&self, other: &CardCollection) -> bool {
        self.len() == other.len() && self.cards.iter().all(|c| other.contains_id(c.id))
    }

    /// Cards in order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Short codes in order.
    #[must_use]
    pub fn short_codes(&self) -> Vec<String> {
        self.cards.iter().map(Card::short_code).collect()
    }

    /// A copy of this collection without the card at `position`.
    #[must_use]
    pub fn without(&self, position: usize) -> CardCollection {
        let mut copy = self.clone();
        copy.remove_at(position);
        copy
    }
}

impl FromIterator<Card> for CardCollection {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a CardCollection {
    type Item = &'a Card;
    type IntoIter = std::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}
