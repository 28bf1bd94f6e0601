//! The Pinochle double deck and the stock it becomes after the deal.
//!
//! The last element of the underlying sequence is the top of the pile.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::card::{Card, CardId, Rank, Suit};
use crate::core::GameRng;

/// A face-down pile of cards.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Create an empty pile.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a populated, unshuffled deck with `copies` of every rank×suit.
    #[must_use]
    pub fn standard(copies: u8) -> Self {
        let mut deck = Self::new();
        deck.populate(copies);
        deck
    }

    /// Replace the contents with a fresh deck.
    ///
    /// Ids run `0..` in rank-major, suit-minor order, copies innermost.
    pub fn populate(&mut self, copies: u8) {
        self.cards.clear();
        let mut next_id = 0u32;
        for rank in Rank::ALL {
            for suit in Suit::ALL {
                for _ in 0..copies {
                    self.cards.push(Card::new(CardId(next_id), rank, suit));
                    next_id += 1;
                }
            }
        }
        debug!(cards = self.cards.len(), "deck populated");
    }

    /// Uniformly permute the pile.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        rng.shuffle(&mut self.cards);
    }

    /// Draw the top card. `None` when the pile is empty.
    pub fn take_one_from_top(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Place a card on top of the pile.
    pub fn put_card_at_top(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Look at the top card without drawing it.
    #[must_use]
    pub fn peek_top(&self) -> Option<&Card> {
        self.cards.last()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Cards from bottom to top.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Cards from top to bottom.
    pub fn top_down(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter().rev()
    }

    pub fn clear(&mut self) {
        self.cards.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashMap;

    #[test]
    fn test_populate_order_and_ids() {
        let deck = Deck::standard(2);

        assert_eq!(deck.len(), 48);
        assert_eq!(deck.cards()[0], Card::new(CardId(0), Rank::Nine, Suit::Clubs));
        assert_eq!(deck.cards()[1], Card::new(CardId(1), Rank::Nine, Suit::Clubs));
        assert_eq!(deck.cards()[2], Card::new(CardId(2), Rank::Nine, Suit::Diamonds));
        assert_eq!(deck.cards()[47], Card::new(CardId(47), Rank::Ace, Suit::Spades));
    }

    #[test]
    fn test_shuffle_keeps_composition() {
        let mut deck = Deck::standard(2);
        let mut rng = GameRng::new(11);
        deck.shuffle(&mut rng);

        let mut ids: Vec<u32> = deck.cards().iter().map(|c| c.id.raw()).collect();
        ids.sort_unstable();
        assert_eq!(ids, (0..48).collect::<Vec<_>>());

        let mut faces: FxHashMap<(Rank, Suit), usize> = FxHashMap::default();
        for card in deck.cards() {
            *faces.entry((card.rank, card.suit)).or_default() += 1;
        }
        assert_eq!(faces.len(), 24);
        assert!(faces.values().all(|&n| n == 2));
    }

    #[test]
    fn test_take_and_put_use_top() {
        let mut deck = Deck::standard(1);
        let top = deck.take_one_from_top();
        assert_eq!(top, Some(Card::new(CardId(23), Rank::Ace, Suit::Spades)));

        let nine = Card::new(CardId(99), Rank::Nine, Suit::Hearts);
        deck.put_card_at_top(nine);
        assert_eq!(deck.peek_top(), Some(&nine));
        assert_eq!(deck.top_down().next(), Some(&nine));
    }

    #[test]
    fn test_take_from_empty_is_none() {
        let mut deck = Deck::new();
        assert_eq!(deck.take_one_from_top(), None);
    }
}
