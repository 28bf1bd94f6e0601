//! Per-player record of confirmed melds.
//!
//! Melds are bucketed by type in `MeldKind` order. The same structure also
//! carries the output of meld discovery, so "no melds possible" is simply an
//! empty ledger.

use serde::{Deserialize, Serialize};

use super::instance::MeldInstance;
use super::kind::MeldKind;
use crate::cards::{Card, CardId};
use crate::error::MeldError;

/// Melds bucketed by type.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeldLedger {
    buckets: [Vec<MeldInstance>; MeldKind::COUNT],
}

impl MeldLedger {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of melds of one type.
    #[must_use]
    pub fn count_of(&self, kind: MeldKind) -> usize {
        self.buckets[kind.index()].len()
    }

    /// Number of melds across every type.
    #[must_use]
    pub fn total(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buckets.iter().all(Vec::is_empty)
    }

    /// Melds of one type, in insertion order.
    #[must_use]
    pub fn melds_of(&self, kind: MeldKind) -> &[MeldInstance] {
        &self.buckets[kind.index()]
    }

    /// Every meld, bucket by bucket.
    pub fn iter(&self) -> impl Iterator<Item = &MeldInstance> {
        self.buckets.iter().flatten()
    }

    /// Per-type counts in `MeldKind` order.
    #[must_use]
    pub fn counts(&self) -> [usize; MeldKind::COUNT] {
        let mut counts = [0; MeldKind::COUNT];
        for (slot, bucket) in counts.iter_mut().zip(&self.buckets) {
            *slot = bucket.len();
        }
        counts
    }

    /// Whether the card already belongs to a meld of type `kind`.
    #[must_use]
    pub fn is_card_used_by(&self, id: CardId, kind: MeldKind) -> bool {
        self.buckets[kind.index()].iter().any(|m| m.contains_id(id))
    }

    /// Whether the card belongs to any meld.
    #[must_use]
    pub fn is_card_used_by_any(&self, id: CardId) -> bool {
        self.iter().any(|m| m.contains_id(id))
    }

    /// Whether a single recorded meld, of any type, contains all of `cards`.
    #[must_use]
    pub fn cards_used_together(&self, cards: &[Card]) -> bool {
        self.iter()
            .any(|meld| cards.iter().all(|c| meld.contains_id(c.id)))
    }

    /// Every recorded meld that includes the card.
    #[must_use]
    pub fn melds_using_card(&self, id: CardId) -> Vec<&MeldInstance> {
        self.iter().filter(|m| m.contains_id(id)).collect()
    }

    /// Record a meld in the bucket of its own type.
    pub fn add(&mut self, meld: MeldInstance) -> Result<MeldKind, MeldError> {
        let kind = meld.kind().ok_or(MeldError::NotAMeld)?;
        self.buckets[kind.index()].push(meld);
        Ok(kind)
    }

    /// Remove a recorded meld equal to `meld`.
    pub fn remove(&mut self, meld: &MeldInstance) -> bool {
        let Some(kind) = meld.kind() else {
            return false;
        };
        let bucket = &mut self.buckets[kind.index()];
        match bucket.iter().position(|m| m == meld) {
            Some(position) => {
                bucket.remove(position);
                true
            }
            None => false,
        }
    }

    /// Highest-scoring meld types present, ties kept in `MeldKind` order.
    #[must_use]
    pub fn best_kinds(&self) -> Vec<MeldKind> {
        let best = MeldKind::ALL
            .iter()
            .filter(|k| self.count_of(**k) > 0)
            .map(|k| k.points())
            .max();
        match best {
            Some(points) => MeldKind::ALL
                .iter()
                .copied()
                .filter(|k| self.count_of(*k) > 0 && k.points() == points)
                .collect(),
            None => Vec::new(),
        }
    }
}

impl Extend<MeldInstance> for MeldLedger {
    fn extend<I: IntoIterator<Item = MeldInstance>>(&mut self, melds: I) {
        for meld in melds {
            if let Some(kind) = meld.kind() {
                self.buckets[kind.index()].push(meld);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};

    fn card(id: u32, rank: Rank, suit: Suit) -> Card {
        Card::new(CardId(id), rank, suit)
    }

    fn flush() -> MeldInstance {
        MeldInstance::from_cards(
            [
                card(40, Rank::Ace, Suit::Spades),
                card(32, Rank::Ten, Suit::Spades),
                card(24, Rank::King, Suit::Spades),
                card(16, Rank::Queen, Suit::Spades),
                card(8, Rank::Jack, Suit::Spades),
            ],
            Suit::Spades,
        )
    }

    #[test]
    fn test_add_buckets_by_type() {
        let mut ledger = MeldLedger::new();
        assert_eq!(ledger.add(flush()), Ok(MeldKind::Flush));

        assert_eq!(ledger.count_of(MeldKind::Flush), 1);
        assert_eq!(ledger.count_of(MeldKind::RoyalMarriage), 0);
        assert_eq!(ledger.total(), 1);
        assert!(!ledger.is_empty());
    }

    #[test]
    fn test_add_rejects_invalid() {
        let mut ledger = MeldLedger::new();
        let junk = MeldInstance::from_cards([card(0, Rank::Ten, Suit::Clubs)], Suit::Spades);

        assert_eq!(ledger.add(junk), Err(MeldError::NotAMeld));
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_card_usage_queries() {
        let mut ledger = MeldLedger::new();
        ledger.add(flush()).unwrap();

        assert!(ledger.is_card_used_by(CardId(24), MeldKind::Flush));
        assert!(!ledger.is_card_used_by(CardId(24), MeldKind::RoyalMarriage));
        assert!(ledger.is_card_used_by_any(CardId(8)));
        assert!(!ledger.is_card_used_by_any(CardId(9)));
        assert_eq!(ledger.melds_using_card(CardId(16)).len(), 1);
    }

    #[test]
    fn test_cards_used_together_spans_types() {
        let mut ledger = MeldLedger::new();
        ledger.add(flush()).unwrap();

        let king = card(24, Rank::King, Suit::Spades);
        let queen = card(16, Rank::Queen, Suit::Spades);
        let other_queen = card(17, Rank::Queen, Suit::Spades);

        assert!(ledger.cards_used_together(&[king, queen]));
        assert!(!ledger.cards_used_together(&[king, other_queen]));
    }

    #[test]
    fn test_remove() {
        let mut ledger = MeldLedger::new();
        ledger.add(flush()).unwrap();

        assert!(ledger.remove(&flush()));
        assert!(!ledger.remove(&flush()));
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_best_kinds_keeps_ties_in_order() {
        let mut ledger = MeldLedger::new();
        ledger
            .add(MeldInstance::from_cards(
                [card(0, Rank::Queen, Suit::Spades), card(1, Rank::Jack, Suit::Diamonds)],
                Suit::Hearts,
            ))
            .unwrap();
        ledger
            .add(MeldInstance::from_cards(
                [card(2, Rank::King, Suit::Hearts), card(3, Rank::Queen, Suit::Hearts)],
                Suit::Hearts,
            ))
            .unwrap();

        assert_eq!(ledger.best_kinds(), vec![MeldKind::RoyalMarriage, MeldKind::Pinochle]);
        assert!(MeldLedger::new().best_kinds().is_empty());
    }
}
