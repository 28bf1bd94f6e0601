//! Meld discovery: every meld a hand can play right now.
//!
//! A meld shape is a list of slots, each naming one rank and suit. For every
//! slot the hand's matching cards are gathered, dropping cards already
//! recorded against that meld type. The number of playable instances is the
//! smallest slot; surplus cards in the larger slots are ignored, earliest
//! hand order kept.
//!
//! Royal Marriage is assembled differently: its King and Queen of trump may
//! already sit together in a recorded Flush, and a meld needs at least one new
//! card. Kings are paired greedily, in hand order, with the first free Queen
//! they were never melded with.
//!
//! ## Hand comparison
//!
//! Two hands are ranked by their potential points (one entry per
//! discoverable meld, ascending, `[0]` when nothing is playable): first by the
//! single best meld, then by the total, then position by position.

use std::cmp::Ordering;

use tracing::trace;

use super::instance::MeldInstance;
use super::kind::MeldKind;
use super::ledger::MeldLedger;
use crate::cards::{Card, CardCollection, Rank, Suit};

/// Flush ranks, highest first.
const FLUSH_RANKS: [Rank; 5] = [Rank::Ace, Rank::Ten, Rank::King, Rank::Queen, Rank::Jack];

/// Marriage ranks, King first.
const MARRIAGE_RANKS: [Rank; 2] = [Rank::King, Rank::Queen];

/// Ranks with a four-of-a-kind meld, in `MeldKind` order.
const FOUR_RANKS: [Rank; 4] = [Rank::Ace, Rank::King, Rank::Queen, Rank::Jack];

/// Discovers playable melds for one player.
///
/// ## Example
///
/// ```
/// use pinochle::cards::{Card, CardCollection, CardId, Rank, Suit};
/// use pinochle::melds::{MeldDiscovery, MeldKind, MeldLedger};
///
/// let hand = CardCollection::from_cards(vec![
///     Card::new(CardId(0), Rank::Queen, Suit::Spades),
///     Card::new(CardId(1), Rank::Jack, Suit::Diamonds),
/// ]);
/// let ledger = MeldLedger::new();
/// let found = MeldDiscovery::new(&ledger, Suit::Hearts).discover(&hand);
///
/// assert_eq!(found.count_of(MeldKind::Pinochle), 1);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct MeldDiscovery<'a> {
    ledger: &'a MeldLedger,
    trump: Suit,
}

impl<'a> MeldDiscovery<'a> {
    #[must_use]
    pub fn new(ledger: &'a MeldLedger, trump: Suit) -> Self {
        Self { ledger, trump }
    }

    /// Every playable meld instance, bucketed by type.
    #[must_use]
    pub fn discover(&self, hand: &CardCollection) -> MeldLedger {
        let mut found = MeldLedger::new();
        for kind in MeldKind::ALL {
            found.extend(self.melds_of(kind, hand));
        }
        trace!(melds = found.total(), "melds discovered");
        found
    }

    /// Playable instances of one meld type.
    #[must_use]
    pub fn melds_of(&self, kind: MeldKind, hand: &CardCollection) -> Vec<MeldInstance> {
        match kind {
            MeldKind::Flush => {
                let slots = self.suit_slots(kind, hand, self.trump, &FLUSH_RANKS);
                self.assemble(slots)
            }
            MeldKind::RoyalMarriage => self.royal_marriages(hand),
            MeldKind::Marriage => Suit::ALL
                .into_iter()
                .filter(|&suit| suit != self.trump)
                .flat_map(|suit| {
                    let slots = self.suit_slots(kind, hand, suit, &MARRIAGE_RANKS);
                    self.assemble(slots)
                })
                .collect(),
            MeldKind::Dix => self
                .unused(kind, hand, Rank::Nine, self.trump)
                .into_iter()
                .map(|card| MeldInstance::from_cards([card], self.trump))
                .collect(),
            MeldKind::FourAces | MeldKind::FourKings | MeldKind::FourQueens | MeldKind::FourJacks => {
                let rank = FOUR_RANKS[kind.index() - MeldKind::FourAces.index()];
                let slots = Suit::ALL
                    .into_iter()
                    .map(|suit| self.unused(kind, hand, rank, suit))
                    .collect();
                self.assemble(slots)
            }
            MeldKind::Pinochle => {
                let slots = vec![
                    self.unused(kind, hand, Rank::Jack, Suit::Diamonds),
                    self.unused(kind, hand, Rank::Queen, Suit::Spades),
                ];
                self.assemble(slots)
            }
        }
    }

    /// Number of playable instances per type.
    #[must_use]
    pub fn counts(&self, hand: &CardCollection) -> [usize; MeldKind::COUNT] {
        let mut counts = [0; MeldKind::COUNT];
        for kind in MeldKind::ALL {
            counts[kind.index()] = self.melds_of(kind, hand).len();
        }
        counts
    }

    /// Whether the hand can play anything at all.
    #[must_use]
    pub fn any_possible(&self, hand: &CardCollection) -> bool {
        MeldKind::ALL
            .into_iter()
            .any(|kind| !self.melds_of(kind, hand).is_empty())
    }

    /// Points of every playable instance, ascending. `[0]` when none.
    #[must_use]
    pub fn potential_points(&self, hand: &CardCollection) -> Vec<u32> {
        let mut points: Vec<u32> = self
            .counts(hand)
            .iter()
            .zip(MeldKind::ALL)
            .flat_map(|(&count, kind)| std::iter::repeat(kind.points()).take(count))
            .collect();
        if points.is_empty() {
            points.push(0);
        }
        points.sort_unstable();
        points
    }

    /// Rank two hands by meld potential. `Greater` means `a` is better.
    #[must_use]
    pub fn compare_hands(&self, a: &CardCollection, b: &CardCollection) -> Ordering {
        compare_potentials(&self.potential_points(a), &self.potential_points(b))
    }

    /// Hand cards matching rank and suit not yet used for `kind`.
    fn unused(&self, kind: MeldKind, hand: &CardCollection, rank: Rank, suit: Suit) -> Vec<Card> {
        hand.by_rank_and_suit(rank, suit)
            .into_iter()
            .filter(|card| !self.ledger.is_card_used_by(card.id, kind))
            .collect()
    }

    fn suit_slots(&self, kind: MeldKind, hand: &CardCollection, suit: Suit, ranks: &[Rank]) -> Vec<Vec<Card>> {
        ranks
            .iter()
            .map(|&rank| self.unused(kind, hand, rank, suit))
            .collect()
    }

    /// Zip slots into melds, one card per slot, as many as the smallest slot.
    fn assemble(&self, slots: Vec<Vec<Card>>) -> Vec<MeldInstance> {
        let count = slots.iter().map(Vec::len).min().unwrap_or(0);
        (0..count)
            .map(|i| MeldInstance::from_cards(slots.iter().map(|slot| slot[i]), self.trump))
            .collect()
    }

    fn royal_marriages(&self, hand: &CardCollection) -> Vec<MeldInstance> {
        let kind = MeldKind::RoyalMarriage;
        let kings = self.unused(kind, hand, Rank::King, self.trump);
        let mut queens: Vec<Option<Card>> = self
            .unused(kind, hand, Rank::Queen, self.trump)
            .into_iter()
            .map(Some)
            .collect();

        let mut melds = Vec::new();
        for king in kings {
            let partner = queens.iter_mut().find(|slot| {
                matches!(**slot, Some(queen) if !self.ledger.cards_used_together(&[king, queen]))
            });
            if let Some(queen) = partner.and_then(Option::take) {
                melds.push(MeldInstance::from_cards([king, queen], self.trump));
            }
        }
        melds
    }
}

/// Compare two ascending potential-point lists.
#[must_use]
pub fn compare_potentials(a: &[u32], b: &[u32]) -> Ordering {
    let best = |points: &[u32]| points.iter().copied().max().unwrap_or(0);
    let total = |points: &[u32]| points.iter().sum::<u32>();

    best(a)
        .cmp(&best(b))
        .then_with(|| total(a).cmp(&total(b)))
        .then_with(|| {
            a.iter()
                .zip(b)
                .map(|(x, y)| x.cmp(y))
                .find(|o| o.is_ne())
                .unwrap_or(Ordering::Equal)
        })
}
