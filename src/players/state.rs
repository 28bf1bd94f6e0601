//! Per-player card state shared by both seats.
//!
//! A `PlayerState` owns the hand, the capture pile and the meld ledger. Human
//! and computer play differ only in how a card or meld is chosen, so this is
//! plain data plus the rules every choice must satisfy.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardCollection, Suit};
use crate::error::{MeldError, SelectionError};
use crate::melds::{MeldDiscovery, MeldInstance, MeldKind, MeldLedger};

/// Hand, capture pile and confirmed melds of one seat.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerState {
    hand: CardCollection,
    capture_pile: CardCollection,
    ledger: MeldLedger,
    trump: Suit,
}

impl PlayerState {
    /// Empty state for a fresh round.
    #[must_use]
    pub fn new(trump: Suit) -> Self {
        Self::from_parts(CardCollection::new(), CardCollection::new(), MeldLedger::new(), trump)
    }

    /// Rebuild from saved piles.
    #[must_use]
    pub fn from_parts(hand: CardCollection, capture_pile: CardCollection, ledger: MeldLedger, trump: Suit) -> Self {
        Self {
            hand,
            capture_pile,
            ledger,
            trump,
        }
    }

    #[must_use]
    pub fn hand(&self) -> &CardCollection {
        &self.hand
    }

    #[must_use]
    pub fn capture_pile(&self) -> &CardCollection {
        &self.capture_pile
    }

    #[must_use]
    pub fn ledger(&self) -> &MeldLedger {
        &self.ledger
    }

    #[must_use]
    pub fn trump(&self) -> Suit {
        self.trump
    }

    /// Add a dealt card to the hand.
    pub fn take_card(&mut self, card: Card) {
        self.hand.add(card);
    }

    #[must_use]
    pub fn hand_size(&self) -> usize {
        self.hand.len()
    }

    /// Position of a card in the hand.
    #[must_use]
    pub fn position_of(&self, card: &Card) -> Option<usize> {
        self.hand.position_of(card)
    }

    /// Meld discovery bound to this player's ledger and trump.
    #[must_use]
    pub fn discovery(&self) -> MeldDiscovery<'_> {
        MeldDiscovery::new(&self.ledger, self.trump)
    }

    /// Every meld the hand can play now.
    #[must_use]
    pub fn playable_melds(&self) -> MeldLedger {
        self.discovery().discover(&self.hand)
    }

    #[must_use]
    pub fn is_meld_possible(&self) -> bool {
        self.discovery().any_possible(&self.hand)
    }

    /// Remove and return the card at `position`.
    pub fn play_from_hand(&mut self, position: usize) -> Result<Card, SelectionError> {
        let hand_size = self.hand.len();
        self.hand
            .remove_at(position)
            .ok_or(SelectionError::OutOfBounds { position, hand_size })
    }

    /// Remove a specific card from the hand.
    pub fn play_card(&mut self, card: &Card) -> Option<Card> {
        self.hand.remove_by_id(card.id)
    }

    /// Capture a resolved lead/chase pair.
    pub fn add_to_capture_pile(&mut self, lead: Card, chase: Card) {
        self.capture_pile.add(lead);
        self.capture_pile.add(chase);
    }

    /// Group the cards at `positions` into a meld candidate.
    pub fn compose_meld(&self, positions: &[usize]) -> Result<MeldInstance, SelectionError> {
        if positions.is_empty() {
            return Err(SelectionError::NothingSelected);
        }
        let hand_size = self.hand.len();
        let cards = positions
            .iter()
            .map(|&position| {
                self.hand
                    .get(position)
                    .copied()
                    .ok_or(SelectionError::OutOfBounds { position, hand_size })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(MeldInstance::from_cards(cards, self.trump))
    }

    /// Check a candidate meld against the meld rules, in order.
    pub fn check_meld(&self, meld: &MeldInstance) -> Result<MeldKind, MeldError> {
        let kind = meld.kind().ok_or(MeldError::NotAMeld)?;
        if !meld.cards().iter().all(|c| self.hand.contains_id(c.id)) {
            return Err(MeldError::NotInHand);
        }
        if meld.cards().iter().any(|c| self.ledger.is_card_used_by(c.id, kind)) {
            return Err(MeldError::RepeatedCard);
        }
        if self.ledger.cards_used_together(meld.cards()) {
            return Err(MeldError::NoNewCard);
        }
        Ok(kind)
    }

    /// Validate and record a meld. Cards stay in hand.
    pub fn commit_meld(&mut self, meld: MeldInstance) -> Result<MeldKind, MeldError> {
        self.check_meld(&meld)?;
        self.ledger.add(meld)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardId, Rank};

    fn card(id: u32, rank: Rank, suit: Suit) -> Card {
        Card::new(CardId(id), rank, suit)
    }

    fn player() -> PlayerState {
        let mut player = PlayerState::new(Suit::Hearts);
        for c in [
            card(0, Rank::King, Suit::Hearts),
            card(1, Rank::Queen, Suit::Hearts),
            card(2, Rank::Nine, Suit::Hearts),
            card(3, Rank::Ace, Suit::Clubs),
        ] {
            player.take_card(c);
        }
        player
    }

    #[test]
    fn test_play_from_hand() {
        let mut player = player();

        assert_eq!(player.play_from_hand(3), Ok(card(3, Rank::Ace, Suit::Clubs)));
        assert_eq!(
            player.play_from_hand(3),
            Err(SelectionError::OutOfBounds {
                position: 3,
                hand_size: 3
            })
        );
        assert_eq!(player.hand_size(), 3);
    }

    #[test]
    fn test_compose_meld_checks_positions() {
        let player = player();

        assert_eq!(player.compose_meld(&[]), Err(SelectionError::NothingSelected));
        assert!(matches!(
            player.compose_meld(&[0, 9]),
            Err(SelectionError::OutOfBounds { position: 9, .. })
        ));
        assert_eq!(player.compose_meld(&[0, 1]).map(|m| m.kind()), Ok(Some(MeldKind::RoyalMarriage)));
    }

    #[test]
    fn test_commit_meld_chain() {
        let mut player = player();

        let junk = player.compose_meld(&[0, 3]).unwrap();
        assert_eq!(player.commit_meld(junk), Err(MeldError::NotAMeld));

        let stranger = MeldInstance::from_cards([card(40, Rank::Nine, Suit::Hearts)], Suit::Hearts);
        assert_eq!(player.commit_meld(stranger), Err(MeldError::NotInHand));

        let dix = player.compose_meld(&[2]).unwrap();
        assert_eq!(player.commit_meld(dix.clone()), Ok(MeldKind::Dix));
        assert_eq!(player.commit_meld(dix), Err(MeldError::RepeatedCard));

        assert_eq!(player.hand_size(), 4);
        assert_eq!(player.ledger().total(), 1);
    }

    #[test]
    fn test_commit_requires_new_card() {
        let mut player = PlayerState::new(Suit::Spades);
        let flush = [
            card(0, Rank::Ace, Suit::Spades),
            card(1, Rank::Ten, Suit::Spades),
            card(2, Rank::King, Suit::Spades),
            card(3, Rank::Queen, Suit::Spades),
            card(4, Rank::Jack, Suit::Spades),
        ];
        for c in flush {
            player.take_card(c);
        }
        player
            .commit_meld(MeldInstance::from_cards(flush, Suit::Spades))
            .unwrap();

        let marriage = player.compose_meld(&[2, 3]).unwrap();
        assert_eq!(player.commit_meld(marriage), Err(MeldError::NoNewCard));
    }

    #[test]
    fn test_meld_possible() {
        let player = player();
        assert!(player.is_meld_possible());
        assert_eq!(player.playable_melds().count_of(MeldKind::Dix), 1);

        let mut empty = PlayerState::new(Suit::Hearts);
        empty.take_card(card(5, Rank::Ten, Suit::Clubs));
        assert!(!empty.is_meld_possible());
    }
}
