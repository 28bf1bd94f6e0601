//! Converting one seat's piles to and from their save-file fields.
//!
//! Only complete melds (every card still in hand) are written. Their cards
//! are left out of the hand field and come back into the hand on load.
//!
//! A starred card sits in two or more complete melds. Two copies of one face
//! can both be starred, so on load the number of physical copies comes from
//! the mention count and the copies the pool still holds.

use rustc_hash::FxHashMap;

use super::notation::{format_cards, MeldCard};
use crate::cards::{Card, CardCollection, CardId, Rank, Suit};
use crate::core::{Seat, SeatMap};
use crate::error::SaveError;
use crate::melds::{classify, MeldInstance, MeldKind, MeldLedger};
use crate::players::PlayerState;

/// The three card fields of one seat, as ghost or real cards.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PlayerRecord {
    pub hand: Vec<Card>,
    pub capture_pile: Vec<Card>,
    pub melds: Vec<Vec<MeldCard>>,
}

/// Split a player's state into save-file fields.
#[must_use]
pub fn encode_player(player: &PlayerState) -> PlayerRecord {
    let hand = player.hand();
    let complete: Vec<&MeldInstance> = player
        .ledger()
        .iter()
        .filter(|meld| meld.cards().iter().all(|c| hand.contains_id(c.id)))
        .collect();

    let mut uses: FxHashMap<CardId, usize> = FxHashMap::default();
    for card in complete.iter().flat_map(|meld| meld.cards()) {
        *uses.entry(card.id).or_insert(0) += 1;
    }

    let melds = complete
        .iter()
        .map(|meld| {
            meld.cards()
                .iter()
                .map(|&card| MeldCard {
                    card,
                    shared: uses.get(&card.id).is_some_and(|&n| n > 1),
                })
                .collect()
        })
        .collect();

    PlayerRecord {
        hand: hand.iter().filter(|c| !uses.contains_key(&c.id)).copied().collect(),
        capture_pile: player.capture_pile().cards().to_vec(),
        melds,
    }
}

/// Rebuild one player's state, drawing every named card out of `pool`.
pub fn decode_player(record: &PlayerRecord, pool: &mut CardCollection, trump: Suit) -> Result<PlayerState, SaveError> {
    Draft::draw(record, pool, trump)?.finish(pool, trump, |_| 0)
}

/// Rebuild both seats from one shared pool.
///
/// Every unstarred card of every seat is drawn first. A seat then takes one
/// copy of each starred face per two starred mentions, capped by the copies
/// left once each later seat starring that face keeps one.
pub fn decode_players(
    records: &SeatMap<PlayerRecord>,
    pool: &mut CardCollection,
    trump: Suit,
) -> Result<SeatMap<PlayerState>, SaveError> {
    let mut drafts = Vec::with_capacity(Seat::ALL.len());
    for seat in Seat::ALL {
        drafts.push((seat, Draft::draw(&records[seat], pool, trump)?));
    }

    let mut players = SeatMap::new(|_| PlayerState::new(trump));
    let mut rest = drafts.into_iter();
    while let Some((seat, draft)) = rest.next() {
        let later = rest.as_slice();
        let reserved = |face: Face| later.iter().filter(|(_, d)| d.stars(face)).count();
        players[seat] = draft.finish(pool, trump, reserved)?;
    }
    Ok(players)
}

type Face = (Rank, Suit);

/// A seat with every card drawn except its starred meld cards, which are
/// still ghosts. Meld cards join the hand in meld order when assembled.
#[derive(Clone, Debug)]
struct Draft {
    hand: CardCollection,
    capture_pile: CardCollection,
    melds: Vec<(MeldKind, Vec<MeldCard>)>,
    starred: FxHashMap<Face, usize>,
}

impl Draft {
    fn draw(record: &PlayerRecord, pool: &mut CardCollection, trump: Suit) -> Result<Self, SaveError> {
        let mut hand = CardCollection::new();
        for ghost in &record.hand {
            hand.add(take_from_pool(pool, ghost)?);
        }

        let mut capture_pile = CardCollection::new();
        for ghost in &record.capture_pile {
            capture_pile.add(take_from_pool(pool, ghost)?);
        }

        let mut starred: FxHashMap<Face, usize> = FxHashMap::default();
        let mut melds = Vec::with_capacity(record.melds.len());
        for group in &record.melds {
            let ghosts: Vec<Card> = group.iter().map(|token| token.card).collect();
            let kind = classify(&ghosts, trump).ok_or_else(|| invalid_meld(group))?;

            let mut tokens = Vec::with_capacity(group.len());
            for token in group {
                if token.shared {
                    *starred.entry((token.card.rank, token.card.suit)).or_insert(0) += 1;
                    tokens.push(*token);
                } else {
                    let card = take_from_pool(pool, &token.card)?;
                    tokens.push(MeldCard { card, shared: false });
                }
            }
            melds.push((kind, tokens));
        }

        Ok(Self {
            hand,
            capture_pile,
            melds,
            starred,
        })
    }

    fn stars(&self, face: Face) -> bool {
        self.starred.contains_key(&face)
    }

    /// Draw the starred copies and build the ledger. Each starred mention
    /// goes to the copy with the fewest uses that is free for the meld type.
    fn finish(
        self,
        pool: &mut CardCollection,
        trump: Suit,
        reserved: impl Fn(Face) -> usize,
    ) -> Result<PlayerState, SaveError> {
        let Self {
            mut hand,
            capture_pile,
            melds,
            starred,
        } = self;

        let mut faces: Vec<(Face, usize)> = starred.into_iter().collect();
        faces.sort_unstable();

        let mut copies: Vec<(Card, usize)> = Vec::new();
        for ((rank, suit), mentions) in faces {
            let available = pool
                .by_rank_and_suit(rank, suit)
                .len()
                .saturating_sub(reserved((rank, suit)));
            for _ in 0..(mentions / 2).min(available).max(1) {
                copies.push((take_from_pool(pool, &Card::ghost(rank, suit))?, 0));
            }
        }

        let mut ledger = MeldLedger::new();
        for (kind, group) in &melds {
            let mut meld = MeldInstance::new(trump);
            for token in group {
                let card = if token.shared {
                    let copy = copies
                        .iter_mut()
                        .filter(|(c, _)| {
                            c.same_rank_and_suit(&token.card)
                                && !ledger.is_card_used_by(c.id, *kind)
                                && !meld.contains_id(c.id)
                        })
                        .min_by_key(|(_, uses)| *uses)
                        .ok_or_else(|| invalid_meld(group))?;
                    if copy.1 == 0 {
                        hand.add(copy.0);
                    }
                    copy.1 += 1;
                    copy.0
                } else {
                    hand.add(token.card);
                    token.card
                };
                meld.add_card(card);
            }
            ledger.add(meld).map_err(|_| invalid_meld(group))?;
        }
        for (card, _) in copies.iter().filter(|(_, uses)| *uses == 0) {
            hand.add(*card);
        }

        Ok(PlayerState::from_parts(hand, capture_pile, ledger, trump))
    }
}

fn invalid_meld(group: &[MeldCard]) -> SaveError {
    let cards: Vec<Card> = group.iter().map(|token| token.card).collect();
    SaveError::InvalidMeld(format_cards(&cards))
}

/// Draw the first pool card matching a ghost's rank and suit.
pub fn take_from_pool(pool: &mut CardCollection, ghost: &Card) -> Result<Card, SaveError> {
    pool.take_matching(ghost.rank, ghost.suit)
        .ok_or_else(|| SaveError::CardUnavailable(ghost.short_code()))
}
