//! Heuristic move selection, used for computer play and for human hints.
//!
//! Every suggestion comes back with the reason it was chosen so callers can
//! explain the move.

use std::cmp::Ordering;

use tracing::debug;

use super::state::PlayerState;
use crate::cards::{Card, CardCollection, Suit};
use crate::melds::{compare_potentials, MeldInstance};

pub const LEAD_PRESERVES_MELDS: &str =
    "throwing this card would preserve the most favorable hand, which has the most high-value melds";
pub const LEAD_PREFERS_TRUMP: &str = "throwing this card would preserve the most favorable hand (meld-wise) and it would increase the chance of winning because it is a trump card";
pub const LEAD_BALANCED: &str = "throwing this card would result in a good balance between a favorable hand (meld-wise) and the chance of winning the turn";

pub const CHASE_CANNOT_WIN: &str = "there is no way to win this turn, so throwing the least ranked card will increase chances of winning next turn";
pub const CHASE_OVER_TRUMP: &str = "throwing a trump-suit card that is higher than but still closest to the opponent's trump-suit card will be the least expensive winning move";
pub const CHASE_SAME_SUIT: &str = "throwing the card of the same suit as the opponent but with a rank greater than but closest to that of the opponent's card is the least expensive winning move";
pub const CHASE_FORCED_TRUMP: &str = "there is no way of winning without using a trump suit, so throwing the least ranked trump suit is the least expensive way of winning over the opponent's non-trump-suit card";

pub const MELD_HIGHEST: &str = "playing this meld will yield the highest possible points from the available hand";
pub const MELD_NONE: &str = "there are no possible melds to play with";

/// A suggested move and why.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Suggestion<T> {
    pub value: T,
    pub reasoning: &'static str,
}

impl<T> Suggestion<T> {
    fn new(value: T, reasoning: &'static str) -> Self {
        Self { value, reasoning }
    }
}

/// Pick the lead card that keeps the best meld potential in hand.
///
/// Every card is discarded in simulation. Among the cards whose removal leaves
/// the strongest hand, trump cards are preferred, then the highest rank.
/// `None` for an empty hand.
#[must_use]
pub fn suggest_lead(player: &PlayerState) -> Option<Suggestion<Card>> {
    let hand = player.hand();
    let first = *hand.get(0)?;
    let discovery = player.discovery();

    let mut best_points = discovery.potential_points(&hand.without(0));
    let mut best_cards = vec![first];
    for (position, card) in hand.iter().enumerate().skip(1) {
        let points = discovery.potential_points(&hand.without(position));
        match compare_potentials(&best_points, &points) {
            Ordering::Less => {
                best_points = points;
                best_cards.clear();
                best_cards.push(*card);
            }
            Ordering::Equal => best_cards.push(*card),
            Ordering::Greater => {}
        }
    }

    if best_cards.len() == 1 {
        debug!(card = %best_cards[0], "lead keeps the best hand");
        return Some(Suggestion::new(best_cards[0], LEAD_PRESERVES_MELDS));
    }

    let trump = player.trump();
    let trumps: Vec<Card> = best_cards.iter().copied().filter(|c| c.suit == trump).collect();
    if !trumps.is_empty() {
        best_cards = trumps;
    }
    let chosen = highest_ranked(&best_cards)?;
    let reasoning = if chosen.suit == trump {
        LEAD_PREFERS_TRUMP
    } else {
        LEAD_BALANCED
    };
    debug!(card = %chosen, tied = best_cards.len(), "lead chosen by tie-break");
    Some(Suggestion::new(chosen, reasoning))
}

/// Pick the cheapest card that beats `opponent`, or the least valuable card
/// when the turn cannot be won. `None` for an empty hand.
#[must_use]
pub fn suggest_chase(player: &PlayerState, opponent: &Card) -> Option<Suggestion<Card>> {
    let hand = player.hand();
    let trump = player.trump();
    let trumps = hand.by_suit(trump);

    let suggestion = if opponent.suit == trump {
        let higher: Vec<Card> = trumps
            .iter()
            .copied()
            .filter(|c| c.has_greater_rank_than(opponent))
            .collect();
        match lowest_ranked(&higher) {
            Some(card) => Suggestion::new(card, CHASE_OVER_TRUMP),
            None => Suggestion::new(least_ranked_card(hand, trump)?, CHASE_CANNOT_WIN),
        }
    } else {
        let higher: Vec<Card> = hand
            .iter()
            .copied()
            .filter(|c| c.suit == opponent.suit && c.has_greater_rank_than(opponent))
            .collect();
        if let Some(card) = lowest_ranked(&higher) {
            Suggestion::new(card, CHASE_SAME_SUIT)
        } else if let Some(card) = lowest_ranked(&trumps) {
            Suggestion::new(card, CHASE_FORCED_TRUMP)
        } else {
            Suggestion::new(least_ranked_card(hand, trump)?, CHASE_CANNOT_WIN)
        }
    };
    debug!(card = %suggestion.value, against = %opponent, "chase chosen");
    Some(suggestion)
}

/// Pick the highest-scoring playable meld.
///
/// Ties between meld types resolve in `MeldKind` order; the first instance of
/// the winning type is returned.
#[must_use]
pub fn suggest_meld(player: &PlayerState) -> Suggestion<Option<MeldInstance>> {
    let playable = player.playable_melds();
    let best = playable
        .best_kinds()
        .first()
        .and_then(|&kind| playable.melds_of(kind).first().cloned());
    match best {
        Some(meld) => {
            debug!(kind = ?meld.kind(), points = meld.points(), "meld chosen");
            Suggestion::new(Some(meld), MELD_HIGHEST)
        }
        None => Suggestion::new(None, MELD_NONE),
    }
}

/// Lowest non-trump card, or the lowest card when the hand is all trump.
/// The first card wins ties.
#[must_use]
pub fn least_ranked_card(hand: &CardCollection, trump: Suit) -> Option<Card> {
    let non_trump: Vec<Card> = hand.iter().copied().filter(|c| c.suit != trump).collect();
    if non_trump.is_empty() {
        lowest_ranked(hand.cards())
    } else {
        lowest_ranked(&non_trump)
    }
}

fn lowest_ranked(cards: &[Card]) -> Option<Card> {
    cards
        .iter()
        .copied()
        .reduce(|best, c| if c.has_lesser_rank_than(&best) { c } else { best })
}

fn highest_ranked(cards: &[Card]) -> Option<Card> {
    cards
        .iter()
        .copied()
        .reduce(|best, c| if c.has_greater_rank_than(&best) { c } else { best })
}
