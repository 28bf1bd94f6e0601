//! Turn resolution: which of the lead and chase cards takes the pair.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Suit};
use crate::core::Seat;

/// Which throw of a turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Throw {
    Lead,
    Chase,
}

impl Throw {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Throw::Lead => "lead",
            Throw::Chase => "chase",
        }
    }
}

/// Result of a resolved lead/chase pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnOutcome {
    /// The throw that took the pair.
    pub winning_throw: Throw,
    /// Capture points of both cards.
    pub points: u32,
}

impl TurnOutcome {
    /// The seat that won, given who threw the lead.
    #[must_use]
    pub fn winner(&self, lead_thrower: Seat) -> Seat {
        match self.winning_throw {
            Throw::Lead => lead_thrower,
            Throw::Chase => lead_thrower.other(),
        }
    }
}

/// Points for capturing a card.
#[must_use]
pub fn card_points(card: &Card) -> u32 {
    card.rank.points()
}

/// Whether the lead card takes the turn.
///
/// A trump lead loses only to a trump chase of equal or higher rank. A plain
/// lead loses to any trump chase and to a same-suit chase of equal or higher
/// rank; a chase of another plain suit never wins.
#[must_use]
pub fn lead_card_wins(lead: &Card, chase: &Card, trump: Suit) -> bool {
    if lead.suit == trump {
        return chase.suit != trump || lead.has_greater_rank_than(chase);
    }
    if chase.suit == trump {
        return false;
    }
    if chase.suit == lead.suit {
        return lead.has_greater_rank_than(chase);
    }
    true
}

/// Resolve a lead/chase pair.
#[must_use]
pub fn resolve_turn(lead: &Card, chase: &Card, trump: Suit) -> TurnOutcome {
    let winning_throw = if lead_card_wins(lead, chase, trump) {
        Throw::Lead
    } else {
        Throw::Chase
    };
    TurnOutcome {
        winning_throw,
        points: card_points(lead) + card_points(chase),
    }
}
