//! How each seat turns a decision into a play.
//!
//! Both seats share the same `PlayerState` and the same heuristics. They
//! differ in where the choice comes from:
//! - `Human`: applies the positions the caller selected, and can ask for hints
//! - `Computer`: ignores selections and applies its own suggestion

use super::heuristics::{suggest_chase, suggest_lead, suggest_meld, Suggestion};
use super::state::PlayerState;
use crate::cards::Card;
use crate::core::Seat;
use crate::error::{GameError, MeldError, SelectionError};
use crate::melds::MeldInstance;

/// A completed play and the message describing it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Play<T> {
    pub value: T,
    pub message: String,
}

/// Per-seat play behaviour.
pub trait Strategy: Send + Sync {
    /// The seat this strategy plays for.
    fn seat(&self) -> Seat;

    fn suggest_lead(&self, player: &PlayerState) -> Option<Suggestion<Card>> {
        suggest_lead(player)
    }

    fn suggest_chase(&self, player: &PlayerState, opponent: &Card) -> Option<Suggestion<Card>> {
        suggest_chase(player, opponent)
    }

    fn suggest_meld(&self, player: &PlayerState) -> Suggestion<Option<MeldInstance>> {
        suggest_meld(player)
    }

    /// Throw a lead card. `selected` is the caller's hand position, if any.
    fn apply_lead(&self, player: &mut PlayerState, selected: Option<usize>) -> Result<Play<Card>, GameError>;

    /// Throw a chase card against `opponent`.
    fn apply_chase(
        &self,
        player: &mut PlayerState,
        opponent: &Card,
        selected: Option<usize>,
    ) -> Result<Play<Card>, GameError>;

    /// Record a meld built from `selected` positions.
    fn apply_meld(&self, player: &mut PlayerState, selected: &[usize]) -> Result<Play<MeldInstance>, GameError>;

    /// Hint text for the lead stage. `None` when this seat takes no hints.
    fn hint_lead(&self, _player: &PlayerState) -> Option<String> {
        None
    }

    fn hint_chase(&self, _player: &PlayerState, _opponent: &Card) -> Option<String> {
        None
    }

    fn hint_meld(&self, _player: &PlayerState) -> Option<String> {
        None
    }
}

/// Plays the caller's selections.
#[derive(Clone, Copy, Debug, Default)]
pub struct Human;

/// Plays its own suggestions.
#[derive(Clone, Copy, Debug, Default)]
pub struct Computer;

pub static HUMAN: Human = Human;
pub static COMPUTER: Computer = Computer;

/// The strategy that plays for `seat`.
#[must_use]
pub fn strategy_for(seat: Seat) -> &'static dyn Strategy {
    match seat {
        Seat::Human => &HUMAN,
        Seat::Computer => &COMPUTER,
    }
}

impl Strategy for Human {
    fn seat(&self) -> Seat {
        Seat::Human
    }

    fn apply_lead(&self, player: &mut PlayerState, selected: Option<usize>) -> Result<Play<Card>, GameError> {
        let position = selected.ok_or(SelectionError::NothingSelected)?;
        let card = player.play_from_hand(position)?;
        Ok(Play {
            value: card,
            message: format!("You chose to play {card} as your lead card."),
        })
    }

    fn apply_chase(
        &self,
        player: &mut PlayerState,
        _opponent: &Card,
        selected: Option<usize>,
    ) -> Result<Play<Card>, GameError> {
        let position = selected.ok_or(SelectionError::NothingSelected)?;
        let card = player.play_from_hand(position)?;
        Ok(Play {
            value: card,
            message: format!("You chose to play {card} as your chase card."),
        })
    }

    fn apply_meld(&self, player: &mut PlayerState, selected: &[usize]) -> Result<Play<MeldInstance>, GameError> {
        let meld = player.compose_meld(selected)?;
        let kind = player.commit_meld(meld.clone())?;
        Ok(Play {
            value: meld,
            message: format!("You played a {kind} for your meld."),
        })
    }

    fn hint_lead(&self, player: &PlayerState) -> Option<String> {
        let suggestion = self.suggest_lead(player)?;
        Some(card_hint(player, &suggestion, "lead"))
    }

    fn hint_chase(&self, player: &PlayerState, opponent: &Card) -> Option<String> {
        let suggestion = self.suggest_chase(player, opponent)?;
        Some(card_hint(player, &suggestion, "chase"))
    }

    fn hint_meld(&self, player: &PlayerState) -> Option<String> {
        let suggestion = self.suggest_meld(player);
        let Some(meld) = suggestion.value else {
            return Some(format!("Hint: {}.", suggestion.reasoning));
        };
        let cards: Vec<String> = meld
            .cards()
            .iter()
            .map(|c| positioned(player, c))
            .collect();
        Some(format!(
            "Hint: I recommend that you present {} to create a {} meld because {}.",
            list_phrase(&cards),
            kind_name(&meld),
            suggestion.reasoning
        ))
    }
}

impl Strategy for Computer {
    fn seat(&self) -> Seat {
        Seat::Computer
    }

    fn apply_lead(&self, player: &mut PlayerState, _selected: Option<usize>) -> Result<Play<Card>, GameError> {
        let suggestion = self.suggest_lead(player).ok_or(SelectionError::EmptyHand)?;
        let card = player.play_card(&suggestion.value).ok_or(SelectionError::EmptyHand)?;
        Ok(Play {
            value: card,
            message: format!(
                "The computer chose to play {card} as its lead card because {}.",
                suggestion.reasoning
            ),
        })
    }

    fn apply_chase(
        &self,
        player: &mut PlayerState,
        opponent: &Card,
        _selected: Option<usize>,
    ) -> Result<Play<Card>, GameError> {
        let suggestion = self
            .suggest_chase(player, opponent)
            .ok_or(SelectionError::EmptyHand)?;
        let card = player.play_card(&suggestion.value).ok_or(SelectionError::EmptyHand)?;
        Ok(Play {
            value: card,
            message: format!(
                "The computer chose to play {card} as its chase card because {}.",
                suggestion.reasoning
            ),
        })
    }

    fn apply_meld(&self, player: &mut PlayerState, _selected: &[usize]) -> Result<Play<MeldInstance>, GameError> {
        let suggestion = self.suggest_meld(player);
        let meld = suggestion.value.ok_or(MeldError::NonePossible)?;
        player.commit_meld(meld.clone())?;
        let cards = meld.short_codes();
        let message = format!(
            "The computer chose to play {} to create a {} meld because {}.",
            list_phrase(&cards),
            kind_name(&meld),
            suggestion.reasoning
        );
        Ok(Play { value: meld, message })
    }
}

fn card_hint(player: &PlayerState, suggestion: &Suggestion<Card>, throw: &str) -> String {
    format!(
        "Hint: I recommend that you present {} as your {throw} card because {}.",
        positioned(player, &suggestion.value),
        suggestion.reasoning
    )
}

/// `"KH(3)"`: a card with its hand position.
fn positioned(player: &PlayerState, card: &Card) -> String {
    match player.position_of(card) {
        Some(position) => format!("{card}({position})"),
        None => card.to_string(),
    }
}

fn kind_name(meld: &MeldInstance) -> &'static str {
    meld.kind().map_or("", |k| k.name())
}

/// `"A"`, `"A and B"`, `"A, B, and C"`.
fn list_phrase(items: &[String]) -> String {
    match items {
        [] => String::new(),
        [only] => only.clone(),
        [first, second] => format!("{first} and {second}"),
        [init @ .., last] => format!("{}, and {last}", init.join(", ")),
    }
}
