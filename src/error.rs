//! Error types.
//!
//! Every rejection in the engine is recoverable: the caller corrects the
//! input and retries. Display strings double as user-facing messages.

use thiserror::Error;

use crate::core::Seat;
use crate::game::Stage;

/// Rejected card selection (no card chosen, or a position outside the hand).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SelectionError {
    #[error("You did not select a card. You must select a card to play.")]
    NothingSelected,

    #[error("All positions must be a valid position between 0 and {}. Please try again.", .hand_size.saturating_sub(1))]
    OutOfBounds { position: usize, hand_size: usize },

    #[error("There are no cards left in hand to play.")]
    EmptyHand,
}

/// Rejected meld composition.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MeldError {
    #[error("The cards you specified do not combine to make up a meld. Please try again.")]
    NotAMeld,

    #[error("All the cards in the meld are not present in the player's hand.")]
    NotInHand,

    #[error("This meld is not valid because at least one card in it has been used to create an instance of this same meld type before.")]
    RepeatedCard,

    #[error("The meld must contain at least one new card from hand. Please try again.")]
    NoNewCard,

    #[error("There are no possible melds to play with.")]
    NonePossible,
}

/// Malformed save data.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SaveError {
    #[error("missing `{0}` line")]
    MissingField(&'static str),

    #[error("`{field}` is not a number: {value:?}")]
    BadNumber { field: &'static str, value: String },

    #[error("not a card: {0:?}")]
    BadCard(String),

    #[error("not a trump card or suit: {0:?}")]
    BadTrump(String),

    #[error("unknown next player: {0:?}")]
    BadNextPlayer(String),

    #[error("save file names more copies of {0} than the deck holds")]
    CardUnavailable(String),

    #[error("not a meld: {0:?}")]
    InvalidMeld(String),
}

/// Unplayable configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("copies_per_card must be at least 1")]
    NoCopies,

    #[error("the initial deal must hand out at least one card")]
    EmptyDeal,

    #[error("dealing needs {needed} cards but the deck only holds {deck_size}")]
    DealTooLarge { needed: usize, deck_size: usize },
}

/// Umbrella error for the game state machine.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error(transparent)]
    Selection(#[from] SelectionError),

    #[error(transparent)]
    Meld(#[from] MeldError),

    #[error("invalid save file: {0}")]
    Save(#[from] SaveError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("cannot {action} during the {stage} stage")]
    WrongStage { action: &'static str, stage: Stage },

    #[error("it is not the {}'s turn", .0.noun())]
    NotYourTurn(Seat),

    #[error("the coin toss has not been decided yet")]
    TurnUndecided,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_messages() {
        let err = SelectionError::OutOfBounds {
            position: 14,
            hand_size: 12,
        };
        assert_eq!(
            err.to_string(),
            "All positions must be a valid position between 0 and 11. Please try again."
        );
    }

    #[test]
    fn test_game_error_wraps_sources() {
        let err: GameError = MeldError::NoNewCard.into();
        assert_eq!(err.to_string(), MeldError::NoNewCard.to_string());

        let err: GameError = SaveError::MissingField("Stock").into();
        assert_eq!(err.to_string(), "invalid save file: missing `Stock` line");
    }

    #[test]
    fn test_turn_errors() {
        assert_eq!(
            GameError::NotYourTurn(Seat::Human).to_string(),
            "it is not the human's turn"
        );
        assert_eq!(
            GameError::WrongStage {
                action: "throw a chase card",
                stage: Stage::LeadCard
            }
            .to_string(),
            "cannot throw a chase card during the lead card stage"
        );
    }
}
