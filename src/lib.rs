//! # pinochle
//!
//! A rules engine for two-handed Pinochle: one human seat against one
//! computer seat, played with a 48-card double deck.
//!
//! ## Design Principles
//!
//! 1. **Core only**: no rendering, no input handling, no file I/O. The engine
//!    takes positions and text in, and hands state, messages and save text out.
//!
//! 2. **Explicit results**: every rejected move is an error value carrying its
//!    user-facing message. Heuristics return their reasoning next to the move.
//!
//! 3. **Reproducible**: all randomness goes through `GameRng`, seedable from
//!    `GameConfig`.
//!
//! ## Modules
//!
//! - `core`: seats, per-seat storage, RNG, configuration
//! - `cards`: cards, card collections and the deck
//! - `melds`: meld types, validity, ledgers and discovery
//! - `players`: per-seat state, heuristics and play strategies
//! - `rules`: lead/chase resolution and card points
//! - `game`: the turn and round state machine
//! - `serialization`: the save-file text format
//!
//! ## Example
//!
//! ```
//! use pinochle::{CoinFace, Game, GameConfig, Seat, Stage};
//!
//! let mut game = Game::new(GameConfig::new().with_seed(7)).unwrap();
//! if game.needs_coin_toss() {
//!     game.toss_coin(CoinFace::Heads).unwrap();
//! }
//!
//! if game.turn() == Some(Seat::Human) {
//!     game.human_throws_lead(Some(0)).unwrap();
//! } else {
//!     game.advance().unwrap();
//! }
//! assert_eq!(game.stage(), Stage::ChaseCard);
//! ```

pub mod core;
pub mod cards;
pub mod melds;
pub mod players;
pub mod rules;
pub mod game;
pub mod serialization;
pub mod error;

// Re-export commonly used types
pub use crate::core::{GameConfig, GameRng, Seat, SeatMap};

pub use crate::cards::{Card, CardCollection, CardId, Deck, Rank, Suit};

pub use crate::melds::{MeldDiscovery, MeldInstance, MeldKind, MeldLedger};

pub use crate::players::{PlayerState, Strategy, Suggestion};

pub use crate::rules::{resolve_turn, Throw, TurnOutcome};

pub use crate::game::{CoinFace, Game, MeldPlay, Stage, TurnRecord};

pub use crate::serialization::SaveData;

pub use crate::error::{ConfigError, GameError, MeldError, SaveError, SelectionError};
