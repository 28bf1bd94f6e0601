//! Players: card state, heuristics, and per-seat strategies.
//!
//! - `PlayerState`: hand, capture pile and meld ledger of one seat
//! - `heuristics`: lead, chase and meld suggestions with reasoning
//! - `Strategy`: how a seat turns a suggestion or selection into a play

pub mod state;
pub mod heuristics;
pub mod strategy;

pub use state::PlayerState;
pub use heuristics::{least_ranked_card, suggest_chase, suggest_lead, suggest_meld, Suggestion};
pub use strategy::{strategy_for, Computer, Human, Play, Strategy, COMPUTER, HUMAN};
