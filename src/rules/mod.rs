//! Turn rules.
//!
//! Pure functions over cards and the trump suit: who takes a lead/chase pair
//! and how many points it is worth. The game model applies the outcome.

pub mod turn;

pub use turn::{card_points, lead_card_wins, resolve_turn, Throw, TurnOutcome};
