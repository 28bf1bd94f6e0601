//! The turn and round state machine.
//!
//! - `Stage`: where a turn currently is
//! - `CoinFace`: opening-lead coin toss
//! - `Game`: the model the presentation layer drives

pub mod stage;
pub mod coin;
pub mod model;

pub use stage::Stage;
pub use coin::CoinFace;
pub use model::{Game, MeldPlay, TurnRecord};
