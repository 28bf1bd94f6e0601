//! Core engine types: seats, per-seat storage, RNG, configuration.
//!
//! These are the building blocks every other module leans on. They know
//! nothing about melds or turns.

pub mod player;
pub mod rng;
pub mod config;

pub use player::{Seat, SeatMap};
pub use rng::GameRng;
pub use config::GameConfig;
