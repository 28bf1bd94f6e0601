//! Card system: cards, ordered collections, and the deck.
//!
//! ## Key Types
//!
//! - `Rank`, `Suit`: card faces, with Pinochle rank order
//! - `CardId`: identity of one physical card in the double deck
//! - `Card`: a physical card (id + face)
//! - `CardCollection`: hand, capture pile or card pool
//! - `Deck`: the full deck, later the stock

pub mod card;
pub mod collection;
pub mod deck;

pub use card::{Card, CardId, Rank, Suit};
pub use collection::CardCollection;
pub use deck::Deck;
