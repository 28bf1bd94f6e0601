//! Melds: pattern recognition, the per-player ledger, and discovery.
//!
//! ## Key Types
//!
//! - `MeldKind`: the nine meld patterns and their points
//! - `MeldInstance`: a self-classifying group of cards
//! - `MeldLedger`: confirmed melds bucketed by type
//! - `MeldDiscovery`: enumerates what a hand can meld right now

pub mod kind;
pub mod instance;
pub mod ledger;
pub mod discovery;

pub use kind::MeldKind;
pub use instance::{classify, MeldCards, MeldInstance};
pub use ledger::MeldLedger;
pub use discovery::{compare_potentials, MeldDiscovery};
