//! Coin toss for the opening lead of a tied game.

use serde::{Deserialize, Serialize};

use crate::core::GameRng;

/// A coin face.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CoinFace {
    Heads,
    Tails,
}

impl CoinFace {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            CoinFace::Heads => "heads",
            CoinFace::Tails => "tails",
        }
    }

    /// Flip a fair coin.
    pub fn toss(rng: &mut GameRng) -> CoinFace {
        if rng.coin_flip() {
            CoinFace::Heads
        } else {
            CoinFace::Tails
        }
    }
}

impl std::fmt::Display for CoinFace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
