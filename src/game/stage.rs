//! Turn stages.

use serde::{Deserialize, Serialize};

/// Where the game is within a turn or round.
///
/// ```text
/// LeadCard -> ChaseCard -> Intermission -> Meld -> Intermission -> LeadCard
///                                                                -> OutOfCards -> RoundEnd
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stage {
    LeadCard,
    ChaseCard,
    Meld,
    Intermission,
    OutOfCards,
    RoundEnd,
}

impl Stage {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Stage::LeadCard => "lead card",
            Stage::ChaseCard => "chase card",
            Stage::Meld => "meld",
            Stage::Intermission => "intermission",
            Stage::OutOfCards => "out of cards",
            Stage::RoundEnd => "round end",
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
