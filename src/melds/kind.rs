//! The nine meld patterns and their point values.

use serde::{Deserialize, Serialize};

use crate::cards::Rank;

/// Meld type.
///
/// Declaration order is fixed: it drives ledger bucket order, discovery order
/// and tie-breaking between equally scored meld types.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MeldKind {
    Flush,
    RoyalMarriage,
    Marriage,
    Dix,
    FourAces,
    FourKings,
    FourQueens,
    FourJacks,
    Pinochle,
}

impl MeldKind {
    pub const COUNT: usize = 9;

    pub const ALL: [MeldKind; Self::COUNT] = [
        MeldKind::Flush,
        MeldKind::RoyalMarriage,
        MeldKind::Marriage,
        MeldKind::Dix,
        MeldKind::FourAces,
        MeldKind::FourKings,
        MeldKind::FourQueens,
        MeldKind::FourJacks,
        MeldKind::Pinochle,
    ];

    /// Bucket index.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[must_use]
    pub const fn points(self) -> u32 {
        match self {
            MeldKind::Flush => 150,
            MeldKind::RoyalMarriage => 40,
            MeldKind::Marriage => 20,
            MeldKind::Dix => 10,
            MeldKind::FourAces => 100,
            MeldKind::FourKings => 80,
            MeldKind::FourQueens => 60,
            MeldKind::FourJacks => 40,
            MeldKind::Pinochle => 40,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            MeldKind::Flush => "Flush",
            MeldKind::RoyalMarriage => "Royal Marriage",
            MeldKind::Marriage => "Marriage",
            MeldKind::Dix => "Dix",
            MeldKind::FourAces => "Four Aces",
            MeldKind::FourKings => "Four Kings",
            MeldKind::FourQueens => "Four Queens",
            MeldKind::FourJacks => "Four Jacks",
            MeldKind::Pinochle => "Pinochle",
        }
    }

    /// The four-of-a-kind meld for a rank. Tens and Nines have none.
    #[must_use]
    pub const fn four_of_a_kind(rank: Rank) -> Option<MeldKind> {
        match rank {
            Rank::Ace => Some(MeldKind::FourAces),
            Rank::King => Some(MeldKind::FourKings),
            Rank::Queen => Some(MeldKind::FourQueens),
            Rank::Jack => Some(MeldKind::FourJacks),
            Rank::Ten | Rank::Nine => None,
        }
    }
}

impl std::fmt::Display for MeldKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_points_table() {
        let points: Vec<u32> = MeldKind::ALL.iter().map(|k| k.points()).collect();
        assert_eq!(points, vec![150, 40, 20, 10, 100, 80, 60, 40, 40]);
    }

    #[test]
    fn test_index_matches_order() {
        for (i, kind) in MeldKind::ALL.iter().enumerate() {
            assert_eq!(kind.index(), i);
        }
    }

    #[test]
    fn test_four_of_a_kind() {
        assert_eq!(MeldKind::four_of_a_kind(Rank::Queen), Some(MeldKind::FourQueens));
        assert_eq!(MeldKind::four_of_a_kind(Rank::Ten), None);
        assert_eq!(MeldKind::four_of_a_kind(Rank::Nine), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(MeldKind::RoyalMarriage.to_string(), "Royal Marriage");
    }
}
