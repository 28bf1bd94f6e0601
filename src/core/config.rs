//! Game configuration.
//!
//! The defaults describe the standard two-handed game: a 48-card double deck
//! (two copies of each rank and suit), dealt in three packets of four.
//! `seed` is the reproducibility seam for shuffles and coin tosses.

use serde::{Deserialize, Serialize};

use crate::cards::{Rank, Suit};
use crate::error::ConfigError;

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Physical copies of each rank×suit combination.
    pub copies_per_card: u8,

    /// Number of dealing rounds at the start of a round.
    pub deal_packets: u8,

    /// Cards handed to each seat per dealing round.
    pub packet_size: u8,

    /// Fixed RNG seed. `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            copies_per_card: 2,
            deal_packets: 3,
            packet_size: 4,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Create the standard configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a fixed seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the number of copies of each card.
    #[must_use]
    pub fn with_copies_per_card(mut self, copies: u8) -> Self {
        self.copies_per_card = copies;
        self
    }

    /// Set the deal shape.
    #[must_use]
    pub fn with_deal(mut self, packets: u8, packet_size: u8) -> Self {
        self.deal_packets = packets;
        self.packet_size = packet_size;
        self
    }

    /// Total cards in the deck.
    #[must_use]
    pub fn deck_size(&self) -> usize {
        Rank::ALL.len() * Suit::ALL.len() * self.copies_per_card as usize
    }

    /// Cards each seat holds after the initial deal.
    #[must_use]
    pub fn hand_size(&self) -> usize {
        self.deal_packets as usize * self.packet_size as usize
    }

    /// Check the configuration describes a playable deal.
    ///
    /// Both hands plus the trump card must fit in the deck.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.copies_per_card == 0 {
            return Err(ConfigError::NoCopies);
        }
        if self.hand_size() == 0 {
            return Err(ConfigError::EmptyDeal);
        }
        let needed = self.hand_size() * 2 + 1;
        if needed > self.deck_size() {
            return Err(ConfigError::DealTooLarge {
                needed,
                deck_size: self.deck_size(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();

        assert_eq!(config.deck_size(), 48);
        assert_eq!(config.hand_size(), 12);
        assert_eq!(config.seed, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = GameConfig::new().with_seed(9).with_deal(2, 3);

        assert_eq!(config.seed, Some(9));
        assert_eq!(config.hand_size(), 6);
    }

    #[test]
    fn test_validate_rejects_zero_copies() {
        let config = GameConfig::new().with_copies_per_card(0);
        assert_eq!(config.validate(), Err(ConfigError::NoCopies));
    }

    #[test]
    fn test_validate_rejects_empty_deal() {
        let config = GameConfig::new().with_deal(0, 4);
        assert_eq!(config.validate(), Err(ConfigError::EmptyDeal));
    }

    #[test]
    fn test_validate_rejects_oversized_deal() {
        let config = GameConfig::new().with_copies_per_card(1).with_deal(3, 4);
        assert_eq!(
            config.validate(),
            Err(ConfigError::DealTooLarge {
                needed: 25,
                deck_size: 24
            })
        );
    }

    #[test]
    fn test_config_serde_with_defaults() {
        let config: GameConfig = serde_json::from_str(r#"{"seed": 5}"#).unwrap();

        assert_eq!(config, GameConfig::new().with_seed(5));

        let json = serde_json::to_string(&config).unwrap();
        let back: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
