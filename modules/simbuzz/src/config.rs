//! Tunables for the weekly feed simulation.

use encore_common::EncoreError;
use serde::{Deserialize, Serialize};

/// Knobs for post cadence and attachment behavior. Defaults match the shipped
/// game balance; `validate()` runs at engine construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuzzConfig {
    /// Baseline chance an artist posts in a given week.
    pub base_post_chance: f64,
    /// Extra post chance granted at popularity 100, scaled linearly below.
    pub popularity_post_weight: f64,
    /// Most posts one artist makes in a week; the count is drawn from 1..=max.
    pub max_posts_per_week: u32,
    /// Chance any given post reacts to the player instead of standing alone.
    /// Only rolled when a player profile is supplied.
    pub response_chance: f64,
    /// Chance a controversial artist drops a hot take, overriding everything
    /// but explicit custom content.
    pub controversial_override_chance: f64,
    /// Chance a post carries an image attachment.
    pub image_chance: f64,
}

impl Default for BuzzConfig {
    fn default() -> Self {
        Self {
            base_post_chance: 0.7,
            popularity_post_weight: 0.3,
            max_posts_per_week: 3,
            response_chance: 0.15,
            controversial_override_chance: 0.3,
            image_chance: 0.4,
        }
    }
}

impl BuzzConfig {
    pub fn validate(&self) -> Result<(), EncoreError> {
        let chances = [
            (self.base_post_chance, "base_post_chance"),
            (self.popularity_post_weight, "popularity_post_weight"),
            (self.response_chance, "response_chance"),
            (
                self.controversial_override_chance,
                "controversial_override_chance",
            ),
            (self.image_chance, "image_chance"),
        ];
        for (value, name) in chances {
            if !(0.0..=1.0).contains(&value) {
                return Err(EncoreError::Config(format!(
                    "{name} must be within [0, 1], got {value}"
                )));
            }
        }
        if self.max_posts_per_week == 0 {
            return Err(EncoreError::Config(
                "max_posts_per_week must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(BuzzConfig::default().validate().is_ok());
    }

    #[test]
    fn out_of_range_chance_is_rejected() {
        let config = BuzzConfig {
            response_chance: 1.5,
            ..BuzzConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("response_chance"));
    }

    #[test]
    fn zero_post_cap_is_rejected() {
        let config = BuzzConfig {
            max_posts_per_week: 0,
            ..BuzzConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
