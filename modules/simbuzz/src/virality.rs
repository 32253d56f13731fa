//! Popularity-gated virality tiers.

use encore_common::ViralTier;
use rand::Rng;

/// Classify a post's reach for an artist with the given popularity score.
///
/// First matching tier wins. Every tier needs both its popularity floor and
/// an independent draw over its threshold, so a low-popularity artist can
/// never luck into a higher tier while a star still has to roll for it.
pub fn classify(popularity: f64, rng: &mut impl Rng) -> ViralTier {
    let draw = rng.random_range(0.0..100.0);
    if popularity > 80.0 && draw > 70.0 {
        ViralTier::SuperViral
    } else if popularity > 60.0 && draw > 60.0 {
        ViralTier::Viral
    } else if popularity > 40.0 && draw > 50.0 {
        ViralTier::Trending
    } else {
        ViralTier::NotViral
    }
}

/// Draw a multiplier inside the tier's band.
pub fn roll_multiplier(tier: ViralTier, rng: &mut impl Rng) -> f64 {
    let (lo, hi) = tier.multiplier_range();
    rng.random_range(lo..=hi)
}
