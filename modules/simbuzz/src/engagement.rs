//! Engagement synthesis — turns a tier and an audience size into counters.

use encore_common::{ArtistProfile, ViralTier};
use rand::Rng;

use crate::virality;

/// Synthesized engagement for one post.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Engagement {
    pub likes: u64,
    pub comments: u64,
    pub shares: u64,
    pub viral_multiplier: f64,
    pub follower_gain: u64,
}

/// Compute the counters for one post by `artist` at the given tier.
///
/// Monthly listeners set the base audience and popularity scales it; the
/// tier multiplier then amplifies every counter. Follower gain weights the
/// deeper interactions (comments x3, shares x5) over likes before taking 1%.
pub fn synthesize(artist: &ArtistProfile, tier: ViralTier, rng: &mut impl Rng) -> Engagement {
    let base_followers = artist.monthly_listeners as f64 / 10.0;
    let base_multiplier = artist.popularity / 20.0;
    let viral_multiplier = virality::roll_multiplier(tier, rng);

    let likes_base = base_followers * rng.random_range(0.05..=0.15) * base_multiplier;
    let comments_base = likes_base * rng.random_range(0.02..=0.07);
    let shares_base = likes_base * rng.random_range(0.01..=0.04);

    let likes = (likes_base * viral_multiplier).floor() as u64;
    let comments = (comments_base * viral_multiplier).floor() as u64;
    let shares = (shares_base * viral_multiplier).floor() as u64;
    let follower_gain =
        ((likes + comments * 3 + shares * 5) as f64 * 0.01).floor() as u64;

    Engagement {
        likes,
        comments,
        shares,
        viral_multiplier,
        follower_gain,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use encore_common::Personality;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use uuid::Uuid;

    fn artist(popularity: f64, monthly_listeners: u64) -> ArtistProfile {
        ArtistProfile {
            id: Uuid::new_v4(),
            name: "Vera Static".to_string(),
            image: None,
            personality: Personality::Friendly,
            popularity,
            monthly_listeners,
        }
    }

    #[test]
    fn counters_scale_down_from_likes() {
        let mut rng = StdRng::seed_from_u64(21);
        let star = artist(90.0, 1_000_000);
        for _ in 0..200 {
            let e = synthesize(&star, ViralTier::Viral, &mut rng);
            assert!(e.likes > 0);
            assert!(e.comments < e.likes);
            assert!(e.shares < e.likes);
        }
    }

    #[test]
    fn follower_gain_matches_the_weighted_counters() {
        let mut rng = StdRng::seed_from_u64(22);
        let star = artist(75.0, 500_000);
        for _ in 0..200 {
            let e = synthesize(&star, ViralTier::Trending, &mut rng);
            let expected =
                ((e.likes + e.comments * 3 + e.shares * 5) as f64 * 0.01).floor() as u64;
            assert_eq!(e.follower_gain, expected);
        }
    }

    #[test]
    fn multiplier_comes_from_the_requested_tier() {
        let mut rng = StdRng::seed_from_u64(23);
        for _ in 0..200 {
            let e = synthesize(&artist(90.0, 1_000_000), ViralTier::SuperViral, &mut rng);
            assert!(e.viral_multiplier >= 10.0 && e.viral_multiplier <= 25.0);
        }
    }

    #[test]
    fn zero_audience_yields_zero_engagement() {
        let mut rng = StdRng::seed_from_u64(24);
        let nobody = artist(50.0, 0);
        let e = synthesize(&nobody, ViralTier::SuperViral, &mut rng);
        assert_eq!(e.likes, 0);
        assert_eq!(e.comments, 0);
        assert_eq!(e.shares, 0);
        assert_eq!(e.follower_gain, 0);
    }
}
