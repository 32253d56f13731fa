use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// --- Enums ---

/// Content-style tag conditioning which template pool an artist samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Personality {
    Friendly,
    Arrogant,
    Mysterious,
    Controversial,
    Humble,
}

impl Personality {
    /// Parse a free-form roster tag, case-insensitive. Unknown tags fall
    /// back to `Friendly`: personality is open-ended content configuration,
    /// not a structural invariant worth failing on.
    pub fn from_tag(tag: &str) -> Self {
        match tag.to_ascii_lowercase().as_str() {
            "friendly" => Personality::Friendly,
            "arrogant" => Personality::Arrogant,
            "mysterious" => Personality::Mysterious,
            "controversial" => Personality::Controversial,
            "humble" => Personality::Humble,
            _ => Personality::Friendly,
        }
    }
}

impl std::fmt::Display for Personality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Personality::Friendly => write!(f, "friendly"),
            Personality::Arrogant => write!(f, "arrogant"),
            Personality::Mysterious => write!(f, "mysterious"),
            Personality::Controversial => write!(f, "controversial"),
            Personality::Humble => write!(f, "humble"),
        }
    }
}

/// Engagement-intensity classification for a post. Ordered: a higher tier
/// always means a hotter multiplier band.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ViralTier {
    NotViral,
    Trending,
    Viral,
    SuperViral,
}

impl ViralTier {
    /// Inclusive [lo, hi] band the post's multiplier is drawn from.
    pub fn multiplier_range(&self) -> (f64, f64) {
        match self {
            ViralTier::NotViral => (0.5, 1.0),
            ViralTier::Trending => (2.0, 5.0),
            ViralTier::Viral => (5.0, 10.0),
            ViralTier::SuperViral => (10.0, 25.0),
        }
    }
}

impl std::fmt::Display for ViralTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ViralTier::NotViral => write!(f, "not_viral"),
            ViralTier::Trending => write!(f, "trending"),
            ViralTier::Viral => write!(f, "viral"),
            ViralTier::SuperViral => write!(f, "super_viral"),
        }
    }
}

// --- Profiles ---

/// An AI artist persona. Created once at world init; this component only
/// reads it — popularity and listener counts move elsewhere in the game.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtistProfile {
    pub id: Uuid,
    pub name: String,
    /// Avatar image reference.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub personality: Personality,
    /// Fame score, semantically 0-100.
    pub popularity: f64,
    /// Audience-size scale factor.
    pub monthly_listeners: u64,
}

/// The player's identity, as far as the feed needs it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerProfile {
    /// Stage name substituted for `{name}` in templates.
    pub stage_name: String,
}

// --- Posts ---

/// One fabricated social post, handed off to the game state store.
///
/// Immutable value object from this component's side. The store may later
/// bump counters on simulated interactions; that mutation is its business.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedPost {
    pub id: Uuid,
    pub platform: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Simulation week the post landed on.
    pub week: u32,
    pub posted_at: DateTime<Utc>,
    pub likes: u64,
    pub comments: u64,
    pub shares: u64,
    pub viral_tier: ViralTier,
    pub viral_multiplier: f64,
    pub follower_gain: u64,
    /// Reserved; always 0 for now.
    pub reputation_gain: i64,
    /// Reserved; always 0 for now.
    pub wealth_gain: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_personality_tag_falls_back_to_friendly() {
        assert_eq!(Personality::from_tag("chaotic"), Personality::Friendly);
        assert_eq!(Personality::from_tag(""), Personality::Friendly);
    }

    #[test]
    fn personality_tag_parse_is_case_insensitive() {
        assert_eq!(Personality::from_tag("Arrogant"), Personality::Arrogant);
        assert_eq!(Personality::from_tag("MYSTERIOUS"), Personality::Mysterious);
    }

    #[test]
    fn viral_tier_serializes_snake_case() {
        let tag = serde_json::to_value(ViralTier::SuperViral).unwrap();
        assert_eq!(tag, serde_json::json!("super_viral"));
        let tag = serde_json::to_value(ViralTier::NotViral).unwrap();
        assert_eq!(tag, serde_json::json!("not_viral"));
    }

    #[test]
    fn tiers_order_by_intensity() {
        assert!(ViralTier::NotViral < ViralTier::Trending);
        assert!(ViralTier::Trending < ViralTier::Viral);
        assert!(ViralTier::Viral < ViralTier::SuperViral);
    }

    #[test]
    fn multiplier_bands_are_contiguous_and_rising() {
        let tiers = [
            ViralTier::NotViral,
            ViralTier::Trending,
            ViralTier::Viral,
            ViralTier::SuperViral,
        ];
        for pair in tiers.windows(2) {
            let (_, prev_hi) = pair[0].multiplier_range();
            let (next_lo, _) = pair[1].multiplier_range();
            assert!(next_lo >= prev_hi);
        }
        for tier in tiers {
            let (lo, hi) = tier.multiplier_range();
            assert!(lo >= 0.5);
            assert!(hi > lo);
        }
    }
}
