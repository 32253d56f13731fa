//! SimulatedFeed — generates a week of social activity from the artist roster.
//!
//! The call surface the game state store consumes: one post on demand, or
//! the whole weekly batch. Posts are value objects; ownership passes to the
//! caller. Every draw, including post ids, goes through the engine's RNG so
//! a seeded engine replays identically.

use chrono::Utc;
use encore_common::{ArtistProfile, EncoreError, FeedPost, Personality, PlayerProfile};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};
use typed_builder::TypedBuilder;
use uuid::Uuid;

use crate::config::BuzzConfig;
use crate::templates::{self, TemplateLibrary};
use crate::{engagement, virality};

/// One post-generation request.
#[derive(Debug, TypedBuilder)]
pub struct PostRequest<'a> {
    pub artist: &'a ArtistProfile,
    pub platform: &'a str,
    pub week: u32,
    #[builder(default)]
    pub player: Option<&'a PlayerProfile>,
    /// Route content to the response pool (a reaction to the player's move).
    #[builder(default)]
    pub response_to_player: bool,
    /// Verbatim post body, bypassing every template pool.
    #[builder(default)]
    pub custom_content: Option<String>,
}

/// Feed simulation engine. Owns the template library, the tunables, and the
/// injected RNG.
pub struct SimulatedFeed<R: Rng = StdRng> {
    library: TemplateLibrary,
    config: BuzzConfig,
    rng: R,
}

impl SimulatedFeed<StdRng> {
    /// Engine with OS-seeded randomness.
    pub fn new(library: TemplateLibrary, config: BuzzConfig) -> Result<Self, EncoreError> {
        Self::with_rng(library, config, StdRng::from_os_rng())
    }

    /// Deterministic engine for replayable runs.
    pub fn seeded(
        library: TemplateLibrary,
        config: BuzzConfig,
        seed: u64,
    ) -> Result<Self, EncoreError> {
        Self::with_rng(library, config, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> SimulatedFeed<R> {
    /// Engine with a caller-supplied RNG.
    pub fn with_rng(
        library: TemplateLibrary,
        config: BuzzConfig,
        rng: R,
    ) -> Result<Self, EncoreError> {
        config.validate()?;
        Ok(Self {
            library,
            config,
            rng,
        })
    }

    /// Generate a single post. Infallible under valid inputs: template pools
    /// are non-empty by construction and the numeric pipeline floors to
    /// non-negative integers.
    pub fn generate_post(&mut self, req: &PostRequest<'_>) -> FeedPost {
        let artist = req.artist;
        let content = self.resolve_content(req);
        let tier = virality::classify(artist.popularity, &mut self.rng);
        let engagement = engagement::synthesize(artist, tier, &mut self.rng);
        let image = self.attach_image();

        debug!(
            artist = %artist.name,
            platform = req.platform,
            tier = %tier,
            likes = engagement.likes,
            follower_gain = engagement.follower_gain,
            "generated post"
        );

        FeedPost {
            id: self.next_post_id(),
            platform: req.platform.to_string(),
            content,
            image,
            week: req.week,
            posted_at: Utc::now(),
            likes: engagement.likes,
            comments: engagement.comments,
            shares: engagement.shares,
            viral_tier: tier,
            viral_multiplier: engagement.viral_multiplier,
            follower_gain: engagement.follower_gain,
            reputation_gain: 0,
            wealth_gain: 0,
        }
    }

    /// Generate every post for one simulated week across the roster.
    ///
    /// Popular artists almost always post (0.7 baseline rising to 1.0),
    /// each posting artist lands 1..=max posts, and each post independently
    /// rolls to be a reaction to the player. Output is the flat
    /// concatenation across artists; an empty roster yields an empty vec.
    pub fn generate_week(
        &mut self,
        roster: &[ArtistProfile],
        platform: &str,
        week: u32,
        player: Option<&PlayerProfile>,
    ) -> Vec<FeedPost> {
        let mut posts = Vec::new();
        for artist in roster {
            let post_chance = self.config.base_post_chance
                + artist.popularity / 100.0 * self.config.popularity_post_weight;
            if !self.rng.random_bool(post_chance.clamp(0.0, 1.0)) {
                continue;
            }
            let count = self.rng.random_range(1..=self.config.max_posts_per_week);
            for _ in 0..count {
                let response_to_player =
                    player.is_some() && self.rng.random_bool(self.config.response_chance);
                let req = PostRequest::builder()
                    .artist(artist)
                    .platform(platform)
                    .week(week)
                    .player(player)
                    .response_to_player(response_to_player)
                    .build();
                posts.push(self.generate_post(&req));
            }
        }
        info!(
            platform,
            week,
            roster = roster.len(),
            posts = posts.len(),
            "generated weekly feed"
        );
        posts
    }

    fn resolve_content(&mut self, req: &PostRequest<'_>) -> String {
        if let Some(text) = &req.custom_content {
            return text.clone();
        }
        let pool = if req.artist.personality == Personality::Controversial
            && self
                .rng
                .random_bool(self.config.controversial_override_chance)
        {
            self.library.hot_takes.as_slice()
        } else if req.response_to_player {
            self.library.responses.as_slice()
        } else {
            self.library.pool_for(req.artist.personality)
        };
        templates::render(pool, req.player, &mut self.rng)
    }

    fn attach_image(&mut self) -> Option<String> {
        if self.library.images.is_empty() || !self.rng.random_bool(self.config.image_chance) {
            return None;
        }
        let idx = self.rng.random_range(0..self.library.images.len());
        Some(self.library.images[idx].clone())
    }

    /// Post ids come from the engine RNG, not the OS, so seeded runs
    /// reproduce them.
    fn next_post_id(&mut self) -> Uuid {
        let bytes: [u8; 16] = self.rng.random();
        uuid::Builder::from_random_bytes(bytes).into_uuid()
    }
}
