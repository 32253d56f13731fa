//! simbuzz — Simulates a coherent social feed for the artist roster.
//!
//! Fabricates AI-artist posts for the music-career sim: personality-
//! conditioned template text plus a popularity-gated virality tier with
//! synthesized engagement counters. Every random draw flows through an
//! injected RNG so a seeded engine replays a run exactly.

pub mod config;
pub mod engagement;
pub mod feed;
pub mod templates;
pub mod virality;

pub use config::BuzzConfig;
pub use engagement::{synthesize, Engagement};
pub use feed::{PostRequest, SimulatedFeed};
pub use templates::TemplateLibrary;
pub use virality::classify;
