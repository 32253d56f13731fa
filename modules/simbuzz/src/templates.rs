//! Authored template pools and the text-selection rules.
//!
//! Pool wording is game content, not engineering contract. What the code
//! guarantees: pools are non-empty, selection is uniform over the resolved
//! pool, and a literal `{name}` placeholder never reaches a rendered post.

use encore_common::{EncoreError, Personality, PlayerProfile};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Placeholder substituted with the player's stage name.
const NAME_TOKEN: &str = "{name}";
/// Stand-in when a template needs a name but no player exists.
const GENERIC_ARTIST: &str = "another artist";

/// Every pool the generator can sample, plus the image attachment set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateLibrary {
    pub friendly: Vec<String>,
    pub arrogant: Vec<String>,
    pub mysterious: Vec<String>,
    pub controversial: Vec<String>,
    pub humble: Vec<String>,
    /// Reactions to something the player just did.
    pub responses: Vec<String>,
    /// Hot takes a controversial artist can drop regardless of context.
    pub hot_takes: Vec<String>,
    /// Placeholder image attachments. May be empty; then no post carries one.
    pub images: Vec<String>,
}

impl TemplateLibrary {
    /// Caller-authored pools. Every text pool must have at least one entry;
    /// only the image set may be empty.
    pub fn custom(pools: TemplateLibrary) -> Result<TemplateLibrary, EncoreError> {
        pools.ensure_pools_non_empty()?;
        Ok(pools)
    }

    fn ensure_pools_non_empty(&self) -> Result<(), EncoreError> {
        let pools = [
            (&self.friendly, "friendly"),
            (&self.arrogant, "arrogant"),
            (&self.mysterious, "mysterious"),
            (&self.controversial, "controversial"),
            (&self.humble, "humble"),
            (&self.responses, "responses"),
            (&self.hot_takes, "hot_takes"),
        ];
        for (pool, name) in pools {
            if pool.is_empty() {
                return Err(EncoreError::Validation(format!(
                    "template pool '{name}' is empty"
                )));
            }
        }
        Ok(())
    }

    /// The autonomous-post pool for an artist's personality.
    pub fn pool_for(&self, personality: Personality) -> &[String] {
        match personality {
            Personality::Friendly => &self.friendly,
            Personality::Arrogant => &self.arrogant,
            Personality::Mysterious => &self.mysterious,
            Personality::Controversial => &self.controversial,
            Personality::Humble => &self.humble,
        }
    }
}

/// Uniform pick from `pool`, with the `{name}` policy applied.
///
/// With a player present every `{name}` occurrence becomes their stage name.
/// Without one, placeholder-bearing templates are skipped during selection;
/// if the whole pool needs the placeholder, a generic stand-in is used so no
/// literal token leaks into output.
pub fn render(pool: &[String], player: Option<&PlayerProfile>, rng: &mut impl Rng) -> String {
    match player {
        Some(player) => {
            let template = &pool[rng.random_range(0..pool.len())];
            template.replace(NAME_TOKEN, &player.stage_name)
        }
        None => {
            let eligible: Vec<&String> =
                pool.iter().filter(|t| !t.contains(NAME_TOKEN)).collect();
            if eligible.is_empty() {
                let template = &pool[rng.random_range(0..pool.len())];
                template.replace(NAME_TOKEN, GENERIC_ARTIST)
            } else {
                eligible[rng.random_range(0..eligible.len())].clone()
            }
        }
    }
}

impl Default for TemplateLibrary {
    fn default() -> Self {
        let owned = |texts: &[&str]| texts.iter().map(|t| t.to_string()).collect();
        Self {
            friendly: owned(&[
                "Just wrapped the best studio session of my life. Grateful for every one of you 💛",
                "Your messages keep me going. Reading every single one tonight.",
                "New music soon. I think you're really going to love this one.",
                "Met some of you outside the venue today. You're the reason I do this.",
                "Shoutout to {name} for the love lately. This community is everything.",
                "Rehearsals all week. Tired but happy.",
                "Can't stop smiling about how far we've come together.",
            ]),
            arrogant: owned(&[
                "Nobody in this game is touching me right now. Nobody.",
                "They study my flows for a reason.",
                "Another week, another chart. Getting bored of winning, honestly.",
                "Your favorite artist's favorite artist. You know the name.",
                "{name} wishes. That's the post.",
                "I don't do competition. I do domination.",
                "Wrote three hits before breakfast. What did you do today?",
            ]),
            mysterious: owned(&[
                "something is coming.",
                "the signs were always there. you just weren't listening.",
                "midnight. you'll understand then.",
                "deleted everything. starting over.",
                "🌑",
                "not everything needs an announcement.",
            ]),
            controversial: owned(&[
                "Modern music is a factory line and everyone's pretending it isn't.",
                "Half these 'artists' couldn't write a hook if their label depended on it.",
                "Award shows are paid theater. Always have been.",
                "Unpopular opinion: your favorite album is mid and nostalgia is carrying it.",
                "{name} fans are the most gullible people on this app. Sorry not sorry.",
                "The industry buries real ones and promotes algorithms. Wake up.",
                "I said what I said. Not deleting it.",
            ]),
            humble: owned(&[
                "Still can't believe anyone listens to my songs at all. Thank you.",
                "I owe everything to the people who believed in me before the numbers.",
                "Messed up a chord on stage tonight. You all cheered anyway.",
                "Just a kid with a guitar who got lucky. I remember that every day.",
                "Whatever happens with this career, I'm already further than I dreamed.",
                "Thank you for another week of letting me make music.",
            ]),
            responses: owned(&[
                "Heard {name}'s new track. I have thoughts... mostly good ones.",
                "Big respect to {name} for that release. The scene needed it.",
                "{name} is moving different lately. Watching closely.",
                "Everyone talking about {name} today, huh. Interesting.",
                "Ran the new {name} record back three times. Okay, I get it now.",
                "{name} keeps this industry on its toes. Credit where it's due.",
                "So we're all just pretending {name} didn't just do that? Fine.",
            ]),
            hot_takes: owned(&[
                "Hot take: streaming numbers mean nothing and you all know it.",
                "Auto-tune should be a controlled substance. Fight me.",
                "Vinyl collectors don't actually listen to vinyl. Prove me wrong.",
                "Festivals are overpriced camping with worse bathrooms.",
                "If your song needs a dance trend to chart, it's a prop, not a hit.",
                "Most collabs are just two marketing teams shaking hands.",
            ]),
            images: owned(&[
                "assets/posts/studio_session.png",
                "assets/posts/stage_lights.png",
                "assets/posts/backstage.png",
                "assets/posts/tour_bus.png",
            ]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn player(name: &str) -> PlayerProfile {
        PlayerProfile {
            stage_name: name.to_string(),
        }
    }

    #[test]
    fn default_pools_are_all_non_empty() {
        assert!(TemplateLibrary::custom(TemplateLibrary::default()).is_ok());
    }

    #[test]
    fn custom_rejects_an_empty_pool() {
        let mut pools = TemplateLibrary::default();
        pools.humble.clear();
        let err = TemplateLibrary::custom(pools).unwrap_err();
        assert!(err.to_string().contains("humble"));
    }

    #[test]
    fn render_substitutes_every_placeholder_occurrence() {
        let pool = vec!["{name} again? {name} is everywhere.".to_string()];
        let mut rng = StdRng::seed_from_u64(1);
        let text = render(&pool, Some(&player("MC Test")), &mut rng);
        assert_eq!(text, "MC Test again? MC Test is everywhere.");
    }

    #[test]
    fn render_without_player_skips_placeholder_templates() {
        let pool = vec![
            "{name} dropped something".to_string(),
            "quiet week in the studio".to_string(),
        ];
        let mut rng = StdRng::seed_from_u64(2);
        for _ in 0..50 {
            let text = render(&pool, None, &mut rng);
            assert_eq!(text, "quiet week in the studio");
        }
    }

    #[test]
    fn render_without_player_falls_back_when_whole_pool_needs_a_name() {
        let pool = vec!["everyone is sleeping on {name}".to_string()];
        let mut rng = StdRng::seed_from_u64(3);
        let text = render(&pool, None, &mut rng);
        assert_eq!(text, "everyone is sleeping on another artist");
        assert!(!text.contains(NAME_TOKEN));
    }

    #[test]
    fn render_covers_the_whole_pool() {
        let pool: Vec<String> = (0..4).map(|i| format!("take {i}")).collect();
        let mut rng = StdRng::seed_from_u64(4);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            seen.insert(render(&pool, None, &mut rng));
        }
        assert_eq!(seen.len(), pool.len());
    }
}
