//! The chat entry point.
//!
//! [`Assistant::handle_input`] takes one raw message and always returns one
//! reply. Failures inside a turn, including a failed write of a learned fact,
//! become reply text; nothing propagates to the caller.

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, error, warn};

use crate::config::Config;
use crate::learn;
use crate::resolve;
use crate::router::{self, Intent, Utterance};
use crate::store::{Attribute, MovieStore};

/// Reply when no rule recognizes the message.
pub const FALLBACK_REPLY: &str =
    "I'm not sure how to help with that. Can you ask about a specific movie?";

/// Reply when a recommendation request names no known genre.
pub const NO_GENRE_REPLY: &str = "Please specify a genre for recommendations.";

/// Movie chatbot over a [`MovieStore`].
pub struct Assistant {
    store: MovieStore,
    recommendations: usize,
    rng: StdRng,
}

impl Assistant {
    /// Create an assistant with settings from `config`.
    pub fn new(store: MovieStore, config: &Config) -> Self {
        Self::with_rng(store, config.recommendations, StdRng::from_os_rng())
    }

    /// Create an assistant with an explicit random source, for reproducible
    /// recommendations.
    pub fn with_rng(store: MovieStore, recommendations: usize, rng: StdRng) -> Self {
        Self {
            store,
            recommendations: recommendations.max(1),
            rng,
        }
    }

    pub fn store(&self) -> &MovieStore {
        &self.store
    }

    /// Answer one message.
    pub fn handle_input(&mut self, text: &str) -> String {
        let utterance = Utterance::new(text);
        let (rule, intent) = router::classify(&utterance, &self.store);
        debug!(rule, ?intent, tokens = ?utterance.tokens, "classified input");
        self.respond(intent)
    }

    fn respond(&mut self, intent: Intent) -> String {
        match intent {
            Intent::Learn(Ok(command)) => match learn::learn(&mut self.store, &command) {
                Ok(reply) => reply,
                Err(e) => {
                    error!(title = %command.title, error = %e, "failed to save learned fact");
                    format!("Sorry, I couldn't save that fact: {}", e)
                }
            },
            Intent::Learn(Err(refusal)) => {
                warn!(reason = %refusal, "learn command refused");
                refusal.to_string()
            }
            Intent::SmallTalk(reply) => reply.to_string(),
            Intent::ByDirector(name) => resolve::movies_by_director(&self.store, &name),
            Intent::Recommend(Some(genre)) => self.recommend(genre),
            Intent::Recommend(None) => NO_GENRE_REPLY.to_string(),
            Intent::ByYear(year) => resolve::movies_by_year(&self.store, &year),
            Intent::AboutMovie {
                title,
                attribute: Some(attribute),
            } => self.describe_attribute(&title, attribute),
            Intent::AboutMovie {
                title,
                attribute: None,
            } => self.describe_movie(&title),
            Intent::Unknown => FALLBACK_REPLY.to_string(),
        }
    }

    fn recommend(&mut self, genre: &str) -> String {
        let picks = resolve::recommend_by_genre(
            &self.store,
            genre,
            self.recommendations,
            None,
            &mut self.rng,
        );
        if picks.is_empty() {
            format!("Sorry, I couldn't find any {} movies to recommend.", genre)
        } else {
            format!("I recommend watching: {}", picks.join(", "))
        }
    }

    fn describe_attribute(&self, title: &str, attribute: Attribute) -> String {
        let value = resolve::attribute(&self.store, title, attribute).unwrap_or_default();
        if value.trim().is_empty() {
            return format!(
                "I don't know the {attr} of {title} yet. You can teach me with 'Learn: {title}: {attr} -> ...'",
                attr = attribute,
                title = title
            );
        }

        match attribute {
            Attribute::Plot => format!("The plot of {} is: {}", title, value),
            Attribute::Director => format!("{} was directed by {}", title, value),
            Attribute::Cast => format!("The main cast of {} includes: {}", title, value),
            Attribute::Genre => format!("{} is a {} movie", title, value),
            Attribute::Trivia => format!("Here's a trivia about {}: {}", title, value),
            Attribute::Year => format!("{} was released in {}", title, value),
        }
    }

    fn describe_movie(&mut self, title: &str) -> String {
        let mut reply = resolve::movie_info(&self.store, title);

        let genre = resolve::attribute(&self.store, title, Attribute::Genre).unwrap_or_default();
        if genre.trim().is_empty() {
            return reply;
        }

        let picks = resolve::related_by_genre(
            &self.store,
            title,
            &genre,
            self.recommendations,
            &mut self.rng,
        );
        reply.push_str(&format!(
            "\nIf you like this, you might also enjoy: {}",
            picks.join(", ")
        ));
        reply
    }
}
