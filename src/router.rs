//! Intent routing for chat messages.
//!
//! A message is classified by an ordered list of rules. The first rule that
//! recognizes the message decides the [`Intent`]; later rules are never
//! consulted. Order matters: a learn command that mentions "recommend" is
//! still a learn command.

use crate::learn::{self, LearnCommand, LearnError};
use crate::store::{Attribute, MovieStore};
use crate::text;

/// Canned replies, matched by substring of the lowercased message in order.
pub const SMALL_TALK: &[(&str, &str)] = &[
    ("hi", "Hello! How can I assist you today?"),
    ("hello", "Hi there! How can I help you with movies?"),
    (
        "how are you",
        "I'm just a bot, but I'm here to assist you with your movie queries!",
    ),
    (
        "how can you assist me",
        "I can provide information about movies, directors, genres, recommendations and more. Just ask me!",
    ),
    (
        "what can you do",
        "I can answer questions about movies, provide plots, director info, genres, recommend movies and more!",
    ),
];

/// Genres understood by recommendation requests, checked in order.
pub const GENRE_KEYWORDS: &[&str] = &["action", "comedy", "drama", "fantasy", "horror", "romance"];

const DIRECTOR_PHRASES: &[&str] = &["directed by", "has directed"];

/// A normalized chat message.
#[derive(Debug, Clone)]
pub struct Utterance<'a> {
    /// Message as typed.
    pub text: &'a str,
    /// Lowercased message.
    pub lower: String,
    /// Normalized tokens.
    pub tokens: Vec<String>,
}

impl<'a> Utterance<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            lower: text.to_lowercase(),
            tokens: text::tokenize(text),
        }
    }

    fn has_token(&self, token: &str) -> bool {
        self.tokens.iter().any(|t| t == token)
    }

    fn has_any_token(&self, tokens: &[&str]) -> bool {
        tokens.iter().any(|t| self.has_token(t))
    }
}

/// What the user asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// A `Learn:` command, parsed or refused.
    Learn(Result<LearnCommand, LearnError>),
    /// Greeting or FAQ with a canned reply.
    SmallTalk(&'static str),
    /// Movies by a director; the name may be empty.
    ByDirector(String),
    /// Recommendation for a genre keyword, `None` when no genre was named.
    Recommend(Option<&'static str>),
    /// Movies released in a year, as typed; it may not fit an `i32`.
    ByYear(String),
    /// A question about one movie, optionally about one attribute.
    AboutMovie {
        title: String,
        attribute: Option<Attribute>,
    },
    /// Nothing matched.
    Unknown,
}

type Rule = fn(&Utterance<'_>, &MovieStore) -> Option<Intent>;

/// Classification rules in priority order.
pub const RULES: &[(&str, Rule)] = &[
    ("learn", learn_rule),
    ("small_talk", small_talk_rule),
    ("director", director_rule),
    ("recommend", recommend_rule),
    ("year", year_rule),
    ("movie", movie_rule),
];

/// Classify a message. Returns the name of the matching rule (`"fallback"`
/// when none matched) and the intent.
pub fn classify(utterance: &Utterance<'_>, store: &MovieStore) -> (&'static str, Intent) {
    RULES
        .iter()
        .find_map(|(name, rule)| rule(utterance, store).map(|intent| (*name, intent)))
        .unwrap_or(("fallback", Intent::Unknown))
}

fn learn_rule(utterance: &Utterance<'_>, _store: &MovieStore) -> Option<Intent> {
    learn::parse_learn_command(utterance.text).map(Intent::Learn)
}

fn small_talk_rule(utterance: &Utterance<'_>, _store: &MovieStore) -> Option<Intent> {
    SMALL_TALK
        .iter()
        .find(|(phrase, _)| utterance.lower.contains(phrase))
        .map(|(_, reply)| Intent::SmallTalk(*reply))
}

fn director_rule(utterance: &Utterance<'_>, _store: &MovieStore) -> Option<Intent> {
    DIRECTOR_PHRASES
        .iter()
        .find_map(|phrase| phrase_remainder(utterance.text, phrase))
        .map(|name| Intent::ByDirector(name.to_string()))
}

fn recommend_rule(utterance: &Utterance<'_>, _store: &MovieStore) -> Option<Intent> {
    if !(utterance.lower.contains("recommend") || utterance.lower.contains("suggest")) {
        return None;
    }
    let genre = GENRE_KEYWORDS
        .iter()
        .copied()
        .find(|genre| utterance.lower.contains(genre));
    Some(Intent::Recommend(genre))
}

fn year_rule(utterance: &Utterance<'_>, _store: &MovieStore) -> Option<Intent> {
    if !(utterance.has_any_token(&["movies", "films"]) && utterance.has_token("released")) {
        return None;
    }
    utterance
        .tokens
        .iter()
        .find(|t| text::is_numeric(t))
        .map(|year| Intent::ByYear(year.clone()))
}

fn movie_rule(utterance: &Utterance<'_>, store: &MovieStore) -> Option<Intent> {
    let movie = store.records().iter().find(|m| {
        let title = m.title.to_lowercase();
        !title.trim().is_empty() && utterance.lower.contains(&title)
    })?;

    Some(Intent::AboutMovie {
        title: movie.title.clone(),
        attribute: asked_attribute(utterance),
    })
}

/// Attribute keywords in priority order.
fn asked_attribute(utterance: &Utterance<'_>) -> Option<Attribute> {
    if utterance.has_token("plot") {
        Some(Attribute::Plot)
    } else if utterance.has_any_token(&["director", "directed"]) {
        Some(Attribute::Director)
    } else if utterance.has_any_token(&["stars", "actors", "cast"]) {
        Some(Attribute::Cast)
    } else if utterance.has_token("genre") {
        Some(Attribute::Genre)
    } else if utterance.has_token("trivia") || utterance.lower.contains("fun fact") {
        Some(Attribute::Trivia)
    } else if utterance.has_any_token(&["year", "released"]) {
        Some(Attribute::Year)
    } else {
        None
    }
}

/// Text after the first case-insensitive occurrence of `phrase`, trimmed and
/// without trailing sentence punctuation. `phrase` must be ASCII.
pub fn phrase_remainder<'t>(text: &'t str, phrase: &str) -> Option<&'t str> {
    let start = find_ignore_ascii_case(text, phrase)?;
    // An ASCII match always ends on a char boundary.
    let rest = &text[start + phrase.len()..];
    Some(
        rest.trim()
            .trim_end_matches(|c: char| matches!(c, '?' | '!' | '.'))
            .trim_end(),
    )
}

fn find_ignore_ascii_case(haystack: &str, needle: &str) -> Option<usize> {
    let (h, n) = (haystack.as_bytes(), needle.as_bytes());
    if n.is_empty() || n.len() > h.len() {
        return None;
    }
    (0..=h.len() - n.len()).find(|&i| h[i..i + n.len()].eq_ignore_ascii_case(n))
}
