//! Fact learning from chat commands.
//!
//! Users teach the assistant with
//! `Learn: <title>: <attribute> -> <answer>` (or `Add fact: ...`). A command
//! is fully parsed and its attribute validated before the store is touched.

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;
use tracing::warn;

use crate::error::Result;
use crate::store::{Attribute, MovieStore, UpsertOutcome};

static DIRECTIVE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^\s*(?:learn|add fact):").expect("directive pattern is valid"));

/// Why a learn command was refused. The display text is the reply shown to
/// the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LearnError {
    #[error("I couldn't understand that. Please use the format 'Learn: [movie_title: attribute] -> [answer]'.")]
    Malformed,

    #[error("Sorry, the attribute '{0}' is not recognized.")]
    UnknownAttribute(String),
}

/// A parsed `Learn:` command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LearnCommand {
    pub title: String,
    pub attribute: Attribute,
    pub answer: String,
}

/// Returns true if `text` starts with a learn directive.
pub fn is_learn_command(text: &str) -> bool {
    DIRECTIVE.is_match(text)
}

/// Parse a learn command. Returns `None` when `text` does not start with a
/// directive keyword.
pub fn parse_learn_command(text: &str) -> Option<std::result::Result<LearnCommand, LearnError>> {
    let directive = DIRECTIVE.find(text)?;
    Some(parse_body(&text[directive.end()..]))
}

fn parse_body(body: &str) -> std::result::Result<LearnCommand, LearnError> {
    let parts: Vec<&str> = body.split("->").collect();
    let [question, answer] = parts.as_slice() else {
        return Err(LearnError::Malformed);
    };

    let (title, attribute) = question.split_once(':').ok_or(LearnError::Malformed)?;
    let title = title.trim();
    if title.is_empty() {
        return Err(LearnError::Malformed);
    }

    let attribute = attribute
        .parse::<Attribute>()
        .map_err(LearnError::UnknownAttribute)?;

    Ok(LearnCommand {
        title: title.to_string(),
        attribute,
        answer: answer.trim().to_string(),
    })
}

/// Apply a parsed command to the store and describe what changed.
pub fn learn(store: &mut MovieStore, command: &LearnCommand) -> Result<String> {
    let outcome = store.upsert(&command.title, command.attribute, &command.answer)?;

    Ok(match outcome {
        UpsertOutcome::Added => format!(
            "Added new movie '{}' with {}.",
            command.title, command.attribute
        ),
        UpsertOutcome::Updated => {
            format!("Updated {} for {}.", command.attribute, command.title)
        }
        UpsertOutcome::InvalidValue(reason) => {
            warn!(title = %command.title, %reason, "learn command rejected");
            format!("Sorry, I couldn't learn that: {}.", reason)
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{CsvStorage, TableStorage};
    use tempfile::TempDir;

    fn empty_store() -> (MovieStore, TempDir) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("movies.csv");
        CsvStorage::new(&path).write(&[]).unwrap();
        (MovieStore::open(path).unwrap(), dir)
    }

    #[test]
    fn test_not_a_learn_command() {
        assert!(parse_learn_command("Who directed Inception").is_none());
        assert!(parse_learn_command("I want to learn: nothing").is_none());
        assert!(!is_learn_command("learning is fun"));
    }

    #[test]
    fn test_parse_learn() {
        let cmd = parse_learn_command("Learn: Inception: trivia -> Shot in six countries")
            .unwrap()
            .unwrap();
        assert_eq!(
            cmd,
            LearnCommand {
                title: "Inception".to_string(),
                attribute: Attribute::Trivia,
                answer: "Shot in six countries".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_add_fact_case_insensitive() {
        let cmd = parse_learn_command("ADD FACT: Heat : Director -> Michael Mann")
            .unwrap()
            .unwrap();
        assert_eq!(cmd.title, "Heat");
        assert_eq!(cmd.attribute, Attribute::Director);
        assert_eq!(cmd.answer, "Michael Mann");
    }

    #[test]
    fn test_parse_title_keeps_later_colons_in_attribute_side() {
        // Only the first colon splits title from attribute.
        let result = parse_learn_command("learn: Mad Max: Fury Road: year -> 2015").unwrap();
        assert_eq!(
            result,
            Err(LearnError::UnknownAttribute("fury road: year".to_string()))
        );
    }

    #[test]
    fn test_parse_missing_arrow() {
        let result = parse_learn_command("learn: Inception: plot is about dreams").unwrap();
        assert_eq!(result, Err(LearnError::Malformed));
    }

    #[test]
    fn test_parse_two_arrows() {
        let result = parse_learn_command("learn: Inception: plot -> a -> b").unwrap();
        assert_eq!(result, Err(LearnError::Malformed));
    }

    #[test]
    fn test_parse_missing_colon() {
        let result = parse_learn_command("learn: Inception plot -> dreams").unwrap();
        assert_eq!(result, Err(LearnError::Malformed));
    }

    #[test]
    fn test_parse_empty_title() {
        let result = parse_learn_command("learn: : plot -> dreams").unwrap();
        assert_eq!(result, Err(LearnError::Malformed));
    }

    #[test]
    fn test_parse_unknown_attribute() {
        let result = parse_learn_command("learn: Inception: Budget -> 160 million").unwrap();
        assert_eq!(result, Err(LearnError::UnknownAttribute("budget".to_string())));
        assert_eq!(
            result.unwrap_err().to_string(),
            "Sorry, the attribute 'budget' is not recognized."
        );
    }

    #[test]
    fn test_parse_title_attribute_rejected() {
        let result = parse_learn_command("learn: Inception: title -> Origin").unwrap();
        assert_eq!(result, Err(LearnError::UnknownAttribute("title".to_string())));
    }

    #[test]
    fn test_learn_adds_then_updates() {
        let (mut store, _dir) = empty_store();

        let cmd = parse_learn_command("Learn: Inception: trivia -> Shot in six countries")
            .unwrap()
            .unwrap();
        assert_eq!(
            learn(&mut store, &cmd).unwrap(),
            "Added new movie 'Inception' with trivia."
        );

        let movie = store.find_by_title("inception").unwrap();
        assert_eq!(movie.trivia, "Shot in six countries");
        assert_eq!(movie.year, None);
        assert!(movie.director.is_empty());
        assert!(movie.cast.is_empty());
        assert!(movie.genre.is_empty());
        assert!(movie.plot.is_empty());

        let cmd = parse_learn_command("learn: INCEPTION: year -> 2010")
            .unwrap()
            .unwrap();
        assert_eq!(
            learn(&mut store, &cmd).unwrap(),
            "Updated year for INCEPTION."
        );
        assert_eq!(store.find_by_title("Inception").unwrap().year, Some(2010));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_learn_invalid_year() {
        let (mut store, _dir) = empty_store();
        let cmd = parse_learn_command("learn: Heat: year -> someday")
            .unwrap()
            .unwrap();

        let reply = learn(&mut store, &cmd).unwrap();
        assert!(reply.starts_with("Sorry, I couldn't learn that"));
        assert!(store.is_empty());
    }

    #[test]
    fn test_learn_roundtrip_every_attribute() {
        let (mut store, _dir) = empty_store();
        let values = [
            (Attribute::Year, "1995"),
            (Attribute::Director, "Michael Mann"),
            (Attribute::Cast, "Al Pacino, Robert De Niro"),
            (Attribute::Genre, "Crime, Drama"),
            (Attribute::Plot, "A detective hunts a crew of thieves"),
            (Attribute::Trivia, "The diner scene was shot in one take"),
        ];

        for (attribute, value) in values {
            let text = format!("Learn: Heat: {} -> {}", attribute, value);
            let cmd = parse_learn_command(&text).unwrap().unwrap();
            learn(&mut store, &cmd).unwrap();
            assert_eq!(store.find_by_title("Heat").unwrap().get(attribute), value);
        }
    }
}
