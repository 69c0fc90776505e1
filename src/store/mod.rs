//! Movie store for Cinebot.
//!
//! Holds the movie table in memory, answers lookups against it and persists
//! every change through a [`TableStorage`] backend. The table keeps insertion
//! order and at most one record per case-insensitive title.

pub mod csv_storage;
pub mod seed;

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{CinebotError, Result};

pub use csv_storage::CsvStorage;

/// Column names of the persisted table, in order.
pub const COLUMNS: [&str; 7] = [
    "title", "year", "director", "cast", "genre", "plot", "trivia",
];

/// One movie row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieRecord {
    /// Unique key, compared case-insensitively.
    pub title: String,
    /// Release year; `None` when unknown.
    pub year: Option<i32>,
    pub director: String,
    /// Comma-separated cast list.
    pub cast: String,
    /// Free text, may name several genres.
    pub genre: String,
    pub plot: String,
    pub trivia: String,
}

impl MovieRecord {
    /// Create a record with only a title set.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Display value of an attribute; empty string when unset.
    pub fn get(&self, attribute: Attribute) -> String {
        match attribute {
            Attribute::Year => self.year.map(|y| y.to_string()).unwrap_or_default(),
            Attribute::Director => self.director.clone(),
            Attribute::Cast => self.cast.clone(),
            Attribute::Genre => self.genre.clone(),
            Attribute::Plot => self.plot.clone(),
            Attribute::Trivia => self.trivia.clone(),
        }
    }

    /// Set an attribute from text. Fails without changing the record when a
    /// `year` value is not an integer.
    pub fn set(&mut self, attribute: Attribute, value: &str) -> std::result::Result<(), String> {
        match attribute {
            Attribute::Year => {
                let value = value.trim();
                self.year = if value.is_empty() {
                    None
                } else {
                    Some(value.parse::<i32>().map_err(|_| {
                        format!("'{}' is not a valid year", value)
                    })?)
                };
            }
            Attribute::Director => self.director = value.to_string(),
            Attribute::Cast => self.cast = value.to_string(),
            Attribute::Genre => self.genre = value.to_string(),
            Attribute::Plot => self.plot = value.to_string(),
            Attribute::Trivia => self.trivia = value.to_string(),
        }
        Ok(())
    }

    fn has_title(&self, title: &str) -> bool {
        self.title.to_lowercase() == title.to_lowercase()
    }
}

/// A learnable field of a [`MovieRecord`]: every column except `title`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Attribute {
    Year,
    Director,
    Cast,
    Genre,
    Plot,
    Trivia,
}

impl Attribute {
    /// All attributes in column order.
    pub const ALL: [Attribute; 6] = [
        Attribute::Year,
        Attribute::Director,
        Attribute::Cast,
        Attribute::Genre,
        Attribute::Plot,
        Attribute::Trivia,
    ];

    /// Column name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Attribute::Year => "year",
            Attribute::Director => "director",
            Attribute::Cast => "cast",
            Attribute::Genre => "genre",
            Attribute::Plot => "plot",
            Attribute::Trivia => "trivia",
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Attribute {
    /// The unrecognized name, normalized.
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let name = s.trim().to_lowercase();
        Attribute::ALL
            .iter()
            .copied()
            .find(|attr| attr.as_str() == name)
            .ok_or(name)
    }
}

/// Result of a successful [`MovieStore::upsert`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpsertOutcome {
    /// A new record was appended.
    Added,
    /// An existing record was changed.
    Updated,
    /// The value was rejected; nothing changed.
    InvalidValue(String),
}

/// Persistence backend for the movie table.
#[cfg_attr(test, mockall::automock)]
pub trait TableStorage {
    /// Read every record.
    fn read(&self) -> Result<Vec<MovieRecord>>;

    /// Replace the stored table with `records`.
    fn write(&self, records: &[MovieRecord]) -> Result<()>;

    /// Human-readable location, used in logs and errors.
    fn describe(&self) -> String;
}

/// In-memory movie table backed by a [`TableStorage`].
pub struct MovieStore {
    records: Vec<MovieRecord>,
    storage: Box<dyn TableStorage>,
}

impl MovieStore {
    /// Open the CSV table at `path`.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        Self::load(Box::new(CsvStorage::new(path)))
    }

    /// Read all records from `storage`. Fails when the table is unreadable,
    /// has an empty title or repeats a title.
    pub fn load(storage: Box<dyn TableStorage>) -> Result<Self> {
        let records = storage.read()?;

        for (i, record) in records.iter().enumerate() {
            if record.title.trim().is_empty() {
                return Err(CinebotError::Storage(format!(
                    "{}: record {} has an empty title",
                    storage.describe(),
                    i + 1
                )));
            }
            if records[..i].iter().any(|r| r.has_title(&record.title)) {
                return Err(CinebotError::Storage(format!(
                    "{}: duplicate title '{}'",
                    storage.describe(),
                    record.title
                )));
            }
        }

        info!(source = %storage.describe(), movies = records.len(), "movie store loaded");
        Ok(Self { records, storage })
    }

    /// All records in table order.
    pub fn records(&self) -> &[MovieRecord] {
        &self.records
    }

    /// All titles in table order.
    pub fn titles(&self) -> Vec<&str> {
        self.records.iter().map(|r| r.title.as_str()).collect()
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true when the table has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Case-insensitive exact title lookup.
    pub fn find_by_title(&self, title: &str) -> Option<&MovieRecord> {
        self.records.iter().find(|r| r.has_title(title))
    }

    /// Records whose genre contains `genre`, ignoring case.
    pub fn find_by_genre(&self, genre: &str) -> Vec<&MovieRecord> {
        let needle = genre.to_lowercase();
        self.records
            .iter()
            .filter(|r| r.genre.to_lowercase().contains(&needle))
            .collect()
    }

    /// Records whose director contains `director`, ignoring case.
    pub fn find_by_director(&self, director: &str) -> Vec<&MovieRecord> {
        let needle = director.to_lowercase();
        self.records
            .iter()
            .filter(|r| r.director.to_lowercase().contains(&needle))
            .collect()
    }

    /// Records released in `year`.
    pub fn find_by_year(&self, year: i32) -> Vec<&MovieRecord> {
        self.records
            .iter()
            .filter(|r| r.year == Some(year))
            .collect()
    }

    /// Set `attribute` of `title` to `value`, appending a new record when the
    /// title is unknown, then persist the whole table.
    ///
    /// A rejected value leaves the table untouched and writes nothing. When the
    /// write fails the in-memory change is reverted and the error returned.
    pub fn upsert(&mut self, title: &str, attribute: Attribute, value: &str) -> Result<UpsertOutcome> {
        let existing = self.records.iter().position(|r| r.has_title(title));

        let mut updated = match existing {
            Some(idx) => self.records[idx].clone(),
            None => MovieRecord::new(title),
        };
        if let Err(reason) = updated.set(attribute, value) {
            debug!(title, %attribute, %reason, "upsert rejected");
            return Ok(UpsertOutcome::InvalidValue(reason));
        }

        let (outcome, previous) = match existing {
            Some(idx) => (
                UpsertOutcome::Updated,
                Some(std::mem::replace(&mut self.records[idx], updated)),
            ),
            None => {
                self.records.push(updated);
                (UpsertOutcome::Added, None)
            }
        };

        if let Err(e) = self.storage.write(&self.records) {
            match (existing, previous) {
                (Some(idx), Some(prev)) => self.records[idx] = prev,
                _ => {
                    self.records.pop();
                }
            }
            return Err(e);
        }

        info!(title, %attribute, ?outcome, "movie store updated");
        Ok(outcome)
    }

    /// Human-readable summary of the store.
    pub fn summary(&self) -> String {
        let with_trivia = self
            .records
            .iter()
            .filter(|r| !r.trivia.trim().is_empty())
            .count();
        format!(
            "Movie store: {} movies ({} with trivia) at {}",
            self.len(),
            with_trivia,
            self.storage.describe()
        )
    }
}
