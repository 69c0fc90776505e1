//! CSV file backend for the movie table.
//!
//! The file has a header row naming exactly the [`COLUMNS`], one row per
//! movie, UTF-8, comma-separated with standard quoting. It is read whole at
//! load and rewritten whole on every write.

use std::path::{Path, PathBuf};

use tracing::debug;

use super::{MovieRecord, TableStorage, COLUMNS};
use crate::error::{CinebotError, Result};

/// Movie table stored as a CSV file.
#[derive(Debug, Clone)]
pub struct CsvStorage {
    path: PathBuf,
}

impl CsvStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TableStorage for CsvStorage {
    fn read(&self) -> Result<Vec<MovieRecord>> {
        if !self.path.exists() {
            return Err(CinebotError::NotFound(format!(
                "movie table {}",
                self.path.display()
            )));
        }

        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::Headers)
            .from_path(&self.path)
            .map_err(|e| {
                CinebotError::Storage(format!("Failed to open {}: {}", self.path.display(), e))
            })?;

        let headers: Vec<String> = reader.headers()?.iter().map(str::to_lowercase).collect();
        if headers != COLUMNS {
            return Err(CinebotError::Storage(format!(
                "{}: expected header '{}', found '{}'",
                self.path.display(),
                COLUMNS.join(","),
                headers.join(",")
            )));
        }

        let mut records = Vec::new();
        for row in reader.deserialize::<MovieRecord>() {
            let record = row.map_err(|e| {
                CinebotError::Storage(format!("{}: {}", self.path.display(), e))
            })?;
            records.push(record);
        }

        debug!(path = %self.path.display(), rows = records.len(), "read movie table");
        Ok(records)
    }

    fn write(&self, records: &[MovieRecord]) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| {
                CinebotError::Storage(format!(
                    "Failed to create data directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        let mut writer = csv::Writer::from_path(&self.path).map_err(|e| {
            CinebotError::Storage(format!("Failed to write {}: {}", self.path.display(), e))
        })?;
        // Serializing structs only emits a header when there is at least one row.
        if records.is_empty() {
            writer.write_record(COLUMNS)?;
        }
        for record in records {
            writer.serialize(record)?;
        }
        writer.flush()?;

        debug!(path = %self.path.display(), rows = records.len(), "wrote movie table");
        Ok(())
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const HEADER: &str = "title,year,director,cast,genre,plot,trivia\n";

    fn write_file(dir: &TempDir, content: &str) -> CsvStorage {
        let path = dir.path().join("movies.csv");
        std::fs::write(&path, content).unwrap();
        CsvStorage::new(path)
    }

    #[test]
    fn test_read_quoted_fields() {
        let dir = TempDir::new().unwrap();
        let storage = write_file(
            &dir,
            &format!(
                "{}Inception,2010,Christopher Nolan,\"Leonardo DiCaprio, Elliot Page\",\"Action, Sci-Fi\",\"Dreams, within dreams\",\n",
                HEADER
            ),
        );

        let records = storage.read().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].title, "Inception");
        assert_eq!(records[0].year, Some(2010));
        assert_eq!(records[0].cast, "Leonardo DiCaprio, Elliot Page");
        assert_eq!(records[0].genre, "Action, Sci-Fi");
        assert!(records[0].trivia.is_empty());
    }

    #[test]
    fn test_read_empty_year() {
        let dir = TempDir::new().unwrap();
        let storage = write_file(&dir, &format!("{}Heat,,,,,,\n", HEADER));

        let records = storage.read().unwrap();
        assert_eq!(records[0].year, None);
    }

    #[test]
    fn test_read_missing_file() {
        let dir = TempDir::new().unwrap();
        let storage = CsvStorage::new(dir.path().join("nope.csv"));
        assert!(matches!(storage.read(), Err(CinebotError::NotFound(_))));
    }

    #[test]
    fn test_read_rejects_wrong_header() {
        let dir = TempDir::new().unwrap();
        let storage = write_file(&dir, "name,year\nHeat,1995\n");
        let err = storage.read().unwrap_err();
        assert!(err.to_string().contains("expected header"));
    }

    #[test]
    fn test_read_rejects_bad_year() {
        let dir = TempDir::new().unwrap();
        let storage = write_file(&dir, &format!("{}Heat,soon,,,,,\n", HEADER));
        assert!(matches!(storage.read(), Err(CinebotError::Storage(_))));
    }

    #[test]
    fn test_write_then_read() {
        let dir = TempDir::new().unwrap();
        let storage = CsvStorage::new(dir.path().join("nested").join("movies.csv"));
        let movie = MovieRecord {
            title: "Pulp Fiction".to_string(),
            year: Some(1994),
            director: "Quentin Tarantino".to_string(),
            cast: "John Travolta, Uma Thurman".to_string(),
            genre: "Crime, Drama".to_string(),
            plot: "Intertwined \"tales\" of crime".to_string(),
            trivia: String::new(),
        };
        storage.write(&[movie.clone()]).unwrap();

        assert_eq!(storage.read().unwrap(), vec![movie]);
    }

    #[test]
    fn test_write_then_read_keeps_surrounding_whitespace() {
        let dir = TempDir::new().unwrap();
        let storage = CsvStorage::new(dir.path().join("movies.csv"));
        let mut movie = MovieRecord::new("Heat");
        movie.trivia = "  indented quote ".to_string();
        storage.write(&[movie.clone()]).unwrap();

        assert_eq!(storage.read().unwrap()[0].trivia, "  indented quote ");
    }

    #[test]
    fn test_write_empty_table_keeps_header() {
        let dir = TempDir::new().unwrap();
        let storage = CsvStorage::new(dir.path().join("movies.csv"));
        storage.write(&[]).unwrap();

        let content = std::fs::read_to_string(storage.path()).unwrap();
        assert_eq!(content, HEADER);
        assert!(storage.read().unwrap().is_empty());
    }
}
