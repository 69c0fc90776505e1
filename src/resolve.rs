//! Read-only answers over the movie store.

use rand::seq::index;
use rand::Rng;

use crate::store::{Attribute, MovieRecord, MovieStore};

/// Multi-line report of every field of one movie.
pub fn movie_info(store: &MovieStore, title: &str) -> String {
    match store.find_by_title(title) {
        Some(movie) => format_info(movie),
        None => "Sorry, I couldn't find that movie.".to_string(),
    }
}

fn format_info(movie: &MovieRecord) -> String {
    format!(
        "Title: {}\nYear: {}\nDirector: {}\nCast: {}\nGenre: {}\nPlot: {}\nTrivia: {}",
        movie.title,
        movie.get(Attribute::Year),
        movie.director,
        movie.cast,
        movie.genre,
        movie.plot,
        movie.trivia
    )
}

/// Raw value of one attribute, or `None` when the title is unknown.
pub fn attribute(store: &MovieStore, title: &str, attribute: Attribute) -> Option<String> {
    store.find_by_title(title).map(|movie| movie.get(attribute))
}

/// Up to `count` distinct titles whose genre contains `genre`, in random
/// order. `exclude` drops one title (case-insensitive) from the candidates.
pub fn recommend_by_genre<R: Rng + ?Sized>(
    store: &MovieStore,
    genre: &str,
    count: usize,
    exclude: Option<&str>,
    rng: &mut R,
) -> Vec<String> {
    let excluded = exclude.map(str::to_lowercase);
    let candidates: Vec<&MovieRecord> = store
        .find_by_genre(genre)
        .into_iter()
        .filter(|m| excluded.as_deref() != Some(m.title.to_lowercase().as_str()))
        .collect();

    let amount = count.min(candidates.len());
    index::sample(rng, candidates.len(), amount)
        .into_iter()
        .map(|i| candidates[i].title.clone())
        .collect()
}

/// Titles to suggest after describing `title`. Prefers other movies sharing
/// its whole genre string, then other movies sharing any one of its
/// comma-separated genres. When no other movie qualifies, the whole-genre
/// match including `title` itself is returned, so a non-empty `genre` always
/// yields at least one title.
pub fn related_by_genre<R: Rng + ?Sized>(
    store: &MovieStore,
    title: &str,
    genre: &str,
    count: usize,
    rng: &mut R,
) -> Vec<String> {
    let picks = recommend_by_genre(store, genre, count, Some(title), rng);
    if !picks.is_empty() {
        return picks;
    }

    for single in genre.split(',').map(str::trim).filter(|g| !g.is_empty()) {
        let picks = recommend_by_genre(store, single, count, Some(title), rng);
        if !picks.is_empty() {
            return picks;
        }
    }

    recommend_by_genre(store, genre, count, None, rng)
}

/// Sentence listing every movie whose director contains `director`.
pub fn movies_by_director(store: &MovieStore, director: &str) -> String {
    let titles = join_titles(store.find_by_director(director));
    let name = title_case(director);
    if titles.is_empty() {
        format!("Sorry, I couldn't find any movies directed by {}.", name)
    } else {
        format!("Movies directed by {} include: {}", name, titles)
    }
}

/// Sentence listing every movie released in `year`. A year that is not an
/// `i32` matches nothing.
pub fn movies_by_year(store: &MovieStore, year: &str) -> String {
    let movies = year
        .parse::<i32>()
        .map(|y| store.find_by_year(y))
        .unwrap_or_default();
    let titles = join_titles(movies);
    if titles.is_empty() {
        format!("Sorry, I couldn't find any movies released in {}.", year)
    } else {
        format!("Movies released in {} include: {}", year, titles)
    }
}

fn join_titles(movies: Vec<&MovieRecord>) -> String {
    movies
        .iter()
        .map(|m| m.title.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Capitalize the first letter of every word and lowercase the rest.
/// A word starts after any non-alphabetic character, so `o'neil` becomes
/// `O'Neil`.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_word = false;
    for ch in text.chars() {
        if ch.is_alphabetic() {
            if in_word {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(ch);
            in_word = false;
        }
    }
    out
}
