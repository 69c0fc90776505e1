//! Text normalization for incoming chat messages.
//!
//! Turns a raw message into lowercase alphanumeric tokens with English
//! stop-words removed. The router matches keywords like `plot`, `released` or
//! `films` against these tokens.

use std::collections::HashSet;

use once_cell::sync::Lazy;

/// English stop-words (the NLTK list).
const STOP_WORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're", "you've",
    "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he", "him", "his", "himself",
    "she", "she's", "her", "hers", "herself", "it", "it's", "its", "itself", "they", "them",
    "their", "theirs", "themselves", "what", "which", "who", "whom", "this", "that", "that'll",
    "these", "those", "am", "is", "are", "was", "were", "be", "been", "being", "have", "has",
    "had", "having", "do", "does", "did", "doing", "a", "an", "the", "and", "but", "if", "or",
    "because", "as", "until", "while", "of", "at", "by", "for", "with", "about", "against",
    "between", "into", "through", "during", "before", "after", "above", "below", "to", "from",
    "up", "down", "in", "out", "on", "off", "over", "under", "again", "further", "then", "once",
    "here", "there", "when", "where", "why", "how", "all", "any", "both", "each", "few", "more",
    "most", "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than",
    "too", "very", "s", "t", "can", "will", "just", "don", "don't", "should", "should've", "now",
    "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't", "didn",
    "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn", "hasn't", "haven", "haven't", "isn",
    "isn't", "ma", "mightn", "mightn't", "mustn", "mustn't", "needn", "needn't", "shan",
    "shan't", "shouldn", "shouldn't", "wasn", "wasn't", "weren", "weren't", "won", "won't",
    "wouldn", "wouldn't",
];

static STOP_WORD_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| STOP_WORDS.iter().copied().collect());

/// Returns true if `word` (already lowercase) is an English stop-word.
pub fn is_stop_word(word: &str) -> bool {
    STOP_WORD_SET.contains(word)
}

/// Split `text` into lowercase alphanumeric tokens, dropping punctuation-only
/// pieces and stop-words.
///
/// Apostrophes split a word (`Nolan's` becomes `nolan` + `s`), and surrounding
/// punctuation is trimmed (`1999.` becomes `1999`). Pieces that still contain
/// non-alphanumeric characters, such as `sci-fi`, are dropped.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split_whitespace()
        .flat_map(|piece| piece.split(['\'', '\u{2019}']))
        .map(|piece| piece.trim_matches(|c: char| !c.is_alphanumeric()))
        .filter(|piece| !piece.is_empty() && piece.chars().all(char::is_alphanumeric))
        .map(str::to_lowercase)
        .filter(|token| !is_stop_word(token))
        .collect()
}

/// Returns true if the token is made of ASCII digits only.
pub fn is_numeric(token: &str) -> bool {
    !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_lowercases_and_drops_stop_words() {
        let tokens = tokenize("What is the PLOT of The Matrix?");
        assert_eq!(tokens, vec!["plot", "matrix"]);
    }

    #[test]
    fn test_tokenize_strips_punctuation() {
        let tokens = tokenize("Which films were released in 1999 ?!");
        assert_eq!(tokens, vec!["films", "released", "1999"]);
    }

    #[test]
    fn test_tokenize_splits_apostrophes() {
        assert_eq!(tokenize("Nolan's films"), vec!["nolan", "films"]);
        assert_eq!(tokenize("don't"), Vec::<String>::new());
    }

    #[test]
    fn test_tokenize_drops_hyphenated_words() {
        assert_eq!(tokenize("a sci-fi movie"), vec!["movie"]);
    }

    #[test]
    fn test_tokenize_empty() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("  ?? ... ").is_empty());
    }

    #[test]
    fn test_tokenize_is_deterministic() {
        let text = "Tell me a fun fact about Inception";
        assert_eq!(tokenize(text), tokenize(text));
    }

    #[test]
    fn test_stop_words() {
        assert!(is_stop_word("the"));
        assert!(is_stop_word("who"));
        assert!(!is_stop_word("movies"));
        assert!(!is_stop_word("released"));
    }

    #[test]
    fn test_is_numeric() {
        assert!(is_numeric("2010"));
        assert!(!is_numeric("20x0"));
        assert!(!is_numeric(""));
        assert!(!is_numeric("½"));
    }
}
