//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.

use super::{DEFAULT_ROOT_WORD, DICTIONARY, START_WORDS, StartWords};
use crate::core::{DEFAULT_LOCALE, WordListDictionary, normalize};
use crate::error::{GameError, Result};
use std::fs;
use std::io;
use std::path::Path;
use tracing::{info, warn};

/// Load words from a newline-delimited file
///
/// Entries are trimmed and lowercased; blank lines are skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use word_scramble::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/start.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(words_from_lines(&content))
}

/// Split text into normalized, non-blank words
#[must_use]
pub fn words_from_lines(content: &str) -> Vec<String> {
    content
        .lines()
        .map(normalize)
        .filter(|word| !word.is_empty())
        .collect()
}

/// Convert embedded string slice to owned words
///
/// # Examples
/// ```
/// use word_scramble::wordlists::loader::words_from_slice;
/// use word_scramble::wordlists::START_WORDS;
///
/// let words = words_from_slice(START_WORDS);
/// assert_eq!(words.len(), START_WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<String> {
    slice
        .iter()
        .map(|word| normalize(word))
        .filter(|word| !word.is_empty())
        .collect()
}

/// Load the root words a round can start from
///
/// # Errors
///
/// Returns `GameError::WordList` if the file is missing or unreadable. An
/// existing but empty file is not an error.
pub fn load_start_words<P: AsRef<Path>>(path: P) -> Result<StartWords> {
    let path = path.as_ref();
    let words = load_from_file(path).map_err(|source| GameError::WordList {
        path: path.to_path_buf(),
        source,
    })?;

    info!(path = %path.display(), count = words.len(), "loaded start words");
    let start_words = StartWords::new(words);
    if start_words.is_empty() {
        warn!(
            path = %path.display(),
            "start word list is empty, every round uses '{DEFAULT_ROOT_WORD}'"
        );
    }
    Ok(start_words)
}

/// Load a dictionary word list for `locale`
///
/// # Errors
///
/// Returns `GameError::WordList` if the file is missing or unreadable.
pub fn load_dictionary<P: AsRef<Path>>(path: P, locale: &str) -> Result<WordListDictionary> {
    let path = path.as_ref();
    let words = load_from_file(path).map_err(|source| GameError::WordList {
        path: path.to_path_buf(),
        source,
    })?;

    info!(path = %path.display(), count = words.len(), locale, "loaded dictionary");
    Ok(WordListDictionary::new(words, locale))
}

/// Start words compiled into the binary
#[must_use]
pub fn embedded_start_words() -> StartWords {
    StartWords::new(words_from_slice(START_WORDS))
}

/// English dictionary compiled into the binary
///
/// Always tagged `DEFAULT_LOCALE`, so lookups for other languages miss.
#[must_use]
pub fn embedded_dictionary() -> WordListDictionary {
    WordListDictionary::new(DICTIONARY, DEFAULT_LOCALE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Dictionary;
    use crate::log_capture::capture_logs;
    use std::io::Write;
    use tracing::Level;
    use tempfile::NamedTempFile;

    fn temp_list(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn words_from_slice_normalizes() {
        let input = &["Silk", " worm ", "milk"];
        let words = words_from_slice(input);

        assert_eq!(words, vec!["silk", "worm", "milk"]);
    }

    #[test]
    fn words_from_slice_skips_blank() {
        let input = &["silk", "", "   ", "worm"];
        let words = words_from_slice(input);
        assert_eq!(words, vec!["silk", "worm"]);
    }

    #[test]
    fn words_from_lines_handles_crlf_and_trailing_newline() {
        let words = words_from_lines("silkworm\r\nsandwich\n\npainting\n");
        assert_eq!(words, vec!["silkworm", "sandwich", "painting"]);
    }

    #[test]
    fn load_start_words_from_file() {
        let file = temp_list("silkworm\nsandwich\n");
        let start_words = load_start_words(file.path()).unwrap();

        assert_eq!(start_words.len(), 2);
        assert_eq!(start_words.words(), &["silkworm", "sandwich"]);
    }

    #[test]
    fn load_start_words_empty_file_is_ok() {
        let file = temp_list("\n\n");
        let start_words = load_start_words(file.path()).unwrap();
        assert!(start_words.is_empty());
    }

    #[test]
    fn empty_start_words_file_warns_once() {
        let file = temp_list("\n\n");
        let logs = capture_logs(Level::WARN, || {
            load_start_words(file.path()).unwrap();
        });

        assert_eq!(logs.matches("start word list is empty").count(), 1);
    }

    #[test]
    fn load_start_words_missing_file_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("start.txt");

        let err = load_start_words(&missing).unwrap_err();
        match err {
            GameError::WordList { path, .. } => assert_eq!(path, missing),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn load_dictionary_from_file() {
        let file = temp_list("Silk\nworm\n");
        let dictionary = load_dictionary(file.path(), "en").unwrap();

        assert_eq!(dictionary.len(), 2);
        assert!(dictionary.is_known_word("silk", "en"));
        assert_eq!(dictionary.locale(), "en");
    }

    #[test]
    fn load_dictionary_missing_file_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_dictionary(dir.path().join("words.txt"), "en").is_err());
    }

    #[test]
    fn embedded_lists_load() {
        assert_eq!(embedded_start_words().len(), START_WORDS.len());
        assert!(embedded_dictionary().is_known_word("silk", "en"));
    }

    #[test]
    fn embedded_dictionary_is_english_only() {
        let dictionary = embedded_dictionary();

        assert_eq!(dictionary.locale(), DEFAULT_LOCALE);
        assert!(dictionary.is_known_word("silk", "en-US"));
        assert!(!dictionary.is_known_word("silk", "fr"));
    }
}
