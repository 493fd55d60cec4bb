//! Word repository
//!
//! The fixed dictionary every game draws its secret from and validates guesses
//! against. Immutable once built, so it can be shared freely between games.

use super::WORDS;
use crate::core::{WORD_LENGTH, Word};
use rand::Rng;
use rustc_hash::FxHashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

/// Errors raised while building a repository
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("word list contains no valid five-letter words")]
    Empty,
    #[error("failed to read word list {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Immutable dictionary of valid five-letter words
///
/// Never empty: every constructor rejects a list with no valid words.
#[derive(Debug, Clone)]
pub struct WordRepository {
    words: Vec<Word>,
    index: FxHashSet<[u8; WORD_LENGTH]>,
}

impl WordRepository {
    /// Build a repository from any list of strings
    ///
    /// Entries that are not valid five-letter words are skipped and duplicates
    /// are collapsed, keeping first-seen order.
    ///
    /// # Errors
    /// Returns [`RepositoryError::Empty`] if no valid word remains.
    pub fn new<I, S>(entries: I) -> Result<Self, RepositoryError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut words = Vec::new();
        let mut index = FxHashSet::default();
        let mut skipped = 0usize;

        for entry in entries {
            let trimmed = entry.as_ref().trim();
            if trimmed.is_empty() {
                continue;
            }

            match Word::new(trimmed) {
                Ok(word) => {
                    if index.insert(*word.chars()) {
                        words.push(word);
                    }
                }
                Err(_) => skipped += 1,
            }
        }

        if skipped > 0 {
            warn!(skipped, "skipped invalid word list entries");
        }

        if words.is_empty() {
            return Err(RepositoryError::Empty);
        }

        debug!(words = words.len(), "word repository ready");
        Ok(Self { words, index })
    }

    /// Repository over the dictionary compiled into the binary
    ///
    /// # Errors
    /// Only fails if the embedded list is empty, which the build forbids.
    ///
    /// # Examples
    /// ```
    /// use worddd::wordlists::{WORDS_COUNT, WordRepository};
    ///
    /// let repo = WordRepository::embedded().unwrap();
    /// assert_eq!(repo.len(), WORDS_COUNT);
    /// assert!(repo.contains("ALLOW"));
    /// ```
    pub fn embedded() -> Result<Self, RepositoryError> {
        Self::from_slice(WORDS)
    }

    /// # Errors
    /// Returns [`RepositoryError::Empty`] if the slice has no valid word.
    pub fn from_slice(slice: &[&str]) -> Result<Self, RepositoryError> {
        Self::new(slice.iter().copied())
    }

    /// Load a dictionary file with one word per line
    ///
    /// Blank lines and invalid entries are ignored.
    ///
    /// # Errors
    /// Returns an I/O error if the file cannot be read, or
    /// [`RepositoryError::Empty`] if it holds no valid word.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, RepositoryError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| RepositoryError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::new(content.lines())
    }

    /// Case-insensitive exact dictionary lookup
    ///
    /// Anything that is not a five-letter word is simply not contained.
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        Word::new(word).is_ok_and(|word| self.contains_word(&word))
    }

    #[must_use]
    pub fn contains_word(&self, word: &Word) -> bool {
        self.index.contains(word.chars())
    }

    /// Pick a secret uniformly at random
    pub fn pick_secret<R: Rng + ?Sized>(&self, rng: &mut R) -> &Word {
        let index = rng.random_range(0..self.words.len());
        &self.words[index]
    }

    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false for a constructed repository
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
