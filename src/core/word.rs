//! Puzzle word representation
//!
//! A Word is a normalized uppercase string over the Polish puzzle alphabet
//! with a supported length (4-7 letters).

use rustc_hash::FxHashMap;
use serde::{Serialize, Serializer};
use std::fmt;
use thiserror::Error;

/// Word lengths a round can be played with
pub const WORD_LENGTHS: [usize; 4] = [4, 5, 6, 7];

/// Length used when none (or an unsupported one) is selected
pub const DEFAULT_WORD_LENGTH: usize = 5;

/// Polish diacritic letters accepted next to `A`-`Z`
pub const POLISH_LETTERS: [char; 9] = ['Ą', 'Ć', 'Ę', 'Ł', 'Ń', 'Ó', 'Ś', 'Ź', 'Ż'];

/// A normalized puzzle word
///
/// Stores the text together with its letters so positions can be compared
/// without re-decoding UTF-8.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word {
    text: String,
    letters: Vec<char>,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word must have 4 to 7 letters, got {0}")]
    UnsupportedLength(usize),
    #[error("Word must have exactly {expected} letters, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
    #[error("Word contains characters outside the Polish alphabet")]
    InvalidCharacters,
}

/// Check whether a single uppercase character belongs to the puzzle alphabet
#[inline]
#[must_use]
pub fn is_letter(ch: char) -> bool {
    ch.is_ascii_uppercase() || POLISH_LETTERS.contains(&ch)
}

/// Whole-word alphabet check: non-empty and every character is a letter
#[must_use]
pub fn is_alphabetic_word(text: &str) -> bool {
    !text.is_empty() && text.chars().all(is_letter)
}

#[inline]
#[must_use]
pub fn is_supported_length(length: usize) -> bool {
    WORD_LENGTHS.contains(&length)
}

/// Trim and case-fold raw input to the alphabet's uppercase form
#[must_use]
pub fn normalize_text(raw: &str) -> String {
    raw.trim().to_uppercase()
}

impl Word {
    /// Create a new Word from raw text
    ///
    /// The text is trimmed and uppercased before validation.
    ///
    /// # Errors
    /// Returns `WordError` if the length is not 4-7 letters or any character
    /// is outside the alphabet.
    ///
    /// # Examples
    /// ```
    /// use slowko::core::Word;
    ///
    /// let word = Word::new(" żaba ").unwrap();
    /// assert_eq!(word.text(), "ŻABA");
    ///
    /// assert!(Word::new("kot").is_err());
    /// assert!(Word::new("k0ty").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let text = normalize_text(text.as_ref());
        let letters: Vec<char> = text.chars().collect();

        if !is_supported_length(letters.len()) {
            return Err(WordError::UnsupportedLength(letters.len()));
        }

        if !letters.iter().copied().all(is_letter) {
            return Err(WordError::InvalidCharacters);
        }

        Ok(Self { text, letters })
    }

    /// Create a Word that must have exactly `expected` letters
    ///
    /// # Errors
    /// Returns `WordError::LengthMismatch` when the normalized length differs,
    /// otherwise the same errors as [`Word::new`].
    pub fn with_length(text: impl AsRef<str>, expected: usize) -> Result<Self, WordError> {
        let word = Self::new(text)?;
        if word.length() == expected {
            Ok(word)
        } else {
            Err(WordError::LengthMismatch {
                expected,
                actual: word.length(),
            })
        }
    }

    /// Stand-in secret made of one repeated letter, for rounds whose pool is
    /// empty. `length` must be a supported length.
    pub(crate) fn filler(length: usize) -> Self {
        debug_assert!(is_supported_length(length));
        Self {
            text: "A".repeat(length),
            letters: vec!['A'; length],
        }
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    /// Number of letters (not bytes)
    #[inline]
    #[must_use]
    pub fn length(&self) -> usize {
        self.letters.len()
    }

    /// Get the letter at a specific position
    ///
    /// # Panics
    /// Panics if position >= length
    #[inline]
    #[must_use]
    pub fn letter_at(&self, position: usize) -> char {
        self.letters[position]
    }

    /// Count occurrences of each letter
    #[must_use]
    pub fn letter_counts(&self) -> FxHashMap<char, u8> {
        let mut counts = FxHashMap::default();
        for &ch in &self.letters {
            *counts.entry(ch).or_insert(0) += 1;
        }
        counts
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl Serialize for Word {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.text)
    }
}
