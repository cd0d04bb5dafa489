//! Guess feedback calculation and representation
//!
//! Each position of a guess gets a [`Verdict`]:
//! - Absent (letter not available in the target)
//! - Present (letter in the target, wrong position)
//! - Correct (letter in the correct position)
//!
//! Verdicts are ordered `Absent < Present < Correct`, which is the order used
//! when promoting on-screen keyboard keys.

use super::Word;
use rustc_hash::FxHashMap;

/// Outcome for a single letter of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Verdict {
    Absent,
    Present,
    Correct,
}

impl Verdict {
    #[must_use]
    pub const fn to_emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// Per-position verdicts for one submitted guess
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Feedback(Vec<Verdict>);

impl Feedback {
    /// Calculate the feedback when `guess` is played against `target`
    ///
    /// Handles duplicate letters: a letter never earns more `Present` +
    /// `Correct` marks than it occurs in the target, and exact matches are
    /// never shadowed by an earlier duplicate.
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches, tally the unmatched target letters
    /// 2. Second pass: mark `Present` while the tally for the letter lasts
    ///
    /// # Examples
    /// ```
    /// use slowko::core::{Feedback, Verdict, Word};
    ///
    /// let guess = Word::new("ARADI").unwrap();
    /// let target = Word::new("RADIA").unwrap();
    /// let feedback = Feedback::calculate(&guess, &target);
    ///
    /// assert!(feedback.verdicts().iter().all(|v| *v == Verdict::Present));
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, target: &Word) -> Self {
        debug_assert_eq!(guess.length(), target.length(), "words must be equal length");

        let mut result = vec![Verdict::Absent; guess.length()];
        let mut remaining: FxHashMap<char, u8> = FxHashMap::default();

        for (i, (&g, &t)) in guess.letters().iter().zip(target.letters()).enumerate() {
            if g == t {
                result[i] = Verdict::Correct;
            } else {
                *remaining.entry(t).or_insert(0) += 1;
            }
        }

        for (i, &g) in guess.letters().iter().enumerate() {
            if result[i] == Verdict::Correct {
                continue;
            }
            if let Some(count) = remaining.get_mut(&g)
                && *count > 0
            {
                result[i] = Verdict::Present;
                *count -= 1;
            }
        }

        Self(result)
    }

    #[inline]
    #[must_use]
    pub fn verdicts(&self) -> &[Verdict] {
        &self.0
    }

    /// Check if every letter is correct
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.0.iter().all(|&v| v == Verdict::Correct)
    }

    #[must_use]
    pub fn count(&self, verdict: Verdict) -> usize {
        self.0.iter().filter(|&&v| v == verdict).count()
    }

    /// Render as an emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|v| v.to_emoji()).collect()
    }
}

/// Convenience wrapper returning the plain verdict sequence
#[must_use]
pub fn evaluate(guess: &Word, target: &Word) -> Vec<Verdict> {
    Feedback::calculate(guess, target).0
}
