//! Core domain types for the puzzle
//!
//! This module contains the fundamental domain types with no I/O.
//! All types here are pure, testable, and have clear invariants.

mod feedback;
mod mode;
mod word;

pub use feedback::{Feedback, Verdict, evaluate};
pub use mode::Mode;
pub use word::{
    DEFAULT_WORD_LENGTH, POLISH_LETTERS, WORD_LENGTHS, Word, WordError, is_alphabetic_word,
    is_letter, is_supported_length, normalize_text,
};
