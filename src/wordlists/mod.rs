//! Word pools for the puzzle
//!
//! Embedded default pools, injected-data normalization and the registry
//! answering pool membership questions.

mod embedded;
pub mod pool;
pub mod registry;

pub use embedded::NATIVE_POOL;
pub use pool::{DefinitionMap, ForeignDictionary, MISSING_DEFINITION, WordPool};
pub use registry::PoolRegistry;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{WORD_LENGTHS, is_alphabetic_word};

    #[test]
    fn embedded_lists_cover_every_length() {
        let lengths: Vec<usize> = NATIVE_POOL.iter().map(|&(length, _)| length).collect();
        assert_eq!(lengths, WORD_LENGTHS.to_vec());
    }

    #[test]
    fn embedded_entries_are_uppercase_alphabetic() {
        for &(_, words) in NATIVE_POOL {
            for &word in words {
                assert!(is_alphabetic_word(word), "Word '{word}' is not alphabetic");
            }
        }
    }

    #[test]
    fn expected_counts() {
        let counts: Vec<usize> = NATIVE_POOL.iter().map(|&(_, words)| words.len()).collect();
        assert_eq!(counts, vec![25, 24, 20, 17]);
    }
}
