//! One-shot guess validation

use crate::core::{Mode, Word, WordError};
use crate::validator::{GuessValidator, Validation};

/// Run the full validator on one word, as a round of the word's own length
///
/// # Errors
///
/// Returns an error if the word has an unsupported length or characters
/// outside the alphabet.
pub async fn check_word(
    validator: &GuessValidator,
    raw: &str,
    mode: Mode,
) -> Result<(Word, Validation), WordError> {
    let word = Word::new(raw)?;
    let validation = validator.validate(&word, mode, word.length()).await;
    Ok((word, validation))
}
