//! Score a guess against a target outside of a round

use crate::core::{Feedback, Word, WordError};

/// Result of scoring one guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvaluationResult {
    pub guess: Word,
    pub target: Word,
    pub feedback: Feedback,
}

/// Score `guess` against `target`
///
/// # Errors
///
/// Returns an error if either word is invalid, or if the target's length
/// differs from the guess.
pub fn evaluate_pair(guess: &str, target: &str) -> Result<EvaluationResult, WordError> {
    let guess = Word::new(guess)?;
    let target = Word::with_length(target, guess.length())?;
    let feedback = Feedback::calculate(&guess, &target);

    Ok(EvaluationResult {
        guess,
        target,
        feedback,
    })
}
