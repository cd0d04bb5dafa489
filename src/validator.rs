//! Guess acceptance
//!
//! A guess is accepted when it is a pool word for the current mode, or when
//! the local or remote dictionary knows it. Pool membership is checked
//! without any I/O; the two dictionaries are only consulted (concurrently)
//! for words outside the pool.

use crate::core::{Mode, Word};
use crate::dictionary::{DictionaryCheck, LocalDictionary, RemoteDictionary};
use crate::wordlists::PoolRegistry;
use std::sync::Arc;
use tracing::debug;

/// Result of validating one guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validation {
    pub accepted: bool,
    /// Player-facing reason, empty when accepted
    pub message: String,
}

impl Validation {
    #[must_use]
    pub fn accept() -> Self {
        Self {
            accepted: true,
            message: String::new(),
        }
    }

    #[must_use]
    pub fn reject(message: impl Into<String>) -> Self {
        Self {
            accepted: false,
            message: message.into(),
        }
    }
}

/// Rejection text when neither dictionary could be reached
#[must_use]
pub const fn no_connectivity_message(mode: Mode) -> &'static str {
    match mode {
        Mode::Native => {
            "Brak połączenia ze słownikiem online i lokalnym słownikiem. Wpisz hasło z puli gry."
        }
        Mode::Foreign => {
            "Brak połączenia ze słownikiem online i lokalnym słownikiem. Dla trybu obcych wpisz hasło z puli gry."
        }
    }
}

/// Rejection text when the word is unknown to every reachable source
#[must_use]
pub const fn not_found_message(mode: Mode) -> &'static str {
    match mode {
        Mode::Native => "Tego słowa nie ma w słowniku lokalnym/online ani w puli gry.",
        Mode::Foreign => "Tego słowa nie ma w słowniku lokalnym/online ani w puli wyrazów obcych.",
    }
}

/// Combine both dictionary answers into a decision
///
/// Local acceptance wins, then remote acceptance. When rejecting, the
/// "no connectivity" wording is used only if neither source was available.
/// The rules are the same for every mode.
#[must_use]
pub fn decide(mode: Mode, local: DictionaryCheck, remote: DictionaryCheck) -> Validation {
    if local.accepts() || remote.accepts() {
        return Validation::accept();
    }
    if !local.available && !remote.available {
        return Validation::reject(no_connectivity_message(mode));
    }
    Validation::reject(not_found_message(mode))
}

pub struct GuessValidator {
    registry: Arc<PoolRegistry>,
    local: Arc<LocalDictionary>,
    remote: Arc<dyn RemoteDictionary>,
}

impl GuessValidator {
    pub fn new(
        registry: Arc<PoolRegistry>,
        local: Arc<LocalDictionary>,
        remote: Arc<dyn RemoteDictionary>,
    ) -> Self {
        Self {
            registry,
            local,
            remote,
        }
    }

    #[must_use]
    pub fn registry(&self) -> &Arc<PoolRegistry> {
        &self.registry
    }

    #[must_use]
    pub fn local(&self) -> &LocalDictionary {
        &self.local
    }

    /// Decide whether `word` may be played in a round of `round_length`
    pub async fn validate(&self, word: &Word, mode: Mode, round_length: usize) -> Validation {
        if self.registry.contains(mode, round_length, word) {
            debug!(%word, %mode, "accepted from pool");
            return Validation::accept();
        }

        let (remote, local) = tokio::join!(
            self.remote.check_word(word.text()),
            self.local.check_word(word.text())
        );
        debug!(%word, ?local, ?remote, "dictionary answers");

        decide(mode, local, remote)
    }
}
