//! Dictionary sources used to accept words outside the pools
//!
//! Both sources are total: failures degrade to an "unavailable" answer
//! instead of an error, so callers can tell "could not check" apart from
//! "checked and rejected".

mod cache;
mod error;
mod lookup;
mod remote;
mod source;

pub use cache::{CacheState, LocalDictionary};
pub use error::DictionaryError;
pub use lookup::DictionaryLookup;
pub use remote::{HttpRemoteDictionary, RemoteDictionary};
pub use source::{DictionarySource, FileSource, HttpSource, source_for_location};

/// Answer from one validation source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DictionaryCheck {
    /// The source could be queried
    pub available: bool,
    /// The source knows the word
    pub valid: bool,
}

impl DictionaryCheck {
    pub const UNAVAILABLE: Self = Self {
        available: false,
        valid: false,
    };

    #[must_use]
    pub const fn checked(valid: bool) -> Self {
        Self {
            available: true,
            valid,
        }
    }

    /// Available and the word was found
    #[must_use]
    pub const fn accepts(self) -> bool {
        self.available && self.valid
    }
}
