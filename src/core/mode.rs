//! Game modes
//!
//! Each mode plays from its own word pool. Foreign mode additionally reveals
//! the definition of the secret word when the round ends.

use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    /// Native Polish words
    #[default]
    Native,
    /// Foreign and loan words with definitions
    Foreign,
}

impl Mode {
    /// Parse a mode from its command-line name
    ///
    /// Supported names: "native" (also "normal"), "foreign"
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "native" | "normal" => Some(Self::Native),
            "foreign" => Some(Self::Foreign),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Native => "native",
            Self::Foreign => "foreign",
        }
    }

    /// Player-facing label used in status lines
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Native => "polskie słowa",
            Self::Foreign => "wyrazy obce",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| format!("Unknown mode: {s} (expected native or foreign)"))
    }
}
