//! Słówko
//!
//! A Polish word-guessing game with 4-7 letter words, a native and a foreign
//! word mode, and guess validation against curated pools plus local and
//! remote dictionaries.
//!
//! # Quick Start
//!
//! ```rust
//! use slowko::core::{Verdict, Word, evaluate};
//!
//! let guess = Word::new("aradi").unwrap();
//! let target = Word::new("radia").unwrap();
//!
//! let verdicts = evaluate(&guess, &target);
//! assert!(verdicts.iter().all(|&v| v == Verdict::Present));
//! ```

// Core domain types
pub mod core;

// Word pools and foreign definitions
pub mod wordlists;

// Local and remote dictionaries
pub mod dictionary;

// Guess acceptance
pub mod validator;

// Rounds and the game session
pub mod game;

// Runtime configuration
pub mod config;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
