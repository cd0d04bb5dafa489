//! Command implementations

pub mod check;
pub mod evaluate;
pub mod play;

pub use check::check_word;
pub use evaluate::{EvaluationResult, evaluate_pair};
pub use play::{Input, parse_input, run_play};
