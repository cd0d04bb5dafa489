//! Terminal output formatting
//!
//! Board, keyboard and message rendering for the CLI.

pub mod display;
pub mod formatters;

pub use display::{
    print_board, print_definition, print_evaluation, print_keyboard, print_status,
    print_validation,
};
