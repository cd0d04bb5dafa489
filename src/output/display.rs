//! Colored terminal rendering of the game

use super::formatters::{EMPTY_CELL, KEYBOARD_ROWS, cursor_marker, verdicts_to_emoji};
use crate::core::{Verdict, Word};
use crate::game::{Definition, MAX_ATTEMPTS, RoundState, StatusLine};
use crate::validator::Validation;
use colored::{ColoredString, Colorize};

fn tile(letter: char, verdict: Option<Verdict>) -> ColoredString {
    let text = format!(" {letter} ");
    match verdict {
        Some(Verdict::Correct) => text.black().on_green().bold(),
        Some(Verdict::Present) => text.black().on_yellow().bold(),
        Some(Verdict::Absent) => text.white().on_bright_black(),
        None => text.bold(),
    }
}

/// Print all attempt rows, with a caret under the active cell
pub fn print_board(round: &RoundState) {
    println!();
    for row in 0..MAX_ATTEMPTS {
        let verdicts = round.evaluation(row).map(|feedback| feedback.verdicts());
        let line: String = round
            .row_letters(row)
            .iter()
            .enumerate()
            .map(|(col, cell)| {
                let verdict = verdicts.map(|verdicts| verdicts[col]);
                tile(cell.unwrap_or(EMPTY_CELL), verdict).to_string()
            })
            .collect();
        println!("  {line}");

        if row == round.row_index() && !round.is_over() {
            println!("  {}", cursor_marker(round.active_col()).cyan());
        }
    }
}

/// Print the keyboard colored by the best verdict seen per letter
pub fn print_keyboard(round: &RoundState) {
    println!();
    for row in KEYBOARD_ROWS {
        let line: String = row
            .iter()
            .map(|&key| tile(key, round.key_state(key)).to_string())
            .collect();
        println!("  {line}");
    }
}

pub fn print_status(status: &StatusLine) {
    if status.text.is_empty() {
        return;
    }
    if status.is_error {
        println!("\n{}", status.text.red().bold());
    } else {
        println!("\n{}", status.text.green());
    }
}

pub fn print_definition(definition: &Definition) {
    println!(
        "\n{} {}",
        format!("{}:", definition.word).bright_yellow().bold(),
        definition.text
    );
}

/// Print a one-shot validation decision
pub fn print_validation(word: &Word, validation: &Validation) {
    if validation.accepted {
        println!("{} {}", word.text().bright_white().bold(), "✓".green().bold());
    } else {
        println!(
            "{} {} {}",
            word.text().bright_white().bold(),
            "✗".red().bold(),
            validation.message
        );
    }
}

/// Print a guess with its verdicts, as tiles and as emoji
pub fn print_evaluation(guess: &Word, verdicts: &[Verdict]) {
    let tiles: String = guess
        .letters()
        .iter()
        .zip(verdicts)
        .map(|(&letter, &verdict)| tile(letter, Some(verdict)).to_string())
        .collect();
    println!("{tiles}  {}", verdicts_to_emoji(verdicts));
}
