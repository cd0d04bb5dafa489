//! Formatting utilities for terminal output

use crate::core::{POLISH_LETTERS, Verdict};

/// On-screen keyboard, main rows first and the Polish letters last
pub const KEYBOARD_ROWS: [&[char]; 4] = [
    &['Q', 'W', 'E', 'R', 'T', 'Y', 'U', 'I', 'O', 'P'],
    &['A', 'S', 'D', 'F', 'G', 'H', 'J', 'K', 'L'],
    &['Z', 'X', 'C', 'V', 'B', 'N', 'M'],
    &POLISH_LETTERS,
];

/// Placeholder for an empty board cell
pub const EMPTY_CELL: char = '_';

/// Format verdicts as an emoji string
#[must_use]
pub fn verdicts_to_emoji(verdicts: &[Verdict]) -> String {
    verdicts.iter().map(|verdict| verdict.to_emoji()).collect()
}

/// Letters of a board row, empty cells shown as `_`
#[must_use]
pub fn row_to_text(row: &[Option<char>]) -> String {
    row.iter().map(|cell| cell.unwrap_or(EMPTY_CELL)).collect()
}

/// Caret line pointing at `col` under a row printed with [`row_to_text`]
///
/// Cells are rendered as ` X ` (three columns each).
#[must_use]
pub fn cursor_marker(col: usize) -> String {
    format!("{} ^ ", "   ".repeat(col))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emoji_per_verdict() {
        let verdicts = [Verdict::Correct, Verdict::Present, Verdict::Absent];
        assert_eq!(verdicts_to_emoji(&verdicts), "🟩🟨⬜");
    }

    #[test]
    fn empty_cells_use_placeholder() {
        assert_eq!(row_to_text(&[Some('Ż'), None, Some('B'), None]), "Ż_B_");
    }

    #[test]
    fn cursor_marker_aligns_with_cells() {
        assert_eq!(cursor_marker(0), " ^ ");
        assert_eq!(cursor_marker(2), "       ^ ");
    }

    #[test]
    fn keyboard_covers_alphabet_once() {
        let keys: Vec<char> = KEYBOARD_ROWS.iter().flat_map(|row| row.iter().copied()).collect();
        let unique: std::collections::BTreeSet<char> = keys.iter().copied().collect();

        assert_eq!(keys.len(), unique.len());
        assert_eq!(keys.len(), 26 + POLISH_LETTERS.len());
        assert!(keys.iter().all(|&key| crate::core::is_letter(key)));
    }
}
