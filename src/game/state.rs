//! Round state machine
//!
//! One `RoundState` lives per round. Letter editing is synchronous; a
//! submission is split in two halves around the (asynchronous) validation:
//! [`RoundState::begin_submission`] checks the row and takes the lock,
//! [`RoundState::complete_submission`] records the outcome and releases it.
//! While locked, every editing operation is a no-op.

use crate::core::{Feedback, Mode, Verdict, Word, is_letter};
use crate::validator::Validation;
use rustc_hash::FxHashMap;

/// Attempts per round, independent of word length
pub const MAX_ATTEMPTS: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundStatus {
    InProgress,
    Won,
    Lost,
}

/// Why a row could not be submitted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitRejection {
    /// At least one cell of the row is empty
    Incomplete,
    /// The joined letters are not a valid word of the round's length
    Malformed,
}

impl SubmitRejection {
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Incomplete => "Wpisz pełne słowo.",
            Self::Malformed => "Niepoprawny zapis słowa.",
        }
    }
}

/// Result of [`RoundState::begin_submission`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitStart {
    /// Round over or a submission already in flight
    Ignored,
    Rejected(SubmitRejection),
    /// Row locked; validate this word, then call `complete_submission`
    Ready(Word),
}

/// Result of [`RoundState::complete_submission`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validator refused the word; the row was cleared, attempt not used
    Rejected(String),
    /// Accepted, moved on to the next row
    Continue,
    Won,
    Lost,
}

#[derive(Debug, Clone)]
pub struct RoundState {
    word_length: usize,
    target: Word,
    mode: Mode,
    row: usize,
    active_col: usize,
    board: Vec<Vec<Option<char>>>,
    evaluations: Vec<Option<Feedback>>,
    keyboard: FxHashMap<char, Verdict>,
    status: RoundStatus,
    locked: bool,
}

impl RoundState {
    /// Start a round; the word length is taken from the target
    #[must_use]
    pub fn new(target: Word, mode: Mode) -> Self {
        let word_length = target.length();
        Self {
            word_length,
            target,
            mode,
            row: 0,
            active_col: 0,
            board: vec![vec![None; word_length]; MAX_ATTEMPTS],
            evaluations: vec![None; MAX_ATTEMPTS],
            keyboard: FxHashMap::default(),
            status: RoundStatus::InProgress,
            locked: false,
        }
    }

    #[must_use]
    pub fn word_length(&self) -> usize {
        self.word_length
    }

    #[must_use]
    pub fn target(&self) -> &Word {
        &self.target
    }

    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Index of the attempt being edited (0-based)
    #[must_use]
    pub fn row_index(&self) -> usize {
        self.row
    }

    #[must_use]
    pub fn active_col(&self) -> usize {
        self.active_col
    }

    #[must_use]
    pub fn row_letters(&self, row: usize) -> &[Option<char>] {
        &self.board[row]
    }

    #[must_use]
    pub fn evaluation(&self, row: usize) -> Option<&Feedback> {
        self.evaluations.get(row).and_then(Option::as_ref)
    }

    /// Best verdict seen so far for a letter
    #[must_use]
    pub fn key_state(&self, letter: char) -> Option<Verdict> {
        self.keyboard.get(&letter).copied()
    }

    #[must_use]
    pub fn status(&self) -> RoundStatus {
        self.status
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.status != RoundStatus::InProgress
    }

    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    fn accepts_input(&self) -> bool {
        !self.is_over() && !self.locked
    }

    fn current_row(&self) -> &[Option<char>] {
        &self.board[self.row]
    }

    /// Write a letter at the cursor and move to the next empty cell
    ///
    /// Lowercase input is uppercased; anything outside the alphabet is
    /// ignored. Returns whether the board changed.
    pub fn input(&mut self, letter: char) -> bool {
        if !self.accepts_input() {
            return false;
        }
        let mut upper = letter.to_uppercase();
        let (Some(letter), None) = (upper.next(), upper.next()) else {
            return false;
        };
        if !is_letter(letter) {
            return false;
        }

        let col = self.active_col;
        self.board[self.row][col] = Some(letter);
        self.active_col = self.next_empty_col(col + 1);
        true
    }

    /// Clear the cell under the cursor, or the nearest filled cell before it
    pub fn backspace(&mut self) -> bool {
        if !self.accepts_input() {
            return false;
        }

        let col = self.active_col;
        if self.board[self.row][col].is_some() {
            self.board[self.row][col] = None;
            return true;
        }

        match self.previous_filled_col(col) {
            Some(previous) => {
                self.board[self.row][previous] = None;
                self.active_col = previous;
                true
            }
            None => false,
        }
    }

    /// Move the cursor by `delta`, clamped to the row
    pub fn move_cursor(&mut self, delta: isize) -> bool {
        if !self.accepts_input() {
            return false;
        }
        let last = self.word_length as isize - 1;
        let next = (self.active_col as isize)
            .saturating_add(delta)
            .clamp(0, last) as usize;
        if next == self.active_col {
            return false;
        }
        self.active_col = next;
        true
    }

    /// Put the cursor on a cell of the current row
    pub fn select_column(&mut self, row: usize, col: usize) -> bool {
        if !self.accepts_input() || row != self.row || col >= self.word_length {
            return false;
        }
        self.active_col = col;
        true
    }

    /// First empty column at or after `from`, wrapping to the start of the
    /// row; the cursor stays put when the row is full
    fn next_empty_col(&self, from: usize) -> usize {
        let row = self.current_row();
        (from..self.word_length)
            .chain(0..self.word_length)
            .find(|&col| row[col].is_none())
            .unwrap_or(self.active_col)
    }

    /// Nearest filled column before `from`, wrapping to the end of the row
    fn previous_filled_col(&self, from: usize) -> Option<usize> {
        let row = self.current_row();
        (0..from)
            .rev()
            .chain((0..self.word_length).rev())
            .find(|&col| row[col].is_some())
    }

    /// Check the current row and lock the round for validation
    pub fn begin_submission(&mut self) -> SubmitStart {
        if !self.accepts_input() {
            return SubmitStart::Ignored;
        }

        let row = self.current_row();
        if row.iter().any(Option::is_none) {
            return SubmitStart::Rejected(SubmitRejection::Incomplete);
        }

        let joined: String = row.iter().flatten().collect();
        let Ok(guess) = Word::with_length(&joined, self.word_length) else {
            return SubmitStart::Rejected(SubmitRejection::Malformed);
        };

        self.locked = true;
        SubmitStart::Ready(guess)
    }

    /// Record the validator's answer for the word returned by
    /// `begin_submission` and release the lock
    pub fn complete_submission(&mut self, guess: &Word, validation: &Validation) -> SubmitOutcome {
        debug_assert!(self.locked, "complete_submission without begin_submission");
        self.locked = false;

        if !validation.accepted {
            self.clear_current_row();
            return SubmitOutcome::Rejected(validation.message.clone());
        }

        let feedback = Feedback::calculate(guess, &self.target);
        for (&letter, &verdict) in guess.letters().iter().zip(feedback.verdicts()) {
            self.promote_key(letter, verdict);
        }
        self.evaluations[self.row] = Some(feedback);

        if *guess == self.target {
            self.status = RoundStatus::Won;
            return SubmitOutcome::Won;
        }
        if self.row == MAX_ATTEMPTS - 1 {
            self.status = RoundStatus::Lost;
            return SubmitOutcome::Lost;
        }

        self.row += 1;
        self.active_col = 0;
        SubmitOutcome::Continue
    }

    fn clear_current_row(&mut self) {
        self.board[self.row].fill(None);
        self.active_col = 0;
    }

    /// Keyboard states only move up: absent → present → correct
    fn promote_key(&mut self, letter: char, verdict: Verdict) {
        let entry = self.keyboard.entry(letter).or_insert(verdict);
        if verdict > *entry {
            *entry = verdict;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn round(target: &str) -> RoundState {
        RoundState::new(Word::new(target).unwrap(), Mode::Native)
    }

    fn type_word(state: &mut RoundState, text: &str) {
        for letter in text.chars() {
            state.input(letter);
        }
    }

    /// Run a full submission with a fixed validator answer
    fn submit(state: &mut RoundState, validation: &Validation) -> Option<SubmitOutcome> {
        match state.begin_submission() {
            SubmitStart::Ready(guess) => {
                assert!(state.is_locked());
                Some(state.complete_submission(&guess, validation))
            }
            _ => None,
        }
    }

    fn letters(state: &RoundState, row: usize) -> String {
        state
            .row_letters(row)
            .iter()
            .map(|cell| cell.unwrap_or('_'))
            .collect()
    }

    #[test]
    fn new_round_is_empty() {
        let state = round("RADIA");
        assert_eq!(state.word_length(), 5);
        assert_eq!(state.row_index(), 0);
        assert_eq!(state.active_col(), 0);
        assert_eq!(state.status(), RoundStatus::InProgress);
        assert!((0..MAX_ATTEMPTS).all(|row| state.evaluation(row).is_none()));
    }

    #[test]
    fn input_uppercases_and_rejects_non_letters() {
        let mut state = round("ŁĄKA");
        assert!(state.input('ł'));
        assert!(!state.input('1'));
        assert!(!state.input('ß'));
        assert!(!state.input('é'));
        assert_eq!(letters(&state, 0), "Ł___");
        assert_eq!(state.active_col(), 1);
    }

    #[test]
    fn input_on_full_row_keeps_cursor() {
        let mut state = round("WODA");
        type_word(&mut state, "WODA");
        assert_eq!(state.active_col(), 3);

        // Overwrites in place; nothing empty to move to
        state.input('Y');
        assert_eq!(letters(&state, 0), "WODY");
        assert_eq!(state.active_col(), 3);
    }

    #[test]
    fn cursor_wrap_search() {
        let mut state = round("RADIA");
        // Build [X,_,Y,_,_] with the cursor on column 4
        state.input('X');
        state.select_column(0, 2);
        state.input('Y');
        state.select_column(0, 4);
        assert_eq!(letters(&state, 0), "X_Y__");

        // Writes column 4, wraps to the first empty column
        state.input('Z');
        assert_eq!(letters(&state, 0), "X_Y_Z");
        assert_eq!(state.active_col(), 1);

        // Column 1 is empty: clear the nearest filled column before it
        state.backspace();
        assert_eq!(letters(&state, 0), "__Y_Z");
        assert_eq!(state.active_col(), 0);

        // Nothing before column 0: wrap to the end and search backwards
        state.backspace();
        assert_eq!(letters(&state, 0), "__Y__");
        assert_eq!(state.active_col(), 4);
    }

    #[test]
    fn backspace_clears_in_place_when_filled() {
        let mut state = round("RADIA");
        type_word(&mut state, "RA");
        state.move_cursor(-1);
        assert!(state.backspace());
        assert_eq!(letters(&state, 0), "R____");
        assert_eq!(state.active_col(), 1);
    }

    #[test]
    fn backspace_on_empty_row_is_noop() {
        let mut state = round("RADIA");
        assert!(!state.backspace());
        assert_eq!(state.active_col(), 0);
    }

    #[test]
    fn move_cursor_clamps() {
        let mut state = round("WODA");
        assert!(!state.move_cursor(-1));
        assert!(state.move_cursor(10));
        assert_eq!(state.active_col(), 3);
        assert!(state.move_cursor(-2));
        assert_eq!(state.active_col(), 1);
    }

    #[test]
    fn move_cursor_saturates_extreme_deltas() {
        let mut state = round("WODA");
        assert!(state.move_cursor(2));
        assert!(state.move_cursor(isize::MAX));
        assert_eq!(state.active_col(), 3);
        assert!(state.move_cursor(isize::MIN));
        assert_eq!(state.active_col(), 0);
        assert!(!state.move_cursor(isize::MIN));
    }

    #[test]
    fn select_column_only_on_current_row() {
        let mut state = round("WODA");
        assert!(!state.select_column(1, 2));
        assert!(!state.select_column(0, 4));
        assert!(state.select_column(0, 2));
        assert_eq!(state.active_col(), 2);
    }

    #[test]
    fn incomplete_row_does_not_consume_attempt() {
        let mut state = round("RADIA");
        type_word(&mut state, "RAD");
        assert_eq!(
            state.begin_submission(),
            SubmitStart::Rejected(SubmitRejection::Incomplete)
        );
        assert_eq!(state.row_index(), 0);
        assert!(!state.is_locked());
        assert_eq!(letters(&state, 0), "RAD__");
    }

    #[test]
    fn rejected_word_clears_row_without_consuming_attempt() {
        let mut state = round("RADIA");
        type_word(&mut state, "QQQQQ");
        let outcome = submit(&mut state, &Validation::reject("nie ma"));

        assert_eq!(outcome, Some(SubmitOutcome::Rejected("nie ma".to_string())));
        assert_eq!(state.row_index(), 0);
        assert_eq!(state.active_col(), 0);
        assert_eq!(letters(&state, 0), "_____");
        assert!(!state.is_locked());
        assert!(state.evaluation(0).is_none());
    }

    #[test]
    fn accepted_word_advances_row() {
        let mut state = round("RADIA");
        type_word(&mut state, "ARADI");
        let outcome = submit(&mut state, &Validation::accept());

        assert_eq!(outcome, Some(SubmitOutcome::Continue));
        assert_eq!(state.row_index(), 1);
        assert_eq!(state.active_col(), 0);
        assert_eq!(state.evaluation(0).unwrap().count(Verdict::Present), 5);
    }

    #[test]
    fn locked_round_ignores_input() {
        let mut state = round("WODA");
        type_word(&mut state, "WODA");
        let SubmitStart::Ready(guess) = state.begin_submission() else {
            panic!("row should be submittable");
        };

        assert!(!state.backspace());
        assert!(!state.input('X'));
        assert!(!state.move_cursor(-1));
        assert_eq!(state.begin_submission(), SubmitStart::Ignored);

        assert_eq!(
            state.complete_submission(&guess, &Validation::accept()),
            SubmitOutcome::Won
        );
    }

    #[test]
    fn winning_on_last_attempt_is_won() {
        let mut state = round("WODA");
        for _ in 0..MAX_ATTEMPTS - 1 {
            type_word(&mut state, "RYBY");
            assert_eq!(
                submit(&mut state, &Validation::accept()),
                Some(SubmitOutcome::Continue)
            );
        }
        assert_eq!(state.row_index(), MAX_ATTEMPTS - 1);

        type_word(&mut state, "WODA");
        assert_eq!(
            submit(&mut state, &Validation::accept()),
            Some(SubmitOutcome::Won)
        );
        assert_eq!(state.status(), RoundStatus::Won);
    }

    #[test]
    fn exhausting_attempts_is_lost() {
        let mut state = round("WODA");
        for attempt in 0..MAX_ATTEMPTS {
            type_word(&mut state, "RYBY");
            let expected = if attempt == MAX_ATTEMPTS - 1 {
                SubmitOutcome::Lost
            } else {
                SubmitOutcome::Continue
            };
            assert_eq!(submit(&mut state, &Validation::accept()), Some(expected));
        }
        assert!(state.is_over());

        // Finished rounds ignore everything
        assert!(!state.input('A'));
        assert_eq!(state.begin_submission(), SubmitStart::Ignored);
    }

    #[test]
    fn keyboard_promotion_is_monotonic() {
        let mut state = round("RADIA");

        // R correct
        type_word(&mut state, "RYBKA");
        submit(&mut state, &Validation::accept());
        assert_eq!(state.key_state('R'), Some(Verdict::Correct));
        assert_eq!(state.key_state('Y'), Some(Verdict::Absent));

        // R only present here, must stay correct
        type_word(&mut state, "ARBUZ");
        submit(&mut state, &Validation::accept());
        assert_eq!(state.key_state('R'), Some(Verdict::Correct));

        // A: present in ARBUZ, correct at the end of RYBKA
        assert_eq!(state.key_state('A'), Some(Verdict::Correct));
        assert_eq!(state.key_state('Q'), None);
    }

    #[test]
    fn keyboard_promotes_present_to_correct() {
        let mut state = round("RADIA");
        type_word(&mut state, "DOMEK");
        submit(&mut state, &Validation::accept());
        assert_eq!(state.key_state('D'), Some(Verdict::Present));

        type_word(&mut state, "XXDXX");
        submit(&mut state, &Validation::accept());
        assert_eq!(state.key_state('D'), Some(Verdict::Correct));
    }
}
