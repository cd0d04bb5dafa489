//! Game session and command dispatcher
//!
//! A UI adapter turns its events into [`Command`]s and repaints according to
//! the returned [`RenderDelta`]. The session owns the live round, the
//! selected mode and length, and the validator.

use super::state::{MAX_ATTEMPTS, RoundState, SubmitOutcome, SubmitStart};
use crate::core::{DEFAULT_WORD_LENGTH, Mode, Word, is_supported_length};
use crate::validator::GuessValidator;
use crate::wordlists::MISSING_DEFINITION;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use std::sync::Arc;
use tracing::{debug, info};

/// Status shown when the selected pool has no words
pub const EMPTY_POOL_STATUS: &str = "Brak haseł dla tego trybu i długości.";

/// Player actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Letter(char),
    Backspace,
    Enter,
    MoveCursor(isize),
    SelectColumn { row: usize, col: usize },
    NewRound,
    SetLength(usize),
    SwitchMode(Mode),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusLine {
    pub text: String,
    pub is_error: bool,
}

impl StatusLine {
    fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: false,
        }
    }

    fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: true,
        }
    }
}

/// Revealed definition of a foreign secret word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Definition {
    pub word: String,
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DefinitionChange {
    #[default]
    Keep,
    Show(Definition),
    Hide,
}

/// What the UI has to repaint after a command
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderDelta {
    /// The whole board changed shape (new round)
    pub rebuild: bool,
    pub board: bool,
    pub keyboard: bool,
    /// Row to shake as rejection feedback
    pub shake_row: Option<usize>,
    pub status: Option<StatusLine>,
    pub definition: DefinitionChange,
}

impl RenderDelta {
    fn board() -> Self {
        Self {
            board: true,
            ..Self::default()
        }
    }

    fn rejected(row: usize, message: impl Into<String>) -> Self {
        Self {
            shake_row: Some(row),
            status: Some(StatusLine::error(message)),
            ..Self::default()
        }
    }

    /// Nothing to repaint
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Fold a later delta into this one, later status and definition win
    pub fn merge(&mut self, later: Self) {
        self.rebuild |= later.rebuild;
        self.board |= later.board;
        self.keyboard |= later.keyboard;
        if later.shake_row.is_some() {
            self.shake_row = later.shake_row;
        }
        if later.status.is_some() {
            self.status = later.status;
        }
        if later.definition != DefinitionChange::Keep {
            self.definition = later.definition;
        }
    }
}

pub struct Session {
    validator: Arc<GuessValidator>,
    mode: Mode,
    word_length: usize,
    rng: StdRng,
    round: RoundState,
    status: StatusLine,
    definition: Option<Definition>,
}

impl Session {
    /// Create a session and start its first round
    #[must_use]
    pub fn new(validator: Arc<GuessValidator>, mode: Mode, word_length: usize) -> Self {
        Self::with_rng(validator, mode, word_length, StdRng::from_os_rng())
    }

    /// Like [`Session::new`] with a caller-provided RNG for secret selection
    #[must_use]
    pub fn with_rng(
        validator: Arc<GuessValidator>,
        mode: Mode,
        word_length: usize,
        rng: StdRng,
    ) -> Self {
        let word_length = selected_length(word_length);
        let mut session = Self {
            round: RoundState::new(Word::filler(word_length), mode),
            validator,
            mode,
            word_length,
            rng,
            status: StatusLine::default(),
            definition: None,
        };
        session.start_round();
        session
    }

    #[must_use]
    pub fn round(&self) -> &RoundState {
        &self.round
    }

    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    #[must_use]
    pub fn word_length(&self) -> usize {
        self.word_length
    }

    #[must_use]
    pub fn status(&self) -> &StatusLine {
        &self.status
    }

    #[must_use]
    pub fn definition(&self) -> Option<&Definition> {
        self.definition.as_ref()
    }

    /// Apply one player command
    pub async fn apply(&mut self, command: Command) -> RenderDelta {
        match command {
            Command::Letter(letter) => self.edit(|round| round.input(letter)),
            Command::Backspace => self.edit(RoundState::backspace),
            Command::MoveCursor(delta) => self.edit(|round| round.move_cursor(delta)),
            Command::SelectColumn { row, col } => {
                self.edit(|round| round.select_column(row, col))
            }
            Command::Enter => self.submit().await,
            Command::NewRound => self.start_round(),
            Command::SetLength(length) => {
                self.word_length = selected_length(length);
                self.start_round()
            }
            Command::SwitchMode(mode) => {
                if mode == self.mode {
                    return RenderDelta::default();
                }
                self.mode = mode;
                self.start_round()
            }
        }
    }

    fn edit(&mut self, op: impl FnOnce(&mut RoundState) -> bool) -> RenderDelta {
        if op(&mut self.round) {
            RenderDelta::board()
        } else {
            RenderDelta::default()
        }
    }

    /// Start a new round with the current mode and length
    pub fn start_round(&mut self) -> RenderDelta {
        let pool = self.validator.registry().pool(self.mode, self.word_length);
        let target = pool.choose(&mut self.rng).cloned();
        let has_words = target.is_some();
        let target = target.unwrap_or_else(|| Word::filler(self.word_length));

        let status = if has_words {
            StatusLine::info(format!(
                "Nowa gra ({}): {} liter, {MAX_ATTEMPTS} prób.",
                self.mode.label(),
                self.word_length
            ))
        } else {
            StatusLine::error(EMPTY_POOL_STATUS)
        };

        info!(mode = %self.mode, length = self.word_length, has_words, "new round");
        debug!(secret = %target, "secret chosen");
        self.begin_round(target, status)
    }

    fn begin_round(&mut self, target: Word, status: StatusLine) -> RenderDelta {
        self.round = RoundState::new(target, self.mode);
        self.status = status.clone();
        self.definition = None;

        RenderDelta {
            rebuild: true,
            board: true,
            keyboard: true,
            status: Some(status),
            definition: DefinitionChange::Hide,
            ..RenderDelta::default()
        }
    }

    /// Submit the current row
    ///
    /// The round stays locked while the validator runs, so any edits
    /// delivered to the round in the meantime are ignored.
    pub async fn submit(&mut self) -> RenderDelta {
        let row = self.round.row_index();
        let guess = match self.round.begin_submission() {
            SubmitStart::Ignored => return RenderDelta::default(),
            SubmitStart::Rejected(reason) => {
                self.status = StatusLine::error(reason.message());
                return RenderDelta::rejected(row, reason.message());
            }
            SubmitStart::Ready(guess) => guess,
        };

        let validation = self
            .validator
            .validate(&guess, self.mode, self.round.word_length())
            .await;

        match self.round.complete_submission(&guess, &validation) {
            SubmitOutcome::Rejected(message) => {
                self.status = StatusLine::error(message.clone());
                RenderDelta {
                    board: true,
                    ..RenderDelta::rejected(row, message)
                }
            }
            SubmitOutcome::Continue => {
                self.status = StatusLine::default();
                RenderDelta {
                    board: true,
                    keyboard: true,
                    status: Some(StatusLine::default()),
                    ..RenderDelta::default()
                }
            }
            SubmitOutcome::Won => {
                let text = format!("Brawo! Odgadnięte hasło: {}", self.round.target());
                self.finish(StatusLine::info(text))
            }
            SubmitOutcome::Lost => {
                let text = format!("Koniec prób. Hasło: {}", self.round.target());
                self.finish(StatusLine::error(text))
            }
        }
    }

    fn finish(&mut self, status: StatusLine) -> RenderDelta {
        info!(
            status = ?self.round.status(),
            attempts = self.round.row_index() + 1,
            "round finished"
        );
        self.status = status.clone();

        let definition = match self.mode {
            Mode::Foreign => {
                let target = self.round.target();
                let text = self
                    .validator
                    .registry()
                    .definition(target)
                    .unwrap_or(MISSING_DEFINITION);
                let definition = Definition {
                    word: target.to_string(),
                    text: text.to_string(),
                };
                self.definition = Some(definition.clone());
                DefinitionChange::Show(definition)
            }
            Mode::Native => {
                self.definition = None;
                DefinitionChange::Hide
            }
        };

        RenderDelta {
            board: true,
            keyboard: true,
            status: Some(status),
            definition,
            ..RenderDelta::default()
        }
    }
}

/// Unsupported lengths fall back to the default
fn selected_length(length: usize) -> usize {
    if is_supported_length(length) {
        length
    } else {
        DEFAULT_WORD_LENGTH
    }
}
