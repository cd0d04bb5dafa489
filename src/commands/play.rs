//! Line-based interactive game
//!
//! Each input line is either a word (typed into the current row and
//! submitted) or a `:command`.

use crate::core::Mode;
use crate::game::{Command, DefinitionChange, RenderDelta, Session};
use crate::output::{print_board, print_definition, print_keyboard, print_status};
use crate::validator::GuessValidator;
use colored::Colorize;
use std::io::{self, Write};
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};

/// One parsed input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Commands(Vec<Command>),
    /// 1-based column in the current row
    Column(usize),
    Help,
    Quit,
    Unknown(String),
}

/// Parse one line of player input
#[must_use]
pub fn parse_input(line: &str) -> Input {
    let line = line.trim();

    if line.is_empty() {
        return Input::Commands(vec![Command::Enter]);
    }

    if let Some(rest) = line.strip_prefix(':') {
        let mut parts = rest.split_whitespace();
        let name = parts.next().unwrap_or_default().to_lowercase();
        let arg = parts.next();

        return match (name.as_str(), arg) {
            ("quit" | "q", None) => Input::Quit,
            ("help" | "h", None) => Input::Help,
            ("new", None) => Input::Commands(vec![Command::NewRound]),
            ("left", None) => Input::Commands(vec![Command::MoveCursor(-1)]),
            ("right", None) => Input::Commands(vec![Command::MoveCursor(1)]),
            ("mode", Some(arg)) => match Mode::from_name(arg) {
                Some(mode) => Input::Commands(vec![Command::SwitchMode(mode)]),
                None => Input::Unknown(line.to_string()),
            },
            ("len", Some(arg)) => match arg.parse() {
                Ok(length) => Input::Commands(vec![Command::SetLength(length)]),
                Err(_) => Input::Unknown(line.to_string()),
            },
            ("col", Some(arg)) => match arg.parse::<usize>() {
                Ok(col) if col > 0 => Input::Column(col),
                _ => Input::Unknown(line.to_string()),
            },
            _ => Input::Unknown(line.to_string()),
        };
    }

    if line.chars().all(|ch| ch == '<') {
        return Input::Commands(vec![Command::Backspace; line.chars().count()]);
    }

    let mut commands: Vec<Command> = line
        .chars()
        .filter(|ch| !ch.is_whitespace())
        .map(Command::Letter)
        .collect();
    commands.push(Command::Enter);
    Input::Commands(commands)
}

fn print_help() {
    println!("\n{}", "Polecenia:".bright_cyan().bold());
    println!("  SŁOWO          wpisz i zatwierdź słowo");
    println!("  (pusta linia)  zatwierdź bieżący wiersz");
    println!("  <              usuń literę (<<< usuwa trzy)");
    println!("  :left :right   przesuń kursor");
    println!("  :col N         ustaw kursor w kolumnie N");
    println!("  :new           nowa gra");
    println!("  :len N         długość słowa (4-7)");
    println!("  :mode native|foreign");
    println!("  :quit          koniec");
}

fn render(session: &Session, delta: &RenderDelta) {
    if delta.board || delta.rebuild {
        print_board(session.round());
    }
    if delta.keyboard {
        print_keyboard(session.round());
    }
    if let Some(status) = &delta.status {
        if let Some(row) = delta.shake_row {
            print!("{} ", format!("[{}]", row + 1).red());
        }
        print_status(status);
    }
    if let DefinitionChange::Show(definition) = &delta.definition {
        print_definition(definition);
    }
}

/// Run the interactive game until `:quit` or end of input
///
/// # Errors
///
/// Returns an error if reading stdin or flushing stdout fails.
pub async fn run_play(validator: Arc<GuessValidator>, mode: Mode, length: usize) -> io::Result<()> {
    println!("\n╔══════════════════════════════════════════════╗");
    println!("║                   Słówko                     ║");
    println!("╚══════════════════════════════════════════════╝");
    println!("Wpisz {} aby zobaczyć polecenia.", ":help".bright_cyan());

    let mut session = Session::new(validator, mode, length);
    print_board(session.round());
    print_status(session.status());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("\n> ");
        io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        let commands = match parse_input(&line) {
            Input::Quit => break,
            Input::Help => {
                print_help();
                continue;
            }
            Input::Unknown(text) => {
                println!("{} {text}", "Nieznane polecenie:".red());
                continue;
            }
            Input::Column(col) => vec![Command::SelectColumn {
                row: session.round().row_index(),
                col: col - 1,
            }],
            Input::Commands(commands) => commands,
        };

        let mut delta = RenderDelta::default();
        for command in commands {
            delta.merge(session.apply(command).await);
        }
        render(&session, &delta);
    }

    println!("\nDo zobaczenia!");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_becomes_letters_then_enter() {
        assert_eq!(
            parse_input("  żaba \n"),
            Input::Commands(vec![
                Command::Letter('ż'),
                Command::Letter('a'),
                Command::Letter('b'),
                Command::Letter('a'),
                Command::Enter,
            ])
        );
    }

    #[test]
    fn blank_line_submits() {
        assert_eq!(parse_input(""), Input::Commands(vec![Command::Enter]));
    }

    #[test]
    fn backspaces() {
        assert_eq!(
            parse_input("<<"),
            Input::Commands(vec![Command::Backspace, Command::Backspace])
        );
    }

    #[test]
    fn colon_commands() {
        assert_eq!(parse_input(":quit"), Input::Quit);
        assert_eq!(parse_input(":Q"), Input::Quit);
        assert_eq!(parse_input(":help"), Input::Help);
        assert_eq!(parse_input(":new"), Input::Commands(vec![Command::NewRound]));
        assert_eq!(
            parse_input(":left"),
            Input::Commands(vec![Command::MoveCursor(-1)])
        );
        assert_eq!(
            parse_input(":right"),
            Input::Commands(vec![Command::MoveCursor(1)])
        );
        assert_eq!(
            parse_input(":mode foreign"),
            Input::Commands(vec![Command::SwitchMode(Mode::Foreign)])
        );
        assert_eq!(
            parse_input(":mode normal"),
            Input::Commands(vec![Command::SwitchMode(Mode::Native)])
        );
        assert_eq!(
            parse_input(":len 7"),
            Input::Commands(vec![Command::SetLength(7)])
        );
        assert_eq!(parse_input(":col 3"), Input::Column(3));
    }

    #[test]
    fn malformed_commands_are_unknown() {
        for line in [":mode klingon", ":len five", ":col 0", ":dance", ":new now", ":mode"] {
            assert_eq!(parse_input(line), Input::Unknown(line.to_string()), "{line}");
        }
    }
}
