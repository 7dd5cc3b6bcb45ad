//! Main menu text and input parsing.

use fair_moves_core::MoveSet;

/// What the player asked for at the prompt
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuChoice {
    /// Zero-based index of the chosen move
    Play(usize),
    Help,
    Exit,
    Invalid,
}

/// Parse one input line. Moves are numbered from 1; `0` exits and `?` shows help.
pub fn parse_choice(input: &str, move_count: usize) -> MenuChoice {
    match input.trim() {
        "?" => MenuChoice::Help,
        "0" => MenuChoice::Exit,
        other => match other.parse::<usize>() {
            Ok(n) if (1..=move_count).contains(&n) => MenuChoice::Play(n - 1),
            _ => MenuChoice::Invalid,
        },
    }
}

pub fn render_menu(moves: &MoveSet) -> String {
    let mut menu = String::from("Available moves:\n");
    for (mv, name) in moves.iter() {
        menu.push_str(&format!("{} - {}\n", mv.index() + 1, name));
    }
    menu.push_str("0 - exit\n? - help\nEnter your move:\n");
    menu
}
