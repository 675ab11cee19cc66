//! Menu codes for each level.

use crate::types::{GameAction, Level};

/// Code that leaves the loop at every level.
pub const QUIT_CODE: i64 = 0;

/// One numbered menu line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuEntry {
    pub code: i64,
    pub action: GameAction,
}

const fn entry(code: i64, action: GameAction) -> MenuEntry {
    MenuEntry { code, action }
}

const NOVICE: [MenuEntry; 2] = [
    entry(1, GameAction::Dequeue),
    entry(2, GameAction::Enqueue),
];

const ADVENTURER: [MenuEntry; 3] = [
    entry(1, GameAction::Play),
    entry(2, GameAction::Hold),
    entry(3, GameAction::UseHeld),
];

const MASTER: [MenuEntry; 5] = [
    entry(1, GameAction::Play),
    entry(2, GameAction::Hold),
    entry(3, GameAction::UseHeld),
    entry(4, GameAction::Swap),
    entry(5, GameAction::SwapBlock),
];

/// What the player picked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Action(GameAction),
    Quit,
}

/// Numbered actions offered at `level`, in menu order (quit not included).
pub fn menu_entries(level: Level) -> &'static [MenuEntry] {
    match level {
        Level::Novice => &NOVICE,
        Level::Adventurer => &ADVENTURER,
        Level::Master => &MASTER,
    }
}

/// Map a typed code to a choice. `None` means the level has no such option.
pub fn choice_for_code(level: Level, code: i64) -> Option<MenuChoice> {
    if code == QUIT_CODE {
        return Some(MenuChoice::Quit);
    }
    menu_entries(level)
        .iter()
        .find(|e| e.code == code)
        .map(|e| MenuChoice::Action(e.action))
}

/// Every accepted code, action codes first and quit last.
pub fn valid_codes(level: Level) -> impl Iterator<Item = i64> {
    menu_entries(level)
        .iter()
        .map(|e| e.code)
        .chain(std::iter::once(QUIT_CODE))
}
