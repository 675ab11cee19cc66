//! Console input module.
//!
//! Turns raw stdin lines into menu choices. Reading ([`reader`]) and the per-level code
//! tables ([`map`]) are kept apart so the tables can be rendered as a menu too.

pub mod map;
pub mod reader;

pub use tetris_stack_types as types;

pub use map::{choice_for_code, menu_entries, valid_codes, MenuChoice, MenuEntry, QUIT_CODE};
pub use reader::{parse_selection, InputError, SelectionReader};
