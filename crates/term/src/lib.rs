//! Console presentation module.
//!
//! Everything the player sees goes through here. Views are pure functions that turn core state
//! into [`TextFrame`]s; [`ConsoleRenderer`] is the only part that writes bytes.
//!
//! - [`frame`]: styled text spans (the console's framebuffer)
//! - [`game_view`]: state, menu, outcome and notice frames
//! - [`renderer`]: crossterm-styled or plain output to any `Write`
//! - [`observe`]: one-line JSON observations of the state

pub mod frame;
pub mod game_view;
pub mod observe;
pub mod renderer;

pub use tetris_stack_core as core;
pub use tetris_stack_input as input;
pub use tetris_stack_types as types;

pub use frame::{Rgb, Span, TextFrame, TextStyle};
pub use game_view::{
    action_label, render_banner, render_end_of_input, render_farewell, render_input_error,
    render_invalid_option, render_menu, render_outcome, render_refusal, render_state,
};
pub use observe::{encode_observation, ObservationMessage};
pub use renderer::{encode_plain_into, encode_styled_into, ConsoleRenderer};
