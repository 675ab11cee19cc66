//! Turn-based console loop.
//!
//! One turn: print the state, print the menu, read a selection, apply it, print the result.
//! Refused actions and malformed input are reported and the loop carries on; only I/O and
//! serialization failures end it early.

use std::io::{BufRead, Write};

use anyhow::Result;

use crate::core::GameState;
use crate::input::{choice_for_code, MenuChoice, SelectionReader};
use crate::term::{self, ConsoleRenderer};
use crate::types::Level;

/// Runtime options for one session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub level: Level,
    pub seed: u32,
    /// Emit ANSI styling.
    pub color: bool,
    /// Emit a JSON observation line after every state render.
    pub json: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            level: Level::default(),
            seed: 1,
            color: false,
            json: false,
        }
    }
}

/// Run a session until the player quits or input ends.
///
/// Returns the final state so callers can inspect it.
pub fn run<R: BufRead, W: Write>(config: &AppConfig, input: R, output: W) -> Result<GameState> {
    let level = config.level;
    let mut state = GameState::new(config.seed);
    let mut reader = SelectionReader::new(input);
    let mut renderer = ConsoleRenderer::new(output, config.color);
    let mut seq: u64 = 0;

    log::info!(
        "starting {} session (seed {}, color {}, json {})",
        level.as_str(),
        config.seed,
        config.color,
        config.json
    );
    renderer.draw(&term::render_banner(level, &state))?;

    loop {
        renderer.draw(&term::render_state(level, &state))?;
        if config.json {
            seq += 1;
            let line = term::encode_observation(seq, level, &state.snapshot())?;
            renderer.write_line(&line)?;
        }
        renderer.draw(&term::render_menu(level))?;

        let code = match reader.read_selection() {
            Ok(Some(code)) => code,
            Ok(None) => {
                log::info!("input closed");
                renderer.draw(&term::render_end_of_input())?;
                return Ok(state);
            }
            Err(err) if err.is_recoverable() => {
                renderer.draw(&term::render_input_error(&err))?;
                continue;
            }
            Err(err) => return Err(err.into()),
        };

        match choice_for_code(level, code) {
            Some(MenuChoice::Quit) => {
                log::info!("player quit");
                renderer.draw(&term::render_farewell(level))?;
                return Ok(state);
            }
            Some(MenuChoice::Action(action)) => match state.apply_action(action) {
                Ok(outcome) => renderer.draw(&term::render_outcome(&outcome))?,
                Err(err) => renderer.draw(&term::render_refusal(action, &err))?,
            },
            None => {
                log::debug!("no option {} at {} level", code, level.as_str());
                renderer.draw(&term::render_invalid_option(level, code))?;
            }
        }
    }
}
