//! JSON observation lines.
//!
//! With `--json` the run loop emits one of these after every state render, so a script can
//! follow the queue and stack without scraping the menu text.

use serde::Serialize;

use crate::core::GameSnapshot;
use crate::types::Level;

#[derive(Debug, Clone, Serialize)]
pub struct ObservationMessage<'a> {
    #[serde(rename = "type")]
    pub msg_type: &'static str,
    pub seq: u64,
    pub level: &'static str,
    #[serde(flatten)]
    pub snapshot: &'a GameSnapshot,
}

impl<'a> ObservationMessage<'a> {
    pub fn new(seq: u64, level: Level, snapshot: &'a GameSnapshot) -> Self {
        Self {
            msg_type: "observation",
            seq,
            level: level.as_str(),
            snapshot,
        }
    }
}

/// Serialize one observation as a single JSON line (no trailing newline).
pub fn encode_observation(
    seq: u64,
    level: Level,
    snapshot: &GameSnapshot,
) -> serde_json::Result<String> {
    serde_json::to_string(&ObservationMessage::new(seq, level, snapshot))
}
