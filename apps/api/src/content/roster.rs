//! Roster loading — the static `player_info.json` read once at startup.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum RosterError {
    #[error("failed to read roster file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed roster file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Playing position code as it appears in the roster file.
///
/// Only the four codes below deserialize; anything else fails the whole load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Position {
    GK,
    DF,
    MF,
    FW,
}

impl Position {
    /// Human-readable label used in generated roster sentences.
    pub fn label(self) -> &'static str {
        match self {
            Position::GK => "골키퍼",
            Position::DF => "수비수",
            Position::MF => "미드필더",
            Position::FW => "공격수",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RosterEntry {
    pub name: String,
    /// Shirt number.
    pub id: u32,
    pub position: Position,
}

/// Reads and parses the roster file. A single bad entry fails the load.
pub fn load_roster(path: impl AsRef<Path>) -> Result<Vec<RosterEntry>, RosterError> {
    let path = path.as_ref();
    let path_str = path.display().to_string();

    let raw = std::fs::read_to_string(path).map_err(|source| RosterError::Io {
        path: path_str.clone(),
        source,
    })?;

    let entries = parse_roster(&raw).map_err(|source| RosterError::Parse {
        path: path_str.clone(),
        source,
    })?;

    info!("Loaded {} roster entries from {path_str}", entries.len());
    Ok(entries)
}

fn parse_roster(raw: &str) -> Result<Vec<RosterEntry>, serde_json::Error> {
    serde_json::from_str(raw)
}
