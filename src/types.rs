//! Core types shared across the frontend
//! This module contains pure data types with no behavior beyond conversion

use serde::{Deserialize, Serialize};

/// Board dimensions used when a size field is left empty
pub const DEFAULT_COLUMNS: i32 = 10;
pub const DEFAULT_ROWS: i32 = 10;

/// Loss shake timing (in milliseconds)
///
/// The keyframe window runs for `SHAKE_DURATION_MS`; the active marker is
/// held slightly longer so the host sees the final rest position before
/// the effect clears.
pub const SHAKE_DURATION_MS: u32 = 600;
pub const SHAKE_CLEAR_MS: u32 = 650;

/// Horizontal shake offsets at 10% keyframe steps (display units)
pub const SHAKE_OFFSETS: [i8; 11] = [0, -10, 8, -8, 6, -6, 4, -4, 2, -2, 0];

/// Game phase as reported by the engine boundary
///
/// The boundary encodes this as an integer (0 = Playing, 1 = Won,
/// 2 = Lost); any other value means no game is live behind the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GamePhase {
    Playing,
    Won,
    Lost,
}

impl GamePhase {
    /// Decode the boundary's integer encoding
    pub fn from_raw(value: i32) -> Option<Self> {
        match value {
            0 => Some(GamePhase::Playing),
            1 => Some(GamePhase::Won),
            2 => Some(GamePhase::Lost),
            _ => None,
        }
    }

    /// Human-readable label
    pub fn as_str(&self) -> &'static str {
        match self {
            GamePhase::Playing => "Playing",
            GamePhase::Won => "Won",
            GamePhase::Lost => "Lost",
        }
    }
}

/// Label for a possibly-unknown phase, with a fallback for values the
/// boundary reports outside the known range
pub fn phase_label(phase: Option<GamePhase>) -> &'static str {
    match phase {
        Some(phase) => phase.as_str(),
        None => "-",
    }
}

/// One immutable status reading, assembled from a single poll
///
/// Counts are display data straight from the engine. They are never
/// validated here; an engine that reports out-of-range values gets them
/// shown verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusSnapshot {
    pub columns: i32,
    pub rows: i32,
    pub mines_total: i32,
    pub flags_placed: i32,
    pub cells_revealed: i32,
    pub state: Option<GamePhase>,
}
