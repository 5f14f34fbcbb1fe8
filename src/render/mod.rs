//! Render module - from raw engine text to styled markup
//!
//! Everything the user reads flows through this pipeline:
//!
//! - [`escape`]: sanitizes markup-significant characters (`&`, `<`, `>`)
//! - [`classify`]: heuristically decides whether a text block is a board
//!   dump or a plain log line
//! - [`decorate`]: structural coloring for boardish text (mine-count
//!   digits, row labels)
//! - [`output`]: the append-only [`OutputBuffer`] and the [`Renderer`]
//!   that is its only writer
//!
//! Classification runs on the raw text; escaping always happens before any
//! markup is added, so engine output can never smuggle tags into the sink.

pub mod classify;
pub mod decorate;
pub mod escape;
pub mod output;

pub use classify::is_boardish;
pub use decorate::decorate_board_text;
pub use escape::escape_markup;
pub use output::{OutputBuffer, Renderer};
