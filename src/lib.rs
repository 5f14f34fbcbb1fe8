//! Presentation and status-sync frontend for an external Minesweeper
//! engine.
//!
//! The engine (board layout, mine placement, reveal logic, win/loss
//! detection) is a pre-compiled collaborator behind the narrow
//! [`adapter::EngineBoundary`] contract. This crate owns what sits between
//! that boundary and the host's widgets:
//!
//! - [`render`]: sanitizing engine text and coloring board dumps
//! - [`status`]: polling the boundary, detecting the loss transition,
//!   driving the status panel and one-shot effects
//! - [`ui`]: the [`ui::Frontend`] controller hosts embed, with the
//!   explicit session context
//! - [`types`]: shared value types and tuned constants
//!
//! Everything is single-threaded and synchronous by design: one action,
//! one complete cycle, no interleaving.

pub mod adapter;
pub mod render;
pub mod status;
pub mod types;
pub mod ui;

pub use adapter::{BoundaryFault, EngineBoundary, OutputChunk, OutputQueue, OutputStream};
pub use render::{OutputBuffer, Renderer};
pub use status::{EffectDispatcher, ShakeEffect, StatusPanel, Transition, TransitionRecord};
pub use types::{GamePhase, StatusSnapshot};
pub use ui::{Frontend, Session};
