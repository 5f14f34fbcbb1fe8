//! UI module - the frontend controller the host embeds
//!
//! The host owns the actual widgets (input field, output view, status
//! fields, start controls); this module owns everything behind them:
//!
//! - [`session`]: the explicit session context (runtime readiness, live
//!   game flag, transition record) that replaces ambient globals
//! - [`frontend`]: [`Frontend`], which wires the engine boundary, the
//!   render pipeline, and the status machinery into the per-action cycle:
//!   forward request, poll status, detect transition, dispatch effects,
//!   render the action's output
//!
//! All handlers degrade gracefully: readiness and validation failures
//! surface as user messages in the output sink, boundary faults are
//! logged and leave the last known-good state visible.

pub mod frontend;
pub mod session;

pub use frontend::{parse_dimension, Frontend};
pub use session::Session;
