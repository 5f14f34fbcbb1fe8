//! Adapter module - the engine boundary
//!
//! The Minesweeper engine is an external, pre-compiled collaborator. This
//! module defines the narrow contract the frontend crosses to reach it:
//!
//! - [`EngineBoundary`]: the fixed set of entry points (session init, move
//!   submission, six status accessors) plus the buffered print channel.
//! - [`BoundaryFault`]: the error carried back from any boundary call.
//! - [`OutputQueue`]: emission-ordered buffer for the engine's print
//!   channel, for adapter implementations to fill.
//!
//! Every call is synchronous and blocks the single control flow until it
//! returns. There is no cancellation and no timeout; the boundary is a
//! local call, not a network operation.

pub mod boundary;
pub mod output;

pub use boundary::{BoundaryFault, EngineBoundary};
pub use output::{OutputChunk, OutputQueue, OutputStream};
