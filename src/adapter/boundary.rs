//! The fixed engine boundary contract.
//!
//! Entry points mirror the engine's exported symbols one to one:
//!
//! | Trait method         | Engine export          |
//! |----------------------|------------------------|
//! | `init`               | `js_init`              |
//! | `submit_move`        | `js_submit`            |
//! | `status_columns`     | `js_status_columns`    |
//! | `status_rows`        | `js_status_rows`       |
//! | `status_mines_total` | `js_status_mines_total`|
//! | `status_flags`       | `js_status_flags`      |
//! | `status_revealed`    | `js_status_revealed`   |
//! | `status_state`       | `js_status_state`      |
//!
//! The naming on the engine side is fixed; adapters must bind these exact
//! exports. Status accessors return raw integers; `status_state` encodes
//! 0 = Playing, 1 = Won, 2 = Lost, anything else = no live game.

use thiserror::Error;

use crate::adapter::output::OutputChunk;

/// Fault raised by a call across the engine boundary.
///
/// Faults are logged by the frontend and never shown to the user; the
/// triggering action degrades to a no-op.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("engine boundary fault: {message}")]
pub struct BoundaryFault {
    message: String,
}

impl BoundaryFault {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<anyhow::Error> for BoundaryFault {
    fn from(err: anyhow::Error) -> Self {
        Self::new(err.to_string())
    }
}

/// The engine boundary as seen by the frontend.
///
/// All calls are synchronous; a call cannot suspend. Implementations wrap
/// whatever linkage the host uses (wasm exports, a linked static library)
/// and surface any trap or exception as a [`BoundaryFault`] instead of
/// panicking.
///
/// Output the engine prints during a call must be buffered (see
/// [`OutputQueue`](crate::adapter::OutputQueue)) and handed out through
/// [`drain_output`](EngineBoundary::drain_output) so the frontend can
/// render it at the end of the action cycle.
pub trait EngineBoundary {
    /// Start a new game session with the given board dimensions.
    fn init(&mut self, columns: i32, rows: i32) -> Result<(), BoundaryFault>;

    /// Forward one textual move command.
    ///
    /// The move syntax is engine-internal; the text travels through
    /// opaque and unvalidated. The engine answers on the print channel,
    /// not through a return value.
    fn submit_move(&mut self, text: &str) -> Result<(), BoundaryFault>;

    fn status_columns(&mut self) -> Result<i32, BoundaryFault>;
    fn status_rows(&mut self) -> Result<i32, BoundaryFault>;
    fn status_mines_total(&mut self) -> Result<i32, BoundaryFault>;
    fn status_flags(&mut self) -> Result<i32, BoundaryFault>;
    fn status_revealed(&mut self) -> Result<i32, BoundaryFault>;
    fn status_state(&mut self) -> Result<i32, BoundaryFault>;

    /// Take the print-channel chunks buffered since the last drain,
    /// in emission order.
    fn drain_output(&mut self) -> Vec<OutputChunk>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    #[test]
    fn fault_message_includes_context() {
        let fault = BoundaryFault::new("js_submit trapped");
        assert_eq!(
            fault.to_string(),
            "engine boundary fault: js_submit trapped"
        );
    }

    #[test]
    fn fault_converts_from_anyhow() {
        let fault: BoundaryFault = anyhow!("table index out of bounds").into();
        assert!(fault.to_string().contains("table index out of bounds"));
    }
}
