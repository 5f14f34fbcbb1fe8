//! Status poller.

use crate::adapter::{BoundaryFault, EngineBoundary};
use crate::types::{GamePhase, StatusSnapshot};

/// Read one status snapshot from the engine boundary.
///
/// The six accessors are called in a fixed order: columns, rows, total
/// mines, flags, revealed, state. A fault from any of them abandons the
/// whole poll; no partial snapshot is ever assembled, so the caller's
/// last known-good status stays intact.
pub fn poll_status<E: EngineBoundary + ?Sized>(
    engine: &mut E,
) -> Result<StatusSnapshot, BoundaryFault> {
    let columns = engine.status_columns()?;
    let rows = engine.status_rows()?;
    let mines_total = engine.status_mines_total()?;
    let flags_placed = engine.status_flags()?;
    let cells_revealed = engine.status_revealed()?;
    let state = GamePhase::from_raw(engine.status_state()?);

    Ok(StatusSnapshot {
        columns,
        rows,
        mines_total,
        flags_placed,
        cells_revealed,
        state,
    })
}
