//! Host-facing status panel state.

use serde::Serialize;

use crate::types::{phase_label, StatusSnapshot};

/// The five status fields the host displays, pre-formatted, plus the move
/// input lockout flag.
///
/// Fields hold their last known-good text; an abandoned poll leaves them
/// untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusPanel {
    pub size: String,
    pub mines: String,
    pub flags: String,
    pub revealed: String,
    pub state: String,
    /// Whether the host should accept further move input
    pub input_enabled: bool,
}

impl StatusPanel {
    pub fn new() -> Self {
        Self {
            size: String::from("Size: 0x0"),
            mines: String::from("Mines: 0"),
            flags: String::from("Flags: 0"),
            revealed: String::from("Revealed: 0"),
            state: format!("State: {}", phase_label(None)),
            input_enabled: true,
        }
    }

    /// Rewrite the five fields from a snapshot.
    pub fn update(&mut self, snapshot: &StatusSnapshot) {
        self.size = format!("Size: {}x{}", snapshot.columns, snapshot.rows);
        self.mines = format!("Mines: {}", snapshot.mines_total);
        self.flags = format!("Flags: {}", snapshot.flags_placed);
        self.revealed = format!("Revealed: {}", snapshot.cells_revealed);
        self.state = format!("State: {}", phase_label(snapshot.state));
    }

    /// The five fields in display order.
    pub fn lines(&self) -> [&str; 5] {
        [
            &self.size,
            &self.mines,
            &self.flags,
            &self.revealed,
            &self.state,
        ]
    }
}

impl Default for StatusPanel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::GamePhase;

    fn playing_snapshot() -> StatusSnapshot {
        StatusSnapshot {
            columns: 10,
            rows: 10,
            mines_total: 15,
            flags_placed: 3,
            cells_revealed: 20,
            state: Some(GamePhase::Playing),
        }
    }

    #[test]
    fn update_formats_all_five_fields() {
        let mut panel = StatusPanel::new();
        panel.update(&playing_snapshot());

        assert_eq!(
            panel.lines(),
            [
                "Size: 10x10",
                "Mines: 15",
                "Flags: 3",
                "Revealed: 20",
                "State: Playing"
            ]
        );
    }

    #[test]
    fn unknown_state_renders_the_fallback_label() {
        let mut panel = StatusPanel::new();
        let mut snapshot = playing_snapshot();
        snapshot.state = None;
        panel.update(&snapshot);
        assert_eq!(panel.state, "State: -");
    }

    #[test]
    fn out_of_range_counts_are_displayed_verbatim() {
        let mut panel = StatusPanel::new();
        let mut snapshot = playing_snapshot();
        snapshot.flags_placed = 9999;
        snapshot.cells_revealed = -3;
        panel.update(&snapshot);
        assert_eq!(panel.flags, "Flags: 9999");
        assert_eq!(panel.revealed, "Revealed: -3");
    }

    #[test]
    fn serializes_for_host_payloads() {
        let mut panel = StatusPanel::new();
        panel.update(&playing_snapshot());
        let value = serde_json::to_value(&panel).unwrap();
        assert_eq!(value["size"], "Size: 10x10");
        assert_eq!(value["input_enabled"], true);
    }
}
