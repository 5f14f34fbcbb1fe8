//! Frontend controller.
//!
//! One `Frontend` per host page/process. It owns the engine boundary
//! handle, the renderer (and through it the output sink), the status
//! panel, and the effect dispatcher, and runs the fixed per-action cycle:
//! forward the request across the boundary, poll status, detect the
//! transition, dispatch effects, then render the output the action
//! produced.

use crate::adapter::EngineBoundary;
use crate::render::Renderer;
use crate::status::effects::EffectDispatcher;
use crate::status::panel::StatusPanel;
use crate::status::poll::poll_status;
use crate::ui::session::Session;

/// Shown when a boundary call is attempted before the runtime is up.
pub const MSG_RUNTIME_LOADING: &str = "[Loading engine... try again]\n";
/// Shown when a move arrives before any game session exists.
pub const MSG_START_FIRST: &str = "Start the game first using the controls above.\n";
/// Shown when the start action carries dimensions of 1 or less.
pub const MSG_INVALID_SIZES: &str = "Invalid sizes. Use numbers greater than 1.\n";
/// Written once when the runtime comes up.
pub const MSG_PRESS_START: &str = "Press Start to create a board and begin playing.\n";

/// Read a board dimension out of a free-text size field.
///
/// An empty field falls back to `default`; unparsable text maps to 0,
/// which the caller's `> 1` check then rejects with the invalid-sizes
/// message. No boundary call is made either way.
pub fn parse_dimension(raw: &str, default: i32) -> i32 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return default;
    }
    trimmed.parse().unwrap_or(0)
}

/// The presentation/synchronization layer over one engine instance.
pub struct Frontend<E> {
    engine: E,
    session: Session,
    renderer: Renderer,
    panel: StatusPanel,
    effects: EffectDispatcher,
}

impl<E: EngineBoundary> Frontend<E> {
    /// Wrap an engine boundary. The frontend starts not-ready; call
    /// [`mark_runtime_ready`](Frontend::mark_runtime_ready) once the
    /// engine runtime has booted.
    pub fn new(engine: E) -> Self {
        Self {
            engine,
            session: Session::new(),
            renderer: Renderer::new(),
            panel: StatusPanel::new(),
            effects: EffectDispatcher::new(),
        }
    }

    /// The engine runtime finished initializing.
    pub fn mark_runtime_ready(&mut self) {
        self.session.mark_runtime_ready();
        self.renderer.write(MSG_PRESS_START);
    }

    /// Handle one submitted move line.
    ///
    /// The text is trimmed and otherwise forwarded opaque; this layer
    /// never parses or validates move syntax. On a boundary fault the
    /// action becomes a no-op: the fault is logged, pending output from
    /// the failed call is discarded, and the last known-good panel and
    /// sink stay as they were.
    pub fn submit_move(&mut self, raw: &str) {
        if !self.session.is_runtime_ready() {
            self.renderer.write(MSG_RUNTIME_LOADING);
            return;
        }
        if !self.session.is_game_started() {
            self.renderer.write(MSG_START_FIRST);
            return;
        }

        let text = raw.trim();
        match self.engine.submit_move(text) {
            Ok(()) => {
                self.sync_status();
                self.render_engine_output();
            }
            Err(fault) => {
                log::error!("move submission failed: {fault}");
                self.engine.drain_output();
            }
        }
    }

    /// Handle the game-start action.
    ///
    /// Dimensions of 1 or less are rejected locally, before any boundary
    /// call. A new session clears the output sink and restores the
    /// transition record's sentinel before the engine sees the init call,
    /// and re-enables move input.
    pub fn start_game(&mut self, columns: i32, rows: i32) {
        if !self.session.is_runtime_ready() {
            self.renderer.write(MSG_RUNTIME_LOADING);
            return;
        }
        if columns <= 1 || rows <= 1 {
            self.renderer.write(MSG_INVALID_SIZES);
            return;
        }

        self.renderer.clear();
        self.session.record.reset();

        match self.engine.init(columns, rows) {
            Ok(()) => {
                self.session.mark_game_started();
                self.panel.input_enabled = true;
                self.sync_status();
                self.render_engine_output();
            }
            Err(fault) => {
                log::error!("game start failed: {fault}");
                self.engine.drain_output();
            }
        }
    }

    /// Advance time-based effects; the host calls this from its frame or
    /// timer loop.
    pub fn update(&mut self, elapsed_ms: u32) {
        self.effects.update(elapsed_ms);
    }

    /// Poll the boundary and push the result at the panel and effects.
    ///
    /// An abandoned poll changes nothing: the transition record keeps its
    /// previous phase and the panel keeps its last known-good fields.
    fn sync_status(&mut self) {
        let snapshot = match poll_status(&mut self.engine) {
            Ok(snapshot) => snapshot,
            Err(fault) => {
                log::warn!("status poll abandoned: {fault}");
                return;
            }
        };

        let transition = self.session.record.observe(&snapshot);
        self.effects
            .on_snapshot(&mut self.panel, &snapshot, transition.is_new_loss);
    }

    /// Route everything the engine printed during this action into the
    /// sink, in emission order.
    fn render_engine_output(&mut self) {
        for chunk in self.engine.drain_output() {
            self.renderer.write(&chunk.text);
        }
    }

    pub fn panel(&self) -> &StatusPanel {
        &self.panel
    }

    pub fn output(&self) -> &crate::render::OutputBuffer {
        self.renderer.buffer()
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn shake_active(&self) -> bool {
        self.effects.shake().is_active()
    }

    pub fn shake_offset(&self) -> i8 {
        self.effects.shake().offset()
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }
}
