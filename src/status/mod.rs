//! Status module - polling, transition detection, and presentation effects
//!
//! After every player action the frontend re-reads the engine's status and
//! pushes it at the host:
//!
//! - [`poll`]: fetches the six status accessors in their fixed order and
//!   assembles a [`StatusSnapshot`](crate::types::StatusSnapshot)
//! - [`transition`]: compares each snapshot against the previously
//!   observed phase and reports first entry into Lost
//! - [`panel`]: the five host-facing status fields plus the input lockout
//!   flag
//! - [`effects`]: applies a snapshot to the panel and drives the one-shot
//!   loss effects (shake animation, input lockout)

pub mod effects;
pub mod panel;
pub mod poll;
pub mod transition;

pub use effects::{EffectDispatcher, ShakeEffect};
pub use panel::StatusPanel;
pub use poll::poll_status;
pub use transition::{Transition, TransitionRecord};
