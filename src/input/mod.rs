//! Pointer input handling for the drawing round.
//!
//! Mouse and touch events share the same three handlers. Each handler is an
//! `impl` block on [`GameController`](crate::controller::GameController) and
//! runs to completion.
//!
//! ## Architecture
//!
//! Per-actor drawing sessions are explicit enums (`SessionState`) held in a
//! single `RoundState`, iterated over both actors rather than duplicated.
//!
//! ## Modules
//!
//! - `state` - Session and round state machine
//! - `pointer_down` - Aim window hit testing, session start
//! - `pointer_move` - Path accumulation and stroke redraw
//! - `pointer_up` - Gate check, completion or abort, join barrier

mod state;
mod pointer_down;
mod pointer_move;
mod pointer_up;

pub use pointer_up::GateOutcome;
pub use state::{RoundPhase, RoundState, RoundStatus, SessionState};
