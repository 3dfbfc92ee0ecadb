//! Drawing session state machine - one record per actor plus the round phase.
//!
//! Each actor carries a capture flag, a completion flag and its path in one
//! record, iterated over both actors instead of duplicated. The two flags are
//! independent: pressing on an actor that already reached its gate starts a
//! new capture with an empty path but keeps the completion, so a bare
//! press-and-release leaves it complete with a path too short to drive.
//!
//! ## Per-actor transitions
//!
//! ```text
//! any         -> capturing, path cleared   (pointer down inside the aim window)
//! capturing   -> capturing                 (pointer move appends a point)
//! capturing   -> completed                 (pointer up, path ends inside the gate box)
//! capturing   -> not capturing, path cleared (pointer up, gate miss)
//! capturing   -> not capturing, path kept  (pointer down outside the window)
//! ```
//!
//! A gate miss never clears an earlier completion.
//!
//! ## Round phases
//!
//! ```text
//! Drawing -> Animating     (both actors completed, every path long enough)
//! Drawing -> Failed        (both actors completed, some path too short)
//! Drawing -> Resetting     (inactivity watchdog)
//! Animating | Failed -> Resetting  (wind-down cue)
//! Resetting -> Finished    (revert cue; input detached, exit enabled)
//! ```

use crate::types::{Actor, Path, PerActor, Point};
use serde::Serialize;

/// Drawing session of one actor.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SessionState {
    capturing: bool,
    completed: bool,
    path: Path,
}

impl SessionState {
    pub fn is_capturing(&self) -> bool {
        self.capturing
    }

    pub fn is_complete(&self) -> bool {
        self.completed
    }

    pub fn path(&self) -> &[Point] {
        &self.path
    }

    /// Start a fresh capture with an empty path. Completion is untouched.
    pub fn start_capture(&mut self) {
        self.capturing = true;
        self.path.clear();
    }

    /// Append to the path if capturing. Returns true if the point was taken.
    pub fn push_point(&mut self, point: Point) -> bool {
        if self.capturing {
            self.path.push(point);
        }
        self.capturing
    }

    /// Stop recording without touching the path or the completion.
    pub fn stop_capture(&mut self) {
        self.capturing = false;
    }

    /// Gate hit: stop capturing and mark complete, keeping the path.
    pub fn complete(&mut self) {
        if self.capturing {
            self.capturing = false;
            self.completed = true;
        }
    }

    /// Gate miss: stop capturing and discard the path.
    pub fn abort(&mut self) {
        if self.capturing {
            self.capturing = false;
            self.path.clear();
        }
    }
}


/// Phase of the whole round.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundPhase {
    /// Accepting pointer input
    #[default]
    Drawing,
    /// Both cars are following their paths
    Animating,
    /// At least one path was too short; fail sign shown, no motion for it
    Failed,
    /// Fade/restore sequence is running
    Resetting,
    /// Round over, input detached, exit button live
    Finished,
}

impl RoundPhase {
    pub fn accepts_input(self) -> bool {
        matches!(self, Self::Drawing)
    }
}

/// Coarse view of the round matching the lifecycle names used in logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundStatus {
    Idle,
    Capturing,
    Pending,
    Animating,
    Failed,
    Resetting,
    Finished,
}

/// All per-round mutable game state.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RoundState {
    pub sessions: PerActor<SessionState>,
    pub phase: RoundPhase,
}

impl RoundState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Capture flags, one per actor
    pub fn capturing(&self) -> PerActor<bool> {
        PerActor::from_fn(|actor| self.sessions[actor].is_capturing())
    }

    /// Completion flags, one per actor
    pub fn completed(&self) -> PerActor<bool> {
        PerActor::from_fn(|actor| self.sessions[actor].is_complete())
    }

    pub fn path(&self, actor: Actor) -> &[Point] {
        self.sessions[actor].path()
    }

    /// Join barrier: both actors passed their gate.
    pub fn both_complete(&self) -> bool {
        self.sessions.all(SessionState::is_complete)
    }

    pub fn status(&self) -> RoundStatus {
        match self.phase {
            RoundPhase::Drawing => {
                if self.sessions.any(SessionState::is_capturing) {
                    RoundStatus::Capturing
                } else if self.sessions.any(SessionState::is_complete) {
                    RoundStatus::Pending
                } else {
                    RoundStatus::Idle
                }
            }
            RoundPhase::Animating => RoundStatus::Animating,
            RoundPhase::Failed => RoundStatus::Failed,
            RoundPhase::Resetting => RoundStatus::Resetting,
            RoundPhase::Finished => RoundStatus::Finished,
        }
    }

    /// Clear sessions, flags and paths in one step.
    pub fn clear_sessions(&mut self) {
        self.sessions = PerActor::default();
    }
}
