//! Pointer up handling - run the gate check and finish or abort sessions.

use crate::controller::GameController;
use crate::geometry::is_path_end_in_gate_box;
use crate::scene::Scene;
use crate::timeline::Timeline;
use crate::types::Actor;
use tracing::{debug, info};

/// Result of the gate check for one actor on pointer up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateOutcome {
    /// Path ended inside the gate box; actor is waiting on the other one
    Hit,
    /// Path ended outside (or was empty); path and stroke discarded, an
    /// earlier completion stays
    Miss,
}

impl<S: Scene, T: Timeline> GameController<S, T> {
    /// Returns the gate outcome for every actor that was capturing.
    pub fn handle_pointer_up(&mut self) -> Vec<(Actor, GateOutcome)> {
        if !self.accepts_input() {
            return Vec::new();
        }

        let mut outcomes = Vec::new();
        for actor in Actor::ALL {
            if !self.round.sessions[actor].is_capturing() {
                continue;
            }

            let gate = self.gates[actor];
            let session = &mut self.round.sessions[actor];
            if is_path_end_in_gate_box(&gate, session.path()) {
                session.complete();
                info!(%actor, points = session.path().len(), "path reached gate");
                outcomes.push((actor, GateOutcome::Hit));
                self.try_start_animation();
            } else {
                debug!(%actor, points = session.path().len(), "gate miss, path discarded");
                session.abort();
                self.scene.clear_stroke(actor);
                outcomes.push((actor, GateOutcome::Miss));
            }
        }
        outcomes
    }
}
