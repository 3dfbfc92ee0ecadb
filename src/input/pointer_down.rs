//! Pointer down handling - decide which actors start a drawing session.
//!
//! Aim windows are rebuilt from the cars' current scene positions on every
//! press, since the cars may have moved since the last round. A press on an
//! actor clears its path only; a completion it already earned stays.

use crate::controller::GameController;
use crate::scene::Scene;
use crate::spatial_index::AimIndex;
use crate::timeline::Timeline;
use crate::types::{Actor, Node, Point};
use std::time::Instant;
use tracing::{debug, trace};

impl<S: Scene, T: Timeline> GameController<S, T> {
    /// Returns the actors that started capturing.
    pub fn handle_pointer_down(&mut self, position: Point, now: Instant) -> Vec<Actor> {
        if !self.accepts_input() {
            trace!("pointer down ignored, input detached");
            return Vec::new();
        }

        self.scene.set_alpha(Node::Hand, 0.0);
        if self.config.rearm_watchdog_on_input {
            self.watchdog.rearm(now);
        }

        let index = AimIndex::from_positions(
            Actor::ALL.map(|actor| (actor, self.scene.position(actor.car()))),
            self.config.aim_offset,
        );
        let hits = index.query_point(position);

        let mut started = Vec::new();
        for actor in Actor::ALL {
            let session = &mut self.round.sessions[actor];
            if hits.contains(&actor) {
                session.start_capture();
                self.scene.clear_stroke(actor);
                started.push(actor);
                debug!(%actor, x = position.x, y = position.y, "drawing started");
            } else if session.is_capturing() {
                // Path and stroke stay as drawn
                session.stop_capture();
            }
        }
        started
    }
}
