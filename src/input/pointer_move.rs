//! Pointer move handling - extend active paths and redraw their strokes.
//!
//! Called for every move event, so the non-drawing case returns early.

use crate::controller::GameController;
use crate::scene::Scene;
use crate::timeline::Timeline;
use crate::types::{Actor, Point};

impl<S: Scene, T: Timeline> GameController<S, T> {
    pub fn handle_pointer_move(&mut self, position: Point) {
        if !self.accepts_input() {
            return;
        }

        for actor in Actor::ALL {
            if !self.round.sessions[actor].push_point(position) {
                continue;
            }
            let style = self.stroke_style(actor);
            self.scene
                .draw_stroke(actor, self.round.sessions[actor].path(), style);
        }
    }
}
