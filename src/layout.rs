//! Initial placement of every scene node for a given screen size.
//!
//! Positions are fractions of the screen so the same round plays on any
//! viewport. Gate boxes come from the marking lines computed here.

use crate::constants::*;
use crate::geometry::compute_gate_box;
use crate::types::{Actor, GateBox, MarkingLine, Node, PerActor, Point};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Screen dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScreenSize {
    pub width: f32,
    pub height: f32,
}

impl ScreenSize {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    fn at(&self, fx: f32, fy: f32) -> Point {
        Point::new(self.width * fx, self.height * fy)
    }
}

/// Resolved start-of-round layout.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    pub screen: ScreenSize,
    pub marking_lines: [MarkingLine; 5],
    positions: Vec<(Node, Point)>,
    pub hand_target: Point,
}

impl Layout {
    pub fn new(screen: ScreenSize) -> Self {
        let line_height = screen.height * MARKING_LINE_HEIGHT;
        let marking_lines = MARKING_LINE_X.map(|fx| MarkingLine {
            x: screen.width * fx,
            y: 0.0,
            height: line_height,
        });

        let mut positions = vec![
            (Node::GreenCar, screen.at(GREEN_CAR_X, TOP_ROW_Y)),
            (Node::BlueCar, screen.at(BLUE_CAR_X, TOP_ROW_Y)),
            (Node::RedCar, screen.at(RED_CAR_X, BOTTOM_ROW_Y)),
            (Node::YellowCar, screen.at(YELLOW_CAR_X, BOTTOM_ROW_Y)),
            (Node::RedParking, screen.at(RED_PARKING_X, TOP_ROW_Y)),
            (Node::YellowParking, screen.at(YELLOW_PARKING_X, TOP_ROW_Y)),
            (Node::Hand, screen.at(HAND_START.0, HAND_START.1)),
            (Node::ExitButton, screen.at(BUTTON_POS.0, BUTTON_POS.1)),
            (Node::GameLogo, screen.at(LOGO_POS.0, LOGO_POS.1)),
            (Node::FailSign, screen.at(FAIL_SIGN_POS.0, FAIL_SIGN_POS.1)),
            (Node::Overlay, Point::new(0.0, 0.0)),
        ];
        for (node, line) in Node::MARKING_LINES.iter().zip(&marking_lines) {
            positions.push((*node, Point::new(line.x, line.y)));
        }

        Self {
            screen,
            marking_lines,
            positions,
            hand_target: screen.at(HAND_TARGET.0, HAND_TARGET.1),
        }
    }

    /// Start position of a node, if the layout places it.
    pub fn position(&self, node: Node) -> Option<Point> {
        self.positions
            .iter()
            .find(|(n, _)| *n == node)
            .map(|(_, p)| *p)
    }

    pub fn positions(&self) -> &[(Node, Point)] {
        &self.positions
    }

    /// Where each actor's car starts and returns to after a round.
    pub fn actor_home(&self, actor: Actor) -> Point {
        let (fx, fy) = match actor {
            Actor::Red => (RED_CAR_X, BOTTOM_ROW_Y),
            Actor::Yellow => (YELLOW_CAR_X, BOTTOM_ROW_Y),
        };
        self.screen.at(fx, fy)
    }

    /// Gate per lane: yellow between lines 1 and 2, red between 2 and 3.
    pub fn gate_boxes(&self) -> PerActor<GateBox> {
        let [_, l1, l2, l3, _] = &self.marking_lines;
        let gates = PerActor::new(compute_gate_box(l2, l3), compute_gate_box(l1, l2));
        for (actor, gate) in gates.iter() {
            if !gate.is_well_formed() {
                warn!(%actor, ?gate, "gate box is inverted and will reject every path");
            }
        }
        gates
    }
}
