//! Core types for the lane drawing game.
//!
//! Points and paths recorded from pointer input, the two actors and their
//! per-actor storage, scene node identities, and the rectangles used for
//! hit testing.

use crate::constants::{RED_STROKE_COLOR, STROKE_WIDTH, YELLOW_STROKE_COLOR};
use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

// ============================================================================
// Points & Paths
// ============================================================================

/// A pointer location in screen (client) coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Ordered pointer locations captured during one drawing session.
pub type Path = Vec<Point>;

// ============================================================================
// Actors
// ============================================================================

/// One of the two player-controlled cars.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Actor {
    Red,
    Yellow,
}

impl Actor {
    /// Both actors, in the order handlers evaluate them.
    pub const ALL: [Actor; 2] = [Actor::Red, Actor::Yellow];

    pub fn name(self) -> &'static str {
        match self {
            Actor::Red => "red",
            Actor::Yellow => "yellow",
        }
    }

    /// Scene node of the actor's car sprite
    pub fn car(self) -> Node {
        match self {
            Actor::Red => Node::RedCar,
            Actor::Yellow => Node::YellowCar,
        }
    }

    /// Scene node of the actor's freehand stroke
    pub fn stroke(self) -> Node {
        Node::Stroke(self)
    }

    pub fn stroke_style(self) -> StrokeStyle {
        let color = match self {
            Actor::Red => RED_STROKE_COLOR,
            Actor::Yellow => YELLOW_STROKE_COLOR,
        };
        StrokeStyle {
            width: STROKE_WIDTH,
            color,
        }
    }
}

impl std::fmt::Display for Actor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// One value per actor, indexable by [`Actor`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerActor<T> {
    pub red: T,
    pub yellow: T,
}

impl<T> PerActor<T> {
    pub fn new(red: T, yellow: T) -> Self {
        Self { red, yellow }
    }

    /// Build both values from a function of the actor.
    pub fn from_fn(mut f: impl FnMut(Actor) -> T) -> Self {
        Self {
            red: f(Actor::Red),
            yellow: f(Actor::Yellow),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Actor, &T)> {
        [(Actor::Red, &self.red), (Actor::Yellow, &self.yellow)].into_iter()
    }

    pub fn all(&self, mut pred: impl FnMut(&T) -> bool) -> bool {
        pred(&self.red) && pred(&self.yellow)
    }

    pub fn any(&self, mut pred: impl FnMut(&T) -> bool) -> bool {
        pred(&self.red) || pred(&self.yellow)
    }
}

impl<T> Index<Actor> for PerActor<T> {
    type Output = T;

    fn index(&self, actor: Actor) -> &T {
        match actor {
            Actor::Red => &self.red,
            Actor::Yellow => &self.yellow,
        }
    }
}

impl<T> IndexMut<Actor> for PerActor<T> {
    fn index_mut(&mut self, actor: Actor) -> &mut T {
        match actor {
            Actor::Red => &mut self.red,
            Actor::Yellow => &mut self.yellow,
        }
    }
}

// ============================================================================
// Scene Nodes
// ============================================================================

/// Identity of an object in the scene owned by the rendering collaborator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Node {
    GreenCar,
    BlueCar,
    RedCar,
    YellowCar,
    /// Lane marking line, 0..5 from left to right
    MarkingLine(u8),
    RedParking,
    YellowParking,
    Hand,
    ExitButton,
    GameLogo,
    FailSign,
    /// Dimming rectangle over the whole screen
    Overlay,
    Stroke(Actor),
}

impl Node {
    pub const MARKING_LINES: [Node; 5] = [
        Node::MarkingLine(0),
        Node::MarkingLine(1),
        Node::MarkingLine(2),
        Node::MarkingLine(3),
        Node::MarkingLine(4),
    ];

    /// Every sprite that fades out with the scene and back in on revert.
    pub const DECORATIONS: [Node; 15] = [
        Node::GreenCar,
        Node::BlueCar,
        Node::RedCar,
        Node::YellowCar,
        Node::MarkingLine(0),
        Node::MarkingLine(1),
        Node::MarkingLine(2),
        Node::MarkingLine(3),
        Node::MarkingLine(4),
        Node::YellowParking,
        Node::RedParking,
        Node::ExitButton,
        Node::Hand,
        Node::GameLogo,
        Node::FailSign,
    ];
}

/// Visual style of a freehand stroke.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct StrokeStyle {
    pub width: f32,
    /// 0xRRGGBB
    pub color: u32,
}

// ============================================================================
// Hit Testing Rectangles
// ============================================================================

/// Inclusive `[min, max]` interval on one axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MinMax {
    pub min: f32,
    pub max: f32,
}

impl MinMax {
    #[inline]
    pub fn contains(&self, v: f32) -> bool {
        v >= self.min && v <= self.max
    }
}

/// Inclusive `[from, to]` interval on one axis. Empty when `from > to`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FromTo {
    pub from: f32,
    pub to: f32,
}

impl FromTo {
    #[inline]
    pub fn contains(&self, v: f32) -> bool {
        v >= self.from && v <= self.to
    }
}

/// Rectangle around an actor that a pointer-down must land in to start
/// drawing for that actor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AimWindow {
    pub x: MinMax,
    pub y: MinMax,
}

/// Rectangle between two marking lines that a path must end in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GateBox {
    pub x: FromTo,
    pub y: FromTo,
}

impl GateBox {
    /// False when either axis has `from > to`, which makes every
    /// containment test fail.
    pub fn is_well_formed(&self) -> bool {
        self.x.from <= self.x.to && self.y.from <= self.y.to
    }
}

/// Placement of a lane marking line: top-left anchor plus height.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MarkingLine {
    pub x: f32,
    pub y: f32,
    pub height: f32,
}
