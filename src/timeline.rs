//! Animation timeline collaborator interface.
//!
//! The game schedules work on a shared, sequenced timeline and on
//! free-running tweens. Deferred callbacks are expressed as [`Cue`] values:
//! when the playback engine reaches a cue it hands it back to
//! [`GameController::handle_cue`](crate::controller::GameController::handle_cue).
//!
//! [`RecordingTimeline`] records every scheduled operation instead of playing
//! it, so a round can be stepped and inspected without a renderer.

use crate::types::{Node, Point};
use serde::Serialize;
use std::collections::VecDeque;

/// Where an operation lands on the shared timeline.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Position {
    /// After everything already scheduled
    End,
    /// Absolute time in seconds from the timeline start
    At(f32),
    /// Seconds relative to the current end (negative overlaps)
    FromEnd(f32),
}

/// Property values to set or tween towards. `None` leaves a property alone.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct Props {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<Point>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alpha: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale: Option<f32>,
}

impl Props {
    pub fn position(position: Point) -> Self {
        Self {
            position: Some(position),
            ..Self::default()
        }
    }

    pub fn alpha(alpha: f32) -> Self {
        Self {
            alpha: Some(alpha),
            ..Self::default()
        }
    }

    pub fn scale(scale: f32) -> Self {
        Self {
            scale: Some(scale),
            ..Self::default()
        }
    }
}

/// A duration-based property tween over one or more nodes.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Tween {
    pub targets: Vec<Node>,
    pub props: Props,
    pub duration: f32,
    pub delay: f32,
}

impl Tween {
    pub fn new(targets: impl Into<Vec<Node>>, props: Props, duration: f32) -> Self {
        Self {
            targets: targets.into(),
            props,
            duration,
            delay: 0.0,
        }
    }

    pub fn with_delay(mut self, delay: f32) -> Self {
        self.delay = delay;
        self
    }
}

/// Deferred callbacks the controller reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Cue {
    /// Motion has finished; fade decorations and strokes
    FadeDecorations,
    /// Dim the screen and pulse the fail sign
    BeginWindDown,
    /// Restore the scene and end the round
    RevertToInitial,
}

/// Timeline and tween scheduling the game needs from the animation engine.
pub trait Timeline {
    /// Immediate property set on the shared timeline.
    fn set(&mut self, target: Node, props: Props, at: Position);

    /// Path-follow tween on the shared timeline.
    fn follow_path(
        &mut self,
        target: Node,
        path: &[Point],
        duration: f32,
        curviness: f32,
        at: Position,
    );

    /// Empty spacer of `duration` that emits `cue` when it completes.
    fn spacer(&mut self, duration: f32, cue: Cue, at: Position);

    /// Emit `cue` when playback reaches `at`.
    fn call(&mut self, cue: Cue, at: Position);

    /// Free-running tween that starts now, outside the shared timeline.
    fn spawn(&mut self, tween: Tween);
}

/// A scheduled operation as seen by [`RecordingTimeline`].
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum TimelineOp {
    Set {
        target: Node,
        props: Props,
        at: Position,
    },
    FollowPath {
        target: Node,
        path: Vec<Point>,
        duration: f32,
        curviness: f32,
        at: Position,
    },
    Spacer {
        duration: f32,
        cue: Cue,
        at: Position,
    },
    Call {
        cue: Cue,
        at: Position,
    },
    Spawn {
        tween: Tween,
    },
}

/// Test double that records operations and queues cues in schedule order.
#[derive(Debug, Default)]
pub struct RecordingTimeline {
    ops: Vec<TimelineOp>,
    pending_cues: VecDeque<Cue>,
}

impl RecordingTimeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ops(&self) -> &[TimelineOp] {
        &self.ops
    }

    /// Next cue that playback would deliver, if any.
    pub fn next_cue(&mut self) -> Option<Cue> {
        self.pending_cues.pop_front()
    }

    pub fn has_pending_cues(&self) -> bool {
        !self.pending_cues.is_empty()
    }

    /// Targets moved along a path so far.
    pub fn followed_paths(&self) -> Vec<(Node, &[Point])> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                TimelineOp::FollowPath { target, path, .. } => Some((*target, path.as_slice())),
                _ => None,
            })
            .collect()
    }

    pub fn count_cues(&self, cue: Cue) -> usize {
        self.ops
            .iter()
            .filter(|op| match op {
                TimelineOp::Call { cue: c, .. } | TimelineOp::Spacer { cue: c, .. } => *c == cue,
                _ => false,
            })
            .count()
    }
}

impl Timeline for RecordingTimeline {
    fn set(&mut self, target: Node, props: Props, at: Position) {
        self.ops.push(TimelineOp::Set { target, props, at });
    }

    fn follow_path(
        &mut self,
        target: Node,
        path: &[Point],
        duration: f32,
        curviness: f32,
        at: Position,
    ) {
        self.ops.push(TimelineOp::FollowPath {
            target,
            path: path.to_vec(),
            duration,
            curviness,
            at,
        });
    }

    fn spacer(&mut self, duration: f32, cue: Cue, at: Position) {
        self.ops.push(TimelineOp::Spacer { duration, cue, at });
        self.pending_cues.push_back(cue);
    }

    fn call(&mut self, cue: Cue, at: Position) {
        self.ops.push(TimelineOp::Call { cue, at });
        self.pending_cues.push_back(cue);
    }

    fn spawn(&mut self, tween: Tween) {
        self.ops.push(TimelineOp::Spawn { tween });
    }
}
