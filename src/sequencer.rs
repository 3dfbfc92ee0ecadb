//! Animation sequencer - turns captured paths into timeline operations.
//!
//! Holds only durations; all scheduling goes through the injected
//! [`Timeline`]. Scene mutations that happen when a cue fires belong to the
//! controller.

use crate::config::GameConfig;
use crate::constants::*;
use crate::timeline::{Cue, Position, Props, Timeline, Tween};
use crate::types::{Actor, Node, PerActor, Point};
use tracing::{debug, info};

/// What [`AnimationSequencer::animate`] scheduled for each actor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotionOutcome {
    /// Car follows its path
    Moving,
    /// Path had fewer than two points; no motion
    TooShort,
}

#[derive(Debug, Clone)]
pub struct AnimationSequencer {
    motion_duration: f32,
    curviness: f32,
    decoration_fade: f32,
    fail_fade: f32,
    restore_fade: f32,
}

impl Default for AnimationSequencer {
    fn default() -> Self {
        Self::from_config(&GameConfig::default())
    }
}

impl AnimationSequencer {
    pub fn from_config(config: &GameConfig) -> Self {
        Self {
            motion_duration: config.motion_duration,
            curviness: config.motion_curviness,
            decoration_fade: config.decoration_fade,
            fail_fade: config.fail_fade,
            restore_fade: config.restore_fade,
        }
    }

    /// Schedule both cars along their paths.
    ///
    /// A path shorter than [`MIN_PATH_POINTS`] triggers the failure visual
    /// instead of motion for that actor. Every moving car starts at timeline
    /// time 0 so both drive together.
    pub fn animate<T: Timeline + ?Sized>(
        &self,
        timeline: &mut T,
        paths: &PerActor<Vec<Point>>,
    ) -> PerActor<MotionOutcome> {
        let outcomes = PerActor::from_fn(|actor| {
            if paths[actor].len() < MIN_PATH_POINTS {
                MotionOutcome::TooShort
            } else {
                MotionOutcome::Moving
            }
        });

        if outcomes.any(|o| *o == MotionOutcome::TooShort) {
            info!(?outcomes, "path too short, showing fail state");
            self.fail_state(timeline);
        }

        let mut any_moving = false;
        for actor in Actor::ALL {
            if outcomes[actor] != MotionOutcome::Moving {
                continue;
            }
            let path = &paths[actor];
            let car = actor.car();
            timeline.set(car, Props::position(path[0]), Position::End);
            timeline.follow_path(
                car,
                path,
                self.motion_duration,
                self.curviness,
                Position::At(0.0),
            );
            debug!(%actor, points = path.len(), "car scheduled along path");
            any_moving = true;
        }

        if any_moving {
            timeline.call(Cue::FadeDecorations, Position::End);
        }

        outcomes
    }

    /// Fade the scene out and bring the fail sign in.
    pub fn fail_state<T: Timeline + ?Sized>(&self, timeline: &mut T) {
        timeline.spawn(Tween::new(
            Node::DECORATIONS,
            Props::alpha(0.0),
            self.fail_fade,
        ));
        timeline.spawn(Tween::new(
            vec![Node::FailSign],
            Props::alpha(1.0),
            self.fail_fade,
        ));
    }

    /// Fade every decoration and both strokes to transparent.
    pub fn fade_decorations<T: Timeline + ?Sized>(&self, timeline: &mut T) {
        let mut targets = Node::DECORATIONS.to_vec();
        targets.extend(Actor::ALL.map(Actor::stroke));
        timeline.spawn(Tween::new(targets, Props::alpha(0.0), self.decoration_fade));
    }

    /// Queue the wind-down cue and the spacer that ends in the revert cue.
    pub fn fade_and_restore<T: Timeline + ?Sized>(&self, timeline: &mut T) {
        timeline.call(Cue::BeginWindDown, Position::FromEnd(WIND_DOWN_OFFSET));
        timeline.spacer(
            REVERT_SPACER_DURATION,
            Cue::RevertToInitial,
            Position::FromEnd(REVERT_SPACER_OFFSET),
        );
    }

    /// Dim the screen and pulse the fail sign in and back out.
    pub fn wind_down<T: Timeline + ?Sized>(&self, timeline: &mut T) {
        timeline.spawn(Tween::new(vec![Node::Overlay], Props::alpha(1.0), PULSE_DURATION));

        timeline.spawn(Tween::new(
            vec![Node::FailSign],
            Props {
                alpha: Some(1.0),
                scale: Some(PULSE_SCALE),
                ..Props::default()
            },
            PULSE_DURATION,
        ));
        timeline.spawn(
            Tween::new(
                vec![Node::FailSign],
                Props {
                    alpha: Some(0.0),
                    scale: Some(SMALL_SCALE),
                    ..Props::default()
                },
                PULSE_DURATION,
            )
            .with_delay(PULSE_OUT_DELAY),
        );
    }

    /// Fade the scene back in and grow the exit button and logo.
    pub fn restore<T: Timeline + ?Sized>(&self, timeline: &mut T) {
        timeline.spawn(Tween::new(
            Node::DECORATIONS,
            Props::alpha(1.0),
            self.restore_fade,
        ));
        timeline.spawn(Tween::new(
            vec![Node::ExitButton, Node::GameLogo],
            Props::scale(OUTRO_SCALE),
            self.restore_fade,
        ));
    }
}
