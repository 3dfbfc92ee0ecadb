//! Game controller - owns the round state and both collaborators.
//!
//! All entry points (`handle_pointer_*`, [`GameController::tick`],
//! [`GameController::handle_cue`]) run to completion on the host's event
//! loop. Nothing here blocks or spawns threads.

use crate::config::GameConfig;
use crate::constants::HAND_GLIDE_DURATION;
use crate::input::{RoundPhase, RoundState, RoundStatus};
use crate::layout::Layout;
use crate::scene::{Scene, setup_scene};
use crate::sequencer::{AnimationSequencer, MotionOutcome};
use crate::timeline::{Cue, Props, Timeline, Tween};
use crate::types::{Actor, GateBox, Node, PerActor, StrokeStyle};
use crate::watchdog::InactivityWatchdog;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Navigation the host should perform after the exit button is clicked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExitRequest {
    pub url: String,
}

pub struct GameController<S: Scene, T: Timeline> {
    pub(crate) scene: S,
    pub(crate) timeline: T,
    pub(crate) config: GameConfig,
    pub(crate) layout: Layout,
    pub(crate) gates: PerActor<GateBox>,
    pub(crate) round: RoundState,
    pub(crate) watchdog: InactivityWatchdog,
    pub(crate) sequencer: AnimationSequencer,
    /// Pointer handlers are attached until the round reverts
    pub(crate) input_attached: bool,
    pub(crate) exit_enabled: bool,
}

impl<S: Scene, T: Timeline> GameController<S, T> {
    /// Lay out the scene, start the tutorial hand, and arm the watchdog.
    pub fn new(mut scene: S, mut timeline: T, config: GameConfig, layout: Layout, now: Instant) -> Self {
        setup_scene(&mut scene, &layout);
        let gates = layout.gate_boxes();

        timeline.spawn(Tween::new(
            vec![Node::Hand],
            Props::position(layout.hand_target),
            HAND_GLIDE_DURATION,
        ));

        let mut watchdog = InactivityWatchdog::new(config.inactivity_timeout());
        watchdog.rearm(now);

        info!(
            width = layout.screen.width,
            height = layout.screen.height,
            "round ready"
        );

        Self {
            scene,
            timeline,
            sequencer: AnimationSequencer::from_config(&config),
            config,
            layout,
            gates,
            round: RoundState::new(),
            watchdog,
            input_attached: true,
            exit_enabled: false,
        }
    }

    pub fn scene(&self) -> &S {
        &self.scene
    }

    pub fn scene_mut(&mut self) -> &mut S {
        &mut self.scene
    }

    pub fn timeline(&self) -> &T {
        &self.timeline
    }

    pub fn timeline_mut(&mut self) -> &mut T {
        &mut self.timeline
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn round(&self) -> &RoundState {
        &self.round
    }

    pub fn gate(&self, actor: Actor) -> GateBox {
        self.gates[actor]
    }

    pub fn phase(&self) -> RoundPhase {
        self.round.phase
    }

    pub fn status(&self) -> RoundStatus {
        self.round.status()
    }

    pub fn watchdog(&self) -> &InactivityWatchdog {
        &self.watchdog
    }

    pub fn is_input_attached(&self) -> bool {
        self.input_attached
    }

    pub fn is_exit_enabled(&self) -> bool {
        self.exit_enabled
    }

    pub(crate) fn accepts_input(&self) -> bool {
        self.input_attached && self.round.phase.accepts_input()
    }

    pub(crate) fn stroke_style(&self, actor: Actor) -> StrokeStyle {
        StrokeStyle {
            width: self.config.stroke_width,
            ..actor.stroke_style()
        }
    }

    /// Advance the inactivity watchdog. Returns true if it fired and the
    /// round was forced into its wind-down.
    pub fn tick(&mut self, now: Instant) -> bool {
        if !self.watchdog.poll(now) {
            return false;
        }
        if !self.round.phase.accepts_input() {
            debug!(phase = ?self.round.phase, "watchdog fired after round ended, ignoring");
            return false;
        }

        warn!(
            timeout_ms = self.config.inactivity_timeout_ms,
            status = ?self.round.status(),
            "inactivity timeout, winding down round"
        );
        self.round.phase = RoundPhase::Resetting;
        self.sequencer.fade_and_restore(&mut self.timeline);
        true
    }

    /// Join barrier: once both actors are complete, hand both paths to the
    /// sequencer and queue the wind-down.
    pub(crate) fn try_start_animation(&mut self) -> bool {
        if !self.round.phase.accepts_input() || !self.round.both_complete() {
            return false;
        }

        let paths = PerActor::from_fn(|actor| self.round.path(actor).to_vec());
        let outcomes = self.sequencer.animate(&mut self.timeline, &paths);

        self.round.phase = if outcomes.all(|o| *o == MotionOutcome::Moving) {
            RoundPhase::Animating
        } else {
            RoundPhase::Failed
        };
        info!(phase = ?self.round.phase, "both paths complete");

        self.watchdog.cancel();
        self.sequencer.fade_and_restore(&mut self.timeline);
        true
    }

    /// React to a cue emitted by the timeline.
    pub fn handle_cue(&mut self, cue: Cue) {
        debug!(?cue, phase = ?self.round.phase, "cue");
        match cue {
            Cue::FadeDecorations => {
                if matches!(self.round.phase, RoundPhase::Finished) {
                    return;
                }
                self.sequencer.fade_decorations(&mut self.timeline);
            }
            Cue::BeginWindDown => {
                match self.round.phase {
                    RoundPhase::Animating | RoundPhase::Failed => {
                        self.round.phase = RoundPhase::Resetting;
                    }
                    RoundPhase::Resetting => {}
                    RoundPhase::Drawing | RoundPhase::Finished => {
                        debug!(phase = ?self.round.phase, "stray wind-down cue");
                        return;
                    }
                }
                self.scene.set_visible(Node::Overlay, true);
                self.sequencer.wind_down(&mut self.timeline);
            }
            Cue::RevertToInitial => {
                if matches!(self.round.phase, RoundPhase::Drawing | RoundPhase::Finished) {
                    debug!(phase = ?self.round.phase, "stray revert cue");
                    return;
                }
                self.revert_to_initial();
            }
        }
    }

    /// Restore the scene, clear all sessions, detach input, and enable the
    /// exit button. A round plays once per load.
    fn revert_to_initial(&mut self) {
        self.sequencer.restore(&mut self.timeline);

        self.scene.set_visible(Node::Overlay, true);
        self.scene.set_visible(Node::Hand, false);
        self.scene.set_visible(Node::FailSign, false);
        self.scene.set_alpha(Node::GameLogo, 1.0);
        self.scene.set_alpha(Node::ExitButton, 1.0);

        self.round.clear_sessions();
        for actor in Actor::ALL {
            self.scene.set_position(actor.car(), self.layout.actor_home(actor));
            self.scene.clear_stroke(actor);
        }

        self.round.phase = RoundPhase::Finished;
        self.watchdog.cancel();
        self.input_attached = false;
        self.exit_enabled = true;
        info!("round finished, input detached");
    }

    /// Exit button click. Live only after the round has finished.
    pub fn handle_exit_click(&self) -> Option<ExitRequest> {
        if !self.exit_enabled {
            return None;
        }
        info!(url = %self.config.exit_url, "exit requested");
        Some(ExitRequest {
            url: self.config.exit_url.clone(),
        })
    }
}
