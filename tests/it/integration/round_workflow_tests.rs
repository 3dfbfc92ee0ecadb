//! Round Workflow Integration Tests

use crate::helpers::{
    assert_round_reset, draw_into_gate, draw_to, new_game, play_cues, timeline_summary,
};
use lanedraw::input::{GateOutcome, RoundPhase, RoundStatus};
use lanedraw::timeline::Cue;
use lanedraw::types::{Actor, Node, PerActor, Point};
use std::time::Instant;

#[test]
fn test_successful_round() {
    let mut game = new_game();
    assert_eq!(game.status(), RoundStatus::Idle);

    let outcomes = draw_into_gate(&mut game, Actor::Red, 6);
    assert_eq!(outcomes, vec![(Actor::Red, GateOutcome::Hit)]);
    assert_eq!(game.status(), RoundStatus::Pending);
    assert!(game.timeline().followed_paths().is_empty());

    let outcomes = draw_into_gate(&mut game, Actor::Yellow, 6);
    assert_eq!(outcomes, vec![(Actor::Yellow, GateOutcome::Hit)]);
    assert_eq!(game.phase(), RoundPhase::Animating);

    let followed = game.timeline().followed_paths();
    assert_eq!(followed.len(), 2);
    assert_eq!(followed[0].0, Node::RedCar);
    assert_eq!(followed[0].1.len(), 6);
    assert_eq!(followed[1].0, Node::YellowCar);
    assert!(game.timeline().has_pending_cues());

    play_cues(&mut game);
    assert!(!game.timeline().has_pending_cues());

    assert_eq!(game.status(), RoundStatus::Finished);
    assert_round_reset(&game);
    assert!(!game.is_input_attached());
    assert!(game.is_exit_enabled());
    assert!(!game.scene().sprite(Node::Hand).visible);
    assert!(!game.scene().sprite(Node::FailSign).visible);
    assert!(game.scene().sprite(Node::Overlay).visible);
    assert_eq!(game.scene().sprite(Node::ExitButton).alpha, 1.0);
}

#[test]
fn test_successful_round_timeline() {
    let mut game = new_game();
    draw_into_gate(&mut game, Actor::Red, 6);
    draw_into_gate(&mut game, Actor::Yellow, 6);
    play_cues(&mut game);

    insta::assert_json_snapshot!(timeline_summary(&game), @r#"
    [
      "spawn Hand -> position",
      "set RedCar -> position",
      "follow RedCar (6 points)",
      "set YellowCar -> position",
      "follow YellowCar (6 points)",
      "call FadeDecorations",
      "call BeginWindDown",
      "spacer -> RevertToInitial",
      "spawn 17 nodes -> alpha",
      "spawn Overlay -> alpha",
      "spawn FailSign -> alpha+scale",
      "spawn FailSign -> alpha+scale",
      "spawn 15 nodes -> alpha",
      "spawn 2 nodes -> scale"
    ]
    "#);
}

#[test]
fn test_motion_starts_at_first_point() {
    let mut game = new_game();
    draw_into_gate(&mut game, Actor::Red, 4);
    draw_into_gate(&mut game, Actor::Yellow, 4);

    let first_red = game.round().path(Actor::Red)[0];
    let set_red = game.timeline().ops().iter().find_map(|op| match op {
        lanedraw::timeline::TimelineOp::Set { target: Node::RedCar, props, .. } => props.position,
        _ => None,
    });
    assert_eq!(set_red, Some(first_red));
}

#[test]
fn test_short_paths_fail_without_motion() {
    let mut game = new_game();

    // One move lands directly in the gate: the check passes with a single point.
    draw_into_gate(&mut game, Actor::Red, 1);
    draw_into_gate(&mut game, Actor::Yellow, 1);

    assert_eq!(game.phase(), RoundPhase::Failed);
    assert!(game.timeline().followed_paths().is_empty());
    assert_eq!(game.timeline().count_cues(Cue::FadeDecorations), 0);
    assert_eq!(game.timeline().count_cues(Cue::RevertToInitial), 1);

    play_cues(&mut game);
    assert_eq!(game.status(), RoundStatus::Finished);
    assert_round_reset(&game);
}

#[test]
fn test_one_short_path_still_moves_the_other() {
    let mut game = new_game();
    draw_into_gate(&mut game, Actor::Red, 5);
    draw_into_gate(&mut game, Actor::Yellow, 1);

    assert_eq!(game.phase(), RoundPhase::Failed);
    let followed = game.timeline().followed_paths();
    assert_eq!(followed.len(), 1);
    assert_eq!(followed[0].0, Node::RedCar);
}

#[test]
fn test_bare_repress_on_finished_actor_fails_round() {
    let mut game = new_game();
    draw_into_gate(&mut game, Actor::Red, 4);

    // Press and release on red again: its path empties but it stays complete.
    let home = game.layout().actor_home(Actor::Red);
    game.handle_pointer_down(home, Instant::now());
    assert_eq!(game.handle_pointer_up(), vec![(Actor::Red, GateOutcome::Miss)]);
    assert_eq!(game.round().completed(), PerActor::new(true, false));

    draw_into_gate(&mut game, Actor::Yellow, 4);
    assert_eq!(game.phase(), RoundPhase::Failed);
    let followed = game.timeline().followed_paths();
    assert_eq!(followed.len(), 1);
    assert_eq!(followed[0].0, Node::YellowCar);

    play_cues(&mut game);
    assert_eq!(game.status(), RoundStatus::Finished);
    assert_round_reset(&game);
}

#[test]
fn test_wind_down_is_queued_once() {
    let mut game = new_game();
    draw_into_gate(&mut game, Actor::Red, 3);
    draw_into_gate(&mut game, Actor::Yellow, 3);

    assert_eq!(game.timeline().count_cues(Cue::BeginWindDown), 1);
    assert_eq!(game.timeline().count_cues(Cue::RevertToInitial), 1);
}

#[test]
fn test_completion_flags_are_independent() {
    let mut game = new_game();
    draw_into_gate(&mut game, Actor::Yellow, 4);

    assert_eq!(game.round().completed(), PerActor::new(false, true));
    assert_eq!(game.round().capturing(), PerActor::new(false, false));
    assert!(game.round().path(Actor::Red).is_empty());
}

#[test]
fn test_gate_miss_then_retry() {
    let mut game = new_game();
    let home = game.layout().actor_home(Actor::Red);

    let outcomes = draw_to(&mut game, home, Point::new(900.0, 100.0), 5);
    assert_eq!(outcomes, vec![(Actor::Red, GateOutcome::Miss)]);
    assert_eq!(game.status(), RoundStatus::Idle);
    assert!(game.round().path(Actor::Red).is_empty());
    assert!(game.scene().stroke(Actor::Red).is_none());

    let outcomes = draw_into_gate(&mut game, Actor::Red, 5);
    assert_eq!(outcomes, vec![(Actor::Red, GateOutcome::Hit)]);
    assert!(game.round().completed().red);
}

#[test]
fn test_miss_leaves_other_actor_pending() {
    let mut game = new_game();
    draw_into_gate(&mut game, Actor::Yellow, 4);
    let yellow_path = game.round().path(Actor::Yellow).to_vec();

    let home = game.layout().actor_home(Actor::Red);
    draw_to(&mut game, home, Point::new(100.0, 100.0), 4);

    assert!(game.round().completed().yellow);
    assert_eq!(game.round().path(Actor::Yellow), yellow_path.as_slice());
    assert_eq!(game.status(), RoundStatus::Pending);
}

#[test]
fn test_exit_only_after_round() {
    let mut game = new_game();
    assert!(game.handle_exit_click().is_none());

    draw_into_gate(&mut game, Actor::Red, 3);
    draw_into_gate(&mut game, Actor::Yellow, 3);
    assert!(game.handle_exit_click().is_none());

    play_cues(&mut game);
    let exit = game.handle_exit_click().expect("exit enabled after round");
    assert_eq!(exit.url, "https://roasup.com");
}

#[test]
fn test_cues_after_finish_are_ignored() {
    let mut game = new_game();
    draw_into_gate(&mut game, Actor::Red, 3);
    draw_into_gate(&mut game, Actor::Yellow, 3);
    play_cues(&mut game);
    let ops = game.timeline().ops().len();

    game.handle_cue(Cue::BeginWindDown);
    game.handle_cue(Cue::RevertToInitial);
    game.handle_cue(Cue::FadeDecorations);

    assert_eq!(game.status(), RoundStatus::Finished);
    assert_eq!(game.timeline().ops().len(), ops);
}
