//! Pointer input edge cases: off-window presses, stray moves, overlapping
//! aim windows, re-pressing a finished actor, input after the round.

use crate::helpers::{TestGameBuilder, draw_into_gate, draw_to, gate_center, new_game};
use lanedraw::input::{GateOutcome, RoundPhase, RoundStatus};
use lanedraw::scene::Scene;
use lanedraw::types::{Actor, Node, PerActor, Point};
use std::time::Instant;

#[test]
fn test_press_outside_windows_is_noop() {
    let mut game = new_game();
    let started = game.handle_pointer_down(Point::new(500.0, 50.0), Instant::now());

    assert!(started.is_empty());
    assert_eq!(game.status(), RoundStatus::Idle);
    assert!(game.handle_pointer_up().is_empty());
}

#[test]
fn test_first_press_hides_hand() {
    let mut game = new_game();
    assert_eq!(game.scene().sprite(Node::Hand).alpha, 1.0);

    game.handle_pointer_down(Point::new(0.0, 0.0), Instant::now());
    assert_eq!(game.scene().sprite(Node::Hand).alpha, 0.0);
}

#[test]
fn test_moves_without_session_are_ignored() {
    let mut game = new_game();
    game.handle_pointer_move(Point::new(300.0, 300.0));
    game.handle_pointer_move(Point::new(310.0, 300.0));

    for actor in Actor::ALL {
        assert!(game.round().path(actor).is_empty());
        assert!(game.scene().stroke(actor).is_none());
    }
}

#[test]
fn test_stroke_mirrors_path() {
    let mut game = new_game();
    let home = game.layout().actor_home(Actor::Red);

    game.handle_pointer_down(home, Instant::now());
    game.handle_pointer_move(Point::new(280.0, 600.0));
    game.handle_pointer_move(Point::new(290.0, 560.0));

    let stroke = game.scene().stroke(Actor::Red).expect("red stroke drawn");
    assert_eq!(stroke.points, game.round().path(Actor::Red));
    assert_eq!(stroke.style.color, 0xd1191f);
    assert_eq!(stroke.style.width, 15.0);
    assert!(game.scene().stroke(Actor::Yellow).is_none());
}

#[test]
fn test_press_and_release_without_moves_never_animates() {
    let mut game = new_game();
    // Yellow already waits in its gate, so a red completion would animate.
    draw_into_gate(&mut game, Actor::Yellow, 3);

    let home = game.layout().actor_home(Actor::Red);
    game.handle_pointer_down(home, Instant::now());
    let outcomes = game.handle_pointer_up();

    assert_eq!(outcomes, vec![(Actor::Red, GateOutcome::Miss)]);
    assert!(game.timeline().followed_paths().is_empty());
    assert_eq!(game.phase(), RoundPhase::Drawing);
}

#[test]
fn test_aim_window_follows_car_position() {
    let mut game = new_game();
    let old_home = game.layout().actor_home(Actor::Red);
    game.scene_mut().set_position(Node::RedCar, Point::new(100.0, 200.0));

    let started = game.handle_pointer_down(old_home, Instant::now());
    assert!(started.is_empty());

    let started = game.handle_pointer_down(Point::new(100.0, 200.0), Instant::now());
    assert_eq!(started, vec![Actor::Red]);
}

#[test]
fn test_overlapping_windows_share_one_stroke() {
    // On a narrow screen the two aim windows overlap and the gates touch at x = 250.
    let mut game = TestGameBuilder::new().with_screen(500.0, 800.0).build();

    let started = game.handle_pointer_down(Point::new(250.0, 640.0), Instant::now());
    assert_eq!(started, vec![Actor::Red, Actor::Yellow]);

    game.handle_pointer_move(Point::new(250.0, 400.0));
    game.handle_pointer_move(Point::new(250.0, 100.0));
    let outcomes = game.handle_pointer_up();

    assert_eq!(
        outcomes,
        vec![(Actor::Red, GateOutcome::Hit), (Actor::Yellow, GateOutcome::Hit)]
    );
    assert_eq!(game.phase(), RoundPhase::Animating);
    assert_eq!(game.timeline().followed_paths().len(), 2);
}

#[test]
fn test_repress_keeps_completion_and_clears_path() {
    let mut game = new_game();
    draw_into_gate(&mut game, Actor::Red, 4);
    assert!(game.round().completed().red);

    let home = game.layout().actor_home(Actor::Red);
    game.handle_pointer_down(home, Instant::now());
    assert_eq!(game.round().capturing(), PerActor::new(true, false));
    assert_eq!(game.round().completed(), PerActor::new(true, false));
    assert!(game.round().path(Actor::Red).is_empty());
    assert!(game.scene().stroke(Actor::Red).is_none());
}

#[test]
fn test_gate_miss_keeps_earlier_completion() {
    let mut game = new_game();
    draw_into_gate(&mut game, Actor::Red, 4);

    let home = game.layout().actor_home(Actor::Red);
    let outcomes = draw_to(&mut game, home, Point::new(900.0, 100.0), 3);
    assert_eq!(outcomes, vec![(Actor::Red, GateOutcome::Miss)]);
    assert!(game.round().completed().red);
    assert!(game.round().path(Actor::Red).is_empty());
    assert_eq!(game.status(), RoundStatus::Pending);
}

#[test]
fn test_press_elsewhere_keeps_capturing_path() {
    let mut game = new_game();
    let home = game.layout().actor_home(Actor::Red);
    game.handle_pointer_down(home, Instant::now());
    game.handle_pointer_move(Point::new(280.0, 600.0));
    game.handle_pointer_move(Point::new(290.0, 560.0));

    game.handle_pointer_down(Point::new(500.0, 50.0), Instant::now());
    assert!(!game.round().capturing().red);
    assert_eq!(game.round().path(Actor::Red).len(), 2);

    let stroke = game.scene().stroke(Actor::Red).expect("stroke stays drawn");
    assert_eq!(stroke.points, game.round().path(Actor::Red));

    // Further moves no longer extend it.
    game.handle_pointer_move(Point::new(300.0, 500.0));
    assert_eq!(game.round().path(Actor::Red).len(), 2);
}

#[test]
fn test_press_elsewhere_keeps_pending_actor() {
    let mut game = new_game();
    draw_into_gate(&mut game, Actor::Red, 4);
    let path = game.round().path(Actor::Red).to_vec();

    game.handle_pointer_down(Point::new(500.0, 50.0), Instant::now());
    assert!(game.round().completed().red);
    assert_eq!(game.round().path(Actor::Red), path.as_slice());
}

#[test]
fn test_input_ignored_once_animating() {
    let mut game = new_game();
    draw_into_gate(&mut game, Actor::Red, 3);
    draw_into_gate(&mut game, Actor::Yellow, 3);
    assert_eq!(game.phase(), RoundPhase::Animating);

    let home = game.layout().actor_home(Actor::Red);
    assert!(game.handle_pointer_down(home, Instant::now()).is_empty());
    game.handle_pointer_move(gate_center(&game, Actor::Red));
    assert!(game.handle_pointer_up().is_empty());
    assert_eq!(game.round().path(Actor::Red).len(), 3);
}

#[test]
fn test_gate_edge_is_inclusive() {
    // Ending one pixel past the gate edge is a miss.
    let mut game = new_game();
    let gate = game.gate(Actor::Red);
    let home = game.layout().actor_home(Actor::Red);

    let outcomes = draw_to(&mut game, home, Point::new(gate.x.to + 1.0, gate.y.to), 3);
    assert_eq!(outcomes, vec![(Actor::Red, GateOutcome::Miss)]);

    let outcomes = draw_to(&mut game, home, Point::new(gate.x.to, gate.y.to), 3);
    assert_eq!(outcomes, vec![(Actor::Red, GateOutcome::Hit)]);
}
