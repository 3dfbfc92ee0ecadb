//! Rendering collaborator interface.
//!
//! The game never draws anything itself. It reads car positions and pushes
//! property changes and stroke polylines through [`Scene`]. [`MemoryScene`]
//! keeps the same state in plain maps for headless runs and tests.

use crate::constants::{OVERLAY_COLOR, OVERLAY_OPACITY, SMALL_SCALE};
use crate::layout::{Layout, ScreenSize};
use crate::types::{Actor, Node, PerActor, Point, StrokeStyle};
use serde::Serialize;
use std::collections::HashMap;

/// Scene graph operations the game needs from the renderer.
pub trait Scene {
    fn position(&self, node: Node) -> Point;
    fn set_position(&mut self, node: Node, position: Point);
    fn set_alpha(&mut self, node: Node, alpha: f32);
    fn set_scale(&mut self, node: Node, scale: f32);
    fn set_visible(&mut self, node: Node, visible: bool);

    /// Replace the actor's stroke with a polyline through `path`.
    fn draw_stroke(&mut self, actor: Actor, path: &[Point], style: StrokeStyle);
    fn clear_stroke(&mut self, actor: Actor);

    /// Paint the overlay node as a solid rectangle covering `size`.
    fn fill_overlay(&mut self, size: ScreenSize, color: u32, opacity: f32);
}

/// Place every node at its layout position and apply the initial alpha and
/// scale values.
pub fn setup_scene<S: Scene + ?Sized>(scene: &mut S, layout: &Layout) {
    scene.fill_overlay(layout.screen, OVERLAY_COLOR, OVERLAY_OPACITY);
    for &(node, position) in layout.positions() {
        scene.set_position(node, position);
    }

    for node in [Node::ExitButton, Node::GameLogo, Node::FailSign, Node::Overlay] {
        scene.set_alpha(node, 0.0);
    }
    for node in [Node::FailSign, Node::ExitButton, Node::GameLogo] {
        scene.set_scale(node, SMALL_SCALE);
    }
}

/// Renderable properties of one node.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Sprite {
    pub position: Point,
    pub alpha: f32,
    pub scale: f32,
    pub visible: bool,
}

impl Default for Sprite {
    fn default() -> Self {
        Self {
            position: Point::default(),
            alpha: 1.0,
            scale: 1.0,
            visible: true,
        }
    }
}

/// A drawn stroke as last handed to the scene.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Stroke {
    pub points: Vec<Point>,
    pub style: StrokeStyle,
}

/// Solid fill painted into the overlay node.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct OverlayFill {
    pub size: ScreenSize,
    pub color: u32,
    pub opacity: f32,
}

/// In-memory scene for headless runs.
#[derive(Clone, Debug, Default)]
pub struct MemoryScene {
    sprites: HashMap<Node, Sprite>,
    strokes: PerActor<Option<Stroke>>,
    overlay: Option<OverlayFill>,
}

impl MemoryScene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_layout(layout: &Layout) -> Self {
        let mut scene = Self::new();
        setup_scene(&mut scene, layout);
        scene
    }

    pub fn sprite(&self, node: Node) -> Sprite {
        self.sprites.get(&node).copied().unwrap_or_default()
    }

    pub fn stroke(&self, actor: Actor) -> Option<&Stroke> {
        self.strokes[actor].as_ref()
    }

    pub fn overlay(&self) -> Option<OverlayFill> {
        self.overlay
    }

    fn sprite_mut(&mut self, node: Node) -> &mut Sprite {
        self.sprites.entry(node).or_default()
    }
}

impl Scene for MemoryScene {
    fn position(&self, node: Node) -> Point {
        self.sprite(node).position
    }

    fn set_position(&mut self, node: Node, position: Point) {
        self.sprite_mut(node).position = position;
    }

    fn set_alpha(&mut self, node: Node, alpha: f32) {
        self.sprite_mut(node).alpha = alpha;
    }

    fn set_scale(&mut self, node: Node, scale: f32) {
        self.sprite_mut(node).scale = scale;
    }

    fn set_visible(&mut self, node: Node, visible: bool) {
        self.sprite_mut(node).visible = visible;
    }

    fn draw_stroke(&mut self, actor: Actor, path: &[Point], style: StrokeStyle) {
        self.strokes[actor] = Some(Stroke {
            points: path.to_vec(),
            style,
        });
    }

    fn clear_stroke(&mut self, actor: Actor) {
        self.strokes[actor] = None;
    }

    fn fill_overlay(&mut self, size: ScreenSize, color: u32, opacity: f32) {
        self.overlay = Some(OverlayFill {
            size,
            color,
            opacity,
        });
    }
}
