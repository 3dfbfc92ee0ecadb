//! Spatial Index Module
//!
//! R-tree over the actors' aim windows. Rebuilt from fresh actor positions on
//! every pointer-down, then queried with the pointer location to find which
//! actors start a drawing session.

use crate::geometry::{compute_aim_window, is_point_in_window};
use crate::types::{Actor, AimWindow, Point};
use rstar::{AABB, RTree, RTreeObject};

/// An actor's aim window as stored in the tree.
#[derive(Debug, Clone, Copy)]
pub struct AimEntry {
    pub actor: Actor,
    pub window: AimWindow,
}

impl AimEntry {
    pub fn new(actor: Actor, position: Point, offset: (f32, f32)) -> Self {
        Self {
            actor,
            window: compute_aim_window(position, offset),
        }
    }

    #[inline]
    pub fn contains_point(&self, point: Point) -> bool {
        is_point_in_window(point, &self.window)
    }
}

impl RTreeObject for AimEntry {
    type Envelope = AABB<[f32; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners(
            [self.window.x.min, self.window.y.min],
            [self.window.x.max, self.window.y.max],
        )
    }
}

impl PartialEq for AimEntry {
    fn eq(&self, other: &Self) -> bool {
        self.actor == other.actor
    }
}

/// Aim windows keyed by actor.
pub struct AimIndex {
    tree: RTree<AimEntry>,
}

impl AimIndex {
    pub fn new() -> Self {
        Self { tree: RTree::new() }
    }

    /// Build an index from `(actor, position)` pairs using the given offset.
    pub fn from_positions<I>(positions: I, offset: (f32, f32)) -> Self
    where
        I: IntoIterator<Item = (Actor, Point)>,
    {
        let entries: Vec<AimEntry> = positions
            .into_iter()
            .map(|(actor, pos)| AimEntry::new(actor, pos, offset))
            .collect();

        Self {
            tree: RTree::bulk_load(entries),
        }
    }

    /// Actors whose aim window contains `point` (inclusive bounds).
    pub fn query_point(&self, point: Point) -> Vec<Actor> {
        let envelope = AABB::from_point([point.x, point.y]);

        self.tree
            .locate_in_envelope_intersecting(&envelope)
            .filter(|entry| entry.contains_point(point))
            .map(|entry| entry.actor)
            .collect()
    }

    pub fn window(&self, actor: Actor) -> Option<AimWindow> {
        self.tree
            .iter()
            .find(|entry| entry.actor == actor)
            .map(|entry| entry.window)
    }

    pub fn len(&self) -> usize {
        self.tree.size()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.size() == 0
    }
}

impl Default for AimIndex {
    fn default() -> Self {
        Self::new()
    }
}
