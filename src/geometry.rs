//! Hit testing primitives: aim windows around actors and gate boxes
//! between lane markings.
//!
//! All checks are inclusive axis-aligned containment. Gate checks look at the
//! final recorded point only.

use crate::constants::{AIM_OFFSET_X, AIM_OFFSET_Y};
use crate::types::{AimWindow, FromTo, GateBox, MarkingLine, MinMax, Point};

/// Default aim window half-extents
pub const DEFAULT_AIM_OFFSET: (f32, f32) = (AIM_OFFSET_X, AIM_OFFSET_Y);

/// Rectangle centered on `actor` extended by `offset` on each axis.
pub fn compute_aim_window(actor: Point, offset: (f32, f32)) -> AimWindow {
    let (offset_x, offset_y) = offset;
    AimWindow {
        x: MinMax {
            min: actor.x - offset_x,
            max: actor.x + offset_x,
        },
        y: MinMax {
            min: actor.y - offset_y,
            max: actor.y + offset_y,
        },
    }
}

#[inline]
pub fn is_point_in_window(point: Point, window: &AimWindow) -> bool {
    window.x.contains(point.x) && window.y.contains(point.y)
}

/// Gate box spanning from `line_a` to `line_b` horizontally and from the top
/// of `line_a` to its height vertically.
///
/// The caller must pass the lines left to right. Swapped arguments produce a
/// box with `x.from > x.to` that rejects every point; this is not corrected
/// here (see [`GateBox::is_well_formed`]).
pub fn compute_gate_box(line_a: &MarkingLine, line_b: &MarkingLine) -> GateBox {
    GateBox {
        x: FromTo {
            from: line_a.x,
            to: line_b.x,
        },
        y: FromTo {
            from: line_a.y,
            to: line_a.height,
        },
    }
}

/// True if the last point of `path` lies inside `gate`. Empty paths never
/// pass.
pub fn is_path_end_in_gate_box(gate: &GateBox, path: &[Point]) -> bool {
    let Some(&Point { x, y }) = path.last() else {
        return false;
    };
    gate.x.contains(x) && gate.y.contains(y)
}
