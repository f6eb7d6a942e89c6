//=========================================================================
// Moving Labeled Shape
//=========================================================================
//
// One shape, its centered label and its velocity.
//
// Per frame:
//   window_bounce(window) → flips velocity components on penetration
//   move_step()           → translates shape and label by velocity
//
// The label is positioned once at construction (shape position plus a
// centering offset) and afterwards only ever moves by the same delta as
// the shape, so the offset is preserved exactly.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::geometry::{Bounds, Rgb, Vec2, WindowSize};
use crate::core::primitives::{ShapePrimitive, TextPrimitive, Transformable};

//=== MovingLabeledShape ==================================================

/// A shape moving at constant velocity with a label centered on it.
///
/// Owns its shape and label exclusively. The only mutable state is the
/// position (carried by the primitives) and the velocity.
#[derive(Debug, Clone)]
pub struct MovingLabeledShape {
    geometry: ShapePrimitive,
    label: TextPrimitive,
    velocity: Vec2,
    label_offset: Vec2,
}

impl MovingLabeledShape {
    //--- Construction -----------------------------------------------------

    /// Places `geometry` at `position`, colors it, and centers `label` on it.
    ///
    /// The label must already carry its string; its bounds are read here to
    /// compute the centering offset.
    pub fn new(
        mut geometry: ShapePrimitive,
        mut label: TextPrimitive,
        fill: Rgb,
        position: Vec2,
        velocity: Vec2,
    ) -> Self {
        geometry.set_position(position);
        geometry.set_fill_color(fill);

        let label_offset = centering_offset(geometry.global_bounds(), label.local_bounds());
        label.set_position(position + label_offset);

        Self {
            geometry,
            label,
            velocity,
            label_offset,
        }
    }

    //--- Per-frame Update -------------------------------------------------

    /// Reverses each velocity component whose axis is out of the window.
    ///
    /// Both axes are checked on every call, so a corner hit flips both.
    /// A shape that is still outside after flipping flips again on the next
    /// call; no direction state is remembered between calls.
    pub fn window_bounce(&mut self, window: WindowSize) {
        let shape = self.geometry.global_bounds();
        let window = window.bounds();

        if window.left > shape.left || window.right() < shape.right() {
            self.velocity.x *= -1.0;
        }

        if window.top > shape.top || window.bottom() < shape.bottom() {
            self.velocity.y *= -1.0;
        }
    }

    /// Translates shape and label by the current velocity.
    pub fn move_step(&mut self) {
        self.geometry.move_by(self.velocity);
        self.label.move_by(self.velocity);
    }

    //--- Accessors --------------------------------------------------------

    pub fn geometry(&self) -> &ShapePrimitive {
        &self.geometry
    }

    pub fn label(&self) -> &TextPrimitive {
        &self.label
    }

    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    pub fn position(&self) -> Vec2 {
        self.geometry.position()
    }

    /// Fixed offset from the shape's position to the label's position.
    pub fn label_offset(&self) -> Vec2 {
        self.label_offset
    }
}

//=== Helpers =============================================================

/// Offset that centers a label's ink box inside a shape's box.
///
/// The label's own `left`/`top` (font bearing) are subtracted so the ink,
/// not the drawing origin, ends up centered.
fn centering_offset(shape: Bounds, label: Bounds) -> Vec2 {
    Vec2::new(
        shape.width / 2.0 - label.width / 2.0 - label.left,
        shape.height / 2.0 - label.height / 2.0 - label.top,
    )
}

//=========================================================================
// Unit Tests
//=========================================================================
