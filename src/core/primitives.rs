//=========================================================================
// Drawable Primitives
//=========================================================================
//
// The two things that end up on screen: a filled shape and a text label.
//
// Both are plain data with a position and a local bounding box. Global
// bounds are always derived (`local + position`), so moving a primitive
// can never leave its bounds stale.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::font::TextMetrics;
use crate::core::geometry::{Bounds, Rgb, Vec2};

//=== Transformable =======================================================

/// Position and bounds queries shared by shapes and labels.
pub trait Transformable {
    fn position(&self) -> Vec2;

    fn set_position(&mut self, position: Vec2);

    /// Box occupied relative to the primitive's own origin.
    fn local_bounds(&self) -> Bounds;

    /// Translates the primitive by `delta`.
    fn move_by(&mut self, delta: Vec2) {
        let position = self.position();
        self.set_position(position + delta);
    }

    /// Box occupied in window coordinates at the current position.
    fn global_bounds(&self) -> Bounds {
        self.local_bounds().translated(self.position())
    }
}

//=== ShapeGeometry =======================================================

/// Kind-specific geometry of a shape, anchored at its top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShapeGeometry {
    /// Circle of `radius`; occupies a `2r x 2r` box.
    Circle { radius: f32 },

    /// Axis-aligned rectangle; `size.x` is the horizontal extent.
    Rectangle { size: Vec2 },
}

impl ShapeGeometry {
    pub fn local_bounds(&self) -> Bounds {
        match *self {
            Self::Circle { radius } => Bounds::new(0.0, 0.0, radius * 2.0, radius * 2.0),
            Self::Rectangle { size } => Bounds::new(0.0, 0.0, size.x, size.y),
        }
    }
}

//=== ShapePrimitive ======================================================

/// A filled shape placed in the window.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapePrimitive {
    geometry: ShapeGeometry,
    position: Vec2,
    fill: Rgb,
}

impl ShapePrimitive {
    /// Creates a white shape at the origin.
    pub fn new(geometry: ShapeGeometry) -> Self {
        Self {
            geometry,
            position: Vec2::ZERO,
            fill: Rgb::WHITE,
        }
    }

    pub fn geometry(&self) -> ShapeGeometry {
        self.geometry
    }

    pub fn fill_color(&self) -> Rgb {
        self.fill
    }

    pub fn set_fill_color(&mut self, fill: Rgb) {
        self.fill = fill;
    }
}

impl Transformable for ShapePrimitive {
    fn position(&self) -> Vec2 {
        self.position
    }

    fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    fn local_bounds(&self) -> Bounds {
        self.geometry.local_bounds()
    }
}

//=== LabelStyle ==========================================================

/// Character size and color shared by every label in a scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabelStyle {
    pub font_size: u32,
    pub fill: Rgb,
}

impl Default for LabelStyle {
    fn default() -> Self {
        Self {
            font_size: 30,
            fill: Rgb::WHITE,
        }
    }
}

//=== TextPrimitive =======================================================

/// A single-line text label.
///
/// The local bounds are measured once, when the string is set. Labels are
/// never restyled after creation, so the measurement stays valid.
#[derive(Debug, Clone, PartialEq)]
pub struct TextPrimitive {
    text: String,
    style: LabelStyle,
    position: Vec2,
    local_bounds: Bounds,
}

impl TextPrimitive {
    /// Creates a label at the origin, measured with `metrics`.
    pub fn new(text: impl Into<String>, style: LabelStyle, metrics: &impl TextMetrics) -> Self {
        let text = text.into();
        let local_bounds = metrics.measure(&text, style.font_size);
        Self {
            text,
            style,
            position: Vec2::ZERO,
            local_bounds,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn style(&self) -> LabelStyle {
        self.style
    }
}

impl Transformable for TextPrimitive {
    fn position(&self) -> Vec2 {
        self.position
    }

    fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    fn local_bounds(&self) -> Bounds {
        self.local_bounds
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
