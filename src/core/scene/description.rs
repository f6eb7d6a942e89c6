//=========================================================================
// Scene Description
//=========================================================================
//
// Parser output: everything the configuration declared, before any live
// shape or label exists.
//
//=========================================================================

use crate::core::geometry::{Rgb, Vec2, WindowSize};
use crate::core::primitives::{LabelStyle, ShapeGeometry};

/// One shape directive, fully read.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeSpec {
    /// Registered kind name the directive used (`Circle`, `Rectangle`, ...).
    pub kind: String,
    pub geometry: ShapeGeometry,
    pub label: String,
    pub position: Vec2,
    pub velocity: Vec2,
    pub fill: Rgb,
}

/// Typed result of parsing a configuration.
///
/// `window` and `font` stay `None` when their directive never appeared;
/// the scene engine decides whether that is fatal.
pub struct SceneDescription<F> {
    pub window: Option<WindowSize>,
    pub font: Option<F>,
    pub label_style: LabelStyle,
    pub shapes: Vec<ShapeSpec>,
}

impl<F> SceneDescription<F> {
    pub fn new() -> Self {
        Self {
            window: None,
            font: None,
            label_style: LabelStyle::default(),
            shapes: Vec::new(),
        }
    }
}

impl<F> Default for SceneDescription<F> {
    fn default() -> Self {
        Self::new()
    }
}
