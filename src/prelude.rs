//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use bounce_scene::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Engine facade
pub use crate::engine::{Engine, EngineBuilder, EngineError};

// Scene loading
pub use crate::core::scene::{ParseMode, SceneEngine, SceneParser, ShapeRegistry};
pub use crate::core::SceneError;

// Shapes and geometry
pub use crate::core::geometry::{Bounds, Rgb, Vec2, WindowSize};
pub use crate::core::primitives::{LabelStyle, ShapeGeometry, Transformable};
pub use crate::core::shape::MovingLabeledShape;

// Seams
pub use crate::core::font::{FontProvider, TextMetrics};
pub use crate::core::render::RenderSurface;
