//=========================================================================
// Core Systems
//
// Everything that does not touch the OS: scene configuration, shape
// kinematics and the interfaces the platform layer implements.
//
// Layout:
// - `geometry`:   vectors, bounding boxes, window size, colors
// - `primitives`: shape and text primitives (position + bounds)
// - `font`:       text measurement and font loading
// - `shape`:      moving labeled shape (centering, bounce, move)
// - `scene`:      config parser, shape registry and the scene engine
// - `render`:     the surface trait the scene draws through
// - `error`:      scene loading errors
//
// Notes:
// Nothing here depends on winit or softbuffer. The only rendering
// dependency is the `RenderSurface` trait, so the whole scene can be
// driven headless.
//
//=========================================================================

pub mod error;
pub mod font;
pub mod geometry;
pub mod primitives;
pub mod render;
pub mod scene;
pub mod shape;

//--- Re-exports ----------------------------------------------------------

pub use error::SceneError;
pub use font::{FileFontProvider, FontProvider, LabelFont, TextMetrics};
pub use geometry::{Bounds, Rgb, Vec2, WindowSize};
pub use primitives::{LabelStyle, ShapeGeometry, ShapePrimitive, TextPrimitive, Transformable};
pub use render::RenderSurface;
pub use scene::{ParseMode, SceneEngine, SceneParser};
pub use shape::MovingLabeledShape;
