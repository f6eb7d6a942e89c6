//=========================================================================
// Scene System
//=========================================================================
//
// Loads a scene from configuration and drives it frame by frame.
//
// Architecture:
//   config text
//     └─► SceneParser ──► SceneDescription ──► SceneEngine
//                                                ├─ window: WindowSize
//                                                ├─ font: F
//                                                └─ shapes: Vec<MovingLabeledShape>
//
// Flow (per frame):
//   tick()   → window_bounce() + move_step() for every shape, in order
//   render() → draw_shape() + draw_text() for every shape, then present()
//
//=========================================================================

//=== Module Declarations =================================================

mod description;
mod parser;
mod registry;
mod tokens;

//=== Public API ==========================================================

pub use description::{SceneDescription, ShapeSpec};
pub use parser::SceneParser;
pub use registry::{ShapeFactory, ShapeRegistry};
pub use tokens::{ParseMode, Token, TokenReader};

//=== Standard Library Imports ============================================

use std::path::Path;

//=== External Crates =====================================================

use log::{debug, info};

//=== Internal Dependencies ===============================================

use crate::core::error::SceneError;
use crate::core::font::{FontProvider, TextMetrics};
use crate::core::geometry::WindowSize;
use crate::core::primitives::{LabelStyle, ShapePrimitive, TextPrimitive};
use crate::core::render::RenderSurface;
use crate::core::shape::MovingLabeledShape;

//=== SceneEngine =========================================================

/// Owns every live shape of a scene plus the window size and label font.
///
/// Built once from configuration; shapes are never added or removed
/// afterwards. Shapes only interact with the window boundary, never with
/// each other.
///
/// # Examples
///
/// ```no_run
/// use bounce_scene::core::font::FileFontProvider;
/// use bounce_scene::core::scene::{ParseMode, SceneEngine};
///
/// let mut scene = SceneEngine::load_file("config.txt", &FileFontProvider, ParseMode::Lenient)?;
/// for _ in 0..60 {
///     scene.tick();
/// }
/// # Ok::<(), bounce_scene::core::error::SceneError>(())
/// ```
pub struct SceneEngine<F> {
    window: WindowSize,
    font: F,
    label_style: LabelStyle,
    shapes: Vec<MovingLabeledShape>,
}

impl<F: TextMetrics> SceneEngine<F> {
    //--- Loading ----------------------------------------------------------

    /// Parses `text` and builds the scene.
    pub fn load<P>(text: &str, provider: &P, mode: ParseMode) -> Result<Self, SceneError>
    where
        P: FontProvider<Font = F>,
    {
        let description = SceneParser::new(provider).with_mode(mode).parse(text)?;
        Self::from_description(description)
    }

    /// Reads the configuration file at `path` and builds the scene.
    pub fn load_file<P>(path: impl AsRef<Path>, provider: &P, mode: ParseMode) -> Result<Self, SceneError>
    where
        P: FontProvider<Font = F>,
    {
        let description = SceneParser::new(provider).with_mode(mode).parse_file(path)?;
        Self::from_description(description)
    }

    /// Builds live shapes from a parsed description.
    ///
    /// # Errors
    ///
    /// [`SceneError::MissingDirective`] if the description has no window
    /// size or no font; labels cannot be created without a font.
    pub fn from_description(description: SceneDescription<F>) -> Result<Self, SceneError> {
        let window = description.window.ok_or(SceneError::MissingDirective("Window"))?;
        let font = description.font.ok_or(SceneError::MissingDirective("Font"))?;
        let label_style = description.label_style;

        let shapes: Vec<MovingLabeledShape> = description
            .shapes
            .into_iter()
            .map(|spec| {
                let label = TextPrimitive::new(spec.label, label_style, &font);
                MovingLabeledShape::new(
                    ShapePrimitive::new(spec.geometry),
                    label,
                    spec.fill,
                    spec.position,
                    spec.velocity,
                )
            })
            .collect();

        info!(
            target: "scene",
            "Scene loaded: {} shapes in {}x{} window",
            shapes.len(),
            window.width,
            window.height
        );

        Ok(Self {
            window,
            font,
            label_style,
            shapes,
        })
    }
}

impl<F> SceneEngine<F> {
    //--- Frame Loop -------------------------------------------------------

    /// Advances every shape by one frame: bounce, then move.
    pub fn tick(&mut self) {
        for shape in &mut self.shapes {
            shape.window_bounce(self.window);
            shape.move_step();
        }
    }

    /// Draws every shape followed by its label, then presents the frame.
    pub fn render<S>(&self, surface: &mut S) -> Result<(), S::Error>
    where
        S: RenderSurface<F>,
    {
        for shape in &self.shapes {
            surface.draw_shape(shape.geometry());
            surface.draw_text(shape.label(), &self.font);
        }
        surface.present()
    }

    /// Runs `poll → tick → render` until the surface reports a close.
    ///
    /// Returns the number of frames rendered.
    pub fn run<S>(&mut self, surface: &mut S) -> Result<u64, S::Error>
    where
        S: RenderSurface<F>,
    {
        let mut frames = 0u64;

        while !surface.poll_close_event() {
            self.tick();
            self.render(surface)?;
            frames += 1;
        }

        debug!(target: "scene", "Frame loop ended after {} frames", frames);
        Ok(frames)
    }

    //--- Accessors --------------------------------------------------------

    pub fn window(&self) -> WindowSize {
        self.window
    }

    pub fn label_style(&self) -> LabelStyle {
        self.label_style
    }

    /// Live shapes in declaration order.
    pub fn shapes(&self) -> &[MovingLabeledShape] {
        &self.shapes
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::font::testing::{FakeFonts, MonoMetrics};
    use crate::core::geometry::{Rgb, Vec2};
    use crate::core::primitives::Transformable;
    use crate::core::render::testing::{DrawCall, RecordingSurface};

    fn load(text: &str) -> Result<SceneEngine<MonoMetrics>, SceneError> {
        SceneEngine::load(text, &FakeFonts, ParseMode::Lenient)
    }

    const HEADER: &str = "Window 200 200\nFont fonts/tech.ttf 10 255 255 255\n";

    //=====================================================================
    // Loading
    //=====================================================================

    #[test]
    fn shape_count_matches_recognized_directives() {
        let text = format!(
            "{HEADER}Circle A 10 10 1 1 255 0 0 5\n\
             Square Nope 1 2 3\n\
             Rectangle B 50 50 1 1 0 255 0 10 20\n\
             Circle C 90 90 1 1 0 0 255 5\n"
        );

        let scene = load(&text).unwrap();

        assert_eq!(scene.len(), 3);
        assert!(!scene.is_empty());
    }

    #[test]
    fn config_with_no_shapes_is_valid() {
        let scene = load(HEADER).unwrap();

        assert!(scene.is_empty());
        assert_eq!(scene.window(), WindowSize::new(200, 200));
    }

    #[test]
    fn missing_font_file_builds_no_scene() {
        let text = "Window 200 200\nFont fonts/missing.ttf 10 255 255 255\nCircle A 10 10 1 1 255 0 0 5";

        let result = load(text);

        assert!(matches!(result, Err(SceneError::FontNotFound { .. })));
    }

    #[test]
    fn missing_window_directive_is_fatal() {
        let result = load("Font a.ttf 10 0 0 0\nCircle A 10 10 1 1 255 0 0 5");

        assert!(matches!(result, Err(SceneError::MissingDirective("Window"))));
    }

    #[test]
    fn missing_font_directive_is_fatal() {
        let result = load("Window 200 200\nCircle A 10 10 1 1 255 0 0 5");

        assert!(matches!(result, Err(SceneError::MissingDirective("Font"))));
    }

    #[test]
    fn missing_config_file_is_fatal() {
        let result = SceneEngine::load_file("no/such/config.txt", &FakeFonts, ParseMode::Lenient);

        assert!(matches!(result, Err(SceneError::ConfigNotFound { .. })));
    }

    #[test]
    fn labels_share_the_scene_style() {
        let text = format!("{HEADER}Circle A 10 10 1 1 255 0 0 5\nCircle Bee 10 10 1 1 0 0 0 5\n");

        let scene = load(&text).unwrap();

        assert_eq!(scene.label_style().font_size, 10);
        for shape in scene.shapes() {
            assert_eq!(shape.label().style(), scene.label_style());
        }
        assert_eq!(scene.shapes()[0].label().text(), "A");
        assert_eq!(scene.shapes()[1].label().text(), "Bee");
    }

    #[test]
    fn shapes_take_their_own_fill() {
        let text = format!("{HEADER}Circle A 10 10 1 1 255 0 0 5\n");

        let scene = load(&text).unwrap();

        assert_eq!(scene.shapes()[0].geometry().fill_color(), Rgb::new(255, 0, 0));
    }

    #[test]
    fn strict_mode_is_forwarded() {
        let text = format!("{HEADER}Triangle T 1 2 3\n");

        assert!(load(&text).is_ok());
        assert!(matches!(
            SceneEngine::load(&text, &FakeFonts, ParseMode::Strict),
            Err(SceneError::UnknownDirective { .. })
        ));
    }

    //=====================================================================
    // Tick
    //=====================================================================

    #[test]
    fn tick_moves_free_shape_by_velocity() {
        let text = format!("{HEADER}Rectangle A 10 10 3 -2 0 0 0 5 5\n");
        let mut scene = load(&text).unwrap();

        scene.tick();

        let shape = &scene.shapes()[0];
        assert_eq!(shape.position(), Vec2::new(13.0, 8.0));
        assert_eq!(shape.velocity(), Vec2::new(3.0, -2.0));
    }

    #[test]
    fn tick_moves_label_with_shape() {
        let text = format!("{HEADER}Rectangle A 10 10 3 -2 0 0 0 50 50\n");
        let mut scene = load(&text).unwrap();
        let before = scene.shapes()[0].label().position();

        scene.tick();

        assert_eq!(scene.shapes()[0].label().position(), before + Vec2::new(3.0, -2.0));
    }

    #[test]
    fn shapes_bounce_independently() {
        let text = format!(
            "{HEADER}Rectangle Out -5 50 -4 0 0 0 0 10 10\n\
             Rectangle In 100 100 2 3 0 0 0 10 10\n"
        );
        let mut scene = load(&text).unwrap();

        scene.tick();

        assert_eq!(scene.shapes()[0].velocity(), Vec2::new(4.0, 0.0));
        assert_eq!(scene.shapes()[0].position(), Vec2::new(-1.0, 50.0));
        assert_eq!(scene.shapes()[1].velocity(), Vec2::new(2.0, 3.0));
        assert_eq!(scene.shapes()[1].position(), Vec2::new(102.0, 103.0));
    }

    #[test]
    fn shapes_stay_in_window_over_many_ticks() {
        let text = format!(
            "{HEADER}Circle A 20 30 3 2 0 0 0 10\n\
             Rectangle B 120 40 -4 5 0 0 0 30 20\n"
        );
        let mut scene = load(&text).unwrap();

        for _ in 0..1_000 {
            scene.tick();
            for shape in scene.shapes() {
                let bounds = shape.geometry().global_bounds();
                // One step of overshoot is allowed before the bounce fires.
                assert!(bounds.left >= -5.0 && bounds.right() <= 205.0);
                assert!(bounds.top >= -5.0 && bounds.bottom() <= 205.0);
            }
        }
    }

    //=====================================================================
    // Render
    //=====================================================================

    #[test]
    fn render_draws_shape_then_label_in_order() {
        let text = format!(
            "{HEADER}Rectangle A 10 10 0 0 0 0 0 20 20\n\
             Rectangle B 50 50 0 0 0 0 0 20 20\n"
        );
        let scene = load(&text).unwrap();
        let mut surface = RecordingSurface::default();

        scene.render(&mut surface).unwrap();

        let a_label = scene.shapes()[0].label().position();
        let b_label = scene.shapes()[1].label().position();
        assert_eq!(
            surface.calls,
            vec![
                DrawCall::Shape(Vec2::new(10.0, 10.0)),
                DrawCall::Text("A".into(), a_label),
                DrawCall::Shape(Vec2::new(50.0, 50.0)),
                DrawCall::Text("B".into(), b_label),
                DrawCall::Present,
            ]
        );
    }

    #[test]
    fn run_ticks_and_renders_until_closed() {
        let text = format!("{HEADER}Rectangle A 10 10 1 0 0 0 0 20 20\n");
        let mut scene = load(&text).unwrap();
        let mut surface = RecordingSurface::closing_after(3);

        let frames = scene.run(&mut surface).unwrap();

        assert_eq!(frames, 3);
        assert_eq!(surface.presents(), 3);
        assert_eq!(scene.shapes()[0].position(), Vec2::new(13.0, 10.0));
    }

    #[test]
    fn run_on_closed_surface_renders_nothing() {
        let text = format!("{HEADER}Rectangle A 10 10 1 0 0 0 0 20 20\n");
        let mut scene = load(&text).unwrap();
        let mut surface = RecordingSurface::closing_after(0);

        assert_eq!(scene.run(&mut surface).unwrap(), 0);
        assert!(surface.calls.is_empty());
    }
}
