//=========================================================================
// Bounce Scene Engine
//
// Main entry point: loads a scene from a config file, opens a window of
// the configured size and runs the frame loop until the window closes.
//
// Architecture:
// ```text
//     EngineBuilder  ──build()──>  Engine  ──run()──>  [Frame Loop]
//         │                          │
//         ├─ with_frame_rate()       ├─ SceneEngine::load_file()
//         ├─ with_title()            ├─ WindowSurface::create()
//         └─ with_parse_mode()       └─ poll → tick → render
// ```
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::path::{Path, PathBuf};

//=== External Dependencies ===============================================

use log::info;
use thiserror::Error;

//=== Internal Dependencies ===============================================

use crate::core::font::FileFontProvider;
use crate::core::scene::{ParseMode, SceneEngine};
use crate::core::SceneError;
use crate::platform::{PlatformError, WindowSurface};

//=== EngineError =========================================================

/// Anything that stops [`Engine::run`].
#[derive(Debug, Error)]
pub enum EngineError {
    #[error(transparent)]
    Scene(#[from] SceneError),

    #[error(transparent)]
    Platform(#[from] PlatformError),
}

//=== EngineBuilder =======================================================

/// Builder for configuring and constructing an [`Engine`].
///
/// # Default Values
///
/// - **Frame rate**: 60 frames per second
/// - **Title**: `"MovingColoredShapes"`
/// - **Parse mode**: [`ParseMode::Lenient`]
///
/// # Examples
///
/// Simple usage with defaults:
/// ```no_run
/// use bounce_scene::EngineBuilder;
///
/// EngineBuilder::new("config.txt").build().run()?;
/// # Ok::<(), bounce_scene::EngineError>(())
/// ```
///
/// Advanced configuration:
/// ```no_run
/// use bounce_scene::EngineBuilder;
/// use bounce_scene::core::scene::ParseMode;
///
/// EngineBuilder::new("config.txt")
///     .with_frame_rate(144)
///     .with_title("Shapes")
///     .with_parse_mode(ParseMode::Strict)
///     .build()
///     .run()?;
/// # Ok::<(), bounce_scene::EngineError>(())
/// ```
pub struct EngineBuilder {
    config_path: PathBuf,
    frame_rate: u32,
    title: String,
    parse_mode: ParseMode,
}

impl EngineBuilder {
    /// Creates a builder for the scene described by `config_path`.
    pub fn new(config_path: impl AsRef<Path>) -> Self {
        Self {
            config_path: config_path.as_ref().to_path_buf(),
            frame_rate: 60,
            title: "MovingColoredShapes".to_owned(),
            parse_mode: ParseMode::Lenient,
        }
    }

    /// Sets the frame-rate cap.
    ///
    /// Shapes move by their velocity once per frame, so this also sets how
    /// fast they travel on screen.
    ///
    /// Default: 60
    ///
    /// # Panics
    ///
    /// Panics if `frame_rate == 0`.
    pub fn with_frame_rate(mut self, frame_rate: u32) -> Self {
        assert!(frame_rate > 0, "Frame rate must be positive, got {}", frame_rate);
        self.frame_rate = frame_rate;
        self
    }

    /// Sets the window title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets how malformed config input is treated.
    ///
    /// Default: [`ParseMode::Lenient`]
    pub fn with_parse_mode(mut self, parse_mode: ParseMode) -> Self {
        self.parse_mode = parse_mode;
        self
    }

    /// Builds the engine. Nothing is loaded or opened until [`Engine::run`].
    pub fn build(self) -> Engine {
        info!(
            "Building engine (config: {}, fps: {}, mode: {:?})",
            self.config_path.display(),
            self.frame_rate,
            self.parse_mode
        );

        Engine {
            config_path: self.config_path,
            frame_rate: self.frame_rate,
            title: self.title,
            parse_mode: self.parse_mode,
        }
    }
}

//=== Engine ==============================================================

/// Scene runtime.
///
/// Create via [`EngineBuilder`].
pub struct Engine {
    config_path: PathBuf,
    frame_rate: u32,
    title: String,
    parse_mode: ParseMode,
}

impl Engine {
    /// Loads the scene, opens the window and blocks until it is closed.
    ///
    /// # Lifecycle
    ///
    /// 1. Parses the config and builds every shape (fatal on error)
    /// 2. Opens a window of the configured size
    /// 3. Loops `poll_close_event → tick → render` at the frame-rate cap
    /// 4. Returns once the window reports a close
    ///
    /// # Errors
    ///
    /// [`EngineError::Scene`] if the config or font cannot be loaded,
    /// [`EngineError::Platform`] if the window cannot be opened or drawn.
    pub fn run(self) -> Result<(), EngineError> {
        info!("Loading scene from {}", self.config_path.display());

        //--- 1. Load the scene -------------------------------------------
        let mut scene = SceneEngine::load_file(&self.config_path, &FileFontProvider, self.parse_mode)?;

        //--- 2. Open the window ------------------------------------------
        let mut surface = WindowSurface::create(scene.window(), &self.title, self.frame_rate)?;

        //--- 3. Frame loop -----------------------------------------------
        let frames = scene.run(&mut surface)?;

        info!("Engine shutdown complete after {} frames", frames);
        Ok(())
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    //=====================================================================
    // EngineBuilder Tests
    //=====================================================================

    #[test]
    fn builder_defaults() {
        let builder = EngineBuilder::new("config.txt");
        assert_eq!(builder.config_path, PathBuf::from("config.txt"));
        assert_eq!(builder.frame_rate, 60);
        assert_eq!(builder.title, "MovingColoredShapes");
        assert_eq!(builder.parse_mode, ParseMode::Lenient);
    }

    #[test]
    fn builder_with_frame_rate() {
        let builder = EngineBuilder::new("config.txt").with_frame_rate(120);
        assert_eq!(builder.frame_rate, 120);
    }

    #[test]
    #[should_panic(expected = "Frame rate must be positive")]
    fn builder_with_frame_rate_panics_on_zero() {
        EngineBuilder::new("config.txt").with_frame_rate(0);
    }

    #[test]
    fn builder_fluent_api_chaining() {
        let engine = EngineBuilder::new("scenes/demo.txt")
            .with_frame_rate(30)
            .with_title("Demo")
            .with_parse_mode(ParseMode::Strict)
            .build();

        assert_eq!(engine.config_path, PathBuf::from("scenes/demo.txt"));
        assert_eq!(engine.frame_rate, 30);
        assert_eq!(engine.title, "Demo");
        assert_eq!(engine.parse_mode, ParseMode::Strict);
    }

    //=====================================================================
    // Engine Tests
    //=====================================================================

    #[test]
    fn run_fails_on_missing_config_before_opening_a_window() {
        let result = EngineBuilder::new("no/such/scene.txt").build().run();

        assert!(matches!(
            result,
            Err(EngineError::Scene(SceneError::ConfigNotFound { .. }))
        ));
    }

    #[test]
    fn run_fails_on_missing_font_before_opening_a_window() {
        let path = std::env::temp_dir().join("bounce_scene_engine_missing_font.txt");
        std::fs::write(
            &path,
            "Window 640 480\nFont no/such/font.ttf 18 255 255 255\nCircle C 1 1 1 1 0 0 0 5\n",
        )
        .unwrap();

        let result = EngineBuilder::new(&path).build().run();

        assert!(matches!(
            result,
            Err(EngineError::Scene(SceneError::FontNotFound { .. }))
        ));
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn engine_error_wraps_scene_error_transparently() {
        let err = EngineError::from(SceneError::MissingDirective("Window"));
        assert_eq!(err.to_string(), "config has no `Window` directive");
    }
}
