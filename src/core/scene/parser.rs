//=========================================================================
// Scene Descriptor Parser
//=========================================================================
//
// Single forward pass over the configuration, dispatching on directive
// keywords:
//
// ```text
// Window    <width> <height>
// Font      <path> <size> <r> <g> <b>
// <Kind>    <label> <x> <y> <vx> <vy> <r> <g> <b> <kind fields...>
// ```
//
// `<Kind>` is any name in the `ShapeRegistry`. Anything else is skipped
// in lenient mode and rejected in strict mode. Later `Window`/`Font`
// directives override earlier ones.
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::path::Path;

//=== External Crates =====================================================

use log::{debug, info, warn};

//=== Internal Dependencies ===============================================

use super::description::{SceneDescription, ShapeSpec};
use super::registry::{ShapeFactory, ShapeRegistry};
use super::tokens::{ParseMode, Token, TokenReader};
use crate::core::error::SceneError;
use crate::core::font::FontProvider;
use crate::core::geometry::{Rgb, Vec2, WindowSize};
use crate::core::primitives::LabelStyle;

//=== SceneParser =========================================================

/// Turns configuration text into a [`SceneDescription`].
///
/// Fonts are loaded through the given [`FontProvider`] as soon as their
/// directive is read; a font that cannot be loaded aborts parsing.
///
/// # Examples
///
/// ```no_run
/// use bounce_scene::core::font::FileFontProvider;
/// use bounce_scene::core::scene::{ParseMode, SceneParser};
///
/// let description = SceneParser::new(&FileFontProvider)
///     .with_mode(ParseMode::Strict)
///     .parse_file("config.txt")?;
/// println!("{} shapes", description.shapes.len());
/// # Ok::<(), bounce_scene::core::error::SceneError>(())
/// ```
pub struct SceneParser<'p, P: FontProvider> {
    provider: &'p P,
    registry: ShapeRegistry,
    mode: ParseMode,
}

impl<'p, P: FontProvider> SceneParser<'p, P> {
    //--- Construction -----------------------------------------------------

    /// Creates a lenient parser with the built-in shape kinds.
    pub fn new(provider: &'p P) -> Self {
        Self {
            provider,
            registry: ShapeRegistry::default(),
            mode: ParseMode::default(),
        }
    }

    pub fn with_mode(mut self, mode: ParseMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_registry(mut self, registry: ShapeRegistry) -> Self {
        self.registry = registry;
        self
    }

    //--- Parsing ----------------------------------------------------------

    /// Reads and parses the configuration file at `path`.
    ///
    /// # Errors
    ///
    /// [`SceneError::ConfigNotFound`] if the file cannot be read, plus
    /// anything [`SceneParser::parse`] returns.
    pub fn parse_file(&self, path: impl AsRef<Path>) -> Result<SceneDescription<P::Font>, SceneError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| SceneError::ConfigNotFound {
            path: path.to_path_buf(),
            source,
        })?;

        info!(target: "scene::parser", "Parsing config {}", path.display());
        self.parse(&text)
    }

    /// Parses configuration text.
    pub fn parse(&self, text: &str) -> Result<SceneDescription<P::Font>, SceneError> {
        let mut reader = TokenReader::new(text, self.mode);
        let mut description = SceneDescription::new();

        while let Some(token) = reader.next_token() {
            match token.text {
                "Window" => {
                    description.window = Some(Self::parse_window(&mut reader)?);
                }
                "Font" => {
                    let (font, style) = self.parse_font(&mut reader)?;
                    description.font = Some(font);
                    description.label_style = style;
                }
                keyword => match self.registry.get(keyword) {
                    Some(factory) => {
                        let spec = Self::parse_shape(keyword, factory, &mut reader)?;
                        description.shapes.push(spec);
                    }
                    None => self.skip_unknown(token)?,
                },
            }
        }

        debug!(
            target: "scene::parser",
            "Parsed {} shapes (window: {:?}, font: {})",
            description.shapes.len(),
            description.window,
            description.font.is_some()
        );

        Ok(description)
    }

    //--- Directives -------------------------------------------------------

    fn parse_window(reader: &mut TokenReader<'_>) -> Result<WindowSize, SceneError> {
        let width = reader.read_u32("width")?;
        let height = reader.read_u32("height")?;
        debug!(target: "scene::parser", "Window {}x{}", width, height);
        Ok(WindowSize::new(width, height))
    }

    fn parse_font(&self, reader: &mut TokenReader<'_>) -> Result<(P::Font, LabelStyle), SceneError> {
        let path = reader.read_string("font path")?;
        let font = self.provider.load_font(&path)?;

        let font_size = reader.read_u32("font size")?;
        let fill = Self::parse_color(reader)?;
        debug!(target: "scene::parser", "Label style {}px {:?}", font_size, fill);

        Ok((font, LabelStyle { font_size, fill }))
    }

    fn parse_shape(
        kind: &str,
        factory: ShapeFactory,
        reader: &mut TokenReader<'_>,
    ) -> Result<ShapeSpec, SceneError> {
        let label = reader.read_string("label")?;
        let x = reader.read_f32("x")?;
        let y = reader.read_f32("y")?;
        let vx = reader.read_f32("vx")?;
        let vy = reader.read_f32("vy")?;
        let fill = Self::parse_color(reader)?;
        let geometry = factory(reader)?;

        debug!(target: "scene::parser", "{} `{}` at ({}, {})", kind, label, x, y);

        Ok(ShapeSpec {
            kind: kind.to_owned(),
            geometry,
            label,
            position: Vec2::new(x, y),
            velocity: Vec2::new(vx, vy),
            fill,
        })
    }

    fn parse_color(reader: &mut TokenReader<'_>) -> Result<Rgb, SceneError> {
        let r = reader.read_channel("r")?;
        let g = reader.read_channel("g")?;
        let b = reader.read_channel("b")?;
        Ok(Rgb::new(r, g, b))
    }

    fn skip_unknown(&self, token: Token<'_>) -> Result<(), SceneError> {
        if self.mode == ParseMode::Strict {
            return Err(SceneError::UnknownDirective {
                token: token.text.to_owned(),
                line: token.line,
            });
        }
        warn!(target: "scene::parser", "line {}: skipping unknown token `{}`", token.line, token.text);
        Ok(())
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
