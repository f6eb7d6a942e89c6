//=========================================================================
// Label Fonts
//=========================================================================
//
// Font loading and text measurement for shape labels.
//
// The scene only needs two things from a font:
// - measuring a label's local bounding box (for centering)
// - producing glyph coverage for the renderer
//
// `TextMetrics` covers the first and is all the core depends on, so the
// scene logic can be exercised with fixed metrics in tests. `LabelFont`
// is the fontdue-backed implementation used by the window surface.
//
//=========================================================================

//=== External Crates =====================================================

use fontdue::layout::{CoordinateSystem, GlyphPosition, Layout, TextStyle};
use fontdue::{Font, FontSettings};
use log::{debug, info};

//=== Internal Dependencies ===============================================

use crate::core::error::SceneError;
use crate::core::geometry::Bounds;

//=== Traits ==============================================================

/// Measures text laid out from a drawing origin at `(0, 0)`.
pub trait TextMetrics {
    /// Returns the local bounding box of `text` at `size` pixels.
    ///
    /// `left`/`top` are the ink's offset from the drawing origin (the
    /// font's bearing); they are usually non-zero.
    fn measure(&self, text: &str, size: u32) -> Bounds;
}

/// Loads fonts named by `Font` directives.
pub trait FontProvider {
    type Font: TextMetrics;

    /// Loads the font at `path`, failing with [`SceneError::FontNotFound`].
    fn load_font(&self, path: &str) -> Result<Self::Font, SceneError>;
}

//=== RasterGlyph =========================================================

/// One rasterized glyph, positioned relative to the label's origin.
#[derive(Debug, Clone)]
pub struct RasterGlyph {
    pub x: f32,
    pub y: f32,
    pub width: usize,
    pub height: usize,
    /// Row-major 8-bit coverage, `width * height` bytes.
    pub coverage: Vec<u8>,
}

//=== LabelFont ===========================================================

/// A TrueType/OpenType font parsed with fontdue.
pub struct LabelFont {
    font: Font,
}

impl LabelFont {
    /// Parses font data already read into memory.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, &'static str> {
        let font = Font::from_bytes(bytes, FontSettings::default())?;
        Ok(Self { font })
    }

    /// Lays `text` out on a single line with y growing downwards.
    fn layout(&self, text: &str, size: u32) -> Vec<GlyphPosition> {
        let mut layout: Layout = Layout::new(CoordinateSystem::PositiveYDown);
        layout.append(&[&self.font], &TextStyle::new(text, size as f32, 0));
        layout.glyphs().clone()
    }

    /// Rasterizes every visible glyph of `text` at `size` pixels.
    pub fn rasterize(&self, text: &str, size: u32) -> Vec<RasterGlyph> {
        self.layout(text, size)
            .into_iter()
            .filter(|glyph| glyph.width > 0 && glyph.height > 0)
            .map(|glyph| {
                let (metrics, coverage) = self.font.rasterize_config(glyph.key);
                RasterGlyph {
                    x: glyph.x,
                    y: glyph.y,
                    width: metrics.width,
                    height: metrics.height,
                    coverage,
                }
            })
            .collect()
    }
}

impl TextMetrics for LabelFont {
    fn measure(&self, text: &str, size: u32) -> Bounds {
        let mut min_x = f32::MAX;
        let mut min_y = f32::MAX;
        let mut max_x = f32::MIN;
        let mut max_y = f32::MIN;

        for glyph in self.layout(text, size) {
            // Whitespace advances the pen but has no ink.
            if glyph.width == 0 || glyph.height == 0 {
                continue;
            }
            min_x = min_x.min(glyph.x);
            min_y = min_y.min(glyph.y);
            max_x = max_x.max(glyph.x + glyph.width as f32);
            max_y = max_y.max(glyph.y + glyph.height as f32);
        }

        if min_x > max_x {
            return Bounds::default();
        }
        Bounds::new(min_x, min_y, max_x - min_x, max_y - min_y)
    }
}

//=== FileFontProvider ====================================================

/// Loads fonts from the filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileFontProvider;

impl FontProvider for FileFontProvider {
    type Font = LabelFont;

    fn load_font(&self, path: &str) -> Result<LabelFont, SceneError> {
        debug!(target: "scene::font", "Reading font {}", path);

        let bytes = std::fs::read(path).map_err(|e| SceneError::FontNotFound {
            path: path.to_owned(),
            reason: e.to_string(),
        })?;

        let font = LabelFont::from_bytes(&bytes).map_err(|reason| SceneError::FontNotFound {
            path: path.to_owned(),
            reason: reason.to_owned(),
        })?;

        info!(target: "scene::font", "Loaded font {} ({} bytes)", path, bytes.len());
        Ok(font)
    }
}

//=========================================================================
// Test Fixtures
//=========================================================================

#[cfg(test)]
pub(crate) mod testing {
    use super::*;

    /// Metrics that report the same box for every string.
    #[derive(Debug, Clone, Copy)]
    pub struct FixedMetrics(pub Bounds);

    impl TextMetrics for FixedMetrics {
        fn measure(&self, _text: &str, _size: u32) -> Bounds {
            self.0
        }
    }

    /// Monospace metrics: each char is `size / 2` wide and `size` tall,
    /// with a 1px left and 2px top bearing.
    #[derive(Debug, Clone, Copy, Default)]
    pub struct MonoMetrics;

    impl TextMetrics for MonoMetrics {
        fn measure(&self, text: &str, size: u32) -> Bounds {
            let advance = size as f32 / 2.0;
            Bounds::new(1.0, 2.0, advance * text.chars().count() as f32, size as f32)
        }
    }

    /// Provider that "loads" any path except ones containing `missing`.
    #[derive(Debug, Clone, Copy, Default)]
    pub struct FakeFonts;

    impl FontProvider for FakeFonts {
        type Font = MonoMetrics;

        fn load_font(&self, path: &str) -> Result<MonoMetrics, SceneError> {
            if path.contains("missing") {
                return Err(SceneError::FontNotFound {
                    path: path.to_owned(),
                    reason: "not found".to_owned(),
                });
            }
            Ok(MonoMetrics)
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_provider_reports_missing_font() {
        let result = FileFontProvider.load_font("definitely/not/here.ttf");
        match result {
            Err(SceneError::FontNotFound { path, .. }) => {
                assert_eq!(path, "definitely/not/here.ttf");
            }
            Err(other) => panic!("Expected FontNotFound, got {:?}", other),
            Ok(_) => panic!("Expected FontNotFound, got a font"),
        }
    }

    #[test]
    fn file_provider_rejects_non_font_data() {
        let path = std::env::temp_dir().join("bounce_scene_not_a_font.ttf");
        std::fs::write(&path, b"this is not a font").unwrap();

        let result = FileFontProvider.load_font(path.to_str().unwrap());
        assert!(matches!(result, Err(SceneError::FontNotFound { .. })));

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn label_font_rejects_garbage_bytes() {
        assert!(LabelFont::from_bytes(&[0u8; 16]).is_err());
    }

    #[test]
    fn mono_metrics_scale_with_text() {
        let bounds = testing::MonoMetrics.measure("abcd", 20);
        assert_eq!(bounds, Bounds::new(1.0, 2.0, 40.0, 20.0));
    }
}
