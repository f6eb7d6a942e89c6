//=========================================================================
// Render Surface
//=========================================================================
//
// The interface the scene draws through. The window implementation lives
// in the platform layer; tests use a recording surface.
//
//=========================================================================

use crate::core::primitives::{ShapePrimitive, TextPrimitive};

/// Drawing target for one frame at a time.
///
/// `F` is the font type labels are rasterized with.
pub trait RenderSurface<F> {
    type Error;

    fn draw_shape(&mut self, shape: &ShapePrimitive);

    fn draw_text(&mut self, text: &TextPrimitive, font: &F);

    /// Shows everything drawn since the last call, then clears for the next
    /// frame. May block to honor a frame-rate limit.
    fn present(&mut self) -> Result<(), Self::Error>;

    /// Returns `true` once the user or OS asked to close the surface.
    fn poll_close_event(&mut self) -> bool;
}

//=========================================================================
// Test Fixtures
//=========================================================================
