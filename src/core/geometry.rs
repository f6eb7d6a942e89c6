//=========================================================================
// Geometry
//=========================================================================
//
// Plain value types shared by the scene, the primitives and the renderer.
//
// - `Vec2`: 2D float vector (positions, velocities, offsets)
// - `Bounds`: axis-aligned rectangle `{left, top, width, height}`
// - `WindowSize`: integer window dimensions, the bounce boundary
// - `Rgb`: 8-bit color triple
//
//=========================================================================

//=== External Crates =====================================================

/// 2D float vector in window coordinates (y grows downwards).
///
/// Positions, velocities and label offsets all use glam's `Vec2`.
pub use glam::Vec2;

//=== Bounds ==============================================================

/// Axis-aligned bounding box.
///
/// `left`/`top` are the box's offset from whatever origin it is expressed
/// against: the owning primitive's drawing origin for local bounds, the
/// window for global bounds.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub const fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self { left, top, width, height }
    }

    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    /// Returns the same box moved by `offset`.
    pub fn translated(&self, offset: Vec2) -> Self {
        Self::new(self.left + offset.x, self.top + offset.y, self.width, self.height)
    }
}

//=== WindowSize ==========================================================

/// Window dimensions in pixels.
///
/// Doubles as the bounce boundary: the window is treated as a box anchored
/// at `(0, 0)` with this width and height.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WindowSize {
    pub width: u32,
    pub height: u32,
}

impl WindowSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::new(0.0, 0.0, self.width as f32, self.height as f32)
    }
}

//=== Rgb =================================================================

/// Opaque 8-bit color.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const WHITE: Self = Self::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Packs the color as `0x00RRGGBB`, the layout the window buffer expects.
    pub fn to_u32(self) -> u32 {
        (u32::from(self.r) << 16) | (u32::from(self.g) << 8) | u32::from(self.b)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
