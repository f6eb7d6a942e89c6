//=========================================================================
// Shape Registry
//=========================================================================
//
// Maps shape-kind names (the directive keyword) to the factory that reads
// the kind's own fields and builds its geometry.
//
// Built-in kinds:
//   Circle    <radius>
//   Rectangle <height> <width>
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::collections::HashMap;

//=== External Crates =====================================================

use log::warn;

//=== Internal Dependencies ===============================================

use super::tokens::TokenReader;
use crate::core::error::SceneError;
use crate::core::geometry::Vec2;
use crate::core::primitives::ShapeGeometry;

//=== ShapeFactory ========================================================

/// Reads a kind's geometry fields and builds the geometry.
pub type ShapeFactory = fn(&mut TokenReader<'_>) -> Result<ShapeGeometry, SceneError>;

//=== ShapeRegistry =======================================================

/// Name → factory table consulted for every directive keyword.
#[derive(Clone)]
pub struct ShapeRegistry {
    factories: HashMap<&'static str, ShapeFactory>,
}

impl ShapeRegistry {
    /// Creates a registry with no kinds.
    pub fn empty() -> Self {
        Self { factories: HashMap::new() }
    }

    /// Creates a registry with `Circle` and `Rectangle`.
    pub fn with_builtin_kinds() -> Self {
        let mut registry = Self::empty();
        registry.register("Circle", read_circle);
        registry.register("Rectangle", read_rectangle);
        registry
    }

    /// Registers a kind, replacing any factory already under `name`.
    pub fn register(&mut self, name: &'static str, factory: ShapeFactory) {
        if self.factories.insert(name, factory).is_some() {
            warn!(target: "scene::parser", "Shape kind {} was already registered and has been replaced", name);
        }
    }

    pub fn get(&self, name: &str) -> Option<ShapeFactory> {
        self.factories.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.factories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }
}

impl Default for ShapeRegistry {
    fn default() -> Self {
        Self::with_builtin_kinds()
    }
}

//=== Built-in Factories ==================================================

fn read_circle(reader: &mut TokenReader<'_>) -> Result<ShapeGeometry, SceneError> {
    let radius = reader.read_f32("radius")?;
    Ok(ShapeGeometry::Circle { radius })
}

/// Existing config files list `<height> <width>`, but the first value has
/// always been used as the horizontal extent. Kept for compatibility.
fn read_rectangle(reader: &mut TokenReader<'_>) -> Result<ShapeGeometry, SceneError> {
    let height = reader.read_f32("height")?;
    let width = reader.read_f32("width")?;
    Ok(ShapeGeometry::Rectangle { size: Vec2::new(height, width) })
}

//=========================================================================
// Unit Tests
//=========================================================================
