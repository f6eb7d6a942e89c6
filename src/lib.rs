//=========================================================================
// Bounce Scene Library Root
//
// This crate loads a scene of labeled shapes from a text config and
// animates them inside a window, bouncing off its edges.
//
// Responsibilities:
// - Expose the engine facade (`EngineBuilder`, `Engine`)
// - Expose the headless scene core for embedding and testing
// - Keep OS integration (window, event loop, pixel presentation) behind
//   `WindowSurface`
//
// Typical usage:
// ```no_run
// use bounce_scene::EngineBuilder;
//
// fn main() -> Result<(), bounce_scene::EngineError> {
//     EngineBuilder::new("config.txt").build().run()
// }
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `core` holds the config parser, shape kinematics and the scene engine.
// None of it touches the OS, so it can be driven by any `RenderSurface`.
//
pub mod core;
pub mod prelude;

//--- Internal Modules ----------------------------------------------------
//
// `platform` contains the winit window, event pumping and the software
// framebuffer. Only `WindowSurface` and its error type are exported.
//
// `engine` wires a loaded scene to a window and runs the frame loop.
//
mod engine;
mod platform;

//--- Public Exports ------------------------------------------------------

pub use engine::{Engine, EngineBuilder, EngineError};
pub use platform::{PlatformError, WindowSurface};
