//=========================================================================
// Platform Subsystem
//
// Window, event pumping and pixel presentation for the scene.
//
// Architecture:
// ```text
//  Frame loop (single thread):
//  ┌───────────────────────────────────────────────────────────┐
//  │  poll_close_event()                                       │
//  │   ├─ pump Winit events (non-blocking)                     │
//  │   │    └─ PlatformHandler ──► channel ──► PlatformEvent   │
//  │   └─ drain channel → closed?                              │
//  │                                                           │
//  │  SceneEngine::tick()                                      │
//  │                                                           │
//  │  SceneEngine::render()                                    │
//  │   ├─ draw_shape / draw_text → Canvas (CPU pixels)         │
//  │   └─ present()                                            │
//  │        ├─ copy Canvas → softbuffer → window               │
//  │        ├─ clear Canvas                                    │
//  │        └─ FramePacer::wait()                              │
//  └───────────────────────────────────────────────────────────┘
// ```
//
// Key Design Decisions:
// - **Pumped event loop**: Winit's `pump_app_events` keeps the scene in
//   control of the loop, so polling for close is an ordinary call
// - **Fixed window size**: The window is not resizable; its size is the
//   bounce boundary for the whole session
// - **Sticky close**: Once a close is seen, every later poll reports it
//
// Responsibilities:
// - Create and manage the OS window
// - Forward close requests to the frame loop
// - Rasterize shapes and labels and present them at a capped frame rate
//
//=========================================================================

//=== Submodules ==========================================================

pub(crate) mod canvas;
pub(crate) mod frame_pacer;

//=== Standard Library Imports ============================================

use std::num::NonZeroU32;
use std::rc::Rc;
use std::time::Duration;

//=== External Crates =====================================================

use crossbeam_channel::{unbounded, Receiver, Sender};
use log::*;
use thiserror::Error;
use winit::{
    application::ApplicationHandler,
    dpi::PhysicalSize,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, EventLoop},
    platform::pump_events::{EventLoopExtPumpEvents, PumpStatus},
    window::{Window, WindowAttributes, WindowId},
};

//=== Internal Imports ====================================================

use crate::core::font::LabelFont;
use crate::core::geometry::{Rgb, WindowSize};
use crate::core::primitives::{ShapePrimitive, TextPrimitive, Transformable};
use crate::core::render::RenderSurface;
use canvas::Canvas;
use frame_pacer::FramePacer;

//=== PlatformEvent =======================================================

/// Events sent from the window handler to the frame loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum PlatformEvent {
    /// Window close requested by user or OS, or the window could not be
    /// created. The frame loop should stop.
    WindowClosed,
}

//=== PlatformError =======================================================

/// Window and presentation errors.
///
/// All of these are fatal: without a window there is nothing to show.
#[derive(Debug, Error)]
pub enum PlatformError {
    /// The scene asked for a window with a zero dimension.
    #[error("window size {width}x{height} is not drawable")]
    InvalidSize { width: u32, height: u32 },

    /// Failed to create the event loop (rare, indicates OS-level issue).
    #[error("event loop creation failed: {0}")]
    EventLoopCreation(#[source] winit::error::EventLoopError),

    /// The OS refused to create the window.
    #[error("window creation failed: {0}")]
    WindowCreation(#[source] winit::error::OsError),

    /// The event loop exited before a window was created.
    #[error("event loop exited before the window opened (code {0})")]
    ClosedBeforeOpen(i32),

    /// Creating, resizing or presenting the pixel buffer failed.
    #[error("surface error: {0}")]
    Surface(#[source] softbuffer::SoftBufferError),
}

//=== PlatformHandler =====================================================

/// Winit application handler: creates the window and forwards closes.
struct PlatformHandler {
    /// OS window handle (None until `resumed()` called).
    window: Option<Rc<Window>>,

    size: WindowSize,
    title: String,

    /// Set when window creation fails inside `resumed()`.
    creation_error: Option<winit::error::OsError>,

    /// Channel to the frame loop.
    event_sender: Sender<PlatformEvent>,
}

impl PlatformHandler {
    fn new(size: WindowSize, title: &str, event_sender: Sender<PlatformEvent>) -> Self {
        Self {
            window: None,
            size,
            title: title.to_owned(),
            creation_error: None,
            event_sender,
        }
    }

    fn send(&self, event: PlatformEvent) {
        if self.event_sender.send(event).is_err() {
            warn!(target: "platform", "Event channel disconnected, dropping event");
        }
    }
}

impl ApplicationHandler for PlatformHandler {
    /// Creates the window on first activation.
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            debug!(target: "platform", "Window already exists");
            return;
        }

        let attrs = WindowAttributes::default()
            .with_title(self.title.clone())
            .with_inner_size(PhysicalSize::new(self.size.width, self.size.height))
            .with_resizable(false);

        match event_loop.create_window(attrs) {
            Ok(window) => {
                info!(
                    target: "platform",
                    "Window created: {}x{} @ {}x DPI",
                    window.inner_size().width,
                    window.inner_size().height,
                    window.scale_factor()
                );
                self.window = Some(Rc::new(window));
            }
            Err(e) => {
                error!(target: "platform", "Window creation failed: {}", e);
                self.creation_error = Some(e);
                self.send(PlatformEvent::WindowClosed);
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                info!(target: "platform", "Window close requested");
                self.send(PlatformEvent::WindowClosed);
                event_loop.exit();
            }

            WindowEvent::Destroyed => {
                debug!(target: "platform", "Window destroyed");
                self.send(PlatformEvent::WindowClosed);
            }

            _ => {
                // Ignore: input, focus, redraw requests, etc.
            }
        }
    }
}

//=== WindowSurface =======================================================

/// OS window implementing [`RenderSurface`].
///
/// Shapes and labels are rasterized into a CPU [`Canvas`] and copied to
/// the window on [`RenderSurface::present`], which also enforces the
/// frame-rate limit.
///
/// This type is NOT Send/Sync - it must stay on the thread that created
/// it (Winit requirement on macOS).
pub struct WindowSurface {
    // Field order is drop order: surface, then context, then the window
    // held by the handler, then the event loop.
    surface: softbuffer::Surface<Rc<Window>, Rc<Window>>,
    _context: softbuffer::Context<Rc<Window>>,
    handler: PlatformHandler,
    event_loop: EventLoop<()>,
    events: Receiver<PlatformEvent>,
    canvas: Canvas,
    pacer: FramePacer,
    closed: bool,
}

impl WindowSurface {
    //--- Construction -----------------------------------------------------

    /// Opens a `size` window titled `title`, presenting at most
    /// `frame_rate` frames per second.
    ///
    /// Blocks until the OS has created the window.
    ///
    /// # Panics
    ///
    /// Panics if `frame_rate == 0`.
    pub fn create(size: WindowSize, title: &str, frame_rate: u32) -> Result<Self, PlatformError> {
        let invalid = || PlatformError::InvalidSize { width: size.width, height: size.height };
        let width = NonZeroU32::new(size.width).ok_or_else(invalid)?;
        let height = NonZeroU32::new(size.height).ok_or_else(invalid)?;

        debug!(target: "platform", "Creating event loop");
        let mut event_loop = EventLoop::new().map_err(PlatformError::EventLoopCreation)?;

        let (tx, rx) = unbounded();
        let mut handler = PlatformHandler::new(size, title, tx);

        let window = loop {
            let status = event_loop.pump_app_events(Some(Duration::from_millis(10)), &mut handler);

            if let Some(window) = &handler.window {
                break Rc::clone(window);
            }
            if let Some(e) = handler.creation_error.take() {
                return Err(PlatformError::WindowCreation(e));
            }
            if let PumpStatus::Exit(code) = status {
                return Err(PlatformError::ClosedBeforeOpen(code));
            }
        };

        let context = softbuffer::Context::new(Rc::clone(&window)).map_err(PlatformError::Surface)?;
        let mut surface =
            softbuffer::Surface::new(&context, Rc::clone(&window)).map_err(PlatformError::Surface)?;
        surface.resize(width, height).map_err(PlatformError::Surface)?;

        info!(target: "platform", "Surface ready ({} fps cap)", frame_rate);

        Ok(Self {
            surface,
            _context: context,
            handler,
            event_loop,
            events: rx,
            canvas: Canvas::new(size.width as usize, size.height as usize),
            pacer: FramePacer::new(frame_rate),
            closed: false,
        })
    }

    //--- Internal Helpers -------------------------------------------------

    /// Drains queued platform events, returning `true` if a close was seen.
    fn drain_events(&mut self) -> bool {
        let mut closed = false;
        while let Ok(event) = self.events.try_recv() {
            trace!(target: "platform", "Platform event: {:?}", event);
            match event {
                PlatformEvent::WindowClosed => closed = true,
            }
        }
        closed
    }
}

impl RenderSurface<LabelFont> for WindowSurface {
    type Error = PlatformError;

    fn draw_shape(&mut self, shape: &ShapePrimitive) {
        self.canvas.draw_shape(shape);
    }

    fn draw_text(&mut self, text: &TextPrimitive, font: &LabelFont) {
        let glyphs = font.rasterize(text.text(), text.style().font_size);
        self.canvas.draw_glyphs(text.position(), &glyphs, text.style().fill);
    }

    fn present(&mut self) -> Result<(), PlatformError> {
        let mut buffer = self.surface.buffer_mut().map_err(PlatformError::Surface)?;
        buffer.copy_from_slice(self.canvas.pixels());
        buffer.present().map_err(PlatformError::Surface)?;

        self.canvas.clear(Rgb::BLACK);
        self.pacer.wait();
        Ok(())
    }

    fn poll_close_event(&mut self) -> bool {
        if self.closed {
            return true;
        }

        let status = self.event_loop.pump_app_events(Some(Duration::ZERO), &mut self.handler);
        if let PumpStatus::Exit(code) = status {
            debug!(target: "platform", "Event loop exited (code {})", code);
            self.closed = true;
        }

        if self.drain_events() {
            self.closed = true;
        }
        self.closed
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    //=====================================================================
    // PlatformEvent Tests
    //=====================================================================

    #[test]
    fn platform_event_is_debug() {
        let event = PlatformEvent::WindowClosed;
        let debug_str = format!("{:?}", event);
        assert!(debug_str.contains("WindowClosed"));
    }

    //=====================================================================
    // PlatformHandler Tests
    //=====================================================================

    #[test]
    fn handler_creation() {
        let (tx, _rx) = unbounded();
        let handler = PlatformHandler::new(WindowSize::new(800, 600), "Test", tx);

        assert!(handler.window.is_none(), "Window should be created lazily");
        assert!(handler.creation_error.is_none());
        assert_eq!(handler.title, "Test");
    }

    #[test]
    fn handler_forwards_events() {
        let (tx, rx) = unbounded();
        let handler = PlatformHandler::new(WindowSize::new(800, 600), "Test", tx);

        handler.send(PlatformEvent::WindowClosed);

        assert_eq!(rx.try_recv(), Ok(PlatformEvent::WindowClosed));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn handler_send_survives_disconnected_channel() {
        let (tx, rx) = unbounded();
        let handler = PlatformHandler::new(WindowSize::new(800, 600), "Test", tx);

        drop(rx);

        // Should not panic, just log a warning
        handler.send(PlatformEvent::WindowClosed);
    }

    //=====================================================================
    // PlatformError Tests
    //=====================================================================

    #[test]
    fn platform_error_is_error_trait() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<PlatformError>();
    }

    #[test]
    fn zero_size_is_rejected_before_opening_a_window() {
        let result = WindowSurface::create(WindowSize::new(0, 600), "Test", 60);

        match result {
            Err(PlatformError::InvalidSize { width, height }) => {
                assert_eq!((width, height), (0, 600));
            }
            Err(other) => panic!("Expected InvalidSize, got {:?}", other),
            Ok(_) => panic!("Expected InvalidSize"),
        }
    }
}
