//! Backend Adapters
//!
//! The GUI never talks to a window, a GPU or a mouse directly. It goes through
//! two narrow traits that a backend implements:
//!
//! - [`DrawingManager`] - rasterizes filled rectangles and text
//! - [`InputManager`] - polls the primary pointer
//!
//! The SDL2 implementations live in `backend::sdl` (feature `sdl`).

use crate::gui::{Colour, Point};

/// Rendering adapter consumed by the draw visitor
///
/// Errors are plain strings, matching what SDL2's own drawing calls return.
pub trait DrawingManager {
    /// Draws a filled, axis-aligned rectangle
    fn draw_rectangle(
        &mut self,
        top_left: Point,
        width: f32,
        height: f32,
        colour: Colour,
    ) -> Result<(), String>;

    /// Draws `text` with its top-left corner at `top_left`
    fn draw_string(
        &mut self,
        text: &str,
        top_left: Point,
        size: u32,
        colour: Colour,
    ) -> Result<(), String>;
}

/// Input adapter consumed by the update visitor
pub trait InputManager {
    /// Pointer position if the primary button is held right now, `None` otherwise
    ///
    /// This is polled once per button per frame; there is no event queue.
    fn click(&self) -> Option<Point>;
}
