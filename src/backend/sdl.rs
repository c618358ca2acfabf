//! SDL2 Adapters
//!
//! [`SdlDrawingAdapter`] draws onto an SDL2 window canvas using filled
//! rectangles only: text goes through the procedural bitmap font in
//! [`crate::text`]. [`SdlMouse`] polls the left mouse button.

use sdl2::EventPump;
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;

use crate::adapter::{DrawingManager, InputManager};
use crate::gui::{Colour, Point};
use crate::text;

pub struct SdlDrawingAdapter<'a> {
    canvas: &'a mut Canvas<Window>,
}

impl<'a> SdlDrawingAdapter<'a> {
    pub fn new(canvas: &'a mut Canvas<Window>) -> Self {
        SdlDrawingAdapter { canvas }
    }
}

impl DrawingManager for SdlDrawingAdapter<'_> {
    fn draw_rectangle(
        &mut self,
        top_left: Point,
        width: f32,
        height: f32,
        colour: Colour,
    ) -> Result<(), String> {
        self.canvas.set_draw_color(convert_colour(colour));
        self.canvas.fill_rect(Rect::new(
            top_left.x as i32,
            top_left.y as i32,
            width as u32,
            height as u32,
        ))
    }

    fn draw_string(
        &mut self,
        text: &str,
        top_left: Point,
        size: u32,
        colour: Colour,
    ) -> Result<(), String> {
        let scale = text::scale_for(size);
        self.canvas.set_draw_color(convert_colour(colour));

        for (x, y) in text::pixels(text, top_left.x as i32, top_left.y as i32, scale) {
            self.canvas.fill_rect(Rect::new(x, y, scale, scale))?;
        }

        Ok(())
    }
}

fn convert_colour(colour: Colour) -> Color {
    let (r, g, b) = colour.rgb();
    Color::RGB(r, g, b)
}

/// Left mouse button as the primary pointer
pub struct SdlMouse<'a> {
    event_pump: &'a EventPump,
}

impl<'a> SdlMouse<'a> {
    pub fn new(event_pump: &'a EventPump) -> Self {
        SdlMouse { event_pump }
    }
}

impl InputManager for SdlMouse<'_> {
    fn click(&self) -> Option<Point> {
        let state = self.event_pump.mouse_state();
        if state.left() {
            Some(Point::new(state.x() as f32, state.y() as f32))
        } else {
            None
        }
    }
}
