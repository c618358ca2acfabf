// Shared GUI value types
//
// Point is a screen-space coordinate in pixels (top-left origin). Colour is
// the small palette widgets are allowed to use; the rendering adapter maps it
// to concrete RGB.

use serde::{Deserialize, Serialize};

/// Screen-space position in pixels
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Point { x, y }
    }
}

/// Widget colour palette
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Colour {
    White,
    #[default]
    Black,
    Blue,
}

impl Colour {
    /// Colour a button returns to when the pointer is not pressed
    pub const IDLE: Colour = Colour::White;

    /// Colour a button takes while pressed inside its rectangle
    pub const ACTIVE: Colour = Colour::Blue;

    /// RGB triple used by rendering adapters
    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            Colour::White => (255, 255, 255),
            Colour::Blue => (0, 0, 255),
            Colour::Black => (0, 0, 0),
        }
    }
}
