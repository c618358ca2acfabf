// Adapter doubles for GUI tests: a renderer that records calls and a mouse
// whose state the test scripts frame by frame.

use std::cell::Cell;

use super::types::{Colour, Point};
use crate::adapter::{DrawingManager, InputManager};

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Rectangle {
        top_left: Point,
        width: f32,
        height: f32,
        colour: Colour,
    },
    Text {
        text: String,
        top_left: Point,
        size: u32,
        colour: Colour,
    },
}

#[derive(Debug, Default)]
pub struct RecordingRenderer {
    pub calls: Vec<DrawCall>,
    failure: Option<String>,
}

impl RecordingRenderer {
    /// A renderer whose every call fails with `message`
    pub fn failing(message: &str) -> Self {
        RecordingRenderer {
            calls: Vec::new(),
            failure: Some(message.to_string()),
        }
    }

    /// Text of every string drawn, in call order
    pub fn strings(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                DrawCall::Text { text, .. } => Some(text.as_str()),
                DrawCall::Rectangle { .. } => None,
            })
            .collect()
    }

    fn check(&self) -> Result<(), String> {
        match &self.failure {
            Some(message) => Err(message.clone()),
            None => Ok(()),
        }
    }
}

impl DrawingManager for RecordingRenderer {
    fn draw_rectangle(
        &mut self,
        top_left: Point,
        width: f32,
        height: f32,
        colour: Colour,
    ) -> Result<(), String> {
        self.check()?;
        self.calls.push(DrawCall::Rectangle {
            top_left,
            width,
            height,
            colour,
        });
        Ok(())
    }

    fn draw_string(
        &mut self,
        text: &str,
        top_left: Point,
        size: u32,
        colour: Colour,
    ) -> Result<(), String> {
        self.check()?;
        self.calls.push(DrawCall::Text {
            text: text.to_string(),
            top_left,
            size,
            colour,
        });
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct ScriptedMouse {
    position: Cell<Option<Point>>,
}

impl ScriptedMouse {
    pub fn released() -> Self {
        ScriptedMouse::default()
    }

    pub fn pressed_at(point: Point) -> Self {
        ScriptedMouse {
            position: Cell::new(Some(point)),
        }
    }

    pub fn press(&self, point: Point) {
        self.position.set(Some(point));
    }

    pub fn release(&self) {
        self.position.set(None);
    }
}

impl InputManager for ScriptedMouse {
    fn click(&self) -> Option<Point> {
        self.position.get()
    }
}
