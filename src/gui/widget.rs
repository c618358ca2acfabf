//! Widgets
//!
//! A widget is either a static [`Label`] or a clickable [`Button`]. The set is
//! closed: [`Widget`] is an enum and every operation is an exhaustive match
//! that hands the concrete variant to a visitor.
//!
//! A button is a decorator. It owns exactly one inner widget (its caption,
//! conventionally a label) and draws it on top of its own rectangle.

use super::menu::MenuEvent;
use super::types::{Colour, Point};
use super::visitor::{DrawVisitor, UpdateVisitor};

/// Width and height given to buttons built without an explicit size
pub const DEFAULT_BUTTON_SIZE: f32 = 40.0;

/// Static text
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub content: String,
    pub top_left: Point,
    pub size: u32,
    pub colour: Colour,
}

impl Label {
    pub fn new(content: impl Into<String>, top_left: Point, size: u32, colour: Colour) -> Self {
        Label {
            content: content.into(),
            top_left,
            size,
            colour,
        }
    }
}

/// A clickable rectangle wrapping a caption widget
#[derive(Debug, Clone, PartialEq)]
pub struct Button {
    pub top_left: Point,
    pub width: f32,
    pub height: f32,
    pub colour: Colour,
    /// Event reported to the container when the button fires; `None` is a no-op action
    pub action: Option<MenuEvent>,
    pub inner: Box<Widget>,
}

impl Button {
    /// Builds a button whose caption label shares its position and colour
    pub fn new(
        text: impl Into<String>,
        top_left: Point,
        size: u32,
        colour: Colour,
        width: f32,
        height: f32,
        action: Option<MenuEvent>,
    ) -> Self {
        let caption = Widget::Label(Label::new(text, top_left, size, colour));
        Button::wrapping(caption, width, height, colour, action)
    }

    /// Builds a default-sized button that does nothing when clicked
    pub fn captioned(text: impl Into<String>, top_left: Point, size: u32, colour: Colour) -> Self {
        Button::new(
            text,
            top_left,
            size,
            colour,
            DEFAULT_BUTTON_SIZE,
            DEFAULT_BUTTON_SIZE,
            None,
        )
    }

    /// Wraps an existing widget; the button is anchored at the inner widget's position
    pub fn wrapping(
        inner: Widget,
        width: f32,
        height: f32,
        colour: Colour,
        action: Option<MenuEvent>,
    ) -> Self {
        Button {
            top_left: inner.top_left(),
            width,
            height,
            colour,
            action,
            inner: Box::new(inner),
        }
    }

    /// Strict containment test: points on any edge are outside
    pub fn is_intersecting(&self, point: Point) -> bool {
        point.x > self.top_left.x
            && point.y > self.top_left.y
            && point.x < self.top_left.x + self.width
            && point.y < self.top_left.y + self.height
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Widget {
    Label(Label),
    Button(Button),
}

impl Widget {
    pub fn top_left(&self) -> Point {
        match self {
            Widget::Label(label) => label.top_left,
            Widget::Button(button) => button.top_left,
        }
    }

    pub fn draw<V: DrawVisitor + ?Sized>(&self, visitor: &mut V) -> Result<(), String> {
        match self {
            Widget::Label(label) => visitor.draw_label(label),
            Widget::Button(button) => visitor.draw_button(button),
        }
    }

    /// Returns the event of a button that fired this frame
    pub fn update<V: UpdateVisitor + ?Sized>(&mut self, visitor: &mut V, dt: f32) -> Option<MenuEvent> {
        match self {
            Widget::Label(label) => {
                visitor.update_label(label, dt);
                None
            }
            Widget::Button(button) => visitor.update_button(button, dt),
        }
    }
}

impl From<Label> for Widget {
    fn from(label: Label) -> Self {
        Widget::Label(label)
    }
}

impl From<Button> for Widget {
    fn from(button: Button) -> Self {
        Widget::Button(button)
    }
}
