//! Draw and Update Visitors
//!
//! Widgets know nothing about rendering or input. Each frame the game loop
//! hands the container a visitor, and every widget dispatches its concrete
//! variant back to it. The default visitors are the only place holding the
//! rendering and input adapters.
//!
//! # Frame order
//!
//! ```ignore
//! manager.update(&mut DefaultUpdateVisitor::new(&mouse), dt);
//! manager.draw(&mut DefaultDrawVisitor::new(&mut renderer))?;
//! ```
//!
//! Update runs first, so a screen change triggered by a click is already
//! visible in the draw pass of the same frame.

use tracing::trace;

use super::manager::GuiManager;
use super::menu::MenuEvent;
use super::types::Colour;
use super::widget::{Button, Label};
use crate::adapter::{DrawingManager, InputManager};
use crate::option::Visit;

pub trait DrawVisitor {
    fn draw_label(&mut self, label: &Label) -> Result<(), String>;
    fn draw_button(&mut self, button: &Button) -> Result<(), String>;
    fn draw_container(&mut self, manager: &mut GuiManager) -> Result<(), String>;
}

pub trait UpdateVisitor {
    fn update_label(&mut self, label: &mut Label, dt: f32);

    /// Returns the button's event when it fires this frame
    fn update_button(&mut self, button: &mut Button, dt: f32) -> Option<MenuEvent>;

    fn update_container(&mut self, manager: &mut GuiManager, dt: f32);
}

/// Draws widgets through a [`DrawingManager`]
pub struct DefaultDrawVisitor<'a, D: DrawingManager + ?Sized> {
    drawing_manager: &'a mut D,
}

impl<'a, D: DrawingManager + ?Sized> DefaultDrawVisitor<'a, D> {
    pub fn new(drawing_manager: &'a mut D) -> Self {
        DefaultDrawVisitor { drawing_manager }
    }
}

impl<D: DrawingManager + ?Sized> DrawVisitor for DefaultDrawVisitor<'_, D> {
    fn draw_label(&mut self, label: &Label) -> Result<(), String> {
        self.drawing_manager
            .draw_string(&label.content, label.top_left, label.size, label.colour)
    }

    fn draw_button(&mut self, button: &Button) -> Result<(), String> {
        self.drawing_manager
            .draw_rectangle(button.top_left, button.width, button.height, button.colour)?;

        // Caption goes on top of the rectangle
        button.inner.draw(self)
    }

    fn draw_container(&mut self, manager: &mut GuiManager) -> Result<(), String> {
        let elements = manager.elements_mut();
        elements.reset();
        while let Some(widget) = elements.advance() {
            widget.draw(self)?;
        }
        Ok(())
    }
}

/// How the pointer relates to one button this frame
enum Press {
    Released,
    Inside,
    Outside,
}

/// Updates widgets from an [`InputManager`]
pub struct DefaultUpdateVisitor<'a, I: InputManager + ?Sized> {
    input_manager: &'a I,
}

impl<'a, I: InputManager + ?Sized> DefaultUpdateVisitor<'a, I> {
    pub fn new(input_manager: &'a I) -> Self {
        DefaultUpdateVisitor { input_manager }
    }
}

impl<I: InputManager + ?Sized> UpdateVisitor for DefaultUpdateVisitor<'_, I> {
    fn update_label(&mut self, _label: &mut Label, _dt: f32) {}

    fn update_button(&mut self, button: &mut Button, _dt: f32) -> Option<MenuEvent> {
        let press = self.input_manager.click().visit(
            || Press::Released,
            |point| {
                if button.is_intersecting(point) {
                    Press::Inside
                } else {
                    Press::Outside
                }
            },
        );

        // No edge detection: a held press fires the action every frame
        match press {
            Press::Released => {
                button.colour = Colour::IDLE;
                None
            }
            Press::Inside => {
                button.colour = Colour::ACTIVE;
                trace!(action = ?button.action, "button pressed");
                button.action
            }
            Press::Outside => None,
        }
    }

    fn update_container(&mut self, manager: &mut GuiManager, dt: f32) {
        manager.elements_mut().reset();
        while let Some(widget) = manager.elements_mut().advance_mut() {
            if let Some(event) = widget.update(self, dt) {
                // May swap the whole sequence; traversal carries on over the new one
                manager.apply(event);
            }
        }
    }
}
