//! Retained-Mode Widget Layer
//!
//! Widgets live in a [`GuiManager`] and are walked once per frame by an
//! external game loop: one update pass, then one draw pass.
//!
//! # Architecture
//!
//! - [`Widget`] - closed set of widget kinds (label, button)
//! - [`DrawVisitor`] / [`UpdateVisitor`] - per-frame operations; the default
//!   implementations hold the rendering and input adapters
//! - [`GuiManager`] - owns the current screen's widgets
//! - [`GuiConstructor`] - builds the two-screen menu (main, confirm exit)
//!
//! # Example Usage
//!
//! ```ignore
//! use guiapp::gui::{DefaultDrawVisitor, DefaultUpdateVisitor, GuiConstructor, MenuCreator, MAIN_SCREEN};
//!
//! let mut gui = GuiConstructor::default().instantiate(MAIN_SCREEN, Box::new(|| quit()))?;
//!
//! // Each frame
//! gui.update(&mut DefaultUpdateVisitor::new(&mouse), dt);
//! gui.draw(&mut DefaultDrawVisitor::new(&mut renderer))?;
//! ```

pub mod manager;
pub mod menu;
pub mod types;
pub mod visitor;
pub mod widget;

#[cfg(test)]
pub(crate) mod test_support;

pub use manager::GuiManager;
pub use menu::{GuiConstructor, MAIN_SCREEN, MenuCreator, MenuError, MenuEvent, MenuLayout, Screen, Transition};
pub use types::{Colour, Point};
pub use visitor::{DefaultDrawVisitor, DefaultUpdateVisitor, DrawVisitor, UpdateVisitor};
pub use widget::{Button, Label, Widget};
