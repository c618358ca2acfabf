//! Two-Screen Menu
//!
//! The menu is a tiny state machine. Buttons carry a [`MenuEvent`]; when one
//! fires, the owning [`GuiManager`] asks the current [`Screen`] what to do
//! next and either swaps in the next screen's widgets or calls the exit
//! callback.
//!
//! | Screen        | Event     | Result                          |
//! |---------------|-----------|---------------------------------|
//! | `Main`        | `Proceed` | show `ConfirmExit`              |
//! | `ConfirmExit` | `Exit`    | invoke the exit callback        |
//! | anything else |           | stay                            |
//!
//! # Example
//!
//! ```
//! use guiapp::gui::{GuiConstructor, MenuCreator, MAIN_SCREEN};
//!
//! let manager = GuiConstructor::default()
//!     .instantiate(MAIN_SCREEN, Box::new(|| println!("bye")))
//!     .expect("main screen is always available");
//! assert_eq!(manager.len(), 2);
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use super::manager::GuiManager;
use super::types::{Colour, Point};
use super::widget::{Button, Label, Widget};

/// Configuration key selecting the main screen
pub const MAIN_SCREEN: &str = "main";

/// What a button reports when it fires
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEvent {
    /// Leave the main screen for the exit confirmation
    Proceed,
    /// Confirm leaving the application
    Exit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Main,
    ConfirmExit,
}

/// Outcome of feeding an event to a screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Stay,
    Show(Screen),
    Exit,
}

impl Screen {
    pub fn transition(self, event: MenuEvent) -> Transition {
        match (self, event) {
            (Screen::Main, MenuEvent::Proceed) => Transition::Show(Screen::ConfirmExit),
            (Screen::ConfirmExit, MenuEvent::Exit) => Transition::Exit,
            _ => Transition::Stay,
        }
    }

    /// Widgets making up this screen, in draw order
    pub fn widgets(self, layout: &MenuLayout) -> Vec<Widget> {
        match self {
            Screen::Main => vec![
                Label::new(
                    layout.greeting.as_str(),
                    layout.greeting_position,
                    layout.font_size,
                    layout.colour,
                )
                .into(),
                layout
                    .button(&layout.proceed_caption, layout.proceed_position, MenuEvent::Proceed)
                    .into(),
            ],
            Screen::ConfirmExit => vec![
                layout
                    .button(&layout.exit_caption, layout.exit_position, MenuEvent::Exit)
                    .into(),
            ],
        }
    }
}

/// Captions, positions and sizes of the menu widgets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuLayout {
    pub greeting: String,
    pub greeting_position: Point,
    pub proceed_caption: String,
    pub proceed_position: Point,
    pub exit_caption: String,
    pub exit_position: Point,
    pub button_width: f32,
    pub button_height: f32,
    pub font_size: u32,
    pub colour: Colour,
}

impl MenuLayout {
    fn button(&self, caption: &str, top_left: Point, event: MenuEvent) -> Button {
        Button::new(
            caption,
            top_left,
            self.font_size,
            self.colour,
            self.button_width,
            self.button_height,
            Some(event),
        )
    }
}

impl Default for MenuLayout {
    fn default() -> Self {
        MenuLayout {
            greeting: "Hi there!".to_string(),
            greeting_position: Point::new(0.0, 0.0),
            proceed_caption: "Click me".to_string(),
            proceed_position: Point::new(0.0, 100.0),
            exit_caption: "Exit".to_string(),
            exit_position: Point::new(0.0, 0.0),
            button_width: 100.0,
            button_height: 30.0,
            font_size: 10,
            colour: Colour::Black,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MenuError {
    #[error("unknown menu option: {0:?}")]
    UnknownOption(String),
}

/// Builds a ready-to-run widget container
pub trait MenuCreator {
    /// Builds the screen selected by `option`; `exit` runs when the user confirms leaving
    fn instantiate(&self, option: &str, exit: Box<dyn FnMut()>) -> Result<GuiManager, MenuError>;
}

/// The stock menu builder
#[derive(Debug, Clone, Default)]
pub struct GuiConstructor {
    layout: MenuLayout,
}

impl GuiConstructor {
    pub fn with_layout(layout: MenuLayout) -> Self {
        GuiConstructor { layout }
    }
}

impl MenuCreator for GuiConstructor {
    fn instantiate(&self, option: &str, exit: Box<dyn FnMut()>) -> Result<GuiManager, MenuError> {
        let screen = match option {
            MAIN_SCREEN => Screen::Main,
            unknown => return Err(MenuError::UnknownOption(unknown.to_string())),
        };

        debug!(?screen, "building menu");
        Ok(GuiManager::new(screen, self.layout.clone(), exit))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gui::test_support::{RecordingRenderer, ScriptedMouse};
    use crate::gui::visitor::{DefaultDrawVisitor, DefaultUpdateVisitor};
    use std::cell::Cell;
    use std::rc::Rc;

    fn counting_exit() -> (Rc<Cell<u32>>, Box<dyn FnMut()>) {
        let count = Rc::new(Cell::new(0));
        let handle = Rc::clone(&count);
        (count, Box::new(move || handle.set(handle.get() + 1)))
    }

    #[test]
    fn test_transition_table() {
        assert_eq!(
            Screen::Main.transition(MenuEvent::Proceed),
            Transition::Show(Screen::ConfirmExit)
        );
        assert_eq!(Screen::ConfirmExit.transition(MenuEvent::Exit), Transition::Exit);
        assert_eq!(Screen::Main.transition(MenuEvent::Exit), Transition::Stay);
        assert_eq!(Screen::ConfirmExit.transition(MenuEvent::Proceed), Transition::Stay);
    }

    #[test]
    fn test_main_screen_has_label_and_button() {
        let (_, exit) = counting_exit();
        let manager = GuiConstructor::default().instantiate(MAIN_SCREEN, exit).unwrap();

        assert_eq!(manager.len(), 2);
        assert_eq!(manager.screen(), Screen::Main);
        assert!(matches!(manager.widgets()[0], Widget::Label(_)));
        assert!(matches!(manager.widgets()[1], Widget::Button(_)));
    }

    #[test]
    fn test_unknown_option_fails_every_time() {
        for _ in 0..3 {
            let (_, exit) = counting_exit();
            let result = GuiConstructor::default().instantiate("settings", exit);
            assert_eq!(
                result.err(),
                Some(MenuError::UnknownOption("settings".to_string()))
            );
        }
    }

    #[test]
    fn test_click_through_to_exit() {
        let (exits, exit) = counting_exit();
        let mut manager = GuiConstructor::default().instantiate(MAIN_SCREEN, exit).unwrap();
        let mouse = ScriptedMouse::released();

        // Press inside "Click me" at (0,100) 100x30
        mouse.press(Point::new(50.0, 115.0));
        manager.update(&mut DefaultUpdateVisitor::new(&mouse), 0.016);

        assert_eq!(manager.len(), 1);
        assert_eq!(manager.screen(), Screen::ConfirmExit);
        assert_eq!(exits.get(), 0);

        // Releasing between frames changes nothing but the colour
        mouse.release();
        manager.update(&mut DefaultUpdateVisitor::new(&mouse), 0.016);
        assert_eq!(manager.screen(), Screen::ConfirmExit);
        assert_eq!(exits.get(), 0);

        // Press inside "Exit" at (0,0) 100x30
        mouse.press(Point::new(50.0, 15.0));
        manager.update(&mut DefaultUpdateVisitor::new(&mouse), 0.016);

        assert_eq!(exits.get(), 1);
        assert_eq!(manager.len(), 1);
    }

    #[test]
    fn test_screen_change_continues_same_pass() {
        // Exit button sits where "Click me" was, so one press hits both
        let layout = MenuLayout {
            exit_position: Point::new(0.0, 100.0),
            ..Default::default()
        };
        let (exits, exit) = counting_exit();
        let mut manager = GuiConstructor::with_layout(layout)
            .instantiate(MAIN_SCREEN, exit)
            .unwrap();
        let mouse = ScriptedMouse::pressed_at(Point::new(50.0, 115.0));

        manager.update(&mut DefaultUpdateVisitor::new(&mouse), 0.016);

        assert_eq!(manager.screen(), Screen::ConfirmExit);
        assert_eq!(exits.get(), 1);
    }

    #[test]
    fn test_new_screen_button_outside_press_keeps_colour() {
        let (exits, exit) = counting_exit();
        let mut manager = GuiConstructor::default().instantiate(MAIN_SCREEN, exit).unwrap();
        let mouse = ScriptedMouse::pressed_at(Point::new(50.0, 115.0));

        manager.update(&mut DefaultUpdateVisitor::new(&mouse), 0.016);

        assert_eq!(exits.get(), 0);
        match &manager.widgets()[0] {
            Widget::Button(button) => assert_eq!(button.colour, Colour::Black),
            other => panic!("expected exit button, got {:?}", other),
        }
    }

    #[test]
    fn test_held_exit_press_calls_exit_each_frame() {
        let (exits, exit) = counting_exit();
        let mut manager = GuiConstructor::default().instantiate(MAIN_SCREEN, exit).unwrap();
        let mouse = ScriptedMouse::pressed_at(Point::new(50.0, 115.0));
        manager.update(&mut DefaultUpdateVisitor::new(&mouse), 0.016);

        mouse.press(Point::new(50.0, 15.0));
        for _ in 0..4 {
            manager.update(&mut DefaultUpdateVisitor::new(&mouse), 0.016);
        }

        assert_eq!(exits.get(), 4);
    }

    #[test]
    fn test_draw_after_transition_sees_new_screen() {
        let (_, exit) = counting_exit();
        let mut manager = GuiConstructor::default().instantiate(MAIN_SCREEN, exit).unwrap();
        let mouse = ScriptedMouse::pressed_at(Point::new(50.0, 115.0));
        let mut renderer = RecordingRenderer::default();

        manager.update(&mut DefaultUpdateVisitor::new(&mouse), 0.016);
        manager.draw(&mut DefaultDrawVisitor::new(&mut renderer)).unwrap();

        assert_eq!(renderer.strings(), vec!["Exit"]);
    }

    #[test]
    fn test_custom_layout_captions() {
        let layout = MenuLayout {
            greeting: "Welcome".to_string(),
            exit_caption: "Quit".to_string(),
            ..Default::default()
        };
        let widgets = Screen::Main.widgets(&layout);
        match &widgets[0] {
            Widget::Label(label) => assert_eq!(label.content, "Welcome"),
            other => panic!("expected greeting label, got {:?}", other),
        }

        let widgets = Screen::ConfirmExit.widgets(&layout);
        match &widgets[0] {
            Widget::Button(button) => {
                assert_eq!(button.action, Some(MenuEvent::Exit));
                assert_eq!(button.width, 100.0);
                assert_eq!(button.height, 30.0);
            }
            other => panic!("expected exit button, got {:?}", other),
        }
    }
}
