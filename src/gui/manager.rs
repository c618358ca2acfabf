// GuiManager - the root widget container
//
// Owns the widget sequence of the screen currently shown. Screen changes
// replace the sequence wholesale; nothing else keeps references into it.

use std::fmt;

use tracing::{debug, info};

use super::menu::{MenuEvent, MenuLayout, Screen, Transition};
use super::visitor::{DrawVisitor, UpdateVisitor};
use super::widget::Widget;
use crate::sequence::Sequence;

pub struct GuiManager {
    elements: Sequence<Widget>,
    screen: Screen,
    layout: MenuLayout,
    on_exit: Box<dyn FnMut()>,
}

impl GuiManager {
    /// Creates a container showing `screen`
    pub fn new(screen: Screen, layout: MenuLayout, on_exit: Box<dyn FnMut()>) -> Self {
        GuiManager {
            elements: screen.widgets(&layout).into_iter().collect(),
            screen,
            layout,
            on_exit,
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Widgets of the current screen in draw order
    pub fn widgets(&self) -> &[Widget] {
        self.elements.as_slice()
    }

    /// Cursor-driven access for visitors walking the container
    pub fn elements_mut(&mut self) -> &mut Sequence<Widget> {
        &mut self.elements
    }

    /// Feeds a fired button's event through the screen state machine
    pub fn apply(&mut self, event: MenuEvent) {
        match self.screen.transition(event) {
            Transition::Stay => {}
            Transition::Show(next) => {
                debug!(from = ?self.screen, to = ?next, "switching screen");
                self.elements = next.widgets(&self.layout).into_iter().collect();
                self.screen = next;
            }
            Transition::Exit => {
                info!("exit confirmed");
                (self.on_exit)();
            }
        }
    }

    pub fn draw<V: DrawVisitor + ?Sized>(&mut self, visitor: &mut V) -> Result<(), String> {
        visitor.draw_container(self)
    }

    pub fn update<V: UpdateVisitor + ?Sized>(&mut self, visitor: &mut V, dt: f32) {
        visitor.update_container(self, dt);
    }
}

impl fmt::Debug for GuiManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GuiManager")
            .field("screen", &self.screen)
            .field("elements", &self.elements)
            .finish_non_exhaustive()
    }
}
