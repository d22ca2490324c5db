//! Input events
//!
//! Terminal events narrowed down to the ones the menu reacts to.

use ratatui::crossterm::event::{
    Event, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};

/// Direction of a mouse wheel step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WheelDirection {
    Up,
    Down,
}

/// Input the menu state machine understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Key press (releases and repeats are filtered out)
    Key(KeyEvent),
    /// Left mouse button pressed at a terminal cell
    MouseClick { column: u16, row: u16 },
    /// Mouse wheel scrolled one step
    MouseWheel(WheelDirection),
}

impl InputEvent {
    /// Convert a raw terminal event, returning `None` for events the menu ignores
    pub fn from_terminal(event: Event) -> Option<Self> {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => Some(Self::Key(key)),
            Event::Mouse(mouse) => Self::from_mouse(mouse),
            _ => None,
        }
    }

    fn from_mouse(mouse: MouseEvent) -> Option<Self> {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => Some(Self::MouseClick {
                column: mouse.column,
                row: mouse.row,
            }),
            MouseEventKind::ScrollUp => Some(Self::MouseWheel(WheelDirection::Up)),
            MouseEventKind::ScrollDown => Some(Self::MouseWheel(WheelDirection::Down)),
            _ => None,
        }
    }
}
