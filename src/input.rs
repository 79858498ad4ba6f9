//! Input event translation
//!
//! Platform-agnostic input events, mapped to simulation commands with the
//! sandbox's key bindings:
//!
//! | Input | Command |
//! |---|---|
//! | Pointer click | spawn at pointer |
//! | Arrow keys | launch direction |
//! | `M` / `N` | pending mass +0.1 / -0.1 |
//! | `G` | toggle gravity |
//! | `Space` | spawn at arena center |
//! | `C` | cycle color |
//! | `E` | clear all bodies |

use glam::DVec2;

use crate::sim::{Command, Direction};

/// Keys the sandbox reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    Space,
    Char(char),
}

impl Key {
    /// Parse a DOM-style key name (`"ArrowLeft"`, `" "`, `"m"`)
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "ArrowLeft" | "Left" => Some(Key::ArrowLeft),
            "ArrowRight" | "Right" => Some(Key::ArrowRight),
            "ArrowUp" | "Up" => Some(Key::ArrowUp),
            "ArrowDown" | "Down" => Some(Key::ArrowDown),
            " " | "Space" | "Spacebar" => Some(Key::Space),
            _ => {
                let mut chars = name.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Some(Key::Char(c.to_ascii_lowercase())),
                    _ => None,
                }
            }
        }
    }
}

/// A raw input event from the windowing layer
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    KeyDown(Key),
    /// Pointer pressed at arena coordinates
    PointerDown { x: f64, y: f64 },
    Quit,
}

/// Translate a key press to a command, if bound
pub fn map_key(key: Key) -> Option<Command> {
    let command = match key {
        Key::ArrowLeft => Command::SetDirection(Direction::Left),
        Key::ArrowRight => Command::SetDirection(Direction::Right),
        Key::ArrowUp => Command::SetDirection(Direction::Up),
        Key::ArrowDown => Command::SetDirection(Direction::Down),
        Key::Space => Command::SpawnCenter,
        Key::Char(c) => match c.to_ascii_lowercase() {
            'm' => Command::IncreaseMass,
            'n' => Command::DecreaseMass,
            'g' => Command::ToggleGravity,
            'c' => Command::CycleColor,
            'e' => Command::ClearAll,
            _ => return None,
        },
    };
    Some(command)
}

/// Translate an input event to a command. `Quit` is handled by the caller.
pub fn map_event(event: &InputEvent) -> Option<Command> {
    match *event {
        InputEvent::KeyDown(key) => map_key(key),
        InputEvent::PointerDown { x, y } => Some(Command::SpawnAt(DVec2::new(x, y))),
        InputEvent::Quit => None,
    }
}
