use serde::Deserialize;

use super::{keys, Event, Modifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MouseButton {
    Left,
    Middle,
    Right,
}

impl MouseButton {
    fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Middle => "middle",
            Self::Right => "right",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MouseAction {
    Down,
    Up,
    #[serde(rename = "dblclick")]
    DoubleClick,
}

impl MouseAction {
    fn as_str(self) -> &'static str {
        match self {
            Self::Down => "down",
            Self::Up => "up",
            Self::DoubleClick => "dblclick",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvtMouse {
    x: i32,
    y: i32,
    button: MouseButton,
    action: MouseAction,
    mods: Modifiers,
}

impl EvtMouse {
    pub fn new(x: i32, y: i32, button: MouseButton, action: MouseAction, mods: Modifiers) -> Self {
        Self {
            x,
            y,
            button,
            action,
            mods,
        }
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    pub fn button(&self) -> MouseButton {
        self.button
    }

    pub fn action(&self) -> MouseAction {
        self.action
    }

    pub fn mods(&self) -> Modifiers {
        self.mods
    }
}

impl Event for EvtMouse {
    fn as_string(&self) -> String {
        let mut event = format!("mouse:{}:{}", self.button.as_str(), self.action.as_str());
        self.mods.append_to(&mut event);
        event
    }

    fn position(&self) -> Option<(i32, i32)> {
        Some((self.x, self.y))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyAction {
    Down,
    Up,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvtKey {
    key: keys::KeyCode,
    action: KeyAction,
    mods: Modifiers,
}

impl EvtKey {
    pub fn new(key: keys::KeyCode, action: KeyAction, mods: Modifiers) -> Self {
        Self { key, action, mods }
    }

    pub fn key(&self) -> keys::KeyCode {
        self.key
    }

    pub fn action(&self) -> KeyAction {
        self.action
    }

    pub fn mods(&self) -> Modifiers {
        self.mods
    }
}

impl Event for EvtKey {
    fn as_string(&self) -> String {
        let mut event = String::from(match self.action {
            KeyAction::Down => "key:down",
            KeyAction::Up => "key:up",
        });
        match keys::key_to_name(self.key) {
            Some(name) => {
                event.push(':');
                event.push_str(&name);
            }
            None => tracing::warn!(key = self.key, "unknown key"),
        }
        self.mods.append_to(&mut event);
        event
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScrollDirection {
    Up,
    Down,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvtScroll {
    x: i32,
    y: i32,
    direction: ScrollDirection,
    mods: Modifiers,
}

impl EvtScroll {
    pub fn new(x: i32, y: i32, direction: ScrollDirection, mods: Modifiers) -> Self {
        Self {
            x,
            y,
            direction,
            mods,
        }
    }

    pub fn direction(&self) -> ScrollDirection {
        self.direction
    }

    pub fn mods(&self) -> Modifiers {
        self.mods
    }
}

impl Event for EvtScroll {
    fn as_string(&self) -> String {
        let mut event = String::from(match self.direction {
            ScrollDirection::Up => "scroll:up",
            ScrollDirection::Down => "scroll:down",
        });
        self.mods.append_to(&mut event);
        event
    }

    fn position(&self) -> Option<(i32, i32)> {
        Some((self.x, self.y))
    }
}

/// Pointer moved inside a window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvtMotion {
    x: i32,
    y: i32,
}

impl EvtMotion {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }
}

impl Event for EvtMotion {
    fn as_string(&self) -> String {
        "motion".to_string()
    }

    fn position(&self) -> Option<(i32, i32)> {
        Some((self.x, self.y))
    }
}
