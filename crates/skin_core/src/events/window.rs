use serde::Deserialize;

use super::Event;

macro_rules! plain_event {
    ($(#[$meta:meta])* $name:ident, $text:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
        pub struct $name;

        impl Event for $name {
            fn as_string(&self) -> String {
                $text.to_string()
            }
        }
    };
}

plain_event!(
    /// Pointer entered a window.
    EvtEnter,
    "enter"
);
plain_event!(
    /// Pointer left a window.
    EvtLeave,
    "leave"
);
plain_event!(EvtDragLeave, "drag:leave");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpecialAction {
    Show,
    Hide,
    Enable,
    Disable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvtSpecial {
    action: SpecialAction,
}

impl EvtSpecial {
    pub fn new(action: SpecialAction) -> Self {
        Self { action }
    }

    pub fn action(&self) -> SpecialAction {
        self.action
    }
}

impl Event for EvtSpecial {
    fn as_string(&self) -> String {
        let action = match self.action {
            SpecialAction::Show => "show",
            SpecialAction::Hide => "hide",
            SpecialAction::Enable => "enable",
            SpecialAction::Disable => "disable",
        };
        format!("special:{action}")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvtFocus {
    focus: bool,
}

impl EvtFocus {
    pub fn new(focus: bool) -> Self {
        Self { focus }
    }

    pub fn has_focus(&self) -> bool {
        self.focus
    }
}

impl Event for EvtFocus {
    fn as_string(&self) -> String {
        let focus = if self.focus { "in" } else { "out" };
        format!("focus:{focus}")
    }
}

/// Part of a window needs repainting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvtRefresh {
    x: i32,
    y: i32,
    width: u32,
    height: u32,
}

impl EvtRefresh {
    pub fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn rect(&self) -> (i32, i32, u32, u32) {
        (self.x, self.y, self.width, self.height)
    }
}

impl Event for EvtRefresh {
    fn as_string(&self) -> String {
        "refresh".to_string()
    }
}

/// A native popup menu item was chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvtMenu {
    item_id: u32,
}

impl EvtMenu {
    pub fn new(item_id: u32) -> Self {
        Self { item_id }
    }

    pub fn item_id(&self) -> u32 {
        self.item_id
    }
}

impl Event for EvtMenu {
    fn as_string(&self) -> String {
        "menu".to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvtDragEnter {
    x: i32,
    y: i32,
}

impl EvtDragEnter {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl Event for EvtDragEnter {
    fn as_string(&self) -> String {
        "drag:enter".to_string()
    }

    fn position(&self) -> Option<(i32, i32)> {
        Some((self.x, self.y))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvtDragOver {
    x: i32,
    y: i32,
}

impl EvtDragOver {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl Event for EvtDragOver {
    fn as_string(&self) -> String {
        "drag:over".to_string()
    }

    fn position(&self) -> Option<(i32, i32)> {
        Some((self.x, self.y))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvtDragDrop {
    x: i32,
    y: i32,
    files: Vec<String>,
}

impl EvtDragDrop {
    pub fn new(x: i32, y: i32, files: Vec<String>) -> Self {
        Self { x, y, files }
    }

    pub fn files(&self) -> &[String] {
        &self.files
    }
}

impl Event for EvtDragDrop {
    fn as_string(&self) -> String {
        "drag:drop".to_string()
    }

    fn position(&self) -> Option<(i32, i32)> {
        Some((self.x, self.y))
    }
}
