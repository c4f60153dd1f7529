//! Input and window events, each rendered to the symbolic string the state
//! machines match on (for example `mouse:left:down:ctrl,shift`).

use std::{fmt, ops};

pub mod input;
pub mod keys;
pub mod window;

pub use input::{
    EvtKey, EvtMotion, EvtMouse, EvtScroll, KeyAction, MouseAction, MouseButton, ScrollDirection,
};
pub use window::{
    EvtDragDrop, EvtDragEnter, EvtDragLeave, EvtDragOver, EvtEnter, EvtFocus, EvtLeave, EvtMenu,
    EvtRefresh, EvtSpecial, SpecialAction,
};

pub trait Event: fmt::Debug + Send + Sync {
    /// Canonical colon-delimited form.
    fn as_string(&self) -> String;

    /// Pointer position carried by the event, if any.
    fn position(&self) -> Option<(i32, i32)> {
        None
    }
}

/// Keyboard modifiers held while an input event happened.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Modifiers(u8);

impl Modifiers {
    pub const NONE: Self = Self(0);
    pub const ALT: Self = Self(1);
    pub const SHIFT: Self = Self(1 << 1);
    pub const CTRL: Self = Self(1 << 2);
    pub const META: Self = Self(1 << 3);
    pub const CMD: Self = Self(1 << 4);

    /// Rendering order of the modifier names.
    const NAMED: [(Self, &'static str); 5] = [
        (Self::ALT, "alt"),
        (Self::CTRL, "ctrl"),
        (Self::SHIFT, "shift"),
        (Self::META, "meta"),
        (Self::CMD, "cmd"),
    ];

    pub fn bits(self) -> u8 {
        self.0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Parses a comma separated list such as `alt,ctrl`; `none` or an empty
    /// string yield no modifiers.
    pub fn parse(raw: &str) -> Option<Self> {
        let mut mods = Self::NONE;
        for name in raw.split(',').map(str::trim).filter(|name| !name.is_empty()) {
            if name == "none" {
                continue;
            }
            let (flag, _) = Self::NAMED.iter().find(|(_, known)| *known == name)?;
            mods = mods | *flag;
        }
        Some(mods)
    }

    /// Appends `:none` or `:<names>` to an event string.
    pub(crate) fn append_to(self, event: &mut String) {
        event.push(':');
        if self.is_empty() {
            event.push_str("none");
            return;
        }
        let names: Vec<&str> = Self::NAMED
            .iter()
            .filter(|(flag, _)| self.contains(*flag))
            .map(|(_, name)| *name)
            .collect();
        event.push_str(&names.join(","));
    }
}

impl ops::BitOr for Modifiers {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl ops::BitOrAssign for Modifiers {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

#[cfg(test)]
#[path = "tests/mod_tests.rs"]
mod tests;
