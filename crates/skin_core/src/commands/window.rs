use std::sync::Arc;

use crate::os::{OsFactory, OsWindow};
use crate::popup::Popup;

use super::Command;

pub struct CmdShowWindow {
    window: Arc<dyn OsWindow>,
}

impl CmdShowWindow {
    pub fn new(window: Arc<dyn OsWindow>) -> Self {
        Self { window }
    }
}

impl Command for CmdShowWindow {
    fn execute(&self) {
        self.window.show();
    }

    fn type_name(&self) -> &str {
        "show window"
    }
}

pub struct CmdHideWindow {
    window: Arc<dyn OsWindow>,
}

impl CmdHideWindow {
    pub fn new(window: Arc<dyn OsWindow>) -> Self {
        Self { window }
    }
}

impl Command for CmdHideWindow {
    fn execute(&self) {
        self.window.hide();
    }

    fn type_name(&self) -> &str {
        "hide window"
    }
}

pub struct CmdRaiseAll {
    windows: Vec<Arc<dyn OsWindow>>,
}

impl CmdRaiseAll {
    pub fn new(windows: Vec<Arc<dyn OsWindow>>) -> Self {
        Self { windows }
    }
}

impl Command for CmdRaiseAll {
    fn execute(&self) {
        for window in &self.windows {
            window.raise();
        }
    }

    fn type_name(&self) -> &str {
        "raise all windows"
    }
}

/// Keeps every window above (or releases them from above) other windows.
pub struct CmdSetOnTop {
    windows: Vec<Arc<dyn OsWindow>>,
    on_top: bool,
}

impl CmdSetOnTop {
    pub fn new(windows: Vec<Arc<dyn OsWindow>>, on_top: bool) -> Self {
        Self { windows, on_top }
    }
}

impl Command for CmdSetOnTop {
    fn execute(&self) {
        for window in &self.windows {
            window.toggle_on_top(self.on_top);
        }
    }

    fn type_name(&self) -> &str {
        "on top"
    }
}

pub struct CmdSetOpacity {
    window: Arc<dyn OsWindow>,
    opacity: u8,
}

impl CmdSetOpacity {
    pub fn new(window: Arc<dyn OsWindow>, opacity: u8) -> Self {
        Self { window, opacity }
    }
}

impl Command for CmdSetOpacity {
    fn execute(&self) {
        self.window.set_opacity(self.opacity);
    }

    fn type_name(&self) -> &str {
        "set opacity"
    }
}

/// Opens a popup menu under the mouse pointer.
pub struct CmdShowPopup {
    popup: Arc<Popup>,
    factory: Arc<dyn OsFactory>,
}

impl CmdShowPopup {
    pub fn new(popup: Arc<Popup>, factory: Arc<dyn OsFactory>) -> Self {
        Self { popup, factory }
    }
}

impl Command for CmdShowPopup {
    fn execute(&self) {
        let (x, y) = self.factory.mouse_pos();
        self.popup.show(x, y);
    }

    fn type_name(&self) -> &str {
        "show popup"
    }
}

pub struct CmdHidePopup {
    popup: Arc<Popup>,
}

impl CmdHidePopup {
    pub fn new(popup: Arc<Popup>) -> Self {
        Self { popup }
    }
}

impl Command for CmdHidePopup {
    fn execute(&self) {
        self.popup.hide();
    }

    fn type_name(&self) -> &str {
        "hide popup"
    }
}

#[cfg(test)]
#[path = "tests/window_tests.rs"]
mod tests;
