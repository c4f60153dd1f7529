//! Popup menus whose items run commands.

use std::{collections::BTreeMap, sync::Arc};

use parking_lot::Mutex;

use crate::{commands::CmdGenericPtr, events::EvtMenu, os::OsPopup};

pub struct Popup {
    os_popup: Arc<dyn OsPopup>,
    actions: Mutex<BTreeMap<usize, CmdGenericPtr>>,
}

impl Popup {
    pub fn new(os_popup: Arc<dyn OsPopup>) -> Self {
        Self {
            os_popup,
            actions: Mutex::new(BTreeMap::new()),
        }
    }

    pub fn add_item(&self, label: &str, command: CmdGenericPtr, pos: usize) {
        self.os_popup.add_item(label, pos);
        self.actions.lock().insert(pos, command);
    }

    pub fn add_separator(&self, pos: usize) {
        self.os_popup.add_separator(pos);
    }

    pub fn show(&self, x: i32, y: i32) {
        self.os_popup.show(x, y);
    }

    pub fn hide(&self) {
        self.os_popup.hide();
    }

    /// Runs the command bound to the chosen menu item and closes the menu.
    /// Returns false when the item id does not map to a command.
    pub fn handle_menu(&self, event: &EvtMenu) -> bool {
        let action = self
            .os_popup
            .pos_from_id(event.item_id())
            .and_then(|pos| self.actions.lock().get(&pos).cloned());
        let Some(command) = action else {
            tracing::debug!(item_id = event.item_id(), "menu event without an action");
            return false;
        };
        command.execute();
        self.hide();
        true
    }
}

#[cfg(test)]
#[path = "tests/popup_tests.rs"]
mod tests;
