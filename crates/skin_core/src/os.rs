//! Capabilities a platform backend provides to the skin runtime.

use std::time::Duration;

use crate::commands::CmdGenericPtr;

pub trait OsTimer: Send {
    /// (Re)starts the timer. A one-shot timer stops after its first firing.
    fn start(&mut self, delay: Duration, one_shot: bool);
    fn stop(&mut self);
}

pub trait OsWindow: Send + Sync {
    fn show(&self);
    fn hide(&self);
    fn move_resize(&self, left: i32, top: i32, width: u32, height: u32);
    fn raise(&self);
    fn set_opacity(&self, opacity: u8);
    fn toggle_on_top(&self, on_top: bool);
    fn invalidate_rect(&self, left: i32, top: i32, width: u32, height: u32);
}

pub trait OsPopup: Send + Sync {
    fn show(&self, x: i32, y: i32);
    fn hide(&self);
    fn add_item(&self, label: &str, pos: usize);
    fn add_separator(&self, pos: usize);
    /// Maps a native menu item id back to the position it was added at.
    fn pos_from_id(&self, id: u32) -> Option<usize>;
}

pub trait OsTooltip: Send + Sync {
    fn show(&self, left: i32, top: i32, text: &str);
    fn hide(&self);
}

pub trait OsFactory: Send + Sync {
    /// Creates a stopped timer that executes `command` when it fires.
    fn create_timer(&self, command: CmdGenericPtr) -> Box<dyn OsTimer>;

    fn mouse_pos(&self) -> (i32, i32);
}
