//! Delayed tooltip that follows the interface's tooltip text.

use std::{
    sync::{Arc, Weak},
    time::Duration,
};

use parking_lot::Mutex;

use crate::{
    commands::CmdCallback,
    observer::Observer,
    os::{OsFactory, OsTimer, OsTooltip},
    vars::VarText,
};

pub struct Tooltip {
    os_tooltip: Arc<dyn OsTooltip>,
    text: Arc<VarText>,
    timer: Mutex<Box<dyn OsTimer>>,
    delay: Duration,
}

impl Tooltip {
    /// Creates the tooltip and subscribes it to `text`.
    pub fn new(
        factory: &Arc<dyn OsFactory>,
        os_tooltip: Arc<dyn OsTooltip>,
        text: Arc<VarText>,
        delay: Duration,
    ) -> Arc<Self> {
        Arc::new_cyclic(|this: &Weak<Tooltip>| {
            let this = this.clone();
            let pointer = Arc::downgrade(factory);
            let show = CmdCallback::new("tooltip show", move || {
                let (Some(tooltip), Some(factory)) = (this.upgrade(), pointer.upgrade()) else {
                    return;
                };
                let (x, y) = factory.mouse_pos();
                tooltip.display(x, y);
            });
            let timer = Mutex::new(factory.create_timer(Arc::new(show)));
            Self {
                os_tooltip,
                text,
                timer,
                delay,
            }
        })
        .subscribed()
    }

    fn subscribed(self: Arc<Self>) -> Arc<Self> {
        let handle = Arc::downgrade(&self);
        self.text.subject().add_observer(handle);
        self
    }

    fn display(&self, x: i32, y: i32) {
        let text = self.text.get();
        if !text.is_empty() {
            self.os_tooltip.show(x, y, &text);
        }
    }
}

impl Observer<VarText> for Tooltip {
    fn on_update(&self, subject: &VarText, _arg: &()) {
        let mut timer = self.timer.lock();
        if subject.is_empty() {
            timer.stop();
            self.os_tooltip.hide();
        } else {
            timer.start(self.delay, true);
        }
    }
}

impl Drop for Tooltip {
    fn drop(&mut self) {
        self.timer.get_mut().stop();
    }
}

#[cfg(test)]
#[path = "tests/tooltip_tests.rs"]
mod tests;
