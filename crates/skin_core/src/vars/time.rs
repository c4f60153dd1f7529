use std::{sync::Arc, time::Duration};

use crate::engine::MediaEngine;

use super::{impl_variable, VarPercent};

const NO_TIME: &str = "-:--:--";

/// Stream position as a percentage, plus the time strings skins print next
/// to the seek bar.
pub struct StreamTime {
    percent: VarPercent,
    engine: Arc<dyn MediaEngine>,
}

impl_variable!(StreamTime, "percent");

impl StreamTime {
    pub fn new(engine: Arc<dyn MediaEngine>) -> Self {
        Self {
            percent: VarPercent::new(),
            engine,
        }
    }

    /// The underlying percentage, for sliders and observers.
    pub fn percent(&self) -> &VarPercent {
        &self.percent
    }

    pub fn get(&self) -> f32 {
        self.percent.get()
    }

    /// Stores the position. `update_engine` is false when the value came
    /// from the engine itself, so the change is not echoed back.
    pub fn set(&self, position: f32, update_engine: bool) {
        self.percent.set(position);
        if update_engine {
            self.engine.set_position(self.percent.get());
        }
    }

    /// Position as a whole percentage, `"0"` to `"100"`.
    pub fn as_string_percent(&self) -> String {
        ((100.0 * self.get()) as i32).to_string()
    }

    pub fn as_string_curr_time(&self, short: bool) -> String {
        if !self.have_position() {
            return NO_TIME.to_string();
        }
        format_time(self.engine.time(), short)
    }

    pub fn as_string_time_left(&self, short: bool) -> String {
        if !self.have_position() {
            return NO_TIME.to_string();
        }
        let left = self.engine.length().saturating_sub(self.engine.time());
        format_time(left, short)
    }

    pub fn as_string_duration(&self, short: bool) -> String {
        if !self.have_position() {
            return NO_TIME.to_string();
        }
        format_time(self.engine.length(), short)
    }

    // A position of exactly zero means the engine has nothing seekable yet.
    fn have_position(&self) -> bool {
        self.engine.position().is_some_and(|position| position != 0.0)
    }
}

/// `mm:ss` when `short` and under an hour, `h:mm:ss` otherwise.
pub fn format_time(time: Duration, short: bool) -> String {
    let seconds = time.as_secs();
    if short && seconds < 60 * 60 {
        format!("{:02}:{:02}", seconds / 60 % 60, seconds % 60)
    } else {
        format!(
            "{}:{:02}:{:02}",
            seconds / (60 * 60),
            seconds / 60 % 60,
            seconds % 60
        )
    }
}

#[cfg(test)]
#[path = "tests/time_tests.rs"]
mod tests;
