//! Playback commands bound to transport buttons and hotkeys.

use std::sync::Arc;

use crate::engine::MediaEngine;

use super::{engine_command, Command};

engine_command!(
    /// Resumes playback, or starts the first item when nothing is playing.
    CmdPlay,
    "play",
    |engine| {
        if engine.item_count() == 0 {
            tracing::warn!("playlist is empty, nothing to play");
        } else if engine.is_started() {
            engine.resume();
        } else {
            engine.play_at(0);
        }
    }
);

engine_command!(CmdPause, "pause", |engine| {
    engine.pause();
});

engine_command!(
    /// Stops and leaves no current item.
    CmdStop,
    "stop",
    |engine| {
        engine.stop();
        engine.go_to(None);
    }
);

engine_command!(CmdSlower, "slower", |engine| {
    engine.decrement_rate();
});

engine_command!(CmdFaster, "faster", |engine| {
    engine.increment_rate();
});

engine_command!(CmdMute, "mute", |engine| {
    engine.toggle_mute();
});

engine_command!(CmdVolumeUp, "volume up", |engine| {
    engine.change_volume(1);
});

engine_command!(CmdVolumeDown, "volume down", |engine| {
    engine.change_volume(-1);
});

/// Sets an absolute volume; rapid slider moves collapse to the latest one.
pub struct CmdSetVolume {
    engine: Arc<dyn MediaEngine>,
    volume: f32,
}

impl CmdSetVolume {
    pub fn new(engine: Arc<dyn MediaEngine>, volume: f32) -> Self {
        Self { engine, volume }
    }
}

impl Command for CmdSetVolume {
    fn execute(&self) {
        self.engine.set_volume(self.volume.clamp(0.0, 1.0));
    }

    fn type_name(&self) -> &str {
        "set volume"
    }
}

pub struct CmdSeekTitle {
    engine: Arc<dyn MediaEngine>,
    title: usize,
}

impl CmdSeekTitle {
    pub fn new(engine: Arc<dyn MediaEngine>, title: usize) -> Self {
        Self { engine, title }
    }
}

impl Command for CmdSeekTitle {
    fn execute(&self) {
        self.engine.seek_title(self.title);
    }

    fn type_name(&self) -> &str {
        "seek title"
    }
}

pub struct CmdSeekChapter {
    engine: Arc<dyn MediaEngine>,
    chapter: usize,
}

impl CmdSeekChapter {
    pub fn new(engine: Arc<dyn MediaEngine>, chapter: usize) -> Self {
        Self { engine, chapter }
    }
}

impl Command for CmdSeekChapter {
    fn execute(&self) {
        self.engine.seek_chapter(self.chapter);
    }

    fn type_name(&self) -> &str {
        "seek chapter"
    }
}

#[cfg(test)]
#[path = "tests/input_tests.rs"]
mod tests;
