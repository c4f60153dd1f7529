use std::sync::Arc;

use shared::domain::{ExportFormat, PlaybackOrder, PlaybackRepeat};
use url::Url;

use crate::engine::MediaEngine;

use super::{engine_command, Command};

engine_command!(CmdPlaylistNext, "playlist next", |engine| {
    engine.next();
});

engine_command!(CmdPlaylistPrevious, "playlist previous", |engine| {
    engine.previous();
});

engine_command!(CmdPlaylistFirst, "playlist first", |engine| {
    engine.play_at(0);
});

macro_rules! toggle_command {
    ($name:ident, $type_name:literal, |$engine:ident, $value:ident| $body:block) => {
        pub struct $name {
            engine: Arc<dyn MediaEngine>,
            value: bool,
        }

        impl $name {
            pub fn new(engine: Arc<dyn MediaEngine>, value: bool) -> Self {
                Self { engine, value }
            }
        }

        impl Command for $name {
            fn execute(&self) {
                let $engine: &dyn MediaEngine = &*self.engine;
                let $value = self.value;
                $body
            }

            fn type_name(&self) -> &str {
                $type_name
            }
        }
    };
}

toggle_command!(CmdPlaylistRandom, "playlist random", |engine, random| {
    engine.set_playback_order(if random {
        PlaybackOrder::Random
    } else {
        PlaybackOrder::Normal
    });
});

toggle_command!(CmdPlaylistLoop, "playlist loop", |engine, looping| {
    engine.set_playback_repeat(if looping {
        PlaybackRepeat::All
    } else {
        PlaybackRepeat::None
    });
});

toggle_command!(CmdPlaylistRepeat, "playlist repeat", |engine, repeat| {
    engine.set_playback_repeat(if repeat {
        PlaybackRepeat::Current
    } else {
        PlaybackRepeat::None
    });
});

/// Appends a local playlist file and starts playing it.
pub struct CmdPlaylistLoad {
    engine: Arc<dyn MediaEngine>,
    uri: String,
}

impl CmdPlaylistLoad {
    pub fn new(engine: Arc<dyn MediaEngine>, uri: impl Into<String>) -> Self {
        Self {
            engine,
            uri: uri.into(),
        }
    }
}

impl Command for CmdPlaylistLoad {
    fn execute(&self) {
        let is_local = Url::parse(&self.uri)
            .ok()
            .and_then(|url| url.to_file_path().ok())
            .is_some();
        if !is_local {
            tracing::error!(uri = %self.uri, "unable to load playlist");
            return;
        }
        if let Some(index) = self.engine.append(&self.uri) {
            self.engine.play_at(index);
        }
    }

    fn type_name(&self) -> &str {
        "playlist load"
    }
}

/// Exports the playlist, picking the format from the target file name.
pub struct CmdPlaylistSave {
    engine: Arc<dyn MediaEngine>,
    path: String,
}

impl CmdPlaylistSave {
    pub fn new(engine: Arc<dyn MediaEngine>, path: impl Into<String>) -> Self {
        Self {
            engine,
            path: path.into(),
        }
    }
}

impl Command for CmdPlaylistSave {
    fn execute(&self) {
        let Some(format) = ExportFormat::from_file_name(&self.path) else {
            tracing::error!(path = %self.path, "did not recognise playlist export file type");
            return;
        };
        if let Err(err) = self.engine.export(&self.path, format) {
            tracing::error!(path = %self.path, "playlist export failed: {err:#}");
        }
    }

    fn type_name(&self) -> &str {
        "playlist save"
    }
}

#[cfg(test)]
#[path = "tests/playlist_tests.rs"]
mod tests;
