//! Commands that update variables, typically queued from engine callbacks.

use std::sync::Arc;

use crate::vars::{VarList, VarPercent, VarString, VarText};

use super::Command;

/// Refreshes one playlist entry.
pub struct CmdItemUpdate {
    list: Arc<VarList>,
    pos: usize,
}

impl CmdItemUpdate {
    pub fn new(list: Arc<VarList>, pos: usize) -> Self {
        Self { list, pos }
    }

    pub fn pos(&self) -> usize {
        self.pos
    }
}

impl Command for CmdItemUpdate {
    fn execute(&self) {
        if !self.list.refresh_item(self.pos) {
            tracing::debug!(pos = self.pos, "item update for a position no longer in the list");
        }
    }

    fn type_name(&self) -> &str {
        "playtree update"
    }

    /// Updates for different items must all run.
    fn check_remove(&self, queued: &dyn Command) -> bool {
        queued
            .as_any()
            .downcast_ref::<CmdItemUpdate>()
            .is_some_and(|other| other.pos == self.pos)
    }
}

/// Moves the playing marker of the playlist.
pub struct CmdItemPlaying {
    list: Arc<VarList>,
    pos: usize,
}

impl CmdItemPlaying {
    pub fn new(list: Arc<VarList>, pos: usize) -> Self {
        Self { list, pos }
    }
}

impl Command for CmdItemPlaying {
    fn execute(&self) {
        self.list.set_playing(self.pos);
    }

    fn type_name(&self) -> &str {
        "playtree playing"
    }
}

pub struct CmdPlaylistDel {
    list: Arc<VarList>,
}

impl CmdPlaylistDel {
    pub fn new(list: Arc<VarList>) -> Self {
        Self { list }
    }
}

impl Command for CmdPlaylistDel {
    fn execute(&self) {
        self.list.del_selected();
    }

    fn type_name(&self) -> &str {
        "playlist del"
    }
}

pub struct CmdSetText {
    text: Arc<VarText>,
    value: String,
}

impl CmdSetText {
    pub fn new(text: Arc<VarText>, value: impl Into<String>) -> Self {
        Self {
            text,
            value: value.into(),
        }
    }
}

impl Command for CmdSetText {
    fn execute(&self) {
        self.text.set(self.value.clone());
    }

    fn type_name(&self) -> &str {
        "set text"
    }
}

pub struct CmdSetEqPreamp {
    preamp: Arc<VarPercent>,
    value: f32,
}

impl CmdSetEqPreamp {
    pub fn new(preamp: Arc<VarPercent>, value: f32) -> Self {
        Self { preamp, value }
    }
}

impl Command for CmdSetEqPreamp {
    fn execute(&self) {
        self.preamp.set(self.value);
    }

    fn type_name(&self) -> &str {
        "set equalizer preamp"
    }
}

pub struct CmdSetEqBands {
    bands: Arc<VarString>,
    value: String,
}

impl CmdSetEqBands {
    pub fn new(bands: Arc<VarString>, value: impl Into<String>) -> Self {
        Self {
            bands,
            value: value.into(),
        }
    }
}

impl Command for CmdSetEqBands {
    fn execute(&self) {
        self.bands.set(self.value.clone());
    }

    fn type_name(&self) -> &str {
        "set equalizer bands"
    }
}

#[cfg(test)]
#[path = "tests/vars_tests.rs"]
mod tests;
