//! Boundary to the playback engine that commands drive.

use std::time::Duration;

use shared::domain::{ExportFormat, PlaybackOrder, PlaybackRepeat};

/// Synchronous playback and playlist operations. Implementations do their
/// own locking; commands call one operation at a time.
pub trait MediaEngine: Send + Sync {
    fn item_count(&self) -> usize;
    fn is_started(&self) -> bool;

    fn play_at(&self, index: usize);
    fn resume(&self);
    fn pause(&self);
    fn stop(&self);
    /// Moves the cursor; `None` leaves no current item.
    fn go_to(&self, index: Option<usize>);
    fn next(&self);
    fn previous(&self);

    fn increment_rate(&self);
    fn decrement_rate(&self);

    fn toggle_mute(&self);
    /// Adjusts the volume by `steps` (negative lowers it).
    fn change_volume(&self, steps: i32);
    /// Sets the volume, `0.0..=1.0`.
    fn set_volume(&self, volume: f32);

    fn set_playback_order(&self, order: PlaybackOrder);
    fn set_playback_repeat(&self, repeat: PlaybackRepeat);

    /// Appends a media item, returning its index when the engine accepted it.
    fn append(&self, uri: &str) -> Option<usize>;
    fn export(&self, path: &str, format: ExportFormat) -> anyhow::Result<()>;

    fn seek_title(&self, title: usize);
    fn seek_chapter(&self, chapter: usize);

    /// Playback position in `[0, 1]`, `None` when nothing is loaded.
    fn position(&self) -> Option<f32>;
    fn set_position(&self, position: f32);
    /// Elapsed time of the current item.
    fn time(&self) -> Duration;
    fn length(&self) -> Duration;
}
