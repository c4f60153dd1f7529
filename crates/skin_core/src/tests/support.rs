//! Fakes shared by the unit tests.

use std::{sync::Arc, time::Duration};

use parking_lot::Mutex;
use shared::domain::{ExportFormat, PlaybackOrder, PlaybackRepeat};

use crate::{
    commands::{CmdCallback, CmdGenericPtr},
    engine::MediaEngine,
    os::{OsFactory, OsPopup, OsTimer, OsTooltip, OsWindow},
};

#[derive(Default)]
pub struct TimerLog {
    pub started: Mutex<Vec<(Duration, bool)>>,
    pub stopped: Mutex<usize>,
}

pub struct ManualTimer {
    log: Arc<TimerLog>,
}

impl OsTimer for ManualTimer {
    fn start(&mut self, delay: Duration, one_shot: bool) {
        self.log.started.lock().push((delay, one_shot));
    }

    fn stop(&mut self) {
        *self.log.stopped.lock() += 1;
    }
}

/// Factory whose timers only fire when the test says so.
#[derive(Default)]
pub struct ManualFactory {
    pub log: Arc<TimerLog>,
    pub callbacks: Mutex<Vec<CmdGenericPtr>>,
    pub mouse: Mutex<(i32, i32)>,
}

impl ManualFactory {
    pub fn fire(&self) {
        let callbacks = self.callbacks.lock().clone();
        for callback in callbacks {
            callback.execute();
        }
    }
}

impl OsFactory for ManualFactory {
    fn create_timer(&self, command: CmdGenericPtr) -> Box<dyn OsTimer> {
        self.callbacks.lock().push(command);
        Box::new(ManualTimer {
            log: Arc::clone(&self.log),
        })
    }

    fn mouse_pos(&self) -> (i32, i32) {
        *self.mouse.lock()
    }
}

pub fn logged(log: &Arc<Mutex<Vec<String>>>, type_name: &str, label: &str) -> CmdGenericPtr {
    let log = Arc::clone(log);
    let label = label.to_string();
    Arc::new(CmdCallback::new(type_name, move || {
        log.lock().push(label.clone());
    }))
}

/// Engine that records every call as a short string.
#[derive(Default)]
pub struct RecordingEngine {
    pub calls: Mutex<Vec<String>>,
    pub items: Mutex<usize>,
    pub started: Mutex<bool>,
    pub position: Mutex<Option<f32>>,
    pub time: Mutex<Duration>,
    pub length: Mutex<Duration>,
    pub fail_export: bool,
}

impl RecordingEngine {
    pub fn with_items(items: usize) -> Self {
        Self {
            items: Mutex::new(items),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().clone()
    }

    fn record(&self, call: impl Into<String>) {
        self.calls.lock().push(call.into());
    }
}

impl MediaEngine for RecordingEngine {
    fn item_count(&self) -> usize {
        *self.items.lock()
    }

    fn is_started(&self) -> bool {
        *self.started.lock()
    }

    fn play_at(&self, index: usize) {
        *self.started.lock() = true;
        self.record(format!("play_at {index}"));
    }

    fn resume(&self) {
        self.record("resume");
    }

    fn pause(&self) {
        self.record("pause");
    }

    fn stop(&self) {
        *self.started.lock() = false;
        self.record("stop");
    }

    fn go_to(&self, index: Option<usize>) {
        self.record(format!("go_to {index:?}"));
    }

    fn next(&self) {
        self.record("next");
    }

    fn previous(&self) {
        self.record("previous");
    }

    fn increment_rate(&self) {
        self.record("faster");
    }

    fn decrement_rate(&self) {
        self.record("slower");
    }

    fn toggle_mute(&self) {
        self.record("mute");
    }

    fn change_volume(&self, steps: i32) {
        self.record(format!("volume {steps:+}"));
    }

    fn set_volume(&self, volume: f32) {
        self.record(format!("set_volume {volume}"));
    }

    fn set_playback_order(&self, order: PlaybackOrder) {
        self.record(format!("order {order:?}"));
    }

    fn set_playback_repeat(&self, repeat: PlaybackRepeat) {
        self.record(format!("repeat {repeat:?}"));
    }

    fn append(&self, uri: &str) -> Option<usize> {
        let mut items = self.items.lock();
        *items += 1;
        self.record(format!("append {uri}"));
        Some(*items - 1)
    }

    fn export(&self, path: &str, format: ExportFormat) -> anyhow::Result<()> {
        if self.fail_export {
            anyhow::bail!("disk full");
        }
        self.record(format!("export {path} {}", format.module_name()));
        Ok(())
    }

    fn seek_title(&self, title: usize) {
        self.record(format!("title {title}"));
    }

    fn seek_chapter(&self, chapter: usize) {
        self.record(format!("chapter {chapter}"));
    }

    fn position(&self) -> Option<f32> {
        *self.position.lock()
    }

    fn set_position(&self, position: f32) {
        *self.position.lock() = Some(position);
        self.record(format!("position {position}"));
    }

    fn time(&self) -> Duration {
        *self.time.lock()
    }

    fn length(&self) -> Duration {
        *self.length.lock()
    }
}

/// Records calls made by window, popup and tooltip consumers.
#[derive(Default)]
pub struct RecordingOs {
    pub calls: Mutex<Vec<String>>,
}

impl RecordingOs {
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().clone()
    }

    fn record(&self, call: impl Into<String>) {
        self.calls.lock().push(call.into());
    }
}

impl OsWindow for RecordingOs {
    fn show(&self) {
        self.record("show");
    }

    fn hide(&self) {
        self.record("hide");
    }

    fn move_resize(&self, left: i32, top: i32, width: u32, height: u32) {
        self.record(format!("move {left},{top} {width}x{height}"));
    }

    fn raise(&self) {
        self.record("raise");
    }

    fn set_opacity(&self, opacity: u8) {
        self.record(format!("opacity {opacity}"));
    }

    fn toggle_on_top(&self, on_top: bool) {
        self.record(format!("on top {on_top}"));
    }

    fn invalidate_rect(&self, left: i32, top: i32, width: u32, height: u32) {
        self.record(format!("invalidate {left},{top} {width}x{height}"));
    }
}

/// Native ids are the item position plus 100.
impl OsPopup for RecordingOs {
    fn show(&self, x: i32, y: i32) {
        self.record(format!("popup show {x},{y}"));
    }

    fn hide(&self) {
        self.record("popup hide");
    }

    fn add_item(&self, label: &str, pos: usize) {
        self.record(format!("item {pos} {label}"));
    }

    fn add_separator(&self, pos: usize) {
        self.record(format!("separator {pos}"));
    }

    fn pos_from_id(&self, id: u32) -> Option<usize> {
        id.checked_sub(100).map(|pos| pos as usize)
    }
}

impl OsTooltip for RecordingOs {
    fn show(&self, left: i32, top: i32, text: &str) {
        self.record(format!("tooltip {left},{top} {text}"));
    }

    fn hide(&self) {
        self.record("tooltip hide");
    }
}
