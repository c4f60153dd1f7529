//! Single-threaded skin loop: dispatches window events, runs posted
//! commands and fires timers.
//!
//! Everything the loop executes runs on the thread that called
//! [`SkinLoop::run`]. Other threads talk to it through a [`LoopHandle`].

use std::{
    collections::BTreeMap,
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc,
    },
    time::{Duration, Instant},
};

use crossbeam_channel::{Receiver, RecvTimeoutError, Sender, TrySendError};
use parking_lot::Mutex;
use shared::{
    domain::{TimerId, WindowId},
    error::SkinError,
};

use crate::{
    commands::CmdGenericPtr,
    config::SkinConfig,
    events::Event,
    fsm::Fsm,
    os::{OsFactory, OsTimer},
};

/// Receives the events posted for one window.
pub trait EventSink: Send {
    fn process_event(&mut self, event: &dyn Event);
}

impl EventSink for Fsm {
    fn process_event(&mut self, event: &dyn Event) {
        self.handle_event(event);
    }
}

impl<F> EventSink for F
where
    F: FnMut(&dyn Event) + Send,
{
    fn process_event(&mut self, event: &dyn Event) {
        self(event)
    }
}

enum LoopMessage {
    Event {
        window: WindowId,
        event: Box<dyn Event>,
    },
    Command(CmdGenericPtr),
    /// Timers changed; recompute the next deadline.
    Wake,
    Quit,
}

struct TimerEntry {
    command: CmdGenericPtr,
    interval: Duration,
    next: Instant,
    one_shot: bool,
}

#[derive(Default)]
struct LoopState {
    /// Armed timers only; stopping a timer removes its entry.
    timers: Mutex<BTreeMap<TimerId, TimerEntry>>,
    mouse: Mutex<(i32, i32)>,
    next_timer: AtomicU64,
}

pub struct SkinLoop {
    state: Arc<LoopState>,
    sender: Sender<LoopMessage>,
    receiver: Receiver<LoopMessage>,
    windows: BTreeMap<WindowId, Box<dyn EventSink>>,
    idle_wait: Duration,
    factory: Arc<LoopFactory>,
}

impl SkinLoop {
    pub fn new(config: &SkinConfig) -> Self {
        let (sender, receiver) = crossbeam_channel::bounded(config.loop_capacity.max(1));
        let state = Arc::new(LoopState::default());
        let factory = Arc::new(LoopFactory {
            state: Arc::clone(&state),
            sender: sender.clone(),
        });
        Self {
            state,
            sender,
            receiver,
            windows: BTreeMap::new(),
            idle_wait: config.idle_wait(),
            factory,
        }
    }

    pub fn handle(&self) -> LoopHandle {
        LoopHandle {
            sender: self.sender.clone(),
        }
    }

    /// Platform factory whose timers fire on this loop.
    pub fn factory(&self) -> Arc<LoopFactory> {
        Arc::clone(&self.factory)
    }

    pub fn register_window(&mut self, id: WindowId, sink: Box<dyn EventSink>) {
        if self.windows.insert(id, sink).is_some() {
            tracing::debug!(window = id.0, "replaced window event sink");
        }
    }

    pub fn unregister_window(&mut self, id: WindowId) {
        self.windows.remove(&id);
    }

    /// Runs until [`LoopHandle::quit`] is called.
    pub fn run(&mut self) {
        self.run_until(None);
    }

    /// Runs for at most `duration`. Returns false if the loop was asked to
    /// quit before the time elapsed.
    pub fn run_for(&mut self, duration: Duration) -> bool {
        self.run_until(Some(Instant::now() + duration))
    }

    fn run_until(&mut self, deadline: Option<Instant>) -> bool {
        loop {
            self.fire_due();

            let now = Instant::now();
            if deadline.is_some_and(|deadline| now >= deadline) {
                return true;
            }
            let mut wake = self.next_deadline().unwrap_or(now + self.idle_wait);
            if let Some(deadline) = deadline {
                wake = wake.min(deadline);
            }

            match self
                .receiver
                .recv_timeout(wake.saturating_duration_since(now))
            {
                Ok(LoopMessage::Quit) => {
                    tracing::debug!("skin loop quit");
                    return false;
                }
                Ok(message) => self.dispatch(message),
                Err(RecvTimeoutError::Timeout) => {}
                Err(RecvTimeoutError::Disconnected) => return false,
            }
        }
    }

    fn dispatch(&mut self, message: LoopMessage) {
        match message {
            LoopMessage::Event { window, event } => {
                if let Some(pos) = event.position() {
                    *self.state.mouse.lock() = pos;
                }
                match self.windows.get_mut(&window) {
                    Some(sink) => sink.process_event(&*event),
                    None => tracing::debug!(window = window.0, "event for unknown window"),
                }
            }
            LoopMessage::Command(command) => command.execute(),
            LoopMessage::Wake | LoopMessage::Quit => {}
        }
    }

    fn next_deadline(&self) -> Option<Instant> {
        self.state.timers.lock().values().map(|entry| entry.next).min()
    }

    /// Executes every timer whose deadline has passed. Periodic timers skip
    /// ticks they missed instead of firing in a burst. A timer stopped or
    /// restarted by an earlier command of the same pass does not fire.
    fn fire_due(&self) {
        let now = Instant::now();
        let due: Vec<TimerId> = self
            .state
            .timers
            .lock()
            .iter()
            .filter(|(_, entry)| entry.next <= now)
            .map(|(id, _)| *id)
            .collect();
        for id in due {
            if let Some(command) = self.take_due(id, now) {
                command.execute();
            }
        }
    }

    fn take_due(&self, id: TimerId, now: Instant) -> Option<CmdGenericPtr> {
        let mut timers = self.state.timers.lock();
        let entry = timers.get_mut(&id)?;
        if entry.next > now {
            return None;
        }
        let command = Arc::clone(&entry.command);
        if !entry.one_shot {
            entry.next += entry.interval;
            if entry.next <= now {
                entry.next = now + entry.interval;
            }
            return Some(command);
        }
        timers.remove(&id);
        Some(command)
    }
}

/// Cloneable, thread-safe access to a running [`SkinLoop`].
#[derive(Clone)]
pub struct LoopHandle {
    sender: Sender<LoopMessage>,
}

impl LoopHandle {
    pub fn post_event(
        &self,
        window: WindowId,
        event: impl Event + 'static,
    ) -> Result<(), SkinError> {
        self.post_boxed_event(window, Box::new(event))
    }

    pub fn post_boxed_event(
        &self,
        window: WindowId,
        event: Box<dyn Event>,
    ) -> Result<(), SkinError> {
        self.send(LoopMessage::Event { window, event })
    }

    /// Runs `command` on the loop thread.
    pub fn post_command(&self, command: CmdGenericPtr) -> Result<(), SkinError> {
        self.send(LoopMessage::Command(command))
    }

    pub fn quit(&self) -> Result<(), SkinError> {
        self.send(LoopMessage::Quit)
    }

    fn send(&self, message: LoopMessage) -> Result<(), SkinError> {
        self.sender.try_send(message).map_err(|err| match err {
            TrySendError::Full(_) => SkinError::LoopFull,
            TrySendError::Disconnected(_) => SkinError::LoopClosed,
        })
    }
}

pub struct LoopFactory {
    state: Arc<LoopState>,
    sender: Sender<LoopMessage>,
}

impl OsFactory for LoopFactory {
    fn create_timer(&self, command: CmdGenericPtr) -> Box<dyn OsTimer> {
        let id = TimerId(self.state.next_timer.fetch_add(1, Ordering::Relaxed));
        Box::new(LoopTimer {
            id,
            command,
            state: Arc::clone(&self.state),
            sender: self.sender.clone(),
        })
    }

    fn mouse_pos(&self) -> (i32, i32) {
        *self.state.mouse.lock()
    }
}

struct LoopTimer {
    id: TimerId,
    command: CmdGenericPtr,
    state: Arc<LoopState>,
    sender: Sender<LoopMessage>,
}

impl OsTimer for LoopTimer {
    fn start(&mut self, delay: Duration, one_shot: bool) {
        let interval = delay.max(Duration::from_millis(1));
        self.state.timers.lock().insert(
            self.id,
            TimerEntry {
                command: Arc::clone(&self.command),
                interval,
                next: Instant::now() + interval,
                one_shot,
            },
        );
        // A full channel already guarantees the loop wakes up soon.
        let _ = self.sender.try_send(LoopMessage::Wake);
    }

    fn stop(&mut self) {
        self.state.timers.lock().remove(&self.id);
    }
}

impl Drop for LoopTimer {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
#[path = "tests/event_loop_tests.rs"]
mod tests;
