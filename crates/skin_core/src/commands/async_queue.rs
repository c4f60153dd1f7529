use std::{
    collections::VecDeque,
    sync::{Arc, Weak},
    time::Duration,
};

use parking_lot::Mutex;

use crate::{intf::SkinIntf, os::OsFactory, os::OsTimer};

use super::{CmdGenericPtr, Command};

/// FIFO of pending commands, flushed periodically by a timer.
///
/// Pushing a command may first drop queued commands of the same type, which
/// keeps bursts such as slider drags down to one pending command per type.
pub struct AsyncQueue {
    commands: Mutex<VecDeque<CmdGenericPtr>>,
    timer: Mutex<Option<Box<dyn OsTimer>>>,
}

struct CmdFlush {
    queue: Weak<AsyncQueue>,
}

impl Command for CmdFlush {
    fn execute(&self) {
        if let Some(queue) = self.queue.upgrade() {
            queue.flush();
        }
    }

    fn type_name(&self) -> &str {
        "async queue flush"
    }
}

impl AsyncQueue {
    /// Creates a queue whose flush timer comes from `factory`.
    pub fn new(factory: &dyn OsFactory, flush_interval: Duration) -> Arc<Self> {
        let queue = Arc::new(Self {
            commands: Mutex::new(VecDeque::new()),
            timer: Mutex::new(None),
        });
        let flush = Arc::new(CmdFlush {
            queue: Arc::downgrade(&queue),
        });
        let mut timer = factory.create_timer(flush);
        timer.start(flush_interval, false);
        *queue.timer.lock() = Some(timer);
        queue
    }

    /// Returns the interface's queue, creating it on first use.
    pub fn instance(intf: &SkinIntf) -> Arc<Self> {
        let mut slot = intf.queue_slot().lock();
        let queue = slot.get_or_insert_with(|| {
            tracing::debug!(
                interval_ms = intf.config().flush_interval_ms,
                "creating async command queue"
            );
            Self::new(&**intf.factory(), intf.config().flush_interval())
        });
        Arc::clone(queue)
    }

    /// Detaches the interface's queue and stops its flush timer. Commands
    /// still pending are dropped without running.
    pub fn destroy(intf: &SkinIntf) {
        let queue = intf.queue_slot().lock().take();
        if let Some(queue) = queue {
            queue.stop();
            let dropped = queue.commands.lock().drain(..).count();
            if dropped > 0 {
                tracing::debug!(dropped, "destroyed async queue with pending commands");
            }
        }
    }

    pub fn push(&self, command: CmdGenericPtr, remove_prev: bool) {
        let mut commands = self.commands.lock();
        if remove_prev {
            Self::remove(&mut commands, &command);
        }
        tracing::trace!(command = command.type_name(), "queued command");
        commands.push_back(command);
    }

    fn remove(commands: &mut VecDeque<CmdGenericPtr>, command: &CmdGenericPtr) {
        let type_name = command.type_name();
        commands.retain(|queued| {
            !(queued.type_name() == type_name && command.check_remove(&**queued))
        });
    }

    /// Executes queued commands in FIFO order until the queue is empty.
    /// The lock is only held to pop, so commands may push while running.
    pub fn flush(&self) {
        loop {
            let next = self.commands.lock().pop_front();
            let Some(command) = next else {
                break;
            };
            command.execute();
        }
    }

    pub fn len(&self) -> usize {
        self.commands.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.lock().is_empty()
    }

    fn stop(&self) {
        if let Some(mut timer) = self.timer.lock().take() {
            timer.stop();
        }
    }
}

impl Drop for AsyncQueue {
    fn drop(&mut self) {
        if let Some(timer) = self.timer.get_mut().as_mut() {
            timer.stop();
        }
    }
}

#[cfg(test)]
#[path = "tests/async_queue_tests.rs"]
mod tests;
