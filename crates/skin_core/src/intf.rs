//! Per-interface context: what a skin instance shares between its windows.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::{
    commands::async_queue::AsyncQueue, config::SkinConfig, os::OsFactory, vars::VarManager,
};

pub struct SkinIntf {
    config: SkinConfig,
    factory: Arc<dyn OsFactory>,
    vars: VarManager,
    queue: Mutex<Option<Arc<AsyncQueue>>>,
}

impl SkinIntf {
    pub fn new(config: SkinConfig, factory: Arc<dyn OsFactory>) -> Self {
        Self {
            config,
            factory,
            vars: VarManager::new(),
            queue: Mutex::new(None),
        }
    }

    pub fn config(&self) -> &SkinConfig {
        &self.config
    }

    pub fn factory(&self) -> &Arc<dyn OsFactory> {
        &self.factory
    }

    pub fn vars(&self) -> &VarManager {
        &self.vars
    }

    /// The interface's command queue, created on first use.
    pub fn queue(&self) -> Arc<AsyncQueue> {
        AsyncQueue::instance(self)
    }

    pub(crate) fn queue_slot(&self) -> &Mutex<Option<Arc<AsyncQueue>>> {
        &self.queue
    }
}

impl Drop for SkinIntf {
    fn drop(&mut self) {
        AsyncQueue::destroy(self);
    }
}

#[cfg(test)]
#[path = "tests/intf_tests.rs"]
mod tests;
