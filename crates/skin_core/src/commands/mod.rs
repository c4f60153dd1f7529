//! Deferred units of work executed by FSM transitions, timers and the async
//! queue.

use std::{any::Any, fmt, sync::Arc};

pub mod async_queue;
pub mod input;
pub mod playlist;
pub mod vars;
pub mod window;

pub trait AsAny {
    fn as_any(&self) -> &dyn Any;
}

impl<T: Any> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

pub trait Command: AsAny + Send + Sync {
    /// Performs the side effect.
    fn execute(&self);

    /// Classification used when the queue collapses pending commands. Several
    /// command kinds may deliberately share a type.
    fn type_name(&self) -> &str {
        ""
    }

    /// Whether a queued command of the same type may be dropped in favour of
    /// this one.
    fn check_remove(&self, _queued: &dyn Command) -> bool {
        true
    }
}

pub type CmdGenericPtr = Arc<dyn Command>;

/// Runs a fixed list of commands in order behind a single queue slot.
pub struct CmdMuxer {
    commands: Vec<CmdGenericPtr>,
}

impl CmdMuxer {
    pub fn new(commands: Vec<CmdGenericPtr>) -> Self {
        Self { commands }
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl Command for CmdMuxer {
    fn execute(&self) {
        for command in &self.commands {
            command.execute();
        }
    }

    fn type_name(&self) -> &str {
        "muxer"
    }
}

/// Closure command, for components that react to their own timers or
/// transitions.
pub struct CmdCallback {
    type_name: String,
    callback: Box<dyn Fn() + Send + Sync>,
}

impl CmdCallback {
    pub fn new(type_name: impl Into<String>, callback: impl Fn() + Send + Sync + 'static) -> Self {
        Self {
            type_name: type_name.into(),
            callback: Box::new(callback),
        }
    }
}

impl Command for CmdCallback {
    fn execute(&self) {
        (self.callback)();
    }

    fn type_name(&self) -> &str {
        &self.type_name
    }
}

impl fmt::Debug for CmdCallback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CmdCallback")
            .field("type_name", &self.type_name)
            .finish_non_exhaustive()
    }
}

/// Declares a command that forwards to the media engine.
macro_rules! engine_command {
    ($(#[$meta:meta])* $name:ident, $type_name:literal, |$engine:ident| $body:block) => {
        $(#[$meta])*
        pub struct $name {
            engine: ::std::sync::Arc<dyn $crate::engine::MediaEngine>,
        }

        impl $name {
            pub fn new(engine: ::std::sync::Arc<dyn $crate::engine::MediaEngine>) -> Self {
                Self { engine }
            }
        }

        impl $crate::commands::Command for $name {
            fn execute(&self) {
                let $engine: &dyn $crate::engine::MediaEngine = &*self.engine;
                $body
            }

            fn type_name(&self) -> &str {
                $type_name
            }
        }
    };
}

pub(crate) use engine_command;

#[cfg(test)]
#[path = "tests/mod_tests.rs"]
mod tests;
