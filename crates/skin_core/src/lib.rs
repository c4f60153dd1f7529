//! Skin runtime: observable variables, deferred commands, the async command
//! queue, symbolic events and the finite state machines that tie them together.

pub mod commands;
pub mod config;
pub mod engine;
pub mod event_loop;
pub mod events;
pub mod fsm;
pub mod intf;
pub mod observer;
pub mod os;
pub mod popup;
pub mod tooltip;
pub mod vars;

pub use commands::{async_queue::AsyncQueue, CmdGenericPtr, Command};
pub use config::{load_config, load_config_from, SkinConfig};
pub use event_loop::{EventSink, LoopFactory, LoopHandle, SkinLoop};
pub use events::Event;
pub use fsm::Fsm;
pub use intf::SkinIntf;
pub use observer::{Observer, Subject};

#[cfg(test)]
#[path = "tests/support.rs"]
pub(crate) mod test_support;
