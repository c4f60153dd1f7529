//! Finite state machine driven by symbolic event strings.
//!
//! An event such as `mouse:left:down:ctrl` first looks for an exact
//! transition, then retries with its last `:`-segment removed
//! (`mouse:left:down`, `mouse:left`, `mouse`) until one matches.

use std::{
    collections::{BTreeMap, BTreeSet},
    fmt,
};

use shared::error::SkinError;

use crate::{commands::CmdGenericPtr, events::Event};

struct Transition {
    target: String,
    command: Option<CmdGenericPtr>,
}

#[derive(Default)]
pub struct Fsm {
    current: Option<String>,
    states: BTreeSet<String>,
    /// state -> event -> transition
    transitions: BTreeMap<String, BTreeMap<String, Transition>>,
}

impl Fsm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_state(&mut self, state: impl Into<String>) {
        self.states.insert(state.into());
    }

    pub fn has_state(&self, state: &str) -> bool {
        self.states.contains(state)
    }

    /// Declares `from --event--> to`, executing `command` when taken. Both
    /// states must exist and the first declaration for a pair wins.
    pub fn add_transition(
        &mut self,
        from: &str,
        event: &str,
        to: &str,
        command: Option<CmdGenericPtr>,
    ) -> Result<(), SkinError> {
        for state in [from, to] {
            if !self.has_state(state) {
                tracing::warn!(from, to, event, "ignoring transition between invalid states");
                return Err(SkinError::UnknownState(state.to_string()));
            }
        }
        let events = self.transitions.entry(from.to_string()).or_default();
        if events.contains_key(event) {
            tracing::warn!(from, event, "transition already exists");
            return Err(SkinError::DuplicateTransition {
                state: from.to_string(),
                event: event.to_string(),
            });
        }
        events.insert(
            event.to_string(),
            Transition {
                target: to.to_string(),
                command,
            },
        );
        Ok(())
    }

    /// Forces the current state without running any command.
    pub fn set_state(&mut self, state: &str) -> Result<(), SkinError> {
        if !self.has_state(state) {
            tracing::warn!(state, "trying to set an invalid state");
            return Err(SkinError::UnknownState(state.to_string()));
        }
        self.current = Some(state.to_string());
        Ok(())
    }

    pub fn state(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// Takes the transition matching `event`, falling back to ever shorter
    /// prefixes of it. The new state is in place before the command runs.
    /// Returns whether a transition was taken.
    pub fn handle_transition(&mut self, event: &str) -> bool {
        let Some(current) = self.current.as_deref() else {
            return false;
        };
        let Some(events) = self.transitions.get(current) else {
            return false;
        };

        let mut key = event;
        let transition = loop {
            if let Some(transition) = events.get(key) {
                break transition;
            }
            match key.rfind(':') {
                Some(cut) => key = &key[..cut],
                None => return false,
            }
        };

        tracing::trace!(
            from = current,
            to = %transition.target,
            event,
            matched = key,
            "fsm transition"
        );
        let command = transition.command.clone();
        self.current = Some(transition.target.clone());
        if let Some(command) = command {
            command.execute();
        }
        true
    }

    pub fn handle_event(&mut self, event: &dyn Event) -> bool {
        self.handle_transition(&event.as_string())
    }
}

impl fmt::Debug for Fsm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let transitions: usize = self.transitions.values().map(BTreeMap::len).sum();
        f.debug_struct("Fsm")
            .field("current", &self.current)
            .field("states", &self.states)
            .field("transitions", &transitions)
            .finish()
    }
}

#[cfg(test)]
#[path = "tests/fsm_tests.rs"]
mod tests;
