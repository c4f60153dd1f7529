//! Scripted skin scenarios: a state machine, some variables and a list of
//! input events replayed through a real skin loop.

use std::{collections::BTreeMap, fs, path::Path, sync::Arc};

use anyhow::{bail, Context};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use shared::domain::WindowId;
use skin_core::{
    commands::{vars::CmdSetText, CmdCallback, CmdGenericPtr},
    events::{
        keys, EvtEnter, EvtFocus, EvtKey, EvtLeave, EvtMenu, EvtMotion, EvtMouse, EvtScroll,
        EvtSpecial, KeyAction, Modifiers, MouseAction, MouseButton, ScrollDirection,
        SpecialAction,
    },
    os::OsFactory,
    vars::{VarPercent, VarText},
    Event, EventSink, Fsm, SkinConfig, SkinIntf, SkinLoop,
};

const SCENARIO_WINDOW: WindowId = WindowId(0);

#[derive(Debug, Deserialize)]
pub struct Scenario {
    pub initial: String,
    pub states: Vec<String>,
    #[serde(default)]
    pub text_vars: Vec<String>,
    #[serde(default)]
    pub percent_vars: Vec<String>,
    #[serde(default)]
    pub transitions: Vec<TransitionSpec>,
    #[serde(default)]
    pub events: Vec<EventSpec>,
}

#[derive(Debug, Deserialize)]
pub struct TransitionSpec {
    pub from: String,
    pub event: String,
    pub to: String,
    pub action: Option<ActionSpec>,
    /// Run the action through the async queue instead of immediately.
    #[serde(default)]
    pub queued: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ActionSpec {
    SetText { var: String, value: String },
    SetPercent { var: String, value: f32 },
    Log { message: String },
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EventSpec {
    Mouse {
        button: MouseButton,
        action: MouseAction,
        #[serde(default)]
        mods: String,
        #[serde(default)]
        x: i32,
        #[serde(default)]
        y: i32,
    },
    Key {
        key: String,
        action: KeyAction,
        #[serde(default)]
        mods: String,
    },
    Scroll {
        direction: ScrollDirection,
        #[serde(default)]
        mods: String,
    },
    Special {
        action: SpecialAction,
    },
    Motion {
        x: i32,
        y: i32,
    },
    Focus {
        focus: bool,
    },
    Menu {
        item_id: u32,
    },
    Enter,
    Leave,
}

impl EventSpec {
    pub fn to_event(&self) -> anyhow::Result<Box<dyn Event>> {
        let event: Box<dyn Event> = match self {
            Self::Mouse {
                button,
                action,
                mods,
                x,
                y,
            } => Box::new(EvtMouse::new(*x, *y, *button, *action, parse_mods(mods)?)),
            Self::Key { key, action, mods } => {
                let Some(code) = keys::name_to_key(key) else {
                    bail!("unknown key name '{key}'");
                };
                Box::new(EvtKey::new(code, *action, parse_mods(mods)?))
            }
            Self::Scroll { direction, mods } => {
                Box::new(EvtScroll::new(0, 0, *direction, parse_mods(mods)?))
            }
            Self::Special { action } => Box::new(EvtSpecial::new(*action)),
            Self::Motion { x, y } => Box::new(EvtMotion::new(*x, *y)),
            Self::Focus { focus } => Box::new(EvtFocus::new(*focus)),
            Self::Menu { item_id } => Box::new(EvtMenu::new(*item_id)),
            Self::Enter => Box::new(EvtEnter),
            Self::Leave => Box::new(EvtLeave),
        };
        Ok(event)
    }
}

fn parse_mods(raw: &str) -> anyhow::Result<Modifiers> {
    Modifiers::parse(raw).with_context(|| format!("unknown modifiers '{raw}'"))
}

pub fn load_scenario(path: &Path) -> anyhow::Result<Scenario> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read scenario '{}'", path.display()))?;
    toml::from_str(&raw).with_context(|| format!("failed to parse scenario '{}'", path.display()))
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TraceEntry {
    pub event: String,
    pub matched: bool,
    pub state: Option<String>,
}

#[derive(Debug, Default, Serialize)]
pub struct Report {
    pub final_state: Option<String>,
    pub trace: Vec<TraceEntry>,
    pub log: Vec<String>,
    pub vars: BTreeMap<String, String>,
}

struct TracingSink {
    fsm: Fsm,
    trace: Arc<Mutex<Vec<TraceEntry>>>,
}

impl EventSink for TracingSink {
    fn process_event(&mut self, event: &dyn Event) {
        let event = event.as_string();
        let matched = self.fsm.handle_transition(&event);
        self.trace.lock().push(TraceEntry {
            event,
            matched,
            state: self.fsm.state().map(str::to_string),
        });
    }
}

/// Replays `scenario` on the current thread and reports what happened.
pub fn replay(scenario: &Scenario, config: &SkinConfig) -> anyhow::Result<Report> {
    let mut skin_loop = SkinLoop::new(config);
    let factory: Arc<dyn OsFactory> = skin_loop.factory();
    let intf = SkinIntf::new(config.clone(), factory);

    for name in &scenario.text_vars {
        intf.vars().register_var(Arc::new(VarText::new()), name.as_str());
    }
    for name in &scenario.percent_vars {
        intf.vars().register_var(Arc::new(VarPercent::new()), name.as_str());
    }

    let log = Arc::new(Mutex::new(Vec::new()));
    let mut fsm = Fsm::new();
    for state in &scenario.states {
        fsm.add_state(state.as_str());
    }
    for transition in &scenario.transitions {
        let command = match &transition.action {
            Some(action) => Some(build_action(&intf, action, transition.queued, &log)?),
            None => None,
        };
        fsm.add_transition(&transition.from, &transition.event, &transition.to, command)
            .with_context(|| format!("invalid transition from '{}'", transition.from))?;
    }
    fsm.set_state(&scenario.initial)
        .context("invalid initial state")?;

    let trace = Arc::new(Mutex::new(Vec::new()));
    skin_loop.register_window(
        SCENARIO_WINDOW,
        Box::new(TracingSink {
            fsm,
            trace: Arc::clone(&trace),
        }),
    );

    let handle = skin_loop.handle();
    for spec in &scenario.events {
        handle.post_boxed_event(SCENARIO_WINDOW, spec.to_event()?)?;
        skin_loop.run_for(config.flush_interval());
    }
    intf.queue().flush();

    let trace = std::mem::take(&mut *trace.lock());
    let mut report = Report {
        final_state: trace.last().and_then(|entry| entry.state.clone()),
        trace,
        log: std::mem::take(&mut *log.lock()),
        vars: BTreeMap::new(),
    };
    if report.final_state.is_none() {
        report.final_state = Some(scenario.initial.clone());
    }
    for name in intf.vars().names() {
        if let Some(text) = intf.vars().get::<VarText>(&name) {
            report.vars.insert(name, text.get());
        } else if let Some(percent) = intf.vars().get::<VarPercent>(&name) {
            report.vars.insert(name, format!("{:.2}", percent.get()));
        }
    }
    Ok(report)
}

fn build_action(
    intf: &SkinIntf,
    action: &ActionSpec,
    queued: bool,
    log: &Arc<Mutex<Vec<String>>>,
) -> anyhow::Result<CmdGenericPtr> {
    let command: CmdGenericPtr = match action {
        ActionSpec::SetText { var, value } => {
            let Some(text) = intf.vars().get::<VarText>(var) else {
                bail!("'{var}' is not a declared text variable");
            };
            Arc::new(CmdSetText::new(text, value.as_str()))
        }
        ActionSpec::SetPercent { var, value } => {
            let Some(percent) = intf.vars().get::<VarPercent>(var) else {
                bail!("'{var}' is not a declared percent variable");
            };
            let value = *value;
            Arc::new(CmdCallback::new("set percent", move || percent.set(value)))
        }
        ActionSpec::Log { message } => {
            let log = Arc::clone(log);
            let message = message.clone();
            Arc::new(CmdCallback::new("log", move || log.lock().push(message.clone())))
        }
    };
    if !queued {
        return Ok(command);
    }
    let queue = intf.queue();
    Ok(Arc::new(CmdCallback::new("enqueue", move || {
        queue.push(Arc::clone(&command), true)
    })))
}

#[cfg(test)]
#[path = "tests/scenario_tests.rs"]
mod tests;
