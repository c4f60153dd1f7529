use parking_lot::Mutex;

use crate::observer::Subject;

use super::impl_variable;

#[derive(Debug, Clone, Copy)]
struct PercentState {
    value: f32,
    step: f32,
}

/// A value clamped to `[0, 1]`, moved in steps by sliders and scroll wheels.
#[derive(Debug)]
pub struct VarPercent {
    state: Mutex<PercentState>,
    subject: Subject<VarPercent>,
}

impl_variable!(VarPercent, "percent");

impl VarPercent {
    pub const DEFAULT_STEP: f32 = 0.05;

    pub fn new() -> Self {
        Self::with_step(Self::DEFAULT_STEP)
    }

    pub fn with_step(step: f32) -> Self {
        Self {
            state: Mutex::new(PercentState { value: 0.0, step }),
            subject: Subject::new(),
        }
    }

    pub fn get(&self) -> f32 {
        self.state.lock().value
    }

    /// Stores the clamped value, notifying only if it actually changed.
    pub fn set(&self, value: f32) {
        if value.is_nan() {
            tracing::debug!("ignoring NaN percent value");
            return;
        }
        let value = value.clamp(0.0, 1.0);
        let changed = {
            let mut state = self.state.lock();
            if state.value != value {
                state.value = value;
                true
            } else {
                false
            }
        };
        if changed {
            self.subject.notify(self, &());
        }
    }

    pub fn step(&self) -> f32 {
        self.state.lock().step
    }

    pub fn set_step(&self, step: f32) {
        self.state.lock().step = step;
    }

    /// Moves the value by `num` steps (negative to decrement).
    pub fn increment(&self, num: i32) {
        let target = {
            let state = self.state.lock();
            state.value + num as f32 * state.step
        };
        self.set(target);
    }

    pub fn subject(&self) -> &Subject<VarPercent> {
        &self.subject
    }
}

impl Default for VarPercent {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "tests/percent_tests.rs"]
mod tests;
