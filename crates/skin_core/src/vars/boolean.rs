//! Boolean variables and the combinators skins use to derive visibility and
//! enable states from other booleans.

use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc, Weak,
};

use crate::observer::{Observer, Subject};

use super::{impl_variable, Variable};

pub trait VarBool: Variable {
    fn get(&self) -> bool;

    fn subject(&self) -> &Subject<dyn VarBool>;
}

/// Settable boolean.
#[derive(Debug, Default)]
pub struct VarBoolImpl {
    value: AtomicBool,
    subject: Subject<dyn VarBool>,
}

impl_variable!(VarBoolImpl, "bool");

impl VarBoolImpl {
    pub fn new(value: bool) -> Self {
        Self {
            value: AtomicBool::new(value),
            subject: Subject::new(),
        }
    }

    pub fn set(&self, value: bool) {
        if self.value.swap(value, Ordering::SeqCst) != value {
            self.subject.notify(self, &());
        }
    }
}

impl VarBool for VarBoolImpl {
    fn get(&self) -> bool {
        self.value.load(Ordering::SeqCst)
    }

    fn subject(&self) -> &Subject<dyn VarBool> {
        &self.subject
    }
}

fn watch<O>(this: &Arc<O>, operands: &[&Arc<dyn VarBool>])
where
    O: Observer<dyn VarBool> + 'static,
{
    let handle: Weak<O> = Arc::downgrade(this);
    for operand in operands {
        operand.subject().add_observer(handle.clone());
    }
}

macro_rules! binary_bool {
    ($(#[$meta:meta])* $name:ident, $combine:expr) => {
        $(#[$meta])*
        pub struct $name {
            left: Arc<dyn VarBool>,
            right: Arc<dyn VarBool>,
            value: AtomicBool,
            subject: Subject<dyn VarBool>,
        }

        impl_variable!($name, "bool");

        impl $name {
            pub fn new(left: Arc<dyn VarBool>, right: Arc<dyn VarBool>) -> Arc<Self> {
                let combine: fn(bool, bool) -> bool = $combine;
                let this = Arc::new(Self {
                    value: AtomicBool::new(combine(left.get(), right.get())),
                    left,
                    right,
                    subject: Subject::new(),
                });
                watch(&this, &[&this.left, &this.right]);
                this
            }
        }

        impl VarBool for $name {
            fn get(&self) -> bool {
                self.value.load(Ordering::SeqCst)
            }

            fn subject(&self) -> &Subject<dyn VarBool> {
                &self.subject
            }
        }

        impl Observer<dyn VarBool> for $name {
            fn on_update(&self, _subject: &dyn VarBool, _arg: &()) {
                let combine: fn(bool, bool) -> bool = $combine;
                let value = combine(self.left.get(), self.right.get());
                if self.value.swap(value, Ordering::SeqCst) != value {
                    self.subject.notify(self, &());
                }
            }
        }
    };
}

binary_bool!(
    /// True while both operands are true.
    VarBoolAndBool,
    |left, right| left && right
);

binary_bool!(
    /// True while either operand is true.
    VarBoolOrBool,
    |left, right| left || right
);

/// Negation of another boolean.
pub struct VarNotBool {
    operand: Arc<dyn VarBool>,
    subject: Subject<dyn VarBool>,
}

impl_variable!(VarNotBool, "bool");

impl VarNotBool {
    pub fn new(operand: Arc<dyn VarBool>) -> Arc<Self> {
        let this = Arc::new(Self {
            operand,
            subject: Subject::new(),
        });
        watch(&this, &[&this.operand]);
        this
    }
}

impl VarBool for VarNotBool {
    fn get(&self) -> bool {
        !self.operand.get()
    }

    fn subject(&self) -> &Subject<dyn VarBool> {
        &self.subject
    }
}

impl Observer<dyn VarBool> for VarNotBool {
    fn on_update(&self, _subject: &dyn VarBool, _arg: &()) {
        self.subject.notify(self, &());
    }
}

#[cfg(test)]
#[path = "tests/boolean_tests.rs"]
mod tests;
