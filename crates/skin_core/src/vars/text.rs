use parking_lot::Mutex;

use crate::observer::Subject;

use super::impl_variable;

macro_rules! text_variable {
    ($(#[$meta:meta])* $name:ident, $tag:literal) => {
        $(#[$meta])*
        #[derive(Debug)]
        pub struct $name {
            value: Mutex<String>,
            subject: Subject<$name>,
        }

        impl_variable!($name, $tag);

        impl $name {
            pub fn new() -> Self {
                Self::with_value(String::new())
            }

            pub fn with_value(value: impl Into<String>) -> Self {
                Self {
                    value: Mutex::new(value.into()),
                    subject: Subject::new(),
                }
            }

            pub fn get(&self) -> String {
                self.value.lock().clone()
            }

            pub fn is_empty(&self) -> bool {
                self.value.lock().is_empty()
            }

            /// Replaces the value, notifying only on a real change.
            pub fn set(&self, value: impl Into<String>) {
                let value = value.into();
                let changed = {
                    let mut current = self.value.lock();
                    if *current != value {
                        *current = value;
                        true
                    } else {
                        false
                    }
                };
                if changed {
                    self.subject.notify(self, &());
                }
            }

            pub fn subject(&self) -> &Subject<$name> {
                &self.subject
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }
    };
}

text_variable!(
    /// Display text: labels, tooltips and help strings.
    VarText,
    "text"
);

text_variable!(
    /// Raw string value, such as a serialized list of equalizer bands.
    VarString,
    "string"
);

#[cfg(test)]
#[path = "tests/text_tests.rs"]
mod tests;
