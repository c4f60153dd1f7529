use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SkinError {
    #[error("unknown state '{0}'")]
    UnknownState(String),
    #[error("transition from '{state}' on '{event}' already exists")]
    DuplicateTransition { state: String, event: String },
    #[error("unknown variable '{0}'")]
    UnknownVariable(String),
    #[error("variable '{name}' has type '{actual}', expected '{expected}'")]
    TypeMismatch {
        name: String,
        expected: String,
        actual: String,
    },
    #[error("event loop is closed")]
    LoopClosed,
    #[error("event loop queue is full")]
    LoopFull,
}
