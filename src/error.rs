use thiserror::Error;

/// Faults of the deferred focus step. None of these reach the caller of
/// `request_focus`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FocusError {
    #[error("no document in the current global scope")]
    NoDocument,

    #[error("no element with id `{id}`")]
    ElementNotFound { id: String },

    #[error("element `{id}` cannot receive focus")]
    NotFocusable { id: String },

    #[error("focus on `{id}` failed: {message}")]
    Host { id: String, message: String },
}
