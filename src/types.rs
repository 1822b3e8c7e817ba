use crate::{consts::DEFAULT_DELAY_MS, error::FocusError};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An element identifier captured at call time and consumed by the deferred step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FocusRequest {
    id: String,
    request_id: Uuid,
}

impl FocusRequest {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            request_id: Uuid::new_v4(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Correlates the call-time log entry with a fault raised later.
    pub fn request_id(&self) -> Uuid {
        self.request_id
    }
}

/// What happens to a failure of the deferred step.
#[derive(Serialize, Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DeferredFailure {
    /// Hand the fault to the host as an unhandled error of the deferred task.
    #[default]
    Propagate,
    /// Drop the fault silently.
    Discard,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct DispatcherConfig {
    pub delay_ms: i32,
    pub log_invocations: bool,
    pub on_failure: DeferredFailure,
}

impl Default for DispatcherConfig {
    fn default() -> Self {
        Self {
            delay_ms: DEFAULT_DELAY_MS,
            log_invocations: true,
            on_failure: DeferredFailure::default(),
        }
    }
}

impl DispatcherConfig {
    pub fn delay_ms(&self) -> i32 {
        self.delay_ms.max(0)
    }
}

pub type DeferredTask = Box<dyn FnOnce() + 'static>;

/// Everything the dispatcher needs from its environment. The browser
/// implementation is `dom_api::BrowserHost`.
pub trait FocusHost {
    fn log(&self, request: &FocusRequest);

    /// Runs `task` on a later turn of the event loop, after `delay_ms`.
    fn defer(&self, delay_ms: i32, task: DeferredTask);

    fn focus_by_id(&self, id: &str) -> Result<(), FocusError>;

    /// Surfaces a fault of a deferred task. Never called synchronously from
    /// `request_focus`.
    fn raise(&self, request: &FocusRequest, err: FocusError);
}
