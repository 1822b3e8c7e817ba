use crate::{
    error::FocusError,
    types::{DeferredFailure, DispatcherConfig, FocusHost, FocusRequest},
};
use std::{convert::Infallible, rc::Rc};

/// Settles the outcome of a deferred focus step. The caller of
/// `request_focus` has already been told it succeeded.
pub fn best_effort<H: FocusHost + ?Sized>(
    host: &H,
    policy: DeferredFailure,
    request: &FocusRequest,
    result: Result<(), FocusError>,
) {
    let Err(err) = result else {
        return;
    };
    match policy {
        DeferredFailure::Propagate => host.raise(request, err),
        DeferredFailure::Discard => {}
    }
}

pub struct FocusDispatcher<H> {
    host: Rc<H>,
    config: DispatcherConfig,
}

impl<H: FocusHost + 'static> FocusDispatcher<H> {
    pub fn new(host: H, config: DispatcherConfig) -> Self {
        Self {
            host: Rc::new(host),
            config,
        }
    }

    pub fn config(&self) -> &DispatcherConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: DispatcherConfig) {
        self.config = config;
    }

    /// Schedules focus of the element with `element_id` and reports success
    /// without waiting. Focus never changes before the event loop yields.
    pub fn request_focus(&self, element_id: impl Into<String>) -> Result<(), Infallible> {
        let request = FocusRequest::new(element_id);
        if self.config.log_invocations {
            self.host.log(&request);
        }

        let host = Rc::clone(&self.host);
        let policy = self.config.on_failure;
        self.host.defer(
            self.config.delay_ms(),
            Box::new(move || {
                let result = host.focus_by_id(request.id());
                best_effort(&*host, policy, &request, result);
            }),
        );

        Ok(())
    }
}
