use crate::{
    error::FocusError,
    types::{DeferredTask, FocusHost, FocusRequest},
};
use std::{
    cell::RefCell,
    collections::{HashSet, VecDeque},
    rc::Rc,
};

#[derive(Default)]
pub struct FakeDocument {
    /// `true` models a scope without a document, e.g. a worker.
    pub detached: bool,
    pub ids: HashSet<String>,
    pub focused: Option<String>,
    pub logged: Vec<String>,
    pub delays: Vec<i32>,
    pub raised: Vec<FocusError>,
    queue: VecDeque<DeferredTask>,
}

#[derive(Clone, Default)]
pub struct FakeHost {
    pub doc: Rc<RefCell<FakeDocument>>,
}

impl FakeHost {
    pub fn with_ids(ids: &[&str]) -> Self {
        let host = Self::default();
        host.doc
            .borrow_mut()
            .ids
            .extend(ids.iter().map(|id| id.to_string()));
        host
    }

    pub fn detached() -> Self {
        let host = Self::default();
        host.doc.borrow_mut().detached = true;
        host
    }

    /// Runs every queued task, like one turn of the event loop.
    pub fn tick(&self) {
        loop {
            let task = self.doc.borrow_mut().queue.pop_front();
            match task {
                Some(task) => task(),
                None => break,
            }
        }
    }

    pub fn pending(&self) -> usize {
        self.doc.borrow().queue.len()
    }
}

impl FocusHost for FakeHost {
    fn log(&self, request: &FocusRequest) {
        self.doc.borrow_mut().logged.push(request.id().to_string());
    }

    fn defer(&self, delay_ms: i32, task: DeferredTask) {
        let mut doc = self.doc.borrow_mut();
        doc.delays.push(delay_ms);
        doc.queue.push_back(task);
    }

    fn focus_by_id(&self, id: &str) -> Result<(), FocusError> {
        let mut doc = self.doc.borrow_mut();
        if doc.detached {
            return Err(FocusError::NoDocument);
        }
        if !doc.ids.contains(id) {
            return Err(FocusError::ElementNotFound { id: id.to_string() });
        }
        doc.focused = Some(id.to_string());
        Ok(())
    }

    fn raise(&self, _request: &FocusRequest, err: FocusError) {
        self.doc.borrow_mut().raised.push(err);
    }
}
