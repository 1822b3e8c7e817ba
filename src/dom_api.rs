use crate::{
    consts::FOCUS_LOG_LABEL,
    error::FocusError,
    types::{DeferredTask, FocusHost, FocusRequest},
    web::set_timeout,
};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, MathMlElement, SvgElement};

/// `FocusHost` over the current JS global scope. The document is resolved
/// when the deferred step runs, so scheduling works without a window.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserHost;

fn document() -> Result<Document, FocusError> {
    web_sys::window()
        .and_then(|win| win.document())
        .ok_or(FocusError::NoDocument)
}

fn native_focus(id: &str, el: Element) -> Result<(), FocusError> {
    let result = if let Some(el) = el.dyn_ref::<HtmlElement>() {
        el.focus()
    } else if let Some(el) = el.dyn_ref::<SvgElement>() {
        el.focus()
    } else if let Some(el) = el.dyn_ref::<MathMlElement>() {
        el.focus()
    } else {
        return Err(FocusError::NotFocusable { id: id.to_string() });
    };

    result.map_err(|err| FocusError::Host {
        id: id.to_string(),
        message: err
            .as_string()
            .unwrap_or_else(|| format!("{err:?}")),
    })
}

/// Arguments of the call-time `console.log` entry.
fn log_args(request: &FocusRequest) -> (&'static str, &str) {
    (FOCUS_LOG_LABEL, request.id())
}

fn fault_message(request: &FocusRequest, err: &FocusError) -> String {
    format!("{FOCUS_LOG_LABEL}: {err} (request {})", request.request_id())
}

impl FocusHost for BrowserHost {
    fn log(&self, request: &FocusRequest) {
        let (label, id) = log_args(request);
        web_sys::console::log_2(&JsValue::from_str(label), &JsValue::from_str(id));
    }

    fn defer(&self, delay_ms: i32, task: DeferredTask) {
        set_timeout(task, delay_ms);
    }

    fn focus_by_id(&self, id: &str) -> Result<(), FocusError> {
        let el = document()?
            .get_element_by_id(id)
            .ok_or_else(|| FocusError::ElementNotFound { id: id.to_string() })?;

        native_focus(id, el)
    }

    fn raise(&self, request: &FocusRequest, err: FocusError) {
        wasm_bindgen::throw_str(&fault_message(request, &err));
    }
}
