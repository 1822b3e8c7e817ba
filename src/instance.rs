use crate::{
    dispatcher::FocusDispatcher,
    dom_api::BrowserHost,
    types::{DispatcherConfig, FocusHost},
};
use std::cell::RefCell;
use wasm_bindgen::{prelude::wasm_bindgen, JsValue};

thread_local! {
    static INSTANCE: RefCell<FocusDispatcher<BrowserHost>> =
        RefCell::new(FocusDispatcher::new(BrowserHost, DispatcherConfig::default()));
}

/// Installs `config`, or the defaults when `None`. Requests already
/// scheduled keep the settings they were made with.
fn reconfigure<H: FocusHost + 'static>(
    dispatcher: &mut FocusDispatcher<H>,
    config: Option<DispatcherConfig>,
) {
    dispatcher.set_config(config.unwrap_or_default());
}

/// Focuses the element with `id` on the next event-loop turn. Returns once
/// scheduled, whether or not the element exists.
#[wasm_bindgen(js_name = focusElement)]
pub fn focus_element(id: &str) {
    INSTANCE.with(|instance| match instance.borrow().request_focus(id) {
        Ok(()) => (),
        Err(never) => match never {},
    })
}

/// Accepts `{ delayMs, logInvocations, onFailure }`; missing fields take defaults.
#[wasm_bindgen(js_name = configureFocus)]
pub fn configure_focus(options: JsValue) -> Result<(), JsValue> {
    let config = if options.is_undefined() || options.is_null() {
        None
    } else {
        Some(serde_wasm_bindgen::from_value::<DispatcherConfig>(options)?)
    };

    INSTANCE.with(|instance| reconfigure(&mut instance.borrow_mut(), config));
    Ok(())
}
