use wasm_bindgen::{prelude::*, UnwrapThrowExt};

#[wasm_bindgen]
extern "C" {
    // Global `setTimeout`, present on windows and worker scopes alike.
    #[wasm_bindgen(js_name = setTimeout, catch)]
    fn global_set_timeout(handler: &JsValue, timeout: i32) -> Result<JsValue, JsValue>;
}

/// Schedules `handler` once on the current global scope. The closure is
/// released by the JS side after it runs.
pub fn set_timeout(handler: impl FnOnce() + 'static, timeout: i32) {
    let handler = Closure::once_into_js(handler);
    global_set_timeout(&handler, timeout).unwrap_throw();
}
