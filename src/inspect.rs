//! Live inspection of the task list from the browser console.

use js_sys::{Object, Reflect};
use wasm_bindgen::prelude::*;

use crate::context::TaskListContext;

/// Define a getter `window[name]` that returns a fresh copy of the tasks on
/// every read. Writes to the copy never reach the controller.
pub fn expose_live_view(name: &str, ctx: TaskListContext) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;

    let getter = Closure::<dyn Fn() -> JsValue>::new(move || {
        serde_wasm_bindgen::to_value(&ctx.tasks()).unwrap_or(JsValue::NULL)
    });

    let descriptor = Object::new();
    Reflect::set(&descriptor, &JsValue::from_str("get"), getter.as_ref())?;
    Reflect::set(&descriptor, &JsValue::from_str("configurable"), &JsValue::TRUE)?;
    Object::define_property(&window, &JsValue::from_str(name), &descriptor);

    // Lives as long as the page
    getter.forget();
    log::debug!("[Inspect] window.{} exposes the task list", name);
    Ok(())
}
