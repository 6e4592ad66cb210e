use super::Listeners;
use crate::constants::{EV_PAGE_HIDE, EV_RESIZE, EV_VISIBILITY};
use crate::dom;
use crate::frame::FieldDriver;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

// Each resize re-arms one timer; the debouncer decides when the burst is over.
pub(super) fn wire_resize(
    listeners: &mut Listeners,
    window: &web::Window,
    driver: &FieldDriver,
) -> anyhow::Result<()> {
    let timer = listeners.resize_timer.clone();
    let d = driver.clone();
    let settle = Closure::wrap(Box::new(move || {
        timer.set(None);
        d.settle_resize(dom::now_ms());
    }) as Box<dyn FnMut()>);
    let settle_fn: js_sys::Function = settle.as_ref().unchecked_ref::<js_sys::Function>().clone();
    listeners.settle = Some(settle);

    let timer = listeners.resize_timer.clone();
    let d = driver.clone();
    listeners.listen(window, EV_RESIZE, move |_| {
        let quiet_ms = d.notify_resize(dom::now_ms());
        let Some(w) = web::window() else {
            return;
        };
        if let Some(handle) = timer.take() {
            w.clear_timeout_with_handle(handle);
        }
        match w.set_timeout_with_callback_and_timeout_and_arguments_0(&settle_fn, quiet_ms as i32) {
            Ok(handle) => timer.set(Some(handle)),
            Err(e) => {
                log::warn!("[resize] setTimeout failed: {:?}", e);
                d.cancel_resize();
            }
        }
    })
}

pub(super) fn wire_visibility(
    listeners: &mut Listeners,
    window: &web::Window,
    document: &web::Document,
    driver: &FieldDriver,
) -> anyhow::Result<()> {
    let d = driver.clone();
    let doc = document.clone();
    listeners.listen(document, EV_VISIBILITY, move |_| {
        if doc.hidden() {
            d.stop();
        } else {
            d.start();
        }
    })?;

    let d = driver.clone();
    listeners.listen(window, EV_PAGE_HIDE, move |_| {
        log::debug!("[loop] page hidden, stopping");
        d.stop();
    })
}
