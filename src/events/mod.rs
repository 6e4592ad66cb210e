//! DOM listener wiring for the glyph field.
//!
//! Every closure handed to the DOM is kept in [`Listeners`]; dropping it
//! removes the listeners and clears a pending resize timer.

mod pointer;
mod viewport;

use crate::frame::FieldDriver;
use anyhow::anyhow;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

struct Listener {
    target: web::EventTarget,
    kind: &'static str,
    callback: Closure<dyn FnMut(web::Event)>,
}

pub struct Listeners {
    entries: Vec<Listener>,
    resize_timer: Rc<Cell<Option<i32>>>,
    settle: Option<Closure<dyn FnMut()>>,
}

impl Listeners {
    pub fn attach(driver: &FieldDriver) -> anyhow::Result<Self> {
        let window = web::window().ok_or_else(|| anyhow!("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| anyhow!("no document"))?;

        let mut listeners = Self {
            entries: Vec::new(),
            resize_timer: Rc::new(Cell::new(None)),
            settle: None,
        };
        pointer::wire_pointer(&mut listeners, &window, driver)?;
        viewport::wire_resize(&mut listeners, &window, driver)?;
        viewport::wire_visibility(&mut listeners, &window, &document, driver)?;
        log::debug!("[events] {} listeners attached", listeners.entries.len());
        Ok(listeners)
    }

    fn listen(
        &mut self,
        target: &web::EventTarget,
        kind: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> anyhow::Result<()> {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        let opts = web::AddEventListenerOptions::new();
        opts.set_passive(true);
        target
            .add_event_listener_with_callback_and_add_event_listener_options(
                kind,
                callback.as_ref().unchecked_ref(),
                &opts,
            )
            .map_err(|e| anyhow!("{kind}: {:?}", e))?;
        self.entries.push(Listener {
            target: target.clone(),
            kind,
            callback,
        });
        Ok(())
    }
}

impl Drop for Listeners {
    fn drop(&mut self) {
        for l in self.entries.drain(..) {
            _ = l
                .target
                .remove_event_listener_with_callback(l.kind, l.callback.as_ref().unchecked_ref());
        }
        if let (Some(handle), Some(w)) = (self.resize_timer.take(), web::window()) {
            w.clear_timeout_with_handle(handle);
        }
        self.settle.take();
    }
}
