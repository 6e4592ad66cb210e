use super::Listeners;
use crate::constants::{EV_MOUSE_DOWN, EV_MOUSE_UP, EV_POINTER_MOVE};
use crate::frame::FieldDriver;
use wasm_bindgen::JsCast;
use web_sys as web;

pub(super) fn wire_pointer(
    listeners: &mut Listeners,
    window: &web::Window,
    driver: &FieldDriver,
) -> anyhow::Result<()> {
    let d = driver.clone();
    listeners.listen(window, EV_POINTER_MOVE, move |ev| {
        if let Some(ev) = ev.dyn_ref::<web::MouseEvent>() {
            d.with_input(|input| input.pointer_moved(ev.client_x() as f32, ev.client_y() as f32));
        }
    })?;

    let d = driver.clone();
    listeners.listen(window, EV_MOUSE_DOWN, move |_| {
        d.with_input(|input| input.set_button(true));
    })?;

    let d = driver.clone();
    listeners.listen(window, EV_MOUSE_UP, move |_| {
        d.with_input(|input| input.set_button(false));
    })?;
    Ok(())
}
