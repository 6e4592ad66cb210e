#![cfg(target_arch = "wasm32")]
//! Animated glyph background for a canvas element.
//!
//! JavaScript creates a [`CodeCanvas`] for a `<canvas>` and calls `start()`.
//! From then on the field drives itself: pointer, resize, visibility and
//! pagehide listeners feed an input state that the requestAnimationFrame
//! loop reads every frame.
use anyhow::anyhow;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod render;

use events::Listeners;
use frame::{FieldContext, FieldDriver};

enum Setup {
    Ready(FieldDriver, Listeners),
    ReducedMotion,
}

fn setup(canvas: Option<web::HtmlCanvasElement>) -> anyhow::Result<Setup> {
    let canvas = canvas.ok_or_else(|| anyhow!("canvas element not defined"))?;
    if dom::prefers_reduced_motion() {
        return Ok(Setup::ReducedMotion);
    }
    let ctx = dom::context_2d(&canvas)?;

    let driver = FieldDriver::new(FieldContext::new(canvas, ctx));
    let listeners = Listeners::attach(&driver)?;
    driver.resize_now();
    Ok(Setup::Ready(driver, listeners))
}

/// Glyph field bound to one canvas. Inert when the canvas or its 2D context
/// is missing, or when the user prefers reduced motion.
#[wasm_bindgen]
pub struct CodeCanvas {
    driver: Option<FieldDriver>,
    listeners: Option<Listeners>,
}

#[wasm_bindgen]
impl CodeCanvas {
    #[wasm_bindgen(constructor)]
    pub fn new(canvas: Option<web::HtmlCanvasElement>) -> CodeCanvas {
        match setup(canvas) {
            Ok(Setup::Ready(driver, listeners)) => {
                log::info!("[canvas] ready, {} tokens", driver.token_count());
                CodeCanvas {
                    driver: Some(driver),
                    listeners: Some(listeners),
                }
            }
            Ok(Setup::ReducedMotion) => {
                log::info!("[canvas] reduced motion requested, animation disabled");
                CodeCanvas::inert()
            }
            Err(e) => {
                log::warn!("CodeCanvas: {e:#}");
                CodeCanvas::inert()
            }
        }
    }

    pub fn start(&self) {
        if let Some(d) = &self.driver {
            d.start();
        }
    }

    pub fn stop(&self) {
        if let Some(d) = &self.driver {
            d.stop();
        }
    }

    /// Stop the loop and detach every listener. Later calls do nothing.
    pub fn destroy(&mut self) {
        self.listeners.take();
        if let Some(d) = self.driver.take() {
            d.release();
            log::debug!("[canvas] destroyed");
        }
    }

    #[wasm_bindgen(js_name = isRunning)]
    pub fn is_running(&self) -> bool {
        self.driver.as_ref().is_some_and(|d| d.is_running())
    }

    #[wasm_bindgen(js_name = tokenCount)]
    pub fn token_count(&self) -> usize {
        self.driver.as_ref().map_or(0, |d| d.token_count())
    }
}

impl CodeCanvas {
    fn inert() -> CodeCanvas {
        CodeCanvas {
            driver: None,
            listeners: None,
        }
    }
}

impl Drop for CodeCanvas {
    fn drop(&mut self) {
        self.destroy();
    }
}

/// Build a [`CodeCanvas`] for the canvas with id `element_id`.
#[wasm_bindgen]
pub fn mount(element_id: &str) -> CodeCanvas {
    CodeCanvas::new(dom::canvas_by_id(element_id))
}

#[wasm_bindgen(start)]
pub fn main_js() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("code-canvas loaded");
    Ok(())
}
