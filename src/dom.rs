use crate::constants::REDUCED_MOTION_QUERY;
use crate::core::Viewport;
use anyhow::{anyhow, Context};
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn canvas_by_id(element_id: &str) -> Option<web::HtmlCanvasElement> {
    window_document()?
        .get_element_by_id(element_id)?
        .dyn_into::<web::HtmlCanvasElement>()
        .ok()
}

/// True when the user asked the browser to minimise motion.
pub fn prefers_reduced_motion() -> bool {
    web::window()
        .and_then(|w| w.match_media(REDUCED_MOTION_QUERY).ok().flatten())
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

/// Milliseconds on the same clock as requestAnimationFrame timestamps.
#[inline]
pub fn now_ms() -> f64 {
    web::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or_else(js_sys::Date::now)
}

/// Current window size in CSS pixels plus device pixel ratio.
pub fn read_viewport() -> Viewport {
    let Some(w) = web::window() else {
        return Viewport::default();
    };
    let dim = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as f32
    };
    Viewport {
        width: dim(w.inner_width()),
        height: dim(w.inner_height()),
        pixel_ratio: w.device_pixel_ratio() as f32,
    }
}

/// Acquire a transparent 2D context for `canvas`.
pub fn context_2d(canvas: &web::HtmlCanvasElement) -> anyhow::Result<web::CanvasRenderingContext2d> {
    let opts = js_sys::Object::new();
    js_sys::Reflect::set(&opts, &"alpha".into(), &true.into())
        .map_err(|e| anyhow!("{:?}", e))?;
    canvas
        .get_context_with_context_options("2d", &opts)
        .map_err(|e| anyhow!("{:?}", e))?
        .context("failed to get 2D context")?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|_| anyhow!("2D context has an unexpected type"))
}

/// Match the canvas CSS size to the viewport, size the backing store for the
/// pixel ratio and scale drawing so callers work in CSS pixels.
pub fn sync_canvas_backing_size(
    canvas: &web::HtmlCanvasElement,
    ctx: &web::CanvasRenderingContext2d,
    viewport: &Viewport,
) -> anyhow::Result<()> {
    let style = canvas.style();
    style
        .set_property("width", &format!("{}px", viewport.width))
        .map_err(|e| anyhow!("{:?}", e))?;
    style
        .set_property("height", &format!("{}px", viewport.height))
        .map_err(|e| anyhow!("{:?}", e))?;
    let (w_px, h_px) = viewport.backing_size();
    canvas.set_width(w_px);
    canvas.set_height(h_px);
    let dpr = viewport.effective_ratio() as f64;
    ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0)
        .map_err(|e| anyhow!("{:?}", e))?;
    Ok(())
}
