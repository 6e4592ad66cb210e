use crate::core::{Debouncer, InputState, LoopControl, TokenPool, Viewport, RESIZE_DEBOUNCE_MS};
use crate::dom;
use crate::render;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Everything one glyph field owns. Listeners and the frame callback reach
/// it through [`FieldDriver`]; none of them run concurrently.
pub struct FieldContext {
    pub canvas: web::HtmlCanvasElement,
    pub ctx: web::CanvasRenderingContext2d,
    pub pool: TokenPool,
    pub input: InputState,
    pub control: LoopControl,
    pub resize: Debouncer,
}

impl FieldContext {
    pub fn new(canvas: web::HtmlCanvasElement, ctx: web::CanvasRenderingContext2d) -> Self {
        Self {
            canvas,
            ctx,
            pool: TokenPool::from_entropy(),
            input: InputState::new(Viewport::default()),
            control: LoopControl::stopped(),
            resize: Debouncer::new(RESIZE_DEBOUNCE_MS),
        }
    }

    /// One animation frame. Returns false when the loop was stopped after
    /// this frame was scheduled; nothing is simulated or drawn then.
    pub fn frame(&mut self, now_ms: f64) -> bool {
        let Some(dt) = self.control.begin_frame(now_ms) else {
            return false;
        };
        if !self.pool.is_empty() {
            self.pool.step(dt as f32, &self.input);
        }
        if let Err(e) = render::draw_frame(
            &self.ctx,
            self.pool.tokens(),
            &self.input,
            self.control.last_timestamp(),
        ) {
            log::warn!("[render] {:?}", e);
        }
        true
    }

    pub fn apply_resize(&mut self, viewport: Viewport) {
        self.input.apply_resize(viewport);
        if let Err(e) = dom::sync_canvas_backing_size(&self.canvas, &self.ctx, &viewport) {
            log::warn!("[resize] {e:#}");
        }
        let count = self.pool.resize(viewport.width, viewport.height);
        log::debug!(
            "[resize] {}x{} dpr={:.2} tokens={}",
            viewport.width,
            viewport.height,
            viewport.effective_ratio(),
            count
        );
    }
}

type FrameCallback = Closure<dyn FnMut(f64)>;

/// Shared handle used by the public API and the DOM listeners.
#[derive(Clone)]
pub struct FieldDriver {
    field: Rc<RefCell<FieldContext>>,
    tick: Rc<RefCell<Option<FrameCallback>>>,
}

impl FieldDriver {
    pub fn new(field: FieldContext) -> Self {
        let field = Rc::new(RefCell::new(field));
        let tick: Rc<RefCell<Option<FrameCallback>>> = Rc::new(RefCell::new(None));

        // weak refs only: the callback must not keep the field alive
        let field_weak = Rc::downgrade(&field);
        let tick_weak = Rc::downgrade(&tick);
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move |now: f64| {
            on_frame(&field_weak, &tick_weak, now);
        }) as Box<dyn FnMut(f64)>));

        Self { field, tick }
    }

    pub fn is_running(&self) -> bool {
        self.field.borrow().control.is_running()
    }

    pub fn token_count(&self) -> usize {
        self.field.borrow().pool.len()
    }

    pub fn with_input(&self, f: impl FnOnce(&mut InputState)) {
        f(&mut self.field.borrow_mut().input);
    }

    pub fn start(&self) {
        let mut f = self.field.borrow_mut();
        if !f.control.start(dom::now_ms()) {
            return;
        }
        match request_frame(&self.tick) {
            Some(handle) => {
                f.control.frame_scheduled(handle);
                log::debug!("[loop] running");
            }
            None => {
                f.control.stop();
                log::warn!("[loop] could not schedule a frame");
            }
        }
    }

    pub fn stop(&self) {
        let pending = self.field.borrow_mut().control.stop();
        if let (Some(handle), Some(w)) = (pending, web::window()) {
            _ = w.cancel_animation_frame(handle);
        }
    }

    /// Initial sizing, done immediately rather than debounced.
    pub fn resize_now(&self) {
        self.field.borrow_mut().apply_resize(dom::read_viewport());
    }

    /// Record a resize event; returns how long to wait before settling.
    pub fn notify_resize(&self, now_ms: f64) -> f64 {
        let mut f = self.field.borrow_mut();
        f.resize.notify(now_ms);
        f.resize.quiet_ms()
    }

    pub fn settle_resize(&self, now_ms: f64) {
        let mut f = self.field.borrow_mut();
        if !f.resize.is_pending() {
            return;
        }
        if f.resize.timer_fired(now_ms) {
            f.apply_resize(dom::read_viewport());
        }
    }

    pub fn cancel_resize(&self) {
        self.field.borrow_mut().resize.cancel();
    }

    /// Stop and drop the frame callback. The driver is inert afterwards.
    pub fn release(&self) {
        self.stop();
        self.tick.borrow_mut().take();
    }
}

fn on_frame(field: &Weak<RefCell<FieldContext>>, tick: &Weak<RefCell<Option<FrameCallback>>>, now: f64) {
    let (Some(field), Some(tick)) = (field.upgrade(), tick.upgrade()) else {
        return;
    };
    let mut f = field.borrow_mut();
    if !f.frame(now) {
        return;
    }
    match request_frame(&tick) {
        Some(handle) => f.control.frame_scheduled(handle),
        None => {
            f.control.stop();
        }
    }
}

fn request_frame(tick: &Rc<RefCell<Option<FrameCallback>>>) -> Option<i32> {
    let window = web::window()?;
    let tick = tick.borrow();
    let callback = tick.as_ref()?;
    window
        .request_animation_frame(callback.as_ref().unchecked_ref())
        .map_err(|e| log::warn!("[loop] requestAnimationFrame failed: {:?}", e))
        .ok()
}
