use glide_core::{FrameCallbackId, FrameCallbackQueue, FrameScheduler, NANOS_PER_MILLI};
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Window;

/// [`FrameScheduler`] backed by `window.requestAnimationFrame`.
///
/// All pending callbacks share a single browser request and a single tick
/// closure; the browser request is withdrawn once the queue empties.
pub struct RafScheduler {
    inner: Rc<RafInner>,
}

struct RafInner {
    window: Window,
    callbacks: FrameCallbackQueue,
    request: Cell<Option<i32>>,
    tick: RefCell<Option<Closure<dyn FnMut(f64)>>>,
}

impl RafScheduler {
    pub fn new() -> Result<Self, JsValue> {
        let window = web_sys::window().ok_or("no global window exists")?;
        let inner = Rc::new_cyclic(|weak: &Weak<RafInner>| {
            let weak = weak.clone();
            let tick = Closure::wrap(Box::new(move |timestamp: f64| {
                if let Some(inner) = weak.upgrade() {
                    inner.on_tick(timestamp);
                }
            }) as Box<dyn FnMut(f64)>);
            RafInner {
                window,
                callbacks: FrameCallbackQueue::new(),
                request: Cell::new(None),
                tick: RefCell::new(Some(tick)),
            }
        });
        Ok(Self { inner })
    }

    pub fn pending_frame_count(&self) -> usize {
        self.inner.callbacks.len()
    }

    /// Whether a browser frame is currently requested.
    pub fn is_requested(&self) -> bool {
        self.inner.request.get().is_some()
    }
}

impl RafInner {
    fn ensure_requested(&self) -> Result<(), JsValue> {
        if self.request.get().is_some() {
            return Ok(());
        }
        let tick = self.tick.borrow();
        let tick = tick.as_ref().ok_or("frame loop was torn down")?;
        let handle = self
            .window
            .request_animation_frame(tick.as_ref().unchecked_ref())?;
        self.request.set(Some(handle));
        Ok(())
    }

    fn withdraw_request(&self) {
        if let Some(handle) = self.request.take() {
            if let Err(err) = self.window.cancel_animation_frame(handle) {
                log::warn!("cancelAnimationFrame failed: {:?}", err);
            }
        }
    }

    fn on_tick(&self, timestamp_ms: f64) {
        self.request.set(None);
        let frame_time_nanos = (timestamp_ms.max(0.0) * NANOS_PER_MILLI as f64) as u64;
        let ran = self.callbacks.drain(frame_time_nanos);
        log::trace!("animation frame at {timestamp_ms}ms ran {ran} callbacks");
    }
}

impl FrameScheduler for RafScheduler {
    fn request_frame(&self, callback: Box<dyn FnOnce(u64) + 'static>) -> Option<FrameCallbackId> {
        let id = self.inner.callbacks.register(callback);
        match self.inner.ensure_requested() {
            Ok(()) => Some(id),
            Err(err) => {
                log::error!("requestAnimationFrame failed: {:?}", err);
                self.inner.callbacks.cancel(id);
                None
            }
        }
    }

    fn cancel_frame(&self, id: FrameCallbackId) {
        self.inner.callbacks.cancel(id);
        if self.inner.callbacks.is_empty() {
            self.inner.withdraw_request();
        }
    }
}

impl Drop for RafInner {
    fn drop(&mut self) {
        self.withdraw_request();
    }
}
