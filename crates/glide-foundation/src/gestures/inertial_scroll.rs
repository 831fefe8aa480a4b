//! Drag-to-pan with inertial release.
//!
//! While the primary button is held, each pointer move reports the step
//! delta straight away. Once a move arrives with no button pressed, the last
//! delta seeds a decay loop that shrinks it by the configured inertia every
//! frame and reports each step.

use crate::config::ScrollConfig;
use crate::gestures::decay_loop::DecayLoop;
use crate::input::{PointerButton, PointerEvent};
use glide_animation::{DecayAnimationSpec, ExponentialDecaySpec};
use glide_core::FrameClock;
use glide_ui_graphics::{Offset, Point};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

/// Snapshot handed to the scroll callback on every notification.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollUpdate {
    /// Movement of this step: a drag delta or one decay frame.
    pub delta: Offset,
    /// Cumulative displacement since the handler was attached.
    pub abs: Offset,
}

type ScrollCallback = Rc<RefCell<dyn FnMut(&ScrollUpdate)>>;

/// Factory for [`ScrollHandler`]s sharing one configuration.
#[derive(Clone, Debug, Default)]
pub struct InertialScroll {
    config: ScrollConfig,
}

impl InertialScroll {
    pub fn new(config: ScrollConfig) -> Self {
        Self { config }
    }

    pub fn with_inertia(inertia: f64) -> Self {
        Self::new(ScrollConfig::new(inertia))
    }

    pub fn config(&self) -> &ScrollConfig {
        &self.config
    }

    /// Creates a handler that reports to `callback`.
    ///
    /// Every handler owns its own delta, offset and decay loop.
    pub fn attach(
        &self,
        clock: FrameClock,
        callback: impl FnMut(&ScrollUpdate) + 'static,
    ) -> ScrollHandler {
        self.config.warn_if_unusual();
        let callback: ScrollCallback = Rc::new(RefCell::new(callback));
        let state = ScrollState {
            spec: self.config.decay_spec(),
            delta: Offset::ZERO,
            abs: Offset::ZERO,
            prev_position: None,
            decay: DecayLoop::new(clock),
            drags: 0,
            callback: Some(callback),
            outbox: VecDeque::new(),
            delivering: false,
            disposed: false,
        };
        ScrollHandler {
            inner: Rc::new(RefCell::new(state)),
        }
    }
}

struct ScrollState {
    spec: ExponentialDecaySpec,
    delta: Offset,
    abs: Offset,
    prev_position: Option<Point>,
    decay: DecayLoop,
    /// Number of drag steps seen so far.
    drags: u64,
    callback: Option<ScrollCallback>,
    /// Updates not yet handed to the callback, oldest first.
    outbox: VecDeque<ScrollUpdate>,
    delivering: bool,
    disposed: bool,
}

impl ScrollState {
    /// Folds `delta` into `abs` and queues the snapshot for the callback.
    fn notify(&mut self) {
        self.abs += self.delta;
        if self.callback.is_some() {
            self.outbox.push_back(ScrollUpdate {
                delta: self.delta,
                abs: self.abs,
            });
        }
    }
}

/// Pointer-move handler produced by [`InertialScroll::attach`].
pub struct ScrollHandler {
    inner: Rc<RefCell<ScrollState>>,
}

impl ScrollHandler {
    /// Feeds one pointer-move sample.
    pub fn on_pointer_move(&self, event: &PointerEvent) {
        let position = event.position;
        {
            let mut state = self.inner.borrow_mut();
            if state.disposed {
                return;
            }
            event.consume();

            let prev_position = state.prev_position;
            match prev_position {
                Some(prev) if event.buttons.is_only(PointerButton::Primary) => {
                    state.delta = position - prev;
                    state.drags += 1;
                    if state.decay.stop() {
                        log::debug!("drag interrupted decay loop");
                    }
                    state.notify();
                }
                _ => {}
            }
        }
        Self::flush(&self.inner);

        let released = {
            let state = self.inner.borrow();
            !state.disposed && !state.decay.is_running() && event.buttons.is_empty()
        };
        if released {
            Self::start(&self.inner);
        }

        self.inner.borrow_mut().prev_position = Some(position);
    }

    /// Cancels any decay loop and stops reporting. Later events are ignored.
    pub fn dispose(&self) {
        let mut state = self.inner.borrow_mut();
        if state.disposed {
            return;
        }
        state.disposed = true;
        state.decay.stop();
        state.callback = None;
        state.outbox.clear();
        log::debug!("scroll handler disposed at offset {:?}", state.abs);
    }

    pub fn is_disposed(&self) -> bool {
        self.inner.borrow().disposed
    }

    /// Whether a decay frame is currently scheduled.
    pub fn is_animating(&self) -> bool {
        self.inner.borrow().decay.is_running()
    }

    pub fn delta(&self) -> Offset {
        self.inner.borrow().delta
    }

    pub fn abs(&self) -> Offset {
        self.inner.borrow().abs
    }

    fn start(this: &Rc<RefCell<ScrollState>>) {
        let weak = Rc::downgrade(this);
        let mut state = this.borrow_mut();
        let started = state.decay.start(move |frame_time_nanos| {
            if let Some(strong) = weak.upgrade() {
                Self::on_frame(&strong, frame_time_nanos);
            }
        });
        if started {
            log::debug!(
                "decay loop armed with delta {:?} (settles after {:?} frames)",
                state.delta,
                state.spec.frames_to_rest(state.delta)
            );
        }
    }

    /// Hands queued updates to the callback with no borrow held.
    ///
    /// A notification raised from inside the callback is queued and delivered
    /// by the outer call once the callback returns.
    fn flush(this: &Rc<RefCell<ScrollState>>) {
        {
            let mut state = this.borrow_mut();
            if state.delivering {
                return;
            }
            state.delivering = true;
        }
        loop {
            let next = {
                let mut state = this.borrow_mut();
                match (state.callback.clone(), state.outbox.pop_front()) {
                    (Some(callback), Some(update)) => Some((callback, update)),
                    _ => None,
                }
            };
            let Some((callback, update)) = next else {
                break;
            };
            (&mut *callback.borrow_mut())(&update);
        }
        this.borrow_mut().delivering = false;
    }

    fn on_frame(this: &Rc<RefCell<ScrollState>>, frame_time_nanos: u64) {
        let drags = {
            let mut state = this.borrow_mut();
            state.decay.frame_delivered();
            if state.disposed {
                return;
            }
            state.delta = state.spec.next_delta(state.delta);
            log::trace!("decay frame at {frame_time_nanos}ns: delta {:?}", state.delta);
            state.notify();
            state.drags
        };

        Self::flush(this);

        let settled = {
            let state = this.borrow();
            if state.disposed {
                return;
            }
            if state.drags != drags {
                log::debug!("drag during decay frame stopped the loop");
                return;
            }
            state.spec.is_at_rest(state.delta)
        };
        if settled {
            log::debug!("decay loop settled at offset {:?}", this.borrow().abs);
        } else {
            Self::start(this);
        }
    }
}

#[cfg(test)]
#[path = "../tests/inertial_scroll_tests.rs"]
mod tests;
