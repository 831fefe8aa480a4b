//! Lifecycle of the single repeating frame callback behind a released pan.

use glide_core::{FrameCallbackRegistration, FrameClock};

/// Idle/Running controller for one pending frame callback.
///
/// Holds at most one registration. [`start`](Self::start) while Running is a
/// no-op, so a previously requested frame can never be orphaned.
pub struct DecayLoop {
    clock: FrameClock,
    registration: Option<FrameCallbackRegistration>,
}

impl DecayLoop {
    pub fn new(clock: FrameClock) -> Self {
        Self {
            clock,
            registration: None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.registration
            .as_ref()
            .is_some_and(FrameCallbackRegistration::is_active)
    }

    /// Schedules `on_frame` for the next repaint.
    ///
    /// Returns false if the loop was already running or the host refused the request.
    pub fn start(&mut self, on_frame: impl FnOnce(u64) + 'static) -> bool {
        if self.is_running() {
            return false;
        }
        let registration = self.clock.with_frame_nanos(on_frame);
        if registration.is_active() {
            self.registration = Some(registration);
            true
        } else {
            self.registration = None;
            false
        }
    }

    /// Cancels the pending frame, if any. Returns whether the loop was running.
    pub fn stop(&mut self) -> bool {
        match self.registration.take() {
            Some(registration) => {
                let was_running = registration.is_active();
                registration.cancel();
                was_running
            }
            None => false,
        }
    }

    /// Forgets the registration whose callback is currently being delivered.
    pub(crate) fn frame_delivered(&mut self) {
        self.registration = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glide_core::ManualFrameScheduler;
    use std::cell::Cell;
    use std::rc::Rc;

    fn decay_loop() -> (Rc<ManualFrameScheduler>, DecayLoop) {
        let scheduler = Rc::new(ManualFrameScheduler::new());
        let clock = FrameClock::new(scheduler.clone());
        (scheduler, DecayLoop::new(clock))
    }

    #[test]
    fn stop_on_idle_is_a_no_op() {
        let (scheduler, mut decay) = decay_loop();
        assert!(!decay.stop());
        assert!(!decay.stop());
        assert!(!decay.is_running());
        assert_eq!(scheduler.pending_frame_count(), 0);
    }

    #[test]
    fn start_while_running_keeps_the_first_request() {
        let (scheduler, mut decay) = decay_loop();
        let hits = Rc::new(Cell::new(0));

        let first = Rc::clone(&hits);
        assert!(decay.start(move |_| first.set(first.get() + 1)));
        assert!(!decay.start(|_| panic!("second start must not schedule")));
        assert_eq!(scheduler.pending_frame_count(), 1);

        scheduler.drain_frame_callbacks(0);
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn stop_cancels_the_pending_frame() {
        let (scheduler, mut decay) = decay_loop();
        decay.start(|_| panic!("stopped loop must not fire"));
        assert!(decay.is_running());

        assert!(decay.stop());
        assert!(!decay.is_running());
        assert_eq!(scheduler.pending_frame_count(), 0);
        scheduler.drain_frame_callbacks(0);
    }
}
