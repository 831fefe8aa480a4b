use crate::platform::FrameScheduler;
use crate::FrameCallbackId;
use std::rc::Rc;

#[derive(Clone)]
pub struct FrameClock {
    scheduler: Rc<dyn FrameScheduler>,
}

impl FrameClock {
    pub fn new(scheduler: Rc<dyn FrameScheduler>) -> Self {
        Self { scheduler }
    }

    pub fn with_frame_nanos(
        &self,
        callback: impl FnOnce(u64) + 'static,
    ) -> FrameCallbackRegistration {
        let scheduler = Rc::clone(&self.scheduler);
        match scheduler.request_frame(Box::new(callback)) {
            Some(id) => FrameCallbackRegistration::new(scheduler, id),
            None => {
                log::debug!("frame scheduler refused a callback request");
                FrameCallbackRegistration::inactive(scheduler)
            }
        }
    }
}

/// Handle to a pending frame callback.
///
/// Cancels the request on [`cancel`](Self::cancel) or drop. Dropping a
/// handle whose callback already ran is harmless.
pub struct FrameCallbackRegistration {
    scheduler: Rc<dyn FrameScheduler>,
    id: Option<FrameCallbackId>,
}

impl FrameCallbackRegistration {
    fn new(scheduler: Rc<dyn FrameScheduler>, id: FrameCallbackId) -> Self {
        Self {
            scheduler,
            id: Some(id),
        }
    }

    fn inactive(scheduler: Rc<dyn FrameScheduler>) -> Self {
        Self {
            scheduler,
            id: None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.id.is_some()
    }

    pub fn cancel(mut self) {
        if let Some(id) = self.id.take() {
            self.scheduler.cancel_frame(id);
        }
    }
}

impl Drop for FrameCallbackRegistration {
    fn drop(&mut self) {
        if let Some(id) = self.id.take() {
            self.scheduler.cancel_frame(id);
        }
    }
}
