use crate::frame_callbacks::FrameCallbackQueue;
use crate::platform::FrameScheduler;
use crate::FrameCallbackId;

/// Frame scheduler driven explicitly by its owner.
///
/// Used by tests and headless hosts: nothing runs until
/// [`drain_frame_callbacks`](Self::drain_frame_callbacks) is called.
#[derive(Default)]
pub struct ManualFrameScheduler {
    callbacks: FrameCallbackQueue,
}

impl ManualFrameScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs one frame worth of callbacks and returns how many ran.
    pub fn drain_frame_callbacks(&self, frame_time_nanos: u64) -> usize {
        self.callbacks.drain(frame_time_nanos)
    }

    pub fn has_frame_callbacks(&self) -> bool {
        !self.callbacks.is_empty()
    }

    pub fn pending_frame_count(&self) -> usize {
        self.callbacks.len()
    }
}

impl FrameScheduler for ManualFrameScheduler {
    fn request_frame(&self, callback: Box<dyn FnOnce(u64) + 'static>) -> Option<FrameCallbackId> {
        Some(self.callbacks.register(callback))
    }

    fn cancel_frame(&self, id: FrameCallbackId) {
        self.callbacks.cancel(id);
    }
}
