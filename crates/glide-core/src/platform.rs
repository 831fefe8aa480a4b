//! Platform abstraction for frame scheduling.
//!
//! This trait lets Glide delegate the repaint cadence to the host platform
//! without depending on a particular event loop.

use crate::FrameCallbackId;

/// Schedules frame callbacks on behalf of Glide.
///
/// Callbacks run once, on the host's next frame, with the frame time in
/// nanoseconds. Implementations are single-threaded: requests, cancellation
/// and delivery all happen on the thread that owns the scheduler.
pub trait FrameScheduler {
    /// Request that `callback` runs before the next repaint.
    ///
    /// Returns `None` when the host can no longer deliver frames.
    fn request_frame(&self, callback: Box<dyn FnOnce(u64) + 'static>) -> Option<FrameCallbackId>;

    /// Cancel a pending request. Unknown or already delivered ids are ignored.
    fn cancel_frame(&self, id: FrameCallbackId);
}
