use crate::FrameCallbackId;
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;

struct FrameCallbackEntry {
    id: FrameCallbackId,
    callback: Option<Box<dyn FnOnce(u64) + 'static>>,
}

/// Ordered list of one-shot frame callbacks.
///
/// `drain` takes the whole batch out before running it, so a callback may
/// register a follow-up (which lands in the next frame) or cancel other
/// entries without tripping over a live borrow.
pub struct FrameCallbackQueue {
    callbacks: RefCell<VecDeque<FrameCallbackEntry>>,
    next_id: Cell<FrameCallbackId>,
}

impl FrameCallbackQueue {
    pub fn new() -> Self {
        Self {
            callbacks: RefCell::new(VecDeque::new()),
            next_id: Cell::new(1),
        }
    }

    pub fn register(&self, callback: Box<dyn FnOnce(u64) + 'static>) -> FrameCallbackId {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.callbacks.borrow_mut().push_back(FrameCallbackEntry {
            id,
            callback: Some(callback),
        });
        id
    }

    /// Removes a pending callback. Returns false if `id` was not pending.
    pub fn cancel(&self, id: FrameCallbackId) -> bool {
        let mut callbacks = self.callbacks.borrow_mut();
        match callbacks.iter().position(|entry| entry.id == id) {
            Some(index) => {
                callbacks.remove(index);
                true
            }
            None => false,
        }
    }

    /// Runs every callback pending at the time of the call and returns how many ran.
    pub fn drain(&self, frame_time_nanos: u64) -> usize {
        let mut callbacks = self.callbacks.borrow_mut();
        let mut pending: Vec<Box<dyn FnOnce(u64) + 'static>> = Vec::with_capacity(callbacks.len());
        while let Some(mut entry) = callbacks.pop_front() {
            if let Some(callback) = entry.callback.take() {
                pending.push(callback);
            }
        }
        drop(callbacks);
        let count = pending.len();
        for callback in pending {
            callback(frame_time_nanos);
        }
        count
    }

    pub fn is_empty(&self) -> bool {
        self.callbacks.borrow().is_empty()
    }

    pub fn len(&self) -> usize {
        self.callbacks.borrow().len()
    }
}

impl Default for FrameCallbackQueue {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    #[test]
    fn drain_runs_callbacks_in_registration_order() {
        let queue = FrameCallbackQueue::new();
        let log = Rc::new(RefCell::new(Vec::new()));
        for label in ["a", "b", "c"] {
            let log = Rc::clone(&log);
            queue.register(Box::new(move |time| log.borrow_mut().push((label, time))));
        }

        assert_eq!(queue.drain(16), 3);
        assert_eq!(*log.borrow(), vec![("a", 16), ("b", 16), ("c", 16)]);
        assert!(queue.is_empty());
    }

    #[test]
    fn cancel_removes_only_pending_entries() {
        let queue = FrameCallbackQueue::new();
        let first = queue.register(Box::new(|_| {}));
        let second = queue.register(Box::new(|_| panic!("cancelled callback ran")));

        assert!(queue.cancel(second));
        assert!(!queue.cancel(second));
        assert_eq!(queue.len(), 1);

        assert_eq!(queue.drain(0), 1);
        assert!(!queue.cancel(first));
    }

    #[test]
    fn callbacks_registered_during_drain_wait_for_next_frame() {
        let queue = Rc::new(FrameCallbackQueue::new());
        let hits = Rc::new(Cell::new(0));
        {
            let queue_for_cb = Rc::clone(&queue);
            let hits = Rc::clone(&hits);
            queue.register(Box::new(move |_| {
                hits.set(hits.get() + 1);
                let hits = Rc::clone(&hits);
                queue_for_cb.register(Box::new(move |_| hits.set(hits.get() + 10)));
            }));
        }

        queue.drain(1);
        assert_eq!(hits.get(), 1);
        assert_eq!(queue.len(), 1);

        queue.drain(2);
        assert_eq!(hits.get(), 11);
        assert!(queue.is_empty());
    }

    #[test]
    fn ids_are_never_reused() {
        let queue = FrameCallbackQueue::new();
        let first = queue.register(Box::new(|_| {}));
        queue.drain(0);
        let second = queue.register(Box::new(|_| {}));
        assert_ne!(first, second);
    }
}
