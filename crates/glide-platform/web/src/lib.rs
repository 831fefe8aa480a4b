//! Web platform adapter for Glide.
//!
//! Converts DOM mouse events into [`PointerEvent`]s and drives frame
//! callbacks from `requestAnimationFrame`.

mod raf_scheduler;

pub use raf_scheduler::RafScheduler;

use glide_foundation::{PointerButtons, PointerEvent};
use glide_ui_graphics::Point;

#[derive(Clone, Copy, Debug, Default)]
pub struct WebPlatform;

impl WebPlatform {
    pub fn new() -> Self {
        Self
    }

    pub fn pointer_position(&self, client_x: f64, client_y: f64) -> Point {
        // clientX/clientY are CSS pixels relative to the viewport, which is
        // the space the container's `left` offset is expressed in.
        Point::new(client_x, client_y)
    }

    /// Builds a pointer event from raw `MouseEvent` fields.
    ///
    /// A `buttons` mask with bits beyond the five defined buttons saturates,
    /// so it still reads as neither "primary only" nor "released".
    pub fn pointer_event(&self, client_x: f64, client_y: f64, buttons: u16) -> PointerEvent {
        let bits = u8::try_from(buttons).unwrap_or(u8::MAX);
        PointerEvent::new(
            self.pointer_position(client_x, client_y),
            PointerButtons::from_bits(bits),
        )
    }

    pub fn mouse_event(&self, event: &web_sys::MouseEvent) -> PointerEvent {
        self.pointer_event(
            event.client_x() as f64,
            event.client_y() as f64,
            event.buttons(),
        )
    }
}
