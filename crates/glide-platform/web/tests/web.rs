#![cfg(target_arch = "wasm32")]

use glide_core::{FrameClock, FrameScheduler};
use glide_foundation::PointerButton;
use glide_platform_web::{RafScheduler, WebPlatform};
use glide_ui_graphics::Point;
use std::rc::Rc;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn mouse_event_converts_client_position_and_buttons() {
    let init = web_sys::MouseEventInit::new();
    init.set_client_x(30);
    init.set_client_y(45);
    init.set_buttons(1);
    let dom_event =
        web_sys::MouseEvent::new_with_mouse_event_init_dict("mousemove", &init).unwrap();

    let event = WebPlatform::new().mouse_event(&dom_event);
    assert_eq!(event.position, Point::new(30.0, 45.0));
    assert!(event.buttons.is_only(PointerButton::Primary));
}

#[wasm_bindgen_test]
fn cancelling_last_callback_withdraws_browser_request() {
    let scheduler = Rc::new(RafScheduler::new().unwrap());
    let id = scheduler
        .request_frame(Box::new(|_| panic!("cancelled")))
        .expect("frame requested");
    assert!(scheduler.is_requested());
    assert_eq!(scheduler.pending_frame_count(), 1);

    scheduler.cancel_frame(id);
    assert!(!scheduler.is_requested());
    assert_eq!(scheduler.pending_frame_count(), 0);
}

#[wasm_bindgen_test]
fn registrations_share_one_browser_request() {
    let scheduler = Rc::new(RafScheduler::new().unwrap());
    let clock = FrameClock::new(scheduler.clone());
    let first = clock.with_frame_nanos(|_| {});
    let second = clock.with_frame_nanos(|_| {});
    assert_eq!(scheduler.pending_frame_count(), 2);

    first.cancel();
    assert!(scheduler.is_requested());
    second.cancel();
    assert!(!scheduler.is_requested());
}
