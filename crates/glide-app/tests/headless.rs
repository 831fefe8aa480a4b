//! Drives the page wiring without a browser: a manual frame scheduler stands
//! in for `requestAnimationFrame` and styles are collected instead of written.

use glide_app::{AppLauncher, ChildTransform, ScrollStyle};
use glide_core::{FrameClock, ManualFrameScheduler};
use glide_foundation::{PointerButton, PointerButtons, PointerEvent, ScrollHandler};
use glide_ui_graphics::Point;
use std::cell::RefCell;
use std::rc::Rc;

const FRAME_NANOS: u64 = 16_666_667;

struct Page {
    scheduler: Rc<ManualFrameScheduler>,
    handler: ScrollHandler,
    styles: Rc<RefCell<Vec<ScrollStyle>>>,
}

fn mount(launcher: AppLauncher) -> Page {
    let _ = env_logger::builder().is_test(true).try_init();

    let settings = launcher.settings().clone();
    settings.validate().expect("valid settings");

    let scheduler = Rc::new(ManualFrameScheduler::new());
    let styles = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&styles);
    let handler = settings.attach(FrameClock::new(scheduler.clone()), move |style| {
        sink.borrow_mut().push(style.clone())
    });
    Page {
        scheduler,
        handler,
        styles,
    }
}

fn mouse(x: f64, y: f64, pressed: bool) -> PointerEvent {
    let buttons = if pressed {
        PointerButtons::NONE.with(PointerButton::Primary)
    } else {
        PointerButtons::NONE
    };
    PointerEvent::new(Point::new(x, y), buttons)
}

#[test]
fn drag_and_release_pans_container_left() {
    let page = mount(AppLauncher::new());
    page.handler.on_pointer_move(&mouse(0.0, 0.0, true));
    page.handler.on_pointer_move(&mouse(100.0, 30.0, true));
    page.handler.on_pointer_move(&mouse(100.0, 30.0, false));

    page.scheduler.drain_frame_callbacks(FRAME_NANOS);
    page.scheduler.drain_frame_callbacks(2 * FRAME_NANOS);

    let styles = page.styles.borrow();
    assert_eq!(styles.len(), 3);
    assert_eq!(styles[0].left, "100px");
    let second: f64 = styles[1].left.trim_end_matches("px").parse().unwrap();
    let third: f64 = styles[2].left.trim_end_matches("px").parse().unwrap();
    assert!((second - 195.0).abs() < 1e-9);
    assert!((third - 285.25).abs() < 1e-9);
    assert!(styles.iter().all(|style| style.child_transform.is_empty()));
}

#[test]
fn released_pan_eventually_settles() {
    let page = mount(AppLauncher::new().with_inertia(0.8));
    page.handler.on_pointer_move(&mouse(0.0, 0.0, true));
    page.handler.on_pointer_move(&mouse(-40.0, 0.0, true));
    page.handler.on_pointer_move(&mouse(-40.0, 0.0, false));

    let mut frame = 0;
    while page.scheduler.has_frame_callbacks() {
        frame += 1;
        page.scheduler.drain_frame_callbacks(frame * FRAME_NANOS);
        assert!(frame < 1_000, "decay loop never settled");
    }

    let final_left: f64 = page
        .styles
        .borrow()
        .last()
        .unwrap()
        .left
        .trim_end_matches("px")
        .parse()
        .unwrap();
    // -40 plus the geometric tail -40 * 0.8 / 0.2, short of the last sub-threshold frames.
    assert!((final_left - -200.0).abs() < 0.1, "settled at {final_left}");
}

#[test]
fn enabled_child_transforms_follow_abs() {
    let page = mount(
        AppLauncher::new()
            .with_child_transform(ChildTransform::RotateX)
            .with_child_transform(ChildTransform::RotateY),
    );
    page.handler.on_pointer_move(&mouse(0.0, 0.0, true));
    page.handler.on_pointer_move(&mouse(20.0, 10.0, true));

    let styles = page.styles.borrow();
    assert_eq!(styles[0].child_transform, "rotateX(10deg) rotateY(20deg)");
}
